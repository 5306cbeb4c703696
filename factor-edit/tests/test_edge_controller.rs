use std::io::Cursor;

use factor_edit::{
    Console, DummyEdgeHighlighter, DummyFactorGraph, Edge, EdgeController, Error, Factor,
    FactorGraph, FactorGraphRequest, Outcome, StdConsole,
};

type TestConsole = StdConsole<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    StdConsole::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output<H, G>(controller: &EdgeController<H, G, TestConsole>) -> String {
    String::from_utf8(controller.console().writer().clone()).unwrap()
}

struct UnreachableFactorGraph;

impl FactorGraph for UnreachableFactorGraph {
    fn add_factor(&self, _: &Factor, _: bool) -> Result<bool, Error> {
        Err(Error::Connection {
            message: "service is gone".to_owned(),
        })
    }

    fn remove_factor(&self, _: Edge, _: bool) -> Result<bool, Error> {
        Err(Error::Connection {
            message: "service is gone".to_owned(),
        })
    }
}

/// Behaves like an operator pressing Ctrl-C at the first prompt.
#[derive(Debug, Default)]
struct InterruptedConsole {
    prompts: Vec<String>,
}

impl Console for InterruptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, Error> {
        self.prompts.push(prompt.to_owned());
        Err(Error::Canceled {
            message: "interrupted at the prompt".to_owned(),
        })
    }

    fn write_line(&mut self, _: &str) -> Result<(), Error> {
        Ok(())
    }
}

#[test]
fn test_add_null_rotation_confirmed() {
    let highlighter = DummyEdgeHighlighter::new();
    let graph = DummyFactorGraph::new();
    let factor = Factor::null(Edge::new(3, 7));
    let mut controller = EdgeController::new(&highlighter, &graph, console("y\n"));

    assert_eq!(controller.add_factor(&factor).unwrap(), Outcome::Committed);

    assert_eq!(
        graph.requests(),
        vec![FactorGraphRequest::Add {
            factor,
            commit: true
        }]
    );
    assert_eq!(factor.quaternion_wxyz(), [1.0, 0.0, 0.0, 0.0]);
    assert_eq!(
        highlighter.requests(),
        vec![(Edge::new(3, 7), true), (Edge::new(3, 7), false)]
    );
    assert!(output(&controller)
        .ends_with("Successfully added a factor between 3 and 7 to the graph.\n"));
}

#[test]
fn test_add_declined() {
    let highlighter = DummyEdgeHighlighter::new();
    let graph = DummyFactorGraph::new();
    let mut controller = EdgeController::new(&highlighter, &graph, console("n\n"));

    let outcome = controller
        .add_factor(&Factor::null(Edge::new(3, 7)))
        .unwrap();

    assert_eq!(outcome, Outcome::Aborted);
    assert!(graph.requests().is_empty());
    assert_eq!(
        highlighter.requests(),
        vec![(Edge::new(3, 7), true), (Edge::new(3, 7), false)]
    );
    assert!(output(&controller).ends_with("Aborted.\n"));
}

#[test]
fn test_remove_highlight_refused() {
    let highlighter = DummyEdgeHighlighter::with_accept(false);
    let graph = DummyFactorGraph::new();
    let mut controller = EdgeController::new(&highlighter, &graph, console("y\n"));

    let e = controller.remove_factor(Edge::new(1, 2)).unwrap_err();

    assert!(matches!(e, Error::VisualizationFailed { from: 1, to: 2 }));
    assert!(e.to_string().contains("keys 1 and 2"));
    assert!(graph.requests().is_empty());
    assert_eq!(highlighter.requests(), vec![(Edge::new(1, 2), true)]);
    // no prompt was shown
    assert_eq!(output(&controller), "");
}

#[test]
fn test_remove_confirmed() {
    let highlighter = DummyEdgeHighlighter::new();
    let graph = DummyFactorGraph::new();
    let mut controller = EdgeController::new(&highlighter, &graph, console("what?\nYes\n"));

    assert_eq!(
        controller.remove_factor(Edge::new(4, 9)).unwrap(),
        Outcome::Committed
    );
    assert_eq!(
        graph.requests(),
        vec![FactorGraphRequest::Remove {
            edge: Edge::new(4, 9),
            commit: true
        }]
    );
    let out = output(&controller);
    assert!(out.contains("Do you confirm the removal? (y/n): "));
    assert!(out.contains("Input yes or no.\n"));
    assert!(out.ends_with("Successfully removed a factor between 4 and 9 from the graph.\n"));
}

#[test]
fn test_commit_refused_still_clears() {
    let highlighter = DummyEdgeHighlighter::new();
    let graph = DummyFactorGraph::with_accept(false);
    let mut controller = EdgeController::new(&highlighter, &graph, console("yes\n"));

    let e = controller
        .add_factor(&Factor::null(Edge::new(5, 6)))
        .unwrap_err();

    assert!(matches!(
        e,
        Error::CommitFailed {
            action: "add",
            from: 5,
            to: 6
        }
    ));
    assert_eq!(graph.requests().len(), 1);
    assert_eq!(
        highlighter.requests(),
        vec![(Edge::new(5, 6), true), (Edge::new(5, 6), false)]
    );
    assert!(!output(&controller).contains("Successfully"));
}

#[test]
fn test_transport_fault_clears_once() {
    let highlighter = DummyEdgeHighlighter::new();
    let mut controller =
        EdgeController::new(&highlighter, UnreachableFactorGraph, console("y\n"));

    let e = controller.remove_factor(Edge::new(8, 2)).unwrap_err();

    assert!(matches!(e, Error::Connection { .. }));
    assert_eq!(
        highlighter.requests(),
        vec![(Edge::new(8, 2), true), (Edge::new(8, 2), false)]
    );
}

#[test]
fn test_end_of_input_clears_once() {
    let highlighter = DummyEdgeHighlighter::new();
    let graph = DummyFactorGraph::new();
    let mut controller = EdgeController::new(&highlighter, &graph, console("perhaps\n"));

    let e = controller
        .add_factor(&Factor::null(Edge::new(1, 3)))
        .unwrap_err();

    assert!(matches!(e, Error::Io(_)));
    assert!(graph.requests().is_empty());
    assert_eq!(
        highlighter.requests(),
        vec![(Edge::new(1, 3), true), (Edge::new(1, 3), false)]
    );
}

#[test]
fn test_interrupted_prompt_clears_once() {
    let highlighter = DummyEdgeHighlighter::new();
    let graph = DummyFactorGraph::new();
    let mut controller =
        EdgeController::new(&highlighter, &graph, InterruptedConsole::default());

    let e = controller.remove_factor(Edge::new(6, 11)).unwrap_err();

    assert!(matches!(e, Error::Canceled { .. }));
    assert_eq!(controller.console().prompts.len(), 1);
    assert!(graph.requests().is_empty());
    assert_eq!(
        highlighter.requests(),
        vec![(Edge::new(6, 11), true), (Edge::new(6, 11), false)]
    );
}
