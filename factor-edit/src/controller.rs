use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    prompt::{Console, ask},
    traits::{EdgeHighlighter, FactorGraph},
    types::{Edge, Factor},
};

/// How an interaction ended when no error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    Aborted,
}

#[derive(Debug, Clone, Copy)]
enum Mutation<'a> {
    Add(&'a Factor),
    Remove(Edge),
}

impl Mutation<'_> {
    fn edge(&self) -> Edge {
        match self {
            Self::Add(factor) => factor.edge,
            Self::Remove(edge) => *edge,
        }
    }

    fn action(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove(_) => "remove",
        }
    }

    fn question(&self) -> &'static str {
        match self {
            Self::Add(_) => {
                "The factor to be added to the factor graph is now visualized.\nDo you confirm this loop closure?"
            }
            Self::Remove(_) => {
                "The factor to be removed from the factor graph is now visualized.\nDo you confirm the removal?"
            }
        }
    }

    fn success_message(&self) -> String {
        let edge = self.edge();
        match self {
            Self::Add(_) => format!(
                "Successfully added a factor between {} and {} to the graph.",
                edge.from, edge.to
            ),
            Self::Remove(_) => format!(
                "Successfully removed a factor between {} and {} from the graph.",
                edge.from, edge.to
            ),
        }
    }

    fn commit<G>(&self, graph: &G) -> Result<bool>
    where
        G: FactorGraph + ?Sized,
    {
        match self {
            Self::Add(factor) => graph.add_factor(factor, true),
            Self::Remove(edge) => graph.remove_factor(*edge, true),
        }
    }
}

/// A highlight that was accepted by the visualizer.
///
/// It is cleared exactly once: by [`HighlightGuard::clear`] or, if the
/// interaction is left early, when the guard is dropped.
struct HighlightGuard<'a, H>
where
    H: EdgeHighlighter + ?Sized,
{
    highlighter: &'a H,
    edge: Edge,
    active: bool,
}

impl<'a, H> HighlightGuard<'a, H>
where
    H: EdgeHighlighter + ?Sized,
{
    /// Returns `None` if the visualizer refused the highlight.
    fn set(highlighter: &'a H, edge: Edge) -> Result<Option<Self>> {
        debug!(%edge, "requesting highlight");
        if !highlighter.highlight_edge(edge, true)? {
            return Ok(None);
        }
        Ok(Some(Self {
            highlighter,
            edge,
            active: true,
        }))
    }

    fn clear(mut self) -> Result<()> {
        self.active = false;
        self.request_clear()
    }

    fn request_clear(&self) -> Result<()> {
        debug!(edge = %self.edge, "clearing highlight");
        if !self.highlighter.highlight_edge(self.edge, false)? {
            warn!(edge = %self.edge, "visualizer refused to clear the highlight");
        }
        Ok(())
    }
}

impl<H> Drop for HighlightGuard<'_, H>
where
    H: EdgeHighlighter + ?Sized,
{
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(e) = self.request_clear() {
                warn!(edge = %self.edge, "failed to clear the highlight: {e}");
            }
        }
    }
}

/// Drives one manual edit of the factor graph:
/// highlight, confirm, commit or abort, then clear the highlight.
#[derive(Debug)]
pub struct EdgeController<H, G, C> {
    highlighter: H,
    graph: G,
    console: C,
}

impl<H, G, C> EdgeController<H, G, C> {
    pub fn new(highlighter: H, graph: G, console: C) -> Self {
        Self {
            highlighter,
            graph,
            console,
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }
}

impl<H, G, C> EdgeController<H, G, C>
where
    H: EdgeHighlighter,
    G: FactorGraph,
    C: Console,
{
    /// Adds `factor` to the graph after the operator confirmed it.
    pub fn add_factor(&mut self, factor: &Factor) -> Result<Outcome> {
        self.run(Mutation::Add(factor))
    }

    /// Removes the factor on `edge` after the operator confirmed it.
    pub fn remove_factor(&mut self, edge: Edge) -> Result<Outcome> {
        self.run(Mutation::Remove(edge))
    }

    fn run(&mut self, mutation: Mutation<'_>) -> Result<Outcome> {
        let edge = mutation.edge();
        let Some(highlight) = HighlightGuard::set(&self.highlighter, edge)? else {
            return Err(Error::VisualizationFailed {
                from: edge.from,
                to: edge.to,
            });
        };
        info!(%edge, "edge highlighted, waiting for confirmation");

        if !ask(&mut self.console, mutation.question())? {
            info!(%edge, "declined by operator");
            self.console.write_line("Aborted.")?;
            highlight.clear()?;
            return Ok(Outcome::Aborted);
        }

        let committed = mutation.commit(&self.graph)?;
        highlight.clear()?;
        if !committed {
            return Err(Error::CommitFailed {
                action: mutation.action(),
                from: edge.from,
                to: edge.to,
            });
        }
        info!(%edge, action = mutation.action(), "committed");
        self.console.write_line(&mutation.success_message())?;
        Ok(Outcome::Committed)
    }
}
