use std::sync::Mutex;

use crate::{error::Error, traits::EdgeHighlighter, types::Edge};

/// Dummy EdgeHighlighter for debug or tests.
///
/// Every request is recorded; `accept` decides the reported success flag.
#[derive(Debug)]
pub struct DummyEdgeHighlighter {
    pub accept: bool,
    pub requests: Mutex<Vec<(Edge, bool)>>,
}

impl DummyEdgeHighlighter {
    pub fn new() -> Self {
        Self::with_accept(true)
    }

    pub fn with_accept(accept: bool) -> Self {
        Self {
            accept,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(Edge, bool)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for DummyEdgeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeHighlighter for DummyEdgeHighlighter {
    fn highlight_edge(&self, edge: Edge, enable: bool) -> Result<bool, Error> {
        self.requests.lock().unwrap().push((edge, enable));
        Ok(self.accept)
    }
}
