use auto_impl::auto_impl;

use crate::{error::Result, types::Edge};

/// Remote visualizer that can highlight a candidate edge of the pose graph.
#[auto_impl(&, Box, Arc)]
pub trait EdgeHighlighter {
    /// Turns the highlight of `edge` on or off.
    ///
    /// Returns `Ok(false)` when the service answered but refused, e.g. because
    /// one of the keys does not exist. Transport faults are errors.
    fn highlight_edge(&self, edge: Edge, enable: bool) -> Result<bool>;
}
