use auto_impl::auto_impl;

use crate::{
    error::Result,
    types::{Edge, Factor},
};

/// Remote factor graph that accepts manual loop closures.
#[auto_impl(&, Box, Arc)]
pub trait FactorGraph {
    /// Submits `factor`. Returns the success flag reported by the service.
    fn add_factor(&self, factor: &Factor, commit: bool) -> Result<bool>;

    /// Removes the factor on `edge`. Returns the success flag reported by the service.
    fn remove_factor(&self, edge: Edge, commit: bool) -> Result<bool>;
}
