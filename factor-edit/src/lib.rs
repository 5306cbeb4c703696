//! Manual loop closure editing for a remote pose graph.
//!
//! The [`EdgeController`] highlights a candidate edge through an
//! [`EdgeHighlighter`], asks the operator for confirmation on a [`Console`]
//! and only then mutates the [`FactorGraph`]. The highlight is cleared before
//! the controller returns.

mod clients;
mod controller;
mod error;
pub mod prompt;
pub mod rotation;
mod traits;
mod types;

pub use crate::{
    clients::*,
    controller::*,
    error::*,
    prompt::{Console, LineEditorConsole, StdConsole, ask},
    rotation::{EulerConvention, RotationInput},
    traits::*,
    types::*,
};

// re-export
pub use nalgebra::{UnitQuaternion, Vector3};
