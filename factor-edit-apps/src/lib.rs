pub mod args;
mod config;
mod error;
pub mod utils;

pub use crate::{config::*, error::*};
