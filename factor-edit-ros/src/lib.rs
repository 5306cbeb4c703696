//! [`factor_edit`] clients using ROS1 services.

mod error;
pub mod msg;
mod ros_edge_highlighter;
mod ros_factor_graph_client;
pub mod rosrust_utils;

// re-export
pub use rosrust::init;

pub use crate::{error::Error, ros_edge_highlighter::*, ros_factor_graph_client::*};
