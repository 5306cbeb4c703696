use factor_edit::{Edge, EdgeHighlighter, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    msg,
    rosrust_utils::{ServiceCaller, wait_timeout},
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RosEdgeHighlighterConfig {
    pub highlight_edge_service: String,
    /// Seconds to wait for the service before the first call. Unset means no wait.
    #[serde(default)]
    pub wait_for_service_timeout_secs: Option<f64>,
}

/// [`EdgeHighlighter`] backed by the pose graph visualizer's `highlight_edge` service.
#[derive(Debug)]
pub struct RosEdgeHighlighter {
    highlight_edge: ServiceCaller<msg::pose_graph_visualizer::HighlightEdge>,
}

impl RosEdgeHighlighter {
    pub fn new(config: &RosEdgeHighlighterConfig) -> Result<Self, crate::Error> {
        Ok(Self {
            highlight_edge: ServiceCaller::new(
                &config.highlight_edge_service,
                wait_timeout(config.wait_for_service_timeout_secs),
            )?,
        })
    }
}

impl EdgeHighlighter for RosEdgeHighlighter {
    fn highlight_edge(&self, edge: Edge, enable: bool) -> Result<bool, Error> {
        let response = self
            .highlight_edge
            .call(&msg::pose_graph_visualizer::HighlightEdgeReq {
                key_from: edge.from,
                key_to: edge.to,
                enable,
            })?;
        Ok(response.success)
    }
}
