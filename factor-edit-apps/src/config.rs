use std::{fs, path::Path};

use factor_edit_ros::{RosEdgeHighlighterConfig, RosFactorGraphClientConfig};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Error;

/// Where the two remote services live.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FactorEditConfig {
    /// Prefix of every service name that does not start with `/`.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Seconds to wait for a service before its first call. Zero disables waiting.
    #[serde(default = "default_wait_for_service_timeout_secs")]
    pub wait_for_service_timeout_secs: f64,
    #[serde(default = "default_highlight_edge_service")]
    pub highlight_edge_service: String,
    #[serde(default = "default_add_factor_service")]
    pub add_factor_service: String,
    #[serde(default = "default_remove_factor_service")]
    pub remove_factor_service: String,
}

fn default_namespace() -> String {
    "/blam".to_owned()
}

fn default_wait_for_service_timeout_secs() -> f64 {
    10.0
}

fn default_highlight_edge_service() -> String {
    "pose_graph_visualizer/highlight_edge".to_owned()
}

fn default_add_factor_service() -> String {
    "blam_slam/add_factor".to_owned()
}

fn default_remove_factor_service() -> String {
    "blam_slam/remove_factor".to_owned()
}

impl Default for FactorEditConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            wait_for_service_timeout_secs: default_wait_for_service_timeout_secs(),
            highlight_edge_service: default_highlight_edge_service(),
            add_factor_service: default_add_factor_service(),
            remove_factor_service: default_remove_factor_service(),
        }
    }
}

/// Joins `name` to `namespace` unless `name` is already absolute.
pub fn resolve_service_name(namespace: &str, name: &str) -> String {
    if name.starts_with('/') {
        name.to_owned()
    } else {
        format!(
            "{}/{}",
            namespace.trim_end_matches('/'),
            name.trim_start_matches('/')
        )
    }
}

impl FactorEditConfig {
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|e| Error::NoFile(path.to_owned(), e))?;
        Self::from_str(&s, path)
    }

    /// Parses `s`; `path` is only used in error messages.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str<P: AsRef<Path>>(s: &str, path: P) -> Result<Self, Error> {
        let config: Self = toml::from_str(s)
            .map_err(|e| Error::TomlParseFailure(path.as_ref().to_owned(), e))?;
        debug!(?config, "loaded config");
        Ok(config)
    }

    fn wait_timeout_secs(&self) -> Option<f64> {
        (self.wait_for_service_timeout_secs > 0.0).then_some(self.wait_for_service_timeout_secs)
    }

    pub fn highlighter_config(&self) -> RosEdgeHighlighterConfig {
        RosEdgeHighlighterConfig {
            highlight_edge_service: resolve_service_name(
                &self.namespace,
                &self.highlight_edge_service,
            ),
            wait_for_service_timeout_secs: self.wait_timeout_secs(),
        }
    }

    pub fn factor_graph_config(&self) -> RosFactorGraphClientConfig {
        RosFactorGraphClientConfig {
            add_factor_service: resolve_service_name(&self.namespace, &self.add_factor_service),
            remove_factor_service: resolve_service_name(
                &self.namespace,
                &self.remove_factor_service,
            ),
            wait_for_service_timeout_secs: self.wait_timeout_secs(),
        }
    }
}
