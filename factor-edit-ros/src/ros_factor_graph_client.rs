use factor_edit::{Edge, Error, Factor, FactorGraph};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    msg,
    rosrust_utils::{ServiceCaller, wait_timeout},
};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct RosFactorGraphClientConfig {
    pub add_factor_service: String,
    pub remove_factor_service: String,
    /// Seconds to wait for a service before its first call. Unset means no wait.
    #[serde(default)]
    pub wait_for_service_timeout_secs: Option<f64>,
}

/// [`FactorGraph`] backed by the SLAM backend's `add_factor`/`remove_factor` services.
#[derive(Debug)]
pub struct RosFactorGraphClient {
    add_factor: ServiceCaller<msg::blam_slam::AddFactor>,
    remove_factor: ServiceCaller<msg::blam_slam::RemoveFactor>,
}

impl RosFactorGraphClient {
    pub fn new(config: &RosFactorGraphClientConfig) -> Result<Self, crate::Error> {
        let timeout = wait_timeout(config.wait_for_service_timeout_secs);
        Ok(Self {
            add_factor: ServiceCaller::new(&config.add_factor_service, timeout)?,
            remove_factor: ServiceCaller::new(&config.remove_factor_service, timeout)?,
        })
    }
}

impl FactorGraph for RosFactorGraphClient {
    fn add_factor(&self, factor: &Factor, commit: bool) -> Result<bool, Error> {
        let [qw, qx, qy, qz] = factor.quaternion_wxyz();
        let response = self.add_factor.call(&msg::blam_slam::AddFactorReq {
            key_from: factor.edge.from,
            key_to: factor.edge.to,
            qw,
            qx,
            qy,
            qz,
            commit,
        })?;
        Ok(response.success)
    }

    fn remove_factor(&self, edge: Edge, commit: bool) -> Result<bool, Error> {
        let response = self.remove_factor.call(&msg::blam_slam::RemoveFactorReq {
            key_from: edge.from,
            key_to: edge.to,
            commit,
        })?;
        Ok(response.success)
    }
}
