use std::sync::Mutex;

use crate::{
    error::Error,
    traits::FactorGraph,
    types::{Edge, Factor},
};

#[derive(Debug, Clone, PartialEq)]
pub enum FactorGraphRequest {
    Add { factor: Factor, commit: bool },
    Remove { edge: Edge, commit: bool },
}

/// Dummy FactorGraph for debug or tests.
#[derive(Debug)]
pub struct DummyFactorGraph {
    pub accept: bool,
    pub requests: Mutex<Vec<FactorGraphRequest>>,
}

impl DummyFactorGraph {
    pub fn new() -> Self {
        Self::with_accept(true)
    }

    pub fn with_accept(accept: bool) -> Self {
        Self {
            accept,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<FactorGraphRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for DummyFactorGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl FactorGraph for DummyFactorGraph {
    fn add_factor(&self, factor: &Factor, commit: bool) -> Result<bool, Error> {
        self.requests.lock().unwrap().push(FactorGraphRequest::Add {
            factor: *factor,
            commit,
        });
        Ok(self.accept)
    }

    fn remove_factor(&self, edge: Edge, commit: bool) -> Result<bool, Error> {
        self.requests
            .lock()
            .unwrap()
            .push(FactorGraphRequest::Remove { edge, commit });
        Ok(self.accept)
    }
}
