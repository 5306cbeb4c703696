use std::{
    fmt,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};

use tracing::debug;

use crate::Error;

/// A ROS service client that waits for its service before the first call.
pub struct ServiceCaller<T>
where
    T: rosrust::ServicePair,
{
    service: String,
    wait_timeout: Option<Duration>,
    ready: AtomicBool,
    client: rosrust::Client<T>,
}

impl<T> ServiceCaller<T>
where
    T: rosrust::ServicePair,
    T::Request: fmt::Debug,
    T::Response: fmt::Debug,
{
    /// Creates the client without contacting the service.
    ///
    /// With `wait_timeout = None` the first call is issued without waiting.
    pub fn new(service: &str, wait_timeout: Option<Duration>) -> Result<Self, Error> {
        let client = rosrust::client::<T>(service).map_err(|e| Error::ClientCreation {
            service: service.to_owned(),
            message: e.to_string(),
        })?;
        Ok(Self {
            service: service.to_owned(),
            wait_timeout,
            ready: AtomicBool::new(wait_timeout.is_none()),
            client,
        })
    }

    fn wait_for_service(&self) -> Result<(), Error> {
        if self.ready.load(Ordering::Acquire) {
            return Ok(());
        }
        debug!(service = %self.service, timeout = ?self.wait_timeout, "waiting for service");
        rosrust::wait_for_service(&self.service, self.wait_timeout).map_err(|e| {
            Error::ServiceUnavailable {
                service: self.service.clone(),
                message: e.to_string(),
            }
        })?;
        self.ready.store(true, Ordering::Release);
        Ok(())
    }

    pub fn call(&self, request: &T::Request) -> Result<T::Response, Error> {
        self.wait_for_service()?;
        debug!(service = %self.service, ?request, "calling service");
        let response = self
            .client
            .req(request)
            .map_err(|e| Error::CallFailure {
                service: self.service.clone(),
                message: e.to_string(),
            })?
            .map_err(|message| Error::ServiceError {
                service: self.service.clone(),
                message,
            })?;
        debug!(service = %self.service, ?response, "service responded");
        Ok(response)
    }
}

impl<T> fmt::Debug for ServiceCaller<T>
where
    T: rosrust::ServicePair,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCaller")
            .field("service", &self.service)
            .field("wait_timeout", &self.wait_timeout)
            .finish_non_exhaustive()
    }
}

pub(crate) fn wait_timeout(secs: Option<f64>) -> Option<Duration> {
    secs.map(|secs| Duration::from_secs_f64(secs.max(0.0)))
}
