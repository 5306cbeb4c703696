use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("factor-edit-ros: Service {} did not become available ({})", service, message)]
    ServiceUnavailable { service: String, message: String },
    #[error("factor-edit-ros: Failed to create client for {} ({})", service, message)]
    ClientCreation { service: String, message: String },
    #[error("factor-edit-ros: Call to {} failed ({})", service, message)]
    CallFailure { service: String, message: String },
    #[error("factor-edit-ros: Service {} returned an error: {}", service, message)]
    ServiceError { service: String, message: String },
}

impl From<Error> for factor_edit::Error {
    fn from(e: Error) -> Self {
        factor_edit::Error::Connection {
            message: e.to_string(),
        }
    }
}
