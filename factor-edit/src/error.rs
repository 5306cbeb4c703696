use std::num::ParseFloatError;

use thiserror::Error;

use crate::Key;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("factor-edit: Unknown argument: {:?}", .0)]
    UnknownRotationMode(String),
    #[error("factor-edit: Unexpected number of rotation arguments ({})", .0)]
    InvalidArgumentCount(usize),
    #[error("factor-edit: Invalid number {:?} ({})", .0, .1)]
    InvalidNumber(String, #[source] ParseFloatError),
    #[error("factor-edit: Number must be finite, got {:?}", .0)]
    NonFiniteNumber(String),
    #[error("factor-edit: Rotation could not be represented by a finite unit quaternion")]
    NonFiniteRotation,
    #[error("factor-edit: Invalid Euler angle convention {:?}", .0)]
    InvalidEulerSpec(String),
    #[error("factor-edit: Rotation axis must have a non-zero length")]
    ZeroAxis,
    #[error("factor-edit: Quaternion must have a non-zero norm")]
    ZeroQuaternion,
    #[error(
        "factor-edit: The factor between keys {from} and {to} could not be visualized. Make sure the keys exist."
    )]
    VisualizationFailed { from: Key, to: Key },
    #[error("factor-edit: An error occurred while trying to {action} a factor between {from} and {to}.")]
    CommitFailed {
        action: &'static str,
        from: Key,
        to: Key,
    },
    #[error("factor-edit: Connection error : {}", message)]
    Connection { message: String },
    #[error("factor-edit: Canceled : {}", message)]
    Canceled { message: String },
    #[error("factor-edit: io: {}", .0)]
    Io(#[from] std::io::Error),
    #[error("factor-edit: Other: {:?}", .0)]
    Other(#[from] anyhow::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
