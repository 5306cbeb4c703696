//! Command line arguments shared by the binaries.

use std::path::PathBuf;

use clap::{Args, Parser};
use factor_edit::{Edge, Factor, Key, RotationInput};

const ROTATION_HELP: &str = "\
Rotation modes:
  <FROM> <TO>
      Loop closure with a null rotation.
  <FROM> <TO> <YAW> <PITCH> <ROLL>
      Rotation given by yaw, pitch and roll angles in radians.
  <FROM> <TO> quat <W> <X> <Y> <Z>
      Rotation given by the quaternion coordinates w, x, y, z.
  <FROM> <TO> axis <ANGLE> <X> <Y> <Z>
      Rotation by ANGLE radians about the axis x, y, z. The axis does not
      need to be normalized.
  <FROM> <TO> euler <A> <B> <C> [SPEC]
      Euler angles in radians following SPEC (default \"szyx\", Tait-Bryan
      angles). SPEC is 's' (static) or 'r' (rotating) followed by three
      axes, e.g. \"rzxz\".";

#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// Path to the setting file. Defaults to $FACTOR_EDIT_CONFIG_PATH.
    #[arg(short, long, value_name = "PATH")]
    pub config_path: Option<PathBuf>,
    /// Namespace of relative service names. Overrides the setting file.
    #[arg(long)]
    pub namespace: Option<String>,
}

/// Add a loop closure between two pose graph keys after confirming it
/// in the visualizer.
#[derive(Parser, Debug)]
#[command(name = "add_factor", after_help = ROTATION_HELP)]
pub struct AddFactorArgs {
    /// Key the loop closure starts from.
    pub from: Key,
    /// Key the loop closure ends at.
    pub to: Key,
    /// Optional rotation, see the modes below.
    #[arg(value_name = "ROTATION", allow_negative_numbers = true)]
    pub rotation: Vec<String>,
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl AddFactorArgs {
    pub fn edge(&self) -> Edge {
        Edge::new(self.from, self.to)
    }

    pub fn factor(&self) -> Result<Factor, factor_edit::Error> {
        let rotation = RotationInput::from_args(&self.rotation)?.to_unit_quaternion()?;
        Ok(Factor::new(self.edge(), rotation))
    }
}

/// Remove the factor between two pose graph keys after confirming it
/// in the visualizer.
#[derive(Parser, Debug)]
#[command(name = "remove_factor")]
pub struct RemoveFactorArgs {
    /// Key the factor starts from.
    pub from: Key,
    /// Key the factor ends at.
    pub to: Key,
    #[command(flatten)]
    pub config: ConfigArgs,
}

impl RemoveFactorArgs {
    pub fn edge(&self) -> Edge {
        Edge::new(self.from, self.to)
    }
}
