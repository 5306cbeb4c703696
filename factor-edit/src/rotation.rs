//! Conversion of the supported rotation notations into unit quaternions.

use std::{fmt, str::FromStr};

use nalgebra::{Quaternion, Unit, UnitQuaternion, Vector3};
use tracing::debug;

use crate::error::{Error, Result};

const NORM_EPSILON: f64 = 1e-12;

/// Euler angle convention in the `[sr][xyz]{3}` string form, e.g. `"szyx"`.
///
/// The first character selects static (`s`) or rotating (`r`) axes. The
/// remaining three name the axes in the order the angles are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EulerConvention {
    axes: [usize; 3],
    rotating: bool,
}

impl EulerConvention {
    pub const DEFAULT_SPEC: &'static str = "szyx";

    /// Axis index the sequence is rotated about first, in static form.
    fn first_axis(&self) -> usize {
        self.static_axes()[0]
    }

    /// A rotating-frame sequence equals the reversed static-frame one.
    fn static_axes(&self) -> [usize; 3] {
        if self.rotating {
            [self.axes[2], self.axes[1], self.axes[0]]
        } else {
            self.axes
        }
    }

    fn odd_parity(&self) -> bool {
        let axes = self.static_axes();
        axes[1] != (axes[0] + 1) % 3
    }

    fn repetition(&self) -> bool {
        let axes = self.static_axes();
        axes[0] == axes[2]
    }

    /// Converts three Euler angles (radians) following this convention.
    pub fn to_unit_quaternion(&self, a: f64, b: f64, c: f64) -> UnitQuaternion<f64> {
        const NEXT_AXIS: [usize; 4] = [1, 2, 0, 1];

        let parity = usize::from(self.odd_parity());
        let i = self.first_axis() + 1;
        let j = NEXT_AXIS[i + parity - 1] + 1;
        let k = NEXT_AXIS[i - parity] + 1;

        let (mut ai, mut aj, mut ak) = (a, b, c);
        if self.rotating {
            std::mem::swap(&mut ai, &mut ak);
        }
        if parity == 1 {
            aj = -aj;
        }

        let (si, ci) = (ai / 2.0).sin_cos();
        let (sj, cj) = (aj / 2.0).sin_cos();
        let (sk, ck) = (ak / 2.0).sin_cos();
        let cc = ci * ck;
        let cs = ci * sk;
        let sc = si * ck;
        let ss = si * sk;

        let mut q = [0.0; 4];
        if self.repetition() {
            q[0] = cj * (cc - ss);
            q[i] = cj * (cs + sc);
            q[j] = sj * (cc + ss);
            q[k] = sj * (cs - sc);
        } else {
            q[0] = cj * cc + sj * ss;
            q[i] = cj * sc - sj * cs;
            q[j] = cj * ss + sj * cc;
            q[k] = cj * cs - sj * sc;
        }
        if parity == 1 {
            q[j] = -q[j];
        }
        UnitQuaternion::from_quaternion(Quaternion::new(q[0], q[1], q[2], q[3]))
    }
}

impl Default for EulerConvention {
    fn default() -> Self {
        // szyx
        Self {
            axes: [2, 1, 0],
            rotating: false,
        }
    }
}

impl FromStr for EulerConvention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidEulerSpec(s.to_owned());
        let lower = s.to_ascii_lowercase();
        let mut chars = lower.chars();
        let rotating = match chars.next() {
            Some('s') => false,
            Some('r') => true,
            _ => return Err(invalid()),
        };
        let mut axes = [0; 3];
        for axis in &mut axes {
            *axis = match chars.next() {
                Some('x') => 0,
                Some('y') => 1,
                Some('z') => 2,
                _ => return Err(invalid()),
            };
        }
        if chars.next().is_some() || axes[0] == axes[1] || axes[1] == axes[2] {
            return Err(invalid());
        }
        Ok(Self { axes, rotating })
    }
}

impl fmt::Display for EulerConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [char; 3] = ['x', 'y', 'z'];
        let frame = if self.rotating { 'r' } else { 's' };
        write!(f, "{frame}")?;
        for axis in self.axes {
            write!(f, "{}", NAMES[axis])?;
        }
        Ok(())
    }
}

/// A rotation as typed by the operator, before normalisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RotationInput {
    Identity,
    YawPitchRoll {
        yaw: f64,
        pitch: f64,
        roll: f64,
    },
    Quaternion {
        w: f64,
        x: f64,
        y: f64,
        z: f64,
    },
    /// The axis does not need to be normalised.
    AxisAngle {
        angle: f64,
        axis: Vector3<f64>,
    },
    Euler {
        angles: [f64; 3],
        convention: EulerConvention,
    },
}

fn parse_number(s: &str) -> Result<f64> {
    let value: f64 = s.parse().map_err(|e| Error::InvalidNumber(s.to_owned(), e))?;
    if !value.is_finite() {
        return Err(Error::NonFiniteNumber(s.to_owned()));
    }
    Ok(value)
}

fn parse_numbers<const N: usize>(args: &[String]) -> Result<[f64; N]> {
    let mut values = [0.0; N];
    for (value, arg) in values.iter_mut().zip(args) {
        *value = parse_number(arg)?;
    }
    Ok(values)
}

impl RotationInput {
    /// Parses the arguments that follow the two keys on the command line.
    ///
    /// | Arguments                | Mode                           |
    /// |--------------------------|--------------------------------|
    /// | (none)                   | identity                       |
    /// | `yaw pitch roll`         | yaw, pitch and roll            |
    /// | `quat w x y z`           | quaternion                     |
    /// | `axis angle x y z`       | rotation about an axis         |
    /// | `euler a b c [axes]`     | Euler angles, default `szyx`   |
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        let args: Vec<String> = args.iter().map(|s| s.as_ref().to_owned()).collect();
        let keyword = args.first().map(|s| s.to_lowercase());
        match (args.len(), keyword.as_deref()) {
            (0, _) => Ok(Self::Identity),
            (3, _) => {
                let [yaw, pitch, roll] = parse_numbers::<3>(&args)?;
                Ok(Self::YawPitchRoll { yaw, pitch, roll })
            }
            (4, Some("euler")) => Ok(Self::Euler {
                angles: parse_numbers(&args[1..])?,
                convention: EulerConvention::default(),
            }),
            (5, Some("euler")) => Ok(Self::Euler {
                angles: parse_numbers(&args[1..4])?,
                convention: args[4].parse()?,
            }),
            (5, Some("quat")) => {
                let [w, x, y, z] = parse_numbers::<4>(&args[1..])?;
                Ok(Self::Quaternion { w, x, y, z })
            }
            (5, Some("axis")) => {
                let [angle, x, y, z] = parse_numbers::<4>(&args[1..])?;
                Ok(Self::AxisAngle {
                    angle,
                    axis: Vector3::new(x, y, z),
                })
            }
            (5, _) => Err(Error::UnknownRotationMode(args[0].clone())),
            (n, _) => Err(Error::InvalidArgumentCount(n)),
        }
    }

    pub fn to_unit_quaternion(&self) -> Result<UnitQuaternion<f64>> {
        let rotation = match *self {
            Self::Identity => UnitQuaternion::identity(),
            Self::YawPitchRoll { yaw, pitch, roll } => {
                UnitQuaternion::from_euler_angles(roll, pitch, yaw)
            }
            Self::Quaternion { w, x, y, z } => {
                let q = Quaternion::new(w, x, y, z);
                if q.norm() < NORM_EPSILON {
                    return Err(Error::ZeroQuaternion);
                }
                UnitQuaternion::from_quaternion(q)
            }
            Self::AxisAngle { angle, axis } => {
                let axis = Unit::try_new(axis, NORM_EPSILON).ok_or(Error::ZeroAxis)?;
                let (roll, pitch, yaw) = UnitQuaternion::from_axis_angle(&axis, angle).euler_angles();
                UnitQuaternion::from_euler_angles(roll, pitch, yaw)
            }
            Self::Euler { angles, convention } => {
                convention.to_unit_quaternion(angles[0], angles[1], angles[2])
            }
        };
        // huge finite inputs can still overflow while normalising
        let norm = rotation.quaternion().norm();
        if norm.is_nan() || (norm - 1.0).abs() > 1e-6 {
            return Err(Error::NonFiniteRotation);
        }
        debug!(input = ?self, ?rotation, "converted rotation");
        Ok(rotation)
    }
}
