//! Lens-distortion correction parameters for one eye of a head-mounted display.
//!
//! A `DistortionParameters` value holds exactly one of three representations,
//! selected by the display configuration:
//!
//! * `MonoPointSamples`: explicit sample meshes shared by all color channels.
//! * `RgbPointSamples`: explicit sample meshes, one per color channel.
//! * `RgbSymmetricPolynomials`: a radial polynomial per color channel.
//!
//! Polynomial parameters are measured in a space scaled by the distance scale
//! `D`: the texture range 0-1 spans `D[0]` unit radii horizontally and `D[1]`
//! vertically, so lenses that stretch one axis more than the other can be
//! described. The first coefficient is the constant term, the second the
//! linear term, and so on. In D-scaled space a point maps as
//!
//! ```text
//! Offset     = Orig - COP
//! NormOffset = Offset / |Offset|
//! Final      = COP + (a0 + a1*|Offset| + a2*|Offset|^2 + ...) * NormOffset
//! ```
//!
//! Scaling the coefficients and `D` together has no effect on the result.

use crate::{DisplayConfiguration, DistortionType, MonoPointMeshDescriptions,
            RgbPointMeshDescriptions};
use std::fmt;

/// Triangle count requested when nothing else asks for more.
const DEFAULT_DESIRED_TRIANGLES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum DistortionKind {
    MonoPointSamples,
    RgbPointSamples,
    RgbSymmetricPolynomials,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct MonoPointSamplesPayload {
    pub meshes: MonoPointMeshDescriptions,
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct RgbPointSamplesPayload {
    pub meshes: RgbPointMeshDescriptions,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct SymmetricPolynomialPayload {
    /// Constant, linear, quadratic, ... for red.
    pub red: Vec<f32>,

    /// Constant, linear, quadratic, ... for green.
    pub green: Vec<f32>,

    /// Constant, linear, quadratic, ... for blue.
    pub blue: Vec<f32>,

    /// (X, Y) location of the center of projection in texture coordinates.
    pub center_of_projection: [f32; 2],

    /// How many unit radii wide and high the 0-1 texture range is.
    pub distance_scale: [f32; 2],
}

impl Default for SymmetricPolynomialPayload {
    /// Identity correction: every channel passes offsets through unchanged.
    fn default() -> SymmetricPolynomialPayload {
        SymmetricPolynomialPayload {
            red: vec![0.0, 1.0],
            green: vec![0.0, 1.0],
            blue: vec![0.0, 1.0],
            center_of_projection: [0.5, 0.5],
            distance_scale: [1.0, 1.0],
        }
    }
}

impl SymmetricPolynomialPayload {
    pub fn coefficients(&self, channel: ColorChannel) -> &[f32] {
        match channel {
            ColorChannel::Red => &self.red,
            ColorChannel::Green => &self.green,
            ColorChannel::Blue => &self.blue,
        }
    }

    /// New distance from the center of projection for a point that was
    /// `offset_magnitude` away from it, in D-scaled units.
    pub fn radial_displacement(&self, channel: ColorChannel, offset_magnitude: f32) -> f32 {
        self.coefficients(channel)
            .iter()
            .rev()
            .fold(0.0, |acc, coefficient| acc * offset_magnitude + coefficient)
    }

    /// Maps a texture coordinate through the polynomial of `channel`.
    pub fn distort(&self, channel: ColorChannel, point: [f32; 2]) -> [f32; 2] {
        let d = self.distance_scale;
        if d[0] == 0.0 || d[1] == 0.0 {
            return point;
        }
        let cop = [self.center_of_projection[0] * d[0], self.center_of_projection[1] * d[1]];
        let offset = [point[0] * d[0] - cop[0], point[1] * d[1] - cop[1]];
        let magnitude = (offset[0] * offset[0] + offset[1] * offset[1]).sqrt();
        if magnitude == 0.0 {
            return self.center_of_projection;
        }
        let scale = self.radial_displacement(channel, magnitude) / magnitude;
        [(cop[0] + offset[0] * scale) / d[0], (cop[1] + offset[1] * scale) / d[1]]
    }
}

/// Parameters of whichever distortion representation is in use.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum DistortionPayload {
    MonoPointSamples(MonoPointSamplesPayload),
    RgbPointSamples(RgbPointSamplesPayload),
    RgbSymmetricPolynomials(SymmetricPolynomialPayload),
}

impl DistortionPayload {
    pub fn kind(&self) -> DistortionKind {
        match *self {
            DistortionPayload::MonoPointSamples(_) => DistortionKind::MonoPointSamples,
            DistortionPayload::RgbPointSamples(_) => DistortionKind::RgbPointSamples,
            DistortionPayload::RgbSymmetricPolynomials(_) => DistortionKind::RgbSymmetricPolynomials,
        }
    }
}

/// Outcome of reading distortion parameters from a display configuration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum ConstructionStatus {
    /// Every field was read from the configuration.
    Populated,

    /// The distortion type was not recognized; the parameters are the defaults.
    UnrecognizedType { name: String },

    /// Polynomials were read but the requested eye does not exist, so the
    /// center of projection kept its default.
    MissingEye { eye: usize, eye_count: usize },
}

impl fmt::Display for ConstructionStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConstructionStatus::Populated => write!(f, "Distortion parameters read from the display configuration"),
            ConstructionStatus::UnrecognizedType { ref name } => {
                write!(f, "Unrecognized distortion correction type ({}), ignoring", name)
            }
            ConstructionStatus::MissingEye { eye, eye_count } => {
                write!(f, "No eye {} in a display with {} eye(s), keeping the default center of projection",
                       eye, eye_count)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct DistortionConstruction {
    pub parameters: DistortionParameters,
    pub status: ConstructionStatus,
}

impl DistortionConstruction {
    pub fn is_populated(&self) -> bool {
        self.status == ConstructionStatus::Populated
    }

    pub fn into_parameters(self) -> DistortionParameters {
        self.parameters
    }

    /// Warns about anything that kept the parameters from being fully read.
    pub fn log_diagnostic(&self) {
        if !self.is_populated() {
            warn!("{}", self.status);
        }
    }
}

/// Distortion correction for one eye, ready for a mesh generator.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct DistortionParameters {
    desired_triangles: usize,
    payload: DistortionPayload,
}

impl Default for DistortionParameters {
    /// Identity symmetric polynomials, i.e. no distortion correction.
    fn default() -> DistortionParameters {
        DistortionParameters {
            desired_triangles: DEFAULT_DESIRED_TRIANGLES,
            payload: DistortionPayload::RgbSymmetricPolynomials(SymmetricPolynomialPayload::default()),
        }
    }
}

impl DistortionParameters {
    /// Reads the parameters for `eye` from `config`.
    ///
    /// Never fails: an unrecognized distortion type is logged and yields the
    /// default parameters. Use `construct` to inspect what happened instead.
    pub fn new<C>(config: &C, eye: usize) -> DistortionParameters
        where C: DisplayConfiguration + ?Sized
    {
        let construction = DistortionParameters::construct(config, eye);
        construction.log_diagnostic();
        construction.parameters
    }

    /// Reads the parameters for `eye` from `config` and reports how complete
    /// the result is. Does not log.
    pub fn construct<C>(config: &C, eye: usize) -> DistortionConstruction
        where C: DisplayConfiguration + ?Sized
    {
        let mut parameters = DistortionParameters::default();
        let status = match config.distortion_type() {
            DistortionType::RgbSymmetricPolynomials => {
                let mut payload = SymmetricPolynomialPayload {
                    red: config.distortion_polynomial_red().to_vec(),
                    green: config.distortion_polynomial_green().to_vec(),
                    blue: config.distortion_polynomial_blue().to_vec(),
                    distance_scale: [config.distortion_distance_scale_x(),
                                     config.distortion_distance_scale_y()],
                    ..SymmetricPolynomialPayload::default()
                };
                let eyes = config.eyes();
                let status = match eyes.get(eye) {
                    Some(eye_config) => {
                        payload.center_of_projection = [eye_config.center_proj_x as f32,
                                                        eye_config.center_proj_y as f32];
                        ConstructionStatus::Populated
                    }
                    None => ConstructionStatus::MissingEye {
                        eye: eye,
                        eye_count: eyes.len(),
                    },
                };
                parameters.payload = DistortionPayload::RgbSymmetricPolynomials(payload);
                status
            }
            DistortionType::MonoPointSamples => {
                parameters.payload = DistortionPayload::MonoPointSamples(MonoPointSamplesPayload {
                    meshes: config.distortion_mono_point_meshes().clone(),
                });
                ConstructionStatus::Populated
            }
            DistortionType::RgbPointSamples => {
                parameters.payload = DistortionPayload::RgbPointSamples(RgbPointSamplesPayload {
                    meshes: config.distortion_rgb_point_meshes().clone(),
                });
                ConstructionStatus::Populated
            }
            DistortionType::Unrecognized => ConstructionStatus::UnrecognizedType {
                name: config.distortion_type_string(),
            },
        };

        DistortionConstruction {
            parameters: parameters,
            status: status,
        }
    }

    /// Same parameters, asking the mesh generator for `count` triangles.
    pub fn with_desired_triangles(mut self, count: usize) -> DistortionParameters {
        self.desired_triangles = count;
        self
    }

    pub fn kind(&self) -> DistortionKind {
        self.payload.kind()
    }

    /// How many triangles the generated mesh should have.
    pub fn desired_triangles(&self) -> usize {
        self.desired_triangles
    }

    pub fn payload(&self) -> &DistortionPayload {
        &self.payload
    }

    pub fn mono_point_samples(&self) -> Option<&MonoPointSamplesPayload> {
        match self.payload {
            DistortionPayload::MonoPointSamples(ref payload) => Some(payload),
            _ => None,
        }
    }

    pub fn rgb_point_samples(&self) -> Option<&RgbPointSamplesPayload> {
        match self.payload {
            DistortionPayload::RgbPointSamples(ref payload) => Some(payload),
            _ => None,
        }
    }

    pub fn symmetric_polynomials(&self) -> Option<&SymmetricPolynomialPayload> {
        match self.payload {
            DistortionPayload::RgbSymmetricPolynomials(ref payload) => Some(payload),
            _ => None,
        }
    }
}
