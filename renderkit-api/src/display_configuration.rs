use crate::{EyeConfiguration, MonoPointMeshDescriptions, RgbPointMeshDescriptions};

/// Kind of distortion correction a display configuration asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum DistortionType {
    RgbSymmetricPolynomials,
    MonoPointSamples,
    RgbPointSamples,
    /// Any type name this crate does not know how to handle.
    Unrecognized,
}

impl DistortionType {
    /// Maps the type name used in display descriptors to a `DistortionType`.
    pub fn from_name(name: &str) -> DistortionType {
        match name {
            "rgb_symmetric_polynomials" => DistortionType::RgbSymmetricPolynomials,
            "mono_point_samples" => DistortionType::MonoPointSamples,
            "rgb_point_samples" => DistortionType::RgbPointSamples,
            _ => DistortionType::Unrecognized,
        }
    }

    pub fn name(&self) -> Option<&'static str> {
        match *self {
            DistortionType::RgbSymmetricPolynomials => Some("rgb_symmetric_polynomials"),
            DistortionType::MonoPointSamples => Some("mono_point_samples"),
            DistortionType::RgbPointSamples => Some("rgb_point_samples"),
            DistortionType::Unrecognized => None,
        }
    }
}

/// Source of the distortion-related values of a parsed display descriptor.
///
/// Parsing the descriptor is up to the implementor; `DistortionParameters`
/// only reads through this trait.
pub trait DisplayConfiguration {
    /// Distortion type exactly as written in the descriptor.
    fn distortion_type_string(&self) -> String;

    /// Parsed distortion type.
    fn distortion_type(&self) -> DistortionType {
        DistortionType::from_name(&self.distortion_type_string())
    }

    /// How many unit radii span the 0-1 texture range horizontally.
    fn distortion_distance_scale_x(&self) -> f32;

    /// How many unit radii span the 0-1 texture range vertically.
    fn distortion_distance_scale_y(&self) -> f32;

    /// Constant, linear, quadratic, ... coefficients for red.
    fn distortion_polynomial_red(&self) -> &[f32];

    /// Constant, linear, quadratic, ... coefficients for green.
    fn distortion_polynomial_green(&self) -> &[f32];

    /// Constant, linear, quadratic, ... coefficients for blue.
    fn distortion_polynomial_blue(&self) -> &[f32];

    /// Per-eye configuration, in eye order.
    fn eyes(&self) -> &[EyeConfiguration];

    fn distortion_mono_point_meshes(&self) -> &MonoPointMeshDescriptions;

    fn distortion_rgb_point_meshes(&self) -> &RgbPointMeshDescriptions;
}
