#[macro_use]
extern crate log;

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod display_configuration;
pub mod distortion_parameters;
pub mod eye_configuration;
pub mod mock;
pub mod point_mesh;

#[cfg(test)]
mod test_utils;

pub use display_configuration::{DisplayConfiguration, DistortionType};
pub use distortion_parameters::{ColorChannel, ConstructionStatus, DistortionConstruction,
                                DistortionKind, DistortionParameters, DistortionPayload,
                                MonoPointSamplesPayload, RgbPointSamplesPayload,
                                SymmetricPolynomialPayload};
pub use eye_configuration::EyeConfiguration;
pub use mock::MockDisplayConfiguration;
pub use point_mesh::{MonoPointMeshDescription, MonoPointMeshDescriptions, PointSample,
                     RgbPointMeshDescription, RgbPointMeshDescriptions};
