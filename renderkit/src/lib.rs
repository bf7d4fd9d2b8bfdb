extern crate renderkit_api;
#[macro_use]
extern crate log;

mod distortion_manager;
mod error;

#[cfg(test)]
mod test_utils;

pub use renderkit_api::*;
pub use distortion_manager::{DistortionManager, DistortionSettings, ConstructionPolicy};
pub use error::DistortionError;
