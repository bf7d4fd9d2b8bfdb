use crate::error::{DistortionError, Result};
use renderkit_api::{ConstructionStatus, DisplayConfiguration, DistortionParameters};

/// Triangle budget requested for every distortion mesh by default.
const DEFAULT_DESIRED_TRIANGLES: usize = 200 * 64;

/// What to do when a display configuration can't be read completely: an
/// unrecognized distortion type, or an eye the display doesn't have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionPolicy {
    /// Log it and keep the default values.
    Lenient,
    /// Refuse the configuration.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistortionSettings {
    pub policy: ConstructionPolicy,
    /// `None` keeps whatever the parameters default to.
    pub desired_triangles: Option<usize>,
}

impl Default for DistortionSettings {
    fn default() -> DistortionSettings {
        DistortionSettings {
            policy: ConstructionPolicy::Lenient,
            desired_triangles: Some(DEFAULT_DESIRED_TRIANGLES),
        }
    }
}

/// Builds the distortion parameters of every eye of a display.
pub struct DistortionManager {
    settings: DistortionSettings,
}

impl DistortionManager {
    pub fn new() -> DistortionManager {
        DistortionManager::with_settings(DistortionSettings::default())
    }

    pub fn with_settings(settings: DistortionSettings) -> DistortionManager {
        DistortionManager {
            settings: settings,
        }
    }

    pub fn settings(&self) -> &DistortionSettings {
        &self.settings
    }

    pub fn eye_distortion<C>(&self, config: &C, eye: usize) -> Result<DistortionParameters>
        where C: DisplayConfiguration + ?Sized
    {
        let construction = DistortionParameters::construct(config, eye);
        if self.settings.policy == ConstructionPolicy::Strict {
            match construction.status {
                ConstructionStatus::Populated => {}
                ConstructionStatus::UnrecognizedType { name } => {
                    return Err(DistortionError::UnrecognizedType(name));
                }
                ConstructionStatus::MissingEye { eye, eye_count } => {
                    return Err(DistortionError::MissingEye { eye: eye, eye_count: eye_count });
                }
            }
        } else {
            construction.log_diagnostic();
        }

        let parameters = construction.parameters;
        Ok(match self.settings.desired_triangles {
            Some(count) => parameters.with_desired_triangles(count),
            None => parameters,
        })
    }

    /// One set of parameters per configured eye, in eye order.
    pub fn eye_distortions<C>(&self, config: &C) -> Result<Vec<DistortionParameters>>
        where C: DisplayConfiguration + ?Sized
    {
        let mut result = Vec::with_capacity(config.eyes().len());
        for eye in 0..config.eyes().len() {
            let parameters = self.eye_distortion(config, eye)?;
            debug!("Eye {} distortion: {:?}", eye, parameters.kind());
            result.push(parameters);
        }
        Ok(result)
    }
}
