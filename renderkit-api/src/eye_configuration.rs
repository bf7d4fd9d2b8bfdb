/// Per-eye values a display configuration provides for distortion correction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct EyeConfiguration {
    /// X location of the center of projection, in texture coordinates.
    pub center_proj_x: f64,

    /// Y location of the center of projection, in texture coordinates.
    pub center_proj_y: f64,
}

impl EyeConfiguration {
    pub fn new(center_proj_x: f64, center_proj_y: f64) -> EyeConfiguration {
        EyeConfiguration {
            center_proj_x: center_proj_x,
            center_proj_y: center_proj_y,
        }
    }
}

impl Default for EyeConfiguration {
    fn default() -> EyeConfiguration {
        EyeConfiguration {
            center_proj_x: 0.5,
            center_proj_y: 0.5,
        }
    }
}
