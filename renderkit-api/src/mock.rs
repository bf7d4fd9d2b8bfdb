use crate::{DisplayConfiguration, EyeConfiguration, MonoPointMeshDescriptions,
            RgbPointMeshDescriptions};

/// In-memory display configuration with every value set by hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct MockDisplayConfiguration {
    pub distortion_type: String,
    pub distance_scale_x: f32,
    pub distance_scale_y: f32,
    pub polynomial_red: Vec<f32>,
    pub polynomial_green: Vec<f32>,
    pub polynomial_blue: Vec<f32>,
    pub eyes: Vec<EyeConfiguration>,
    pub mono_point_meshes: MonoPointMeshDescriptions,
    pub rgb_point_meshes: RgbPointMeshDescriptions,
}

impl Default for MockDisplayConfiguration {
    /// Two centered eyes with identity polynomials.
    fn default() -> MockDisplayConfiguration {
        MockDisplayConfiguration {
            distortion_type: "rgb_symmetric_polynomials".into(),
            distance_scale_x: 1.0,
            distance_scale_y: 1.0,
            polynomial_red: vec![0.0, 1.0],
            polynomial_green: vec![0.0, 1.0],
            polynomial_blue: vec![0.0, 1.0],
            eyes: vec![EyeConfiguration::default(), EyeConfiguration::default()],
            mono_point_meshes: Vec::new(),
            rgb_point_meshes: Vec::new(),
        }
    }
}

impl MockDisplayConfiguration {
    /// Simulates a polynomial-corrected HMD with a non-square screen per eye
    /// and mirrored, off-center optics.
    pub fn hdk() -> MockDisplayConfiguration {
        MockDisplayConfiguration {
            distortion_type: "rgb_symmetric_polynomials".into(),
            distance_scale_x: 1.0,
            distance_scale_y: 0.9,
            polynomial_red: vec![0.0, 1.0, -1.74, 5.15, -1.27, -2.23],
            polynomial_green: vec![0.0, 1.0, -1.66, 4.80, -1.20, -2.02],
            polynomial_blue: vec![0.0, 1.0, -1.59, 4.44, -1.11, -1.81],
            eyes: vec![EyeConfiguration::new(0.55, 0.5), EyeConfiguration::new(0.45, 0.5)],
            mono_point_meshes: Vec::new(),
            rgb_point_meshes: Vec::new(),
        }
    }
}

impl DisplayConfiguration for MockDisplayConfiguration {
    fn distortion_type_string(&self) -> String {
        self.distortion_type.clone()
    }

    fn distortion_distance_scale_x(&self) -> f32 {
        self.distance_scale_x
    }

    fn distortion_distance_scale_y(&self) -> f32 {
        self.distance_scale_y
    }

    fn distortion_polynomial_red(&self) -> &[f32] {
        &self.polynomial_red
    }

    fn distortion_polynomial_green(&self) -> &[f32] {
        &self.polynomial_green
    }

    fn distortion_polynomial_blue(&self) -> &[f32] {
        &self.polynomial_blue
    }

    fn eyes(&self) -> &[EyeConfiguration] {
        &self.eyes
    }

    fn distortion_mono_point_meshes(&self) -> &MonoPointMeshDescriptions {
        &self.mono_point_meshes
    }

    fn distortion_rgb_point_meshes(&self) -> &RgbPointMeshDescriptions {
        &self.rgb_point_meshes
    }
}
