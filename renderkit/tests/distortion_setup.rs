extern crate renderkit;

use renderkit::{ConstructionPolicy, DisplayConfiguration, DistortionError, DistortionKind, DistortionManager,
                DistortionParameters, DistortionSettings, DistortionType, EyeConfiguration,
                MockDisplayConfiguration, MonoPointMeshDescriptions, PointSample,
                RgbPointMeshDescription, RgbPointMeshDescriptions};

// A display that only knows point samples, standing in for a real descriptor parser.
struct SampledDisplay {
    kind: DistortionType,
    eyes: Vec<EyeConfiguration>,
    mono: MonoPointMeshDescriptions,
    rgb: RgbPointMeshDescriptions,
}

impl SampledDisplay {
    fn new(kind: DistortionType) -> SampledDisplay {
        let mesh = vec![PointSample::new([0.0, 0.0], [0.05, 0.05]),
                        PointSample::new([0.5, 0.5], [0.5, 0.5]),
                        PointSample::new([1.0, 1.0], [0.95, 0.95])];
        SampledDisplay {
            kind: kind,
            eyes: vec![EyeConfiguration::default(), EyeConfiguration::default()],
            mono: vec![mesh.clone(), mesh.clone()],
            rgb: vec![RgbPointMeshDescription {
                red: mesh.clone(),
                green: mesh.clone(),
                blue: mesh,
            }],
        }
    }
}

impl DisplayConfiguration for SampledDisplay {
    fn distortion_type_string(&self) -> String {
        self.kind.name().unwrap_or("unknown").to_owned()
    }

    fn distortion_type(&self) -> DistortionType {
        self.kind
    }

    fn distortion_distance_scale_x(&self) -> f32 {
        1.0
    }

    fn distortion_distance_scale_y(&self) -> f32 {
        1.0
    }

    fn distortion_polynomial_red(&self) -> &[f32] {
        &[]
    }

    fn distortion_polynomial_green(&self) -> &[f32] {
        &[]
    }

    fn distortion_polynomial_blue(&self) -> &[f32] {
        &[]
    }

    fn eyes(&self) -> &[EyeConfiguration] {
        &self.eyes
    }

    fn distortion_mono_point_meshes(&self) -> &MonoPointMeshDescriptions {
        &self.mono
    }

    fn distortion_rgb_point_meshes(&self) -> &RgbPointMeshDescriptions {
        &self.rgb
    }
}

#[test]
fn every_eye_gets_its_own_center_of_projection() {
    let config = MockDisplayConfiguration::hdk();
    let eyes = DistortionManager::new().eye_distortions(&config).unwrap();
    assert_eq!(eyes.len(), 2);

    let left = eyes[0].symmetric_polynomials().unwrap();
    let right = eyes[1].symmetric_polynomials().unwrap();
    assert_eq!(left.center_of_projection, [0.55, 0.5]);
    assert_eq!(right.center_of_projection, [0.45, 0.5]);
    assert_eq!(left.distance_scale, [1.0, 0.9]);
    assert!(eyes.iter().all(|eye| eye.desired_triangles() == 200 * 64));
}

#[test]
fn point_samples_are_shared_by_all_eyes() {
    let config = SampledDisplay::new(DistortionType::MonoPointSamples);
    let eyes = DistortionManager::new().eye_distortions(&config).unwrap();
    assert_eq!(eyes.len(), 2);
    for eye in &eyes {
        assert_eq!(eye.kind(), DistortionKind::MonoPointSamples);
        assert_eq!(eye.mono_point_samples().unwrap().meshes, config.mono);
    }
}

#[test]
fn rgb_point_samples_through_a_trait_object() {
    let config = SampledDisplay::new(DistortionType::RgbPointSamples);
    let display: &dyn DisplayConfiguration = &config;
    let parameters = DistortionParameters::new(display, 0);
    assert_eq!(parameters.kind(), DistortionKind::RgbPointSamples);
    assert_eq!(parameters.rgb_point_samples().unwrap().meshes, config.rgb);
    assert_eq!(parameters, DistortionParameters::new(display, 0));
}

#[test]
fn unrecognized_display_under_each_policy() {
    let config = SampledDisplay::new(DistortionType::Unrecognized);

    let lenient = DistortionManager::new().eye_distortions(&config).unwrap();
    assert_eq!(lenient.len(), 2);
    assert!(lenient.iter().all(|eye| eye.kind() == DistortionKind::RgbSymmetricPolynomials));

    let strict = DistortionManager::with_settings(DistortionSettings {
        policy: ConstructionPolicy::Strict,
        desired_triangles: None,
    });
    let error = strict.eye_distortions(&config).unwrap_err();
    assert_eq!(error, DistortionError::UnrecognizedType("unknown".into()));
    assert_eq!(error.to_string(), "Unrecognized distortion correction type: unknown");
}

#[test]
fn display_without_eyes_has_no_distortions() {
    let config = MockDisplayConfiguration {
        eyes: Vec::new(),
        ..MockDisplayConfiguration::default()
    };
    assert!(DistortionManager::new().eye_distortions(&config).unwrap().is_empty());
}

#[test]
fn strict_errors_name_the_missing_eye() {
    let strict = DistortionManager::with_settings(DistortionSettings {
        policy: ConstructionPolicy::Strict,
        desired_triangles: None,
    });
    let error = strict.eye_distortion(&MockDisplayConfiguration::hdk(), 3).unwrap_err();
    assert_eq!(error.to_string(), "Missing eye: 3 (display has 2)");
}
