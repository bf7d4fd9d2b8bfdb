/// A single sampled displacement of a point-sample distortion mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct PointSample {
    /// Texture coordinate before correction.
    pub input: [f64; 2],

    /// Texture coordinate the input should be read from after correction.
    pub output: [f64; 2],
}

impl PointSample {
    pub fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self {
            input: input,
            output: output,
        }
    }
}

/// Samples describing the mesh of one eye, shared by all color channels.
pub type MonoPointMeshDescription = Vec<PointSample>;

/// One mono mesh per eye, in eye order.
pub type MonoPointMeshDescriptions = Vec<MonoPointMeshDescription>;

/// Samples describing the mesh of one eye, one set per color channel.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct RgbPointMeshDescription {
    pub red: MonoPointMeshDescription,
    pub green: MonoPointMeshDescription,
    pub blue: MonoPointMeshDescription,
}

/// One RGB mesh per eye, in eye order.
pub type RgbPointMeshDescriptions = Vec<RgbPointMeshDescription>;
