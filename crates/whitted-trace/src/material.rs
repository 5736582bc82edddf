//! Surface material: base color plus Phong and bounce coefficients.

use whitted_math::Rgb;

/// Weights of the shading terms, each expected in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    /// Ambient term weight.
    pub ambient: f64,
    /// Lambertian term weight.
    pub diffuse: f64,
    /// Phong highlight weight.
    pub specular: f64,
    /// Weight of the reflected-ray color.
    pub reflective: f64,
}

impl Coefficients {
    /// Create a coefficient set.
    pub const fn new(ambient: f64, diffuse: f64, specular: f64, reflective: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            reflective,
        }
    }

    fn as_array(&self) -> [(&'static str, f64); 4] {
        [
            ("ambient", self.ambient),
            ("diffuse", self.diffuse),
            ("specular", self.specular),
            ("reflective", self.reflective),
        ]
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::new(0.4, 0.2, 0.2, 0.2)
    }
}

/// Material owned by each primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// RGB color in `[0, 1]^3`.
    pub base_color: Rgb,
    /// Phong exponent.
    pub shininess: u32,
    /// Shading term weights.
    pub coefficients: Coefficients,
    /// Multiplier applied to every light's direct contribution.
    pub source_factor: f64,
    /// Refractive index. Also the weight of the refracted-ray color.
    pub refractive_index: f64,
}

impl Material {
    /// A material of the given color with default coefficients,
    /// `source_factor = 1.0` and `refractive_index = 1.5`.
    pub fn new(base_color: Rgb) -> Self {
        Self {
            base_color,
            shininess: 1,
            coefficients: Coefficients::default(),
            source_factor: 1.0,
            refractive_index: 1.5,
        }
    }

    /// Set the Phong exponent.
    pub fn with_shininess(mut self, shininess: u32) -> Self {
        self.shininess = shininess;
        self
    }

    /// Set the shading term weights.
    pub fn with_coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = coefficients;
        self
    }

    /// Set the light intensity multiplier.
    pub fn with_source_factor(mut self, source_factor: f64) -> Self {
        self.source_factor = source_factor;
        self
    }

    /// Set the refractive index.
    pub fn with_refractive_index(mut self, refractive_index: f64) -> Self {
        self.refractive_index = refractive_index;
        self
    }

    /// Check that the material's values are in range, describing the first
    /// problem found.
    pub fn check(&self) -> Option<String> {
        if self.base_color.iter().any(|c| !(0.0..=1.0).contains(c)) {
            return Some(format!("base color {:?} outside [0, 1]", self.base_color));
        }
        for (name, value) in self.coefficients.as_array() {
            if !(0.0..=1.0).contains(&value) {
                return Some(format!("{name} coefficient {value} outside [0, 1]"));
            }
        }
        if !self.source_factor.is_finite() {
            return Some("source factor is not finite".into());
        }
        if !self.refractive_index.is_finite() {
            return Some("refractive index is not finite".into());
        }
        None
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Rgb::new(1.0, 1.0, 1.0))
    }
}
