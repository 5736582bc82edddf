//! Render-pass configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TraceError};

/// Distance a shadow ray's origin is pushed towards the light.
///
/// A full unit is coarse for small scenes but is kept for output parity.
pub const DEFAULT_SHADOW_BIAS: f64 = 1.0;

/// Distance a reflected or refracted ray's origin is pushed along its
/// direction.
pub const DEFAULT_BOUNCE_BIAS: f64 = 1.0;

/// Default number of secondary bounces per primary ray.
pub const DEFAULT_RECURSION_LIMIT: u32 = 3;

/// Largest accepted recursion limit.
///
/// Every bounce level casts two rays per light, so the work grows
/// exponentially with depth.
pub const MAX_RECURSION_LIMIT: u32 = 16;

/// Settings shared, read-only, by every ray of a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceSettings {
    /// Maximum depth of reflected/refracted rays.
    pub recursion_limit: u32,
    /// See [`DEFAULT_SHADOW_BIAS`].
    pub shadow_bias: f64,
    /// See [`DEFAULT_BOUNCE_BIAS`].
    pub bounce_bias: f64,
}

impl Default for TraceSettings {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            shadow_bias: DEFAULT_SHADOW_BIAS,
            bounce_bias: DEFAULT_BOUNCE_BIAS,
        }
    }
}

impl TraceSettings {
    /// Settings with the given recursion limit and default biases.
    pub fn with_recursion_limit(recursion_limit: u32) -> Self {
        Self {
            recursion_limit,
            ..Self::default()
        }
    }

    /// Parse settings from TOML text. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        log::debug!("loaded trace settings: {:?}", settings);
        Ok(settings)
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if self.recursion_limit > MAX_RECURSION_LIMIT {
            return Err(TraceError::InvalidSettings(format!(
                "recursion_limit must be at most {MAX_RECURSION_LIMIT}"
            )));
        }
        if !self.shadow_bias.is_finite() || self.shadow_bias < 0.0 {
            return Err(TraceError::InvalidSettings(
                "shadow_bias must be finite and non-negative".into(),
            ));
        }
        if !self.bounce_bias.is_finite() || self.bounce_bias < 0.0 {
            return Err(TraceError::InvalidSettings(
                "bounce_bias must be finite and non-negative".into(),
            ));
        }
        Ok(())
    }
}
