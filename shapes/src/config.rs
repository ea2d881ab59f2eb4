use std::path::Path;

use serde_derive::{Deserialize, Serialize};

/// How close a squared-side residual must be to zero for a triangle to count as right.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "epsilon", rename_all = "lowercase")]
pub enum Tolerance {
    /// `|residual| < epsilon`, regardless of the size of the triangle.
    Absolute(f32),
    /// `|residual| < epsilon * longest_side²`.
    Relative(f32),
}

impl Tolerance {
    #[inline]
    pub fn epsilon(&self) -> f32 {
        match *self {
            Tolerance::Absolute(eps) | Tolerance::Relative(eps) => eps,
        }
    }

    /// `magnitude` is the largest squared side of the triangle being classified.
    #[inline]
    pub fn admits(&self, residual: f32, magnitude: f32) -> bool {
        match *self {
            Tolerance::Absolute(eps) => residual.abs() < eps,
            Tolerance::Relative(eps) => residual.abs() < eps * magnitude,
        }
    }

    /// Epsilon must be finite and positive; a relative one must also stay below 1.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let eps = self.epsilon();
        let in_range = match self {
            Tolerance::Absolute(_) => eps > 0.0,
            Tolerance::Relative(_) => eps > 0.0 && eps < 1.0,
        };
        if eps.is_finite() && in_range {
            Ok(self)
        } else {
            Err(ConfigError::InvalidTolerance(self))
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(f32::EPSILON)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    pub tolerance: Tolerance,
}

impl FactoryConfig {
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let config: FactoryConfig = toml::from_str(src)?;
        config.tolerance.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading factory config from {}", path.display());
        let src = std::fs::read_to_string(path)?;
        Self::from_toml(&src)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("config couldn't be read")]
    Io(#[from] std::io::Error),
    #[error("config couldn't be parsed")]
    Parse(#[from] toml::de::Error),
    #[error("config couldn't be serialized")]
    Serialize(#[from] toml::ser::Error),
    #[error("tolerance out of range: {0:?}")]
    InvalidTolerance(Tolerance),
}

#[test]
fn defaults() {
    let config = FactoryConfig::from_toml("").unwrap();
    assert_eq!(config, FactoryConfig::default());
    assert_eq!(config.tolerance, Tolerance::Absolute(f32::EPSILON));
}

#[test]
fn relative_tolerance() {
    let config = FactoryConfig::from_toml(
        r#"
        [tolerance]
        kind = "relative"
        epsilon = 1e-6
        "#,
    )
    .unwrap();
    assert_eq!(config.tolerance, Tolerance::Relative(1e-6));
}

#[test]
fn rejects_bad_tolerance() {
    let src = r#"
        [tolerance]
        kind = "absolute"
        epsilon = -1.0
    "#;
    assert!(matches!(
        FactoryConfig::from_toml(src),
        Err(ConfigError::InvalidTolerance(_))
    ));
    assert!(matches!(
        FactoryConfig::from_toml("tolerance = 3"),
        Err(ConfigError::Parse(_))
    ));
    let src = r#"
        [tolerance]
        kind = "relative"
        epsilon = 1.0
    "#;
    assert!(matches!(
        FactoryConfig::from_toml(src),
        Err(ConfigError::InvalidTolerance(Tolerance::Relative(_)))
    ));
}

#[test]
fn toml_round_trip() {
    let config = FactoryConfig {
        tolerance: Tolerance::Relative(1e-4),
    };
    let src = config.to_toml().unwrap();
    assert_eq!(FactoryConfig::from_toml(&src).unwrap(), config);
}

#[test]
fn absolute_is_magnitude_blind() {
    // a residual of 1.0 on sides around 1e4 is well within f32 rounding
    let abs = Tolerance::Absolute(f32::EPSILON);
    let rel = Tolerance::Relative(1e-6);
    assert!(!abs.admits(1.0, 1e8));
    assert!(rel.admits(1.0, 1e8));
    assert!(abs.admits(0.0, 25.0));
    assert!(rel.admits(0.0, 25.0));
    assert!(!rel.admits(1.0, 25.0));
}

#[test]
fn tolerance_ranges() {
    assert!(Tolerance::default().validate().is_ok());
    assert!(Tolerance::Absolute(10.0).validate().is_ok());
    assert!(Tolerance::Relative(0.5).validate().is_ok());
    for bad in [
        Tolerance::Absolute(-1.0),
        Tolerance::Absolute(0.0),
        Tolerance::Absolute(f32::NAN),
        Tolerance::Relative(1.0),
        Tolerance::Relative(10.0),
        Tolerance::Relative(f32::INFINITY),
    ] {
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::InvalidTolerance(_))
        ));
    }
}
