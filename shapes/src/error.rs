use crate::shape::ShapeKind;

pub type Result<T, E = ShapeError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum ShapeError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),
    #[error("shape kind mismatch: expected {expected}, found {found}")]
    ShapeKindMismatch { expected: ShapeKind, found: ShapeKind },
}

/// Why a set of inputs was rejected.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("radius must be finite, got {0}")]
    NonFiniteRadius(f32),
    #[error("radius cannot be negative or zero, got {0}")]
    NonPositiveRadius(f32),
    #[error("side lengths must be finite, got ({0}, {1}, {2})")]
    NonFiniteSide(f32, f32, f32),
    #[error("side lengths cannot be negative or zero, got ({0}, {1}, {2})")]
    NonPositiveSide(f32, f32, f32),
    #[error("({0}, {1}, {2}) violates the triangle inequality")]
    TriangleInequality(f32, f32, f32),
    #[error("({0}, {1}, {2}) is not a right triangle")]
    NotRightTriangle(f32, f32, f32),
}

impl ShapeError {
    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, ShapeError::InvalidGeometry(_))
    }

    pub fn is_kind_mismatch(&self) -> bool {
        matches!(self, ShapeError::ShapeKindMismatch { .. })
    }
}

#[test]
fn messages() {
    let err = ShapeError::from(GeometryError::NonPositiveRadius(-10.0));
    assert_eq!(
        err.to_string(),
        "invalid geometry: radius cannot be negative or zero, got -10"
    );

    let err = ShapeError::ShapeKindMismatch {
        expected: ShapeKind::Circle,
        found: ShapeKind::RightTriangle,
    };
    assert_eq!(
        err.to_string(),
        "shape kind mismatch: expected circle, found right triangle"
    );
    assert!(err.is_kind_mismatch());
    assert!(!err.is_invalid_geometry());
}
