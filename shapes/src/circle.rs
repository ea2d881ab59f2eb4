use std::f32::consts::PI;

use crate::{error::GeometryError, Area};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Circle {
    radius: f32,
}

impl Circle {
    pub(crate) fn new(radius: f32) -> Result<Self, GeometryError> {
        if !radius.is_finite() {
            return Err(GeometryError::NonFiniteRadius(radius));
        }
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }
        Ok(Self { radius })
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Area for Circle {
    #[inline]
    fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }
}

#[test]
fn radius() {
    assert_eq!(Circle::new(1.0).map(|c| c.radius()), Ok(1.0));
    assert_eq!(
        Circle::new(0.0),
        Err(GeometryError::NonPositiveRadius(0.0))
    );
    assert_eq!(
        Circle::new(-10.0),
        Err(GeometryError::NonPositiveRadius(-10.0))
    );
    assert!(matches!(
        Circle::new(f32::NAN),
        Err(GeometryError::NonFiniteRadius(_))
    ));
    assert_eq!(
        Circle::new(f32::INFINITY),
        Err(GeometryError::NonFiniteRadius(f32::INFINITY))
    );
}
