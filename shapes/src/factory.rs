use crate::{
    circle::Circle,
    config::{ConfigError, FactoryConfig, Tolerance},
    error::{GeometryError, Result},
    triangle::{self, AnyTriangle, RightTriangle, Triangle},
};

/// Validates raw measurements and builds shapes of the right refined kind.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShapeFactory {
    config: FactoryConfig,
}

impl ShapeFactory {
    pub fn new(config: FactoryConfig) -> Result<Self, ConfigError> {
        config.tolerance.validate()?;
        Ok(Self { config })
    }

    pub fn with_tolerance(tolerance: Tolerance) -> Result<Self, ConfigError> {
        Self::new(FactoryConfig { tolerance })
    }

    #[inline]
    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    pub fn create_circle(&self, radius: f32) -> Result<Circle> {
        let circle = Circle::new(radius).map_err(|err| {
            log::debug!("rejected circle: {}", err);
            err
        })?;
        log::trace!("circle r={}", radius);
        Ok(circle)
    }

    /// Builds a right triangle when the sides allow it, a plain one otherwise.
    pub fn create_triangle(&self, a: f32, b: f32, c: f32) -> Result<AnyTriangle> {
        self.check_proper(a, b, c)?;
        if triangle::is_right(a, b, c, self.config.tolerance) {
            let t = RightTriangle::from_sides(a, b, c);
            log::trace!(
                "({}, {}, {}) is right: hypot={} cats=({}, {})",
                a,
                b,
                c,
                t.hypotenuse(),
                t.cat1(),
                t.cat2()
            );
            Ok(AnyTriangle::Right(t))
        } else {
            log::trace!("({}, {}, {}) is not right", a, b, c);
            Ok(AnyTriangle::Triangle(Triangle::new_unchecked(a, b, c)))
        }
    }

    /// Like [`create_triangle`](Self::create_triangle), but a proper
    /// triangle that isn't right is an error.
    pub fn create_right_triangle(&self, a: f32, b: f32, c: f32) -> Result<RightTriangle> {
        match self.create_triangle(a, b, c)? {
            AnyTriangle::Right(t) => Ok(t),
            AnyTriangle::Triangle(_) => {
                let err = GeometryError::NotRightTriangle(a, b, c);
                log::debug!("rejected right triangle: {}", err);
                Err(err.into())
            }
        }
    }

    /// `false` for anything that isn't a proper triangle.
    pub fn is_right_triangle(&self, a: f32, b: f32, c: f32) -> bool {
        triangle::check_proper(a, b, c).is_ok()
            && triangle::is_right(a, b, c, self.config.tolerance)
    }

    fn check_proper(&self, a: f32, b: f32, c: f32) -> Result<()> {
        triangle::check_proper(a, b, c).map_err(|err| {
            log::debug!("rejected triangle: {}", err);
            err.into()
        })
    }
}

/// [`ShapeFactory::create_circle`] with the default configuration.
pub fn create_circle(radius: f32) -> Result<Circle> {
    ShapeFactory::default().create_circle(radius)
}

/// [`ShapeFactory::create_triangle`] with the default configuration.
pub fn create_triangle(a: f32, b: f32, c: f32) -> Result<AnyTriangle> {
    ShapeFactory::default().create_triangle(a, b, c)
}

#[cfg(test)]
use crate::{error::ShapeError, Area};

#[test]
fn circle() {
    let _ = env_logger::try_init();
    let c = create_circle(3.0).unwrap();
    assert_eq!(c.radius(), 3.0);
    assert!((c.area() - 28.274_334).abs() < 1e-4);
    assert_eq!(
        create_circle(-10.0),
        Err(ShapeError::InvalidGeometry(GeometryError::NonPositiveRadius(
            -10.0
        )))
    );
}

#[test]
fn classification() {
    let _ = env_logger::try_init();
    let right = create_triangle(3.0, 4.0, 5.0).unwrap();
    let right = right.as_right().unwrap();
    assert_eq!(
        (right.cat1(), right.cat2(), right.hypotenuse()),
        (3.0, 4.0, 5.0)
    );

    let plain = create_triangle(4.0, 2.0, 3.0).unwrap();
    assert_eq!(plain.as_plain().map(|t| t.sides()), Some([4.0, 2.0, 3.0]));
}

#[test]
fn rejections() {
    let _ = env_logger::try_init();
    assert_eq!(
        create_triangle(-10.0, 3.0, 4.0),
        Err(GeometryError::NonPositiveSide(-10.0, 3.0, 4.0).into())
    );
    assert_eq!(
        create_triangle(1.0, 1.0, 3.0),
        Err(GeometryError::TriangleInequality(1.0, 1.0, 3.0).into())
    );
    assert!(create_triangle(1.0, 2.0, 3.0).unwrap_err().is_invalid_geometry());
}

#[test]
fn right_only() {
    let factory = ShapeFactory::default();
    assert_eq!(
        factory.create_right_triangle(4.0, 5.0, 3.0).map(|t| t.area()),
        Ok(6.0)
    );
    assert_eq!(
        factory.create_right_triangle(2.0, 3.0, 4.0),
        Err(GeometryError::NotRightTriangle(2.0, 3.0, 4.0).into())
    );
    assert!(factory.create_right_triangle(1.0, 1.0, 3.0).is_err());

    assert!(factory.is_right_triangle(13.0, 5.0, 12.0));
    assert!(!factory.is_right_triangle(2.0, 3.0, 4.0));
    assert!(!factory.is_right_triangle(0.0, 0.0, 0.0));
}

#[test]
fn relative_tolerance() {
    let strict = ShapeFactory::default();
    let loose = ShapeFactory::with_tolerance(Tolerance::Relative(1e-2)).unwrap();
    // 4.0² + 5.0² = 41, 6.4² = 40.96
    assert!(!strict.create_triangle(4.0, 5.0, 6.4).unwrap().is_right());
    assert!(loose.create_triangle(4.0, 5.0, 6.4).unwrap().is_right());
    assert_eq!(loose.config().tolerance, Tolerance::Relative(1e-2));
}

#[test]
fn tolerance_is_checked_up_front() {
    assert!(matches!(
        ShapeFactory::with_tolerance(Tolerance::Relative(10.0)),
        Err(ConfigError::InvalidTolerance(Tolerance::Relative(_)))
    ));
    assert!(matches!(
        ShapeFactory::with_tolerance(Tolerance::Absolute(-1.0)),
        Err(ConfigError::InvalidTolerance(Tolerance::Absolute(_)))
    ));
    assert!(ShapeFactory::new(FactoryConfig::default()).is_ok());
}

#[test]
fn loose_tolerance_keeps_canonical_order() {
    let loose = ShapeFactory::with_tolerance(Tolerance::Relative(0.9)).unwrap();
    for (a, b, c) in [(1.0, 1.0, 1.0), (0.5, 1.0, 1.0), (1.0, 0.01, 1.0)] {
        let t = loose.create_triangle(a, b, c).unwrap();
        assert!(!t.is_right(), "({}, {}, {})", a, b, c);
    }

    let loose = ShapeFactory::with_tolerance(Tolerance::Absolute(2.0)).unwrap();
    for (a, b, c) in [(4.0, 5.0, 6.4), (1.0, 1.0, 1.2), (3.0, 4.0, 5.0)] {
        if let AnyTriangle::Right(t) = loose.create_triangle(a, b, c).unwrap() {
            assert!(t.cat1() <= t.cat2());
            assert!(t.cat2() < t.hypotenuse());
        }
    }
    assert!(!loose.create_triangle(1.0, 1.0, 1.0).unwrap().is_right());
}
