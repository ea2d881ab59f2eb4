use core::fmt;

use crate::{
    error::{Result, ShapeError},
    AnyTriangle, Area, Circle, RightTriangle, Triangle,
};

/// Discriminant of a [`Shape`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Circle,
    Triangle,
    RightTriangle,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::RightTriangle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::RightTriangle => "right triangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Any shape the factory can build.
///
/// A [`Triangle`] only comes out of the factory for sides that classified as
/// not right, and right triangles have no conversion back to one, so
/// `Shape::Triangle` never holds a right triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Circle(Circle),
    Triangle(Triangle),
    RightTriangle(RightTriangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Triangle(_) => ShapeKind::Triangle,
            Shape::RightTriangle(_) => ShapeKind::RightTriangle,
        }
    }

    fn mismatch(&self, expected: ShapeKind) -> ShapeError {
        ShapeError::ShapeKindMismatch {
            expected,
            found: self.kind(),
        }
    }

    pub fn as_circle(&self) -> Result<&Circle> {
        match self {
            Shape::Circle(c) => Ok(c),
            _ => Err(self.mismatch(ShapeKind::Circle)),
        }
    }

    pub fn as_triangle(&self) -> Result<&Triangle> {
        match self {
            Shape::Triangle(t) => Ok(t),
            _ => Err(self.mismatch(ShapeKind::Triangle)),
        }
    }

    pub fn as_right_triangle(&self) -> Result<&RightTriangle> {
        match self {
            Shape::RightTriangle(t) => Ok(t),
            _ => Err(self.mismatch(ShapeKind::RightTriangle)),
        }
    }
}

impl Area for Shape {
    fn area(&self) -> f32 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Triangle(t) => t.area(),
            Shape::RightTriangle(t) => t.area(),
        }
    }
}

impl From<Circle> for Shape {
    fn from(c: Circle) -> Self {
        Shape::Circle(c)
    }
}

impl From<RightTriangle> for Shape {
    fn from(t: RightTriangle) -> Self {
        Shape::RightTriangle(t)
    }
}

impl From<AnyTriangle> for Shape {
    fn from(t: AnyTriangle) -> Self {
        match t {
            AnyTriangle::Triangle(t) => Shape::Triangle(t),
            AnyTriangle::Right(t) => Shape::RightTriangle(t),
        }
    }
}

impl TryFrom<Shape> for Circle {
    type Error = ShapeError;

    fn try_from(shape: Shape) -> Result<Self> {
        shape.as_circle().copied()
    }
}

impl TryFrom<Shape> for Triangle {
    type Error = ShapeError;

    fn try_from(shape: Shape) -> Result<Self> {
        shape.as_triangle().copied()
    }
}

impl TryFrom<Shape> for RightTriangle {
    type Error = ShapeError;

    fn try_from(shape: Shape) -> Result<Self> {
        shape.as_right_triangle().copied()
    }
}

impl TryFrom<Shape> for AnyTriangle {
    type Error = ShapeError;

    fn try_from(shape: Shape) -> Result<Self> {
        match shape {
            Shape::Triangle(t) => Ok(AnyTriangle::Triangle(t)),
            Shape::RightTriangle(t) => Ok(AnyTriangle::Right(t)),
            Shape::Circle(_) => Err(shape.mismatch(ShapeKind::Triangle)),
        }
    }
}

#[test]
fn narrowing() {
    let factory = crate::ShapeFactory::default();
    let circle = Shape::from(factory.create_circle(1.0).unwrap());
    let right = Shape::from(factory.create_triangle(5.0, 4.0, 3.0).unwrap());
    let plain = Shape::from(factory.create_triangle(2.0, 3.0, 4.0).unwrap());

    assert_eq!(circle.kind(), ShapeKind::Circle);
    assert_eq!(right.kind(), ShapeKind::RightTriangle);
    assert_eq!(plain.kind(), ShapeKind::Triangle);

    assert!(circle.as_circle().is_ok());
    assert_eq!(
        circle.as_right_triangle(),
        Err(ShapeError::ShapeKindMismatch {
            expected: ShapeKind::RightTriangle,
            found: ShapeKind::Circle,
        })
    );
    assert_eq!(
        Circle::try_from(right),
        Err(ShapeError::ShapeKindMismatch {
            expected: ShapeKind::Circle,
            found: ShapeKind::RightTriangle,
        })
    );
    assert_eq!(RightTriangle::try_from(right).map(|t| t.hypotenuse()), Ok(5.0));
    assert!(Triangle::try_from(right).is_err());
    assert!(Triangle::try_from(plain).is_ok());
    assert!(AnyTriangle::try_from(right).is_ok());
    assert!(AnyTriangle::try_from(circle).unwrap_err().is_kind_mismatch());
}

#[test]
fn every_kind_has_an_area() {
    let factory = crate::ShapeFactory::default();
    let shapes = [
        Shape::from(factory.create_circle(1.0).unwrap()),
        Shape::from(factory.create_triangle(2.0, 3.0, 4.0).unwrap()),
        Shape::from(factory.create_triangle(3.0, 4.0, 5.0).unwrap()),
    ];
    let kinds: Vec<_> = shapes.iter().map(Shape::kind).collect();
    assert_eq!(kinds, ShapeKind::ALL);
    assert!(shapes.iter().all(|s| s.area() > 0.0));
}

#[test]
fn right_triangles_never_narrow_to_plain() {
    let factory = crate::ShapeFactory::default();
    for (a, b, c) in [(3.0, 4.0, 5.0), (5.0, 3.0, 4.0), (13.0, 12.0, 5.0)] {
        let any = factory.create_triangle(a, b, c).unwrap();
        for shape in [Shape::from(any), Shape::from(*any.as_right().unwrap())] {
            assert_eq!(shape.kind(), ShapeKind::RightTriangle);
            assert!(shape.as_triangle().unwrap_err().is_kind_mismatch());
            assert!(Triangle::try_from(shape).is_err());
        }
    }

    for (a, b, c) in [(2.0, 3.0, 4.0), (1.0, 1.0, 1.0), (4.0, 5.0, 6.4)] {
        let shape = Shape::from(factory.create_triangle(a, b, c).unwrap());
        let t = shape.as_triangle().unwrap();
        let [a, b, c] = t.sides();
        assert!(!factory.is_right_triangle(a, b, c));
    }
}
