use glam::Vec3;

use crate::{config::Tolerance, error::GeometryError, Area};

/// A proper triangle, sides kept in the order they were given.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Triangle {
    side_a: f32,
    side_b: f32,
    side_c: f32,
}

impl Triangle {
    #[inline]
    pub(crate) fn new_unchecked(side_a: f32, side_b: f32, side_c: f32) -> Self {
        Self {
            side_a,
            side_b,
            side_c,
        }
    }

    #[inline]
    pub fn side_a(&self) -> f32 {
        self.side_a
    }

    #[inline]
    pub fn side_b(&self) -> f32 {
        self.side_b
    }

    #[inline]
    pub fn side_c(&self) -> f32 {
        self.side_c
    }

    #[inline]
    pub fn sides(&self) -> [f32; 3] {
        [self.side_a, self.side_b, self.side_c]
    }

    pub fn perimeter(&self) -> f32 {
        self.side_a + self.side_b + self.side_c
    }
}

impl Area for Triangle {
    /// Heron's formula.
    ///
    /// In `f32` this rounds to `0.0` for very thin triangles that still pass
    /// the strict triangle inequality.
    fn area(&self) -> f32 {
        heron(self.side_a, self.side_b, self.side_c)
    }
}

pub(crate) fn heron(a: f32, b: f32, c: f32) -> f32 {
    let p = (a + b + c) / 2.0;
    // rounding can push a thin triangle's product just below zero
    (p * (p - a) * (p - b) * (p - c)).max(0.0).sqrt()
}

/// A right triangle with its sides in canonical order: `cat1 <= cat2 < hypotenuse`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RightTriangle {
    hypotenuse: f32,
    cat1: f32,
    cat2: f32,
}

impl RightTriangle {
    pub(crate) fn from_sides(a: f32, b: f32, c: f32) -> Self {
        let mut sides = [a, b, c];
        sides.sort_by(f32::total_cmp);
        let [cat1, cat2, hypotenuse] = sides;
        Self {
            hypotenuse,
            cat1,
            cat2,
        }
    }

    #[inline]
    pub fn hypotenuse(&self) -> f32 {
        self.hypotenuse
    }

    #[inline]
    pub fn cat1(&self) -> f32 {
        self.cat1
    }

    #[inline]
    pub fn cat2(&self) -> f32 {
        self.cat2
    }

    /// `[cat1, cat2, hypotenuse]`.
    #[inline]
    pub fn sides(&self) -> [f32; 3] {
        [self.cat1, self.cat2, self.hypotenuse]
    }
}

impl Area for RightTriangle {
    fn area(&self) -> f32 {
        self.cat1 * self.cat2 / 2.0
    }
}

/// Outcome of classifying a proper triangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AnyTriangle {
    Triangle(Triangle),
    Right(RightTriangle),
}

impl AnyTriangle {
    pub fn is_right(&self) -> bool {
        matches!(self, AnyTriangle::Right(_))
    }

    pub fn as_right(&self) -> Option<&RightTriangle> {
        match self {
            AnyTriangle::Right(t) => Some(t),
            AnyTriangle::Triangle(_) => None,
        }
    }

    pub fn as_plain(&self) -> Option<&Triangle> {
        match self {
            AnyTriangle::Triangle(t) => Some(t),
            AnyTriangle::Right(_) => None,
        }
    }

    pub fn sides(&self) -> [f32; 3] {
        match self {
            AnyTriangle::Triangle(t) => t.sides(),
            AnyTriangle::Right(t) => t.sides(),
        }
    }
}

impl Area for AnyTriangle {
    fn area(&self) -> f32 {
        match self {
            AnyTriangle::Triangle(t) => t.area(),
            AnyTriangle::Right(t) => t.area(),
        }
    }
}

/// All sides positive and each strictly shorter than the other two combined.
pub fn is_proper_triangle(a: f32, b: f32, c: f32) -> bool {
    a > 0.0 && b > 0.0 && c > 0.0 && a < b + c && b < a + c && c < a + b
}

pub(crate) fn check_proper(a: f32, b: f32, c: f32) -> Result<(), GeometryError> {
    if !(a.is_finite() && b.is_finite() && c.is_finite()) {
        return Err(GeometryError::NonFiniteSide(a, b, c));
    }
    if a <= 0.0 || b <= 0.0 || c <= 0.0 {
        return Err(GeometryError::NonPositiveSide(a, b, c));
    }
    if !is_proper_triangle(a, b, c) {
        return Err(GeometryError::TriangleInequality(a, b, c));
    }
    Ok(())
}

/// `x² - (y² + z²)` for each side `x`.
///
/// The other two squares are summed before subtracting so that permuting the
/// inputs permutes the residuals exactly.
fn residuals(a: f32, b: f32, c: f32) -> (Vec3, f32) {
    let sides = Vec3::new(a, b, c);
    let sq = sides * sides;
    let residuals = Vec3::new(
        sq.x - (sq.y + sq.z),
        sq.y - (sq.x + sq.z),
        sq.z - (sq.x + sq.y),
    );
    (residuals, sq.max_element())
}

/// Expects a proper triangle.
///
/// Only a side strictly longer than both others can be the hypotenuse, however
/// loose the tolerance.
pub(crate) fn is_right(a: f32, b: f32, c: f32, tolerance: Tolerance) -> bool {
    let (residuals, magnitude) = residuals(a, b, c);
    [
        (a, b, c, residuals.x),
        (b, a, c, residuals.y),
        (c, a, b, residuals.z),
    ]
    .iter()
    .any(|&(x, y, z, r)| x > y && x > z && tolerance.admits(r, magnitude))
}

#[test]
fn heron_area() {
    let t = Triangle::new_unchecked(2.0, 3.0, 4.0);
    assert!((t.area() - 2.904_737_5).abs() < 1e-5);
    assert_eq!(t.sides(), [2.0, 3.0, 4.0]);
    assert_eq!(t.perimeter(), 9.0);
}

#[test]
fn canonical_order() {
    let t = RightTriangle::from_sides(5.0, 3.0, 4.0);
    assert_eq!(t.cat1(), 3.0);
    assert_eq!(t.cat2(), 4.0);
    assert_eq!(t.hypotenuse(), 5.0);
    assert_eq!(t.area(), 6.0);
    assert_eq!(t.sides(), [3.0, 4.0, 5.0]);
    assert!((heron(3.0, 4.0, 5.0) - t.area()).abs() < 1e-5);
}

#[test]
fn properness() {
    assert!(is_proper_triangle(3.0, 4.0, 5.0));
    assert!(!is_proper_triangle(1.0, 1.0, 3.0));
    assert!(!is_proper_triangle(1.0, 2.0, 3.0));
    assert!(!is_proper_triangle(-10.0, 3.0, 4.0));
    assert!(!is_proper_triangle(0.0, 3.0, 4.0));
    assert!(!is_proper_triangle(f32::NAN, 3.0, 4.0));

    assert_eq!(
        check_proper(1.0, 1.0, 3.0),
        Err(GeometryError::TriangleInequality(1.0, 1.0, 3.0))
    );
    assert_eq!(
        check_proper(3.0, 0.0, 4.0),
        Err(GeometryError::NonPositiveSide(3.0, 0.0, 4.0))
    );
    assert!(matches!(
        check_proper(f32::INFINITY, 3.0, 4.0),
        Err(GeometryError::NonFiniteSide(..))
    ));
    assert_eq!(check_proper(2.0, 3.0, 4.0), Ok(()));
}

#[test]
fn right_in_any_order() {
    let tol = Tolerance::default();
    for (a, b, c) in [
        (3.0, 4.0, 5.0),
        (3.0, 5.0, 4.0),
        (4.0, 3.0, 5.0),
        (4.0, 5.0, 3.0),
        (5.0, 3.0, 4.0),
        (5.0, 4.0, 3.0),
    ] {
        assert!(is_right(a, b, c, tol));
    }
    assert!(is_right(5.0, 12.0, 13.0, tol));
    assert!(!is_right(2.0, 3.0, 4.0, tol));
    assert!(!is_right(1.0, 1.0, 1.0, tol));
}

#[test]
fn dispatch() {
    let plain = AnyTriangle::Triangle(Triangle::new_unchecked(2.0, 3.0, 4.0));
    let right = AnyTriangle::Right(RightTriangle::from_sides(3.0, 4.0, 5.0));
    assert!(!plain.is_right());
    assert!(right.is_right());
    assert!(plain.as_right().is_none());
    assert!(right.as_plain().is_none());
    assert_eq!(right.area(), 6.0);
    assert_eq!(plain.sides(), [2.0, 3.0, 4.0]);
    assert_eq!(right.sides(), [3.0, 4.0, 5.0]);
}

#[test]
fn thin_triangles() {
    let (a, b, c) = (1.573_936_5, 1.574, 6.360_000_4e-5);
    assert!(is_proper_triangle(a, b, c));
    let area = Triangle::new_unchecked(a, b, c).area();
    assert!(area.is_finite());
    assert!(area >= 0.0);
    assert!(!heron(1.0, 1.0, 1.0e-7).is_nan());
}

#[test]
fn hypotenuse_must_be_longest() {
    // a tie for the longest side is never right, even when the residual passes
    let loose = Tolerance::Absolute(1.0);
    assert!(loose.admits(1.0 - (0.25 + 1.0), 1.0));
    assert!(!is_right(0.5, 1.0, 1.0, loose));
    assert!(!is_right(1.0, 0.5, 1.0, loose));

    let relative = Tolerance::Relative(0.5);
    assert!(!is_right(0.01, 1.0, 1.0, relative));
    assert!(!is_right(1.0, 1.0, 1.0, relative));
    assert!(is_right(3.0, 4.0, 5.0, relative));
}
