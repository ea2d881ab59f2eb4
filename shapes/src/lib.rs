mod circle;
mod config;
mod error;
mod factory;
mod shape;
mod triangle;

pub use circle::Circle;
pub use config::{ConfigError, FactoryConfig, Tolerance};
pub use error::{GeometryError, Result, ShapeError};
pub use factory::{create_circle, create_triangle, ShapeFactory};
pub use shape::{Shape, ShapeKind};
pub use triangle::{is_proper_triangle, AnyTriangle, RightTriangle, Triangle};

pub trait Area {
    fn area(&self) -> f32;
}

impl<T: Area + ?Sized> Area for &T {
    #[inline]
    fn area(&self) -> f32 {
        (**self).area()
    }
}

#[inline]
pub fn area(shape: &impl Area) -> f32 {
    shape.area()
}

pub fn total_area<T: Area>(shapes: &[T]) -> f32 {
    shapes.iter().map(Area::area).sum()
}

#[test]
fn totals() {
    let circle = create_circle(1.0).unwrap();
    let right = create_triangle(5.0, 4.0, 3.0).unwrap();
    let shapes = [Shape::from(circle), Shape::from(right)];
    let expected = std::f32::consts::PI + 6.0;
    assert!((total_area(&shapes) - expected).abs() < 1e-5);

    let dynamic: [&dyn Area; 2] = [&circle, &right];
    assert!((total_area(&dynamic) - expected).abs() < 1e-5);
    assert_eq!(total_area::<Shape>(&[]), 0.0);
}

#[test]
fn area_is_pure() {
    let t = create_triangle(2.0, 3.0, 4.0).unwrap();
    let first = area(&t);
    for _ in 0..8 {
        assert_eq!(area(&t).to_bits(), first.to_bits());
    }
}
