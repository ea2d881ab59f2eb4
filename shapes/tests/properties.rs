use proptest::prelude::*;
use shapes::{create_circle, create_triangle, AnyTriangle, Area};

fn permutations(a: f32, b: f32, c: f32) -> [(f32, f32, f32); 6] {
    [
        (a, b, c),
        (a, c, b),
        (b, a, c),
        (b, c, a),
        (c, a, b),
        (c, b, a),
    ]
}

fn heron([a, b, c]: [f32; 3]) -> f32 {
    let p = (a + b + c) / 2.0;
    (p * (p - a) * (p - b) * (p - c)).sqrt()
}

/// Integer right triangles from Euclid's formula, small enough that every
/// square is exact in `f32`.
fn pythagorean_triple() -> impl Strategy<Value = (f32, f32, f32)> {
    (2u32..20, 1u32..20, 1u32..5)
        .prop_filter("m > n", |(m, n, _)| m > n)
        .prop_map(|(m, n, k)| {
            let a = k * (m * m - n * n);
            let b = k * 2 * m * n;
            let c = k * (m * m + n * n);
            (a as f32, b as f32, c as f32)
        })
}

proptest! {
    #[test]
    fn non_positive_radius_fails(radius in -1e6f32..=0.0) {
        prop_assert!(create_circle(radius).unwrap_err().is_invalid_geometry());
    }

    #[test]
    fn circle_area(radius in 1e-3f32..1e3) {
        let circle = create_circle(radius).unwrap();
        prop_assert_eq!(circle.radius(), radius);
        prop_assert_eq!(circle.area(), std::f32::consts::PI * radius * radius);
    }

    #[test]
    fn non_positive_side_fails(
        bad in -1e3f32..=0.0,
        b in 0.1f32..100.0,
        c in 0.1f32..100.0,
    ) {
        for (x, y, z) in permutations(bad, b, c) {
            prop_assert!(create_triangle(x, y, z).unwrap_err().is_invalid_geometry());
        }
    }

    #[test]
    fn degenerate_fails(a in 0.1f32..100.0, b in 0.1f32..100.0) {
        for (x, y, z) in permutations(a, b, a + b) {
            prop_assert!(create_triangle(x, y, z).is_err());
        }
    }

    #[test]
    fn classification_ignores_order(
        a in 0.1f32..100.0,
        b in 0.1f32..100.0,
        c in 0.1f32..100.0,
    ) {
        let reference = create_triangle(a, b, c).ok().map(|t| t.is_right());
        for (x, y, z) in permutations(a, b, c) {
            prop_assert_eq!(create_triangle(x, y, z).ok().map(|t| t.is_right()), reference);
        }
    }

    #[test]
    fn plain_triangles_keep_order(
        a in 0.1f32..100.0,
        b in 0.1f32..100.0,
        c in 0.1f32..100.0,
    ) {
        if let Ok(AnyTriangle::Triangle(t)) = create_triangle(a, b, c) {
            prop_assert_eq!(t.sides(), [a, b, c]);
            prop_assert!(t.area() > 0.0);
        }
    }

    #[test]
    fn right_triangles((a, b, c) in pythagorean_triple()) {
        let mut canonical = None;
        for (x, y, z) in permutations(a, b, c) {
            let right = match create_triangle(x, y, z).unwrap() {
                AnyTriangle::Right(t) => t,
                AnyTriangle::Triangle(t) => {
                    return Err(TestCaseError::fail(format!("{:?} is not right", t)));
                }
            };
            prop_assert!(right.cat1() <= right.cat2());
            prop_assert!(right.cat2() < right.hypotenuse());

            let expected = heron(right.sides());
            prop_assert!((right.area() - expected).abs() <= 1e-3 * expected);

            match canonical {
                None => canonical = Some(right),
                Some(first) => prop_assert_eq!(first, right),
            }
        }
    }
}
