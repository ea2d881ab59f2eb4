use shapes::{
    create_circle, create_triangle, AnyTriangle, Area, FactoryConfig, GeometryError, Shape,
    ShapeError, ShapeFactory, ShapeKind, Tolerance,
};

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn circle_of_radius_three() -> anyhow::Result<()> {
    let _ = env_logger::try_init();
    let circle = create_circle(3.0)?;
    assert!(close(circle.area(), 28.274_334));
    assert!(close(shapes::area(&circle), std::f32::consts::PI * 9.0));
    Ok(())
}

#[test]
fn three_four_five() -> anyhow::Result<()> {
    let _ = env_logger::try_init();
    let t = create_triangle(3.0, 4.0, 5.0)?;
    let right = match t {
        AnyTriangle::Right(right) => right,
        AnyTriangle::Triangle(plain) => panic!("expected a right triangle, got {:?}", plain),
    };
    assert_eq!(right.cat1(), 3.0);
    assert_eq!(right.cat2(), 4.0);
    assert_eq!(right.hypotenuse(), 5.0);
    assert_eq!(t.area(), 6.0);
    Ok(())
}

#[test]
fn two_three_four() -> anyhow::Result<()> {
    let _ = env_logger::try_init();
    let t = create_triangle(2.0, 3.0, 4.0)?;
    assert!(!t.is_right());
    assert_eq!(t.sides(), [2.0, 3.0, 4.0]);
    assert!(close(t.area(), 2.904_737_5));
    Ok(())
}

#[test]
fn invalid_inputs() {
    let _ = env_logger::try_init();
    let cases = [
        create_triangle(-10.0, 3.0, 4.0).map(|_| ()),
        create_circle(-10.0).map(|_| ()),
        create_triangle(1.0, 1.0, 3.0).map(|_| ()),
        create_circle(0.0).map(|_| ()),
        create_circle(f32::NAN).map(|_| ()),
        create_circle(f32::NEG_INFINITY).map(|_| ()),
        create_triangle(0.0, 0.0, 0.0).map(|_| ()),
        create_triangle(f32::NAN, 1.0, 1.0).map(|_| ()),
    ];
    for result in cases {
        let err = result.unwrap_err();
        assert!(err.is_invalid_geometry(), "{}", err);
    }
}

#[test]
fn failure_reasons() {
    assert_eq!(
        create_triangle(1.0, 1.0, 3.0).unwrap_err(),
        ShapeError::InvalidGeometry(GeometryError::TriangleInequality(1.0, 1.0, 3.0))
    );
    assert_eq!(
        create_circle(-10.0).unwrap_err(),
        ShapeError::InvalidGeometry(GeometryError::NonPositiveRadius(-10.0))
    );
}

#[test]
fn mixed_shapes() -> anyhow::Result<()> {
    let factory = ShapeFactory::default();
    let shapes: Vec<Shape> = vec![
        factory.create_circle(1.0)?.into(),
        factory.create_triangle(5.0, 4.0, 3.0)?.into(),
        factory.create_triangle(2.0, 3.0, 4.0)?.into(),
    ];
    let kinds: Vec<ShapeKind> = shapes.iter().map(Shape::kind).collect();
    assert_eq!(
        kinds,
        [ShapeKind::Circle, ShapeKind::RightTriangle, ShapeKind::Triangle]
    );
    let expected = std::f32::consts::PI + 6.0 + 2.904_737_5;
    assert!(close(shapes::total_area(&shapes), expected));

    let err = shapes[0].as_triangle().unwrap_err();
    assert_eq!(
        err,
        ShapeError::ShapeKindMismatch {
            expected: ShapeKind::Triangle,
            found: ShapeKind::Circle,
        }
    );
    Ok(())
}

#[test]
fn configured_factory() -> anyhow::Result<()> {
    let config = FactoryConfig::from_toml(
        r#"
        [tolerance]
        kind = "relative"
        epsilon = 1e-2
        "#,
    )?;
    assert_eq!(config.tolerance, Tolerance::Relative(1e-2));
    let factory = ShapeFactory::new(config)?;
    assert!(factory.create_triangle(6.4, 4.0, 5.0)?.is_right());
    assert!(!create_triangle(6.4, 4.0, 5.0)?.is_right());
    Ok(())
}

#[test]
fn config_from_file() -> anyhow::Result<()> {
    let path = std::env::temp_dir().join(format!("shapes-config-{}.toml", std::process::id()));
    std::fs::write(&path, "[tolerance]\nkind = \"absolute\"\nepsilon = 1e-3\n")?;
    let config = FactoryConfig::load(&path);
    std::fs::remove_file(&path)?;
    assert_eq!(config?.tolerance, Tolerance::Absolute(1e-3));

    assert!(FactoryConfig::load(std::env::temp_dir().join("shapes-missing.toml")).is_err());
    Ok(())
}
