use radical_circles::{
    core::traits::FuzzyEq, vec2, Circle, CircleCircleIntersection, CircleCircleIntr, Error,
    IntersectionType, Vector2,
};

fn main() -> Result<(), Error> {
    classify_cases()?;
    radical_line_geometry()?;
    vector_basics();
    Ok(())
}

fn classify_cases() -> Result<(), Error> {
    println!("Classifying circle pairs...");

    let pairs = [
        (Circle::new(vec2(0.0, 0.0), 3.0)?, Circle::new(vec2(0.0, 0.0), 3.0)?),
        (Circle::new(vec2(0.0, 0.0), 5.0)?, Circle::new(vec2(0.0, 0.0), 2.0)?),
        (Circle::new(vec2(0.0, 0.0), 5.0)?, Circle::new(vec2(1.0, 1.0), 1.0)?),
        (Circle::new(vec2(0.0, 1.0), 3.0)?, Circle::new(vec2(0.0, 0.0), 4.0)?),
        (Circle::new(vec2(0.0, 0.0), 5.0)?, Circle::new(vec2(6.0, 0.0), 5.0)?),
        (Circle::new(vec2(0.0, 0.0), 1.0)?, Circle::new(vec2(2.0, 0.0), 1.0)?),
        (Circle::new(vec2(0.0, 0.0), 1.0)?, Circle::new(vec2(10.0, 0.0), 1.0)?),
    ];

    for (c1, c2) in pairs {
        let intr = CircleCircleIntersection::new(c1, c2);
        let t = intr.intersection_type();
        match intr.intersection_points() {
            Ok(points) => {
                assert_eq!(points.len() as i32, t.intersection_point_count());
                println!("  {c1} / {c2}: {t}, points: {points:?}");
            }
            Err(e) => {
                assert_eq!(t, IntersectionType::Coincident);
                println!("  {c1} / {c2}: {t} ({e})");
            }
        }
    }

    match Circle::new(Vector2::zero(), 0.0) {
        Ok(_) => unreachable!("zero radius circle should be rejected"),
        Err(e) => println!("Zero radius rejected: {e}"),
    }

    Ok(())
}

fn radical_line_geometry() -> Result<(), Error> {
    println!("Inspecting radical line geometry...");

    let c1 = Circle::new(vec2(0.0, 1.0), 3.0)?;
    let c2 = Circle::new(vec2(5.0, 5.0), 4.0)?;
    let intr = CircleCircleIntersection::new(c1, c2);
    println!("  {intr}");

    if let CircleCircleIntr::Overlapping {
        radical,
        point1,
        point2,
        half_chord,
    } = *intr.intr()
    {
        // both points sit on both circles
        for p in [point1, point2] {
            assert!((p - c1.center()).length().fuzzy_eq(c1.radius()));
            assert!((p - c2.center()).length().fuzzy_eq(c2.radius()));
        }

        // point1 is on the left looking from c1 toward c2
        let side = (point1 - c1.center()).dot(radical.versor);
        assert!(side > 0.0);

        println!(
            "  radical point: {}, c1 distance: {:.4}, c2 distance: {:.4}, half chord: {:.4}",
            radical.point, radical.c1_distance, radical.c2_distance, half_chord
        );
    } else {
        unreachable!("expected overlapping circles");
    }

    Ok(())
}

fn vector_basics() {
    println!("Vector operations...");

    let a = vec2(3.0, 4.0);
    let b = vec2(-1.0, 2.0);
    assert_eq!(a + b - b, a);
    assert_eq!(a.rot_plus_90().rot_minus_90(), a);
    println!("  |{a}| = {}, angle = {:.4} rad", a.length(), a.angle());
    println!("  {a} . {b} = {}", a.dot(b));

    let p = Vector2::from_polar(std::f64::consts::FRAC_PI_4, 2.0);
    assert!(p.length().fuzzy_eq(2.0));
    println!("  polar (PI/4, 2) = {p}, normalized = {}", p.normalize());
}
