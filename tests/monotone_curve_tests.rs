use rank_chart::core::{PathCommand, PlotPoint, build_monotone_curve};

fn curve_vertices(points: &[PlotPoint]) -> Vec<PathCommand> {
    build_monotone_curve(points).commands().to_vec()
}

#[test]
fn curve_passes_through_every_point_in_order() {
    let points = [
        PlotPoint::new(0.0, 26.25),
        PlotPoint::new(117.5, 17.5),
        PlotPoint::new(235.0, 43.75),
    ];
    let commands = curve_vertices(&points);

    assert_eq!(commands.len(), 3);
    assert_eq!(commands[0], PathCommand::MoveTo { x: 0.0, y: 26.25 });
    let ends: Vec<(f64, f64)> = commands[1..]
        .iter()
        .map(|command| match *command {
            PathCommand::CubicTo { x, y, .. } => (x, y),
            other => panic!("expected cubic segment, got {other:?}"),
        })
        .collect();
    assert_eq!(ends, vec![(117.5, 17.5), (235.0, 43.75)]);
}

#[test]
fn control_points_do_not_overshoot_monotone_data() {
    let points = [
        PlotPoint::new(0.0, 100.0),
        PlotPoint::new(10.0, 90.0),
        PlotPoint::new(20.0, 10.0),
        PlotPoint::new(30.0, 0.0),
    ];
    for command in curve_vertices(&points) {
        if let PathCommand::CubicTo { y1, y2, .. } = command {
            assert!((0.0..=100.0).contains(&y1), "y1 {y1} overshoots");
            assert!((0.0..=100.0).contains(&y2), "y2 {y2} overshoots");
        }
    }
}

#[test]
fn local_extremum_has_horizontal_tangent() {
    let points = [
        PlotPoint::new(0.0, 40.0),
        PlotPoint::new(10.0, 10.0),
        PlotPoint::new(20.0, 40.0),
    ];
    let commands = curve_vertices(&points);
    let PathCommand::CubicTo { y2, y, .. } = commands[1] else {
        panic!("expected cubic segment");
    };
    assert_eq!(y2, y);
    let PathCommand::CubicTo { y1, .. } = commands[2] else {
        panic!("expected cubic segment");
    };
    assert_eq!(y1, 10.0);
}

#[test]
fn coincident_points_are_ignored() {
    let with_duplicate = build_monotone_curve(&[
        PlotPoint::new(0.0, 0.0),
        PlotPoint::new(5.0, 5.0),
        PlotPoint::new(5.0, 5.0),
        PlotPoint::new(10.0, 0.0),
    ]);
    let without = build_monotone_curve(&[
        PlotPoint::new(0.0, 0.0),
        PlotPoint::new(5.0, 5.0),
        PlotPoint::new(10.0, 0.0),
    ]);
    assert_eq!(with_duplicate, without);
}

#[test]
fn vertical_steps_stay_finite() {
    let path = build_monotone_curve(&[
        PlotPoint::new(0.0, 0.0),
        PlotPoint::new(10.0, 5.0),
        PlotPoint::new(10.0, 20.0),
        PlotPoint::new(20.0, 25.0),
    ]);
    path.validate().expect("finite curve");
}

#[test]
fn degenerate_inputs() {
    assert!(build_monotone_curve(&[]).is_empty());
    assert_eq!(
        build_monotone_curve(&[PlotPoint::new(117.5, 26.25)]).to_svg(),
        "M117.5,26.25Z"
    );
    assert_eq!(
        build_monotone_curve(&[PlotPoint::new(0.0, 1.0), PlotPoint::new(2.0, 3.0)]).to_svg(),
        "M0,1L2,3"
    );
}
