use crate::core::{PathData, PlotPoint};

/// Builds a cubic path through `points` that is monotone between samples.
///
/// Tangents follow Steffen's method: each interior tangent is limited by the
/// neighbouring secant slopes, so the curve never overshoots a data value.
/// Zero points give an empty path, one point gives `M x,y Z`, two points a
/// straight segment. A point identical to its predecessor is skipped.
#[must_use]
pub fn build_monotone_curve(points: &[PlotPoint]) -> PathData {
    let mut builder = MonotoneX::default();
    for point in points {
        builder.point(point.x, point.y);
    }
    builder.finish()
}

#[derive(Default)]
struct MonotoneX {
    path: PathData,
    count: u8,
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    t0: f64,
}

impl MonotoneX {
    fn point(&mut self, x: f64, y: f64) {
        if self.count > 0 && x == self.x1 && y == self.y1 {
            return;
        }

        let mut t1 = f64::NAN;
        match self.count {
            0 => {
                self.count = 1;
                self.path.move_to(x, y);
            }
            1 => self.count = 2,
            2 => {
                self.count = 3;
                t1 = self.slope3(x, y);
                let t0 = self.slope2(t1);
                self.segment(t0, t1);
            }
            _ => {
                t1 = self.slope3(x, y);
                self.segment(self.t0, t1);
            }
        }

        self.x0 = self.x1;
        self.x1 = x;
        self.y0 = self.y1;
        self.y1 = y;
        self.t0 = t1;
    }

    fn finish(mut self) -> PathData {
        match self.count {
            1 => self.path.close(),
            2 => self.path.line_to(self.x1, self.y1),
            3 => {
                let t1 = self.slope2(self.t0);
                self.segment(self.t0, t1);
            }
            _ => {}
        }
        self.path
    }

    /// Tangent at `(x1, y1)` given the next point.
    fn slope3(&self, x2: f64, y2: f64) -> f64 {
        let h0 = self.x1 - self.x0;
        let h1 = x2 - self.x1;
        let s0 = (self.y1 - self.y0) / zero_divisor(h0, h1);
        let s1 = (y2 - self.y1) / zero_divisor(h1, h0);
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        if s0.is_nan() || s1.is_nan() || p.is_nan() {
            return 0.0;
        }
        let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        if tangent.is_finite() { tangent } else { 0.0 }
    }

    /// One-sided tangent at an end point from the neighbouring tangent `t`.
    fn slope2(&self, t: f64) -> f64 {
        let h = self.x1 - self.x0;
        if h != 0.0 {
            (3.0 * (self.y1 - self.y0) / h - t) / 2.0
        } else {
            t
        }
    }

    fn segment(&mut self, t0: f64, t1: f64) {
        let dx = (self.x1 - self.x0) / 3.0;
        self.path.cubic_to(
            self.x0 + dx,
            self.y0 + dx * t0,
            self.x1 - dx,
            self.y1 - dx * t1,
            self.x1,
            self.y1,
        );
    }
}

/// Interval width used as a divisor; a zero width keeps the sign of the
/// other interval so vertical steps produce signed infinities.
fn zero_divisor(h: f64, other: f64) -> f64 {
    if h != 0.0 {
        h
    } else if other < 0.0 {
        -0.0
    } else {
        0.0
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::build_monotone_curve;
    use crate::core::{PathCommand, PlotPoint};

    #[test]
    fn empty_and_single_point_paths() {
        assert!(build_monotone_curve(&[]).is_empty());
        let single = build_monotone_curve(&[PlotPoint::new(3.0, 4.0)]);
        assert_eq!(single.to_svg(), "M3,4Z");
    }

    #[test]
    fn two_points_make_a_straight_segment() {
        let path = build_monotone_curve(&[PlotPoint::new(0.0, 0.0), PlotPoint::new(10.0, 5.0)]);
        assert_eq!(path.to_svg(), "M0,0L10,5");
    }

    #[test]
    fn flat_neighbour_gives_zero_tangent_at_local_extremum() {
        let path = build_monotone_curve(&[
            PlotPoint::new(0.0, 10.0),
            PlotPoint::new(3.0, 0.0),
            PlotPoint::new(6.0, 10.0),
        ]);
        let commands = path.commands();
        assert_eq!(commands.len(), 3);
        match commands[1] {
            PathCommand::CubicTo { y2, y, .. } => {
                assert_eq!(y, 0.0);
                // Opposite secant slopes force a horizontal tangent at the minimum.
                assert_eq!(y2, 0.0);
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }

    #[test]
    fn coincident_points_are_skipped() {
        let path = build_monotone_curve(&[
            PlotPoint::new(0.0, 0.0),
            PlotPoint::new(0.0, 0.0),
            PlotPoint::new(5.0, 5.0),
        ]);
        assert_eq!(path.to_svg(), "M0,0L5,5");
    }

    #[test]
    fn same_x_steps_stay_finite() {
        let path = build_monotone_curve(&[
            PlotPoint::new(0.0, 0.0),
            PlotPoint::new(5.0, 2.0),
            PlotPoint::new(5.0, 8.0),
            PlotPoint::new(9.0, 3.0),
        ]);
        assert!(path.validate().is_ok());
    }
}
