use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Continuous linear mapping from a numeric domain onto a pixel range.
///
/// Domain and range may each be descending; the mapping is the straight line
/// through `(domain_start, range_start)` and `(domain_end, range_end)`, with
/// linear extrapolation outside the domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Inverse mapping. A collapsed range resolves to the domain start.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }

    /// Expands the domain outward to round step boundaries, keeping its
    /// orientation. Repeats until the step size stabilises.
    #[must_use]
    pub fn nice(self, count: usize) -> Self {
        let descending = self.domain_end < self.domain_start;
        let (mut start, mut stop) = if descending {
            (self.domain_end, self.domain_start)
        } else {
            (self.domain_start, self.domain_end)
        };

        let mut previous_step = None;
        for _ in 0..10 {
            let step = tick_increment(start, stop, count as f64);
            if previous_step == Some(step) {
                break;
            }
            if step > 0.0 {
                start = (start / step).floor() * step;
                stop = (stop / step).ceil() * step;
            } else if step < 0.0 {
                start = (start * step).ceil() / step;
                stop = (stop * step).floor() / step;
            } else {
                break;
            }
            previous_step = Some(step);
        }

        let (domain_start, domain_end) = if descending {
            (stop, start)
        } else {
            (start, stop)
        };
        Self {
            domain_start,
            domain_end,
            ..self
        }
    }

    /// Round tick values inside the domain, approximately `count` of them,
    /// listed in domain order.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        ticks(self.domain_start, self.domain_end, count as f64)
    }
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let positive_inc = 10f64.powf(-power) / factor;
        i1 = (start * positive_inc).round();
        i2 = (stop * positive_inc).round();
        if i1 / positive_inc < start {
            i1 += 1.0;
        }
        if i2 / positive_inc > stop {
            i2 -= 1.0;
        }
        inc = -positive_inc;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Signed step between ticks: positive steps are the increment itself,
/// negative steps encode `1 / -step` for sub-unit increments.
fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    let (_, _, inc) = tick_spec(start, stop, count);
    if inc.is_finite() { inc } else { 0.0 }
}

fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let value = |k: f64| if inc < 0.0 { k / -inc } else { k * inc };
    (0..n)
        .map(|i| {
            let offset = i as f64;
            if reverse {
                value(i2 - offset)
            } else {
                value(i1 + offset)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn nice_expands_descending_domain_and_keeps_orientation() {
        let scale = LinearScale::new((15.0, 0.0), (140.0, 0.0))
            .expect("scale")
            .nice(10);
        assert_eq!(scale.domain(), (16.0, 0.0));
    }

    #[test]
    fn nice_uses_fractional_steps_for_small_spans() {
        let scale = LinearScale::new((0.12, 0.87), (0.0, 1.0))
            .expect("scale")
            .nice(10);
        let (start, end) = scale.domain();
        assert!((start - 0.1).abs() <= 1e-12);
        assert!((end - 0.9).abs() <= 1e-12);
    }

    #[test]
    fn ticks_follow_domain_order() {
        let scale = LinearScale::new((16.0, 0.0), (140.0, 0.0)).expect("scale");
        assert_eq!(scale.ticks(5), vec![15.0, 10.0, 5.0, 0.0]);

        let ascending = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("scale");
        assert_eq!(
            ascending.ticks(5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
    }

    #[test]
    fn zero_count_yields_no_ticks() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 1.0)).expect("scale");
        assert!(scale.ticks(0).is_empty());
    }

    #[test]
    fn collapsed_domain_is_rejected() {
        assert!(LinearScale::new((3.0, 3.0), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((f64::NAN, 3.0), (0.0, 1.0)).is_err());
    }
}
