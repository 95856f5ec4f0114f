use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use rank_chart::core::{LinearScale, RankScale, RankScaleTuning, TimeScale};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn linear_scale_rejects_collapsed_or_non_finite_domain() {
    assert!(LinearScale::new((1.0, 1.0), (0.0, 10.0)).is_err());
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 10.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (0.0, f64::INFINITY)).is_err());
}

#[test]
fn nice_rounds_outward_and_keeps_orientation() {
    let descending = LinearScale::new((15.0, 0.0), (140.0, 0.0))
        .expect("valid scale")
        .nice(10);
    assert_eq!(descending.domain(), (16.0, 0.0));

    let fractional = LinearScale::new((0.12, 0.87), (0.0, 1.0))
        .expect("valid scale")
        .nice(10);
    let (lo, hi) = fractional.domain();
    assert_abs_diff_eq!(lo, 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(hi, 0.9, epsilon = 1e-12);
}

#[test]
fn ticks_follow_domain_order() {
    let scale = LinearScale::new((16.0, 0.0), (140.0, 0.0)).expect("valid scale");
    assert_eq!(scale.ticks(5), vec![15.0, 10.0, 5.0, 0.0]);

    let ascending = LinearScale::new((0.0, 100.0), (0.0, 1.0)).expect("valid scale");
    assert_eq!(
        ascending.ticks(5),
        vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
    );
    assert!(ascending.ticks(0).is_empty());
}

#[test]
fn time_scale_maps_domain_ends_onto_width() {
    let scale = TimeScale::new(day(2014, 11, 15), day(2014, 11, 17), 235.0).expect("scale");
    assert_eq!(scale.date_to_pixel(day(2014, 11, 15)), 0.0);
    assert_eq!(scale.date_to_pixel(day(2014, 11, 16)), 117.5);
    assert_eq!(scale.date_to_pixel(day(2014, 11, 17)), 235.0);
    // Outside the domain the mapping extrapolates.
    assert_eq!(scale.date_to_pixel(day(2014, 11, 19)), 470.0);
    assert_eq!(scale.span_days(), 2);
}

#[test]
fn time_scale_inverse_rounds_to_nearest_day() {
    let scale = TimeScale::new(day(2014, 11, 15), day(2014, 11, 17), 235.0).expect("scale");
    assert_eq!(scale.pixel_to_date(100.0).expect("date"), day(2014, 11, 16));
    assert_eq!(scale.pixel_to_date(30.0).expect("date"), day(2014, 11, 15));
    assert!(scale.pixel_to_date(f64::NAN).is_err());
}

#[test]
fn single_day_time_scale_centres_the_date() {
    let scale = TimeScale::new(day(2014, 11, 15), day(2014, 11, 15), 235.0).expect("scale");
    assert_eq!(scale.date_to_pixel(day(2014, 11, 15)), 117.5);
}

#[test]
fn time_scale_rejects_reversed_domain_and_bad_width() {
    assert!(TimeScale::new(day(2014, 11, 17), day(2014, 11, 15), 235.0).is_err());
    assert!(TimeScale::new(day(2014, 11, 15), day(2014, 11, 17), 0.0).is_err());
}

#[test]
fn rank_scale_puts_better_ranks_higher() {
    let scale = RankScale::new(2.0, 5.0, 140.0, RankScaleTuning::default()).expect("scale");
    assert_eq!(scale.domain(), (16.0, 0.0));
    assert_eq!(scale.rank_to_pixel(2.0), 17.5);
    assert_eq!(scale.rank_to_pixel(3.0), 26.25);
    assert_eq!(scale.rank_to_pixel(5.0), 43.75);
    assert!(scale.rank_to_pixel(2.0) < scale.rank_to_pixel(5.0));
    assert_abs_diff_eq!(scale.pixel_to_rank(26.25), 3.0, epsilon = 1e-12);
}

#[test]
fn rank_scale_ticks_cover_domain_for_gridlines() {
    let scale = RankScale::new(2.0, 5.0, 140.0, RankScaleTuning::default()).expect("scale");
    assert_eq!(scale.ticks(5), vec![15.0, 10.0, 5.0, 0.0]);
}

#[test]
fn zero_margins_on_flat_series_still_build_a_scale() {
    let tuning = RankScaleTuning {
        upper_margin: 0.0,
        lower_margin: 0.0,
        ..RankScaleTuning::default()
    };
    let scale = RankScale::new(4.0, 4.0, 100.0, tuning).expect("scale");
    let (bottom, top) = scale.domain();
    assert!(bottom > top);
    let y = scale.rank_to_pixel(4.0);
    assert!(y.is_finite() && (0.0..=100.0).contains(&y));
}

#[test]
fn negative_rank_margins_are_rejected() {
    let tuning = RankScaleTuning {
        lower_margin: -1.0,
        ..RankScaleTuning::default()
    };
    assert!(tuning.validate().is_err());
    assert!(RankScale::new(1.0, 5.0, 100.0, tuning).is_err());
}
