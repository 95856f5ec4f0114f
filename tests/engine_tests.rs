use chrono::NaiveDate;
use rank_chart::api::{ChartConfig, DailyRankChart};
use rank_chart::core::{RankObservation, RawRankRecord, Viewport};
use rank_chart::error::ChartError;
use rank_chart::render::NullRenderer;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn chart() -> DailyRankChart<NullRenderer> {
    DailyRankChart::new(
        NullRenderer::default(),
        Viewport::new(300, 200),
        ChartConfig::default(),
    )
    .expect("chart init")
}

fn sample_records() -> Vec<RawRankRecord> {
    vec![
        RawRankRecord::new("2014-11-17", 5.0),
        RawRankRecord::new("2014-11-15", 3.0),
        RawRankRecord::new("2014-11-16", 2.0),
    ]
}

#[test]
fn zero_sized_empty_chart_renders_until_data_needs_room() {
    let mut chart = DailyRankChart::new(
        NullRenderer::default(),
        Viewport::new(0, 0),
        ChartConfig::default(),
    )
    .expect("an empty chart accepts any size");
    chart.render().expect("empty frame renders");
    assert_eq!(chart.renderer().render_count, 1);

    let err = chart
        .set_raw_records(&sample_records())
        .expect_err("no room for the plot");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 0 }));
    assert!(chart.layout().is_empty());

    chart.resize(Viewport::new(565, 200)).expect("resize");
    chart.set_raw_records(&sample_records()).expect("set records");
    assert_eq!(chart.layout().observations().len(), 3);
}

#[test]
fn raw_records_are_ingested_and_sorted() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");

    let days: Vec<NaiveDate> = chart
        .layout()
        .observations()
        .iter()
        .map(|observation| observation.day)
        .collect();
    assert_eq!(days, vec![day(2014, 11, 15), day(2014, 11, 16), day(2014, 11, 17)]);
}

#[test]
fn malformed_record_is_rejected_and_previous_data_kept() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");

    let bad = vec![
        RawRankRecord::new("2014-11-18", 4.0),
        RawRankRecord::new("2014-13-01", 4.0),
    ];
    let err = chart.set_raw_records(&bad).expect_err("invalid month");
    assert!(matches!(err, ChartError::MalformedObservation { index: 1, .. }));
    assert_eq!(chart.layout().observations().len(), 3);

    let negative = vec![RawRankRecord::new("2014-11-18", -2.0)];
    let err = chart.set_raw_records(&negative).expect_err("negative rank");
    assert!(matches!(err, ChartError::MalformedObservation { index: 0, .. }));
}

#[test]
fn render_passes_all_layers_to_renderer() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");
    chart.render().expect("render");

    let renderer = chart.into_renderer();
    // One band, one curve, three regions.
    assert_eq!(renderer.last_path_count, 5);
    assert_eq!(renderer.last_hit_region_count, 3);
    // Four gridlines.
    assert_eq!(renderer.last_line_count, 4);
    // One x label and four y labels.
    assert_eq!(renderer.last_text_count, 5);
    assert_eq!(renderer.render_count, 1);
    assert!(renderer.last_item_hit_region.is_some());
}

#[test]
fn empty_chart_renders_an_empty_frame() {
    let mut chart = chart();
    assert!(chart.build_frame().is_empty());
    chart.render().expect("render");
    assert_eq!(chart.renderer().last_path_count, 0);
    assert_eq!(chart.renderer().render_count, 1);

    chart.renderer_mut().render_count = 0;
    chart.render().expect("render again");
    assert_eq!(chart.renderer().render_count, 1);
}

#[test]
fn pointer_move_resolves_hovered_observation() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");

    // Margin left 45 and top 20 shift plot space into the viewport.
    let hovered = chart.pointer_move(45.0 + 117.5, 20.0 + 30.0);
    assert_eq!(hovered, Some(1));

    let hover = chart.hover_state();
    assert!(hover.visible);
    assert_eq!(hover.hovered_day, Some(day(2014, 11, 16)));
    assert_eq!(hover.hovered_rank, Some(2.0));
    assert_eq!(hover.snapped_x, Some(162.5));
    assert_eq!(hover.snapped_y, Some(37.5));

    assert_eq!(chart.pointer_move(46.0, 21.0), Some(0));
    assert_eq!(chart.pointer_move(45.0 + 234.0, 20.0 + 139.0), Some(2));
}

#[test]
fn pointer_outside_plot_or_leaving_clears_hover() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");

    assert_eq!(chart.pointer_move(5.0, 5.0), None);
    let hover = chart.hover_state();
    assert!(hover.visible);
    assert_eq!(hover.hovered_index, None);

    chart.pointer_move(100.0, 50.0);
    chart.pointer_leave();
    assert!(!chart.hover_state().visible);
    assert_eq!(chart.hover_state().hovered_index, None);
}

#[test]
fn resize_rebuilds_layout_and_rejects_degenerate_sizes() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");

    chart.resize(Viewport::new(565, 200)).expect("resize");
    assert_eq!(chart.layout().plot().width, 500.0);
    assert_eq!(chart.layout().points()[2].x, 500.0);

    let err = chart.resize(Viewport::new(50, 50)).expect_err("too small");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
    assert_eq!(chart.viewport(), Viewport::new(565, 200));

    chart.set_data(Vec::new()).expect("clear data");
    chart.resize(Viewport::new(50, 50)).expect("empty chart shrinks freely");
    assert_eq!(chart.layout().plot().area(), 0.0);
}

#[test]
fn data_change_resets_hover() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");
    chart.pointer_move(162.5, 37.5);
    assert!(chart.hover_state().is_resolved());

    chart
        .set_data(vec![
            RankObservation::new(day(2014, 11, 1), 1.0).expect("valid observation"),
        ])
        .expect("set data");
    assert!(!chart.hover_state().visible);
}

#[test]
fn config_changes_apply_on_next_layout() {
    let mut chart = chart();
    chart.set_raw_records(&sample_records()).expect("set records");

    let config = ChartConfig {
        y_tick_count: 2,
        ..ChartConfig::default()
    };
    chart.set_config(config).expect("set config");
    assert_eq!(chart.config().y_tick_count, 2);
    assert!(chart.layout().y_ticks().len() < 4);

    let invalid = ChartConfig::default().with_tick_interval_days(0);
    assert!(chart.set_config(invalid).is_err());
    assert_eq!(chart.config().y_tick_count, 2);
}
