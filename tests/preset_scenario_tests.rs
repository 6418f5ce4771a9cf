use approx::assert_relative_eq;
use ca_bench_charts::charts::{format_value, BAR_WIDTH};
use ca_bench_charts::presets;
use ca_bench_charts::{render, ChartError, ChartRequest, RenderOptions, RenderTarget, Series};

fn headless(request: &ChartRequest) -> ca_bench_charts::Result<ca_bench_charts::ChartHandle> {
    render(request, &RenderTarget::Headless, &RenderOptions::default())
}

#[test]
fn rendering_time_preset_builds_three_groups_six_bars() {
    let request = presets::rendering_time();
    let handle = headless(&request).expect("valid preset");
    let layout = &handle.layout;

    assert_eq!(layout.category_count(), 3);
    assert_eq!(handle.bar_count(), 6);
    assert_eq!(layout.title, "Rendering time per frame");
    assert_eq!(layout.y_axis_label, "Time (μs)");
    assert_eq!(layout.x_axis_label, "Size of CA Grid");
    assert_eq!(layout.left_series_name, "GPU");
    assert_eq!(layout.right_series_name, "CPU");

    let labels: Vec<&str> = layout.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["250x250", "500x500", "1300x1300"]);
    assert!(handle.output.is_none());
}

#[test]
fn frame_rate_preset_annotations_match_values() {
    let handle = headless(&presets::frame_rate()).expect("valid preset");
    let layout = &handle.layout;

    assert_eq!(layout.title, "Frame Rate Per Second");
    assert_eq!(layout.y_axis_label, "FPS");

    let left: Vec<&str> = layout
        .series_bars(Series::Left)
        .map(|b| b.annotation.as_str())
        .collect();
    let right: Vec<&str> = layout
        .series_bars(Series::Right)
        .map(|b| b.annotation.as_str())
        .collect();
    assert_eq!(left, ["1260.2", "580.0", "175.2"]);
    assert_eq!(right, ["1145.5", "258.75", "45.5"]);
}

#[test]
fn bar_heights_equal_input_values() {
    let request = presets::rendering_time();
    let handle = headless(&request).expect("valid preset");

    for series in Series::BOTH {
        let heights: Vec<f64> = handle.layout.series_bars(series).map(|b| b.height).collect();
        assert_eq!(heights, request.values(series));
    }
}

#[test]
fn single_category_still_draws_two_bars() {
    let request = ChartRequest::new("one")
        .with_labels(["only"])
        .with_left("GPU", vec![42.0])
        .with_right("CPU", vec![7.5]);
    let handle = headless(&request).expect("single category is valid");
    let layout = &handle.layout;

    assert_eq!(handle.bar_count(), 2);
    assert_relative_eq!(layout.x_range.0, -0.5);
    assert_relative_eq!(layout.x_range.1, 0.5);

    let left = layout.series_bars(Series::Left).next().unwrap();
    let right = layout.series_bars(Series::Right).next().unwrap();
    assert_relative_eq!(left.center_x, -BAR_WIDTH / 2.0);
    assert_relative_eq!(right.center_x, BAR_WIDTH / 2.0);
    assert!(left.right_edge() <= right.left_edge() + 1e-12);
    assert!(left.left_edge() > layout.x_range.0);
    assert!(right.right_edge() < layout.x_range.1);
}

#[test]
fn mismatched_lengths_are_rejected_before_drawing() {
    let request = presets::rendering_time().with_left("GPU", vec![1.0, 2.0]);
    // Window target: validation must fail before any window is opened
    let err = render(&request, &RenderTarget::Window, &RenderOptions::default())
        .expect_err("length mismatch");
    assert!(matches!(
        err,
        ChartError::LengthMismatch {
            series: Series::Left,
            expected: 3,
            actual: 2
        }
    ));
}

#[test]
fn infinite_value_is_rejected() {
    let request = presets::frame_rate().with_right("CPU", vec![1.0, f64::INFINITY, 3.0]);
    let err = headless(&request).expect_err("non-finite value");
    assert!(matches!(err, ChartError::NonFiniteValue { index: 1, .. }));
    assert!(err.to_string().contains("right"));
}

#[test]
fn layout_json_carries_bars_and_labels() {
    let handle = headless(&presets::rendering_time()).expect("valid preset");
    let json = handle.layout.to_json().expect("serializable");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["bars"].as_array().map(Vec::len), Some(6));
    assert_eq!(value["ticks"][2]["label"], "1300x1300");
    assert_eq!(value["bars"][0]["annotation"], format_value(428.75));
}
