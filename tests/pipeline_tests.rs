use tracegantt::api::{ColorPolicy, TimelineChart, TimelineChartConfig};
use tracegantt::color::PaletteOverflow;
use tracegantt::render::NullRenderer;
use tracegantt::timeline::Granularity;
use tracegantt::{GanttError, GanttResult};

const TRACE: &str = "\
taskdebug,0,0,120,0,;bots/fib.c;fib_task;118;5;;1
taskdebug,1,10,90,0,;bots/fib.c;fib_task;118;5;;1
taskdebug,0,130,400,0,;bots/sort.c;merge_task;74;9;;1
other,junk,row
taskdebug,1,95,310,0,;bots/sort.c;merge_task;74;9;;2
taskdebug,2,0,50,0,;;implicit;0;0;;0
";

#[test]
fn end_to_end_fine_continuous_pipeline() -> GanttResult<()> {
    let config = TimelineChartConfig::default();
    let chart = TimelineChart::from_reader(TRACE.as_bytes(), &config)?;

    assert_eq!(chart.trace().events.len(), 5);
    assert_eq!(chart.trace().labels.len(), 4);

    let frame = chart.frame();
    // Workers 0, 1, 2.
    assert_eq!(frame.ticks.len(), 3);
    // Fine granularity: one bar per (worker, label) run.
    assert_eq!(frame.bars.len(), 5);
    assert_eq!(frame.legend.len(), 4);

    let mut renderer = NullRenderer::default();
    chart.render_into(&mut renderer)?;
    assert_eq!(renderer.last_bar_count, 5);
    assert_eq!(renderer.last_segment_count, 5);
    Ok(())
}

#[test]
fn coarse_discrete_pipeline_collapses_rows() -> GanttResult<()> {
    let config = TimelineChartConfig {
        granularity: Granularity::Coarse,
        color_policy: ColorPolicy::Discrete {
            overflow: PaletteOverflow::Wrap,
        },
        ..TimelineChartConfig::default()
    };
    let chart = TimelineChart::from_reader(TRACE.as_bytes(), &config)?;

    let frame = chart.frame();
    // One bar per worker under coarse grouping.
    assert_eq!(frame.bars.len(), 3);
    assert_eq!(frame.bars[0].height, 0.9);
    assert_eq!(frame.legend.len(), 4);
    Ok(())
}

#[test]
fn repeated_runs_produce_identical_frames() -> GanttResult<()> {
    let config = TimelineChartConfig::default();

    let first = TimelineChart::from_reader(TRACE.as_bytes(), &config)?;
    let second = TimelineChart::from_reader(TRACE.as_bytes(), &config)?;

    assert_eq!(first.frame(), second.frame());
    assert_eq!(first.colors(), second.colors());
    Ok(())
}

#[test]
fn malformed_significant_record_aborts_the_pipeline() {
    let input = "taskdebug,0,zero,120,0,;f.c;fn;1;1;;1\n";

    let err = TimelineChart::from_reader(input.as_bytes(), &TimelineChartConfig::default())
        .expect_err("must fail");

    assert!(matches!(err, GanttError::MalformedRecord { .. }));
}

#[test]
fn malformed_identity_aborts_continuous_coloring() {
    let input = "taskdebug,0,0,120,0,only-three;fields;here\n";

    let err = TimelineChart::from_reader(input.as_bytes(), &TimelineChartConfig::default())
        .expect_err("must fail");

    assert!(matches!(err, GanttError::MalformedIdentity { parts: 3, .. }));
}

#[test]
fn discrete_fail_policy_propagates_palette_exhaustion() {
    let mut input = String::new();
    for i in 0..11 {
        input.push_str(&format!("taskdebug,0,{i},{},0,label-{i:02}\n", i + 1));
    }
    let config = TimelineChartConfig {
        color_policy: ColorPolicy::Discrete {
            overflow: PaletteOverflow::Fail,
        },
        ..TimelineChartConfig::default()
    };

    let err =
        TimelineChart::from_reader(input.as_bytes(), &config).expect_err("must fail");

    assert!(matches!(err, GanttError::PaletteExhausted { distinct: 11, .. }));
}

#[test]
fn config_round_trips_through_json_with_defaults() {
    let config = TimelineChartConfig::default();

    let json = serde_json::to_string(&config).expect("serialize");
    let decoded: TimelineChartConfig = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, config);

    // Absent fields fall back to defaults.
    let sparse: TimelineChartConfig = serde_json::from_str("{}").expect("deserialize sparse");
    assert_eq!(sparse, TimelineChartConfig::default());
}

#[test]
fn empty_trace_builds_an_empty_frame() -> GanttResult<()> {
    let chart = TimelineChart::from_reader("".as_bytes(), &TimelineChartConfig::default())?;

    assert!(chart.frame().is_empty());
    Ok(())
}
