// tests/sample_loader_test.rs

mod common;

use zetasdr_plot::data_input::column_schema::{ColumnSchema, Field};
use zetasdr_plot::data_input::sample_loader::load_samples;
use zetasdr_plot::error::PlotError;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_receiver_schema_yields_aligned_series() {
    let dir = common::scratch_dir("loader_aligned");
    let input = common::write_file(&dir, "zetasdr.txt", &common::zetasdr_file(25));
    let fields = [Field::Signal, Field::CapC2, Field::CapC3, Field::MixerInputA];

    let samples = load_samples(&input, &ColumnSchema::zetasdr(), &fields).unwrap();

    assert_eq!(samples.series.len(), 5);
    assert_eq!(samples.row_count, 25);
    for series in &samples.series {
        assert_eq!(series.values.len(), 25, "{:?} is misaligned", series.field);
    }

    // Time is rescaled from seconds to microseconds.
    let time = samples.get(Field::Time).unwrap();
    for (i, t) in time.iter().enumerate() {
        let raw_seconds = (i + 1) as f64 * 1e-7;
        assert!(approx_eq(*t, raw_seconds * 1_000_000.0), "row {i}: {t}");
    }
    let interval = samples.sample_interval_us().unwrap();
    assert!(approx_eq(interval, 0.1));
}

#[test]
fn test_comment_rows_are_excluded() {
    let dir = common::scratch_dir("loader_comments");
    let mut text = common::zetasdr_file(3);
    text.push_str("# trailing comment, 1, 2\n");
    text.push_str(&common::zetasdr_file(2).lines().skip(1).collect::<Vec<_>>().join("\n"));
    text.push('\n');
    let input = common::write_file(&dir, "zetasdr.txt", &text);

    let samples = load_samples(&input, &ColumnSchema::zetasdr(), &[Field::Signal]).unwrap();

    assert_eq!(samples.row_count, 5);
    assert_eq!(samples.values(Field::Signal).len(), 5);
    assert_eq!(samples.values(Field::Time).len(), 5);
    let header = samples.header.unwrap();
    assert_eq!(header[0], "timestep");
    assert_eq!(header[12], "demodulated");
}

#[test]
fn test_non_numeric_modulation_is_malformed_row() {
    let dir = common::scratch_dir("loader_malformed");
    let mut lines: Vec<String> = common::zetasdr_file(4).lines().map(String::from).collect();
    // Line 4 of the file: heading, two good rows, then this one.
    let mut fields: Vec<String> = lines[3].split(',').map(String::from).collect();
    fields[3] = "abc".to_string();
    lines[3] = fields.join(",");
    let input = common::write_file(&dir, "zetasdr.txt", &(lines.join("\n") + "\n"));

    let result = load_samples(
        &input,
        &ColumnSchema::zetasdr(),
        &[Field::Modulation, Field::Signal],
    );

    match result {
        Err(PlotError::MalformedRow {
            path,
            line,
            column,
            value,
            ..
        }) => {
            assert_eq!(path, input);
            assert_eq!(line, 4);
            assert_eq!(column, 3);
            assert_eq!(value, "abc");
        }
        other => panic!("expected MalformedRow, got {other:?}"),
    }
}

#[test]
fn test_short_row_is_malformed_row() {
    let dir = common::scratch_dir("loader_short");
    let mut text = common::iq_mixer_file(2);
    text.push_str("30,3e-7,0.1\n");
    let input = common::write_file(&dir, "iq.txt", &text);

    let err = load_samples(&input, &ColumnSchema::iq_mixer(), &[Field::Demodulated]).unwrap_err();
    assert_eq!(err.kind(), "MalformedRow");
}

#[test]
fn test_missing_file_is_input_not_found() {
    let dir = common::scratch_dir("loader_missing");
    let err = load_samples(
        &dir.join("does_not_exist.txt"),
        &ColumnSchema::iq_mixer(),
        &[Field::Signal],
    )
    .unwrap_err();
    assert!(matches!(err, PlotError::InputNotFound { .. }));
}

#[test]
fn test_field_outside_schema_is_rejected() {
    let dir = common::scratch_dir("loader_field");
    let input = common::write_file(&dir, "iq.txt", &common::iq_mixer_file(2));
    let err = load_samples(&input, &ColumnSchema::iq_mixer(), &[Field::CapC2]).unwrap_err();
    assert!(matches!(err, PlotError::FieldNotInSchema { field: Field::CapC2, .. }));
}

#[test]
fn test_unindexed_schema_does_not_skip_comments() {
    let dir = common::scratch_dir("loader_unindexed");
    let indexed = common::iq_mixer_file(3);
    let unindexed: String = indexed
        .lines()
        .skip(1)
        .map(|line| line.splitn(2, ',').nth(1).unwrap_or("").to_string() + "\n")
        .collect();

    let input = common::write_file(&dir, "plain.txt", &unindexed);
    let samples = load_samples(&input, &ColumnSchema::iq_mixer_unindexed(), &[Field::InPhase]).unwrap();
    assert_eq!(samples.row_count, 3);

    let with_heading = format!("# time, signal\n{unindexed}");
    let input = common::write_file(&dir, "heading.txt", &with_heading);
    let err = load_samples(&input, &ColumnSchema::iq_mixer_unindexed(), &[Field::InPhase]).unwrap_err();
    assert_eq!(err.kind(), "MalformedRow");
}

#[test]
fn test_quoted_fields_and_custom_schema() {
    let dir = common::scratch_dir("loader_quoted");
    let input = common::write_file(
        &dir,
        "custom.txt",
        "\"0.0000001\",\"0.5\", 1.1 ,0.9,0.2\n0.0000002,0.6,1.2,1.0,0.2\n",
    );
    let schema = ColumnSchema::new("custom")
        .with_column(Field::Time, 0)
        .with_column(Field::Signal, 1)
        .with_column(Field::CapC2, 2)
        .with_column(Field::CapC3, 3)
        .with_column(Field::MixerInputA, 4);

    let samples = load_samples(&input, &schema, &[Field::CapC2, Field::MixerInputA]).unwrap();

    let time = samples.values(Field::Time);
    assert!(approx_eq(time[0], 0.1));
    assert!(approx_eq(time[1], 0.2));
    assert_eq!(samples.values(Field::CapC2), &[1.1, 1.2]);
    assert_eq!(samples.values(Field::MixerInputA), &[0.2, 0.2]);
    // Only requested fields (and time) are loaded.
    assert!(samples.get(Field::Signal).is_none());
}
