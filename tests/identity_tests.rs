use tracegantt::GanttError;
use tracegantt::trace::TaskIdentity;

const LABEL: &str = ";bots/fib.c;fib_task;118;5;;1";

#[test]
fn decode_exposes_structured_fields() {
    let identity = TaskIdentity::decode(LABEL).expect("decode");

    assert_eq!(identity.source_file(), "bots/fib.c");
    assert_eq!(identity.function(), "fib_task");
    assert_eq!(identity.line(), "118");
    assert_eq!(identity.column(), "5");
    assert_eq!(identity.end_marker(), "1");
}

#[test]
fn reassemble_reproduces_the_label_exactly() {
    let identity = TaskIdentity::decode(LABEL).expect("decode");

    assert_eq!(identity.reassemble(), LABEL);
}

#[test]
fn blank_separator_fields_survive_round_trip() {
    let label = ";;;;0;;"; // every non-positional field empty
    let identity = TaskIdentity::decode(label).expect("decode");

    assert_eq!(identity.reassemble(), label);
    assert_eq!(identity.function(), "");
    assert_eq!(identity.end_marker(), "");
}

#[test]
fn too_few_fields_is_a_decode_error() {
    let err = TaskIdentity::decode("a;b;c").expect_err("must fail");

    match err {
        GanttError::MalformedIdentity { label, parts } => {
            assert_eq!(label, "a;b;c");
            assert_eq!(parts, 3);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn too_many_fields_is_a_decode_error() {
    let err = TaskIdentity::decode(";a;b;1;2;;3;extra").expect_err("must fail");

    assert!(matches!(
        err,
        GanttError::MalformedIdentity { parts: 8, .. }
    ));
}

#[test]
fn numeric_fields_parse_on_demand() {
    let identity = TaskIdentity::decode(LABEL).expect("decode");

    assert_eq!(identity.line_number().expect("line"), 118);
    assert_eq!(identity.end_marker_value().expect("marker"), 1);
}

#[test]
fn non_numeric_line_only_fails_when_parsed() {
    let identity = TaskIdentity::decode(";f.c;fn;not-a-line;5;;1").expect("decode");

    assert_eq!(identity.line(), "not-a-line");
    assert!(matches!(
        identity.line_number(),
        Err(GanttError::InvalidData(_))
    ));
}

#[test]
fn zero_line_and_column_means_no_source_location() {
    let unknown = TaskIdentity::decode(";f.c;fn;0;0;;1").expect("decode");
    let known = TaskIdentity::decode(";f.c;fn;0;7;;1").expect("decode");

    assert!(!unknown.has_source_location());
    assert!(known.has_source_location());
}
