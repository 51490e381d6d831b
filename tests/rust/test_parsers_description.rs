use super::*;

fn parse(src: &str) -> Result<TreeDescription, ParseError> {
    DescriptionParser.parse(src)
}

#[test]
fn test_content_strips_comments() {
    assert_eq!(content("  values 1 2  # trailing"), "values 1 2");
    assert_eq!(content("# whole line"), "");
    assert_eq!(content("   "), "");
}

#[test]
fn test_parse_static_defaults() {
    let desc = parse("static\nvalues 5 3 8 1\n").unwrap();
    assert!(desc.is_static());
    assert_eq!(desc.aggregate, Aggregate::Sum);
    assert_eq!(
        desc.shape,
        TreeShape::Static {
            values: vec![5, 3, 8, 1],
            base: IndexBase::One,
        }
    );
    assert!(desc.assignments.is_empty());
}

#[test]
fn test_parse_static_full() {
    let src = "\
# a small min tree
STATIC min
values -2 7 4
base 0
set 1 = -9   # overwrite
set 2=3
";
    let desc = parse(src).unwrap();
    assert_eq!(desc.aggregate, Aggregate::Min);
    assert_eq!(
        desc.shape,
        TreeShape::Static {
            values: vec![-2, 7, 4],
            base: IndexBase::Zero,
        }
    );
    assert_eq!(
        desc.assignments,
        vec![
            Assignment {
                index: 1,
                value: -9,
                line: 5,
            },
            Assignment {
                index: 2,
                value: 3,
                line: 6,
            },
        ]
    );
}

#[test]
fn test_parse_dynamic_range_forms() {
    let a = parse("dynamic max\nrange 0 15").unwrap();
    let b = parse("dynamic max\nrange 0..15").unwrap();
    assert_eq!(a, b);
    assert!(!a.is_static());
    assert_eq!(a.aggregate, Aggregate::Max);
    assert_eq!(a.shape, TreeShape::Dynamic { l: 0, r: 15 });
}

#[test]
fn test_parse_dynamic_negative_bounds() {
    let desc = parse("dynamic\nrange -4 .. 3\nset -4 = 1").unwrap();
    assert_eq!(desc.shape, TreeShape::Dynamic { l: -4, r: 3 });
    assert_eq!(desc.assignments[0].index, -4);
}

#[test]
fn test_parse_empty() {
    let err = parse("\n  # nothing here\n").unwrap_err();
    assert_eq!(err.line, 0);
    assert!(err.message.contains("empty"));
}

#[test]
fn test_parse_bad_header() {
    let err = parse("\n\ntree sum\nvalues 1").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("static|dynamic"));
}

#[test]
fn test_parse_unknown_aggregate() {
    let err = parse("static avg\nvalues 1").unwrap_err();
    assert_eq!(err.line, 1);
    assert!(err.message.contains("avg"));
}

#[test]
fn test_parse_missing_values() {
    let err = parse("static\nset 0 = 1").unwrap_err();
    assert_eq!(err.line, 0);
    assert!(err.message.contains("'values'"));
}

#[test]
fn test_parse_missing_range() {
    let err = parse("dynamic").unwrap_err();
    assert_eq!(err.line, 0);
    assert!(err.message.contains("'range'"));
}

#[test]
fn test_parse_statement_kind_mismatch() {
    let err = parse("dynamic\nvalues 1 2").unwrap_err();
    assert_eq!(err.line, 2);
    let err = parse("static\nrange 0 3").unwrap_err();
    assert_eq!(err.line, 2);
    let err = parse("dynamic\nrange 0 3\nbase 0").unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn test_parse_duplicates() {
    let err = parse("static\nvalues 1\nvalues 2").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("duplicate"));
    let err = parse("dynamic\nrange 0 1\nrange 0 2").unwrap_err();
    assert_eq!(err.line, 3);
}

#[test]
fn test_parse_bad_base() {
    let err = parse("static\nvalues 1\nbase 2").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("0 or 1"));
}

#[test]
fn test_parse_unrecognised_line() {
    let err = parse("static\nvalues 1 2\nquery 0 1").unwrap_err();
    assert_eq!(err.line, 3);
    assert!(err.message.contains("query 0 1"));
}

#[test]
fn test_parse_number_overflow() {
    let err = parse("static\nvalues 99999999999999999999").unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("invalid number"));
}

#[test]
fn test_error_display_has_line() {
    let err = parse("static\nvalues x").unwrap_err();
    assert!(err.to_string().starts_with("line 2: "));
}
