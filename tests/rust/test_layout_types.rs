use super::*;

#[test]
fn test_span_mid_floors() {
    assert_eq!(Span::new(0, 3).mid(), 1);
    assert_eq!(Span::new(0, 4).mid(), 2);
    assert_eq!(Span::new(-3, 0).mid(), -2);
}

#[test]
fn test_span_mid_at_i64_limits() {
    assert_eq!(Span::new(i64::MAX - 7, i64::MAX).mid(), i64::MAX - 4);
    assert_eq!(Span::new(i64::MAX - 1, i64::MAX).mid(), i64::MAX - 1);
    assert_eq!(Span::new(i64::MIN, i64::MIN + 1).mid(), i64::MIN);
    assert_eq!(Span::new(i64::MIN, i64::MAX).mid(), -1);
    assert_eq!(Span::new(-5, -2).mid(), -4);

    let s = Span::new(i64::MAX - 1, i64::MAX);
    assert_eq!(s.left_half(), Span::new(i64::MAX - 1, i64::MAX - 1));
    assert_eq!(s.right_half(), Span::new(i64::MAX, i64::MAX));
}

#[test]
fn test_span_halves() {
    let s = Span::new(0, 4);
    assert_eq!(s.left_half(), Span::new(0, 2));
    assert_eq!(s.right_half(), Span::new(3, 4));
    assert!(!s.is_unit());
    assert!(Span::new(2, 2).is_unit());
}

#[test]
fn test_span_contains() {
    let s = Span::new(1, 4);
    assert!(s.contains(1));
    assert!(s.contains(4));
    assert!(!s.contains(0));
    assert!(!s.contains(5));
}

#[test]
fn test_label_display() {
    let label = NodeLabel::new(vec!["10".to_string()], Span::new(0, 3));
    assert_eq!(label.to_string(), "10 [0,3]");
    let bare = NodeLabel::new(Vec::new(), Span::new(2, 2));
    assert_eq!(bare.to_string(), "[2,2]");
}

#[test]
fn test_labels_differ_by_span() {
    let a = NodeLabel::new(vec!["1".to_string()], Span::new(0, 0));
    let b = NodeLabel::new(vec!["1".to_string()], Span::new(1, 1));
    assert_ne!(a, b);
}

#[test]
fn test_node_attrs_impls() {
    assert_eq!(7i64.attrs(), vec!["7"]);
    assert_eq!("x".attrs(), vec!["x"]);
    assert_eq!(().attrs(), Vec::<String>::new());
    assert_eq!(vec![1, 2].attrs(), vec!["1", "2"]);
}

#[test]
fn test_point_new() {
    let p = Point::new(-2.0, -1.0);
    assert_eq!(p.x, -2.0);
    assert_eq!(p.y, -1.0);
}
