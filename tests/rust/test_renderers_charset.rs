use super::*;

#[test]
fn test_arms_from_char_horizontal() {
    let a = Arms::from_char('─').unwrap();
    assert!(a.contains(Arms::LEFT));
    assert!(a.contains(Arms::RIGHT));
    assert!(!a.contains(Arms::UP));
    assert!(!a.contains(Arms::DOWN));
}

#[test]
fn test_arms_from_char_rounded_corner() {
    assert_eq!(Arms::from_char('╭'), Some(Arms::DOWN | Arms::RIGHT));
    assert_eq!(Arms::from_char('╯'), Some(Arms::UP | Arms::LEFT));
}

#[test]
fn test_arms_from_char_unknown() {
    assert!(Arms::from_char('X').is_none());
    assert!(Arms::from_char(' ').is_none());
    assert!(Arms::from_char('7').is_none());
}

#[test]
fn test_arms_union() {
    let merged = (Arms::UP | Arms::RIGHT).union(Arms::DOWN | Arms::LEFT);
    assert_eq!(merged, Arms::UP | Arms::DOWN | Arms::LEFT | Arms::RIGHT);
}

#[test]
fn test_arms_to_char_unicode() {
    let cs = CharSet::Unicode;
    assert_eq!((Arms::LEFT | Arms::RIGHT | Arms::DOWN).to_char(cs), '┬');
    assert_eq!((Arms::LEFT | Arms::RIGHT | Arms::UP).to_char(cs), '┴');
    assert_eq!((Arms::UP | Arms::RIGHT).to_char(cs), '└');
    assert_eq!((Arms::LEFT | Arms::DOWN).to_char(cs), '┐');
    assert_eq!(Arms::DOWN.to_char(cs), '│');
    assert_eq!(Arms::NONE.to_char(cs), ' ');
}

#[test]
fn test_arms_to_char_ascii() {
    let cs = CharSet::Ascii;
    assert_eq!((Arms::LEFT | Arms::RIGHT | Arms::DOWN).to_char(cs), '+');
    assert_eq!((Arms::LEFT | Arms::RIGHT).to_char(cs), '-');
    assert_eq!((Arms::UP | Arms::DOWN).to_char(cs), '|');
}

#[test]
fn test_box_chars_for_node() {
    assert_eq!(BoxChars::for_node(CharSet::Unicode, false).top_left, '┌');
    assert_eq!(BoxChars::for_node(CharSet::Unicode, true).top_left, '╭');
    assert_eq!(BoxChars::for_node(CharSet::Unicode, true).horizontal, '─');
    assert_eq!(BoxChars::for_node(CharSet::Ascii, true).top_left, '+');
}

#[test]
fn test_charset_from_flag() {
    assert_eq!(CharSet::from_unicode_flag(true), CharSet::Unicode);
    assert_eq!(CharSet::from_unicode_flag(false), CharSet::Ascii);
}
