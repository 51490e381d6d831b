use super::*;

#[test]
fn test_rect_edges() {
    let r = Rect::new(1, 2, 10, 3);
    assert_eq!(r.right(), 10);
    assert_eq!(r.bottom(), 4);
}

#[test]
fn test_canvas_set_get() {
    let mut c = Canvas::new(5, 5, CharSet::Unicode);
    c.set(2, 3, 'X');
    assert_eq!(c.get(2, 3), 'X');
    assert_eq!(c.get(0, 0), ' ');
}

#[test]
fn test_canvas_out_of_bounds_is_dropped() {
    let mut c = Canvas::new(3, 3, CharSet::Unicode);
    c.set(10, 10, 'X');
    c.set(-1, 0, 'X');
    assert_eq!(c.get(10, 10), ' ');
    assert_eq!(c.get(-1, 0), ' ');
}

#[test]
fn test_canvas_hline_ends() {
    let mut c = Canvas::new(10, 3, CharSet::Unicode);
    c.hline(1, 5, 2);
    for col in 2..=5 {
        assert_eq!(c.get(col, 1), '─');
    }
    assert_eq!(c.get(1, 1), ' ');
    assert_eq!(c.get(6, 1), ' ');
}

#[test]
fn test_canvas_lines_join() {
    let mut c = Canvas::new(10, 10, CharSet::Unicode);
    c.hline(5, 2, 5);
    c.vline(5, 5, 8);
    // the horizontal run ends where the vertical one starts downward
    assert_eq!(c.get(5, 5), '┐');
    assert_eq!(c.get(5, 6), '│');
}

#[test]
fn test_merge_arms_into_box_border() {
    let mut c = Canvas::new(10, 5, CharSet::Unicode);
    c.draw_box(Rect::new(0, 0, 7, 3), &BoxChars::unicode());
    c.merge_arms(3, 2, Arms::DOWN);
    c.merge_arms(3, 0, Arms::UP);
    assert_eq!(c.get(3, 2), '┬');
    assert_eq!(c.get(3, 0), '┴');
}

#[test]
fn test_canvas_draw_box() {
    let mut c = Canvas::new(10, 5, CharSet::Unicode);
    c.draw_box(Rect::new(0, 0, 5, 3), &BoxChars::rounded());
    assert_eq!(c.get(0, 0), '╭');
    assert_eq!(c.get(4, 0), '╮');
    assert_eq!(c.get(0, 2), '╰');
    assert_eq!(c.get(4, 2), '╯');
    assert_eq!(c.get(1, 0), '─');
    assert_eq!(c.get(0, 1), '│');
}

#[test]
fn test_canvas_write_str_clips() {
    let mut c = Canvas::new(4, 1, CharSet::Ascii);
    c.write_str(2, 0, "Hello");
    assert_eq!(c.get(2, 0), 'H');
    assert_eq!(c.get(3, 0), 'e');
    assert_eq!(c.to_string(), "  He\n");
}

#[test]
fn test_canvas_to_string_trims() {
    let mut c = Canvas::new(10, 3, CharSet::Ascii);
    c.set(0, 0, 'A');
    let s = c.to_string();
    assert_eq!(s, "A\n");
    assert_eq!(Canvas::new(3, 3, CharSet::Ascii).to_string(), "");
}
