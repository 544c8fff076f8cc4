use super::*;

fn doc(text: &str) -> Document {
    let mut doc = Document::new();
    doc.insert_text(text);
    doc
}

fn chars(text: &str) -> Vec<char> {
    text.chars().collect()
}

#[test]
fn wrap_prefers_whitespace_and_hangs_trailing_space() {
    let geom = ViewportGeometry::new(5, 10, true, 4);
    assert_eq!(wrap_segments(&chars("hello world"), &geom), vec![0..6, 6..11]);
    assert_eq!(wrap_segments(&chars("abcdefgh"), &geom), vec![0..5, 5..8]);
    assert_eq!(wrap_segments(&chars("ab cdefg"), &geom), vec![0..3, 3..8]);
    assert_eq!(wrap_segments(&chars(""), &geom), vec![0..0]);
}

#[test]
fn wrap_hangs_every_space_of_a_run() {
    let geom = ViewportGeometry::new(3, 10, true, 4);
    assert_eq!(wrap_segments(&chars("ab   cd"), &geom), vec![0..5, 5..7]);
    assert_eq!(wrap_segments(&chars("abc    d"), &geom), vec![0..7, 7..8]);
    // Trailing spaces stay on the row they hang from.
    assert_eq!(wrap_segments(&chars("     "), &geom), vec![0..5]);
}

#[test]
fn no_wrap_keeps_one_segment() {
    let geom = ViewportGeometry::new(5, 10, false, 4);
    assert_eq!(wrap_segments(&chars("hello world"), &geom), vec![0..11]);
}

#[test]
fn boundary_position_belongs_to_next_segment() {
    let segments = vec![0..6, 6..11];
    assert_eq!(segment_for_col(&segments, 5), 0);
    assert_eq!(segment_for_col(&segments, 6), 1);
    assert_eq!(segment_for_col(&segments, 11), 1);
}

#[test]
fn tabs_and_wide_chars_have_display_width() {
    assert_eq!(char_width('\t', 1, 4), 3);
    assert_eq!(char_width('\t', 4, 4), 4);
    assert_eq!(char_width('中', 0, 4), 2);
    assert_eq!(display_col(&chars("a\tb"), 0, 3, 4), 5);
}

#[test]
fn cursor_below_viewport_scrolls_down_then_back_up() {
    let text: String = (0..30).map(|i| format!("line {i}\n")).collect();
    let mut doc = doc(&text);
    let geom = ViewportGeometry::new(20, 10, false, 4);
    let mut scroll = ScrollState::default();

    doc.set_cursor_line_col(25, 0, false);
    scroll.ensure_cursor_visible(&doc, &geom);
    assert_eq!(scroll.top_line, 16);
    assert_eq!(scroll.cursor_cell(&doc, &geom), Some((0, 9)));

    doc.set_cursor_line_col(3, 2, false);
    scroll.ensure_cursor_visible(&doc, &geom);
    assert_eq!(scroll.top_line, 3);
    assert_eq!(scroll.cursor_cell(&doc, &geom), Some((2, 0)));
}

#[test]
fn long_line_scrolls_horizontally_without_wrap() {
    let mut doc = doc("0123456789abcdef");
    let geom = ViewportGeometry::new(10, 5, false, 4);
    let mut scroll = ScrollState::default();

    doc.set_cursor_line_col(0, 15, false);
    scroll.ensure_cursor_visible(&doc, &geom);

    assert_eq!(scroll.left_col, 6);
    assert_eq!(scroll.cursor_cell(&doc, &geom), Some((9, 0)));
    assert_eq!(scroll.hit_test(&doc, &geom, 0, 0), (0, 6));
}

#[test]
fn wrapped_rows_map_cursor_and_clicks() {
    let doc = doc("hello world\nnext");
    let geom = ViewportGeometry::new(5, 3, true, 4);
    let scroll = ScrollState::default();

    let rows = scroll.visible_rows(&doc, &geom);
    assert_eq!(
        rows,
        vec![
            VisualRow { line: 0, chars: 0..6 },
            VisualRow { line: 0, chars: 6..11 },
            VisualRow { line: 1, chars: 0..4 },
        ]
    );

    assert_eq!(scroll.cursor_cell(&doc, &geom), Some((4, 2)));
    assert_eq!(scroll.hit_test(&doc, &geom, 2, 1), (0, 8));
    assert_eq!(scroll.hit_test(&doc, &geom, 9, 0), (0, 5));
    assert_eq!(scroll.hit_test(&doc, &geom, 1, 10), (1, 1));
}

#[test]
fn cursor_on_last_segment_walks_back_within_line() {
    let doc = doc("aaaa bbbb cccc dddd");
    let geom = ViewportGeometry::new(5, 2, true, 4);
    let mut scroll = ScrollState::default();

    scroll.ensure_cursor_visible(&doc, &geom);

    assert_eq!((scroll.top_line, scroll.top_sub), (0, 2));
    assert_eq!(scroll.cursor_cell(&doc, &geom), Some((4, 1)));
}

#[test]
fn wheel_scroll_moves_by_rows_and_stops_at_end() {
    let doc = doc("hello world\nnext");
    let geom = ViewportGeometry::new(5, 3, true, 4);
    let mut scroll = ScrollState::default();

    assert!(scroll.scroll_rows(&doc, &geom, 1));
    assert_eq!((scroll.top_line, scroll.top_sub), (0, 1));
    assert!(scroll.scroll_rows(&doc, &geom, 5));
    assert_eq!((scroll.top_line, scroll.top_sub), (1, 0));
    assert!(!scroll.scroll_rows(&doc, &geom, 1));

    assert!(scroll.scroll_rows(&doc, &geom, -1));
    assert_eq!((scroll.top_line, scroll.top_sub), (0, 1));
}

#[test]
fn horizontal_scroll_is_ignored_when_wrapping() {
    let mut scroll = ScrollState::default();
    assert!(!scroll.scroll_columns(&ViewportGeometry::new(5, 3, true, 4), 3));
    assert!(scroll.scroll_columns(&ViewportGeometry::new(5, 3, false, 4), 3));
    assert_eq!(scroll.left_col, 3);
    scroll.scroll_columns(&ViewportGeometry::new(5, 3, false, 4), -10);
    assert_eq!(scroll.left_col, 0);
}
