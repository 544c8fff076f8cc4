use super::*;

fn doc_with(text: &str) -> Document {
    let mut doc = Document::new();
    doc.load(PathBuf::from("/tmp/a.txt"), text);
    doc
}

#[test]
fn new_document_resets_everything() {
    let mut doc = doc_with("hello\nworld\n");
    doc.move_cursor(Motion::DocumentEnd, false);
    doc.insert_text("!");
    assert!(doc.is_dirty());

    doc.new_document();

    assert_eq!(doc.text(), "");
    assert!(doc.source_path().is_none());
    assert_eq!(doc.cursor(), 0);
    assert!(doc.selection().is_none());
    assert!(!doc.is_dirty());
}

#[test]
fn load_replaces_content_and_path() {
    let mut doc = Document::new();
    doc.insert_text("scratch");
    let before = doc.version();

    doc.load(PathBuf::from("/tmp/notes.txt"), "line one\n");

    assert_eq!(doc.text(), "line one\n");
    assert_eq!(doc.source_path(), Some(Path::new("/tmp/notes.txt")));
    assert_eq!(doc.file_name().as_deref(), Some("notes.txt"));
    assert_eq!(doc.cursor(), 0);
    assert!(!doc.is_dirty());
    assert!(doc.version() > before);
}

#[test]
fn insert_replaces_selection() {
    let mut doc = doc_with("hello world");
    doc.move_cursor(Motion::LineEnd, false);
    for _ in 0..5 {
        doc.move_cursor(Motion::Left, true);
    }
    assert_eq!(doc.selected_text().as_deref(), Some("world"));

    doc.insert_text("there");

    assert_eq!(doc.text(), "hello there");
    assert!(doc.selection().is_none());
    assert_eq!(doc.cursor(), 11);
}

#[test]
fn backspace_removes_whole_grapheme() {
    let mut doc = Document::new();
    doc.insert_text("ae\u{301}");
    assert_eq!(doc.len_chars(), 3);

    assert!(doc.delete_backward());

    assert_eq!(doc.text(), "a");
    assert_eq!(doc.cursor(), 1);
}

#[test]
fn backspace_at_line_start_joins_lines() {
    let mut doc = doc_with("ab\ncd");
    doc.set_cursor_line_col(1, 0, false);

    assert!(doc.delete_backward());

    assert_eq!(doc.text(), "abcd");
    assert_eq!(doc.cursor_line_col(), (0, 2));
}

#[test]
fn delete_at_boundaries_is_noop() {
    let mut doc = doc_with("x");
    assert!(!doc.delete_backward());
    doc.move_cursor(Motion::DocumentEnd, false);
    assert!(!doc.delete_forward());
    assert!(!doc.is_dirty());
}

#[test]
fn vertical_motion_keeps_preferred_column() {
    let mut doc = doc_with("abcdef\nab\nabcdef");
    doc.set_cursor_line_col(0, 5, false);

    doc.move_cursor(Motion::Down, false);
    assert_eq!(doc.cursor_line_col(), (1, 2));

    doc.move_cursor(Motion::Down, false);
    assert_eq!(doc.cursor_line_col(), (2, 5));

    doc.move_cursor(Motion::Up, false);
    doc.move_cursor(Motion::Up, false);
    assert_eq!(doc.cursor_line_col(), (0, 5));

    doc.move_cursor(Motion::Up, false);
    assert_eq!(doc.cursor_line_col(), (0, 0));
}

#[test]
fn page_motion_clamps_to_document() {
    let text = (0..30).map(|i| format!("line {i}\n")).collect::<String>();
    let mut doc = doc_with(&text);

    doc.move_cursor(Motion::PageDown(10), false);
    assert_eq!(doc.cursor_line_col().0, 10);

    doc.move_cursor(Motion::PageDown(100), false);
    assert_eq!(doc.cursor(), doc.len_chars());

    doc.move_cursor(Motion::PageUp(100), false);
    assert_eq!(doc.cursor(), 0);
}

#[test]
fn left_with_selection_collapses_to_start() {
    let mut doc = doc_with("hello");
    doc.select_all();

    assert!(doc.move_cursor(Motion::Left, false));

    assert_eq!(doc.cursor(), 0);
    assert!(doc.selection().is_none());
}

#[test]
fn cut_selection_returns_text_and_removes_it() {
    let mut doc = doc_with("one two");
    doc.set_cursor_line_col(0, 3, false);
    doc.move_cursor(Motion::LineEnd, true);

    assert_eq!(doc.cut_selection().as_deref(), Some(" two"));
    assert_eq!(doc.text(), "one");
    assert!(doc.cut_selection().is_none());
}

#[test]
fn clear_all_keeps_source_path() {
    let mut doc = doc_with("content");
    assert!(doc.clear_all());
    assert_eq!(doc.text(), "");
    assert_eq!(doc.source_path(), Some(Path::new("/tmp/a.txt")));
    assert!(doc.is_dirty());
    assert!(!doc.clear_all());
}

#[test]
fn select_all_covers_document() {
    let mut doc = doc_with("abc\ndef");
    assert!(doc.select_all());
    assert_eq!(doc.selected_text().as_deref(), Some("abc\ndef"));
    assert!(!doc.select_all());
    assert!(doc.clear_selection());
    assert!(doc.selection().is_none());
}

#[test]
fn line_len_excludes_line_break() {
    let doc = doc_with("abc\r\nde\n");
    assert_eq!(doc.line_len(0), 3);
    assert_eq!(doc.line_len(1), 2);
    assert_eq!(doc.line_len(2), 0);
    assert_eq!(doc.line_len(99), 0);
}

#[test]
fn normalize_line_endings_converts_cr_variants() {
    assert_eq!(normalize_line_endings("a\r\nb\rc\n"), "a\nb\nc\n");
    assert_eq!(normalize_line_endings("plain"), "plain");
}

#[test]
fn mark_saved_clears_dirty_and_sets_path() {
    let mut doc = Document::new();
    doc.insert_text("x");
    doc.mark_saved(PathBuf::from("/tmp/out.txt"));
    assert!(!doc.is_dirty());
    assert_eq!(doc.title(), "out.txt");
}
