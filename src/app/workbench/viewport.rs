//! Screen mapping for the text area: wrapping, scrolling and hit testing.
//!
//! Rows are visual rows. With wrap on, a logical line spans one row per segment; with wrap
//! off every line is one row and `left_col` scrolls horizontally in display columns.

use crate::kernel::Document;
use std::ops::Range;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportGeometry {
    pub width: usize,
    pub height: usize,
    pub wrap: bool,
    pub tab_size: usize,
}

impl ViewportGeometry {
    pub fn new(width: u16, height: u16, wrap: bool, tab_size: u8) -> Self {
        Self {
            width: usize::from(width).max(1),
            height: usize::from(height).max(1),
            wrap,
            tab_size: usize::from(tab_size).max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub top_line: usize,
    /// Segment of `top_line` shown on the first row (wrap only).
    pub top_sub: usize,
    pub left_col: usize,
}

/// One screen row: `chars` is a char range within `line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualRow {
    pub line: usize,
    pub chars: Range<usize>,
}

/// Display width of `ch` at display column `col`.
pub fn char_width(ch: char, col: usize, tab_size: usize) -> usize {
    if ch == '\t' {
        return tab_size - (col % tab_size);
    }
    if ch.is_control() {
        return 1;
    }
    UnicodeWidthChar::width(ch).unwrap_or(0)
}

pub fn line_chars(doc: &Document, line: usize) -> Vec<char> {
    if line >= doc.line_count() {
        return Vec::new();
    }
    doc.rope()
        .line(line)
        .chars()
        .take(doc.line_len(line))
        .collect()
}

/// Splits a line into row-sized char ranges. Prefers breaking after whitespace; a word
/// longer than the row is broken hard. Always returns at least one range.
pub fn wrap_segments(chars: &[char], geom: &ViewportGeometry) -> Vec<Range<usize>> {
    if !geom.wrap || chars.is_empty() {
        return vec![0..chars.len()];
    }

    let mut segments = Vec::new();
    let mut start = 0usize;
    let mut col = 0usize;
    let mut break_after: Option<usize> = None;
    let mut i = 0usize;

    while i < chars.len() {
        let ch = chars[i];
        let w = char_width(ch, col, geom.tab_size);
        if col + w > geom.width && i > start {
            // A run of spaces hangs past the edge instead of starting the next row.
            let end = match break_after {
                _ if ch == ' ' => {
                    let run = chars[i..].iter().take_while(|c| **c == ' ').count();
                    i + run
                }
                Some(b) if b > start => b,
                _ => i,
            };
            segments.push(start..end);
            start = end;
            col = 0;
            break_after = None;
            i = start;
            continue;
        }
        col += w;
        if ch.is_whitespace() {
            break_after = Some(i + 1);
        }
        i += 1;
    }
    if start < chars.len() || segments.is_empty() {
        segments.push(start..chars.len());
    }
    segments
}

/// Index of the segment holding char `col`; a position on a boundary belongs to the
/// following segment.
pub fn segment_for_col(segments: &[Range<usize>], col: usize) -> usize {
    segments
        .iter()
        .rposition(|seg| seg.start <= col)
        .unwrap_or(0)
}

/// Display columns from `seg_start` up to char `col`.
pub fn display_col(chars: &[char], seg_start: usize, col: usize, tab_size: usize) -> usize {
    let end = col.min(chars.len());
    let mut x = 0usize;
    for &ch in chars.get(seg_start..end).unwrap_or(&[]) {
        x += char_width(ch, x, tab_size);
    }
    x
}

fn segment_count(doc: &Document, line: usize, geom: &ViewportGeometry) -> usize {
    if !geom.wrap {
        return 1;
    }
    wrap_segments(&line_chars(doc, line), geom).len()
}

impl ScrollState {
    /// Pulls the scroll position back inside the document after it shrank or the wrap
    /// mode changed.
    pub fn clamp(&mut self, doc: &Document, geom: &ViewportGeometry) {
        let last_line = doc.line_count().saturating_sub(1);
        if self.top_line > last_line {
            self.top_line = last_line;
            self.top_sub = 0;
        }
        if geom.wrap {
            self.left_col = 0;
            self.top_sub = self
                .top_sub
                .min(segment_count(doc, self.top_line, geom) - 1);
        } else {
            self.top_sub = 0;
        }
    }

    /// Rows visible from the current scroll position, at most `geom.height`.
    pub fn visible_rows(&self, doc: &Document, geom: &ViewportGeometry) -> Vec<VisualRow> {
        let mut rows = Vec::with_capacity(geom.height);
        let mut line = self.top_line;
        let mut skip = self.top_sub;
        while rows.len() < geom.height && line < doc.line_count() {
            let chars = line_chars(doc, line);
            for seg in wrap_segments(&chars, geom).into_iter().skip(skip) {
                if rows.len() == geom.height {
                    break;
                }
                rows.push(VisualRow { line, chars: seg });
            }
            skip = 0;
            line += 1;
        }
        rows
    }

    /// Scrolls just enough to bring the cursor on screen.
    pub fn ensure_cursor_visible(&mut self, doc: &Document, geom: &ViewportGeometry) {
        let (line, col) = doc.cursor_line_col();
        let chars = line_chars(doc, line);
        let segments = wrap_segments(&chars, geom);
        let sub = segment_for_col(&segments, col);

        if geom.wrap {
            self.left_col = 0;
        } else {
            self.top_sub = 0;
            let x = display_col(&chars, 0, col, geom.tab_size);
            if x < self.left_col {
                self.left_col = x;
            } else if x >= self.left_col + geom.width {
                self.left_col = x + 1 - geom.width;
            }
        }

        if (line, sub) < (self.top_line, self.top_sub) {
            self.top_line = line;
            self.top_sub = sub;
            return;
        }

        if self.rows_between(doc, geom, line, sub) < geom.height {
            return;
        }

        // Walk back from the cursor row until the viewport is full.
        let (mut top_line, mut top_sub) = (line, sub);
        let mut rows = 1usize;
        while rows < geom.height {
            if top_sub > 0 {
                top_sub -= 1;
            } else if top_line > 0 {
                top_line -= 1;
                top_sub = segment_count(doc, top_line, geom) - 1;
            } else {
                break;
            }
            rows += 1;
        }
        self.top_line = top_line;
        self.top_sub = top_sub;
    }

    /// Rows from the top of the viewport to (`line`, `sub`), capped at `geom.height`.
    fn rows_between(&self, doc: &Document, geom: &ViewportGeometry, line: usize, sub: usize) -> usize {
        if line >= self.top_line + geom.height {
            return geom.height;
        }
        let mut rows = 0usize;
        let mut current = self.top_line;
        let mut skip = self.top_sub;
        while current < line {
            rows += segment_count(doc, current, geom).saturating_sub(skip);
            if rows >= geom.height {
                return geom.height;
            }
            skip = 0;
            current += 1;
        }
        (rows + sub.saturating_sub(skip)).min(geom.height)
    }

    /// Scrolls by `delta` rows; never past the last row of the document.
    pub fn scroll_rows(&mut self, doc: &Document, geom: &ViewportGeometry, delta: isize) -> bool {
        let before = *self;
        let last_line = doc.line_count().saturating_sub(1);
        if delta < 0 {
            for _ in 0..delta.unsigned_abs() {
                if self.top_sub > 0 {
                    self.top_sub -= 1;
                } else if self.top_line > 0 {
                    self.top_line -= 1;
                    self.top_sub = segment_count(doc, self.top_line, geom) - 1;
                } else {
                    break;
                }
            }
        } else {
            for _ in 0..delta.unsigned_abs() {
                if self.top_sub + 1 < segment_count(doc, self.top_line, geom) {
                    self.top_sub += 1;
                } else if self.top_line < last_line {
                    self.top_line += 1;
                    self.top_sub = 0;
                } else {
                    break;
                }
            }
        }
        *self != before
    }

    pub fn scroll_columns(&mut self, geom: &ViewportGeometry, delta: isize) -> bool {
        if geom.wrap {
            return false;
        }
        let next = self.left_col.saturating_add_signed(delta);
        std::mem::replace(&mut self.left_col, next) != next
    }

    /// Cursor cell relative to the text area, if on screen.
    pub fn cursor_cell(&self, doc: &Document, geom: &ViewportGeometry) -> Option<(u16, u16)> {
        let (line, col) = doc.cursor_line_col();
        let chars = line_chars(doc, line);
        let segments = wrap_segments(&chars, geom);
        let sub = segment_for_col(&segments, col);
        if (line, sub) < (self.top_line, self.top_sub) {
            return None;
        }
        let row = self.rows_between(doc, geom, line, sub);
        if row >= geom.height {
            return None;
        }
        let x = display_col(&chars, segments[sub].start, col, geom.tab_size);
        let x = if geom.wrap {
            x.min(geom.width - 1)
        } else {
            x.checked_sub(self.left_col)?
        };
        if x >= geom.width {
            return None;
        }
        Some((x as u16, row as u16))
    }

    /// Document position under cell (`x`, `y`) of the text area. Clicks past the end of a
    /// row land at its end; clicks below the text land on the last row.
    pub fn hit_test(&self, doc: &Document, geom: &ViewportGeometry, x: u16, y: u16) -> (usize, usize) {
        let rows = self.visible_rows(doc, geom);
        let Some(row) = rows.get(usize::from(y)).or_else(|| rows.last()) else {
            return (0, 0);
        };
        let chars = line_chars(doc, row.line);
        let target = usize::from(x) + if geom.wrap { 0 } else { self.left_col };

        let mut col = 0usize;
        for i in row.chars.clone() {
            let w = char_width(chars[i], col, geom.tab_size);
            if target < col + w.max(1) {
                // Right half of a wide cell snaps forward.
                return if w > 1 && target >= col + w / 2 + w % 2 {
                    (row.line, i + 1)
                } else {
                    (row.line, i)
                };
            }
            col += w;
        }
        // A wrapped row's end is the next row's start; stay on this row.
        if row.chars.end < chars.len() && !row.chars.is_empty() {
            return (row.line, row.chars.end - 1);
        }
        (row.line, row.chars.end)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/workbench/viewport.rs"]
mod tests;
