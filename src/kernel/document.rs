//! The document being edited: rope content, backing path, cursor and selection.
//!
//! Positions are char indices into the rope. Content is always fully in memory.

use ropey::Rope;
use std::ops::Range;
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
    PageUp(usize),
    PageDown(usize),
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    rope: Rope,
    source_path: Option<PathBuf>,
    cursor: usize,
    anchor: Option<usize>,
    preferred_col: Option<usize>,
    dirty: bool,
    version: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the buffer and forgets the backing file.
    pub fn new_document(&mut self) {
        let version = self.version;
        *self = Self::default();
        self.version = version.wrapping_add(1);
    }

    /// Replaces the content wholesale with text read from `path`.
    pub fn load(&mut self, path: PathBuf, content: &str) {
        let version = self.version;
        *self = Self {
            rope: Rope::from_str(content),
            source_path: Some(path),
            ..Self::default()
        };
        self.version = version.wrapping_add(1);
    }

    pub fn mark_saved(&mut self, path: PathBuf) {
        self.source_path = Some(path);
        self.dirty = false;
    }

    pub fn set_source_path(&mut self, path: PathBuf) {
        self.source_path = Some(path);
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn file_name(&self) -> Option<String> {
        self.source_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|s| s.to_string_lossy().to_string())
    }

    pub fn title(&self) -> String {
        self.file_name().unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    /// Zero-based (line, column) of the cursor, column in chars.
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.cursor);
        (line, self.cursor - self.rope.line_to_char(line))
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of `line` in chars, without its line break.
    pub fn line_len(&self, line: usize) -> usize {
        if line >= self.rope.len_lines() {
            return 0;
        }
        let slice = self.rope.line(line);
        let mut len = slice.len_chars();
        while len > 0 && is_line_break(slice.char(len - 1)) {
            len -= 1;
        }
        len
    }

    pub fn selection(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        if anchor == self.cursor {
            return None;
        }
        Some(anchor.min(self.cursor)..anchor.max(self.cursor))
    }

    pub fn selected_text(&self) -> Option<String> {
        self.selection()
            .map(|range| self.rope.slice(range).to_string())
    }

    pub fn select_all(&mut self) -> bool {
        let len = self.rope.len_chars();
        let changed = self.anchor != Some(0) || self.cursor != len;
        self.anchor = Some(0);
        self.cursor = len;
        self.preferred_col = None;
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        self.anchor.take().is_some()
    }

    /// Removes the selection and returns its text. `None` when nothing is selected.
    pub fn cut_selection(&mut self) -> Option<String> {
        let text = self.selected_text()?;
        self.delete_selection();
        Some(text)
    }

    /// Empties the content but keeps the backing path.
    pub fn clear_all(&mut self) -> bool {
        self.anchor = None;
        self.preferred_col = None;
        self.cursor = 0;
        if self.rope.len_chars() == 0 {
            return false;
        }
        self.rope = Rope::new();
        self.touch();
        true
    }

    pub fn insert_text(&mut self, text: &str) -> bool {
        let deleted = self.delete_selection();
        if text.is_empty() {
            return deleted;
        }
        self.rope.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.preferred_col = None;
        self.touch();
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let start = self.grapheme_before(self.cursor);
        self.rope.remove(start..self.cursor);
        self.cursor = start;
        self.preferred_col = None;
        self.touch();
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.rope.len_chars() {
            return false;
        }
        let end = self.grapheme_after(self.cursor);
        self.rope.remove(self.cursor..end);
        self.preferred_col = None;
        self.touch();
        true
    }

    /// Moves the cursor. With `extend` the selection anchor stays put.
    pub fn move_cursor(&mut self, motion: Motion, extend: bool) -> bool {
        let prev_cursor = self.cursor;
        let prev_anchor = self.anchor;

        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else if let Some(range) = self.selection() {
            self.anchor = None;
            match motion {
                Motion::Left => {
                    self.cursor = range.start;
                    self.preferred_col = None;
                    return true;
                }
                Motion::Right => {
                    self.cursor = range.end;
                    self.preferred_col = None;
                    return true;
                }
                _ => {}
            }
        } else {
            self.anchor = None;
        }

        let (line, col) = self.cursor_line_col();
        match motion {
            Motion::Left => {
                self.cursor = self.grapheme_before(self.cursor);
                self.preferred_col = None;
            }
            Motion::Right => {
                self.cursor = self.grapheme_after(self.cursor);
                self.preferred_col = None;
            }
            Motion::Up => self.move_vertically(line, col, -1),
            Motion::Down => self.move_vertically(line, col, 1),
            Motion::PageUp(n) => self.move_vertically(line, col, -(n.max(1) as isize)),
            Motion::PageDown(n) => self.move_vertically(line, col, n.max(1) as isize),
            Motion::LineStart => {
                self.cursor = self.rope.line_to_char(line);
                self.preferred_col = None;
            }
            Motion::LineEnd => {
                self.cursor = self.rope.line_to_char(line) + self.line_len(line);
                self.preferred_col = None;
            }
            Motion::DocumentStart => {
                self.cursor = 0;
                self.preferred_col = None;
            }
            Motion::DocumentEnd => {
                self.cursor = self.rope.len_chars();
                self.preferred_col = None;
            }
        }

        self.cursor != prev_cursor || self.anchor != prev_anchor
    }

    /// Places the cursor at (line, col), clamped to the document.
    pub fn set_cursor_line_col(&mut self, line: usize, col: usize, extend: bool) -> bool {
        let prev = (self.cursor, self.anchor);
        if extend {
            if self.anchor.is_none() {
                self.anchor = Some(self.cursor);
            }
        } else {
            self.anchor = None;
        }
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        self.cursor = self.rope.line_to_char(line) + col.min(self.line_len(line));
        self.preferred_col = None;
        (self.cursor, self.anchor) != prev
    }

    fn move_vertically(&mut self, line: usize, col: usize, delta: isize) {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let target = if delta < 0 {
            line.saturating_sub(delta.unsigned_abs())
        } else {
            line.saturating_add(delta as usize).min(last_line)
        };
        let want = *self.preferred_col.get_or_insert(col);
        if target == line {
            if delta < 0 {
                self.cursor = self.rope.line_to_char(line);
            } else {
                self.cursor = self.rope.line_to_char(line) + self.line_len(line);
            }
            return;
        }
        self.cursor = self.rope.line_to_char(target) + want.min(self.line_len(target));
    }

    fn delete_selection(&mut self) -> bool {
        let Some(range) = self.selection() else {
            self.anchor = None;
            return false;
        };
        self.rope.remove(range.clone());
        self.cursor = range.start;
        self.anchor = None;
        self.preferred_col = None;
        self.touch();
        true
    }

    fn touch(&mut self) {
        self.dirty = true;
        self.version = self.version.wrapping_add(1);
    }

    fn grapheme_boundaries(&self, line: usize) -> Vec<usize> {
        let text = self.rope.line(line).to_string();
        let mut boundaries = Vec::with_capacity(text.len() + 1);
        let mut offset = 0usize;
        for g in text.graphemes(true) {
            boundaries.push(offset);
            offset += g.chars().count();
        }
        boundaries.push(offset);
        boundaries
    }

    fn grapheme_before(&self, idx: usize) -> usize {
        if idx == 0 {
            return 0;
        }
        let line = self.rope.char_to_line(idx);
        let line_start = self.rope.line_to_char(line);
        if idx == line_start {
            let prev_start = self.rope.line_to_char(line - 1);
            let boundaries = self.grapheme_boundaries(line - 1);
            let last_break = boundaries.len().saturating_sub(2);
            return prev_start + boundaries[last_break];
        }
        let col = idx - line_start;
        let boundaries = self.grapheme_boundaries(line);
        let prev = boundaries
            .iter()
            .rev()
            .copied()
            .find(|&b| b < col)
            .unwrap_or(0);
        line_start + prev
    }

    fn grapheme_after(&self, idx: usize) -> usize {
        let len = self.rope.len_chars();
        if idx >= len {
            return len;
        }
        let line = self.rope.char_to_line(idx);
        let line_start = self.rope.line_to_char(line);
        let col = idx - line_start;
        let next = self
            .grapheme_boundaries(line)
            .into_iter()
            .find(|&b| b > col)
            .map(|b| line_start + b)
            .unwrap_or(idx + 1);
        next.min(len)
    }
}

/// Line terminators recognised by the rope's line indexing.
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Converts pasted line endings (`\r\n`, lone `\r`) to `\n`.
pub fn normalize_line_endings(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/document.rs"]
mod tests;
