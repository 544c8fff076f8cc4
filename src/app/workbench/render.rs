use super::viewport::{char_width, line_chars};
use super::{Workbench, MENU_BAR_HEIGHT, STATUS_HEIGHT};
use crate::kernel::services::adapters::format_key;
use crate::kernel::{Action, AppState, MenuId, NotificationLevel, PromptKind};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use std::ops::Range;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const PROMPT_LABEL: &str = "Path: ";
const PROMPT_HINT: &str = "Enter to confirm, Esc to cancel";
const PROMPT_MAX_WIDTH: u16 = 64;

/// Per-frame inputs for painting text rows.
struct TextPaint {
    base: Style,
    selected: Style,
    selection: Option<Range<usize>>,
    skip: usize,
    width: usize,
    tab_size: usize,
}

impl TextPaint {
    fn row(
        &self,
        chars: &[char],
        range: Range<usize>,
        line_start: usize,
        has_break: bool,
    ) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();
        let mut run_selected = false;
        let mut col = 0usize;
        let limit = self.skip + self.width;
        let is_selected = |idx: usize| {
            self.selection
                .as_ref()
                .is_some_and(|sel| sel.contains(&idx))
        };

        let row_end = range.end;
        for i in range {
            if col >= limit {
                break;
            }
            let ch = chars[i];
            let w = char_width(ch, col, self.tab_size);
            let start = col.max(self.skip);
            let end = (col + w).min(limit);
            let clipped = start != col || end != col + w;
            col += w;
            if w > 0 && end <= start {
                continue;
            }

            let selected = is_selected(line_start + i);
            if selected != run_selected && !run.is_empty() {
                spans.push(self.span(std::mem::take(&mut run), run_selected));
            }
            run_selected = selected;

            if w == 0 {
                if col > self.skip {
                    run.push(ch);
                }
            } else if ch == '\t' || clipped {
                run.extend(std::iter::repeat(' ').take(end - start));
            } else if ch.is_control() {
                run.push('?');
            } else {
                run.push(ch);
            }
        }

        // A selected line break shows as one highlighted cell.
        let break_visible = col >= self.skip && col < limit;
        if has_break && row_end == chars.len() && break_visible && is_selected(line_start + row_end)
        {
            if !run_selected && !run.is_empty() {
                spans.push(self.span(std::mem::take(&mut run), false));
            }
            run_selected = true;
            run.push(' ');
        }
        if !run.is_empty() {
            spans.push(self.span(run, run_selected));
        }
        Line::from(spans)
    }

    fn span(&self, text: String, selected: bool) -> Span<'static> {
        Span::styled(text, if selected { self.selected } else { self.base })
    }
}

/// Right side of the status bar, trimmed to `max_width` columns. Segments are dropped
/// least useful first: flags, zoom, file name, characters, words, position.
pub(super) fn status_summary(state: &AppState, max_width: usize) -> String {
    let doc = &state.document;
    let style = &state.style;
    let (line, col) = doc.cursor_line_col();
    let dirty = if doc.is_dirty() { " [+]" } else { "" };
    let font_size = (style.font_size() * 10.0).round() / 10.0;
    let flags: Vec<&str> = [
        (style.wrap, "Wrap"),
        (style.bold, "Bold"),
        (style.italic, "Italic"),
    ]
    .into_iter()
    .filter_map(|(on, label)| on.then_some(label))
    .collect();

    // (drop rank, text) in display order.
    let mut segments = vec![
        (2u8, format!("{}{}", doc.title(), dirty)),
        (4, format!("Words: {}", state.status.word_count)),
        (3, format!("Characters: {}", state.status.char_count)),
        (5, format!("Ln {}, Col {}", line + 1, col + 1)),
        (1, format!("Zoom {}% ({}pt)", style.zoom_percent(), font_size)),
    ];
    if !flags.is_empty() {
        segments.push((0, flags.join(" ")));
    }

    loop {
        let text: Vec<&str> = segments.iter().map(|(_, s)| s.as_str()).collect();
        let out = format!("{} ", text.join(" | "));
        if out.width() <= max_width {
            return out;
        }
        let Some(pos) = segments
            .iter()
            .enumerate()
            .min_by_key(|(_, (rank, _))| *rank)
            .map(|(i, _)| i)
        else {
            return String::new();
        };
        segments.remove(pos);
    }
}

fn mnemonic_spans(title: &'static str, mnemonic: char, style: Style) -> Vec<Span<'static>> {
    match title
        .char_indices()
        .find(|(_, c)| c.to_ascii_lowercase() == mnemonic)
    {
        Some((i, c)) => {
            let end = i + c.len_utf8();
            vec![
                Span::styled(&title[..i], style),
                Span::styled(&title[i..end], style.add_modifier(Modifier::UNDERLINED)),
                Span::styled(&title[end..], style),
            ]
        }
        None => vec![Span::styled(title, style)],
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Tail of `value` that keeps the cursor within `avail` columns, plus the cursor column.
fn scroll_input(value: &str, cursor: usize, avail: usize) -> (&str, usize) {
    let cursor = cursor.min(value.len());
    let mut start = 0usize;
    let mut cursor_w = value[..cursor].width();
    while cursor_w > avail && start < cursor {
        let Some(ch) = value[start..].chars().next() else {
            break;
        };
        start += ch.len_utf8();
        cursor_w -= ch.width().unwrap_or(0);
    }
    (&value[start..], cursor_w)
}

impl Workbench {
    pub(super) fn render_frame(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MENU_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);
        self.layout.menu_bar = chunks[0];
        self.layout.text = chunks[1];
        self.layout.status = chunks[2];
        self.layout.dropdown = None;
        self.layout.dropdown_rows.clear();
        self.cursor = None;

        let height = usize::from(chunks[1].height).max(1);
        if self.store.state().ui.viewport_height != height {
            self.dispatch_kernel(Action::SetViewportHeight(height));
        }

        self.render_text(frame, chunks[1]);
        self.render_status_bar(frame, chunks[2]);
        self.render_menu_bar(frame, chunks[0]);
        self.render_dropdown(frame, area);
        self.render_prompt(frame, area);
        self.render_notification(frame, area);
    }

    fn render_text(&mut self, frame: &mut Frame, area: Rect) {
        let geom = self.geometry();
        let state = self.store.state();
        let doc = &state.document;
        self.scroll.clamp(doc, &geom);
        if self.follow_cursor {
            self.scroll.ensure_cursor_visible(doc, &geom);
        }

        let base = self.theme.text_style(&state.style);
        let paint = TextPaint {
            base,
            selected: base.bg(self.theme.selection_bg),
            selection: doc.selection(),
            skip: if geom.wrap { 0 } else { self.scroll.left_col },
            width: geom.width,
            tab_size: geom.tab_size,
        };

        let last_line = doc.line_count().saturating_sub(1);
        let mut lines = Vec::with_capacity(geom.height);
        let mut cached: Option<(usize, Vec<char>)> = None;
        for row in self.scroll.visible_rows(doc, &geom) {
            if cached.as_ref().map(|(line, _)| *line) != Some(row.line) {
                cached = Some((row.line, line_chars(doc, row.line)));
            }
            let Some((_, chars)) = cached.as_ref() else {
                continue;
            };
            let line_start = doc.rope().line_to_char(row.line);
            lines.push(paint.row(chars, row.chars, line_start, row.line < last_line));
        }
        frame.render_widget(Paragraph::new(lines).style(base), area);

        if area.height > 0 && !state.ui.menu.is_open() {
            self.cursor = self
                .scroll
                .cursor_cell(doc, &geom)
                .map(|(x, y)| (area.x + x, area.y + y));
        }
    }

    fn render_menu_bar(&mut self, frame: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let bar = Style::default().fg(theme.menu_bar_fg).bg(theme.menu_bar_bg);
        let active = Style::default()
            .fg(theme.menu_selected_fg)
            .bg(theme.menu_selected_bg);
        let open = self.store.state().ui.menu.open;

        self.layout.menu_titles.clear();
        let mut spans = vec![Span::styled(" ", bar)];
        let mut x = area.x.saturating_add(1);
        for menu in MenuId::ALL {
            let style = if open == Some(menu) { active } else { bar };
            let title = menu.title();
            let width = title.width() as u16 + 2;
            self.layout
                .menu_titles
                .push((menu, Rect::new(x, area.y, width, 1)));
            spans.push(Span::styled(" ", style));
            spans.extend(mnemonic_spans(title, menu.mnemonic(), style));
            spans.push(Span::styled(" ", style));
            x = x.saturating_add(width);
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(bar), area);
    }

    fn render_dropdown(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let Some(menu) = state.ui.menu.open else {
            return;
        };
        let Some(anchor) = self
            .layout
            .menu_titles
            .iter()
            .find(|(m, _)| *m == menu)
            .map(|(_, rect)| *rect)
        else {
            return;
        };

        let items = menu.items();
        let rows: Vec<Option<usize>> = items
            .iter()
            .enumerate()
            .flat_map(|(i, item)| {
                item.separator_before
                    .then_some(None)
                    .into_iter()
                    .chain(std::iter::once(Some(i)))
            })
            .collect();
        let shortcuts: Vec<String> = items
            .iter()
            .map(|item| {
                self.keybindings
                    .key_for(&item.command)
                    .map(|key| format_key(&key))
                    .unwrap_or_default()
            })
            .collect();

        let label_w = items.iter().map(|i| i.label.width()).max().unwrap_or(0);
        let key_w = shortcuts.iter().map(|s| s.width()).max().unwrap_or(0);
        let key_col = if key_w > 0 { 2 + key_w } else { 0 };
        let inner_w = 3 + label_w + key_col + 1;
        let top = anchor.y.saturating_add(1);
        let width = (inner_w as u16).saturating_add(2).min(area.width);
        let height = (rows.len() as u16 + 2).min(area.bottom().saturating_sub(top));
        if width < 3 || height < 3 {
            return;
        }
        let x = anchor.x.min(area.right().saturating_sub(width));
        let rect = Rect::new(x, top, width, height);

        let theme = &self.theme;
        let normal = Style::default().fg(theme.menu_bar_fg).bg(theme.menu_bar_bg);
        let selected = Style::default()
            .fg(theme.menu_selected_fg)
            .bg(theme.menu_selected_bg);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(normal.fg(theme.dialog_border))
            .style(normal);
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        let inner_w = usize::from(inner.width);
        let lines: Vec<Line> = rows
            .iter()
            .take(usize::from(inner.height))
            .map(|row| match row {
                None => Line::from(Span::styled(
                    "─".repeat(inner_w),
                    normal.fg(theme.dialog_border),
                )),
                Some(i) => {
                    let item = &items[*i];
                    let check = match item.checked(&state.style) {
                        Some(true) => '✓',
                        _ => ' ',
                    };
                    let key = &shortcuts[*i];
                    let left = format!(" {check} {}", item.label);
                    let pad = inner_w.saturating_sub(left.width() + key.width() + 1);
                    let style = if *i == state.ui.menu.selected {
                        selected
                    } else {
                        normal
                    };
                    Line::from(Span::styled(
                        format!("{left}{}{key} ", " ".repeat(pad)),
                        style,
                    ))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), inner);

        let visible = rows.len().min(usize::from(inner.height)) as u16;
        self.layout.dropdown = Some(Rect {
            height: visible,
            ..inner
        });
        self.layout.dropdown_rows = rows;
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let style = Style::default()
            .fg(self.theme.status_fg)
            .bg(self.theme.status_bg);
        let message = format!(" {}", state.ui.status_message);
        // The message keeps its width; the summary gets what is left after a gap.
        let avail = usize::from(area.width).saturating_sub(message.width() + 1);
        let summary = status_summary(state, avail);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(summary.width() as u16),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(message).style(style), chunks[0]);
        frame.render_widget(Paragraph::new(summary).style(style), chunks[1]);
    }

    fn render_prompt(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let prompt = &state.ui.prompt;
        if !prompt.visible {
            return;
        }

        let width = area.width.saturating_sub(4).min(PROMPT_MAX_WIDTH);
        if width < 16 || area.height < 5 {
            return;
        }
        let rect = centered(area, width, 5);
        let theme = &self.theme;
        let dialog = Style::default().fg(theme.dialog_fg).bg(theme.dialog_bg);
        let title = prompt.kind.map(PromptKind::title).unwrap_or("Path");
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {title} "))
            .border_style(dialog.fg(theme.dialog_border))
            .style(dialog);
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        let avail = usize::from(inner.width).saturating_sub(PROMPT_LABEL.len() + 1);
        let (visible, cursor_x) = scroll_input(&prompt.value, prompt.cursor, avail);
        let footer = match &prompt.error {
            Some(error) => Span::styled(error.clone(), dialog.fg(theme.error_fg)),
            None => Span::styled(PROMPT_HINT, dialog.add_modifier(Modifier::DIM)),
        };
        let lines = vec![
            Line::from(vec![
                Span::styled(PROMPT_LABEL, dialog.fg(theme.accent_fg)),
                Span::styled(visible.to_string(), dialog),
            ]),
            Line::default(),
            Line::from(footer),
        ];
        frame.render_widget(Paragraph::new(lines), inner);

        self.cursor = Some((
            inner.x + PROMPT_LABEL.len() as u16 + cursor_x as u16,
            inner.y,
        ));
    }

    fn render_notification(&mut self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let Some(notification) = &state.ui.notification else {
            return;
        };
        self.cursor = None;

        let max_w = usize::from(area.width.saturating_sub(4));
        let body_w = notification
            .message
            .lines()
            .map(UnicodeWidthStr::width)
            .chain([notification.title.width() + 4, 12])
            .max()
            .unwrap_or(12);
        let text_w = body_w.min(max_w.saturating_sub(4)).max(1);
        let text_rows: usize = notification
            .message
            .lines()
            .map(|line| line.width().max(1).div_ceil(text_w))
            .sum();
        let width = (text_w + 4) as u16;
        let height = (text_rows + 4) as u16;
        if area.width < 8 || area.height < 5 {
            return;
        }
        let rect = centered(area, width, height);

        let theme = &self.theme;
        let dialog = Style::default().fg(theme.dialog_fg).bg(theme.dialog_bg);
        let border = match notification.level {
            NotificationLevel::Error => theme.error_fg,
            NotificationLevel::Info => theme.dialog_border,
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", notification.title))
            .border_style(dialog.fg(border))
            .style(dialog);
        let inner = block.inner(rect);
        frame.render_widget(Clear, rect);
        frame.render_widget(block, rect);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);
        let body = Rect {
            x: chunks[0].x + 1,
            width: chunks[0].width.saturating_sub(2),
            ..chunks[0]
        };
        frame.render_widget(
            Paragraph::new(notification.message.as_str())
                .style(dialog)
                .wrap(Wrap { trim: false }),
            body,
        );
        frame.render_widget(
            Paragraph::new(Span::styled(
                "[ OK ]",
                dialog.fg(theme.accent_fg).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            chunks[1],
        );
    }
}
