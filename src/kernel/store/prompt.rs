use crate::kernel::state::PromptKind;
use crate::kernel::{Action, Effect};

use super::{resolve_path, DispatchResult};

impl super::Store {
    pub(super) fn reduce_prompt_action(&mut self, action: Action) -> DispatchResult {
        if !self.state.ui.prompt.visible {
            return DispatchResult::changed(false);
        }

        match action {
            Action::PromptAppend(ch) => {
                let mut buf = [0u8; 4];
                self.prompt_insert(ch.encode_utf8(&mut buf))
            }
            Action::PromptInsertText(text) => {
                let line: String = text.chars().filter(|c| !c.is_control()).collect();
                self.prompt_insert(&line)
            }
            Action::PromptBackspace => {
                let prompt = &mut self.state.ui.prompt;
                if prompt.cursor == 0 {
                    return DispatchResult::changed(false);
                }
                prompt.error = None;
                let prev = prompt.value[..prompt.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                prompt.value.drain(prev..prompt.cursor);
                prompt.cursor = prev;
                DispatchResult::changed(true)
            }
            Action::PromptCursorLeft => {
                let prompt = &mut self.state.ui.prompt;
                let prev = prompt.value[..prompt.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                let changed = prev != prompt.cursor;
                prompt.cursor = prev;
                DispatchResult::changed(changed)
            }
            Action::PromptCursorRight => {
                let prompt = &mut self.state.ui.prompt;
                let next = prompt.value[prompt.cursor..]
                    .chars()
                    .next()
                    .map(|ch| prompt.cursor + ch.len_utf8())
                    .unwrap_or(prompt.value.len());
                let changed = next != prompt.cursor;
                prompt.cursor = next;
                DispatchResult::changed(changed)
            }
            Action::PromptAccept => self.accept_prompt(),
            Action::PromptCancel => {
                tracing::debug!("path prompt cancelled");
                self.state.ui.prompt.reset();
                DispatchResult::changed(true)
            }
            _ => DispatchResult::changed(false),
        }
    }

    fn prompt_insert(&mut self, text: &str) -> DispatchResult {
        if text.is_empty() {
            return DispatchResult::changed(false);
        }
        let prompt = &mut self.state.ui.prompt;
        prompt.error = None;
        prompt.cursor = prompt.cursor.min(prompt.value.len());
        prompt.value.insert_str(prompt.cursor, text);
        prompt.cursor += text.len();
        DispatchResult::changed(true)
    }

    fn accept_prompt(&mut self) -> DispatchResult {
        let value = self.state.ui.prompt.value.trim().to_string();
        let Some(kind) = self.state.ui.prompt.kind else {
            self.state.ui.prompt.reset();
            return DispatchResult::changed(true);
        };

        if value.is_empty() {
            let prompt = &mut self.state.ui.prompt;
            let prev = prompt.error.replace("Path required".to_string());
            return DispatchResult::changed(prev.as_deref() != prompt.error.as_deref());
        }

        let path = resolve_path(&self.state.cwd, &value);
        self.state.ui.prompt.reset();
        let effect = match kind {
            PromptKind::Open => Effect::LoadFile(path),
            PromptKind::Save => self.write_effect(path),
        };
        DispatchResult::with_effects(true, vec![effect])
    }
}
