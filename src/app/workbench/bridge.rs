use super::Workbench;
use crate::kernel::{Action, Effect, IoOp};
use std::collections::VecDeque;
use std::path::PathBuf;

impl Workbench {
    /// Runs `action` and every follow-up produced by its effects. Returns whether
    /// anything visible changed.
    pub fn dispatch_kernel(&mut self, action: Action) -> bool {
        let mut queue = VecDeque::from([action]);
        let mut state_changed = false;
        while let Some(action) = queue.pop_front() {
            let result = self.store.dispatch(action);
            state_changed |= result.state_changed;
            for effect in result.effects {
                if let Some(next) = self.run_effect(effect) {
                    queue.push_back(next);
                }
            }
        }
        self.sync_theme();
        state_changed
    }

    /// Opens `path` as if chosen in the Open prompt.
    pub fn open_path(&mut self, path: PathBuf) -> bool {
        let action = self.load_file(path);
        self.dispatch_kernel(action)
    }

    fn run_effect(&mut self, effect: Effect) -> Option<Action> {
        match effect {
            Effect::LoadFile(path) => Some(self.load_file(path)),
            Effect::WriteFile {
                path,
                rope,
                version,
            } => Some(match self.files.write_text(&path, &rope) {
                Ok(()) => Action::FileSaved { path, version },
                Err(e) => Action::IoFailed {
                    op: IoOp::Save,
                    path,
                    message: e.to_string(),
                },
            }),
            Effect::SetClipboardText(text) => match self.clipboard.set_text(&text) {
                Ok(()) => None,
                Err(e) => {
                    tracing::warn!(error = %e, "clipboard write failed");
                    Some(Action::ShowStatus(e.to_string()))
                }
            },
            Effect::RequestClipboardText => Some(match self.clipboard.get_text() {
                Ok(text) => Action::InsertText(text),
                Err(e) => {
                    tracing::debug!(error = %e, "clipboard read failed");
                    Action::ShowStatus(e.to_string())
                }
            }),
        }
    }

    fn load_file(&self, path: PathBuf) -> Action {
        match self.files.read_text(&path) {
            Ok(content) => Action::FileLoaded { path, content },
            Err(e) => Action::IoFailed {
                op: IoOp::Open,
                path,
                message: e.to_string(),
            },
        }
    }
}
