use crate::kernel::Action;

use super::DispatchResult;

impl super::Store {
    pub(super) fn reduce_menu_action(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::MenuOpen(menu) => DispatchResult::changed(self.state.ui.menu.open(menu)),
            Action::MenuClose => DispatchResult::changed(self.state.ui.menu.close()),
            Action::MenuMove(delta) => DispatchResult::changed(self.state.ui.menu.move_menu(delta)),
            Action::MenuMoveSelection(delta) => {
                DispatchResult::changed(self.state.ui.menu.move_selection(delta))
            }
            Action::MenuActivate => self.activate_menu_item(),
            Action::MenuClickItem(index) => {
                let Some(menu) = self.state.ui.menu.open else {
                    return DispatchResult::changed(false);
                };
                if index >= menu.items().len() {
                    return DispatchResult::changed(false);
                }
                self.state.ui.menu.selected = index;
                self.activate_menu_item()
            }
            _ => DispatchResult::changed(false),
        }
    }

    fn activate_menu_item(&mut self) -> DispatchResult {
        let Some(item) = self.state.ui.menu.selected_item() else {
            return DispatchResult::changed(false);
        };
        self.state.ui.menu.close();
        let mut result = self.dispatch_command(item.command);
        result.state_changed = true;
        result
    }
}
