use super::Workbench;
use crate::core::EventResult;
use crate::kernel::{Action, Effect, SessionContext};

impl Workbench {
    /// Runs one action through the open session and executes its effects.
    pub fn dispatch(&mut self, action: Action) -> EventResult {
        let Some(session) = self.session.as_mut() else {
            return EventResult::Ignored;
        };
        let mut ctx = SessionContext {
            palette: &mut self.palette,
            clipboard: &mut self.clipboard,
            show_edit_button: self.settings.show_edit_button,
        };
        let result = session.dispatch(action, &mut ctx);
        for effect in result.effects {
            self.run_effect(effect);
        }
        result.result
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::SaveAnnotations { key, annotations } => {
                self.persistence.save(&key, &annotations);
            }
            Effect::DeleteAnnotations(key) => {
                self.persistence.delete(&key);
            }
            Effect::SavePalette(palette) => {
                self.persistence.save_palette(&palette);
            }
        }
    }
}
