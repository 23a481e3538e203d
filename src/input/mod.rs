mod modifiers;
mod shortcut;

pub use modifiers::{ModeTracker, ModifierState};
pub use shortcut::{resolve_shortcut, CropShortcutAction, InputContext, ShortcutKey};
