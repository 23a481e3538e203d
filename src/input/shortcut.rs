use super::ModifierState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutKey {
    Character(char),
    Enter,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputContext {
    pub crop_editor_open: bool,
    pub drag_active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropShortcutAction {
    Apply,
    Cancel,
    CancelDrag,
    ToggleCrop,
    ResetRect,
}

fn resolve_drag_shortcut(key: ShortcutKey) -> Option<CropShortcutAction> {
    match key {
        ShortcutKey::Escape => Some(CropShortcutAction::CancelDrag),
        _ => None,
    }
}

fn resolve_editor_shortcut(
    key: ShortcutKey,
    modifiers: ModifierState,
) -> Option<CropShortcutAction> {
    let plain = !(modifiers.option || modifiers.shift || modifiers.command || modifiers.control);
    match (key, plain) {
        (ShortcutKey::Enter, _) => Some(CropShortcutAction::Apply),
        (ShortcutKey::Escape, _) => Some(CropShortcutAction::Cancel),
        (ShortcutKey::Character('c'), true) => Some(CropShortcutAction::ToggleCrop),
        (ShortcutKey::Character('r'), true) => Some(CropShortcutAction::ResetRect),
        _ => None,
    }
}

pub fn resolve_shortcut(
    key: ShortcutKey,
    modifiers: ModifierState,
    context: InputContext,
) -> Option<CropShortcutAction> {
    if !context.crop_editor_open {
        return None;
    }

    if context.drag_active {
        return resolve_drag_shortcut(key);
    }

    resolve_editor_shortcut(key, modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN: InputContext = InputContext {
        crop_editor_open: true,
        drag_active: false,
    };

    #[test]
    fn resolve_shortcut_ignores_keys_when_editor_closed() {
        assert_eq!(
            resolve_shortcut(
                ShortcutKey::Enter,
                ModifierState::NONE,
                InputContext::default()
            ),
            None
        );
    }

    #[test]
    fn resolve_shortcut_prioritizes_drag_over_editor_escape() {
        let context = InputContext {
            drag_active: true,
            ..OPEN
        };
        assert_eq!(
            resolve_shortcut(ShortcutKey::Escape, ModifierState::NONE, context),
            Some(CropShortcutAction::CancelDrag)
        );
        assert_eq!(
            resolve_shortcut(ShortcutKey::Enter, ModifierState::NONE, context),
            None
        );
    }

    #[test]
    fn resolve_shortcut_maps_editor_keys() {
        assert_eq!(
            resolve_shortcut(ShortcutKey::Enter, ModifierState::NONE, OPEN),
            Some(CropShortcutAction::Apply)
        );
        assert_eq!(
            resolve_shortcut(ShortcutKey::Escape, ModifierState::NONE, OPEN),
            Some(CropShortcutAction::Cancel)
        );
        assert_eq!(
            resolve_shortcut(ShortcutKey::Character('c'), ModifierState::NONE, OPEN),
            Some(CropShortcutAction::ToggleCrop)
        );
        assert_eq!(
            resolve_shortcut(ShortcutKey::Character('r'), ModifierState::NONE, OPEN),
            Some(CropShortcutAction::ResetRect)
        );
    }

    #[test]
    fn resolve_shortcut_requires_plain_letter_keys() {
        assert_eq!(
            resolve_shortcut(
                ShortcutKey::Character('r'),
                ModifierState::new(false, true),
                OPEN
            ),
            None
        );
    }
}
