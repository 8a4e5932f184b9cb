//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use std::io;

use crossterm::event::KeyCode;

use super::actions::Action;
use super::state::App;

/// 根据表单是否展开和按键获取对应的 Action
///
/// 表单展开时按键优先进入文本框，快捷键不再生效
pub fn get_action(form_open: bool, key: KeyCode) -> Option<Action> {
    if form_open {
        match key {
            KeyCode::Esc => Some(Action::ToggleFeedbackForm),
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::DeleteChar),
            KeyCode::Char(c) => Some(Action::Input(c)),
            _ => None,
        }
    } else {
        match key {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('a') => Some(Action::ToggleAdvancedOptions),
            KeyCode::Char('f') => Some(Action::ToggleFeedbackForm),
            _ => None,
        }
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode) -> io::Result<bool> {
    if let Some(action) = get_action(app.show_feedback_form, key) {
        Ok(app.dispatch(action))
    } else {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_when_form_closed() {
        assert_eq!(get_action(false, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            get_action(false, KeyCode::Char('a')),
            Some(Action::ToggleAdvancedOptions)
        );
        assert_eq!(
            get_action(false, KeyCode::Char('f')),
            Some(Action::ToggleFeedbackForm)
        );
        assert_eq!(get_action(false, KeyCode::Enter), None);
    }

    #[test]
    fn test_printable_keys_go_to_textarea_when_form_open() {
        // 表单展开时 'a'/'f'/'q' 都是普通字符，不触发快捷键
        assert_eq!(get_action(true, KeyCode::Char('a')), Some(Action::Input('a')));
        assert_eq!(get_action(true, KeyCode::Char('f')), Some(Action::Input('f')));
        assert_eq!(get_action(true, KeyCode::Char('q')), Some(Action::Input('q')));
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(get_action(true, KeyCode::Enter), Some(Action::Submit));
        assert_eq!(get_action(true, KeyCode::Backspace), Some(Action::DeleteChar));
        assert_eq!(
            get_action(true, KeyCode::Esc),
            Some(Action::ToggleFeedbackForm)
        );
    }
}
