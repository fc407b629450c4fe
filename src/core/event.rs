//! 查找命令：宿主把输入事件翻译为 FindCommand 后交给会话处理

#[cfg(feature = "tui")]
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindCommand {
    Next,
    Previous,
    Close,
    ToggleCaseSensitive,
    Insert(char),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

impl FindCommand {
    /// 是否作用于查询输入框
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            FindCommand::Insert(_)
                | FindCommand::DeleteBackward
                | FindCommand::DeleteForward
                | FindCommand::CursorLeft
                | FindCommand::CursorRight
                | FindCommand::CursorHome
                | FindCommand::CursorEnd
        )
    }
}

#[cfg(feature = "tui")]
impl FindCommand {
    pub fn from_key_event(event: &KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }

        let command = match (event.code, event.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => FindCommand::Next,
            (KeyCode::Enter, KeyModifiers::SHIFT) => FindCommand::Previous,
            (KeyCode::Esc, _) => FindCommand::Close,
            (KeyCode::Char('c'), KeyModifiers::ALT) => FindCommand::ToggleCaseSensitive,
            (KeyCode::Left, KeyModifiers::NONE) => FindCommand::CursorLeft,
            (KeyCode::Right, KeyModifiers::NONE) => FindCommand::CursorRight,
            (KeyCode::Home, KeyModifiers::NONE) => FindCommand::CursorHome,
            (KeyCode::End, KeyModifiers::NONE) => FindCommand::CursorEnd,
            (KeyCode::Backspace, KeyModifiers::NONE) => FindCommand::DeleteBackward,
            (KeyCode::Delete, KeyModifiers::NONE) => FindCommand::DeleteForward,
            (KeyCode::Char(c), mods)
                if !mods.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                FindCommand::Insert(c)
            }
            _ => return None,
        };

        Some(command)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
