//! 查询模型
//!
//! - Query: 一次搜索使用的查询串与大小写设置（每次变更都重建）
//! - QueryInput: 宿主输入框的可编辑状态，按字素簇移动与删除

use compact_str::CompactString;
use unicode_segmentation::UnicodeSegmentation;

use crate::core::FindCommand;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    text: CompactString,
    case_sensitive: bool,
}

impl Query {
    pub fn new(text: &str, case_sensitive: bool) -> Self {
        Self {
            text: CompactString::new(text),
            case_sensitive,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// 空串或全空白
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    Unchanged,
    CursorMoved,
    TextChanged,
}

#[derive(Debug, Clone, Default)]
pub struct QueryInput {
    text: String,
    /// 字节偏移，始终落在字素簇边界
    cursor_pos: usize,
    case_sensitive: bool,
}

impl QueryInput {
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            text: String::new(),
            cursor_pos: 0,
            case_sensitive,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn set_text(&mut self, text: &str) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text.to_string();
        self.cursor_pos = self.text.len();
        true
    }

    pub fn toggle_case_sensitive(&mut self) -> bool {
        self.case_sensitive = !self.case_sensitive;
        self.case_sensitive
    }

    pub fn apply(&mut self, command: &FindCommand) -> EditOutcome {
        let (changed, outcome) = match command {
            FindCommand::Insert(c) => (self.insert_char(*c), EditOutcome::TextChanged),
            FindCommand::DeleteBackward => (self.delete_backward(), EditOutcome::TextChanged),
            FindCommand::DeleteForward => (self.delete_forward(), EditOutcome::TextChanged),
            FindCommand::CursorLeft => (self.cursor_left(), EditOutcome::CursorMoved),
            FindCommand::CursorRight => (self.cursor_right(), EditOutcome::CursorMoved),
            FindCommand::CursorHome => (self.cursor_home(), EditOutcome::CursorMoved),
            FindCommand::CursorEnd => (self.cursor_end(), EditOutcome::CursorMoved),
            _ => (false, EditOutcome::Unchanged),
        };
        if changed {
            outcome
        } else {
            EditOutcome::Unchanged
        }
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.text.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
        true
    }

    pub fn delete_backward(&mut self) -> bool {
        let Some((prev_pos, _)) = self.text[..self.cursor_pos].grapheme_indices(true).next_back()
        else {
            return false;
        };
        self.text.drain(prev_pos..self.cursor_pos);
        self.cursor_pos = prev_pos;
        true
    }

    pub fn delete_forward(&mut self) -> bool {
        let Some(grapheme) = self.text[self.cursor_pos..].graphemes(true).next() else {
            return false;
        };
        let end = self.cursor_pos + grapheme.len();
        self.text.drain(self.cursor_pos..end);
        true
    }

    pub fn cursor_left(&mut self) -> bool {
        match self.text[..self.cursor_pos].grapheme_indices(true).next_back() {
            Some((pos, _)) => {
                self.cursor_pos = pos;
                true
            }
            None => false,
        }
    }

    pub fn cursor_right(&mut self) -> bool {
        match self.text[self.cursor_pos..].graphemes(true).next() {
            Some(grapheme) => {
                self.cursor_pos += grapheme.len();
                true
            }
            None => false,
        }
    }

    pub fn cursor_home(&mut self) -> bool {
        if self.cursor_pos == 0 {
            return false;
        }
        self.cursor_pos = 0;
        true
    }

    pub fn cursor_end(&mut self) -> bool {
        let end = self.text.len();
        if self.cursor_pos == end {
            return false;
        }
        self.cursor_pos = end;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/query.rs"]
mod tests;
