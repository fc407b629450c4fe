//! 文本缓冲区模型
//!
//! 职责：
//! - 文本存储（Rope）
//! - 光标和选区管理
//! - 行列 ↔ 字符偏移映射

use super::selection::Selection;
use ropey::{Rope, RopeSlice};
use std::borrow::Cow;

/// 从 RopeSlice 获取字符串，优先零拷贝
pub fn slice_to_cow(slice: RopeSlice<'_>) -> Cow<'_, str> {
    match slice.as_str() {
        Some(s) => Cow::Borrowed(s),
        None => Cow::Owned(slice.to_string()),
    }
}

/// (行, 列)，列以字符计
pub type TextPos = (usize, usize);

#[derive(Clone)]
pub struct TextBuffer {
    rope: Rope,
    cursor: TextPos,
    selection: Option<Selection<TextPos>>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: (0, 0),
            selection: None,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: (0, 0),
            selection: None,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    /// 整体替换文本，光标回到开头
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = (0, 0);
        self.selection = None;
    }

    pub fn text(&self) -> Cow<'_, str> {
        slice_to_cow(self.rope.slice(..))
    }

    pub fn cursor(&self) -> TextPos {
        self.cursor
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor = (row, col);
    }

    pub fn selection(&self) -> Option<&Selection<TextPos>> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: Option<Selection<TextPos>>) {
        self.selection = selection;
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    pub fn has_selection(&self) -> bool {
        self.selection
            .as_ref()
            .map(|s| !s.is_empty())
            .unwrap_or(false)
    }

    pub fn len_lines(&self) -> usize {
        self.rope.len_lines()
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn line(&self, row: usize) -> Option<Cow<'_, str>> {
        if row < self.rope.len_lines() {
            Some(slice_to_cow(self.rope.line(row)))
        } else {
            None
        }
    }

    pub fn char_to_pos(&self, char_offset: usize) -> Result<TextPos, ropey::Error> {
        let row = self.rope.try_char_to_line(char_offset)?;
        let line_start = self.rope.try_line_to_char(row)?;
        Ok((row, char_offset - line_start))
    }

    pub fn pos_to_char(&self, pos: TextPos) -> Result<usize, ropey::Error> {
        Ok(self.rope.try_line_to_char(pos.0)? + pos.1)
    }

    /// 当前选区覆盖的字符偏移区间
    pub fn selection_char_range(&self) -> Option<std::ops::Range<usize>> {
        let (start, end) = self.selection.as_ref()?.range();
        let start = self.pos_to_char(start).ok()?;
        let end = self.pos_to_char(end).ok()?;
        Some(start..end)
    }

    pub fn selected_text(&self) -> Option<String> {
        let range = self.selection_char_range()?;
        self.rope.get_slice(range).map(|s| s.to_string())
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
