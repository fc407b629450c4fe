//! 平铺文本表面：Rope 缓冲区，结构位置即 (行, 列)

use std::borrow::Cow;
use std::ops::Range;

use super::{Resolution, SurfaceError, TextSurface, Viewport};
use crate::models::{Selection, TextBuffer, TextPos};

#[derive(Clone, Default)]
pub struct FlatTextSurface {
    buffer: TextBuffer,
    viewport: Viewport,
    focused: bool,
}

impl FlatTextSurface {
    pub fn new(text: &str) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            viewport: Viewport::default(),
            focused: false,
        }
    }

    pub fn with_viewport_height(mut self, height: usize) -> Self {
        self.viewport.set_height(height);
        self
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// 载入新文本，清空选区并回到顶部
    pub fn set_text(&mut self, text: &str) {
        self.buffer.set_text(text);
        self.viewport.reset();
    }

    /// 以当前文本重新载入
    pub fn reload(&mut self) {
        let text = self.buffer.text().into_owned();
        self.set_text(&text);
    }

    pub fn caret(&self) -> TextPos {
        self.buffer.cursor()
    }

    pub fn selection_range(&self) -> Option<Range<usize>> {
        self.buffer.selection_char_range()
    }

    pub fn selected_text(&self) -> Option<String> {
        self.buffer.selected_text()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn line_of_offset(&self, offset: usize) -> Option<usize> {
        if offset > self.buffer.len_chars() {
            return None;
        }
        self.buffer.rope().try_char_to_line(offset).ok()
    }

    pub fn scroll_to_line(&mut self, line: usize) {
        let total = self.buffer.len_lines();
        self.viewport.follow(line, total);
    }

    /// 把光标所在行带入视图
    pub fn bring_into_view(&mut self) {
        let (row, _) = self.buffer.cursor();
        self.scroll_to_line(row);
    }
}

impl TextSurface for FlatTextSurface {
    type Position = TextPos;

    fn linear_text(&self) -> Cow<'_, str> {
        self.buffer.text()
    }

    fn position_at(&mut self, offset: usize) -> Option<TextPos> {
        if offset > self.buffer.len_chars() {
            return None;
        }
        self.buffer.char_to_pos(offset).ok()
    }

    fn select(&mut self, start: usize, len: usize) -> Result<Resolution, SurfaceError> {
        let len_chars = self.buffer.len_chars();
        let Some(end) = start.checked_add(len).filter(|&end| end <= len_chars) else {
            tracing::debug!(start, len, len_chars, "selection outside buffer; skipped");
            return Ok(Resolution::Skipped);
        };

        let anchor = self.buffer.char_to_pos(start)?;
        let head = self.buffer.char_to_pos(end)?;
        self.buffer
            .set_selection(Some(Selection::between(anchor, head)));
        self.buffer.set_cursor(head.0, head.1);
        Ok(Resolution::Applied)
    }

    fn scroll_into_view(&mut self, offset: usize) {
        match self.position_at(offset) {
            Some((row, col)) => {
                self.buffer.set_cursor(row, col);
                self.scroll_to_line(row);
            }
            None => {
                tracing::debug!(offset, "scroll target unresolved; bringing caret into view");
                self.bring_into_view();
            }
        }
    }

    fn focus(&mut self) {
        self.focused = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/flat.rs"]
mod tests;
