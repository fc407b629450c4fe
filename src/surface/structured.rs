//! 结构化文档表面
//!
//! 偏移解析走惰性重建的 [`OffsetIndex`]：文档被修改或整体替换后，下一次需要解析时才重建。

use std::borrow::Cow;
use std::ops::Range;

use super::offset_index::{Affinity, DocPosition, OffsetIndex};
use super::{Resolution, SurfaceError, TextSurface, Viewport};
use crate::models::{Document, Selection};

#[derive(Debug, Clone, Default)]
pub struct StructuredDocumentSurface {
    document: Document,
    index: Option<OffsetIndex>,
    selection: Option<Selection<DocPosition>>,
    caret: Option<DocPosition>,
    viewport: Viewport,
    focused: bool,
}

impl StructuredDocumentSurface {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            ..Self::default()
        }
    }

    pub fn with_viewport_height(mut self, height: usize) -> Self {
        self.viewport.set_height(height);
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// 可变访问文档；变更会使偏移索引过期
    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    /// 用纯文本替换文档内容，清空选区并回到顶部
    pub fn set_text(&mut self, text: &str) {
        self.document.set_text(text);
        self.selection = None;
        self.caret = None;
        self.viewport.reset();
    }

    /// 以当前线性投影重新载入（结构被扁平化为段落）
    pub fn reload(&mut self) {
        let text = self.linear_text().into_owned();
        self.set_text(&text);
    }

    pub fn selection(&self) -> Option<&Selection<DocPosition>> {
        self.selection.as_ref()
    }

    pub fn caret(&self) -> Option<DocPosition> {
        self.caret
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

    pub fn selection_range(&mut self) -> Option<Range<usize>> {
        let selection = self.selection?;
        let index = self.index();
        let start = index.offset_of(selection.anchor())?;
        let end = index.offset_of(selection.cursor())?;
        Some(start.min(end)..start.max(end))
    }

    pub fn selected_text(&mut self) -> Option<String> {
        let range = self.selection_range()?;
        let text = self.index().text();
        Some(text.chars().skip(range.start).take(range.len()).collect())
    }

    pub fn line_of_offset(&mut self, offset: usize) -> Option<usize> {
        self.index().line_of_offset(offset)
    }

    pub fn scroll_to_line(&mut self, line: usize) {
        let total = self.index().line_count();
        self.viewport.follow(line, total);
    }

    /// 把光标所在行带入视图；没有光标时不滚动
    pub fn bring_into_view(&mut self) {
        let Some(caret) = self.caret else {
            return;
        };
        let Some(line) = self.index().line_of(caret) else {
            return;
        };
        self.scroll_to_line(line);
    }

    fn index(&mut self) -> &OffsetIndex {
        let stale = self
            .index
            .as_ref()
            .map_or(true, |index| !index.is_current(&self.document));
        if stale {
            self.index = Some(OffsetIndex::build(&self.document));
        }
        self.index.get_or_insert_with(|| OffsetIndex::build(&self.document))
    }

    fn check_attached(&self, pos: DocPosition) -> Result<DocPosition, SurfaceError> {
        if self.document.contains(pos.node) {
            Ok(pos)
        } else {
            Err(SurfaceError::DetachedNode(pos.node))
        }
    }
}

impl TextSurface for StructuredDocumentSurface {
    type Position = DocPosition;

    fn linear_text(&self) -> Cow<'_, str> {
        match &self.index {
            Some(index) if index.is_current(&self.document) => Cow::Borrowed(index.text()),
            _ => Cow::Owned(self.document.linear_text()),
        }
    }

    fn position_at(&mut self, offset: usize) -> Option<DocPosition> {
        self.index().resolve(offset, Affinity::Forward)
    }

    fn select(&mut self, start: usize, len: usize) -> Result<Resolution, SurfaceError> {
        let index = self.index();
        let len_chars = index.len_chars();
        let Some(end) = start.checked_add(len).filter(|&end| end <= len_chars) else {
            tracing::debug!(start, len, len_chars, "selection outside document; skipped");
            return Ok(Resolution::Skipped);
        };

        let anchor = index
            .resolve(start, Affinity::Forward)
            .ok_or(SurfaceError::Unresolved { offset: start })?;
        let head = if len == 0 {
            anchor
        } else {
            index
                .resolve(end, Affinity::Backward)
                .ok_or(SurfaceError::Unresolved { offset: end })?
        };

        let anchor = self.check_attached(anchor)?;
        let head = self.check_attached(head)?;
        self.selection = Some(Selection::between(anchor, head));
        self.caret = Some(head);
        Ok(Resolution::Applied)
    }

    fn scroll_into_view(&mut self, offset: usize) {
        let index = self.index();
        let target = index
            .resolve(offset, Affinity::Forward)
            .and_then(|pos| index.line_of(pos).map(|line| (pos, line)));

        match target {
            Some((pos, line)) => {
                self.caret = Some(pos);
                self.scroll_to_line(line);
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
#[path = "../../tests/unit/surface/structured.rs"]
mod tests;
