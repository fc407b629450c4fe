//! 纵向视口：跟随目标行的最小滚动

use std::ops::Range;

/// 纵向视口，单位为可视行
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    line_offset: usize,
    height: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(20)
    }
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self {
            line_offset: 0,
            height,
        }
    }

    pub fn line_offset(&self) -> usize {
        self.line_offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    pub fn visible_lines(&self) -> Range<usize> {
        self.line_offset..self.line_offset + self.height.max(1)
    }

    pub fn is_visible(&self, line: usize) -> bool {
        self.visible_lines().contains(&line)
    }

    pub fn reset(&mut self) {
        self.line_offset = 0;
    }

    /// 最小滚动使 `line` 可见，并钳制在内容范围内；返回是否发生滚动
    pub fn follow(&mut self, line: usize, total_lines: usize) -> bool {
        let before = self.line_offset;
        let total_lines = total_lines.max(1);
        let height = self.height.max(1);

        let max_offset = total_lines.saturating_sub(height);
        self.line_offset = self.line_offset.min(max_offset);

        let line = line.min(total_lines - 1);
        if line < self.line_offset {
            self.line_offset = line;
        } else if line >= self.line_offset + height {
            self.line_offset = line.saturating_sub(height.saturating_sub(1));
        }

        self.line_offset != before
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/viewport.rs"]
mod tests;
