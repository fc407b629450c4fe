//! 导航游标：在匹配集合上循环前进/后退

use super::matcher::MatchSet;

#[derive(Debug, Clone, Default)]
pub struct NavigationCursor {
    matches: MatchSet,
    current_index: Option<usize>,
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换匹配集合；非空时自动选中第一个匹配
    pub fn reset(&mut self, matches: MatchSet) {
        self.current_index = if matches.is_empty() { None } else { Some(0) };
        self.matches = matches;
    }

    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// 当前匹配的起始偏移
    pub fn current(&self) -> Option<usize> {
        self.current_index.and_then(|i| self.matches.get(i))
    }

    /// 1-based 位置与总数
    pub fn position(&self) -> Option<(usize, usize)> {
        self.current_index.map(|i| (i + 1, self.matches.len()))
    }

    pub fn next(&mut self) -> Option<usize> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }
        let next_index = match self.current_index {
            Some(i) => (i + 1) % len,
            None => 0,
        };
        self.current_index = Some(next_index);
        self.current()
    }

    pub fn previous(&mut self) -> Option<usize> {
        let len = self.matches.len();
        if len == 0 {
            return None;
        }
        let prev_index = match self.current_index {
            Some(i) if i > 0 => i - 1,
            _ => len - 1,
        };
        self.current_index = Some(prev_index);
        self.current()
    }

    /// 越界时保持原状并返回 None
    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.matches.len() {
            return None;
        }
        self.current_index = Some(index);
        self.current()
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/services/search/cursor.rs"]
mod tests;
