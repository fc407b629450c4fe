//! 选区模型：锚点 + 光标，位置类型由文本表面决定

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<P> {
    anchor: P,
    cursor: P,
}

impl<P: Copy> Selection<P> {
    pub fn new(pos: P) -> Self {
        Self {
            anchor: pos,
            cursor: pos,
        }
    }

    pub fn between(anchor: P, cursor: P) -> Self {
        Self { anchor, cursor }
    }

    pub fn anchor(&self) -> P {
        self.anchor
    }

    pub fn cursor(&self) -> P {
        self.cursor
    }
}

impl<P: Copy + PartialEq> Selection<P> {
    pub fn is_empty(&self) -> bool {
        self.anchor == self.cursor
    }
}

impl<P: Copy + Ord> Selection<P> {
    pub fn range(&self) -> (P, P) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/selection.rs"]
mod tests;
