//! 线性偏移 → 结构位置索引
//!
//! 由文档投影一次性构建片段表（起始偏移 + 长度），之后的解析是二分查找。
//! 索引记录构建时的文档标识与版本，任一不一致即视为过期。

use rustc_hash::FxHashMap;

use crate::models::{Document, NodeId, Segment};

/// 结构化文档中的位置：片段所属节点 + 片段内字符偏移
///
/// 对 Run 而言偏移是 Run 文本内的字符位置；
/// 对换行与块分隔符而言偏移只可能是 0 或 1。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocPosition {
    pub node: NodeId,
    pub offset: usize,
}

/// 偏移恰好落在两个片段边界上时的归属
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affinity {
    /// 归属后一个片段（选区起点）
    Forward,
    /// 归属前一个片段（选区终点）
    Backward,
}

#[derive(Debug, Clone, Copy)]
struct IndexedSegment {
    node: NodeId,
    start: usize,
    len: usize,
}

impl IndexedSegment {
    fn end(&self) -> usize {
        self.start + self.len
    }
}

#[derive(Debug, Clone)]
pub struct OffsetIndex {
    document_id: u64,
    revision: u64,
    root: NodeId,
    text: String,
    len_chars: usize,
    segments: Vec<IndexedSegment>,
    by_node: FxHashMap<NodeId, usize>,
    line_starts: Vec<usize>,
}

impl OffsetIndex {
    pub fn build(document: &Document) -> Self {
        let mut text = String::new();
        let mut segments = Vec::new();
        let mut by_node = FxHashMap::default();
        let mut line_starts = vec![0];
        let mut offset = 0usize;

        document.for_each_segment(|segment| {
            let (node, len) = match segment {
                Segment::Text { node, text: run } => {
                    let mut len = 0usize;
                    for c in run.chars() {
                        len += 1;
                        if c == '\n' {
                            line_starts.push(offset + len);
                        }
                    }
                    text.push_str(run);
                    (node, len)
                }
                Segment::LineBreak { node } | Segment::BlockEnd { node } => {
                    text.push('\n');
                    line_starts.push(offset + 1);
                    (node, 1)
                }
            };
            if len == 0 {
                return;
            }
            by_node.insert(node, segments.len());
            segments.push(IndexedSegment {
                node,
                start: offset,
                len,
            });
            offset += len;
        });

        tracing::trace!(
            revision = document.revision(),
            segments = segments.len(),
            len_chars = offset,
            "offset index rebuilt"
        );

        Self {
            document_id: document.id(),
            revision: document.revision(),
            root: document.root(),
            text,
            len_chars: offset,
            segments,
            by_node,
            line_starts,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// 同一个文档实例且版本一致
    pub fn is_current(&self, document: &Document) -> bool {
        self.document_id == document.id() && self.revision == document.revision()
    }

    /// 构建时的线性投影
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len_chars(&self) -> usize {
        self.len_chars
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    pub fn resolve(&self, offset: usize, affinity: Affinity) -> Option<DocPosition> {
        if offset > self.len_chars {
            return None;
        }
        let Some(last) = self.segments.len().checked_sub(1) else {
            return Some(DocPosition {
                node: self.root,
                offset: 0,
            });
        };

        let idx = match affinity {
            Affinity::Forward => self
                .segments
                .partition_point(|s| s.end() <= offset)
                .min(last),
            Affinity::Backward if offset == 0 => 0,
            Affinity::Backward => self.segments.partition_point(|s| s.end() < offset),
        };
        let segment = self.segments.get(idx)?;

        Some(DocPosition {
            node: segment.node,
            offset: offset - segment.start,
        })
    }

    pub fn offset_of(&self, pos: DocPosition) -> Option<usize> {
        if pos.node == self.root && self.segments.is_empty() {
            return (pos.offset == 0).then_some(0);
        }
        let segment = self.segments.get(*self.by_node.get(&pos.node)?)?;
        (pos.offset <= segment.len).then(|| segment.start + pos.offset)
    }

    pub fn line_of_offset(&self, offset: usize) -> Option<usize> {
        if offset > self.len_chars {
            return None;
        }
        Some(self.line_starts.partition_point(|&start| start <= offset) - 1)
    }

    pub fn line_of(&self, pos: DocPosition) -> Option<usize> {
        self.line_of_offset(self.offset_of(pos)?)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/surface/offset_index.rs"]
mod tests;
