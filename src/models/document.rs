//! 结构化文档模型
//!
//! 以 SlotMap 为 arena 的块/行内节点树：
//! - 块容器：Document（根）、Section
//! - 文本块：Paragraph、Heading、ListItem
//! - 行内：Span（容器）、Run（文本）、LineBreak
//!
//! 线性投影：按文档顺序拼接文本块；块内 Run 贡献其文本，LineBreak 贡献 `'\n'`，
//! 相邻文本块之间以一个 `'\n'` 分隔。

use slotmap::{new_key_type, SlotMap};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// 每个 Document 实例（含克隆）一个唯一标识，与版本号一起判定派生缓存是否过期
static NEXT_DOCUMENT_ID: AtomicU64 = AtomicU64::new(1);

fn next_document_id() -> u64 {
    NEXT_DOCUMENT_ID.fetch_add(1, Ordering::Relaxed)
}

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpanStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Section,
    Paragraph,
    Heading(u8),
    ListItem,
    Span(SpanStyle),
    Run(String),
    LineBreak,
}

impl NodeKind {
    pub fn is_block_container(&self) -> bool {
        matches!(self, NodeKind::Document | NodeKind::Section)
    }

    pub fn is_text_block(&self) -> bool {
        matches!(
            self,
            NodeKind::Paragraph | NodeKind::Heading(_) | NodeKind::ListItem
        )
    }

    pub fn is_block(&self) -> bool {
        matches!(self, NodeKind::Section) || self.is_text_block()
    }

    pub fn accepts_inlines(&self) -> bool {
        self.is_text_block() || matches!(self, NodeKind::Span(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    InvalidNodeId,
    NotABlock,
    NotABlockContainer,
    NotAnInlineContainer,
    NotARun,
    CannotRemoveRoot,
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentError::InvalidNodeId => write!(f, "invalid node id"),
            DocumentError::NotABlock => write!(f, "node kind is not a block"),
            DocumentError::NotABlockContainer => write!(f, "parent cannot hold blocks"),
            DocumentError::NotAnInlineContainer => write!(f, "parent cannot hold inline content"),
            DocumentError::NotARun => write!(f, "node is not a text run"),
            DocumentError::CannotRemoveRoot => write!(f, "cannot remove the document root"),
        }
    }
}

impl std::error::Error for DocumentError {}

/// 投影时产生的最小可寻址片段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Text { node: NodeId, text: &'a str },
    LineBreak { node: NodeId },
    /// 文本块之后的分隔符，归属于前一个文本块
    BlockEnd { node: NodeId },
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct Document {
    id: u64,
    arena: SlotMap<NodeId, Node>,
    root: NodeId,
    revision: u64,
}

impl Clone for Document {
    fn clone(&self) -> Self {
        Self {
            id: next_document_id(),
            arena: self.arena.clone(),
            root: self.root,
            revision: self.revision,
        }
    }
}

impl Document {
    pub fn new() -> Self {
        let mut arena = SlotMap::with_key();
        let root = arena.insert(Node::new(NodeKind::Document, None));
        Self {
            id: next_document_id(),
            arena,
            root,
            revision: 0,
        }
    }

    /// 每行一个 Paragraph；空文本得到空文档
    pub fn from_plain_text(text: &str) -> Self {
        let mut doc = Self::new();
        doc.fill_plain_text(text);
        doc
    }

    /// 用纯文本替换全部内容
    pub fn set_text(&mut self, text: &str) {
        let children = std::mem::take(&mut self.node_mut(self.root).children);
        for child in children {
            self.remove_subtree(child);
        }
        self.fill_plain_text(text);
        self.bump();
    }

    fn fill_plain_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for line in text.split('\n') {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let para = self.insert_child(self.root, NodeKind::Paragraph);
            if !line.is_empty() {
                self.insert_child(para, NodeKind::Run(line.to_string()));
            }
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// 每次结构或文本变更都会递增
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains_key(id)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.arena.get(id).map(|n| &n.kind)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id).and_then(|n| n.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.arena
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn append_block(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, DocumentError> {
        if !kind.is_block() {
            return Err(DocumentError::NotABlock);
        }
        let parent_kind = self.kind(parent).ok_or(DocumentError::InvalidNodeId)?;
        if !parent_kind.is_block_container() {
            return Err(DocumentError::NotABlockContainer);
        }
        let id = self.insert_child(parent, kind);
        self.bump();
        Ok(id)
    }

    pub fn append_span(&mut self, parent: NodeId, style: SpanStyle) -> Result<NodeId, DocumentError> {
        self.append_inline(parent, NodeKind::Span(style))
    }

    pub fn append_run(&mut self, parent: NodeId, text: &str) -> Result<NodeId, DocumentError> {
        self.append_inline(parent, NodeKind::Run(text.to_string()))
    }

    pub fn append_line_break(&mut self, parent: NodeId) -> Result<NodeId, DocumentError> {
        self.append_inline(parent, NodeKind::LineBreak)
    }

    fn append_inline(&mut self, parent: NodeId, kind: NodeKind) -> Result<NodeId, DocumentError> {
        let parent_kind = self.kind(parent).ok_or(DocumentError::InvalidNodeId)?;
        if !parent_kind.accepts_inlines() {
            return Err(DocumentError::NotAnInlineContainer);
        }
        let id = self.insert_child(parent, kind);
        self.bump();
        Ok(id)
    }

    pub fn set_run_text(&mut self, id: NodeId, text: &str) -> Result<(), DocumentError> {
        let node = self.arena.get_mut(id).ok_or(DocumentError::InvalidNodeId)?;
        match &mut node.kind {
            NodeKind::Run(current) => {
                current.clear();
                current.push_str(text);
            }
            _ => return Err(DocumentError::NotARun),
        }
        self.bump();
        Ok(())
    }

    /// 删除节点及其整个子树
    pub fn remove(&mut self, id: NodeId) -> Result<(), DocumentError> {
        if id == self.root {
            return Err(DocumentError::CannotRemoveRoot);
        }
        let parent = self
            .arena
            .get(id)
            .ok_or(DocumentError::InvalidNodeId)?
            .parent;
        if let Some(parent) = parent.and_then(|p| self.arena.get_mut(p)) {
            parent.children.retain(|&child| child != id);
        }
        self.remove_subtree(id);
        self.bump();
        Ok(())
    }

    /// 按文档顺序列出所有文本块
    pub fn text_blocks(&self) -> Vec<NodeId> {
        let mut blocks = Vec::new();
        let mut stack = vec![self.root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.arena.get(id) else {
                continue;
            };
            if node.kind.is_text_block() {
                blocks.push(id);
                continue;
            }
            stack.extend(node.children.iter().rev().copied());
        }
        blocks
    }

    /// 按线性投影顺序遍历所有片段
    pub fn for_each_segment<'a>(&'a self, mut f: impl FnMut(Segment<'a>)) {
        let mut prev_block: Option<NodeId> = None;
        for block in self.text_blocks() {
            if let Some(prev) = prev_block {
                f(Segment::BlockEnd { node: prev });
            }
            prev_block = Some(block);

            let mut stack: Vec<NodeId> = self.children(block).iter().rev().copied().collect();
            while let Some(id) = stack.pop() {
                let Some(node) = self.arena.get(id) else {
                    continue;
                };
                match &node.kind {
                    NodeKind::Run(text) => f(Segment::Text { node: id, text }),
                    NodeKind::LineBreak => f(Segment::LineBreak { node: id }),
                    _ => stack.extend(node.children.iter().rev().copied()),
                }
            }
        }
    }

    pub fn linear_text(&self) -> String {
        let mut text = String::new();
        self.for_each_segment(|segment| match segment {
            Segment::Text { text: run, .. } => text.push_str(run),
            Segment::LineBreak { .. } | Segment::BlockEnd { .. } => text.push('\n'),
        });
        text
    }

    fn insert_child(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = self.arena.insert(Node::new(kind, Some(parent)));
        self.node_mut(parent).children.push(id);
        id
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.arena[id]
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(node_id) = stack.pop() {
            if let Some(node) = self.arena.remove(node_id) {
                stack.extend(node.children);
            }
        }
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/document.rs"]
mod tests;
