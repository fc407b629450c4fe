//! 文本表面抽象
//!
//! 控制器只依赖 [`TextSurface`]：获取线性文本、把线性偏移翻译为结构位置、
//! 选中区间、滚动到可见、获取焦点。
//! 超出内容长度的偏移是静默的空操作（[`Resolution::Skipped`]），
//! 其余解析失败以 [`SurfaceError`] 返回，由控制器降级为状态消息。

mod flat;
mod offset_index;
mod structured;
mod viewport;

use std::borrow::Cow;
use std::fmt;

use crate::models::NodeId;

pub use flat::FlatTextSurface;
pub use offset_index::{Affinity, DocPosition, OffsetIndex};
pub use structured::StructuredDocumentSurface;
pub use viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Skipped,
}

#[derive(Debug)]
pub enum SurfaceError {
    Rope(ropey::Error),
    DetachedNode(NodeId),
    Unresolved { offset: usize },
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::Rope(e) => write!(f, "{}", e),
            SurfaceError::DetachedNode(id) => write!(f, "node {:?} is no longer in the document", id),
            SurfaceError::Unresolved { offset } => {
                write!(f, "offset {} has no structural position", offset)
            }
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SurfaceError::Rope(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ropey::Error> for SurfaceError {
    fn from(e: ropey::Error) -> Self {
        SurfaceError::Rope(e)
    }
}

pub trait TextSurface {
    /// 表面原生的结构位置，只在实现内部比较或运算
    type Position: Copy + fmt::Debug;

    fn linear_text(&self) -> Cow<'_, str>;

    fn position_at(&mut self, offset: usize) -> Option<Self::Position>;

    fn select(&mut self, start: usize, len: usize) -> Result<Resolution, SurfaceError>;

    /// 解析失败时退化为把当前光标带入视图
    fn scroll_into_view(&mut self, offset: usize);

    fn focus(&mut self);
}
