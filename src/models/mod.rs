//! 数据模型层

pub mod document;
pub mod query;
pub mod selection;
pub mod text_buffer;

pub use document::{Document, DocumentError, NodeId, NodeKind, Segment, SpanStyle};
pub use query::{EditOutcome, Query, QueryInput};
pub use selection::Selection;
pub use text_buffer::{slice_to_cow, TextBuffer, TextPos};
