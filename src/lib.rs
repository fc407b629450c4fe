//! zfind - 增量查找与导航引擎
//!
//! 模块结构：
//! - core: 宿主无关的查找命令（FindCommand）
//! - models: 数据模型（TextBuffer, Document, Selection, Query）
//! - services: 服务层（匹配索引、导航游标、配置）
//! - surface: 文本表面抽象（平铺文本 / 结构化文档）
//! - controller: 查找控制器与会话

pub mod controller;
pub mod core;
pub mod models;
pub mod services;
pub mod surface;

pub use controller::{
    ControllerState, FindSession, SearchController, SessionFlow, Status, StatusLocale, StatusSink,
    StatusUpdate,
};
pub use core::FindCommand;
pub use models::{Document, DocumentError, NodeId, NodeKind, Query, QueryInput, TextBuffer};
pub use services::search::{MatchIndex, MatchSet, NavigationCursor};
pub use services::settings::FindSettings;
pub use surface::{
    DocPosition, FlatTextSurface, Resolution, StructuredDocumentSurface, SurfaceError, TextSurface,
};
