//! 服务层模块
//!
//! - search: 匹配索引与导航游标
//! - settings: 查找设置的加载与默认值

pub mod search;
pub mod settings;

pub use search::{MatchIndex, MatchSet, NavigationCursor};
pub use settings::{FindSettings, SettingsError};
