//! 搜索服务模块
//!
//! - MatchIndex: 字面量匹配索引（允许重叠匹配）
//! - NavigationCursor: 环绕式匹配导航

mod cursor;
mod matcher;

pub use cursor::NavigationCursor;
pub use matcher::{fold_case, fold_char, MatchIndex, MatchSet};
