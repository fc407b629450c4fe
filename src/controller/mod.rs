//! 查找控制器层
//!
//! - search: 查询变化与导航命令的编排
//! - session: 宿主输入命令的路由
//! - status: 状态消息与发布接口

mod search;
mod session;
mod status;

pub use search::{ControllerState, SearchController};
pub use session::{FindSession, SessionFlow};
pub use status::{Status, StatusLocale, StatusSink, StatusUpdate};
