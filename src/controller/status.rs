//! 状态消息：控制器只发布结构化状态，文本渲染按语言区域决定

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusLocale {
    #[default]
    En,
    Zh,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Matches { total: usize },
    /// `current` 为 1-based
    Position { current: usize, total: usize },
    Failed { message: String },
}

impl Status {
    pub fn render(&self, locale: StatusLocale) -> String {
        match (self, locale) {
            (Status::Matches { total }, StatusLocale::En) => format!("{} matches", total),
            (Status::Matches { total }, StatusLocale::Zh) => format!("{} 个匹配项", total),
            (Status::Position { current, total }, StatusLocale::En) => {
                format!("{} matches - {}/{}", total, current, total)
            }
            (Status::Position { current, total }, StatusLocale::Zh) => {
                format!("{} 个匹配项 - 第 {}/{} 个", total, current, total)
            }
            (Status::Failed { message }, StatusLocale::En) => format!("Error: {}", message),
            (Status::Failed { message }, StatusLocale::Zh) => format!("错误: {}", message),
        }
    }

    pub fn total(&self) -> Option<usize> {
        match self {
            Status::Matches { total } | Status::Position { total, .. } => Some(*total),
            Status::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: Status,
    pub text: String,
    /// 宿主应在配置的延时后清除该消息
    pub auto_clear: bool,
}

pub trait StatusSink {
    fn publish(&mut self, update: &StatusUpdate);
}

impl<F> StatusSink for F
where
    F: FnMut(&StatusUpdate),
{
    fn publish(&mut self, update: &StatusUpdate) {
        self(update)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/status.rs"]
mod tests;
