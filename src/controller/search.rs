//! 查找控制器
//!
//! 查询或大小写变化 → 重建匹配索引 → 重置游标 → 驱动表面；
//! 导航命令只移动游标再驱动表面，不重建索引。
//! 表面的解析失败在这里被吸收为状态消息，永不向宿主传播。

use super::status::{Status, StatusLocale, StatusSink, StatusUpdate};
use crate::models::Query;
use crate::services::search::{MatchIndex, MatchSet, NavigationCursor};
use crate::services::settings::FindSettings;
use crate::surface::{Resolution, SurfaceError, TextSurface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Searching { matches: usize },
    Closed,
}

pub struct SearchController<S: TextSurface> {
    surface: Option<S>,
    query: Query,
    cursor: NavigationCursor,
    sink: Box<dyn StatusSink>,
    locale: StatusLocale,
    status: Option<StatusUpdate>,
    closed: bool,
}

impl<S: TextSurface> SearchController<S> {
    pub fn new(sink: impl StatusSink + 'static) -> Self {
        Self {
            surface: None,
            query: Query::default(),
            cursor: NavigationCursor::new(),
            sink: Box::new(sink),
            locale: StatusLocale::default(),
            status: None,
            closed: false,
        }
    }

    pub fn with_settings(settings: &FindSettings, sink: impl StatusSink + 'static) -> Self {
        let mut controller = Self::new(sink);
        controller.locale = settings.locale;
        controller.query = Query::new("", settings.case_sensitive);
        controller
    }

    /// 挂接目标表面并按当前查询重建；返回之前的表面
    pub fn attach(&mut self, surface: S) -> Option<S> {
        let previous = self.surface.replace(surface);
        if !self.closed {
            self.rebuild();
        }
        previous
    }

    pub fn detach(&mut self) -> Option<S> {
        self.cursor.reset(MatchSet::empty());
        self.surface.take()
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    pub fn locale(&self) -> StatusLocale {
        self.locale
    }

    /// 最近一次发布的状态
    pub fn status(&self) -> Option<&StatusUpdate> {
        self.status.as_ref()
    }

    pub fn status_text(&self) -> &str {
        self.status.as_ref().map(|s| s.text.as_str()).unwrap_or("")
    }

    pub fn state(&self) -> ControllerState {
        if self.closed {
            ControllerState::Closed
        } else if self.query.is_blank() {
            ControllerState::Idle
        } else {
            ControllerState::Searching {
                matches: self.cursor.len(),
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn set_query(&mut self, text: &str, case_sensitive: bool) {
        if self.closed {
            return;
        }
        self.query = Query::new(text, case_sensitive);
        self.rebuild();
    }

    pub fn on_query_changed(&mut self, text: &str) {
        let case_sensitive = self.query.case_sensitive();
        self.set_query(text, case_sensitive);
    }

    pub fn on_case_sensitivity_changed(&mut self, case_sensitive: bool) {
        let text = self.query.text().to_string();
        self.set_query(&text, case_sensitive);
    }

    /// 表面内容在外部变化后，以当前查询重建
    pub fn refresh(&mut self) {
        if self.closed {
            return;
        }
        self.rebuild();
    }

    pub fn next(&mut self) {
        if self.closed || self.cursor.next().is_none() {
            return;
        }
        self.navigate();
    }

    pub fn previous(&mut self) {
        if self.closed || self.cursor.previous().is_none() {
            return;
        }
        self.navigate();
    }

    /// 跳到指定匹配（0-based）；越界返回 false
    pub fn jump_to(&mut self, index: usize) -> bool {
        if self.closed || self.cursor.jump_to(index).is_none() {
            return false;
        }
        self.navigate();
        true
    }

    pub fn on_enter_key(&mut self) {
        self.next();
    }

    pub fn on_escape_key(&mut self) {
        self.close();
    }

    /// 关闭后不再处理任何事件
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        tracing::debug!("find controller closed");
        self.closed = true;
    }

    /// 当前匹配在表面中的结构位置
    pub fn current_position(&mut self) -> Option<S::Position> {
        let offset = self.cursor.current()?;
        self.surface.as_mut()?.position_at(offset)
    }

    fn rebuild(&mut self) {
        let matches = match self.surface.as_ref() {
            Some(surface) if !self.query.is_blank() => {
                let text = surface.linear_text();
                MatchIndex::build(&text, self.query.text(), self.query.case_sensitive())
            }
            Some(_) => MatchSet::empty(),
            None => {
                tracing::debug!("no surface attached; treating as zero matches");
                MatchSet::empty()
            }
        };
        self.cursor.reset(matches);

        let total = self.cursor.len();
        tracing::debug!(
            query_len = self.query.char_len(),
            case_sensitive = self.query.case_sensitive(),
            total,
            "search results rebuilt"
        );

        if let Some(offset) = self.cursor.current() {
            if let Err(e) = self.drive_surface(offset) {
                self.fail(e);
                return;
            }
        }
        self.publish(Status::Matches { total }, false);
    }

    fn navigate(&mut self) {
        let Some(offset) = self.cursor.current() else {
            return;
        };
        match self.drive_surface(offset) {
            Ok(Resolution::Applied) => {
                if let Some((current, total)) = self.cursor.position() {
                    self.publish(Status::Position { current, total }, false);
                }
            }
            Ok(Resolution::Skipped) => {
                tracing::debug!(offset, "match no longer inside surface content");
            }
            Err(e) => self.fail(e),
        }
    }

    fn drive_surface(&mut self, offset: usize) -> Result<Resolution, SurfaceError> {
        let len = self.cursor.matches().match_len();
        let Some(surface) = self.surface.as_mut() else {
            return Ok(Resolution::Skipped);
        };

        let resolution = surface.select(offset, len)?;
        if resolution == Resolution::Applied {
            surface.focus();
            surface.scroll_into_view(offset);
        }
        Ok(resolution)
    }

    fn fail(&mut self, error: SurfaceError) {
        tracing::warn!(error = %error, "surface resolution failed");
        self.publish(
            Status::Failed {
                message: error.to_string(),
            },
            true,
        );
    }

    fn publish(&mut self, status: Status, auto_clear: bool) {
        let update = StatusUpdate {
            text: status.render(self.locale),
            status,
            auto_clear,
        };
        self.sink.publish(&update);
        self.status = Some(update);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/search.rs"]
mod tests;
