//! 查找会话：把宿主的输入命令路由到查询输入框与控制器

use super::search::SearchController;
use crate::core::FindCommand;
use crate::models::{EditOutcome, QueryInput};
use crate::surface::TextSurface;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Closed,
}

pub struct FindSession<S: TextSurface> {
    input: QueryInput,
    controller: SearchController<S>,
}

impl<S: TextSurface> FindSession<S> {
    pub fn new(controller: SearchController<S>) -> Self {
        let mut input = QueryInput::new(controller.query().case_sensitive());
        input.set_text(controller.query().text());
        Self { input, controller }
    }

    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    pub fn controller(&self) -> &SearchController<S> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SearchController<S> {
        &mut self.controller
    }

    pub fn into_controller(self) -> SearchController<S> {
        self.controller
    }

    pub fn handle(&mut self, command: &FindCommand) -> SessionFlow {
        if self.controller.is_closed() {
            return SessionFlow::Closed;
        }

        match command {
            FindCommand::Next => self.controller.on_enter_key(),
            FindCommand::Previous => self.controller.previous(),
            FindCommand::Close => self.controller.on_escape_key(),
            FindCommand::ToggleCaseSensitive => {
                let case_sensitive = self.input.toggle_case_sensitive();
                self.controller.on_case_sensitivity_changed(case_sensitive);
            }
            edit if edit.is_edit() => {
                if self.input.apply(edit) == EditOutcome::TextChanged {
                    self.controller.on_query_changed(self.input.text());
                }
            }
            _ => {}
        }

        if self.controller.is_closed() {
            SessionFlow::Closed
        } else {
            SessionFlow::Continue
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/session.rs"]
mod tests;
