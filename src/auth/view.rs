//! Login/register view switching. Only one view is visible at a time, and
//! entering either view clears every field error and hides both status
//! messages so nothing leaks from the previously active form.

use crate::auth::{
    types::{FieldId, FormKind},
    ui::Renderer,
};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    LoginView,
    RegisterView,
}

#[derive(Debug, Default)]
pub struct ViewStateController {
    state: ViewState,
}

impl ViewStateController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> ViewState {
        self.state
    }

    pub fn show_login(&mut self, ui: &mut dyn Renderer) {
        self.enter(ViewState::LoginView, ui);
    }

    pub fn show_register(&mut self, ui: &mut dyn Renderer) {
        self.enter(ViewState::RegisterView, ui);
    }

    fn enter(&mut self, state: ViewState, ui: &mut dyn Renderer) {
        debug!(from = ?self.state, to = ?state, "switching view");
        self.state = state;
        ui.show_view(state);

        for field in FieldId::ALL {
            ui.clear_field_error(field);
        }
        ui.hide_status(FormKind::Login);
        ui.hide_status(FormKind::Register);
    }
}
