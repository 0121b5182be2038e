//! Process form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! The form collects the global job fields plus a growing list of
//! requirement blocks, submits the payload to `/process`, and owns the
//! bounded result poller started on acceptance.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProcessFormProps;
pub use state::ProcessForm;

impl Component for ProcessForm {
    type Message = Msg;
    type Properties = ProcessFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProcessForm::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        // Navigating away abandons any in-flight result poll.
        self.cancel_poll();
    }
}
