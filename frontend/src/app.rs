use common::model::process::ProcessedResult;
use yew::{html, Component, Context, Html};

use crate::components::entries::EntriesTable;
use crate::components::process_form::ProcessForm;
use crate::components::processed::ProcessedPanel;

pub enum Msg {
    SubmissionStarted,
    ProcessedReady(ProcessedResult),
}

/// Root of the dashboard: the process form, the processed-data panel it
/// feeds, and the independently polling entries table.
pub struct App {
    processed: Option<ProcessedResult>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { processed: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Each submission starts from a blank result panel.
            Msg::SubmissionStarted => {
                self.processed = None;
                true
            }
            Msg::ProcessedReady(result) => {
                self.processed = Some(result);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="dashboard">
                <ProcessForm
                    on_submit_started={link.callback(|_| Msg::SubmissionStarted)}
                    on_processed={link.callback(Msg::ProcessedReady)}
                />
                <ProcessedPanel result={self.processed.clone()} />
                <EntriesTable />
            </div>
        }
    }
}
