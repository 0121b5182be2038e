//! Update function for the process form.
//!
//! Field setters mutate state and re-render. `Submit` harvests the payload,
//! cancels any running result poll, clears the displayed result through the
//! parent, and posts the job. Response handling mirrors the backend's mixed
//! register:
//! - an HTML body or an unparseable one falls back to navigating to the
//!   dashboard, as does a network failure;
//! - a JSON error with the `no_edit` code navigates with an error query
//!   parameter, any other JSON error is only logged;
//! - an acceptance carrying an entry id starts the bounded result poller.

use common::flow::submit::{SubmitOutcome, EDIT_DENIED};
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::poll;

use super::helpers::navigate_to;
use super::messages::{BlockField, Msg, TextField};
use super::state::ProcessForm;

pub fn update(component: &mut ProcessForm, ctx: &Context<ProcessForm>, msg: Msg) -> bool {
    match msg {
        Msg::SetProcessType(value) => {
            component.process_type = Some(value);
            true
        }
        Msg::SetText(field, value) => {
            *text_field_mut(component, field) = value;
            true
        }
        Msg::SetCompanyGeo(checked) => {
            component.company_geo = checked;
            true
        }
        Msg::SetIndustry(selected) => {
            component.industry = selected;
            true
        }
        Msg::SetGeo(selected) => {
            component.geo = selected;
            true
        }
        Msg::AddBlock => {
            component.add_block();
            true
        }
        Msg::SetBlockSelection(index, field, selected) => {
            if let Some(block) = component.blocks.get_mut(index) {
                match field {
                    BlockField::JobFunction => block.fields.job_function = selected,
                    BlockField::Level1 => block.fields.level1 = selected,
                    BlockField::Level2 => block.fields.level2 = selected,
                    BlockField::Level3 => block.fields.level3 = selected,
                }
            }
            true
        }
        Msg::SetBlockKeywords(index, value) => {
            if let Some(block) = component.blocks.get_mut(index) {
                block.fields.keywords = value;
            }
            true
        }
        Msg::Submit => {
            component.cancel_poll();
            ctx.props().on_submit_started.emit(());

            let payload = component.payload();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::submit_process(&payload).await {
                    Ok(SubmitOutcome::Redirect) => {
                        log!("Redirect detected, proceeding to dashboard");
                        navigate_to("/dashboard");
                    }
                    Ok(SubmitOutcome::Accepted { entry_id }) => {
                        log!(format!("Process accepted, entry {entry_id}"));
                        link.send_message(Msg::StartPolling(entry_id));
                    }
                    Ok(SubmitOutcome::AcceptedWithoutId) => {
                        log!("Process accepted without an entry id");
                    }
                    Ok(SubmitOutcome::Denied { error }) => {
                        if error.as_deref() == Some(EDIT_DENIED) {
                            navigate_to("/dashboard?error=no_edit");
                        } else {
                            // Silent beyond the log, same as the served page.
                            error!(format!("Process request rejected: {error:?}"));
                        }
                    }
                    Ok(SubmitOutcome::Malformed) => {
                        error!("Failed to parse process response");
                        navigate_to("/dashboard");
                    }
                    Err(err) => {
                        error!(format!("Network error submitting process: {err:?}"));
                        navigate_to("/dashboard");
                    }
                }
            });
            false
        }
        Msg::StartPolling(entry_id) => {
            component.cancel_poll();
            component.poll = Some(poll::start(entry_id, ctx.props().on_processed.clone()));
            false
        }
    }
}

fn text_field_mut(component: &mut ProcessForm, field: TextField) -> &mut String {
    match field {
        TextField::ExcludeKeywords => &mut component.exclude_keywords,
        TextField::SheetUrl => &mut component.sheet_url,
        TextField::SupEmailsSheetUrl => &mut component.sup_emails_sheet_url,
        TextField::SupDomainsSheetUrl => &mut component.sup_domains_sheet_url,
        TextField::SupNamesSheetUrl => &mut component.sup_names_sheet_url,
        TextField::Goal => &mut component.goal,
        TextField::Lpc => &mut component.lpc,
        TextField::Size => &mut component.size,
        TextField::Revenue => &mut component.revenue,
    }
}
