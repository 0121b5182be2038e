//! Live table of processing entries.
//!
//! Fetches `/api/entries` once on mount and every five seconds after that.
//! A failed fetch keeps the previous rows; a successful one replaces them
//! wholesale. Row controls derive from the entry status: stopped and
//! failed entries offer resume, in-progress entries offer stop, and every
//! row can be deleted. Stop/resume/delete responses are intentionally
//! discarded without refreshing; the next poll tick reflects the new
//! state. Delete-all asks for confirmation and is the one action that
//! reports its outcome through a blocking alert.

use common::model::entry::{self, Entry, EntryAction, TableRows};
use gloo_console::error;
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;

const REFRESH_INTERVAL_MS: u32 = 5_000;

pub enum Msg {
    Refresh,
    Loaded(Vec<Entry>),
    FetchFailed(String),
    RowAction(String),
    DeleteAll,
    DeleteAllFinished(Result<(), String>),
}

pub struct EntriesTable {
    entries: Vec<Entry>,
    _refresh: Interval,
}

impl Component for EntriesTable {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Refresh);
        let link = ctx.link().clone();
        Self {
            entries: Vec::new(),
            // Dropped with the component, which stops the polling.
            _refresh: Interval::new(REFRESH_INTERVAL_MS, move || {
                link.send_message(Msg::Refresh)
            }),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Refresh => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::fetch_entries().await {
                        Ok(entries) => link.send_message(Msg::Loaded(entries)),
                        Err(err) => link.send_message(Msg::FetchFailed(err.to_string())),
                    }
                });
                false
            }
            Msg::Loaded(entries) => {
                self.entries = entries;
                true
            }
            Msg::FetchFailed(message) => {
                // Keep the previous rows on failure.
                error!(format!("Error refreshing entries: {message}"));
                false
            }
            Msg::RowAction(url) => {
                spawn_local(async move {
                    if let Err(err) = api::post_entry_action(&url).await {
                        error!(format!("Entry action {url} failed: {err:?}"));
                    }
                });
                false
            }
            Msg::DeleteAll => {
                let confirmed = web_sys::window()
                    .map(|w| {
                        w.confirm_with_message("Are you sure you want to delete ALL entries?")
                            .unwrap_or(false)
                    })
                    .unwrap_or(false);
                if confirmed {
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let outcome = api::delete_all_entries()
                            .await
                            .map_err(|err| err.to_string());
                        link.send_message(Msg::DeleteAllFinished(outcome));
                    });
                }
                false
            }
            Msg::DeleteAllFinished(outcome) => {
                // Refresh goes out before the blocking alert.
                ctx.link().send_message(Msg::Refresh);
                let message = match &outcome {
                    Ok(()) => "All entries deleted successfully.".to_string(),
                    Err(err) => format!("Error deleting all entries: {err}"),
                };
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message(&message);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="entries-section">
                <div class="entries-toolbar">
                    <button
                        class="delete-all-btn"
                        onclick={link.callback(|_| Msg::DeleteAll)}
                    >
                        { "Delete All" }
                    </button>
                </div>
                <table class="entries-table">
                    <thead>
                        <tr>
                            <th>{ "#" }</th>
                            <th>{ "Name" }</th>
                            <th>{ "URL" }</th>
                            <th>{ "Status" }</th>
                            <th>{ "Error" }</th>
                            <th>{ "Control" }</th>
                            <th>{ "Delete" }</th>
                        </tr>
                    </thead>
                    <tbody id="entries-table-body">
                        { self.view_rows(ctx) }
                    </tbody>
                </table>
            </div>
        }
    }
}

impl EntriesTable {
    fn view_rows(&self, ctx: &Context<Self>) -> Html {
        match entry::table_rows(&self.entries) {
            TableRows::Placeholder => html! {
                <tr><td colspan="7">{ entry::EMPTY_TABLE_TEXT }</td></tr>
            },
            TableRows::Entries(entries) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| self.view_row(ctx, index, entry))
                .collect(),
        }
    }

    fn view_row(&self, ctx: &Context<Self>, index: usize, entry: &Entry) -> Html {
        let error_message = entry.error_message.clone().unwrap_or_default();
        let error_cell = if error_message.is_empty() {
            "-".to_string()
        } else {
            error_message.clone()
        };
        let delete = action_button(
            ctx,
            format!("/delete/{}", entry.id),
            "delete-btn",
            "Delete",
            "fas fa-trash",
        );

        html! {
            <tr key={entry.id.clone()}>
                <td>{ index + 1 }</td>
                <td class="truncate-text" title={entry.name.clone()}>{ &entry.name }</td>
                <td>
                    <a
                        href={entry.url.clone()}
                        target="_blank"
                        class="url-cell"
                        title={entry.url.clone()}
                    >
                        { &entry.url }
                    </a>
                </td>
                <td>
                    <span class={entry.status.badge_class()}>{ entry.status.label() }</span>
                </td>
                <td title={error_message}>{ error_cell }</td>
                <td>{ self.view_control(ctx, entry) }</td>
                <td>{ delete }</td>
            </tr>
        }
    }

    fn view_control(&self, ctx: &Context<Self>, entry: &Entry) -> Html {
        match entry.status.action() {
            EntryAction::Resume => action_button(
                ctx,
                format!("/resume/{}", entry.id),
                "resume-btn",
                "Resume",
                "fas fa-play",
            ),
            EntryAction::Stop => action_button(
                ctx,
                format!("/stop/{}", entry.id),
                "stop-btn",
                "Stop",
                "fas fa-pause",
            ),
            EntryAction::None => html! { { "-" } },
        }
    }
}

fn action_button(
    ctx: &Context<EntriesTable>,
    url: String,
    class: &'static str,
    title: &'static str,
    icon: &'static str,
) -> Html {
    let onclick = ctx.link().callback(move |_| Msg::RowAction(url.clone()));
    html! {
        <button type="button" class={class} title={title} {onclick}>
            <i class={icon}></i>
        </button>
    }
}
