//! Panel rendering the processed result of a submission.
//!
//! Hidden until the result poller delivers data. Tag lists render
//! independently of each other, and the geo list goes through
//! `ProcessedResult::geo_list`, which tolerates the several shapes the
//! backend produces. Clearing happens upstream: the parent drops the
//! result before each new submission.

use common::model::process::ProcessedResult;
use wasm_bindgen::JsValue;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProcessedPanelProps {
    #[prop_or_default]
    pub result: Option<ProcessedResult>,
}

pub struct ProcessedPanel;

impl Component for ProcessedPanel {
    type Message = ();
    type Properties = ProcessedPanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProcessedPanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(result) = &ctx.props().result else {
            return html! {};
        };

        let geo = result.geo_list();
        let geo_tags = if geo.is_empty() {
            html! { <span class="data-tag">{ "No geo data" }</span> }
        } else {
            tag_list(&geo)
        };

        html! {
            <div id="processedDataContainer" class="processed-data">
                <h3>{ "Processed Data" }</h3>
                <div class="processed-meta">
                    <span id="processedEntryName">{ &result.entry_name }</span>
                    <span id="processedTimestamp">{ format_timestamp(&result.processed_at) }</span>
                </div>
                <div class="tag-section">
                    <h4>{ "Job Levels" }</h4>
                    <div id="jobLevelsTags">{ tag_list(&result.job_levels) }</div>
                </div>
                <div class="tag-section">
                    <h4>{ "Job Functions" }</h4>
                    <div id="jobFunctionsTags">{ tag_list(&result.job_functions) }</div>
                </div>
                <div class="tag-section">
                    <h4>{ "Keywords" }</h4>
                    <div id="keywordsTags">{ tag_list(&result.keywords) }</div>
                </div>
                <div class="tag-section">
                    <h4>{ "Geo Locations" }</h4>
                    <div id="geoTags">{ geo_tags }</div>
                </div>
            </div>
        }
    }
}

fn tag_list(items: &[String]) -> Html {
    items
        .iter()
        .map(|item| html! { <span class="data-tag">{ item }</span> })
        .collect()
}

/// Locale-formats an ISO timestamp through the browser `Date` API; an
/// empty input stays empty.
fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let date = js_sys::Date::new(&JsValue::from_str(raw));
    String::from(date.to_locale_string("default", &JsValue::UNDEFINED))
}
