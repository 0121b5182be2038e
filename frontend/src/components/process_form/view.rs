//! View rendering for the process form.
//!
//! The form is state-driven: every control reflects component state and
//! reports edits through messages, so submission never reads the DOM.
//! Requirement blocks render from their instantiated id set, with labels
//! wired to the generated ids.

use common::fixed;
use common::form::selection;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::select_all::MultiSelect;

use super::helpers::{input_checked, input_value, textarea_value};
use super::messages::{BlockField, Msg, TextField};
use super::state::{BlockState, ProcessForm};

pub fn view(component: &ProcessForm, ctx: &Context<ProcessForm>) -> Html {
    let link = ctx.link();
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form id="processForm" {onsubmit}>
            { build_process_type_row(component, link) }
            { build_global_fields(component, link) }
            { build_global_selects(component, link) }

            <div class="requirements">
                { for component.blocks.iter().enumerate().map(|(index, block)| {
                    build_requirement_block(block, index, link)
                }) }
                <button
                    type="button"
                    class="add_req_button"
                    onclick={link.callback(|_| Msg::AddBlock)}
                >
                    { "+ Add requirement" }
                </button>
            </div>

            <button type="submit" class="submit-btn">{ "Start Processing" }</button>
        </form>
    }
}

fn build_process_type_row(component: &ProcessForm, link: &Scope<ProcessForm>) -> Html {
    html! {
        <div class="process-type-row">
            { for fixed::PROCESS_TYPES.iter().map(|(value, label)| {
                let onchange = {
                    let value = value.to_string();
                    link.callback(move |_| Msg::SetProcessType(value.clone()))
                };
                html! {
                    <label class="radio-label">
                        <input
                            type="radio"
                            name="process_type"
                            value={*value}
                            checked={component.process_type.as_deref() == Some(*value)}
                            {onchange}
                        />
                        { *label }
                    </label>
                }
            }) }
        </div>
    }
}

fn build_global_fields(component: &ProcessForm, link: &Scope<ProcessForm>) -> Html {
    html! {
        <div class="global-fields">
            { text_input(link, "sheet_url", "Sheet URL", TextField::SheetUrl, &component.sheet_url) }
            { text_input(link, "sup_emails_sheet_url", "Suppression emails sheet URL",
                TextField::SupEmailsSheetUrl, &component.sup_emails_sheet_url) }
            { text_input(link, "sup_domains_sheet_url", "Suppression domains sheet URL",
                TextField::SupDomainsSheetUrl, &component.sup_domains_sheet_url) }
            { text_input(link, "sup_names_sheet_url", "Suppression names sheet URL",
                TextField::SupNamesSheetUrl, &component.sup_names_sheet_url) }
            { text_input(link, "exclude_keywords", "Exclude keywords",
                TextField::ExcludeKeywords, &component.exclude_keywords) }
            { text_input(link, "goal", "Goal", TextField::Goal, &component.goal) }
            { text_input(link, "lpc", "Leads per company", TextField::Lpc, &component.lpc) }
            { text_input(link, "size", "Company size", TextField::Size, &component.size) }
            { text_input(link, "revenue", "Revenue", TextField::Revenue, &component.revenue) }

            <label class="checkbox-label" for="company_geo_sw">
                <input
                    type="checkbox"
                    id="company_geo_sw"
                    checked={component.company_geo}
                    onchange={link.callback(|e: Event| Msg::SetCompanyGeo(input_checked(&e)))}
                />
                { "Company geo" }
            </label>
        </div>
    }
}

fn build_global_selects(component: &ProcessForm, link: &Scope<ProcessForm>) -> Html {
    html! {
        <div class="global-selects">
            <label for="industry">{ "Industry" }</label>
            <MultiSelect
                id="industry"
                name="industry"
                placeholder="Select industry"
                options={selection::with_all(fixed::INDUSTRIES)}
                selected={component.industry.clone()}
                on_change={link.callback(Msg::SetIndustry)}
            />

            <label for="country">{ "Geolocation" }</label>
            <MultiSelect
                id="country"
                name="country"
                placeholder="Select geolocation"
                options={selection::with_all(fixed::COUNTRIES)}
                selected={component.geo.clone()}
                on_change={link.callback(Msg::SetGeo)}
            />
        </div>
    }
}

fn build_requirement_block(block: &BlockState, index: usize, link: &Scope<ProcessForm>) -> Html {
    let ids = &block.ids;
    let keywords_oninput =
        link.callback(move |e: InputEvent| Msg::SetBlockKeywords(index, textarea_value(&e)));

    html! {
        <fieldset class="requirements_box" id={ids.root.clone()} key={ids.suffix}>
            <legend>{ format!("Requirement {}", ids.suffix) }</legend>

            <label for={ids.job_function.clone()}>{ "Job function" }</label>
            <MultiSelect
                id={ids.job_function.clone()}
                name="function[]"
                placeholder="Select job function"
                options={selection::with_all(fixed::JOB_FUNCTIONS)}
                selected={block.fields.job_function.clone()}
                on_change={link.callback(move |selected| {
                    Msg::SetBlockSelection(index, BlockField::JobFunction, selected)
                })}
            />

            <label for={ids.level1.clone()}>{ "Levels" }</label>
            <MultiSelect
                id={ids.level1.clone()}
                name="level[]"
                placeholder="Select levels"
                options={selection::with_all(fixed::JOB_LEVELS)}
                selected={block.fields.level1.clone()}
                on_change={link.callback(move |selected| {
                    Msg::SetBlockSelection(index, BlockField::Level1, selected)
                })}
            />

            <label for={ids.level2.clone()}>{ "Level from" }</label>
            <MultiSelect
                id={ids.level2.clone()}
                name="level2[]"
                placeholder="Level from"
                options={selection::with_all(fixed::JOB_LEVELS)}
                selected={block.fields.level2.clone()}
                on_change={link.callback(move |selected| {
                    Msg::SetBlockSelection(index, BlockField::Level2, selected)
                })}
            />

            <label for={ids.level3.clone()}>{ "Level to" }</label>
            <MultiSelect
                id={ids.level3.clone()}
                name="level3[]"
                placeholder="Level to"
                options={selection::with_all(fixed::JOB_LEVELS)}
                selected={block.fields.level3.clone()}
                on_change={link.callback(move |selected| {
                    Msg::SetBlockSelection(index, BlockField::Level3, selected)
                })}
            />

            <label for={ids.keywords.clone()}>{ "Keywords" }</label>
            <textarea
                id={ids.keywords.clone()}
                name="keywords"
                class="keywords_text_area"
                value={block.fields.keywords.clone()}
                oninput={keywords_oninput}
            />
        </fieldset>
    }
}

fn text_input(
    link: &Scope<ProcessForm>,
    id: &'static str,
    label: &'static str,
    field: TextField,
    value: &str,
) -> Html {
    let oninput = link.callback(move |e: InputEvent| Msg::SetText(field, input_value(&e)));
    html! {
        <div class="field-row">
            <label for={id}>{ label }</label>
            <input type="text" {id} value={value.to_string()} {oninput} />
        </div>
    }
}
