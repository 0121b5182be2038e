//! Multi-select widget with the "select all" sentinel convention.
//!
//! A fully controlled wrapper around a native `<select multiple>`: the
//! parent owns the selection and receives the resolved values through
//! `on_change`. The sentinel arithmetic itself lives in
//! `common::form::selection`. Re-rendering is state-driven, so the
//! destroy-and-rebuild dance of the original widget initializer has no
//! counterpart here.
//!
//! Selectedness is pushed as a DOM property after every render: once the
//! user has toggled an option, its dirty flag makes the browser ignore the
//! `selected` content attribute, so attributes alone cannot drive the
//! expansion of the `all` sentinel.

use common::form::selection::{self, SelectOption, ALL};
use wasm_bindgen::JsCast;
use web_sys::{HtmlOptionElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MultiSelectProps {
    pub id: AttrValue,
    pub name: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    pub options: Vec<SelectOption>,
    pub selected: Vec<String>,
    pub on_change: Callback<Vec<String>>,
}

pub struct MultiSelect {
    select_ref: NodeRef,
}

impl Component for MultiSelect {
    type Message = ();
    type Properties = MultiSelectProps;

    fn create(_ctx: &Context<Self>) -> Self {
        MultiSelect {
            select_ref: NodeRef::default(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let option_values: Vec<String> =
            props.options.iter().map(|o| o.value.clone()).collect();
        let all_engaged = selection::covers_all(&option_values, &props.selected);

        let onchange = {
            let on_change = props.on_change.clone();
            let option_values = option_values.clone();
            // The resolver needs to know whether "all" was engaged before
            // this change to tell expansion apart from clearing.
            let mut previous = props.selected.clone();
            if all_engaged {
                previous.push(ALL.to_string());
            }
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                let current = read_selected_values(&select);
                on_change.emit(selection::resolve_change(&option_values, &previous, &current));
            })
        };

        html! {
            <select
                multiple=true
                class="req-box-select"
                id={props.id.clone()}
                name={props.name.clone()}
                data-placeholder={props.placeholder.clone()}
                ref={self.select_ref.clone()}
                {onchange}
            >
                {
                    for props.options.iter().map(|option| {
                        html! {
                            <option value={option.value.clone()}>
                                { &option.label }
                            </option>
                        }
                    })
                }
            </select>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let Some(select) = self.select_ref.cast::<HtmlSelectElement>() else {
            return;
        };
        let props = ctx.props();
        let option_values: Vec<String> =
            props.options.iter().map(|o| o.value.clone()).collect();
        let all_engaged = selection::covers_all(&option_values, &props.selected);

        let options = select.options();
        for index in 0..options.length() {
            let Some(option) = options
                .item(index)
                .and_then(|el| el.dyn_into::<HtmlOptionElement>().ok())
            else {
                continue;
            };
            let value = option.value();
            let engaged = if value == ALL {
                all_engaged
            } else {
                props.selected.contains(&value)
            };
            option.set_selected(engaged);
        }
    }
}

fn read_selected_values(select: &HtmlSelectElement) -> Vec<String> {
    let selected = select.selected_options();
    let mut values = Vec::with_capacity(selected.length() as usize);
    for index in 0..selected.length() {
        if let Some(option) = selected.item(index) {
            values.push(option.get_attribute("value").unwrap_or_default());
        }
    }
    values
}
