//! One alternative lens block: implant, EAN, the four lens parameters and
//! a delivery date. The first block is required, the others optional.

use common::form::{FormField, LensParameter};
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{date_input_value, input_value, parse_date_input};
use super::messages::Msg;
use super::state::OrderFormComponent;
use super::view::validation_message;

pub fn alternative_block(component: &OrderFormComponent, link: &Scope<OrderFormComponent>, slot: usize) -> Html {
    let input = &component.form.alternatives[slot];
    let errors = &component.errors;
    let required = slot == 0;
    let marker = if required {
        html! { <span class="required">{ "*" }</span> }
    } else {
        html! {}
    };
    let implant_invalid = errors.contains(FormField::Implant(slot));
    let date_invalid = errors.contains(FormField::AlternativeDeliveryDate(slot));
    let lens_invalid = errors.contains(FormField::LensParameters(slot));

    html! {
        <section class="alternative">
            <h2>{ format!("Alternative Linse {}", slot + 1) }</h2>

            <div class={classes!("field", implant_invalid.then_some("invalid"))}>
                <label>{ "Implantat" }{ marker.clone() }</label>
                <input
                    type="text"
                    value={input.implant.clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::SetImplant(slot, input_value(&e)))}
                />
                { validation_message(errors, FormField::Implant(slot)) }
            </div>

            <div class="field">
                <label>{ "EAN" }</label>
                <input
                    type="text"
                    inputmode="numeric"
                    value={input.ean.clone()}
                    oninput={link.callback(move |e: InputEvent| Msg::SetAlternativeEan(slot, input_value(&e)))}
                />
            </div>

            <div class={classes!("field", lens_invalid.then_some("invalid"))}>
                <label>{ "Linsenparameter" }{ marker.clone() }</label>
                <div class="lens-grid">
                    { for LensParameter::ALL.into_iter().map(|parameter| lens_input(component, link, slot, parameter)) }
                </div>
                { validation_message(errors, FormField::LensParameters(slot)) }
            </div>

            <div class={classes!("field", date_invalid.then_some("invalid"))}>
                <label>{ "Lieferdatum" }{ marker }</label>
                <input
                    type="date"
                    value={date_input_value(input.delivery_date)}
                    onchange={link.callback(move |e: Event| {
                        Msg::SetAlternativeDate(slot, parse_date_input(&input_value(&e)))
                    })}
                />
                { validation_message(errors, FormField::AlternativeDeliveryDate(slot)) }
            </div>
        </section>
    }
}

fn lens_input(
    component: &OrderFormComponent,
    link: &Scope<OrderFormComponent>,
    slot: usize,
    parameter: LensParameter,
) -> Html {
    let field = FormField::Lens(slot, parameter);
    let invalid = component.errors.contains(field);
    html! {
        <div class={classes!(invalid.then_some("invalid"))}>
            <input
                type="text"
                inputmode="decimal"
                placeholder={parameter.label()}
                title={parameter.label()}
                value={component.form.alternatives[slot].lens(parameter).to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::SetLens(slot, parameter, input_value(&e)))}
                onblur={link.callback(move |_: FocusEvent| Msg::NormalizeLens(slot, parameter))}
            />
            { validation_message(&component.errors, field) }
        </div>
    }
}
