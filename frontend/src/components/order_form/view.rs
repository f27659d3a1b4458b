//! View rendering for the order form.
//!
//! Only the field group of the selected status is rendered: a delivery date
//! for "proceeding", three alternative blocks for "alternative proposed", a
//! comment for "rejected". Invalid fields get a red border and the German
//! "Pflichtfeld" message from `FormField::message`.

use common::form::{FormField, ValidationErrors};
use common::model::alternative::ALTERNATIVE_SLOTS;
use common::model::status::OrderStatus;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::alternative::alternative_block;
use super::helpers::{date_input_value, input_value, parse_date_input};
use super::messages::Msg;
use super::state::{Notice, OrderFormComponent};

pub fn view(component: &OrderFormComponent, ctx: &Context<OrderFormComponent>) -> Html {
    let link = ctx.link();
    let props = ctx.props();

    html! {
        <main class="order-form">
            <h1>{ "Linsenbestellung" }</h1>
            {
                match &props.order_id {
                    Some(order_id) => html! { <div class="order-id">{ format!("OrderID {order_id}") }</div> },
                    None => html! {
                        <div class="notice failure">{ "Keine OrderID in der URL gefunden. Bitte verwenden Sie den Link aus Ihrer E-Mail." }</div>
                    },
                }
            }
            <p class="hint">{ "Bitte geben Sie Ihre Rückmeldung ein" }</p>

            <form
                key={component.generation.to_string()}
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
                novalidate={true}
            >
                { status_select(component, link) }
                {
                    match component.form.status {
                        OrderStatus::Proceeding => delivery_date_field(component, link),
                        OrderStatus::AlternativeProposed => html! {
                            <>
                                { for (0..ALTERNATIVE_SLOTS).map(|slot| alternative_block(component, link, slot)) }
                            </>
                        },
                        OrderStatus::Rejected => comment_field(component, link),
                    }
                }
                <button class="submit" type="submit" disabled={component.submitting}>
                    { if component.submitting { "Wird gesendet..." } else { "Rückmeldung absenden" } }
                </button>
            </form>

            { notice(component.notice.as_ref()) }
        </main>
    }
}

fn status_select(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let selected = component.form.status;
    html! {
        <div class="field">
            <label for="status">{ "Status der Bestellung" }</label>
            <select
                id="status"
                onchange={link.batch_callback(|e: Event| {
                    let value = e.target_unchecked_into::<HtmlSelectElement>().value();
                    OrderStatus::from_wire(&value).map(Msg::SetStatus)
                })}
            >
                { for OrderStatus::ALL.into_iter().map(|status| html! {
                    <option value={status.as_str()} selected={status == selected}>{ status.label() }</option>
                }) }
            </select>
        </div>
    }
}

fn delivery_date_field(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let invalid = component.errors.contains(FormField::DeliveryDate);
    html! {
        <div class={classes!("field", invalid.then_some("invalid"))}>
            <label for="lieferdatum">
                { "Voraussichtliches Lieferdatum" }
                <span class="required">{ "*" }</span>
            </label>
            <input
                id="lieferdatum"
                type="date"
                value={date_input_value(component.form.delivery_date)}
                onchange={link.callback(|e: Event| Msg::SetDeliveryDate(parse_date_input(&input_value(&e))))}
            />
            { validation_message(&component.errors, FormField::DeliveryDate) }
        </div>
    }
}

fn comment_field(component: &OrderFormComponent, link: &Scope<OrderFormComponent>) -> Html {
    let invalid = component.errors.contains(FormField::Comment);
    html! {
        <div class={classes!("field", invalid.then_some("invalid"))}>
            <label for="kommentar">
                { "Begründung für die Ablehnung" }
                <span class="required">{ "*" }</span>
            </label>
            <textarea
                id="kommentar"
                value={component.form.comment.clone()}
                placeholder="Bitte geben Sie einen Grund für die Ablehnung an"
                oninput={link.callback(|e: InputEvent| {
                    Msg::SetComment(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                })}
            />
            { validation_message(&component.errors, FormField::Comment) }
        </div>
    }
}

/// Renders the message for `field` if it is marked, nothing otherwise.
pub fn validation_message(errors: &ValidationErrors, field: FormField) -> Html {
    if errors.contains(field) {
        html! { <div class="validation">{ "⚠ " }{ field.message() }</div> }
    } else {
        html! {}
    }
}

fn notice(notice: Option<&Notice>) -> Html {
    match notice {
        Some(Notice::Success(summary)) => html! { <div class="notice success">{ summary.clone() }</div> },
        Some(Notice::Failure(message)) => html! { <div class="notice failure">{ message.clone() }</div> },
        None => html! {},
    }
}
