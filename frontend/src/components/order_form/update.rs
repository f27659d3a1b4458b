//! Update function for the order form, Elm style: mutate the state for `msg`
//! and return whether the view must re-render.
//!
//! Submitting validates locally first. Only a valid form produces a request,
//! and only one request can be in flight. There is no retry; on failure the
//! server's message is shown and the input is kept so the recipient can
//! submit again.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::FormField;
use common::locale::normalize_decimal_input;
use common::responses::SubmitResponse;

use super::helpers::show_toast;
use super::messages::Msg;
use super::state::{Notice, OrderFormComponent};

const SUBMIT_URL: &str = "/api/save-csv";

pub fn update(component: &mut OrderFormComponent, ctx: &Context<OrderFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::SetStatus(status) => {
            component.form.status = status;
            component.errors = Default::default();
            component.notice = None;
            true
        }
        Msg::SetDeliveryDate(date) => {
            component.form.delivery_date = date;
            component.errors.clear(FormField::DeliveryDate);
            true
        }
        Msg::SetImplant(slot, value) => {
            component.form.alternatives[slot].implant = value;
            component.errors.clear(FormField::Implant(slot));
            true
        }
        Msg::SetAlternativeEan(slot, value) => {
            component.form.alternatives[slot].ean = value;
            false
        }
        Msg::SetLens(slot, parameter, value) => {
            *component.form.alternatives[slot].lens_mut(parameter) = value;
            component.errors.clear(FormField::LensParameters(slot));
            component.errors.clear(FormField::Lens(slot, parameter));
            true
        }
        Msg::NormalizeLens(slot, parameter) => {
            let lens = component.form.alternatives[slot].lens_mut(parameter);
            match normalize_decimal_input(lens) {
                Some(normalized) if normalized != *lens => {
                    *lens = normalized;
                    true
                }
                _ => false,
            }
        }
        Msg::SetAlternativeDate(slot, date) => {
            component.form.alternatives[slot].delivery_date = date;
            component.errors.clear(FormField::AlternativeDeliveryDate(slot));
            true
        }
        Msg::SetComment(value) => {
            component.form.comment = value;
            component.errors.clear(FormField::Comment);
            true
        }
        Msg::Submit => {
            if component.submitting {
                return false;
            }
            if let Err(errors) = component.form.validate() {
                gloo_console::warn!(format!("Formular unvollständig: {errors}"));
                component.errors = errors;
                component.notice = None;
                return true;
            }

            let props = ctx.props();
            let order_id = props.order_id.as_deref();
            let payload = component.form.to_payload(order_id, props.ean.as_deref());
            let summary = component.form.summary(order_id);
            component.submitting = true;
            component.notice = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let request = match Request::post(SUBMIT_URL).json(&payload) {
                    Ok(request) => request,
                    Err(err) => {
                        link.send_message(Msg::SubmitFailed(err.to_string()));
                        return;
                    }
                };
                match request.send().await {
                    Ok(response) => {
                        let ok = response.ok();
                        match response.json::<SubmitResponse>().await {
                            Ok(body) if ok && body.success => link.send_message(Msg::Submitted(summary)),
                            Ok(body) => link.send_message(Msg::SubmitFailed(body.message)),
                            Err(_) => link.send_message(Msg::SubmitFailed(format!(
                                "Fehler beim Speichern der Daten (HTTP {})",
                                response.status()
                            ))),
                        }
                    }
                    Err(err) => link.send_message(Msg::SubmitFailed(format!(
                        "Fehler beim Speichern der Daten. Bitte versuchen Sie es erneut. ({err})"
                    ))),
                }
            });
            true
        }
        Msg::Submitted(summary) => {
            component.submitting = false;
            component.reset();
            component.notice = Some(Notice::Success(summary));
            show_toast("Rückmeldung gespeichert");
            true
        }
        Msg::SubmitFailed(message) => {
            gloo_console::error!(format!("Error in submit: {message}"));
            component.submitting = false;
            show_toast(&message);
            component.notice = Some(Notice::Failure(message));
            true
        }
    }
}
