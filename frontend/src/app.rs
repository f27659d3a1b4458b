use crate::components::order_form::OrderFormComponent;
use web_sys::UrlSearchParams;
use yew::{html, AttrValue, Component, Context, Html};

/// Root component. Reads the order reference from the link the recipient
/// was sent (`/?orderId=...&ean=...`) once and hands it to the form.
pub struct App {
    order_id: Option<AttrValue>,
    ean: Option<AttrValue>,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let order_id = query_param(&search, "orderId").map(AttrValue::from);
        if order_id.is_none() {
            gloo_console::warn!("Keine OrderID in der URL gefunden");
        }
        Self {
            order_id,
            ean: query_param(&search, "ean").map(AttrValue::from),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <OrderFormComponent order_id={self.order_id.clone()} ean={self.ean.clone()} />
        }
    }
}

/// First value of `name` in a `?a=1&b=2` query string. Parameter names
/// match case-insensitively (`orderid`, `OrderID`, `orderId`).
fn query_param(search: &str, name: &str) -> Option<String> {
    let params = UrlSearchParams::new_with_str(search).ok()?;
    let keys = params.keys().into_iter().filter_map(|key| key.ok()?.as_string());
    matching_value(keys, name, |key| params.get(key))
}

/// Picks the first key equal to `name` ignoring ASCII case. A blank value
/// counts as absent.
fn matching_value<I, F>(keys: I, name: &str, get: F) -> Option<String>
where
    I: IntoIterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    keys.into_iter()
        .find(|key| key.eq_ignore_ascii_case(name))
        .and_then(|key| get(&key))
        .filter(|value| !value.trim().is_empty())
}
