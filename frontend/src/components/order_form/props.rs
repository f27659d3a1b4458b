use yew::prelude::*;

/// Order reference taken from the URL.
#[derive(Properties, PartialEq, Clone)]
pub struct OrderFormProps {
    /// Sent as `orderId`. When absent the form still submits and the server
    /// answers with "OrderID ist erforderlich".
    #[prop_or_default]
    pub order_id: Option<AttrValue>,
    /// EAN of the originally ordered lens, passed through unchanged.
    #[prop_or_default]
    pub ean: Option<AttrValue>,
}
