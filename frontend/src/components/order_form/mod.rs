//! Order feedback form: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, and helpers.
//!
//! Responsibilities
//! - Re-export the types the app needs (`OrderFormComponent`, `OrderFormProps`).
//! - Delegate to `update::update` and `view::view`.
//!
//! All form rules (required fields, decimal parsing, delivery weeks) live in
//! `common::form`; this module only collects input and talks to the server.

mod alternative;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::OrderFormProps;
pub use state::OrderFormComponent;

use yew::prelude::*;

impl Component for OrderFormComponent {
    type Message = Msg;
    type Properties = OrderFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        OrderFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
