pub mod order_form;
