use common::form::{OrderForm, ValidationErrors};

/// Result of the last submit, shown under the button.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

pub struct OrderFormComponent {
    pub form: OrderForm,
    /// Fields marked after a failed submit; editing a field clears its mark.
    pub errors: ValidationErrors,
    /// Set while the request is in flight; further submits are ignored.
    pub submitting: bool,
    pub notice: Option<Notice>,
    /// Keys the `<form>`; bumped on reset so the browser drops the user's
    /// selection state and the inputs are rebuilt from `form`.
    pub generation: u32,
}

impl OrderFormComponent {
    pub fn new() -> Self {
        Self {
            form: OrderForm::default(),
            errors: ValidationErrors::default(),
            submitting: false,
            notice: None,
            generation: 0,
        }
    }

    /// Back to the initial "proceeding" form; the notice stays visible.
    pub fn reset(&mut self) {
        self.form = OrderForm::default();
        self.errors = ValidationErrors::default();
        self.generation = self.generation.wrapping_add(1);
    }
}
