use chrono::NaiveDate;
use common::form::LensParameter;
use common::model::status::OrderStatus;

/// Slot indices are 0-based.
#[derive(Clone)]
pub enum Msg {
    SetStatus(OrderStatus),
    SetDeliveryDate(Option<NaiveDate>),
    SetImplant(usize, String),
    SetAlternativeEan(usize, String),
    SetLens(usize, LensParameter, String),
    /// Rewrites the lens value with a decimal comma once the input loses focus.
    NormalizeLens(usize, LensParameter),
    SetAlternativeDate(usize, Option<NaiveDate>),
    SetComment(String),
    Submit,
    /// Carries the summary of the stored submission.
    Submitted(String),
    SubmitFailed(String),
}
