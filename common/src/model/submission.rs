//! The submission record as the service understands it.
//!
//! The wire payload is a flat bag of optional fields. `Submission` narrows it
//! to the one field group that belongs to the chosen status, so code that
//! writes the CSV can match on `Outcome` instead of checking which of the
//! twenty-odd optional fields happen to be set.

use crate::model::alternative::{AlternativeOption, ALTERNATIVE_SLOTS};
use crate::model::status::OrderStatus;
use crate::requests::SubmissionPayload;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("OrderID ist erforderlich")]
pub struct MissingOrderId;

#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub order_id: String,
    pub ean: Option<String>,
    pub comment: Option<String>,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Proceeding {
        delivery_week: Option<u32>,
    },
    /// Slots keep their position: a filled third slot stays the third even
    /// when the second is empty.
    AlternativeProposed {
        alternatives: [Option<AlternativeOption>; ALTERNATIVE_SLOTS],
    },
    Rejected,
}

impl Submission {
    pub fn status(&self) -> OrderStatus {
        match self.outcome {
            Outcome::Proceeding { .. } => OrderStatus::Proceeding,
            Outcome::AlternativeProposed { .. } => OrderStatus::AlternativeProposed,
            Outcome::Rejected => OrderStatus::Rejected,
        }
    }
}

impl TryFrom<SubmissionPayload> for Submission {
    type Error = MissingOrderId;

    fn try_from(payload: SubmissionPayload) -> Result<Self, Self::Error> {
        let order_id = non_blank(payload.order_id.as_deref()).ok_or(MissingOrderId)?;

        let outcome = match payload.status {
            OrderStatus::Proceeding => Outcome::Proceeding {
                delivery_week: payload.delivery_week,
            },
            OrderStatus::AlternativeProposed => Outcome::AlternativeProposed {
                alternatives: std::array::from_fn(|i| {
                    payload
                        .alternative(i)
                        .map(clean_alternative)
                        .filter(AlternativeOption::has_lens_parameters)
                }),
            },
            OrderStatus::Rejected => Outcome::Rejected,
        };

        Ok(Submission {
            order_id,
            ean: non_blank(payload.ean.as_deref()),
            comment: non_blank(payload.comment.as_deref()),
            outcome,
        })
    }
}

fn clean_alternative(option: AlternativeOption) -> AlternativeOption {
    AlternativeOption {
        implant: non_blank(option.implant.as_deref()),
        ean: non_blank(option.ean.as_deref()),
        ..option
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
