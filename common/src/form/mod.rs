//! Raw order-form input and the rules applied before anything is sent.
//!
//! `OrderForm` mirrors what the recipient has typed: text stays text until
//! submit, dates are already parsed by the date input. `validate` decides
//! which fields block the submission, `to_payload` converts the input into
//! the JSON body for `/api/save-csv` (dates become delivery weeks, decimal
//! commas become numbers) and only fills the group that belongs to the
//! selected status.

use crate::locale::{delivery_week, parse_decimal};
use crate::model::alternative::{AlternativeOption, ALTERNATIVE_SLOTS};
use crate::model::status::OrderStatus;
use crate::requests::SubmissionPayload;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LensParameter {
    Sph,
    Cyl,
    Ax,
    Len,
}

impl LensParameter {
    pub const ALL: [LensParameter; 4] = [
        LensParameter::Sph,
        LensParameter::Cyl,
        LensParameter::Ax,
        LensParameter::Len,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LensParameter::Sph => "Sph",
            LensParameter::Cyl => "Cyl",
            LensParameter::Ax => "Ax",
            LensParameter::Len => "Len",
        }
    }
}

/// A field the form can mark as invalid. Slot indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    DeliveryDate,
    Implant(usize),
    AlternativeDeliveryDate(usize),
    /// None of the four lens parameters of the slot was filled in.
    LensParameters(usize),
    /// A lens parameter was filled in but is not a number.
    Lens(usize, LensParameter),
    Comment,
}

impl FormField {
    pub fn message(self) -> &'static str {
        match self {
            FormField::DeliveryDate | FormField::AlternativeDeliveryDate(_) => {
                "Pflichtfeld: Bitte geben Sie ein Datum ein"
            }
            FormField::Implant(_) => "Pflichtfeld: Bitte geben Sie das Implantat ein",
            FormField::LensParameters(_) => {
                "Pflichtfeld: Bitte geben Sie mindestens einen Linsenparameter ein"
            }
            FormField::Lens(_, _) => "Bitte geben Sie eine Zahl ein, z. B. -1,25",
            FormField::Comment => "Pflichtfeld: Bitte geben Sie eine Begründung ein",
        }
    }
}

/// Fields that block the submission, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} Feld(er) unvollständig", .fields.len())]
pub struct ValidationErrors {
    fields: Vec<FormField>,
}

impl ValidationErrors {
    fn push(&mut self, field: FormField) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.fields.contains(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn clear(&mut self, field: FormField) {
        self.fields.retain(|f| *f != field);
    }
}

/// Raw input of one alternative lens block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlternativeInput {
    pub implant: String,
    pub ean: String,
    pub sph: String,
    pub cyl: String,
    pub ax: String,
    pub len: String,
    pub delivery_date: Option<NaiveDate>,
}

impl AlternativeInput {
    pub fn lens(&self, parameter: LensParameter) -> &str {
        match parameter {
            LensParameter::Sph => &self.sph,
            LensParameter::Cyl => &self.cyl,
            LensParameter::Ax => &self.ax,
            LensParameter::Len => &self.len,
        }
    }

    pub fn lens_mut(&mut self, parameter: LensParameter) -> &mut String {
        match parameter {
            LensParameter::Sph => &mut self.sph,
            LensParameter::Cyl => &mut self.cyl,
            LensParameter::Ax => &mut self.ax,
            LensParameter::Len => &mut self.len,
        }
    }

    fn has_lens_input(&self) -> bool {
        LensParameter::ALL
            .iter()
            .any(|p| !self.lens(*p).trim().is_empty())
    }

    pub fn to_option(&self) -> AlternativeOption {
        AlternativeOption {
            implant: non_blank(&self.implant),
            ean: non_blank(&self.ean),
            sph: parse_decimal(&self.sph),
            cyl: parse_decimal(&self.cyl),
            ax: parse_decimal(&self.ax),
            len: parse_decimal(&self.len),
            delivery_week: self.delivery_date.map(delivery_week),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderForm {
    pub status: OrderStatus,
    pub delivery_date: Option<NaiveDate>,
    pub alternatives: [AlternativeInput; ALTERNATIVE_SLOTS],
    pub comment: String,
}

impl OrderForm {
    /// Checks the fields required by the selected status.
    ///
    /// Only the visible group is inspected: a half-filled alternative block
    /// does not block a "proceeding" submission.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        match self.status {
            OrderStatus::Proceeding => {
                if self.delivery_date.is_none() {
                    errors.push(FormField::DeliveryDate);
                }
            }
            OrderStatus::AlternativeProposed => {
                let first = &self.alternatives[0];
                if first.implant.trim().is_empty() {
                    errors.push(FormField::Implant(0));
                }
                if !first.has_lens_input() {
                    errors.push(FormField::LensParameters(0));
                }
                if first.delivery_date.is_none() {
                    errors.push(FormField::AlternativeDeliveryDate(0));
                }
                for (slot, input) in self.alternatives.iter().enumerate() {
                    for parameter in LensParameter::ALL {
                        let raw = input.lens(parameter);
                        if !raw.trim().is_empty() && parse_decimal(raw).is_none() {
                            errors.push(FormField::Lens(slot, parameter));
                        }
                    }
                }
            }
            OrderStatus::Rejected => {
                if self.comment.trim().is_empty() {
                    errors.push(FormField::Comment);
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Builds the request body. Call after `validate` succeeded.
    pub fn to_payload(&self, order_id: Option<&str>, ean: Option<&str>) -> SubmissionPayload {
        let mut payload = SubmissionPayload {
            order_id: order_id.map(str::to_string),
            status: self.status,
            ean: ean.and_then(non_blank),
            ..Default::default()
        };

        match self.status {
            OrderStatus::Proceeding => {
                payload.delivery_week = self.delivery_date.map(delivery_week);
            }
            OrderStatus::AlternativeProposed => {
                for (slot, input) in self.alternatives.iter().enumerate() {
                    payload.set_alternative(slot, input.to_option());
                }
            }
            OrderStatus::Rejected => {
                payload.comment = non_blank(&self.comment);
            }
        }

        payload
    }

    /// Confirmation text shown after the server stored the submission.
    pub fn summary(&self, order_id: Option<&str>) -> String {
        let mut lines = vec![
            "Bestellung erfolgreich gespeichert!".to_string(),
            String::new(),
            format!("OrderID: {}", order_id.unwrap_or("-")),
            format!("Status: {}", self.status.label()),
        ];

        match self.status {
            OrderStatus::Proceeding => {
                lines.push(format!("Lieferdatum: {}", display_date(self.delivery_date)));
            }
            OrderStatus::AlternativeProposed => {
                lines.push(String::new());
                lines.push("Alternative Linsen:".to_string());
                for input in &self.alternatives {
                    if let Some(implant) = non_blank(&input.implant) {
                        lines.push(format!(
                            "- {implant} (Lieferdatum: {})",
                            display_date(input.delivery_date)
                        ));
                    }
                }
            }
            OrderStatus::Rejected => {
                let comment = non_blank(&self.comment);
                lines.push(format!(
                    "Kommentar: {}",
                    comment.as_deref().unwrap_or("Kein Kommentar")
                ));
            }
        }

        lines.join("\n")
    }
}

fn display_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "Nicht angegeben".to_string())
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
