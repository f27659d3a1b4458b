use serde::{Deserialize, Serialize};

/// Number of alternative lens slots offered by the form and written to the CSV.
pub const ALTERNATIVE_SLOTS: usize = 3;

/// One alternative lens proposed instead of the ordered one.
///
/// The four lens parameters decide whether the slot counts as filled in:
/// a slot without any of them is dropped, even if an implant code or EAN
/// was typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlternativeOption {
    pub implant: Option<String>,
    pub ean: Option<String>,
    pub sph: Option<f64>,
    pub cyl: Option<f64>,
    pub ax: Option<f64>,
    pub len: Option<f64>,
    pub delivery_week: Option<u32>,
}

impl AlternativeOption {
    pub fn has_lens_parameters(&self) -> bool {
        self.sph.is_some() || self.cyl.is_some() || self.ax.is_some() || self.len.is_some()
    }
}
