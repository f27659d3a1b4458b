//! Request payloads accepted by the backend.

use crate::model::alternative::AlternativeOption;
use crate::model::status::OrderStatus;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/save-csv`.
///
/// The shape is flat: the three alternative slots are spread over numbered
/// fields (`sph1`, `sph2`, ...) because that is what the form has always
/// sent. Use [`SubmissionPayload::alternative`] and
/// [`SubmissionPayload::set_alternative`] instead of touching the numbered
/// fields directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    #[serde(rename = "orderId")]
    pub order_id: Option<String>,
    pub status: OrderStatus,
    pub ean: Option<String>,
    #[serde(rename = "lieferwoche")]
    pub delivery_week: Option<u32>,

    #[serde(rename = "implantat1")]
    pub implant1: Option<String>,
    pub ean1: Option<String>,
    pub sph1: Option<f64>,
    pub cyl1: Option<f64>,
    pub ax1: Option<f64>,
    pub len1: Option<f64>,
    #[serde(rename = "lieferwoche1")]
    pub delivery_week1: Option<u32>,

    #[serde(rename = "implantat2")]
    pub implant2: Option<String>,
    pub ean2: Option<String>,
    pub sph2: Option<f64>,
    pub cyl2: Option<f64>,
    pub ax2: Option<f64>,
    pub len2: Option<f64>,
    #[serde(rename = "lieferwoche2")]
    pub delivery_week2: Option<u32>,

    #[serde(rename = "implantat3")]
    pub implant3: Option<String>,
    pub ean3: Option<String>,
    pub sph3: Option<f64>,
    pub cyl3: Option<f64>,
    pub ax3: Option<f64>,
    pub len3: Option<f64>,
    #[serde(rename = "lieferwoche3")]
    pub delivery_week3: Option<u32>,

    #[serde(rename = "kommentar")]
    pub comment: Option<String>,
}

impl SubmissionPayload {
    /// Collects the numbered fields of slot `index` (0-based).
    ///
    /// Returns `None` for an index outside the three slots.
    pub fn alternative(&self, index: usize) -> Option<AlternativeOption> {
        let option = match index {
            0 => AlternativeOption {
                implant: self.implant1.clone(),
                ean: self.ean1.clone(),
                sph: self.sph1,
                cyl: self.cyl1,
                ax: self.ax1,
                len: self.len1,
                delivery_week: self.delivery_week1,
            },
            1 => AlternativeOption {
                implant: self.implant2.clone(),
                ean: self.ean2.clone(),
                sph: self.sph2,
                cyl: self.cyl2,
                ax: self.ax2,
                len: self.len2,
                delivery_week: self.delivery_week2,
            },
            2 => AlternativeOption {
                implant: self.implant3.clone(),
                ean: self.ean3.clone(),
                sph: self.sph3,
                cyl: self.cyl3,
                ax: self.ax3,
                len: self.len3,
                delivery_week: self.delivery_week3,
            },
            _ => return None,
        };
        Some(option)
    }

    /// Spreads `option` over the numbered fields of slot `index` (0-based).
    /// Indices outside the three slots are ignored.
    pub fn set_alternative(&mut self, index: usize, option: AlternativeOption) {
        let AlternativeOption {
            implant,
            ean,
            sph,
            cyl,
            ax,
            len,
            delivery_week,
        } = option;
        match index {
            0 => {
                self.implant1 = implant;
                self.ean1 = ean;
                self.sph1 = sph;
                self.cyl1 = cyl;
                self.ax1 = ax;
                self.len1 = len;
                self.delivery_week1 = delivery_week;
            }
            1 => {
                self.implant2 = implant;
                self.ean2 = ean;
                self.sph2 = sph;
                self.cyl2 = cyl;
                self.ax2 = ax;
                self.len2 = len;
                self.delivery_week2 = delivery_week;
            }
            2 => {
                self.implant3 = implant;
                self.ean3 = ean;
                self.sph3 = sph;
                self.cyl3 = cyl;
                self.ax3 = ax;
                self.len3 = len;
                self.delivery_week3 = delivery_week;
            }
            _ => {}
        }
    }
}
