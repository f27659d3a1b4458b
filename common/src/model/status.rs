use serde::{Deserialize, Serialize};
use std::fmt;

/// The outcome a recipient reports for an order.
///
/// The serialized names are the values the form has always posted, so CSV
/// consumers and older clients keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrderStatus {
    /// The order is being carried out as placed.
    #[default]
    #[serde(rename = "ausgeführt")]
    Proceeding,
    /// The supplier proposes up to three alternative lenses.
    #[serde(rename = "alternative")]
    AlternativeProposed,
    /// The order is declined; a comment explains why.
    #[serde(rename = "abgelehnt")]
    Rejected,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 3] = [
        OrderStatus::Proceeding,
        OrderStatus::AlternativeProposed,
        OrderStatus::Rejected,
    ];

    /// Wire value, identical to the serde name.
    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Proceeding => "ausgeführt",
            OrderStatus::AlternativeProposed => "alternative",
            OrderStatus::Rejected => "abgelehnt",
        }
    }

    /// Label shown in the status selector.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Proceeding => "Bestellung wird ausgeführt",
            OrderStatus::AlternativeProposed => "Alternative wird vorgeschlagen",
            OrderStatus::Rejected => "Bestellung abgelehnt",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_wire_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Proceeding).unwrap(),
            "\"ausgeführt\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"abgelehnt\"").unwrap();
        assert_eq!(parsed, OrderStatus::Rejected);
    }

    #[test]
    fn unknown_wire_value_is_rejected() {
        assert!(serde_json::from_str::<OrderStatus>("\"storniert\"").is_err());
        assert_eq!(OrderStatus::from_wire("storniert"), None);
        assert_eq!(
            OrderStatus::from_wire("alternative"),
            Some(OrderStatus::AlternativeProposed)
        );
    }
}
