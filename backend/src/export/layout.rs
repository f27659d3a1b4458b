//! Column layout of the order-feedback CSV.
//!
//! The header depends only on the status, never on which values were sent,
//! so every file of one status can be imported with the same mapping:
//!
//! - `ausgeführt`: `Order-ID,EAN,Lieferwoche,Kommentar`
//! - `alternative` and `abgelehnt`: `Order-ID,EAN`, then seven columns per
//!   alternative slot (`Alternative_i,EAN_i,Sph_i,Cyl_i,Ax_i,Len_i,Lieferwoche_i`),
//!   then `Kommentar`.
//!
//! The header line is plain; every value in the data row is quoted, with
//! embedded quotes doubled. Missing values are written as `""`.

use common::locale::{format_decimal, format_delivery_week};
use common::model::alternative::{AlternativeOption, ALTERNATIVE_SLOTS};
use common::model::status::OrderStatus;
use common::model::submission::{Outcome, Submission};
use csv::{QuoteStyle, Terminator, WriterBuilder};

pub const PROCEEDING_COLUMNS: [&str; 4] = ["Order-ID", "EAN", "Lieferwoche", "Kommentar"];

pub const ALTERNATIVE_COLUMNS: [&str; 24] = [
    "Order-ID",
    "EAN",
    "Alternative_1",
    "EAN_1",
    "Sph_1",
    "Cyl_1",
    "Ax_1",
    "Len_1",
    "Lieferwoche_1",
    "Alternative_2",
    "EAN_2",
    "Sph_2",
    "Cyl_2",
    "Ax_2",
    "Len_2",
    "Lieferwoche_2",
    "Alternative_3",
    "EAN_3",
    "Sph_3",
    "Cyl_3",
    "Ax_3",
    "Len_3",
    "Lieferwoche_3",
    "Kommentar",
];

const SLOT_COLUMNS: usize = 7;

pub fn columns(status: OrderStatus) -> &'static [&'static str] {
    match status {
        OrderStatus::Proceeding => &PROCEEDING_COLUMNS,
        OrderStatus::AlternativeProposed | OrderStatus::Rejected => &ALTERNATIVE_COLUMNS,
    }
}

/// Renders `submission` as header plus one data row.
///
/// `year` is paired with every delivery week; callers pass the current year.
pub fn build_csv(submission: &Submission, year: i32) -> Result<Vec<u8>, csv::Error> {
    let header = columns(submission.status());
    let mut out = header.join(",").into_bytes();
    out.push(b'\n');

    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(out);
    writer.write_record(row(submission, year))?;
    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

fn row(submission: &Submission, year: i32) -> Vec<String> {
    let mut values = vec![
        submission.order_id.clone(),
        submission.ean.clone().unwrap_or_default(),
    ];

    match &submission.outcome {
        Outcome::Proceeding { delivery_week } => {
            values.push(week_cell(*delivery_week, year));
        }
        Outcome::AlternativeProposed { alternatives } => {
            for (slot, alternative) in alternatives.iter().enumerate() {
                match alternative {
                    Some(option) => values.extend(slot_cells(slot, option, year)),
                    None => values.resize(values.len() + SLOT_COLUMNS, String::new()),
                }
            }
        }
        Outcome::Rejected => {
            values.resize(values.len() + SLOT_COLUMNS * ALTERNATIVE_SLOTS, String::new());
        }
    }

    values.push(submission.comment.clone().unwrap_or_default());
    values
}

fn slot_cells(slot: usize, option: &AlternativeOption, year: i32) -> [String; SLOT_COLUMNS] {
    let number = |value: Option<f64>| value.map(format_decimal).unwrap_or_default();
    [
        option
            .implant
            .clone()
            .unwrap_or_else(|| format!("Alternative {}", slot + 1)),
        option.ean.clone().unwrap_or_default(),
        number(option.sph),
        number(option.cyl),
        number(option.ax),
        number(option.len),
        week_cell(option.delivery_week, year),
    ]
}

fn week_cell(week: Option<u32>, year: i32) -> String {
    week.map(|w| format_delivery_week(w, year)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_text(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    fn submission(outcome: Outcome) -> Submission {
        Submission {
            order_id: "4711".to_string(),
            ean: Some("4012345678901".to_string()),
            comment: None,
            outcome,
        }
    }

    #[test]
    fn proceeding_has_four_fixed_columns() {
        let csv = as_text(
            build_csv(
                &submission(Outcome::Proceeding {
                    delivery_week: Some(11),
                }),
                2025,
            )
            .unwrap(),
        );
        assert_eq!(
            csv,
            "Order-ID,EAN,Lieferwoche,Kommentar\n\"4711\",\"4012345678901\",\"11, 2025\",\"\"\n"
        );
    }

    #[test]
    fn proceeding_without_optional_values_keeps_columns() {
        let mut s = submission(Outcome::Proceeding {
            delivery_week: None,
        });
        s.ean = None;
        let csv = as_text(build_csv(&s, 2025).unwrap());
        assert_eq!(csv, "Order-ID,EAN,Lieferwoche,Kommentar\n\"4711\",\"\",\"\",\"\"\n");
    }

    #[test]
    fn alternative_layout_has_24_columns_and_empty_unused_slots() {
        let first = AlternativeOption {
            implant: Some("SN60WF".to_string()),
            ean: Some("5050474123456".to_string()),
            sph: Some(21.5),
            cyl: Some(-0.75),
            ax: Some(90.0),
            len: None,
            delivery_week: Some(12),
        };
        let third = AlternativeOption {
            len: Some(22.5),
            ..Default::default()
        };
        let s = submission(Outcome::AlternativeProposed {
            alternatives: [Some(first), None, Some(third)],
        });

        let csv = as_text(build_csv(&s, 2025).unwrap());
        let mut reader = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.len(), 24);
        assert_eq!(headers.iter().collect::<Vec<_>>(), ALTERNATIVE_COLUMNS);

        let record = reader.records().next().unwrap().unwrap();
        let cells: Vec<&str> = record.iter().collect();
        assert_eq!(
            &cells[2..9],
            &["SN60WF", "5050474123456", "21,5", "-0,75", "90", "", "12, 2025"]
        );
        assert!(cells[9..16].iter().all(|c| c.is_empty()));
        assert_eq!(
            &cells[16..23],
            &["Alternative 3", "", "", "", "", "22,5", ""]
        );
        assert_eq!(cells[23], "");
    }

    #[test]
    fn rejected_uses_alternative_layout_with_comment() {
        let mut s = submission(Outcome::Rejected);
        s.comment = Some("Linse \"SN60WF\" nicht lieferbar, bitte neu bestellen".to_string());

        let csv = as_text(build_csv(&s, 2025).unwrap());
        let (header, data) = csv.split_once('\n').unwrap();
        assert_eq!(header, ALTERNATIVE_COLUMNS.join(","));
        assert!(data.ends_with(
            ",\"Linse \"\"SN60WF\"\" nicht lieferbar, bitte neu bestellen\"\n"
        ));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), 24);
        assert!(record.iter().skip(2).take(21).all(str::is_empty));
        assert_eq!(
            record.get(23),
            Some("Linse \"SN60WF\" nicht lieferbar, bitte neu bestellen")
        );
    }

    #[test]
    fn every_value_is_quoted() {
        let s = submission(Outcome::AlternativeProposed {
            alternatives: [None, None, None],
        });
        let csv = as_text(build_csv(&s, 2025).unwrap());
        let data = csv.lines().nth(1).unwrap();
        assert_eq!(data.matches("\"\"").count(), 22);
        assert!(data.starts_with("\"4711\",\"4012345678901\","));
    }
}
