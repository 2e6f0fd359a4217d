//! Route-history import from the CSV export the product's API serves.
//! Optional cells (score, date) may be blank; numeric fields are clamped at
//! the record boundary so downstream math never sees negatives.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One completed commute as recorded by the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteHistoryRecord {
    pub start: String,
    pub end: String,
    pub mode_id: String,
    pub distance_km: f64,
    pub duration_minutes: f64,
    pub co2_saved_kg: f64,
    pub eco_score: Option<u8>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryImportError {
    #[error("failed to open history file: {0}")]
    Open(#[from] std::io::Error),
    #[error("failed to parse history CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub fn parse_records<R: Read>(reader: R) -> Result<Vec<RouteHistoryRecord>, HistoryImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<HistoryRow>() {
        records.push(row?.into_record());
    }

    Ok(records)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<RouteHistoryRecord>, HistoryImportError> {
    let file = File::open(path)?;
    parse_records(file)
}

#[derive(Debug, Deserialize)]
struct HistoryRow {
    #[serde(rename = "Start")]
    start: String,
    #[serde(rename = "End")]
    end: String,
    #[serde(rename = "Mode")]
    mode: String,
    #[serde(rename = "Distance Km")]
    distance_km: f64,
    #[serde(rename = "Duration Min")]
    duration_minutes: f64,
    #[serde(rename = "CO2 Saved Kg")]
    co2_saved_kg: f64,
    #[serde(rename = "Eco Score", default, deserialize_with = "empty_string_as_none")]
    eco_score: Option<String>,
    #[serde(rename = "Date", default, deserialize_with = "empty_string_as_none")]
    date: Option<String>,
}

impl HistoryRow {
    fn into_record(self) -> RouteHistoryRecord {
        let eco_score = self
            .eco_score
            .as_deref()
            .and_then(|raw| raw.parse::<u8>().ok())
            .map(|score| score.min(100));
        let date = self
            .date
            .as_deref()
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok());

        RouteHistoryRecord {
            start: self.start,
            end: self.end,
            mode_id: self.mode,
            distance_km: clamp_measure(self.distance_km),
            duration_minutes: clamp_measure(self.duration_minutes),
            co2_saved_kg: clamp_measure(self.co2_saved_kg),
            eco_score,
            date,
        }
    }
}

fn clamp_measure(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
