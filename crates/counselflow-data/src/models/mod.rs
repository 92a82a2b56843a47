//! Typed records mirrored 1:1 from hosted table rows.
//!
//! Records deserialize leniently: missing columns fall back to defaults and
//! unknown columns are ignored, so a schema that grows server-side does not
//! break reads. Column names follow the hosted schema, which mixes
//! snake_case and camelCase.

pub mod company_secretarial;
pub mod contracts;
pub mod dashboard;
pub mod dealflow;
pub mod disputes;
pub mod ip;
pub mod knowledge;
pub mod matters;
pub mod policies;
pub mod risks;

pub use company_secretarial::{BoardMeeting, BoardPack, CalendarEvent, Entity, EventStatus, MeetingKind, Person};
pub use contracts::{Contract, NamedRef, NewContract};
pub use dashboard::{ComplianceScore, DashboardStat, StatColor, StatValue, Trend};
pub use dealflow::{Deal, DealStage};
pub use disputes::Dispute;
pub use ip::IpAsset;
pub use knowledge::{Clause, KnowledgeEntry, KnowledgeInsight, SearchSuggestion, Template, TrendingTopic};
pub use matters::Matter;
pub use policies::Policy;
pub use risks::Risk;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a backend row into a record.
///
/// SQL `NULL`s are dropped first, at any depth, so a null column takes the
/// field default exactly like a missing one.
pub fn decode_row<R: DeserializeOwned>(mut row: Value) -> serde_json::Result<R> {
    drop_nulls(&mut row);
    serde_json::from_value(row)
}

fn drop_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(drop_nulls);
        }
        Value::Array(items) => {
            items.retain(|v| !v.is_null());
            items.iter_mut().for_each(drop_nulls);
        }
        _ => {}
    }
}

/// Parse the timestamp and date shapes the backend emits.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC) and
/// plain `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decode_row_treats_null_as_missing() {
        let deal: Deal = decode_row(serde_json::json!({
            "id": "d1",
            "status": "Sourced",
            "dealSize": null,
            "probability": null,
            "owner": null
        }))
        .unwrap();
        assert_eq!(deal.deal_size, 0.0);
        assert_eq!(deal.owner, "");

        let pack: BoardPack = decode_row(serde_json::json!({
            "id": "bp1",
            "files": ["agenda.pdf", null],
            "meetingId": null
        }))
        .unwrap();
        assert_eq!(pack.files, vec!["agenda.pdf".to_string()]);

        let contract: Contract = decode_row(serde_json::json!({
            "id": "c1",
            "title": null,
            "entity": {"id": "e1", "name": null},
            "counterparty": null
        }))
        .unwrap();
        assert_eq!(contract.entity.map(|e| e.name), Some(String::new()));
        assert!(contract.counterparty.is_none());
    }

    #[test]
    fn test_parse_timestamp_shapes() {
        let midnight = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2024-03-01"), Some(midnight));
        assert_eq!(parse_timestamp("2024-03-01T00:00:00+00:00"), Some(midnight));
        assert_eq!(parse_timestamp("2024-03-01T00:00:00"), Some(midnight));
        assert_eq!(parse_timestamp("2024-03-01 00:00:00.000"), Some(midnight));
        assert_eq!(
            parse_timestamp("2024-03-01T02:00:00+02:00"),
            Some(midnight)
        );
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("next week"), None);
    }
}
