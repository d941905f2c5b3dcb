//! Export/import format for annotations and filters.
//!
//! ```json
//! {
//!   "version": 1,
//!   "annotations": [{"id": "...", "time": "2024-03-01T10:00:00.000Z", ...}],
//!   "filters": {"startDate": null, "endDate": null, "searchText": "", "categories": []},
//!   "exportDate": "2024-03-01T12:00:00.000Z"
//! }
//! ```
//!
//! `version` and `exportDate` are informational and optional on import, so
//! documents written before the version tag existed still decode. A version
//! tag of any JSON type is accepted and only logged.

use crate::app::error::TimelineError;
use crate::model::{Annotation, TimelineFilters};
use crate::time::Instant;
use chrono::Utc;
use serde_derive::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDocument {
    pub version: u32,
    pub annotations: Vec<Annotation>,
    pub filters: TimelineFilters,
    #[serde(with = "crate::time::serialize::instant")]
    pub export_date: Instant,
}

/// Result of a successful import.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedSnapshot {
    pub annotations: Vec<Annotation>,
    pub filters: Option<TimelineFilters>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    #[serde(default)]
    version: Option<serde_json::Value>,
    annotations: Vec<Annotation>,
    #[serde(default)]
    filters: Option<TimelineFilters>,
}

impl SnapshotDocument {
    pub fn to_bytes(&self) -> Result<Vec<u8>, TimelineError> {
        serde_json::to_vec_pretty(self).map_err(TimelineError::Serialize)
    }
}

pub fn encode(annotations: &[Annotation], filters: &TimelineFilters) -> SnapshotDocument {
    encode_at(annotations, filters, Utc::now())
}

pub fn encode_at(
    annotations: &[Annotation],
    filters: &TimelineFilters,
    export_date: Instant,
) -> SnapshotDocument {
    SnapshotDocument {
        version: SNAPSHOT_VERSION,
        annotations: annotations.to_vec(),
        filters: filters.clone(),
        export_date,
    }
}

/// Decodes a snapshot as a whole; any malformed part fails the entire
/// document with [`TimelineError::Format`].
pub fn decode(bytes: &[u8]) -> Result<DecodedSnapshot, TimelineError> {
    let raw: RawSnapshot =
        serde_json::from_slice(bytes).map_err(|err| TimelineError::Format(err.to_string()))?;
    match raw.version.as_ref().map(|version| (version, version.as_u64())) {
        Some((_, Some(version))) if version > u64::from(SNAPSHOT_VERSION) => warn!(
            "Snapshot version {} is newer than supported version {}, reading known fields only",
            version, SNAPSHOT_VERSION
        ),
        Some((_, Some(_))) => {}
        Some((other, None)) => warn!("Ignoring unrecognized snapshot version tag {}", other),
        None => debug!("Snapshot carries no version tag"),
    }
    Ok(DecodedSnapshot {
        annotations: raw.annotations,
        filters: raw.filters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn annotations() -> Vec<Annotation> {
        vec![
            Annotation {
                id: "annotation-1".to_owned(),
                time: Utc.timestamp_millis(1_700_000_000_123),
                content: "Rolled out v2.3".to_owned(),
                category: "Deployment".to_owned(),
                color: "#3b82f6".to_owned(),
            },
            Annotation {
                id: "annotation-2".to_owned(),
                time: Utc.timestamp_millis(1_700_000_100_000),
                content: "DB failover".to_owned(),
                category: "Incident".to_owned(),
                color: "#ef4444".to_owned(),
            },
        ]
    }

    fn filters() -> TimelineFilters {
        TimelineFilters {
            start_date: Some(Utc.timestamp_millis(1_699_999_000_000)),
            end_date: None,
            search_text: "load".to_owned(),
            categories: vec!["Incident".to_owned()],
        }
    }

    #[test]
    fn test_round_trip_preserves_annotations_and_filters() {
        let bytes = encode(&annotations(), &filters()).to_bytes().unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.annotations, annotations());
        assert_eq!(decoded.filters, Some(filters()));
    }

    #[test]
    fn test_reexport_reproduces_annotation_set() {
        let export_date = Utc.timestamp_millis(0);
        let first = encode_at(&annotations(), &filters(), export_date);
        let decoded = decode(&first.to_bytes().unwrap()).unwrap();
        let second = encode_at(
            &decoded.annotations,
            decoded.filters.as_ref().unwrap(),
            export_date,
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_encoded_document_shape() {
        let document = encode_at(&[], &TimelineFilters::default(), Utc.timestamp_millis(0));
        let value: serde_json::Value = serde_json::from_slice(&document.to_bytes().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "version": 1,
                "annotations": [],
                "filters": {"startDate": null, "endDate": null, "searchText": "", "categories": []},
                "exportDate": "1970-01-01T00:00:00.000Z"
            })
        );
    }

    #[test]
    fn test_unversioned_document_without_filters_decodes() {
        let bytes = br#"{
            "annotations": [{
                "id": "annotation-1700000000000",
                "time": "2023-11-14T22:13:20.000Z",
                "content": "Spike",
                "category": "Incident",
                "color": "red"
            }],
            "exportDate": "2023-11-15T08:00:00.000Z"
        }"#;
        let decoded = decode(bytes).unwrap();
        assert_eq!(decoded.annotations.len(), 1);
        assert_eq!(decoded.annotations[0].time, Utc.timestamp_millis(1_700_000_000_000));
        assert_eq!(decoded.filters, None);
    }

    #[test]
    fn test_round_trip_of_sub_millisecond_times() {
        let bytes = br#"{"annotations": [
            {"id": "a", "time": "2024-03-01T10:00:00.123456Z", "content": "c", "category": "x", "color": "red"}
        ]}"#;
        let first = decode(bytes).unwrap();
        assert_eq!(first.annotations[0].time, Utc.timestamp_millis(1_709_287_200_123));

        let reencoded = encode(&first.annotations, &TimelineFilters::default())
            .to_bytes()
            .unwrap();
        let second = decode(&reencoded).unwrap();
        assert_eq!(second.annotations, first.annotations);
    }

    #[test]
    fn test_version_tag_is_informational() {
        let cases: Vec<&[u8]> = vec![
            &br#"{"version": "1", "annotations": []}"#[..],
            &br#"{"version": -1, "annotations": []}"#[..],
            &br#"{"version": 7, "annotations": []}"#[..],
            &br#"{"version": null, "annotations": []}"#[..],
        ];
        for case in cases {
            let result = decode(case);
            assert!(result.is_ok(), "{}", String::from_utf8_lossy(case));
        }
    }

    #[test]
    fn test_decode_failures_are_format_errors() {
        let cases: Vec<&[u8]> = vec![
            &b"not json at all"[..],
            &br#"{"filters": {}}"#[..],
            &br#"{"annotations": {}}"#[..],
            &br#"{"annotations": [{"id": "a", "time": "2023-11-14T22:13:20Z", "content": "c", "category": "x"}]}"#[..],
            &br#"{"annotations": [{"id": 5, "time": "2023-11-14T22:13:20Z", "content": "c", "category": "x", "color": "red"}]}"#[..],
            &br#"{"annotations": [{"id": "a", "time": "whenever", "content": "c", "category": "x", "color": "red"}]}"#[..],
            &br#"{"annotations": [], "filters": {"endDate": "later"}}"#[..],
        ];
        for case in cases {
            let result = decode(case);
            assert!(
                matches!(result, Err(TimelineError::Format(_))),
                "expected format error for {}",
                String::from_utf8_lossy(case)
            );
        }
    }

    #[test]
    fn test_one_bad_annotation_fails_the_whole_document() {
        let bytes = br#"{"annotations": [
            {"id": "a", "time": "2023-11-14T22:13:20Z", "content": "ok", "category": "x", "color": "red"},
            {"id": "b", "time": null, "content": "bad", "category": "x", "color": "red"}
        ]}"#;
        assert!(decode(bytes).unwrap_err().is_format());
    }
}
