use crate::time::Instant;
use serde_derive::{Deserialize, Serialize};

/// A user-authored marker at a point in time, independent of any run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: String,
    #[serde(with = "crate::time::serialize::instant")]
    pub time: Instant,
    pub content: String,
    pub category: String,
    pub color: String,
}

/// Annotation contents before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationDraft {
    pub time: Instant,
    pub content: String,
    pub category: String,
    pub color: String,
}

impl AnnotationDraft {
    pub fn into_annotation(self, id: String) -> Annotation {
        Annotation {
            id,
            time: self.time,
            content: self.content,
            category: self.category,
            color: self.color,
        }
    }
}

impl Annotation {
    pub fn class_name(&self) -> String {
        format!("annotation-{}", self.category.to_lowercase())
    }

    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.category, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_annotation_wire_shape() {
        let annotation = Annotation {
            id: "annotation-1".to_owned(),
            time: Utc.timestamp_millis(1_000),
            content: "Deploy v2".to_owned(),
            category: "Deployment".to_owned(),
            color: "#3b82f6".to_owned(),
        };
        let value = serde_json::to_value(&annotation).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "annotation-1",
                "time": "1970-01-01T00:00:01.000Z",
                "content": "Deploy v2",
                "category": "Deployment",
                "color": "#3b82f6"
            })
        );
    }

    #[test]
    fn test_annotation_time_accepts_epoch_number() {
        let result: Result<Annotation, _> = serde_json::from_str(
            r#"{"id":"a","time":2500,"content":"c","category":"x","color":"red"}"#,
        );
        assert!(result.is_ok());
        assert_eq!(result.unwrap().time, Utc.timestamp_millis(2_500));
    }

    #[test]
    fn test_class_name_lowercases_category() {
        let annotation = AnnotationDraft {
            time: Utc.timestamp_millis(0),
            content: "Node restart".to_owned(),
            category: "Incident".to_owned(),
            color: "#ef4444".to_owned(),
        }
        .into_annotation("annotation-x".to_owned());
        assert_eq!(annotation.class_name(), "annotation-incident");
        assert_eq!(annotation.tooltip(), "Incident: Node restart");
    }
}
