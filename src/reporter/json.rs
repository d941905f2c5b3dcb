use crate::model::TimelineItem;
use std::io::{self, Write};

/// Writes the item list as a pretty-printed JSON array.
pub fn write<W: Write>(items: &[TimelineItem], out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, items)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ItemId, ItemKind};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_json_output_is_an_item_array() {
        let items = vec![TimelineItem {
            id: ItemId::Annotation("annotation-1".to_owned()),
            content: "Deploy".to_owned(),
            start: Utc.timestamp_millis(0),
            end: None,
            kind: Some(ItemKind::Point),
            class_name: "annotation-deploy".to_owned(),
            title: "deploy: Deploy".to_owned(),
        }];
        let mut out = Vec::new();
        write(&items, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["id"], "annotation-1");
        assert_eq!(value[0]["type"], "point");
        assert!(out.ends_with(b"\n"));
    }
}
