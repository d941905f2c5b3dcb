use crate::model::{ItemId, RunStatus, TimelineItem};
use crate::time::epoch::format_instant;
use std::io::{self, Write};

pub fn write<W: Write>(items: &[TimelineItem], out: &mut W) -> io::Result<()> {
    write_legend(out)?;
    if items.is_empty() {
        return writeln!(out, "(no items match the current filters)");
    }
    for item in items {
        match (&item.id, item.end) {
            (ItemId::Run(id), Some(end)) => writeln!(
                out,
                "#{:<6} {} .. {}  [{}] {}",
                id,
                format_instant(&item.start),
                format_instant(&end),
                item.class_name,
                item.content
            )?,
            _ => writeln!(
                out,
                "  *     {}  [{}] {}",
                format_instant(&item.start),
                item.class_name,
                item.title
            )?,
        }
    }
    Ok(())
}

fn write_legend<W: Write>(out: &mut W) -> io::Result<()> {
    let entries: Vec<String> = RunStatus::ALL
        .iter()
        .map(|status| format!("{} {} ({})", status.class_name(), status.label(), status.color()))
        .collect();
    writeln!(out, "Legend: {}", entries.join(", "))
}
