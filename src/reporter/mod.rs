pub mod json;
pub mod text;

use crate::model::TimelineItem;
use clap::arg_enum;
use derivative::*;
use std::io::{self, Write};

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub enum OutputFormat {
        Json, Text,
    }
}

/// Receives the full item list after every state change.
///
/// Implementations are free to diff against what they rendered before.
pub trait TimelineAdapter {
    fn render(&mut self, items: &[TimelineItem]);
}

/// Adapter that keeps the most recent frame for a one-shot writer.
#[derive(Derivative, Default)]
#[derivative(Debug)]
pub struct FrameBuffer {
    #[derivative(Debug = "ignore")]
    items: Vec<TimelineItem>,
    renders: usize,
    changes: usize,
}

impl FrameBuffer {
    #[inline]
    pub fn items(&self) -> &[TimelineItem] {
        self.items.as_slice()
    }

    #[inline]
    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Number of renders whose items differed from the previous frame.
    #[inline]
    pub fn changes(&self) -> usize {
        self.changes
    }
}

impl TimelineAdapter for FrameBuffer {
    fn render(&mut self, items: &[TimelineItem]) {
        self.renders += 1;
        if self.items.as_slice() != items {
            self.changes += 1;
            self.items = items.to_vec();
        }
        trace!(
            "Frame {} holds {} items ({} changes)",
            self.renders,
            self.items.len(),
            self.changes
        );
    }
}

pub fn write<W: Write>(format: OutputFormat, items: &[TimelineItem], out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Json => json::write(items, out),
        OutputFormat::Text => text::write(items, out),
    }
}
