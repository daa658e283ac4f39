//! Display surface abstraction.
//!
//! The renderer never talks to a concrete output format; it drives a
//! `DisplaySurface`, the capability set the host UI framework exposes:
//! page metadata, styled markup blocks, tabs, metric cards, tables with
//! per-cell color cues, and free-text blocks. `HtmlSurface` is the
//! production implementation; `RecordingSurface` captures the call
//! sequence so tests can assert on structure without parsing markup.

use crate::render::table::ReportTable;

/// Output seam between the report renderer and the host UI.
///
/// Values arrive pre-formatted; implementations only lay them out.
pub trait DisplaySurface {
    /// Set the page title and icon shown by the host (browser tab, etc.)
    fn set_page_metadata(&mut self, title: &str, icon: &str);

    /// Emit a raw styled markup block (header banner, icons, footer)
    fn styled_block(&mut self, markup: &str);

    /// Emit a section heading
    fn header(&mut self, text: &str);

    /// Emit a subsection heading
    fn subheader(&mut self, text: &str);

    /// Open a tab group with the given ordered labels
    fn begin_tabs(&mut self, labels: &[&str]);

    /// Open the content scope of tab `index` (0-based, matching the labels)
    fn begin_tab(&mut self, index: usize);

    /// Close the current tab's content scope
    fn end_tab(&mut self);

    /// Close the tab group
    fn end_tabs(&mut self);

    /// Emit a metric card with an optional help text
    fn metric(&mut self, label: &str, value: &str, help: Option<&str>);

    /// Emit a table with per-cell color intensities
    fn table(&mut self, table: &ReportTable);

    /// Emit a labelled free-text block; `height_hint` is in pixels
    fn text_block(&mut self, label: &str, content: &str, height_hint: u32);

    /// Emit a horizontal separator
    fn divider(&mut self);
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    PageMetadata { title: String, icon: String },
    StyledBlock(String),
    Header(String),
    Subheader(String),
    BeginTabs(Vec<String>),
    BeginTab(usize),
    EndTab,
    EndTabs,
    Metric {
        label: String,
        value: String,
        help: Option<String>,
    },
    Table(ReportTable),
    TextBlock {
        label: String,
        content: String,
        height_hint: u32,
    },
    Divider,
}

/// Surface that records every call as an event, for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events emitted inside the content scope of tab `index`.
    pub fn tab_events(&self, index: usize) -> &[SurfaceEvent] {
        let start = self
            .events
            .iter()
            .position(|e| *e == SurfaceEvent::BeginTab(index))
            .map(|i| i + 1)
            .unwrap_or(self.events.len());
        let len = self.events[start..]
            .iter()
            .position(|e| *e == SurfaceEvent::EndTab)
            .unwrap_or(0);
        &self.events[start..start + len]
    }
}

impl DisplaySurface for RecordingSurface {
    fn set_page_metadata(&mut self, title: &str, icon: &str) {
        self.events.push(SurfaceEvent::PageMetadata {
            title: title.to_string(),
            icon: icon.to_string(),
        });
    }

    fn styled_block(&mut self, markup: &str) {
        self.events.push(SurfaceEvent::StyledBlock(markup.to_string()));
    }

    fn header(&mut self, text: &str) {
        self.events.push(SurfaceEvent::Header(text.to_string()));
    }

    fn subheader(&mut self, text: &str) {
        self.events.push(SurfaceEvent::Subheader(text.to_string()));
    }

    fn begin_tabs(&mut self, labels: &[&str]) {
        self.events.push(SurfaceEvent::BeginTabs(
            labels.iter().map(|s| s.to_string()).collect(),
        ));
    }

    fn begin_tab(&mut self, index: usize) {
        self.events.push(SurfaceEvent::BeginTab(index));
    }

    fn end_tab(&mut self) {
        self.events.push(SurfaceEvent::EndTab);
    }

    fn end_tabs(&mut self) {
        self.events.push(SurfaceEvent::EndTabs);
    }

    fn metric(&mut self, label: &str, value: &str, help: Option<&str>) {
        self.events.push(SurfaceEvent::Metric {
            label: label.to_string(),
            value: value.to_string(),
            help: help.map(str::to_string),
        });
    }

    fn table(&mut self, table: &ReportTable) {
        self.events.push(SurfaceEvent::Table(table.clone()));
    }

    fn text_block(&mut self, label: &str, content: &str, height_hint: u32) {
        self.events.push(SurfaceEvent::TextBlock {
            label: label.to_string(),
            content: content.to_string(),
            height_hint,
        });
    }

    fn divider(&mut self) {
        self.events.push(SurfaceEvent::Divider);
    }
}
