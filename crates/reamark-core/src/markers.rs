use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
    model::{ATTRIBUTE_COLOR, ATTRIBUTE_NAME, Event, LeafEvent},
    time::format_offset_seconds,
};

/// Extracts an optional text value from a leaf. Returning `None` excludes
/// the leaf from the marker list without signalling an error.
pub type LeafAccessor = Box<dyn Fn(&LeafEvent) -> Option<String>>;

/// One resolved marker entry, prior to line formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Marker {
    pub index: usize,
    pub offset_seconds: f64,
    pub name: String,
    pub color: String,
}

impl Marker {
    /// Renders the pasteable project-file line. Name and color pass through
    /// verbatim; Reaper color descriptors contain spaces and braces.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "MARKER {} {} {} {}",
            self.index,
            format_offset_seconds(self.offset_seconds),
            self.name,
            self.color
        )
    }
}

/// Converts an event tree into Reaper marker entries.
///
/// The default accessors read the conventional `name` and `color`
/// attributes. A leaf only produces a marker when both accessors resolve;
/// otherwise it is skipped, though its duration still advances the running
/// offset. Paste the resulting text into a Reaper project file one line
/// before the `<PROJBAY` tag.
pub struct EventToMarkerString {
    name_accessor: LeafAccessor,
    color_accessor: LeafAccessor,
}

impl Default for EventToMarkerString {
    fn default() -> Self {
        Self {
            name_accessor: Box::new(|leaf| leaf.attribute(ATTRIBUTE_NAME).map(str::to_owned)),
            color_accessor: Box::new(|leaf| leaf.attribute(ATTRIBUTE_COLOR).map(str::to_owned)),
        }
    }
}

impl EventToMarkerString {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_name_accessor(
        mut self,
        accessor: impl Fn(&LeafEvent) -> Option<String> + 'static,
    ) -> Self {
        self.name_accessor = Box::new(accessor);
        self
    }

    #[must_use]
    pub fn with_color_accessor(
        mut self,
        accessor: impl Fn(&LeafEvent) -> Option<String> + 'static,
    ) -> Self {
        self.color_accessor = Box::new(accessor);
        self
    }

    /// Depth-first, left-to-right collection of resolved markers. Indices
    /// count emitted markers only; offsets accumulate over every leaf.
    #[instrument(skip_all, fields(leaves = event.leaf_count()))]
    #[must_use]
    pub fn convert_markers(&self, event: &Event) -> Vec<Marker> {
        let mut markers = Vec::new();
        let mut offset_seconds = 0.0;
        self.walk(event, &mut offset_seconds, &mut markers);

        debug!(
            emitted = markers.len(),
            skipped = event.leaf_count() - markers.len(),
            "marker collection completed"
        );
        markers
    }

    /// Convert an event tree to Reaper marker entries as plain text, one
    /// `MARKER <index> <offset> <name> <color>` line per included leaf.
    /// Empty or all-skipped input yields an empty string.
    #[must_use]
    pub fn convert(&self, event: &Event) -> String {
        let lines: Vec<String> = self
            .convert_markers(event)
            .iter()
            .map(Marker::to_line)
            .collect();
        lines.join("\n")
    }

    fn walk(&self, event: &Event, offset_seconds: &mut f64, markers: &mut Vec<Marker>) {
        match event {
            Event::Leaf(leaf) => {
                let resolved = (self.name_accessor)(leaf).zip((self.color_accessor)(leaf));
                if let Some((name, color)) = resolved {
                    markers.push(Marker {
                        index: markers.len(),
                        offset_seconds: *offset_seconds,
                        name,
                        color,
                    });
                }
                *offset_seconds += leaf.duration_seconds;
            }
            Event::Sequence(children) => {
                for child in children {
                    self.walk(child, offset_seconds, markers);
                }
            }
        }
    }
}
