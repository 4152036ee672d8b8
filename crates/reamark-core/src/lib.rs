pub mod diagnostics;
pub mod fixtures;
pub mod markers;
pub mod model;
pub mod persistence;
pub mod time;

pub use diagnostics::{
    TelemetryGuard, init_tracing, init_tracing_with_file_prefix, init_tracing_with_options,
};
pub use markers::{EventToMarkerString, LeafAccessor, Marker};
pub use model::{ATTRIBUTE_COLOR, ATTRIBUTE_NAME, Event, EventError, LeafEvent};
pub use time::{beats_to_seconds, format_offset_seconds};
