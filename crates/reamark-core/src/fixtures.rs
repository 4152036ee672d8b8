use crate::model::{ATTRIBUTE_COLOR, ATTRIBUTE_NAME, Event, LeafEvent};

pub const DEMO_COLOR_BEGINNING: &str = "0 16797088 1 B {A4376701-5AA5-246B-900B-28ABC969123A}";
pub const DEMO_COLOR_CENTER: &str = "0 18849803 1 B {E4DD7D23-98F4-CA97-8587-F4259A9498F7}";

/// Deterministic demo tree: two fully attributed leaves plus a trailing
/// color-only leaf that exercises the skip path.
#[must_use]
pub fn demo_event() -> Event {
    Event::Sequence(vec![
        Event::Leaf(
            LeafEvent::new(2.0)
                .with_attribute(ATTRIBUTE_NAME, "beginning")
                .with_attribute(ATTRIBUTE_COLOR, DEMO_COLOR_BEGINNING),
        ),
        Event::Leaf(
            LeafEvent::new(3.0)
                .with_attribute(ATTRIBUTE_NAME, "center")
                .with_attribute(ATTRIBUTE_COLOR, DEMO_COLOR_CENTER),
        ),
        Event::Leaf(LeafEvent::new(1.0).with_attribute(ATTRIBUTE_COLOR, DEMO_COLOR_CENTER)),
    ])
}
