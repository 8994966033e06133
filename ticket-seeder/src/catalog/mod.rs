mod display;
mod event_definition;
mod headline_event;
mod other_events;

pub use display::*;
pub use event_definition::EventDefinition;
pub use headline_event::*;
pub use other_events::*;
