use crate::catalog::EventDefinition;

pub struct SeedingServiceConfig {
    pub headline_event: EventDefinition,
    pub other_events: Vec<EventDefinition>,
    /// How many distinct `other_events` each user gets
    pub other_events_per_user: usize,
}
