use super::{display_date, display_time, EventDefinition};
use anyhow::anyhow;
use std::path::Path;
use time::{macros::datetime, PrimitiveDateTime, UtcOffset};

///
/// Events users may additionally hold tickets for.
/// Start times are wall clock times at `offset`.
///
pub fn default_other_events(offset: UtcOffset) -> Vec<EventDefinition> {
    vec![
        event(
            "Urban Fest 2025",
            "https://picsum.photos/400/200?random=6",
            230,
            "Zona Front Stage",
            datetime!(2025-12-06 17:00),
            offset,
        ),
        event(
            "Fin de Año Fest 2025",
            "https://picsum.photos/400/200?random=10",
            100,
            "Palco VIP",
            datetime!(2025-12-31 20:00),
            offset,
        ),
        event(
            "RockFest Latino",
            "https://picsum.photos/400/200?random=3",
            85,
            "Zona Fan",
            datetime!(2025-11-30 18:00),
            offset,
        ),
        event(
            "Noche de Amor",
            "https://images.unsplash.com/photo-1525610553991-2bede1a236e2",
            150,
            "Zona Platinum",
            datetime!(2025-10-30 19:00),
            offset,
        ),
    ]
}

///
/// Reads JSON array of [EventDefinition]s.
/// `eventDateTime` must be RFC 3339.
///
pub fn load_other_events(path: impl AsRef<Path>) -> anyhow::Result<Vec<EventDefinition>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .map_err(|err| anyhow!("cannot read events file {}: {err}", path.display()))?;
    let events = serde_json::from_str(&content)
        .map_err(|err| anyhow!("invalid events file {}: {err}", path.display()))?;

    Ok(events)
}

fn event(
    title: &str,
    image: &str,
    price: i64,
    zone: &str,
    starts_at: PrimitiveDateTime,
    offset: UtcOffset,
) -> EventDefinition {
    EventDefinition {
        title: title.to_string(),
        image: image.to_string(),
        price,
        zone: zone.to_string(),
        time: display_time(starts_at.time()),
        date: display_date(starts_at.date()),
        event_date_time: starts_at.assume_offset(offset),
    }
}
