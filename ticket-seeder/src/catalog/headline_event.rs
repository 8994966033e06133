use super::{display_date, display_time, EventDefinition};
use time::{macros::time, Duration, OffsetDateTime, PrimitiveDateTime, Time};

pub const HEADLINE_TITLE: &str = "Concierto Maná";
const HEADLINE_IMAGE: &str = "https://picsum.photos/400/200?random=1";
const HEADLINE_PRICE: i64 = 60;
const HEADLINE_ZONE: &str = "VIP";
const HEADLINE_START: Time = time!(20:00);

///
/// Builds the event every user gets a ticket for.
/// It always takes place the day after `now` at 20:00 in `now`'s offset.
///
pub fn headline_event(now: OffsetDateTime) -> EventDefinition {
    let tomorrow = now.date() + Duration::DAY;

    EventDefinition {
        title: HEADLINE_TITLE.to_string(),
        image: HEADLINE_IMAGE.to_string(),
        price: HEADLINE_PRICE,
        zone: HEADLINE_ZONE.to_string(),
        time: display_time(HEADLINE_START),
        date: display_date(tomorrow),
        event_date_time: PrimitiveDateTime::new(tomorrow, HEADLINE_START)
            .assume_offset(now.offset()),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::{date, datetime};

    #[test]
    fn headline_event_tomorrow_at_eight_pm() {
        let now = datetime!(2026-10-19 13:47:12.345678 -5);

        let event = headline_event(now);

        let start = event.event_date_time;
        assert_eq!(start.date(), date!(2026 - 10 - 20));
        assert_eq!(start.hour(), 20);
        assert_eq!(start.minute(), 0);
        assert_eq!(start.second(), 0);
        assert_eq!(start.nanosecond(), 0);
        assert_eq!(start.offset(), now.offset());
        assert_eq!(event.time, "20:00");
        assert_eq!(event.date, "20 de octubre de 2026");
    }

    #[test]
    fn headline_event_late_evening_still_next_day() {
        let now = datetime!(2026-10-19 23:59:59 -5);

        let event = headline_event(now);

        assert_eq!(event.event_date_time, datetime!(2026-10-20 20:00 -5));
    }

    #[test]
    fn headline_event_crosses_year() {
        let now = datetime!(2026-12-31 08:00 UTC);

        let event = headline_event(now);

        assert_eq!(event.event_date_time, datetime!(2027-01-01 20:00 UTC));
        assert_eq!(event.date, "1 de enero de 2027");
    }

    #[test]
    fn headline_event_fixed_fields() {
        let event = headline_event(OffsetDateTime::now_utc());

        assert_eq!(event.title, HEADLINE_TITLE);
        assert_eq!(event.image, HEADLINE_IMAGE);
        assert_eq!(event.price, 60);
        assert_eq!(event.zone, "VIP");
    }
}
