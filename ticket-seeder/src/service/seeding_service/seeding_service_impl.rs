use super::{SeededTicket, SeedingService, SeedingServiceConfig};
use crate::{
    catalog::EventDefinition,
    error::Error,
    repository::{NewTicket, TicketsRepository},
};
use async_trait::async_trait;
use rand::{rngs::StdRng, seq::index};
use std::{
    iter,
    sync::{Arc, Mutex, PoisonError},
};
use time::OffsetDateTime;
use uuid::Uuid;

pub struct SeedingServiceImpl {
    config: SeedingServiceConfig,
    repository: Arc<dyn TicketsRepository>,
    rng: Mutex<StdRng>,
}

impl SeedingServiceImpl {
    ///
    /// ### Errors
    /// - [Error::Catalog] when catalog has fewer other events
    ///   than should be sampled for every user
    ///
    pub fn new(
        config: SeedingServiceConfig,
        repository: Arc<dyn TicketsRepository>,
        rng: StdRng,
    ) -> Result<Self, Error> {
        if config.other_events.len() < config.other_events_per_user {
            return Err(Error::Catalog("not enough other events to sample from"));
        }

        Ok(Self {
            config,
            repository,
            rng: Mutex::new(rng),
        })
    }

    ///
    /// Headline event first, then sampled events in sampling order
    ///
    fn select_events(&self) -> Vec<&EventDefinition> {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let sampled = index::sample(
            &mut *rng,
            self.config.other_events.len(),
            self.config.other_events_per_user,
        );

        iter::once(&self.config.headline_event)
            .chain(sampled.into_iter().map(|i| &self.config.other_events[i]))
            .collect()
    }
}

#[async_trait]
impl SeedingService for SeedingServiceImpl {
    async fn seed_user(&self, user_id: &str) -> Result<Vec<SeededTicket>, Error> {
        tracing::info!(user_id, "creating tickets");

        let previous_ids = self.repository.find_ids(user_id).await?;
        for id in &previous_ids {
            self.repository.delete(user_id, id).await?;
        }
        tracing::info!(user_id, count = previous_ids.len(), "deleted previous tickets");

        let events = self.select_events();
        let mut seeded_tickets = Vec::with_capacity(events.len());

        for event in events {
            let ticket = new_ticket(user_id, event, Uuid::new_v4(), OffsetDateTime::now_utc());

            let id = self.repository.insert(user_id, &ticket).await?;
            tracing::info!(user_id, event_title = %ticket.event_title, %id, "created ticket");

            seeded_tickets.push(SeededTicket {
                id,
                event_title: ticket.event_title,
                qr_id: ticket.qr_id,
            });
        }

        Ok(seeded_tickets)
    }
}

///
/// Payload encoded into ticket's QR code
///
pub fn qr_data(user_id: &str, event_title: &str, zone: &str, qr_id: Uuid) -> String {
    format!("{user_id}|{event_title}|{zone}|{qr_id}")
}

fn new_ticket(
    user_id: &str,
    event: &EventDefinition,
    qr_id: Uuid,
    created_at: OffsetDateTime,
) -> NewTicket {
    NewTicket {
        count: 1,
        created_at,
        date: event.date.clone(),
        event_date_time: event.event_date_time,
        event_title: event.title.clone(),
        image: event.image.clone(),
        price: event.price,
        qr_data: qr_data(user_id, &event.title, &event.zone, qr_id),
        qr_id,
        time: event.time.clone(),
        used: false,
        zone: event.zone.clone(),
    }
}
