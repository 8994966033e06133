use super::{ApplicationEnv, FirestoreEnv};
use crate::{
    catalog,
    repository::{TicketsRepositoryConfig, TicketsRepositoryImpl},
    service::seeding_service::{SeedingService, SeedingServiceConfig, SeedingServiceImpl},
};
use google_auth::{
    util::read_service_account_key, ServiceAccountTokenSource, StaticTokenSource, TokenSource,
    DATASTORE_SCOPE,
};
use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use time::{OffsetDateTime, UtcOffset};

const FIRESTORE_URL: &str = "https://firestore.googleapis.com";
const EMULATOR_TOKEN: &str = "owner";
const OTHER_EVENTS_PER_USER: usize = 2;

pub struct ApplicationState {
    pub seeding_service: Arc<dyn SeedingService>,
}

pub fn create_state(
    env: &ApplicationEnv,
    local_offset: UtcOffset,
) -> anyhow::Result<ApplicationState> {
    let http_client = reqwest::Client::new();

    let (config, token_source): (TicketsRepositoryConfig, Arc<dyn TokenSource>) =
        match &env.firestore {
            FirestoreEnv::Cloud {
                credentials_path,
                project_id,
            } => {
                tracing::info!(credentials_path, "loading credentials");
                let key = read_service_account_key(credentials_path)?;
                let config = TicketsRepositoryConfig {
                    base_url: FIRESTORE_URL.to_string(),
                    project_id: project_id
                        .clone()
                        .unwrap_or_else(|| key.project_id.clone()),
                };
                let token_source: Arc<dyn TokenSource> = Arc::new(
                    ServiceAccountTokenSource::new(key, DATASTORE_SCOPE, http_client.clone())?,
                );

                (config, token_source)
            }
            FirestoreEnv::Emulator { host, project_id } => {
                tracing::info!(host, "using firestore emulator");
                let config = TicketsRepositoryConfig {
                    base_url: format!("http://{host}"),
                    project_id: project_id.clone(),
                };

                let token_source: Arc<dyn TokenSource> =
                    Arc::new(StaticTokenSource::new(EMULATOR_TOKEN));

                (config, token_source)
            }
        };
    tracing::info!(project_id = %config.project_id, "using firestore project");

    tracing::info!("creating repositories");
    let tickets_repository = TicketsRepositoryImpl::new(config, http_client, token_source);
    let tickets_repository = Arc::new(tickets_repository);

    tracing::info!("building event catalog");
    let headline_event = catalog::headline_event(OffsetDateTime::now_utc().to_offset(local_offset));
    let other_events = match &env.events_path {
        Some(events_path) => catalog::load_other_events(events_path)?,
        None => catalog::default_other_events(local_offset),
    };
    tracing::info!(
        headline = %headline_event.title,
        starts_at = %headline_event.event_date_time,
        other_events = other_events.len(),
        "event catalog ready"
    );

    let rng = match env.random_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    tracing::info!("creating services");
    let config = SeedingServiceConfig {
        headline_event,
        other_events,
        other_events_per_user: OTHER_EVENTS_PER_USER,
    };
    let seeding_service = SeedingServiceImpl::new(config, tickets_repository, rng)?;
    let seeding_service = Arc::new(seeding_service);

    Ok(ApplicationState { seeding_service })
}
