use super::{create_state, ApplicationEnv};
use crate::{error::Error, service::seeding_service::SeedingService};
use time::UtcOffset;

#[derive(Debug, PartialEq)]
pub struct SeedingSummary {
    pub users: usize,
    pub tickets: usize,
}

pub async fn run(env: &ApplicationEnv, local_offset: UtcOffset) -> anyhow::Result<()> {
    let state = create_state(env, local_offset)?;

    let summary = seed_users(state.seeding_service.as_ref(), &env.user_ids).await?;
    tracing::info!(
        users = summary.users,
        tickets = summary.tickets,
        "every user has a fresh set of tickets"
    );

    Ok(())
}

///
/// Seeds users one after another in list order.
/// First failure stops the run, remaining users are left untouched.
///
pub async fn seed_users(
    seeding_service: &dyn SeedingService,
    user_ids: &[String],
) -> Result<SeedingSummary, Error> {
    let mut tickets = 0;

    for user_id in user_ids {
        tickets += seeding_service.seed_user(user_id).await?.len();
    }

    Ok(SeedingSummary {
        users: user_ids.len(),
        tickets,
    })
}
