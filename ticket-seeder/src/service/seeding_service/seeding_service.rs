use super::SeededTicket;
use crate::error::Error;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SeedingService: Send + Sync {
    ///
    /// Replaces every ticket of the user with a fresh set:
    /// one for the headline event followed by randomly sampled other events
    ///
    /// ### Returns
    /// Created tickets in insertion order
    ///
    async fn seed_user(&self, user_id: &str) -> Result<Vec<SeededTicket>, Error>;
}
