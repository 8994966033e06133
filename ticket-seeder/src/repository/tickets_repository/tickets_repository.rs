use super::NewTicket;
use crate::repository;
use async_trait::async_trait;

///
/// Tickets stored under `users/{user_id}/tickets`
///
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Finds ids of every ticket document that belongs to the user
    ///
    async fn find_ids(&self, user_id: &str) -> Result<Vec<String>, repository::Error>;

    async fn delete(&self, user_id: &str, id: &str) -> Result<(), repository::Error>;

    ///
    /// Inserts ticket under auto-generated id
    ///
    /// ### Returns
    /// id of the created document
    ///
    async fn insert(&self, user_id: &str, ticket: &NewTicket)
        -> Result<String, repository::Error>;
}
