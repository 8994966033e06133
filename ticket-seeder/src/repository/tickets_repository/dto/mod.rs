mod new_ticket;
mod tickets_repository_config;

pub use new_ticket::NewTicket;
pub use tickets_repository_config::TicketsRepositoryConfig;
