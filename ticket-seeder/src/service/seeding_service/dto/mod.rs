mod seeded_ticket;
mod seeding_service_config;

pub use seeded_ticket::SeededTicket;
pub use seeding_service_config::SeedingServiceConfig;
