mod dto;
mod seeding_service;
mod seeding_service_impl;

pub use dto::{SeededTicket, SeedingServiceConfig};
pub use seeding_service::*;
pub use seeding_service_impl::*;
