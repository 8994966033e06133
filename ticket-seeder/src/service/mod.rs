pub mod seeding_service;
