mod application;
mod application_env;
mod application_state;
mod application_tracing;

pub use application::*;
pub use application_env::*;
pub use application_state::*;
pub use application_tracing::*;
