mod service_account_token_source;
mod static_token_source;
mod token_source;

pub use service_account_token_source::*;
pub use static_token_source::*;
pub use token_source::*;
