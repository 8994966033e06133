mod application;
mod catalog;
mod error;
mod repository;
mod service;

use application::ApplicationEnv;
use time::UtcOffset;

fn main() -> anyhow::Result<()> {
    // Has to be read while the process is still single threaded
    let local_offset = UtcOffset::current_local_offset();

    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let local_offset = local_offset.unwrap_or_else(|err| {
        tracing::warn!(%err, "cannot determine local offset, falling back to UTC");
        UtcOffset::UTC
    });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(application::run(&env, local_offset))
}
