use tracing_subscriber::EnvFilter;

use commute_bot::{bot, config};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    bot::run(config::process_env).await;
}
