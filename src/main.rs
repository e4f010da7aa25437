use std::sync::Arc;

use sigint::config::Config;
use sigint::engine::Engine;
use sigint::error::Error;
use sigint::external::RemoteStore;
use sigint::seed::example_towers;
use sigint::server::serve;
use sigint::store::{DynStore, MemoryStore};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(err) = run().await {
        tracing::error!("{}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Error> {
    let config = Config::from_env()?;

    let store: DynStore = match &config.server_url {
        Some(url) => {
            tracing::info!("using remote tower store at {}", url);
            Arc::new(RemoteStore::connect(url.as_str()).await?)
        }
        None if config.seed_examples => Arc::new(MemoryStore::with_towers(example_towers()?)),
        None => Arc::new(MemoryStore::new()),
    };

    let engine = Engine::new(store).with_recent_limit(config.recent_limit);

    serve(engine, config.bind_addr).await
}
