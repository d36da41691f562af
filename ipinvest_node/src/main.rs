use std::sync::Arc;

use anyhow::Result;

use ipinvest_node::api::{start_api_server, AppState};
use ipinvest_node::config::Config;
use ipinvest_node::storage::memory::{seed_demo_data, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    log::info!(
        "starting IPInvest node (chain {}, creator share {})",
        config.chain_id,
        config.creator_share
    );

    let store = Arc::new(MemoryStore::new());
    seed_demo_data(store.as_ref()).await?;

    let state = AppState::new(store, config);
    start_api_server(state).await
}
