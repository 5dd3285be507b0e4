//! Runs the TRDP configuration manager web service.
//!
//! Configuration comes from the environment:
//! - `TRDP_MANAGER_ADDR`: listen address (default `127.0.0.1:3001`)
//! - `TRDP_CONFIG_DIR`: storage directory (default `configs`)

use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use std::{env, process};
use tokio::sync::Mutex;

use trdp_rs_manager::engine::EngineController;
use trdp_rs_manager::server::{self, AppState};
use trdp_rs_manager::storage::ConfigStore;

#[tokio::main]
async fn main() {
    env_logger::try_init().ok();

    let addr: SocketAddr = env::var("TRDP_MANAGER_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3001".to_string())
        .parse()
        .unwrap_or_else(|e| {
            eprintln!("Invalid TRDP_MANAGER_ADDR: {}", e);
            process::exit(2);
        });

    let config_dir = env::var("TRDP_CONFIG_DIR").unwrap_or_else(|_| "configs".to_string());
    let store = match ConfigStore::open(config_dir.as_str()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Failed to open configuration store '{}': {}", config_dir, e);
            process::exit(1);
        }
    };
    info!("Storing configurations under '{}'", config_dir);

    let state = AppState {
        store: Arc::new(store),
        engine: Arc::new(Mutex::new(EngineController::new())),
    };

    server::serve(addr, state).await;
}
