/// MediaView Server
///
/// Loads a media dataset once and serves composed views over HTTP and
/// WebSocket to dashboard clients.

use log::error;
use mediaview::server::run_server;
use mediaview::{RecordStore, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(2);
        }
    };

    let store = match RecordStore::load(&config.dataset) {
        Ok(store) => store,
        Err(e) => {
            error!("Dataset load failed: {}", e);
            std::process::exit(1);
        }
    };

    run_server(&config, store).await
}
