use std::net::SocketAddr;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rolodex::server::{build_router, AppState, ServerConfig};
use rolodex::{initialize_if_absent, HttpSeed, JsonStore};

const SERVER_CONFIG: &str = "resources/server.toml";
// The service answers on port 3000; there is deliberately no override.
const PORT: u16 = 3000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::read_or_default(SERVER_CONFIG)?;
    let store = JsonStore::new(&config.store_path);
    let seed = HttpSeed::new(&config.seed_url);

    if initialize_if_absent(&store, &seed).await? {
        tracing::info!(
            path = %config.store_path.display(),
            url = seed.url(),
            "seeded store on first run"
        );
    }

    let app = build_router(AppState::new(store, seed));

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    return Ok(());
}
