use snug::state::{AppData, AppState};
use snug::{community, router, storage};
use std::{env, net::SocketAddr};
use tokio::fs;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let data_dir = storage::resolve_data_dir()?;
    fs::create_dir_all(&data_dir).await?;

    let entries = storage::load_entries(&data_dir).await;
    let user = storage::load_user(&data_dir).await;
    let guest = storage::load_guest_marker(&data_dir).await;
    info!(
        "restored {} mood entries, user: {}",
        entries.len(),
        user.as_ref().map(|u| u.name.as_str()).unwrap_or("none")
    );

    let state = AppState::new(
        data_dir,
        AppData {
            entries,
            user,
            guest,
            community: community::seed(),
        },
    );

    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
