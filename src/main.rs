use anyhow::Context;
use dotenvy::dotenv;
use tracing::{info, warn};

use school_activities::config::AppConfig;
use school_activities::database::{seed, ActivityStore};
use school_activities::services::ActivityService;
use school_activities::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Config + logging
    let config = AppConfig::from_env();
    school_activities::logging::init(config.log_format);

    // 2. Seed the store
    let activities = match &config.seed_path {
        Some(path) => seed::load_activities(path)
            .with_context(|| format!("loading activities from {}", path.display()))?,
        None => seed::default_activities().context("loading built-in activities")?,
    };
    info!(activities = activities.len(), "activity store seeded");

    let state = AppState::new(ActivityService::new(ActivityStore::new(activities)));
    let app = web::router(state, &config.static_dir);

    // 3. Bind (with fallback port)
    let addr = config.bind_addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback = config.fallback_bind_addr();
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback");
            tokio::net::TcpListener::bind(&fallback)
                .await
                .with_context(|| format!("binding fallback address {}", fallback))?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("serving on http://{}", bound_addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
