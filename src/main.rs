mod web;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use tracing_subscriber::EnvFilter;

use robottrader::config::ServerConfig;

use web::AppState;
use web::middleware::SecurityHeaders;

fn invalid_input(e: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().map_err(invalid_input)?;
    let state = AppState::load(&config)?;
    let security = SecurityHeaders::new(config.backend.origin())
        .map_err(invalid_input)?;

    log::info!(
        "Serving {} on {}",
        config.site_root.display(),
        config.bind_addr
    );

    let data = Data::new(state.clone());
    HttpServer::new(move || {
        let state = state.clone();
        App::new()
            .app_data(data.clone())
            .wrap(security.clone())
            .wrap(Logger::default())
            .configure(|cfg| web::routes::configure(cfg, &state))
            .default_service(actix_web::web::to(web::routes::spa_fallback))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
