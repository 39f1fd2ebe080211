//! docsum HTTP server
//!
//! Actix-web JSON API over the session store and generation workflow

pub mod routes;
pub mod session;
pub mod state;
pub mod types;
pub mod workflow;

#[cfg(test)]
mod test_support;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use docsum_common::{AppConfig, Result};
use docsum_llm::OpenAiClient;
use std::sync::Arc;
use tracing::info;
use tracing_actix_web::TracingLogger;

pub use session::{Session, SessionStore};
pub use state::AppState;
pub use workflow::{GenerationOutcome, GenerationWorkflow, Selection, EMPTY_INPUT_WARNING};

/// Start the HTTP server and run until it stops
pub async fn start_server(config: AppConfig) -> Result<()> {
    let bind_addr = config.server_bind_address();
    let client = OpenAiClient::from_config(&config)?;
    let state = web::Data::new(Arc::new(AppState::new(config, Arc::new(client))));

    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("HTTP server stopped");
    Ok(())
}
