//! Main entry point for the backend server.
//!
//! Initializes logging, starts the game server actor that owns the single
//! game, and launches the HTTP server with the WebSocket endpoint.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use log::info;

use server::game_session::GameServer;

pub mod config;
mod server;
mod game;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from environment variable (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Start the GameServer actor (owns the game, serializes every request).
    let game_server = GameServer::default().start();

    // Shared application state for HTTP/WebSocket handlers.
    let state = web::Data::new(server::state::AppState::new(game_server));

    let (host, port) = config::server::bind_address();
    info!("[Main] Listening on {}:{}", host, port);

    // Start the HTTP server with WebSocket endpoints.
    HttpServer::new(move || {
        App::new()
            .wrap(
                actix_web::middleware::DefaultHeaders::new()
                    .add(("Access-Control-Allow-Origin", "*"))
                    .add(("Access-Control-Allow-Headers", "*"))
            )
            .app_data(state.clone())
            .configure(crate::server::router::config)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
