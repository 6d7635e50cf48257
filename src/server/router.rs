//! HTTP and WebSocket routing configuration.
//!
//! Defines the game WebSocket endpoint and a read-only state endpoint.

use actix_http::StatusCode;
use actix_web::{web, HttpResponse};
use log::warn;

use crate::server::game_session::server::GetSnapshot;
use crate::server::game_session::session::ws_game;
use crate::server::state::AppState;
use crate::server::ws_error::http_error_response;

/// Configure the application's HTTP/WebSocket routes.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/ws/game")
            .to(ws_game)
    )
    .service(
        web::resource("/state")
            .route(web::get().to(game_state))
    );
}

/// Current game state as JSON.
async fn game_state(data: web::Data<AppState>) -> HttpResponse {
    match data.game_server.send(GetSnapshot).await {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => {
            warn!("[Router] Game server unreachable: {}", e);
            http_error_response("UNAVAILABLE", "Game server unavailable", StatusCode::SERVICE_UNAVAILABLE)
        }
    }
}
