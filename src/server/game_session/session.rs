/// WebSocket session handler for the game.
///
/// This actor manages a single client connection. Every connection starts as a
/// spectator and receives state broadcasts; sending `Join` (or connecting with
/// `name` and `color` query parameters) asks the game server for a seat.
use actix::prelude::*;
use actix_web::{web, Error, HttpRequest, HttpResponse};
use actix_web_actors::ws;
use std::borrow::Cow;
use uuid::Uuid;
use log::{debug, warn};

use super::messages::{ClientWsMessage, Rejected, ServerWsMessage};
use super::server::{Connect, ConnectionId, Disconnect, GameServer, JoinGame, PlayerAction, ResetGame};
use crate::server::anti_spam::{AntiSpamState, Verdict};
use crate::server::ws_error::ws_error_message;
use crate::server::ws_actor_utils::WsActorUtils;

/// Seat request carried by the connection URL.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinRequest {
    pub name: String,
    pub color: String,
    pub grid_size: Option<i32>,
}

pub struct GameSessionActor {
    pub conn_id: ConnectionId,
    pub server_addr: Addr<GameServer>,
    /// Sent once the session is registered.
    pub auto_join: Option<JoinRequest>,
    seated: bool,
    anti_spam: AntiSpamState,
}

impl GameSessionActor {
    pub fn new(server_addr: Addr<GameServer>, auto_join: Option<JoinRequest>) -> Self {
        let conn_id = Uuid::new_v4();
        Self {
            conn_id,
            server_addr,
            auto_join,
            seated: false,
            anti_spam: AntiSpamState::new(conn_id.to_string()),
        }
    }

    /// Every rejected command gets its own reply, even when it repeats the
    /// previous one; only the reply rate is limited.
    fn screen_rejection(&mut self, msg: &Rejected) -> Verdict {
        debug!("[GameSession] Rejected {} on {}: {}", msg.code, self.conn_id, msg.message);
        self.anti_spam.screen_reply()
    }

    fn request_join(&self, request: JoinRequest) {
        self.server_addr.do_send(JoinGame {
            conn_id: self.conn_id,
            name: request.name,
            color: request.color,
            grid_size: request.grid_size,
        });
    }

    fn handle_client_message(&mut self, msg: ClientWsMessage, ctx: &mut ws::WebsocketContext<Self>) {
        if let Some(action) = msg.as_action() {
            self.server_addr.do_send(PlayerAction { conn_id: self.conn_id, action });
            return;
        }
        match msg {
            ClientWsMessage::Join { name, color, grid_size } => {
                if self.seated {
                    self.send_error_and_maybe_ban(ctx, "ALREADY_JOINED", "This connection already holds a seat", None);
                    return;
                }
                self.request_join(JoinRequest { name, color, grid_size });
            }
            ClientWsMessage::Reset => {
                self.server_addr.do_send(ResetGame { conn_id: self.conn_id });
            }
            ClientWsMessage::Ping => match serde_json::to_string(&ServerWsMessage::Pong) {
                Ok(text) => self.send_json_or_ban(ctx, text),
                Err(e) => warn!("[GameSession] Failed to serialize Pong: {}", e),
            },
            // Actions were forwarded above.
            ClientWsMessage::Move(_) | ClientWsMessage::Attack(_) | ClientWsMessage::PlaceObstacle(_) => {}
        }
    }
}

impl WsActorUtils for GameSessionActor {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Registers the connection with the game server, then requests a seat if
    /// the URL asked for one.
    fn started(&mut self, ctx: &mut Self::Context) {
        self.server_addr.do_send(Connect {
            conn_id: self.conn_id,
            addr: ctx.address(),
        });
        if let Some(request) = self.auto_join.take() {
            self.request_join(request);
        }
    }

    /// Gives the seat up, if any.
    fn stopped(&mut self, _ctx: &mut Self::Context) {
        self.server_addr.do_send(Disconnect { conn_id: self.conn_id });
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                if self.anti_spam.record_request() {
                    self.send_ban_and_close(ctx);
                    return;
                }
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(msg) => self.handle_client_message(msg, ctx),
                    Err(e) => {
                        debug!("[GameSession] Invalid message from {}: {}", self.conn_id, e);
                        self.send_error_and_maybe_ban(ctx, "INVALID_MESSAGE", "Invalid client message", None);
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[GameSession] Protocol error on {}: {}", self.conn_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

// Handler pour recevoir les messages du serveur de jeu
impl Handler<ServerWsMessage> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: ServerWsMessage, ctx: &mut Self::Context) -> Self::Result {
        match &msg {
            ServerWsMessage::Joined { .. } => self.seated = true,
            ServerWsMessage::SeatReleased => self.seated = false,
            ServerWsMessage::GameState(_) => self.anti_spam.reset_error_suppression(),
            ServerWsMessage::Spectating | ServerWsMessage::Pong => {}
        }
        match serde_json::to_string(&msg) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[GameSession] Failed to serialize ServerWsMessage: {}", e);
                ctx.text(r#"{"action":"Error","data":{"code":"INTERNAL","message":"Internal server error"}}"#);
            }
        }
    }
}

impl Handler<Rejected> for GameSessionActor {
    type Result = ();

    fn handle(&mut self, msg: Rejected, ctx: &mut Self::Context) -> Self::Result {
        let verdict = self.screen_rejection(&msg);
        let context = serde_json::json!({ "connection": self.conn_id });
        self.deliver(ctx, verdict, ws_error_message(&msg.code, &msg.message, Some(context)));
    }
}

/// Parse the optional seat request from the query string.
///
/// Both `name` and `color` are needed; `grid_size` is optional.
pub fn parse_join_query(query: &str) -> Option<JoinRequest> {
    let mut name = None;
    let mut color = None;
    let mut grid_size = None;

    for kv in query.split('&') {
        let mut split = kv.splitn(2, '=');
        let value = |raw: &str| {
            urlencoding::decode(raw)
                .unwrap_or_else(|_| Cow::Borrowed(""))
                .into_owned()
        };
        match (split.next(), split.next()) {
            (Some("name"), Some(raw)) => name = Some(value(raw)),
            (Some("color"), Some(raw)) => color = Some(value(raw)),
            (Some("grid_size"), Some(raw)) => grid_size = raw.parse::<i32>().ok(),
            _ => {}
        }
    }

    Some(JoinRequest { name: name?, color: color?, grid_size })
}

/// WebSocket endpoint for the game.
///
/// Optional query parameters: `name`, `color` (URL-encoded, e.g. `%23ff0000`)
/// and `grid_size`. When `name` and `color` are present the connection asks
/// for a seat right away.
pub async fn ws_game(
    req: HttpRequest,
    stream: web::Payload,
    data: web::Data<crate::server::state::AppState>,
) -> Result<HttpResponse, Error> {
    let auto_join = parse_join_query(req.query_string());
    ws::start(
        GameSessionActor::new(data.game_server.clone(), auto_join),
        &req,
        stream,
    )
}
