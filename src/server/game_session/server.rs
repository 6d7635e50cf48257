//! Game server actor.
//!
//! Owns the single `Arena` and the registry of connected WebSocket sessions.
//! Every request reaches the arena through this actor's mailbox, which makes
//! each one run to completion before the next is looked at.

use actix::prelude::*;
use std::collections::HashMap;
use actix::MessageResult;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::game::Arena;
use crate::game::Game;
use crate::game::types::{Action, JoinOutcome, PlayerId};
use crate::server::game_session::messages::{Rejected, ServerWsMessage};
use crate::server::game_session::session::GameSessionActor;

pub type ConnectionId = Uuid;

pub struct GameServer {
    arena: Arena,
    /// Every open connection, players and spectators alike.
    sessions: HashMap<ConnectionId, Addr<GameSessionActor>>,
    /// Connection holding each seat.
    seats: HashMap<ConnectionId, PlayerId>,
}

impl GameServer {
    pub fn new(arena: Arena) -> Self {
        Self {
            arena,
            sessions: HashMap::new(),
            seats: HashMap::new(),
        }
    }

    fn reply(&self, conn_id: ConnectionId, msg: ServerWsMessage) {
        if let Some(addr) = self.sessions.get(&conn_id) {
            addr.do_send(msg);
        }
    }

    fn reject(&self, conn_id: ConnectionId, rejected: Rejected) {
        if let Some(addr) = self.sessions.get(&conn_id) {
            addr.do_send(rejected);
        }
    }

    /// Broadcast the current game state to every connection.
    pub fn send_state(&self) {
        let state = self.arena.snapshot();
        debug!(
            "[GameServer] Broadcast GameState: status={:?} turn={:?} sessions={}",
            state.status,
            state.current_turn,
            self.sessions.len()
        );
        for addr in self.sessions.values() {
            addr.do_send(ServerWsMessage::GameState(state.clone()));
        }
    }
}

impl Default for GameServer {
    fn default() -> Self {
        Self::new(Arena::default())
    }
}

impl Actor for GameServer {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        info!("[GameServer] Started, grid {0}x{0}", self.arena.snapshot().grid_size);
    }
}

/// Message: a WebSocket connection opened.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Connect {
    pub conn_id: ConnectionId,
    pub addr: Addr<GameSessionActor>,
}

/// Message: a WebSocket connection closed. Its seat, if any, is given up.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Disconnect {
    pub conn_id: ConnectionId,
}

/// Message: a connection asks for a seat.
#[derive(Message)]
#[rtype(result = "()")]
pub struct JoinGame {
    pub conn_id: ConnectionId,
    pub name: String,
    pub color: String,
    pub grid_size: Option<i32>,
}

/// Message: the player seated on this connection acts.
#[derive(Message)]
#[rtype(result = "()")]
pub struct PlayerAction {
    pub conn_id: ConnectionId,
    pub action: Action,
}

/// Message: start a new game once the current one is finished.
#[derive(Message)]
#[rtype(result = "()")]
pub struct ResetGame {
    pub conn_id: ConnectionId,
}

/// Message: read an independent copy of the game state.
#[derive(Message)]
#[rtype(result = "Game")]
pub struct GetSnapshot;

impl Handler<Connect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Connect, _: &mut Context<Self>) -> Self::Result {
        debug!("[GameServer] Connection {} opened", msg.conn_id);
        msg.addr.do_send(ServerWsMessage::GameState(self.arena.snapshot()));
        self.sessions.insert(msg.conn_id, msg.addr);
    }
}

impl Handler<Disconnect> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: Disconnect, _: &mut Context<Self>) -> Self::Result {
        self.sessions.remove(&msg.conn_id);
        debug!("[GameServer] Connection {} closed", msg.conn_id);
        if let Some(player_id) = self.seats.remove(&msg.conn_id) {
            self.arena.leave(player_id);
            self.send_state();
        }
    }
}

impl Handler<JoinGame> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: JoinGame, _: &mut Context<Self>) -> Self::Result {
        if self.seats.contains_key(&msg.conn_id) {
            self.reject(msg.conn_id, Rejected::new("ALREADY_JOINED", "This connection already holds a seat"));
            return;
        }
        match self.arena.join(&msg.name, &msg.color, msg.grid_size) {
            Ok(JoinOutcome::Player(player)) => {
                self.seats.insert(msg.conn_id, player.id);
                self.reply(msg.conn_id, ServerWsMessage::Joined { player });
                self.send_state();
            }
            Ok(JoinOutcome::Spectator) => {
                debug!("[GameServer] Connection {} spectates (game {:?})", msg.conn_id, self.arena.status());
                self.reply(msg.conn_id, ServerWsMessage::Spectating);
            }
            Err(e) => self.reject(msg.conn_id, Rejected::from(&e)),
        }
    }
}

impl Handler<PlayerAction> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: PlayerAction, _: &mut Context<Self>) -> Self::Result {
        let Some(player_id) = self.seats.get(&msg.conn_id).copied() else {
            warn!("[GameServer] Action from unseated connection {}", msg.conn_id);
            self.reject(msg.conn_id, Rejected::new("NOT_A_PLAYER", "Spectators cannot send commands"));
            return;
        };
        match self.arena.request_action(player_id, msg.action) {
            Ok(()) => self.send_state(),
            Err(e) => self.reject(msg.conn_id, Rejected::from(&e)),
        }
    }
}

impl Handler<ResetGame> for GameServer {
    type Result = ();

    fn handle(&mut self, msg: ResetGame, _: &mut Context<Self>) -> Self::Result {
        if let Err(e) = self.arena.reset() {
            self.reject(msg.conn_id, Rejected::from(&e));
            return;
        }
        self.seats.clear();
        for addr in self.sessions.values() {
            addr.do_send(ServerWsMessage::SeatReleased);
        }
        self.send_state();
    }
}

impl Handler<GetSnapshot> for GameServer {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.arena.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{GameStatus, Position};

    async fn join(addr: &Addr<GameServer>, conn_id: ConnectionId, name: &str) {
        addr.send(JoinGame {
            conn_id,
            name: name.to_string(),
            color: "#336699".to_string(),
            grid_size: Some(8),
        })
        .await
        .unwrap();
    }

    #[actix::test]
    async fn test_seats_follow_connections() {
        let addr = GameServer::default().start();
        let conns: Vec<ConnectionId> = (0..4).map(|_| Uuid::new_v4()).collect();
        for (i, conn) in conns.iter().enumerate() {
            join(&addr, *conn, &format!("p{}", i)).await;
        }
        // A second join from a seated connection is refused.
        join(&addr, conns[0], "again").await;

        let state = addr.send(GetSnapshot).await.unwrap();
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.grid_size, 8);
        assert_eq!(state.players.len(), 4);

        addr.send(PlayerAction { conn_id: conns[0], action: Action::Move(Position::new(0, 2)) })
            .await
            .unwrap();
        // Unseated connections cannot act.
        addr.send(PlayerAction { conn_id: Uuid::new_v4(), action: Action::Move(Position::new(7, 1)) })
            .await
            .unwrap();

        let state = addr.send(GetSnapshot).await.unwrap();
        assert_eq!(state.players[0].position, Some(Position::new(0, 2)));
        assert_eq!(state.current_turn, Some(state.players[1].id));
        assert_eq!(state.players[1].position, Some(Position::new(7, 0)));

        for conn in &conns[1..] {
            addr.send(Disconnect { conn_id: *conn }).await.unwrap();
        }
        let state = addr.send(GetSnapshot).await.unwrap();
        assert_eq!(state.status, GameStatus::Finished);
        assert_eq!(state.winner, Some(state.players[0].id));

        addr.send(ResetGame { conn_id: conns[0] }).await.unwrap();
        let state = addr.send(GetSnapshot).await.unwrap();
        assert_eq!(state, Game::new(8));
    }
}
