//! Flood protection for one WebSocket connection.
//!
//! Each `GameSessionActor` owns its own `AntiSpamState`, labelled with the
//! connection id, so limits and bans never leak between connections.

use std::time::{Duration, Instant};
use log::warn;

use crate::config::anti_spam::{BAN_DURATION_SECONDS, MAX_REQUESTS_PER_SECOND, MAX_RESPONSES_PER_SECOND};

/// What to do with an outgoing frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Send,
    /// Same transport error as the last one; drop it.
    Suppress,
    Ban,
}

/// Counter over a one-second window.
#[derive(Debug)]
struct RateWindow {
    opened: Instant,
    seen: u32,
    limit: u32,
}

impl RateWindow {
    fn new(limit: u32) -> Self {
        Self { opened: Instant::now(), seen: 0, limit }
    }

    /// Count one event. Returns true once the limit is exceeded.
    fn hit(&mut self, now: Instant) -> bool {
        if now.duration_since(self.opened) >= Duration::from_secs(1) {
            self.opened = now;
            self.seen = 0;
        }
        self.seen += 1;
        self.seen > self.limit
    }
}

#[derive(Debug)]
pub struct AntiSpamState {
    connection: String,
    requests: RateWindow,
    replies: RateWindow,
    /// Last transport error sent, as `(code, message)`.
    last_error: Option<(String, String)>,
    banned_until: Option<Instant>,
}

impl AntiSpamState {
    pub fn new(connection: impl Into<String>) -> Self {
        Self {
            connection: connection.into(),
            requests: RateWindow::new(MAX_REQUESTS_PER_SECOND),
            replies: RateWindow::new(MAX_RESPONSES_PER_SECOND),
            last_error: None,
            banned_until: None,
        }
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }

    /// Count an incoming frame. Returns true if the connection is banned.
    pub fn record_request(&mut self) -> bool {
        if self.requests.hit(Instant::now()) {
            self.ban("too many requests per second");
        }
        self.is_banned()
    }

    /// Screen a direct reply, game rejections included. Broadcasts are not
    /// screened. Replies are rate limited but never suppressed.
    pub fn screen_reply(&mut self) -> Verdict {
        if self.replies.hit(Instant::now()) {
            self.ban("too many responses per second");
        }
        if self.is_banned() {
            Verdict::Ban
        } else {
            Verdict::Send
        }
    }

    /// Screen a transport error (bad frame, duplicate join). An error
    /// identical to the previous one is suppressed until the game state
    /// changes.
    pub fn screen_error(&mut self, code: &str, message: &str) -> Verdict {
        let repeated = self
            .last_error
            .as_ref()
            .is_some_and(|(c, m)| c == code && m == message);
        if repeated {
            warn!("[AntiSpam] Suppressed repeated error '{}' for connection={}", code, self.connection);
            return Verdict::Suppress;
        }
        self.last_error = Some((code.to_string(), message.to_string()));
        self.screen_reply()
    }

    /// Forget the last transport error, e.g. after a state broadcast.
    pub fn reset_error_suppression(&mut self) {
        self.last_error = None;
    }

    pub fn is_banned(&self) -> bool {
        self.banned_until.is_some_and(|until| Instant::now() < until)
    }

    /// Remaining ban in seconds, 0 when not banned.
    pub fn ban_remaining_secs(&self) -> u64 {
        self.banned_until
            .map(|until| until.saturating_duration_since(Instant::now()).as_secs())
            .unwrap_or(0)
    }

    fn ban(&mut self, reason: &str) {
        let until = Instant::now() + Duration::from_secs(BAN_DURATION_SECONDS);
        self.banned_until = Some(until);
        warn!("[AntiSpam] Banned connection={} for {}s: {}", self.connection, BAN_DURATION_SECONDS, reason);
    }
}
