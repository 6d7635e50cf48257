use actix_web_actors::ws;
use serde_json::Value;
use actix::ActorContext;

use crate::server::ws_error::ws_error_message;
use crate::server::anti_spam::{AntiSpamState, Verdict};

/// Helper trait for WebSocket actors: error replies, anti-spam and bans.
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;

    /// Send a ban message, close the socket and stop the actor.
    fn send_ban_and_close<A>(&mut self, ctx: &mut ws::WebsocketContext<A>)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let anti_spam = self.anti_spam();
        let context = serde_json::json!({
            "connection": anti_spam.connection(),
            "ban_remaining_secs": anti_spam.ban_remaining_secs()
        });
        ctx.text(ws_error_message(
            "BANNED",
            "You have been banned for spamming. Please try again later.",
            Some(context),
        ));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Banned for spam".into()),
        }));
        ctx.stop();
    }

    /// Act on a verdict: send the frame, drop it, or ban.
    fn deliver<A>(&mut self, ctx: &mut ws::WebsocketContext<A>, verdict: Verdict, text: String)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        match verdict {
            Verdict::Send => ctx.text(text),
            Verdict::Suppress => {}
            Verdict::Ban => self.send_ban_and_close(ctx),
        }
    }

    /// Send a transport error; repeats of the last one are suppressed.
    fn send_error_and_maybe_ban<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        code: &str,
        message: &str,
        context: Option<Value>,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let verdict = self.anti_spam().screen_error(code, message);
        self.deliver(ctx, verdict, ws_error_message(code, message, context));
    }

    /// Send a JSON response, or ban if the anti-spam limit is exceeded.
    fn send_json_or_ban<A>(
        &mut self,
        ctx: &mut ws::WebsocketContext<A>,
        json_str: String,
    )
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let verdict = self.anti_spam().screen_reply();
        self.deliver(ctx, verdict, json_str);
    }
}
