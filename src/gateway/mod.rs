//! Commentary gateway - fire-and-forget flavor lines from an external service
//!
//! The game loop deposits a `CommentaryEvent` after each resolved throw; the
//! gateway ships it to a line-JSON service over TCP on its own tokio runtime
//! and hands back a display line through a channel. Every failure path
//! (unconfigured address, connect/timeout/parse errors, empty text) degrades
//! to a canned line for the action - the caller never sees an error and
//! never waits.

pub mod client;
pub mod protocol;
pub mod runtime;

pub use protocol::{CommentaryRequest, CommentaryResponse};
pub use runtime::{fallback_line, Gateway, GatewayConfig, RESET_LINE, WELCOME_LINE};
