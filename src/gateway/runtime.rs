//! Gateway runtime integration.
//!
//! Bridges the sync game loop with the async commentary client: events go
//! in over a channel, display lines come back over another. The loop polls
//! with `try_recv` and never blocks on the service.

use std::time::Duration;

use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::core::game::CommentaryEvent;
use crate::gateway::client::fetch_line;
use crate::gateway::protocol::CommentaryRequest;
use crate::types::CommentaryAction;

/// Shown before the first throw of a session
pub const WELCOME_LINE: &str = "Size up your hoop and plan your scoring run!";
/// Shown when a new match starts after a win
pub const RESET_LINE: &str = "Fresh match! Watch the hoop in your hand!";

/// Canned line used whenever the external service cannot deliver
pub fn fallback_line(action: CommentaryAction) -> &'static str {
    match action {
        CommentaryAction::Throw => "Clean toss, ring's on the board!",
        CommentaryAction::Win => "Three points! The duel is over!",
        CommentaryAction::Miss => "Air ball! Nothing but floor!",
        CommentaryAction::Steal => "Stolen! That spot just changed hands!",
        CommentaryAction::Split => "Twin hoops! Two rings, one throw!",
        CommentaryAction::Point => "Line complete, point banked!",
    }
}

/// Gateway configuration
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Address of the commentary service; None means canned lines only
    pub addr: Option<String>,
    pub timeout_ms: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            addr: None,
            timeout_ms: 2_000,
        }
    }
}

impl GatewayConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        let addr = env::var("HOOP_COMMENTARY_ADDR")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let timeout_ms = env::var("HOOP_COMMENTARY_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(2_000);

        Self { addr, timeout_ms }
    }
}

/// Running gateway instance.
///
/// Dropping it drops the runtime along with any in-flight requests, so no
/// task leaks across a session teardown.
pub struct Gateway {
    _rt: Runtime,
    event_tx: mpsc::UnboundedSender<CommentaryEvent>,
    line_rx: mpsc::UnboundedReceiver<String>,
}

impl Gateway {
    pub fn start(config: GatewayConfig) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CommentaryEvent>();
        let (line_tx, line_rx) = mpsc::unbounded_channel::<String>();

        let rt = Runtime::new().expect("Failed to create tokio runtime");
        rt.spawn(dispatch(config, event_rx, line_tx));

        Self {
            _rt: rt,
            event_tx,
            line_rx,
        }
    }

    /// Start with configuration from environment variables.
    pub fn start_from_env() -> Self {
        Self::start(GatewayConfig::from_env())
    }

    /// Fire-and-forget: queue an event for commentary.
    pub fn describe(&self, event: CommentaryEvent) {
        let _ = self.event_tx.send(event);
    }

    /// Poll for the next display line without blocking.
    pub fn try_recv(&mut self) -> Option<String> {
        self.line_rx.try_recv().ok()
    }
}

async fn dispatch(
    config: GatewayConfig,
    mut event_rx: mpsc::UnboundedReceiver<CommentaryEvent>,
    line_tx: mpsc::UnboundedSender<String>,
) {
    let mut seq: u64 = 0;

    while let Some(event) = event_rx.recv().await {
        seq += 1;
        let config = config.clone();
        let line_tx = line_tx.clone();

        // Each request is detached so a slow service never delays the next.
        tokio::spawn(async move {
            let fallback = fallback_line(event.action);
            let line = match config.addr.as_deref() {
                Some(addr) => {
                    let request = CommentaryRequest::from_event(&event, seq);
                    let timeout = Duration::from_millis(config.timeout_ms);
                    match fetch_line(addr, &request, timeout).await {
                        Ok(text) => text,
                        Err(_) => fallback.to_string(),
                    }
                }
                None => fallback.to_string(),
            };
            let _ = line_tx.send(line);
        });
    }
}
