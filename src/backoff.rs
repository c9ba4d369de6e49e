use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Policy deciding how long to wait after the API reports rate limiting.
///
/// One instance is shared by every request of a run so that it tracks the
/// pressure on the remote limiter as a whole.
#[async_trait]
pub trait Backoff: Send {
    /// Sleep for the current delay, then grow it.
    async fn wait(&mut self);

    /// Shrink the delay after a successful request.
    fn decrease(&mut self);

    /// Return to the initial delay.
    fn reset(&mut self);
}

/// A pair of consecutive Fibonacci numbers; `curr` is the next delay in units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciState {
    pub prev: u32,
    pub curr: u32,
}

impl FibonacciState {
    pub const INITIAL: FibonacciState = FibonacciState { prev: 1, curr: 1 };
}

impl Default for FibonacciState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Backoff whose delay walks the Fibonacci sequence: forward on every wait,
/// backward on every success, never below one unit.
#[derive(Debug, Clone)]
pub struct FibonacciBackoff {
    state: FibonacciState,
    unit: Duration,
}

impl FibonacciBackoff {
    pub fn new() -> Self {
        Self::with_unit(Duration::from_secs(1))
    }

    pub fn with_unit(unit: Duration) -> Self {
        Self {
            state: FibonacciState::INITIAL,
            unit,
        }
    }

    pub fn state(&self) -> FibonacciState {
        self.state
    }

    /// How long the next `wait` will sleep.
    pub fn delay(&self) -> Duration {
        self.unit.saturating_mul(self.state.curr)
    }

    /// Step forward; the pair stops growing once the next value would overflow.
    fn advance(&mut self) {
        let FibonacciState { prev, curr } = self.state;
        if let Some(next) = prev.checked_add(curr) {
            self.state = FibonacciState { prev: curr, curr: next };
        }
    }
}

impl Default for FibonacciBackoff {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Backoff for FibonacciBackoff {
    async fn wait(&mut self) {
        let delay = self.delay();
        debug!(?delay, "backing off");
        tokio::time::sleep(delay).await;
        self.advance();
        debug!(prev = self.state.prev, curr = self.state.curr, "backoff grown");
    }

    fn decrease(&mut self) {
        let FibonacciState { prev, curr } = self.state;
        if curr <= 2 {
            self.state.curr = 1;
        } else {
            self.state = FibonacciState {
                prev: curr - prev,
                curr: prev,
            };
        }
        debug!(prev = self.state.prev, curr = self.state.curr, "backoff shrunk");
    }

    fn reset(&mut self) {
        self.state = FibonacciState::INITIAL;
        debug!("backoff reset");
    }
}
