//! Deferred payment step
//!
//! Simulates gateway latency: waits the configured delay, then runs the
//! completion closure (which records the sale). Cancelling the token before
//! the delay elapses abandons the order and nothing is recorded.

use shared::AppResult;
use shared::models::Sale;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Final state of a checkout submission
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Completed(Sale),
    /// Recording failed after the delay
    Failed(String),
    /// Cancelled before the delay elapsed
    Abandoned,
}

impl PaymentOutcome {
    pub fn sale(&self) -> Option<&Sale> {
        match self {
            PaymentOutcome::Completed(sale) => Some(sale),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaymentTask {
    delay: Duration,
    token: CancellationToken,
}

impl PaymentTask {
    pub fn new(delay: Duration, token: CancellationToken) -> Self {
        Self { delay, token }
    }

    pub async fn run<F>(self, complete: F) -> PaymentOutcome
    where
        F: FnOnce() -> AppResult<Sale>,
    {
        tokio::select! {
            biased;
            _ = self.token.cancelled() => {
                tracing::info!("Payment abandoned before completion");
                return PaymentOutcome::Abandoned;
            }
            _ = tokio::time::sleep(self.delay) => {}
        }

        match complete() {
            Ok(sale) => PaymentOutcome::Completed(sale),
            Err(e) => {
                tracing::error!(code = %e.code, error = %e, "Payment completion failed");
                PaymentOutcome::Failed(e.message)
            }
        }
    }
}
