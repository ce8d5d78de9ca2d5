//! Retry governance for generation calls.
//!
//! One generation invocation drives a small closed state machine:
//! `Attempting(n)` for n = 1..=3, resolving to success, a terminal failure,
//! or exhaustion after the third retryable failure. The backoff between
//! attempts is `min(1000ms * 2^(n-1), 10000ms)`.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::GeminiError;

/// Total attempts per generation invocation.
pub const MAX_ATTEMPTS: u32 = 3;

const INITIAL_DELAY: Duration = Duration::from_millis(1000);
const MAX_DELAY: Duration = Duration::from_millis(10_000);

/// Where the loop goes after attempt `n` resolves.
#[derive(Debug)]
enum Step<T> {
    Succeeded(T),
    /// Suspend for `delay`, then run `next_attempt`. Carries the error that
    /// triggered the retry so it can be reported.
    Backoff {
        next_attempt: u32,
        delay: Duration,
        last_error: GeminiError,
    },
    FailedTerminal(GeminiError),
    FailedExhausted(GeminiError),
}

/// Backoff duration after a retryable failure of attempt `n`.
fn backoff_delay(attempt: u32) -> Duration {
    INITIAL_DELAY
        .saturating_mul(1u32 << (attempt - 1))
        .min(MAX_DELAY)
}

/// Transition table for one resolved attempt.
fn transition<T>(attempt: u32, outcome: Result<T, GeminiError>) -> Step<T> {
    match outcome {
        Ok(value) => Step::Succeeded(value),
        Err(e) if !e.is_retryable() => Step::FailedTerminal(e),
        Err(e) if attempt >= MAX_ATTEMPTS => Step::FailedExhausted(e),
        Err(e) => Step::Backoff {
            next_attempt: attempt + 1,
            delay: backoff_delay(attempt),
            last_error: e,
        },
    }
}

/// Drive `call` through the retry state machine until it resolves.
///
/// `call` receives the 1-based attempt number. Terminal failures propagate
/// unchanged; a retryable failure on the final attempt is wrapped in
/// [`GeminiError::RetriesExhausted`].
pub async fn run_with_retry<T, F, Fut>(mut call: F) -> Result<T, GeminiError>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, GeminiError>>,
{
    let mut attempt = 1;
    loop {
        match transition(attempt, call(attempt).await) {
            Step::Succeeded(value) => return Ok(value),
            Step::FailedTerminal(e) => return Err(e),
            Step::FailedExhausted(e) => return Err(GeminiError::RetriesExhausted(Box::new(e))),
            Step::Backoff {
                next_attempt,
                delay,
                last_error,
            } => {
                warn!(
                    "Attempt {} failed: {}. Retrying in {}ms",
                    attempt,
                    last_error,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
                attempt = next_attempt;
            }
        }
    }
}
