use std::time::Duration;

/// Backoff strategy applied between retry attempts.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// The same delay before every retry.
    Fixed(Duration),
    /// `base * factor^(attempt - 1)`, capped at `max`.
    Exponential {
        base: Duration,
        factor: f64,
        max: Duration,
    },
}

impl Backoff {
    /// Delay to apply before retry number `attempt` (1-based).
    pub(crate) fn delay_for(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential { base, factor, max } => {
                let exp = factor.powi(attempt.saturating_sub(1).min(i32::MAX as u32) as i32);
                let raw = base.as_secs_f64() * exp;
                // Compare in float space; from_secs_f64 panics on overflow.
                if raw.is_finite() && raw >= 0.0 && raw < max.as_secs_f64() {
                    Duration::from_secs_f64(raw)
                } else {
                    *max
                }
            }
        }
    }
}

/// Configuration for the transport-level retry mechanism.
///
/// Retries are a property of the transport, not of any one provider: a
/// request is replayed only when it never produced a usable answer (a
/// retriable status, a timeout, a failed connect). Provider-level error
/// payloads arrive with a 200 and are never retried here.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Disables retries entirely when `false`.
    pub enabled: bool,
    /// Maximum retries after the initial attempt.
    pub max_retries: u32,
    /// Delay strategy between attempts.
    pub backoff: Backoff,
    /// HTTP status codes that are worth retrying.
    pub retry_on_status: Vec<u16>,
    /// Retry when the request times out.
    pub retry_on_timeout: bool,
    /// Retry when the connection could not be established.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 3,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(250),
                factor: 2.0,
                max: Duration::from_secs(4),
            },
            retry_on_status: vec![429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}
