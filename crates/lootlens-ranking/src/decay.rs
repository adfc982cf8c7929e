use chrono::{DateTime, Utc};

/// Recency decay factor: `rate ^ (daysStale / periodDays)`.
///
/// Range: 0.0 – 1.0 for rates below 1; exactly 1.0 when fresh.
/// Computed on fractional days, so the factor shrinks monotonically with
/// staleness and recent performance dominates older performance.
pub(crate) fn factor(
    last_updated: DateTime<Utc>,
    now: DateTime<Utc>,
    rate: f64,
    period_days: f64,
) -> f64 {
    let days_stale = (now - last_updated).num_seconds().max(0) as f64 / 86_400.0;
    rate.powf(days_stale / period_days)
}
