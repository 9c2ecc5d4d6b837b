//! Return series and daily-volatility estimation

use statrs::statistics::Statistics;

/// Day-over-day percentage returns of a price series.
///
/// Pairs with a zero base price are skipped; a ratio against zero has no
/// meaningful return.
pub fn pct_returns(prices: &[f64]) -> Vec<f64> {
    if prices.len() < 2 {
        return Vec::new();
    }

    prices
        .windows(2)
        .filter(|w| w[0] != 0.0)
        .map(|w| w[1] / w[0] - 1.0)
        .collect()
}

/// Sample standard deviation of daily returns.
///
/// Falls back to `fallback` when the estimate is undefined: fewer than
/// two valid returns, zero variance, or a non-finite result.
pub fn daily_return_volatility(prices: &[f64], fallback: f64) -> f64 {
    let returns = pct_returns(prices);
    if returns.len() < 2 {
        log::debug!(
            "not enough returns for a volatility estimate, using fallback {}",
            fallback
        );
        return fallback;
    }

    let std_dev = returns.iter().std_dev();
    if !std_dev.is_finite() || std_dev == 0.0 {
        log::debug!("degenerate volatility estimate, using fallback {}", fallback);
        return fallback;
    }

    std_dev
}
