//! Signal detector: per-bar Buy/Sell/Hold from the MA20/MA50 pair.

use crate::types::{Series, Signal, SignalEvent, SignalPolicy};

/// Classify every bar from the two moving-average sequences.
///
/// The sequences must be index-aligned with each other (they come out of
/// the indicator engine that way). Bars where either average is undefined
/// are Hold under both policies.
///
/// Level policy: Buy/Sell whenever MA20 is above/below MA50.
///
/// Crossover policy: fires only on the bar where the relative order
/// changes. A bar whose previous averages are undefined counts as "was
/// not above/below", so the first fully-defined bar of a trend fires
/// exactly once.
pub fn detect(
    ma_short: &[Option<f64>],
    ma_long: &[Option<f64>],
    policy: SignalPolicy,
) -> Vec<Signal> {
    debug_assert_eq!(ma_short.len(), ma_long.len());
    let n = ma_short.len().min(ma_long.len());
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        let (Some(s), Some(l)) = (ma_short[i], ma_long[i]) else {
            out.push(Signal::Hold);
            continue;
        };

        let signal = match policy {
            SignalPolicy::Level => {
                if s > l {
                    Signal::Buy
                } else if s < l {
                    Signal::Sell
                } else {
                    Signal::Hold
                }
            }
            SignalPolicy::Crossover => {
                let prev = if i > 0 {
                    ma_short[i - 1].zip(ma_long[i - 1])
                } else {
                    None
                };
                let was_above = prev.map(|(ps, pl)| ps > pl).unwrap_or(false);
                let was_below = prev.map(|(ps, pl)| ps < pl).unwrap_or(false);

                if s > l && !was_above {
                    Signal::Buy
                } else if s < l && !was_below {
                    Signal::Sell
                } else {
                    Signal::Hold
                }
            }
        };
        out.push(signal);
    }

    out
}

/// Most recent non-Hold signal with the date it fired.
///
/// The signals must be index-aligned with the series they were computed
/// from. Under the crossover policy this is the answer to "when did the
/// trend last turn" — the final bar's signal alone is usually Hold.
pub fn latest_event(series: &Series, signals: &[Signal]) -> Option<SignalEvent> {
    let dates = series.dates();

    signals
        .iter()
        .enumerate()
        .rev()
        .find(|(_, s)| **s != Signal::Hold)
        .and_then(|(i, s)| {
            dates.get(i).map(|date| SignalEvent {
                signal: *s,
                date: *date,
            })
        })
}
