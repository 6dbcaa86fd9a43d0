//! Indicator engine properties: warm-up behavior, bounds, scaling.

use augur::services::indicators::{self, ema, macd, rsi, sma};
use augur::types::{Bar, Series};
use chrono::NaiveDate;

fn series(closes: &[f64]) -> Series {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| Bar {
            date: start + chrono::Days::new(i as u64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 10_000.0,
        })
        .collect();
    Series::new("TEST", bars).unwrap()
}

#[test]
fn undefined_until_warm_for_every_window() {
    let closes: Vec<f64> = (0..80).map(|i| 100.0 + (i as f64 * 0.4).cos() * 6.0).collect();

    for window in [5, 14, 20, 50] {
        let out = sma(&closes, window);
        assert!(
            out[..window - 1].iter().all(Option::is_none),
            "SMA({}) defined during warm-up",
            window
        );
        assert!(
            out[window - 1..].iter().all(Option::is_some),
            "SMA({}) undefined after warm-up",
            window
        );
    }

    let out = rsi(&closes, 14);
    assert!(out[..14].iter().all(Option::is_none));
    assert!(out[14..].iter().all(Option::is_some));

    let out = ema(&closes, 26);
    assert!(out[..25].iter().all(Option::is_none));
    assert!(out[25..].iter().all(Option::is_some));
}

#[test]
fn series_shorter_than_window_is_entirely_undefined() {
    let closes: Vec<f64> = (0..49).map(|i| 100.0 + i as f64).collect();

    assert!(sma(&closes, 50).iter().all(Option::is_none));
    assert!(ema(&closes, 50).iter().all(Option::is_none));

    let (line, signal) = macd(&closes[..20], 12, 26, 9);
    assert!(line.iter().all(Option::is_none));
    assert!(signal.iter().all(Option::is_none));
}

#[test]
fn moving_average_scales_with_input() {
    let closes: Vec<f64> = (0..60).map(|i| 80.0 + (i as f64 * 0.9).sin() * 12.0).collect();
    let k = 2.5;
    let scaled: Vec<f64> = closes.iter().map(|c| c * k).collect();

    let base = sma(&closes, 20);
    let scaled_out = sma(&scaled, 20);

    for (a, b) in base.iter().zip(scaled_out.iter()) {
        match (a, b) {
            (Some(a), Some(b)) => assert!((a * k - b).abs() < 1e-9),
            (None, None) => {}
            _ => panic!("warm-up regions diverged under scaling"),
        }
    }
}

#[test]
fn rsi_stays_in_bounds_on_arbitrary_series() {
    let closes: Vec<f64> = (0..200)
        .map(|i| {
            let i = i as f64;
            100.0 + (i * 0.31).sin() * 15.0 + (i * 0.07).cos() * 40.0
        })
        .collect();

    for v in rsi(&closes, 14).iter().flatten() {
        assert!((0.0..=100.0).contains(v), "RSI out of [0,100]: {}", v);
    }
}

#[test]
fn full_set_is_aligned_and_null_during_warm_up() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let s = series(&closes);
    let set = indicators::compute(&s);

    assert_eq!(set.ma20.len(), s.len());
    assert_eq!(set.ma50.len(), s.len());
    assert_eq!(set.rsi14.len(), s.len());
    assert_eq!(set.macd_line.len(), s.len());
    assert_eq!(set.macd_signal.len(), s.len());

    // Warm-up is None at the wire too, never a zero.
    let json = serde_json::to_value(&set).unwrap();
    assert!(json["ma50"][0].is_null());
    assert!(json["ma50"][49].is_number());
}

#[test]
fn flat_series_reads_neutral_everywhere() {
    let set = indicators::compute(&series(&[50.0; 60]));

    for v in set.ma20.iter().flatten() {
        assert_eq!(*v, 50.0);
    }
    for v in set.ma50.iter().flatten() {
        assert_eq!(*v, 50.0);
    }
    for v in set.rsi14.iter().flatten() {
        assert_eq!(*v, 50.0);
    }
    for v in set.macd_line.iter().flatten() {
        assert!(v.abs() < 1e-9);
    }
}
