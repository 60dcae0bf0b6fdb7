#[cfg(test)]
mod tests {
    use super::super::indicators::*;
    use metrics_core::Bar;

    fn sample_prices() -> Vec<f64> {
        vec![
            44.34, 44.09, 44.15, 43.61, 44.33, 44.83, 45.10, 45.42, 45.84, 46.08,
            45.89, 46.03, 45.61, 46.28, 46.28, 46.00, 46.03, 46.41, 46.22, 45.64,
        ]
    }

    fn sample_bars() -> Vec<Bar> {
        let ohlc = vec![
            (100.0, 102.0, 99.0, 101.0),
            (101.0, 103.0, 100.0, 102.0),
            (102.0, 104.0, 101.0, 103.0),
            (103.0, 105.0, 102.0, 104.0),
            (104.0, 106.0, 103.0, 105.0),
            (105.0, 107.0, 104.0, 106.0),
            (106.0, 108.0, 105.0, 107.0),
            (107.0, 109.0, 106.0, 108.0),
            (108.0, 110.0, 107.0, 109.0),
            (109.0, 111.0, 108.0, 110.0),
            (110.0, 112.0, 109.0, 111.0),
            (111.0, 113.0, 110.0, 112.0),
            (112.0, 114.0, 111.0, 113.0),
            (113.0, 115.0, 112.0, 114.0),
            (114.0, 116.0, 113.0, 115.0),
            (115.0, 117.0, 114.0, 116.0),
        ];

        ohlc.into_iter()
            .enumerate()
            .map(|(i, (open, high, low, close))| Bar {
                timestamp: chrono::DateTime::from_timestamp(i as i64 * 86_400, 0).unwrap(),
                open,
                high,
                low,
                close,
                volume: 1_000_000.0,
            })
            .collect()
    }

    #[test]
    fn test_sma_basic() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        // trailing window: (3+4+5)/3
        assert!((sma(&data, 3).unwrap() - 4.0).abs() < 0.001);
        assert!((sma(&data, 5).unwrap() - 3.0).abs() < 0.001);
    }

    #[test]
    fn test_sma_insufficient_data() {
        assert_eq!(sma(&[1.0, 2.0], 5), None);
        assert_eq!(sma(&[1.0, 2.0], 0), None);
    }

    #[test]
    fn test_sma_exact_window_length() {
        let prices = sample_prices();
        let expected: f64 = prices.iter().sum::<f64>() / prices.len() as f64;
        assert!((sma(&prices, prices.len()).unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ema_seeds_with_sma() {
        let data = vec![22.0, 24.0, 23.0];
        // With no values after the seed window, EMA equals the seed SMA
        let expected = (22.0 + 24.0 + 23.0) / 3.0;
        assert!((ema(&data, 3).unwrap() - expected).abs() < 0.01);
    }

    #[test]
    fn test_ema_tracks_uptrend_above_sma_seed() {
        let data: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let e = ema(&data, 3).unwrap();
        // EMA after a steady rise sits between the seed and the last price
        assert!(e > 2.0 && e < 10.0);
        assert!(e > sma(&data[..5], 3).unwrap());
    }

    #[test]
    fn test_ema_empty_data() {
        assert_eq!(ema(&[], 5), None);
    }

    #[test]
    fn test_rsi_bounded() {
        let value = rsi(&sample_prices(), 14).unwrap();
        assert!((0.0..=100.0).contains(&value));
    }

    #[test]
    fn test_rsi_all_gains_saturates() {
        let data: Vec<f64> = (1..=20).map(|i| i as f64).collect();
        assert_eq!(rsi(&data, 14), Some(100.0));
    }

    #[test]
    fn test_rsi_insufficient_data() {
        assert_eq!(rsi(&sample_prices()[..14], 14), None);
    }

    #[test]
    fn test_stochastic_bounds_and_uptrend() {
        let bars = sample_bars();
        let (k, d) = stochastic(&bars, 14, 3);
        let k = k.unwrap();
        let d = d.unwrap();
        assert!((0.0..=100.0).contains(&k));
        assert!((0.0..=100.0).contains(&d));
        // Close at the top of a rising range sits high in the band
        assert!(k > 80.0);
    }

    #[test]
    fn test_stochastic_insufficient_data() {
        let bars = sample_bars();
        let (k, d) = stochastic(&bars[..10], 14, 3);
        assert_eq!(k, None);
        assert_eq!(d, None);
        // Enough for %K but not for %D
        let (k, d) = stochastic(&bars[..14], 14, 3);
        assert!(k.is_some());
        assert_eq!(d, None);
    }

    #[test]
    fn test_williams_r_bounds() {
        let bars = sample_bars();
        let wr = williams_r(&bars, 14).unwrap();
        assert!((-100.0..=0.0).contains(&wr));
        // Rising close near the top of the range: %R near 0
        assert!(wr > -20.0);
        assert_eq!(williams_r(&bars[..5], 14), None);
    }

    #[test]
    fn test_cci_positive_in_uptrend() {
        let bars = sample_bars();
        let value = cci(&bars, 14).unwrap();
        assert!(value > 0.0);
    }

    #[test]
    fn test_cci_flat_window_absent() {
        let bars: Vec<Bar> = (0..20)
            .map(|i| Bar {
                timestamp: chrono::DateTime::from_timestamp(i * 86_400, 0).unwrap(),
                open: 50.0,
                high: 50.0,
                low: 50.0,
                close: 50.0,
                volume: 1.0,
            })
            .collect();
        // Zero mean deviation makes the index undefined
        assert_eq!(cci(&bars, 14), None);
    }

    #[test]
    fn test_mfi_bounds() {
        let bars = sample_bars();
        let value = mfi(&bars, 14).unwrap();
        assert!((0.0..=100.0).contains(&value));
        // Every typical price rises, so all flow is positive
        assert_eq!(value, 100.0);
        assert_eq!(mfi(&bars[..14], 14), None);
    }
}
