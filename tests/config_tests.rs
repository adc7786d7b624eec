use chart_axis::{AxisRange, LinearTicker, TickStepStrategy, Ticker, TickerConfig};

#[test]
fn test_config_defaults() {
    let config = TickerConfig::default();
    assert_eq!(config.strategy, TickStepStrategy::Readability);
    assert_eq!(config.tick_count, 5);
    assert_eq!(config.tick_origin, 0.0);
}

#[test]
fn test_config_json_round_trip() {
    let config = TickerConfig {
        strategy: TickStepStrategy::MeetTickCount,
        tick_count: 8,
        tick_origin: 0.5,
    };
    let json = config.to_json().expect("serialization should not fail");
    let parsed = TickerConfig::from_json(&json).expect("round trip should parse");
    assert_eq!(parsed, config);
}

#[test]
fn test_config_rejects_malformed_json() {
    assert!(TickerConfig::from_json("{not json").is_err());
}

#[test]
fn test_ticker_from_config() {
    let config = TickerConfig {
        strategy: TickStepStrategy::MeetTickCount,
        tick_count: 10,
        tick_origin: 1.0,
    };
    let ticker = LinearTicker::from_config(&config);
    assert_eq!(ticker.tick_count(), 10);
    assert_eq!(ticker.tick_origin(), 1.0);
    assert_eq!(ticker.tick_step_strategy(), TickStepStrategy::MeetTickCount);

    // the config drives the generated density
    let set = ticker.generate(AxisRange::new(0.0, 100.0), false, false);
    assert!(
        set.ticks.len() >= 9,
        "requested 10 ticks, got {}",
        set.ticks.len()
    );
}
