// [libs/domain/reel-engine/tests/spin_resolution.rs]
//! Escenarios de resolucion de giro sobre una configuracion de carretes
//! realista de 3 carretes / 3 paylines.

use fairspin_domain_reels::{map_spin, Payline, ReelConfiguration, ReelError, Symbol};

fn three_reel_config() -> ReelConfiguration {
    ReelConfiguration {
        reel_count: 3,
        symbols_per_reel: 10,
        symbols: vec![
            Symbol { id: "CHERRY".to_string(), value: 2 },
            Symbol { id: "LEMON".to_string(), value: 3 },
            Symbol { id: "BAR".to_string(), value: 5 },
            Symbol { id: "SEVEN".to_string(), value: 10 },
        ],
        paylines: vec![
            Payline { rows: vec![0, 0, 0], multiplier: 1 },
            Payline { rows: vec![0, 0, 0], multiplier: 2 },
        ],
        row_count: 1,
    }
}

#[test]
fn deterministic_mapping_from_fixed_entropy() {
    let config = three_reel_config();
    // 8 hex chars per reel: reel0=00000000->0, reel1=00000003->3, reel2=0000000a->10%10=0
    let entropy = "00000000".to_string() + "00000003" + "0000000a";
    let outcome = map_spin(&entropy, 500, &config).unwrap();
    assert_eq!(outcome.positions, vec![0, 3, 0]);
    assert_eq!(outcome.symbols, vec!["CHERRY".to_string(), "SEVEN".to_string(), "CHERRY".to_string()]);
    assert_eq!(outcome.win_amount, 0);
}

#[test]
fn three_of_a_kind_pays_across_every_payline() {
    let config = three_reel_config();
    // All three reels resolve to position 0 -> CHERRY, CHERRY, CHERRY
    let entropy = "00000000".repeat(3);
    let outcome = map_spin(&entropy, 100, &config).unwrap();
    assert_eq!(outcome.symbols, vec!["CHERRY".to_string(), "CHERRY".to_string(), "CHERRY".to_string()]);
    // payline 1: 100 * 2 * (3-2) * 1 = 200; payline 2: 100 * 2 * (3-2) * 2 = 400
    assert_eq!(outcome.win_amount, 600);
}

#[test]
fn rejects_entropy_digest_shorter_than_eight_times_reel_count() {
    let config = three_reel_config();
    let short_entropy = "00000000".repeat(2);
    let result = map_spin(&short_entropy, 100, &config);
    assert!(matches!(result, Err(ReelError::EntropyTooShort { required: 24, got: 16 })));
}

#[test]
fn rejects_invalid_configuration_before_reading_entropy() {
    let mut config = three_reel_config();
    config.symbols_per_reel = 0;
    let entropy = "00000000".repeat(3);
    assert!(matches!(map_spin(&entropy, 100, &config), Err(ReelError::InvalidSymbolsPerReel)));
}
