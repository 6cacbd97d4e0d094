// [libs/domain/verifier/tests/replay_tampering.rs]
//! Escenario: un giro honesto producido por una sesion real verifica como
//! valido; alterar un byte de `symbols[0]` en el registro hace que la
//! verificacion falle con `failingCheck="symbols"`.

use fairspin_domain_reels::{Payline, ReelConfiguration, Symbol};
use fairspin_domain_session::{Session, SessionConfig};
use fairspin_domain_verifier::{verify_session, verify_spin_record};

fn three_reel_config() -> ReelConfiguration {
    ReelConfiguration {
        reel_count: 3,
        symbols_per_reel: 20,
        symbols: vec![
            Symbol { id: "CHERRY".to_string(), value: 2 },
            Symbol { id: "LEMON".to_string(), value: 3 },
            Symbol { id: "BAR".to_string(), value: 5 },
            Symbol { id: "SEVEN".to_string(), value: 10 },
        ],
        paylines: vec![Payline { rows: vec![0, 0, 0], multiplier: 1 }],
        row_count: 1,
    }
}

#[test]
fn an_honest_spin_record_verifies_and_tampering_its_symbols_flips_it() -> anyhow::Result<()> {
    let server_secret = b"server-secret".to_vec();
    let config = three_reel_config();

    let mut session = Session::new(
        "user-1".to_string(),
        "slots-classic".to_string(),
        config.clone(),
        1000,
        server_secret.clone(),
        SessionConfig::default(),
    );
    session.start()?;
    session.set_client_seed("test-client-seed".to_string())?;
    let record = session.spin(10)?;

    let honest_result = verify_spin_record(&record, &config, &server_secret);
    assert!(honest_result.valid);

    let mut tampered = record;
    let original_first_symbol = tampered.symbols[0].clone();
    tampered.symbols[0] = if original_first_symbol == "CHERRY" {
        "SEVEN".to_string()
    } else {
        "CHERRY".to_string()
    };

    let tampered_result = verify_spin_record(&tampered, &config, &server_secret);
    assert!(!tampered_result.valid);
    assert_eq!(tampered_result.failing_check.as_deref(), Some("symbols"));
    Ok(())
}

#[test]
fn whole_session_verification_passes_after_several_honest_spins() -> anyhow::Result<()> {
    let server_secret = b"server-secret".to_vec();
    let config = three_reel_config();

    let mut session = Session::new(
        "user-1".to_string(),
        "slots-classic".to_string(),
        config.clone(),
        1000,
        server_secret.clone(),
        SessionConfig::default(),
    );
    session.start()?;
    session.set_client_seed("test-client-seed".to_string())?;
    session.spin(10)?;
    session.spin(10)?;
    session.spin(10)?;

    let result = verify_session(
        session.spin_history(),
        &config,
        &server_secret,
        session.hash_chain(),
        session.current_index(),
    );
    assert!(result.valid);
    Ok(())
}
