// [libs/domain/session-engine/src/session.rs]
//! La maquina de sesion: estado, cadena de hashes, contabilidad de apuestas
//! y resolucion de giros.
//!
//! El camino canonico de `spin` NO pasa por `fairspin-core-entropy`: deriva
//! la entropia directamente de la cadena de hashes precomputada via
//! `HMAC-SHA-256(serverSecret, houseSeed:clientSeed:nonce)`. El simulador
//! caotico solo respalda el compromiso independiente del oraculo.

use crate::config::SessionConfig;
use crate::errors::SessionError;
use crate::hash_chain::HashChain;
use chrono::Utc;
use fairspin_domain_models::{Observer, SessionEvent, SessionState, SpinProof, SpinRecord};
use fairspin_domain_reels::{map_spin, ReelConfiguration};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::instrument;

type HmacSha256 = Hmac<Sha256>;

const MIN_CLIENT_SEED_LEN: usize = 16;
const MAX_CLIENT_SEED_LEN: usize = 256;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn hmac_hex(key: &[u8], message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC acepta claves de cualquier longitud");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

fn generate_session_id() -> String {
    let timestamp_millis = Utc::now().timestamp_millis();
    let random_bits: u64 = rand::thread_rng().next_u64();
    format!("{timestamp_millis:x}{random_bits:016x}")
}

fn validate_client_seed(client_seed: &str) -> Result<(), SessionError> {
    if !(MIN_CLIENT_SEED_LEN..=MAX_CLIENT_SEED_LEN).contains(&client_seed.len()) {
        return Err(SessionError::Validation {
            reason: format!(
                "clientSeed debe tener entre {MIN_CLIENT_SEED_LEN} y {MAX_CLIENT_SEED_LEN} caracteres, recibido {}",
                client_seed.len()
            ),
        });
    }
    Ok(())
}

/// Una sesion de maquina tragamonedas: unica duena de su saldo, su historial
/// de giros y su cadena de hashes. No es reentrante.
pub struct Session {
    pub session_id: String,
    pub user_id: String,
    pub game_id: String,
    state: SessionState,
    balance: i64,
    reel_config: ReelConfiguration,
    spin_history: Vec<SpinRecord>,
    hash_chain: HashChain,
    current_index: u32,
    server_secret: Vec<u8>,
    client_seed: Option<String>,
    default_client_seed: String,
    observers: Vec<Box<dyn Observer + Send>>,
}

impl Session {
    /// Construye una nueva sesion en estado `Init`: genera el `sessionId`,
    /// sortea la semilla de la cadena de hashes y la materializa por
    /// completo.
    #[must_use]
    pub fn new(
        user_id: String,
        game_id: String,
        reel_config: ReelConfiguration,
        initial_balance: i64,
        server_secret: Vec<u8>,
        config: SessionConfig,
    ) -> Self {
        let mut chain_seed = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut chain_seed);

        Self {
            session_id: generate_session_id(),
            user_id,
            game_id,
            state: SessionState::Init,
            balance: initial_balance,
            reel_config,
            spin_history: Vec::new(),
            hash_chain: HashChain::new(&chain_seed, config.chain_length),
            current_index: 0,
            server_secret,
            client_seed: None,
            default_client_seed: config.default_client_seed,
            observers: Vec::new(),
        }
    }

    /// Estado actual de la maquina.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Saldo actual.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Compromiso publicado por adelantado: `SHA256(h_0)` de la cadena.
    #[must_use]
    pub fn server_commitment(&self) -> &str {
        self.hash_chain.server_commitment()
    }

    /// Proximo nonce a consumir; iguala la cantidad de giros completados.
    #[must_use]
    pub fn current_index(&self) -> u32 {
        self.current_index
    }

    /// Longitud total de la cadena de hashes (`chainLength`).
    #[must_use]
    pub fn chain_length(&self) -> usize {
        self.hash_chain.len()
    }

    /// La cadena de hashes subyacente, para verificacion estructural
    /// externa (ver `fairspin-domain-verifier::verify_session`).
    #[must_use]
    pub fn hash_chain(&self) -> &HashChain {
        &self.hash_chain
    }

    /// Configuracion de carretes de la sesion, para verificacion externa.
    #[must_use]
    pub fn reel_config(&self) -> &ReelConfiguration {
        &self.reel_config
    }

    /// Historial de giros resueltos, en orden.
    #[must_use]
    pub fn spin_history(&self) -> &[SpinRecord] {
        &self.spin_history
    }

    /// Registra un observador que recibira todos los eventos futuros.
    pub fn add_observer(&mut self, observer: Box<dyn Observer + Send>) {
        self.observers.push(observer);
    }

    /// Transiciona `Init -> AwaitingBet`.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::AwaitingBet)
    }

    /// Fija la semilla del cliente para los giros siguientes. No transiciona
    /// de estado: es administrativa, como describe el diseno de la maquina.
    pub fn set_client_seed(&mut self, seed: String) -> Result<(), SessionError> {
        validate_client_seed(&seed)?;
        self.client_seed = Some(seed);
        Ok(())
    }

    /// Vuelve la sesion de `Error` a `Init`, unica transicion de reset
    /// permitida por la matriz cerrada.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.transition(SessionState::Init)
    }

    /// Resuelve un giro completo, atomicamente: valida estado y apuesta,
    /// deduce el saldo, atraviesa `AwaitingBet -> EntropyRequested ->
    /// Spinning -> ResultReady -> AwaitingBet`, y acredita el premio.
    #[instrument(skip(self), fields(session_id = %self.session_id, nonce = self.current_index))]
    pub fn spin(&mut self, bet: i64) -> Result<SpinRecord, SessionError> {
        if self.current_index as usize >= self.hash_chain.len() {
            let spins_completed = self.current_index;
            let _ = self.transition(SessionState::Complete);
            return Err(SessionError::SessionComplete { spins_completed });
        }

        if self.state != SessionState::AwaitingBet {
            return Err(SessionError::InvalidTransition {
                from: format!("{:?}", self.state),
                to: "Spinning".to_string(),
            });
        }

        if bet < 1 || bet > self.balance {
            return Err(SessionError::Validation {
                reason: format!("la apuesta {bet} debe ser >= 1 y <= saldo {}", self.balance),
            });
        }

        self.balance -= bet;

        self.transition(SessionState::EntropyRequested)?;

        let nonce = self.current_index;
        let house_seed = self
            .hash_chain
            .get(nonce as usize)
            .expect("el indice se valido contra chain_length arriba")
            .to_string();
        let client_seed = self.client_seed.clone().unwrap_or_else(|| self.default_client_seed.clone());

        self.transition(SessionState::Spinning)?;

        let entropy_hex = hmac_hex(&self.server_secret, &format!("{house_seed}:{client_seed}:{nonce}"));

        let outcome = match map_spin(&entropy_hex, bet, &self.reel_config) {
            Ok(outcome) => outcome,
            Err(reel_error) => {
                let _ = self.transition(SessionState::Error);
                self.notify_all(&SessionEvent::Error {
                    classification: fairspin_domain_models::ErrorClassification::Validation,
                    message: reel_error.to_string(),
                });
                return Err(SessionError::from(reel_error));
            }
        };

        self.balance += outcome.win_amount;

        let spin_id = format!("{}-spin-{nonce:010}", self.session_id);
        let commitment = sha256_hex(house_seed.as_bytes());
        let proof_id = sha256_hex(spin_id.as_bytes())[..32].to_string();
        let signature = hmac_hex(
            &self.server_secret,
            &format!("{spin_id}:{commitment}:{client_seed}:{nonce}"),
        );

        let record = SpinRecord {
            spin_id,
            nonce,
            bet,
            entropy_hex,
            reel_positions: outcome.positions,
            symbols: outcome.symbols,
            win_amount: outcome.win_amount,
            timestamp_millis: Utc::now().timestamp_millis(),
            proof: SpinProof {
                proof_id,
                commitment,
                house_seed,
                client_seed,
                nonce,
                signature,
            },
        };

        self.spin_history.push(record.clone());
        self.current_index += 1;

        self.transition(SessionState::ResultReady)?;
        self.transition(SessionState::AwaitingBet)?;

        self.notify_all(&SessionEvent::Spin(Box::new(record.clone())));
        if record.win_amount > 0 {
            self.notify_all(&SessionEvent::Win {
                spin_id: record.spin_id.clone(),
                amount: record.win_amount,
            });
        }

        Ok(record)
    }

    fn transition(&mut self, to: SessionState) -> Result<(), SessionError> {
        if !self.state.can_transition_to(to) {
            return Err(SessionError::InvalidTransition {
                from: format!("{:?}", self.state),
                to: format!("{to:?}"),
            });
        }
        let from = self.state;
        self.state = to;
        self.notify_all(&SessionEvent::StateChange { from, to });
        Ok(())
    }

    fn notify_all(&mut self, event: &SessionEvent) {
        for observer in &mut self.observers {
            observer.notify(event);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use fairspin_domain_reels::{Payline, Symbol};
    use proptest::prelude::*;

    fn reel_config() -> ReelConfiguration {
        ReelConfiguration {
            reel_count: 3,
            symbols_per_reel: 20,
            symbols: vec![
                Symbol { id: "CHERRY".to_string(), value: 2 },
                Symbol { id: "BAR".to_string(), value: 5 },
                Symbol { id: "SEVEN".to_string(), value: 10 },
            ],
            paylines: vec![Payline { rows: vec![0, 0, 0], multiplier: 1 }],
            row_count: 1,
        }
    }

    proptest! {
        /// Conservacion del saldo y monotonicidad de la cadena (§8): para
        /// cualquier largo de cadena y cantidad de giros dentro de ella, cada
        /// giro cumple `balance_post = balance_pre - bet + winAmount` y el
        /// saldo nunca es negativo; tras N giros, `currentIndex == N <=
        /// chainLength`.
        #[test]
        fn balance_conservation_and_chain_monotonicity_hold(
            chain_length in 3usize..15,
            num_spins in 1u32..15,
            bet in 1i64..50,
        ) {
            prop_assume!((num_spins as usize) <= chain_length);

            let config = SessionConfig {
                chain_length,
                ..SessionConfig::default()
            };
            let mut session = Session::new(
                "user-1".to_string(),
                "slots-classic".to_string(),
                reel_config(),
                1_000_000,
                b"server-secret".to_vec(),
                config,
            );
            session.start().unwrap();
            session.set_client_seed("proptest-client-seed".to_string()).unwrap();

            for _ in 0..num_spins {
                let balance_pre = session.balance();
                let record = session.spin(bet).unwrap();
                prop_assert_eq!(session.balance(), balance_pre - bet + record.win_amount);
                prop_assert!(session.balance() >= 0);
            }

            prop_assert_eq!(session.current_index(), num_spins);
            prop_assert!((session.current_index() as usize) <= session.chain_length());
        }
    }
}
