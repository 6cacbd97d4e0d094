// [libs/core/entropy-oracle/src/errors.rs]
//! Catalogo de fallos del protocolo de compromiso-revelacion.

use fairspin_core_chaos::ChaosError;
use fairspin_domain_models::{Classify, ErrorClassification};
use thiserror::Error;

/// Errores del oraculo de entropia.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
    /// Parametro de entrada invalido (clientSeed fuera de [16, 256] chars, nonce, etc).
    #[error("entrada invalida: {reason}")]
    Validation { reason: String },

    /// No existe compromiso pendiente para la sesion: nunca se emitio uno, ya
    /// fue consumido por un `reveal`, o su TTL expiro.
    #[error("no hay compromiso pendiente para la sesion {session_id}")]
    NoCommitment { session_id: String },

    /// La simulacion de tres cuerpos que respalda `requestEntropy` diverge
    /// numericamente.
    #[error("la simulacion fallo: {0}")]
    SimulationFailed(String),

    /// Una verificacion de compromiso/entropia/prueba no paso.
    #[error("verificacion fallida: {check}")]
    VerificationFailed { check: String },
}

impl From<ChaosError> for OracleError {
    fn from(error: ChaosError) -> Self {
        Self::SimulationFailed(error.to_string())
    }
}

impl Classify for OracleError {
    fn classification(&self) -> ErrorClassification {
        match self {
            Self::Validation { .. } => ErrorClassification::Validation,
            Self::NoCommitment { .. } => ErrorClassification::NoCommitment,
            Self::SimulationFailed(_) => ErrorClassification::SimulationFailed,
            Self::VerificationFailed { .. } => ErrorClassification::VerificationFailed,
        }
    }
}
