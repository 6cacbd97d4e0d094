// [libs/domain/session-engine/src/errors.rs]
//! Catalogo de fallos de la maquina de sesion.

use fairspin_domain_models::{Classify, ErrorClassification};
use fairspin_domain_reels::ReelError;
use thiserror::Error;

/// Errores de la maquina de sesion.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Apuesta invalida: no positiva, no finita, o mayor que el saldo.
    #[error("apuesta invalida: {reason}")]
    Validation { reason: String },

    /// Operacion invocada mientras la sesion estaba en un estado que no la
    /// permite.
    #[error("transicion invalida: {from:?} -> {to:?}")]
    InvalidTransition { from: String, to: String },

    /// La cadena de hashes se agoto (`currentIndex` alcanzo `chainLength`);
    /// no caben mas giros.
    #[error("la sesion agoto su cadena de hashes tras {spins_completed} giros")]
    SessionComplete { spins_completed: u32 },

    /// El mapeo de carretes fallo sobre una configuracion o entropia
    /// invalida.
    #[error("fallo de resolucion de carretes: {0}")]
    ReelResolutionFailed(#[from] ReelError),
}

impl Classify for SessionError {
    fn classification(&self) -> ErrorClassification {
        match self {
            Self::Validation { .. } => ErrorClassification::Validation,
            Self::InvalidTransition { .. } => ErrorClassification::InvalidTransition,
            Self::SessionComplete { .. } => ErrorClassification::SessionComplete,
            Self::ReelResolutionFailed(_) => ErrorClassification::Validation,
        }
    }
}
