// [libs/domain/reel-engine/src/errors.rs]
//! Catalogo de fallos de configuracion y resolucion de carretes.

use fairspin_domain_models::{Classify, ErrorClassification};
use thiserror::Error;

/// Errores de validacion de `ReelConfiguration` o de resolucion de un giro.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReelError {
    /// `reelCount` fuera del rango [3, 8].
    #[error("reelCount debe estar en [3, 8], recibido {reel_count}")]
    InvalidReelCount { reel_count: u8 },

    /// `symbolsPerReel` es cero.
    #[error("symbolsPerReel debe ser >= 1")]
    InvalidSymbolsPerReel,

    /// El set de simbolos esta vacio.
    #[error("el conjunto de simbolos no puede estar vacio")]
    EmptySymbolSet,

    /// Un payline tiene una longitud de fila distinta de `reelCount`, o un
    /// indice de fila fuera de `[0, rowCount)`.
    #[error("payline invalido: {reason}")]
    InvalidPayline { reason: String },

    /// El digest de entropia tiene menos de `8 * reelCount` caracteres
    /// hexadecimales.
    #[error("el digest de entropia es demasiado corto: se requieren al menos {required} caracteres hex, se recibieron {got}")]
    EntropyTooShort { required: usize, got: usize },

    /// El digest de entropia no es hexadecimal valido.
    #[error("el digest de entropia contiene caracteres no hexadecimales")]
    InvalidEntropyEncoding,
}

impl Classify for ReelError {
    fn classification(&self) -> ErrorClassification {
        ErrorClassification::Validation
    }
}
