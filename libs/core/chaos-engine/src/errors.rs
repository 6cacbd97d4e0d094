// [libs/core/chaos-engine/src/errors.rs]
//! Catalogo de fallos del motor de entropia caotica.

use fairspin_domain_models::{Classify, ErrorClassification};
use thiserror::Error;

/// Errores que puede producir la configuracion o ejecucion del simulador.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChaosError {
    /// Parametro de entrada fuera de su dominio valido (masa no positiva,
    /// G <= 0, paso de tiempo <= 0, componente no finita, etc).
    #[error("validacion fallida: {reason}")]
    Validation {
        /// Descripcion humana de la regla violada.
        reason: String,
    },

    /// Una componente de posicion o velocidad dejo de ser finita a mitad de
    /// la integracion; la simulacion se aborta de inmediato.
    #[error("inestabilidad numerica en el paso {step} (t = {time})")]
    NumericalInstability {
        /// Indice del paso de integracion donde se detecto el blow-up.
        step: u64,
        /// Tiempo simulado en el que ocurrio la divergencia.
        time: f64,
    },
}

impl Classify for ChaosError {
    fn classification(&self) -> ErrorClassification {
        match self {
            Self::Validation { .. } => ErrorClassification::Validation,
            Self::NumericalInstability { .. } => ErrorClassification::SimulationFailed,
        }
    }
}
