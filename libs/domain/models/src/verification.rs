// [libs/domain/models/src/verification.rs]
//! Resultado compartido de una verificacion: valido/invalido mas el nombre
//! del primer chequeo que fallo, nunca reparado automaticamente.

use serde::{Deserialize, Serialize};

/// Resultado de recomputar y comparar una prueba, entropia o registro de
/// giro contra lo almacenado.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub valid: bool,
    /// Nombre del primer chequeo que fallo, si `valid` es `false`.
    pub failing_check: Option<String>,
}

impl VerificationResult {
    /// Construye un resultado exitoso.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            valid: true,
            failing_check: None,
        }
    }

    /// Construye un resultado fallido, identificando el primer chequeo roto.
    #[must_use]
    pub fn failed(check_name: impl Into<String>) -> Self {
        Self {
            valid: false,
            failing_check: Some(check_name.into()),
        }
    }
}
