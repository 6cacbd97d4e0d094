// [libs/domain/models/src/errors.rs]
//! Taxonomia de errores compartida por todo el nucleo.
//!
//! Cada crate que expone operaciones falibles (`fairspin-core-chaos`,
//! `fairspin-core-entropy`, `fairspin-domain-reels`,
//! `fairspin-domain-session`) define su propio enum `thiserror` local e
//! implementa `Classify` sobre el. Este modulo no conoce esos tipos
//! concretos -- eso crearia un ciclo de dependencias -- sino que define la
//! clasificacion comun a la que cada crate mapea sus errores en su frontera
//! publica, para que un llamador externo siempre vea la misma etiqueta sin
//! importar que componente fallo. `fairspin-domain-verifier` no tiene enum
//! propio: sus funciones siempre devuelven `VerificationResult`, nunca
//! `Result<_, E>`.

use std::fmt;

/// Las siete clasificaciones de fallo del nucleo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClassification {
    /// Entrada invalida del llamador (apuesta <= 0, parametro fuera de rango).
    Validation,
    /// Transicion de estado no permitida por la maquina de sesion.
    InvalidTransition,
    /// No existe compromiso pendiente (ausente o expirado) para la sesion.
    NoCommitment,
    /// La simulacion de tres cuerpos diverge numericamente.
    SimulationFailed,
    /// Una verificacion no paso; el nombre del primer chequeo fallido
    /// viaja en el mensaje, nunca se repara automaticamente.
    VerificationFailed,
    /// La cadena de hashes de la sesion se agoto; no caben mas giros.
    SessionComplete,
    /// Fallo interno no clasificable; no se exponen detalles en produccion.
    Internal,
}

impl ErrorClassification {
    /// Nombre estable de la clasificacion, el que se le muestra al llamador.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Validation => "Validation",
            Self::InvalidTransition => "InvalidTransition",
            Self::NoCommitment => "NoCommitment",
            Self::SimulationFailed => "SimulationFailed",
            Self::VerificationFailed => "VerificationFailed",
            Self::SessionComplete => "SessionComplete",
            Self::Internal => "Internal",
        }
    }
}

impl fmt::Display for ErrorClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Trait que cada enum de error local implementa para exponer su
/// clasificacion sin que este crate necesite conocer el tipo concreto.
pub trait Classify {
    /// La clasificacion de este fallo segun la taxonomia comun.
    fn classification(&self) -> ErrorClassification;
}

/// Error de frontera: lo que un llamador externo al nucleo recibe. Conserva
/// la clasificacion (siempre visible) y un mensaje humano (detalles internos
/// no se garantizan estables entre versiones).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FairnessError {
    pub classification: ErrorClassification,
    pub message: String,
}

impl FairnessError {
    /// Construye un `FairnessError` a partir de cualquier error local que
    /// implemente `Classify` y `Display`.
    pub fn from_classified<E: Classify + fmt::Display>(error: &E) -> Self {
        Self {
            classification: error.classification(),
            message: error.to_string(),
        }
    }
}

impl fmt::Display for FairnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.classification.tag(), self.message)
    }
}

impl std::error::Error for FairnessError {}
