// [libs/domain/verifier/src/lib.rs]
#![deny(missing_docs)]

//! # APARATO: FAIRNESS VERIFIER
//! CLASIFICACION: DOMAIN (ESTRATO L2)
//! RESPONSABILIDAD: RECOMPUTO Y COMPARACION BIT A BIT DE GIROS ALMACENADOS
//!
//! Sin estado propio: dado un `SpinRecord` y el `serverSecret`, recomputa
//! compromiso, entropia, firma, posiciones y simbolos exactamente como lo
//! habria hecho una sesion honesta, y compara cada uno contra lo
//! almacenado. Este crate no tiene operaciones falibles propias: cada
//! llamada siempre produce un `VerificationResult`, nunca un `Result` de
//! error -- por eso no define su propio catalogo de errores.

/// Recomputo y comparacion de giros individuales y de sesiones completas.
pub mod verifier;

pub use verifier::{verify_hash_chain_structure, verify_session, verify_spin_record};

/// Prelude con las funciones de uso mas frecuente para los estratos superiores.
pub mod prelude {
    pub use crate::verifier::{verify_hash_chain_structure, verify_session, verify_spin_record};
}
