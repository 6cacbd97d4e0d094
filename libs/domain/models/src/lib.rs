// [libs/domain/models/src/lib.rs]
#![deny(missing_docs)]

//! # APARATO: DOMAIN MODELS HUB
//! CLASIFICACION: DOMAIN MODELS (ESTRATO L2)
//! RESPONSABILIDAD: DTOs, TAXONOMIA DE ERRORES Y EVENTOS COMPARTIDOS
//!
//! Unica autoridad de definicion para los tipos que cruzan las fronteras
//! entre el oraculo de entropia, el mapeador de carretes, la maquina de
//! sesion y el verificador. No depende de ninguno de ellos: esto evita
//! ciclos en el grafo de crates del workspace.

/// Taxonomia de clasificacion de errores y el tipo de frontera `FairnessError`.
pub mod errors;
/// Eventos de observacion de sesion y el trait `Observer`.
pub mod events;
/// `SpinProof` y el alias `HouseCommitment`.
pub mod proof;
/// Estados de la maquina de sesion y su matriz de transicion.
pub mod session_types;
/// `SpinRecord`, el registro inmutable de un giro resuelto.
pub mod spin_record;
/// `VerificationResult`, compartido por el oraculo y el verificador.
pub mod verification;

pub use errors::{Classify, ErrorClassification, FairnessError};
pub use events::{CountingObserver, Observer, SessionEvent};
pub use proof::{HouseCommitment, SpinProof};
pub use session_types::SessionState;
pub use spin_record::SpinRecord;
pub use verification::VerificationResult;

/// Prelude con los tipos de uso mas frecuente para los estratos superiores.
pub mod prelude {
    pub use crate::errors::{Classify, ErrorClassification, FairnessError};
    pub use crate::events::{CountingObserver, Observer, SessionEvent};
    pub use crate::proof::{HouseCommitment, SpinProof};
    pub use crate::session_types::SessionState;
    pub use crate::spin_record::SpinRecord;
    pub use crate::verification::VerificationResult;
}
