// [libs/domain/session-engine/src/lib.rs]
#![deny(missing_docs)]

//! # APARATO: SESSION MACHINE
//! CLASIFICACION: DOMAIN (ESTRATO L2)
//! RESPONSABILIDAD: MAQUINA DE ESTADOS POR SESION, CADENA DE HASHES Y GIROS
//!
//! Une la cadena de hashes precomputada, la contabilidad de apuestas y el
//! mapeador de carretes (`fairspin-domain-reels`) en una unica maquina de
//! estados por sesion. El camino canonico de `spin` deriva la entropia
//! directamente de la cadena de hashes; no invoca al oraculo de
//! `fairspin-core-entropy`, que respalda un protocolo de compromiso
//! independiente usado fuera de esta maquina.

/// Parametros de construccion de una sesion.
pub mod config;
/// Catalogo de fallos de la maquina de sesion.
pub mod errors;
/// Cadena de hashes precomputada e inmutable.
pub mod hash_chain;
/// `Session`: estado, saldo, historial y resolucion de giros.
pub mod session;

pub use config::SessionConfig;
pub use errors::SessionError;
pub use hash_chain::HashChain;
pub use session::Session;

/// Prelude con los tipos de uso mas frecuente para los estratos superiores.
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::errors::SessionError;
    pub use crate::hash_chain::HashChain;
    pub use crate::session::Session;
}
