// [libs/core/entropy-oracle/src/lib.rs]
#![deny(missing_docs)]

//! # APARATO: ENTROPY ORACLE
//! CLASIFICACION: CORE (ESTRATO L1)
//! RESPONSABILIDAD: PROTOCOLO DE COMPROMISO-REVELACION Y SUS PRUEBAS
//!
//! Combina una semilla de casa (aleatoria, o derivada del simulador caotico
//! de `fairspin-core-chaos`) con una semilla de cliente y un nonce para
//! producir entropia revelada verificable, con compromisos publicados por
//! adelantado y pruebas firmadas.

/// Cache de compromisos pendientes, de un solo uso y con TTL.
pub mod cache;
/// Parametros del oraculo: TTL de cache y configuracion de simulacion.
pub mod config;
/// Catalogo de fallos del protocolo.
pub mod errors;
/// `EntropyOracle`: compromisos, revelaciones y verificacion.
pub mod oracle;

pub use config::OracleConfig;
pub use errors::OracleError;
pub use oracle::EntropyOracle;

/// Prelude con los tipos de uso mas frecuente para los estratos superiores.
pub mod prelude {
    pub use crate::config::OracleConfig;
    pub use crate::errors::OracleError;
    pub use crate::oracle::EntropyOracle;
}
