// [libs/core/chaos-engine/src/lib.rs]
#![deny(missing_docs)]

//! # APARATO: CHAOS ENTROPY ENGINE
//! CLASIFICACION: CORE (ESTRATO L1)
//! RESPONSABILIDAD: ENTROPIA FISICA REPRODUCIBLE VIA SIMULACION DE TRES CUERPOS
//!
//! Simula el problema gravitacional de tres cuerpos con suavizado de
//! Plummer, integrado con Runge-Kutta 4, y extrae de su estado final un
//! digest SHA-256 determinista que sirve de fuente de entropia fisica para
//! el protocolo de compromiso-revelacion en `fairspin-core-entropy`.

/// Algebra vectorial 3D usada por los cuerpos y el integrador.
pub mod vector3;
/// Cuerpos gravitacionales y configuracion del sistema de tres cuerpos.
pub mod body;
/// Parametros de ejecucion del simulador (duracion, paso, constantes fisicas).
pub mod config;
/// Catalogo de fallos de validacion y de inestabilidad numerica.
pub mod errors;
/// Integrador RK4 de paso fijo con suavizado de Plummer.
pub mod integrator;
/// Serializacion canonica del estado final y extraccion del digest SHA-256.
pub mod digest;
/// Driver de simulacion: conduce el integrador y produce el `SimulationDigest`.
pub mod simulator;

/// Prelude con los tipos de uso mas frecuente para los estratos superiores.
pub mod prelude {
    pub use crate::body::{Body, SystemConfiguration};
    pub use crate::config::SimulationConfig;
    pub use crate::digest::SimulationDigest;
    pub use crate::errors::ChaosError;
    pub use crate::simulator::{diagnostic_chaotic_metric, run as run_simulation};
    pub use crate::vector3::Vector3;
}
