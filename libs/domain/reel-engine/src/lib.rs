// [libs/domain/reel-engine/src/lib.rs]
#![deny(missing_docs)]

//! # APARATO: REEL MAPPER
//! CLASIFICACION: DOMAIN (ESTRATO L2)
//! RESPONSABILIDAD: MAPEO PURO DE ENTROPIA A POSICIONES, SIMBOLOS Y PREMIOS
//!
//! Funcion pura sin estado: toma un digest de entropia hexadecimal ya
//! revelado (ver `fairspin-core-entropy`) y una `ReelConfiguration`, y
//! produce las posiciones de carrete, los simbolos visibles y el monto de
//! premio. No conoce sesiones, commitments ni HMACs.

/// Configuracion de carretes: simbolos, paylines y geometria de la grilla.
pub mod config;
/// Catalogo de fallos de configuracion y resolucion.
pub mod errors;
/// Extraccion de posiciones, mapeo de simbolos y calculo de premios.
pub mod mapper;

pub use config::{Payline, ReelConfiguration, Symbol};
pub use errors::ReelError;
pub use mapper::{
    build_visible_grid, compute_win_amount, extract_positions, map_spin, map_spin_row_aware,
    positions_to_symbols, SpinOutcome,
};

/// Prelude con los tipos de uso mas frecuente para los estratos superiores.
pub mod prelude {
    pub use crate::config::{Payline, ReelConfiguration, Symbol};
    pub use crate::errors::ReelError;
    pub use crate::mapper::{map_spin, map_spin_row_aware, SpinOutcome};
}
