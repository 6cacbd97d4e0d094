// [libs/domain/models/src/spin_record.rs]
//! Registro inmutable de un giro resuelto.

use crate::proof::SpinProof;
use serde::{Deserialize, Serialize};

/// Un giro resuelto y sellado. Se anexa al historial de la sesion y nunca se
/// modifica in situ; cualquier alteracion posterior a un byte debe ser
/// detectable por el verificador.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinRecord {
    pub spin_id: String,
    pub nonce: u32,
    pub bet: i64,
    /// Digest de entropia hexadecimal (64 caracteres) consumido por este giro.
    pub entropy_hex: String,
    pub reel_positions: Vec<u32>,
    pub symbols: Vec<String>,
    /// Monto ganado, en la misma unidad de punto fijo que `bet` (centavos).
    pub win_amount: i64,
    /// Milisegundos desde epoch UNIX.
    pub timestamp_millis: i64,
    pub proof: SpinProof,
}
