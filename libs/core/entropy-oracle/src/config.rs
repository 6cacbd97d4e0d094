// [libs/core/entropy-oracle/src/config.rs]
//! Parametros de ejecucion del oraculo: TTL de la cache y configuracion de
//! la simulacion que respalda `requestEntropy`.

use fairspin_core_chaos::SimulationConfig;
use serde::{Deserialize, Serialize};

/// Config del oraculo. `cache_ttl_millis` por defecto coincide con el minimo
/// exigido (60 s); `simulation` por defecto coincide con el contrato externo.
/// `cache_enabled = false` desactiva por completo la proteccion de un solo
/// uso y TTL de `PendingCommitmentCache`: `reveal` entonces lee la semilla
/// de casa sin consumirla ni exigir que siga vigente.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OracleConfig {
    pub cache_ttl_millis: i64,
    pub cache_enabled: bool,
    pub simulation: SimulationConfig,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            cache_ttl_millis: 60_000,
            cache_enabled: true,
            simulation: SimulationConfig::default(),
        }
    }
}
