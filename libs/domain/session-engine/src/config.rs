// [libs/domain/session-engine/src/config.rs]
//! Parametros de construccion de una sesion.

use serde::{Deserialize, Serialize};

/// Config de sesion. `chain_length` por defecto coincide con el contrato
/// externo (1000); `default_client_seed` se usa cuando `spin` se invoca sin
/// que `setClientSeed` haya corrido antes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub chain_length: usize,
    pub default_client_seed: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            chain_length: 1000,
            default_client_seed: "fairspin-default-client-seed".to_string(),
        }
    }
}
