// [libs/core/chaos-engine/src/config.rs]
//! Parametros de ejecucion del simulador, con los valores por defecto del
//! contrato externo.

use serde::{Deserialize, Serialize};

/// Duracion, paso de tiempo y constantes fisicas de una corrida del
/// simulador. Los valores por defecto coinciden con los del contrato
/// externo (duration=10.0, timeStep=0.001, G=1.0, epsilon=0.01).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub duration: f64,
    pub time_step: f64,
    pub gravitational_constant: f64,
    pub softening_epsilon: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            duration: 10.0,
            time_step: 0.001,
            gravitational_constant: 1.0,
            softening_epsilon: 0.01,
        }
    }
}
