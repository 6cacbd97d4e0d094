// [libs/core/chaos-engine/src/body.rs]
//! Cuerpos gravitacionales y la configuracion del sistema de tres cuerpos.

use crate::errors::ChaosError;
use crate::vector3::Vector3;
use serde::{Deserialize, Serialize};

/// Un cuerpo puntual con masa positiva, posicion y velocidad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub mass: f64,
    pub position: Vector3,
    pub velocity: Vector3,
}

impl Body {
    /// Construye un cuerpo validando que la masa sea positiva y finita y que
    /// posicion/velocidad sean finitas.
    pub fn new(mass: f64, position: Vector3, velocity: Vector3) -> Result<Self, ChaosError> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(ChaosError::Validation {
                reason: format!("la masa debe ser finita y positiva, recibido {mass}"),
            });
        }
        if !position.is_finite() || !velocity.is_finite() {
            return Err(ChaosError::Validation {
                reason: "posicion y velocidad iniciales deben ser finitas".to_string(),
            });
        }
        Ok(Self {
            mass,
            position,
            velocity,
        })
    }
}

/// Terna ordenada de cuerpos mas las constantes fisicas del sistema.
///
/// Creada por el llamador, mutada unicamente por el integrador durante una
/// ejecucion; vive el tiempo de una unica simulacion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemConfiguration {
    pub bodies: [Body; 3],
    /// Constante gravitacional, G > 0.
    pub gravitational_constant: f64,
    /// Parametro de suavizado de Plummer, epsilon >= 0.
    pub softening_epsilon: f64,
}

impl SystemConfiguration {
    /// Construye la configuracion validando las constantes fisicas.
    pub fn new(
        bodies: [Body; 3],
        gravitational_constant: f64,
        softening_epsilon: f64,
    ) -> Result<Self, ChaosError> {
        if !gravitational_constant.is_finite() || gravitational_constant <= 0.0 {
            return Err(ChaosError::Validation {
                reason: format!(
                    "G debe ser finita y positiva, recibido {gravitational_constant}"
                ),
            });
        }
        if !softening_epsilon.is_finite() || softening_epsilon < 0.0 {
            return Err(ChaosError::Validation {
                reason: format!(
                    "epsilon debe ser finita y no negativa, recibido {softening_epsilon}"
                ),
            });
        }
        Ok(Self {
            bodies,
            gravitational_constant,
            softening_epsilon,
        })
    }

    /// `true` si las 18 componentes (posicion+velocidad x 3 cuerpos x 3 ejes)
    /// siguen siendo finitas.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.bodies
            .iter()
            .all(|body| body.position.is_finite() && body.velocity.is_finite())
    }
}
