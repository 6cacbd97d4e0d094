// [libs/core/chaos-engine/src/simulator.rs]
//! Simulador de tres cuerpos: conduce el integrador RK4 a lo largo de una
//! duracion, detecta divergencia numerica y extrae el digest de entropia
//! final.

use crate::body::SystemConfiguration;
use crate::config::SimulationConfig;
use crate::digest::{canonical_state_string, sha256_hex, SimulationDigest};
use crate::errors::ChaosError;
use crate::integrator;
use tracing::{debug, instrument, warn};

/// Ejecuta la simulacion Newtoniana de tres cuerpos descrita por
/// `initial_config` durante `sim_config.duration`, con paso fijo
/// `sim_config.time_step` (el ultimo paso se recorta para que el tiempo
/// simulado coincida exactamente con la duracion solicitada).
///
/// # Errors
/// Devuelve `ChaosError::Validation` si `duration` o `time_step` no son
/// positivos y finitos, o `ChaosError::NumericalInstability` si alguna
/// componente deja de ser finita durante la integracion.
#[instrument(skip(initial_config), fields(duration = sim_config.duration, time_step = sim_config.time_step))]
pub fn run(
    initial_config: SystemConfiguration,
    sim_config: SimulationConfig,
) -> Result<SimulationDigest, ChaosError> {
    if !sim_config.duration.is_finite() || sim_config.duration <= 0.0 {
        return Err(ChaosError::Validation {
            reason: format!("duration debe ser finita y positiva, recibido {}", sim_config.duration),
        });
    }
    if !sim_config.time_step.is_finite() || sim_config.time_step <= 0.0 {
        return Err(ChaosError::Validation {
            reason: format!("time_step debe ser finito y positivo, recibido {}", sim_config.time_step),
        });
    }

    let initial_conditions_hash = sha256_hex(&canonical_state_string(&initial_config));

    let total_steps = (sim_config.duration / sim_config.time_step).ceil() as u64;
    let total_steps = total_steps.max(1);

    let mut current = initial_config;
    for step_index in 0..total_steps {
        let elapsed = step_index as f64 * sim_config.time_step;
        let remaining = sim_config.duration - elapsed;
        let dt = if step_index + 1 == total_steps {
            remaining
        } else {
            sim_config.time_step
        };

        current = integrator::step(&current, dt);

        if !current.is_finite() {
            warn!(step = step_index, "blow-up numerico detectado, abortando simulacion");
            return Err(ChaosError::NumericalInstability {
                step: step_index,
                time: elapsed + dt,
            });
        }
    }

    let digest_hex = sha256_hex(&canonical_state_string(&current));
    debug!(digest = %digest_hex, steps = total_steps, "simulacion completada");

    Ok(SimulationDigest {
        digest_hex,
        duration: sim_config.duration,
        time_step: sim_config.time_step,
        steps: total_steps,
        initial_conditions_hash,
    })
}

/// Metrica caotica secundaria de diagnostico: la suma de las distancias
/// pares finales entre los tres cuerpos. Util para inspeccion humana de
/// corridas; no es consumida por el protocolo de compromiso-revelacion.
#[must_use]
pub fn diagnostic_chaotic_metric(config: &SystemConfiguration) -> f64 {
    let [a, b, c] = config.bodies;
    a.position.distance(&b.position) + b.position.distance(&c.position) + c.position.distance(&a.position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Body;
    use crate::vector3::Vector3;

    fn figure_eight() -> SystemConfiguration {
        let bodies = [
            Body::new(1.0, Vector3::new(-1.0, 0.0, 0.0), Vector3::new(0.347111, 0.532728, 0.0)).unwrap(),
            Body::new(1.0, Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.347111, 0.532728, 0.0)).unwrap(),
            Body::new(1.0, Vector3::new(0.0, 0.0, 0.0), Vector3::new(-0.694222, -1.065456, 0.0)).unwrap(),
        ];
        SystemConfiguration::new(bodies, 1.0, 0.01).unwrap()
    }

    #[test]
    fn rejects_non_positive_duration_or_time_step() {
        let config = figure_eight();
        let mut sim = SimulationConfig::default();
        sim.duration = 0.0;
        assert!(run(config, sim).is_err());

        let mut sim = SimulationConfig::default();
        sim.time_step = -0.1;
        assert!(run(config, sim).is_err());
    }

    #[test]
    fn determinism_two_runs_produce_identical_digest() {
        let config = figure_eight();
        let sim = SimulationConfig {
            duration: 1.0,
            time_step: 0.001,
            ..SimulationConfig::default()
        };
        let first = run(config, sim).unwrap();
        let second = run(config, sim).unwrap();
        assert_eq!(first.digest_hex, second.digest_hex);
        assert_eq!(first.initial_conditions_hash, second.initial_conditions_hash);
    }

    #[test]
    fn digest_is_well_formed_hex() {
        let config = figure_eight();
        let sim = SimulationConfig {
            duration: 1.0,
            time_step: 0.001,
            ..SimulationConfig::default()
        };
        let digest = run(config, sim).unwrap();
        assert_eq!(digest.digest_hex.len(), 64);
        assert!(digest.digest_hex.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn step_count_accounts_for_a_clipped_final_step() {
        let config = figure_eight();
        let sim = SimulationConfig {
            duration: 0.0025,
            time_step: 0.001,
            ..SimulationConfig::default()
        };
        let digest = run(config, sim).unwrap();
        assert_eq!(digest.steps, 3);
    }

    #[test]
    fn chaotic_sensitivity_tiny_perturbation_flips_digest() {
        let base = figure_eight();
        let mut perturbed = base;
        perturbed.bodies[0].position.x += 1e-10;

        let sim = SimulationConfig {
            duration: 10.0,
            time_step: 0.01,
            ..SimulationConfig::default()
        };

        let base_digest = run(base, sim).unwrap();
        let perturbed_digest = run(perturbed, sim).unwrap();
        assert_ne!(base_digest.digest_hex, perturbed_digest.digest_hex);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::body::Body;
    use crate::vector3::Vector3;
    use proptest::prelude::*;

    proptest! {
        /// Determinismo (§8): dos corridas de la misma configuracion, sobre
        /// cualquier terna de cuerpos validos y cualquier G/epsilon/paso
        /// validos, producen siempre el mismo digest; el digest mismo es
        /// siempre hex de 64 caracteres en minusculas (entropia bien formada).
        #[test]
        fn determinism_and_well_formedness_hold_for_arbitrary_valid_systems(
            mass in 0.1f64..10.0,
            px in -2.0f64..2.0,
            py in -2.0f64..2.0,
            vx in -1.0f64..1.0,
            vy in -1.0f64..1.0,
            g in 0.1f64..2.0,
            eps in 0.0f64..0.5,
            time_step in 0.01f64..0.05,
        ) {
            let body = Body::new(mass, Vector3::new(px, py, 0.0), Vector3::new(vx, vy, 0.0)).unwrap();
            let config = SystemConfiguration::new([body, body, body], g, eps).unwrap();
            let sim = SimulationConfig {
                duration: 0.2,
                time_step,
                ..SimulationConfig::default()
            };

            let first = run(config, sim).unwrap();
            let second = run(config, sim).unwrap();

            prop_assert_eq!(&first.digest_hex, &second.digest_hex);
            prop_assert_eq!(first.digest_hex.len(), 64);
            prop_assert!(first.digest_hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        }
    }
}
