// [libs/core/chaos-engine/tests/determinism.rs]
//! Escenario concreto: figura-8, condiciones fijas, digest reproducible.

use fairspin_core_chaos::prelude::*;

fn figure_eight_config() -> SystemConfiguration {
    let bodies = [
        Body::new(1.0, Vector3::new(-1.0, 0.0, 0.0), Vector3::new(0.347111, 0.532728, 0.0)).unwrap(),
        Body::new(1.0, Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.347111, 0.532728, 0.0)).unwrap(),
        Body::new(1.0, Vector3::new(0.0, 0.0, 0.0), Vector3::new(-0.694222, -1.065456, 0.0)).unwrap(),
    ];
    SystemConfiguration::new(bodies, 1.0, 0.01).unwrap()
}

#[test]
fn fixed_figure_eight_digest_is_stable_across_independent_runs() {
    let sim_config = SimulationConfig {
        duration: 1.0,
        time_step: 0.001,
        gravitational_constant: 1.0,
        softening_epsilon: 0.01,
    };

    let first = run_simulation(figure_eight_config(), sim_config).unwrap();
    let second = run_simulation(figure_eight_config(), sim_config).unwrap();
    let third = run_simulation(figure_eight_config(), sim_config).unwrap();

    assert_eq!(first.digest_hex, second.digest_hex);
    assert_eq!(second.digest_hex, third.digest_hex);
    assert_eq!(first.steps, 1000);
}

#[test]
fn energy_conservation_is_approximately_preserved_over_one_period() {
    // Masa unitaria, G=1: energia = 0.5 * sum(m_i * |v_i|^2) - sum_{i<j} m_i*m_j/|r_i-r_j|
    fn total_energy(config: &SystemConfiguration) -> f64 {
        let bodies = config.bodies;
        let kinetic: f64 = bodies
            .iter()
            .map(|b| 0.5 * b.mass * b.velocity.magnitude_squared())
            .sum();
        let mut potential = 0.0;
        for i in 0..3 {
            for j in (i + 1)..3 {
                let distance = bodies[i].position.distance(&bodies[j].position);
                potential -= config.gravitational_constant * bodies[i].mass * bodies[j].mass / distance;
            }
        }
        kinetic + potential
    }

    let initial = figure_eight_config();
    let initial_energy = total_energy(&initial);

    let sim_config = SimulationConfig {
        duration: 6.32591398,
        time_step: 1e-4,
        gravitational_constant: 1.0,
        softening_epsilon: 0.0,
    };

    // Re-run the integrator manually to inspect the final configuration rather
    // than only its digest.
    let mut current = initial;
    let total_steps = (sim_config.duration / sim_config.time_step).ceil() as u64;
    for step_index in 0..total_steps {
        let elapsed = step_index as f64 * sim_config.time_step;
        let remaining = sim_config.duration - elapsed;
        let dt = if step_index + 1 == total_steps { remaining } else { sim_config.time_step };
        current = fairspin_core_chaos::integrator::step(&current, dt);
    }

    let final_energy = total_energy(&current);
    let relative_drift = ((final_energy - initial_energy) / initial_energy).abs();
    assert!(relative_drift < 1e-2, "drift was {relative_drift}");
}
