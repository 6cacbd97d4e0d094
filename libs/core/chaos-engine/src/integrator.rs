// [libs/core/chaos-engine/src/integrator.rs]
//! Integrador Runge-Kutta de orden 4 para gravitacion Newtoniana con
//! suavizado de Plummer.
//!
//! # Contrato de determinismo
//! Dos ejecuciones con (masas, posiciones, velocidades, G, epsilon, paso)
//! identicos deben producir un estado final identico bit a bit. Para eso:
//! - las aceleraciones se evaluan en el orden de etapas RK4 estandar
//!   (t, t+h/2, t+h/2, t+h);
//! - la suma de aceleraciones cuerpo-a-cuerpo recorre los indices en orden
//!   ascendente, sin reducciones paralelas dentro de un mismo paso.

use crate::body::{Body, SystemConfiguration};
use crate::vector3::Vector3;

/// Estado derivable (posicion, velocidad) usado como variable de RK4.
#[derive(Debug, Clone, Copy)]
struct BodyState {
    position: Vector3,
    velocity: Vector3,
}

/// Derivada de `BodyState`: (velocidad, aceleracion).
#[derive(Debug, Clone, Copy)]
struct BodyDerivative {
    velocity: Vector3,
    acceleration: Vector3,
}

/// Calcula a_i = sum_{j != i} G * m_j * (r_j - r_i) / (|r_j - r_i|^2 + eps^2)^(3/2)
/// para cada cuerpo, en orden ascendente de indice.
fn accelerations(states: &[BodyState; 3], masses: &[f64; 3], g: f64, epsilon: f64) -> [Vector3; 3] {
    let eps_sq = epsilon * epsilon;
    let mut result = [Vector3::zero(); 3];
    for i in 0..3 {
        let mut acc = Vector3::zero();
        for j in 0..3 {
            if i == j {
                continue;
            }
            let delta = states[j].position.sub(&states[i].position);
            let denom = (delta.magnitude_squared() + eps_sq).powf(1.5);
            acc = acc.add(&delta.scale(g * masses[j] / denom));
        }
        result[i] = acc;
    }
    result
}

fn derivatives(states: &[BodyState; 3], masses: &[f64; 3], g: f64, epsilon: f64) -> [BodyDerivative; 3] {
    let accel = accelerations(states, masses, g, epsilon);
    let mut out = [BodyDerivative {
        velocity: Vector3::zero(),
        acceleration: Vector3::zero(),
    }; 3];
    for i in 0..3 {
        out[i] = BodyDerivative {
            velocity: states[i].velocity,
            acceleration: accel[i],
        };
    }
    out
}

fn advance(states: &[BodyState; 3], derivative: &[BodyDerivative; 3], dt: f64) -> [BodyState; 3] {
    let mut out = [BodyState {
        position: Vector3::zero(),
        velocity: Vector3::zero(),
    }; 3];
    for i in 0..3 {
        out[i] = BodyState {
            position: states[i].position.add(&derivative[i].velocity.scale(dt)),
            velocity: states[i].velocity.add(&derivative[i].acceleration.scale(dt)),
        };
    }
    out
}

fn combine(a: &[BodyDerivative; 3], b: &[BodyDerivative; 3], c: &[BodyDerivative; 3], d: &[BodyDerivative; 3]) -> [BodyDerivative; 3] {
    let mut out = [BodyDerivative {
        velocity: Vector3::zero(),
        acceleration: Vector3::zero(),
    }; 3];
    for i in 0..3 {
        let weighted_velocity = a[i]
            .velocity
            .add(&b[i].velocity.scale(2.0))
            .add(&c[i].velocity.scale(2.0))
            .add(&d[i].velocity)
            .scale(1.0 / 6.0);
        let weighted_acceleration = a[i]
            .acceleration
            .add(&b[i].acceleration.scale(2.0))
            .add(&c[i].acceleration.scale(2.0))
            .add(&d[i].acceleration)
            .scale(1.0 / 6.0);
        out[i] = BodyDerivative {
            velocity: weighted_velocity,
            acceleration: weighted_acceleration,
        };
    }
    out
}

/// Ejecuta un unico paso RK4 de tamano `dt` sobre la configuracion dada,
/// devolviendo la nueva configuracion. No valida finitud; eso es
/// responsabilidad del llamador tras cada paso.
#[must_use]
pub fn step(config: &SystemConfiguration, dt: f64) -> SystemConfiguration {
    let masses = [
        config.bodies[0].mass,
        config.bodies[1].mass,
        config.bodies[2].mass,
    ];
    let g = config.gravitational_constant;
    let epsilon = config.softening_epsilon;

    let state0 = [
        BodyState {
            position: config.bodies[0].position,
            velocity: config.bodies[0].velocity,
        },
        BodyState {
            position: config.bodies[1].position,
            velocity: config.bodies[1].velocity,
        },
        BodyState {
            position: config.bodies[2].position,
            velocity: config.bodies[2].velocity,
        },
    ];

    // Etapa k1 en t.
    let k1 = derivatives(&state0, &masses, g, epsilon);

    // Etapa k2 en t + h/2, evaluada sobre el estado avanzado con k1 * h/2.
    let state_k2 = advance(&state0, &k1, dt * 0.5);
    let k2 = derivatives(&state_k2, &masses, g, epsilon);

    // Etapa k3 en t + h/2, evaluada sobre el estado avanzado con k2 * h/2.
    let state_k3 = advance(&state0, &k2, dt * 0.5);
    let k3 = derivatives(&state_k3, &masses, g, epsilon);

    // Etapa k4 en t + h, evaluada sobre el estado avanzado con k3 * h.
    let state_k4 = advance(&state0, &k3, dt);
    let k4 = derivatives(&state_k4, &masses, g, epsilon);

    let weighted = combine(&k1, &k2, &k3, &k4);
    let final_state = advance(&state0, &weighted, dt);

    let mut bodies = config.bodies;
    for i in 0..3 {
        bodies[i] = Body {
            mass: masses[i],
            position: final_state[i].position,
            velocity: final_state[i].velocity,
        };
    }

    SystemConfiguration {
        bodies,
        gravitational_constant: g,
        softening_epsilon: epsilon,
    }
}
