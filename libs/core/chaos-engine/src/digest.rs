// [libs/core/chaos-engine/src/digest.rs]
//! Extraccion de entropia: serializacion canonica del estado final del
//! sistema y su resumen SHA-256.

use crate::body::SystemConfiguration;
use sha2::{Digest, Sha256};

/// Resultado reproducible de una simulacion: el SHA-256 hexadecimal de la
/// serializacion canonica de las 18 componentes finales (posicion+velocidad
/// de los 3 cuerpos), junto con los metadatos de la ejecucion y el hash de
/// las condiciones iniciales. Inmutable una vez producido.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationDigest {
    /// SHA-256 hexadecimal (64 caracteres) del estado final.
    pub digest_hex: String,
    /// Duracion simulada solicitada.
    pub duration: f64,
    /// Paso de integracion utilizado.
    pub time_step: f64,
    /// Cantidad de pasos RK4 efectivamente ejecutados.
    pub steps: u64,
    /// SHA-256 hexadecimal de la serializacion canonica de las condiciones
    /// iniciales, para poder re-atar un digest a su punto de partida.
    pub initial_conditions_hash: String,
}

/// Formatea un `f64` como `<signo?><mantisa>.<15 digitos>e<exponente con signo>`,
/// el equivalente canonico de `%.15e` de la libreria estandar de C.
#[must_use]
pub fn format_canonical_exponential(value: f64) -> String {
    format!("{value:.15e}")
}

/// Concatena las 18 componentes (3 cuerpos x posicion+velocidad x 3 ejes) en
/// orden de cuerpo, cada una en notacion exponencial canonica, separadas por
/// `:`.
#[must_use]
pub fn canonical_state_string(config: &SystemConfiguration) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(18);
    for body in &config.bodies {
        for component in body.position.components() {
            parts.push(format_canonical_exponential(component));
        }
        for component in body.velocity.components() {
            parts.push(format_canonical_exponential(component));
        }
    }
    parts.join(":")
}

/// SHA-256 hexadecimal en minusculas de una cadena ASCII.
#[must_use]
pub fn sha256_hex(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    hex::encode(hasher.finalize())
}
