// [libs/domain/models/src/proof.rs]
//! Tipos de compromiso y prueba del protocolo commit-reveal.

use serde::{Deserialize, Serialize};

/// SHA-256 hexadecimal (64 caracteres en minusculas) de una semilla de casa
/// todavia no revelada. Se publica antes de conocer la semilla del cliente.
pub type HouseCommitment = String;

/// Prueba inmutable adjunta a un giro o a una revelacion del oraculo de
/// entropia. El significado exacto de `commitment`/`signature` depende de
/// quien la construyo (el oraculo de compromiso-revelacion o la maquina de
/// sesion), pero la forma es la misma en ambos casos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpinProof {
    /// 32 caracteres hexadecimales en minuscula (rebanada de SHA-256(spinId)).
    pub proof_id: String,
    /// Compromiso publicado antes de la revelacion: SHA-256(houseSeed).
    pub commitment: HouseCommitment,
    /// Semilla de la casa, revelada.
    pub house_seed: String,
    /// Semilla aportada por el cliente.
    pub client_seed: String,
    /// Indice/nonce de la revelacion dentro de la sesion o del oraculo.
    pub nonce: u32,
    /// HMAC-SHA-256(serverSecret, spinId:commitment:clientSeed:nonce).
    pub signature: String,
}

impl SpinProof {
    /// `true` si `proof_id` cumple el formato exigido: 32 caracteres
    /// hexadecimales en minuscula.
    #[must_use]
    pub fn has_well_formed_proof_id(&self) -> bool {
        self.proof_id.len() == 32 && self.proof_id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_proof() -> SpinProof {
        SpinProof {
            proof_id: "a".repeat(32),
            commitment: "b".repeat(64),
            house_seed: "c".repeat(64),
            client_seed: "client-seed-value".to_string(),
            nonce: 0,
            signature: "d".repeat(64),
        }
    }

    #[test]
    fn well_formed_proof_id_is_accepted() {
        assert!(sample_proof().has_well_formed_proof_id());
    }

    #[test]
    fn wrong_length_proof_id_is_rejected() {
        let mut proof = sample_proof();
        proof.proof_id = "a".repeat(31);
        assert!(!proof.has_well_formed_proof_id());
    }

    #[test]
    fn uppercase_proof_id_is_rejected() {
        let mut proof = sample_proof();
        proof.proof_id = "A".repeat(32);
        assert!(!proof.has_well_formed_proof_id());
    }
}
