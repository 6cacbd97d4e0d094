// [libs/domain/session-engine/src/hash_chain.rs]
//! Cadena de hashes precomputada: h_{L-1} = SHA256(seed), h_i = SHA256(h_{i+1}),
//! serverCommitment = SHA256(h_0). Inmutable tras su construccion; solo el
//! indice de consumo vive fuera de esta estructura.

use sha2::{Digest, Sha256};

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Secuencia ordenada de `length` digests SHA-256, indexada `0..length` de
/// modo que `chain()[nonce]` es la semilla de casa del giro de ese nonce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashChain {
    chain: Vec<String>,
    server_commitment: String,
}

impl HashChain {
    /// Construye la cadena a partir de una semilla aleatoria y una longitud.
    /// `h_{length-1} = SHA256(seed)`; cada elemento anterior es el SHA-256
    /// del siguiente; `serverCommitment = SHA256(h_0)`.
    #[must_use]
    pub fn new(seed: &[u8], length: usize) -> Self {
        assert!(length >= 1, "la cadena de hashes necesita al menos un elemento");

        let mut chain = vec![String::new(); length];
        chain[length - 1] = sha256_hex(seed);
        for index in (0..length - 1).rev() {
            chain[index] = sha256_hex(chain[index + 1].as_bytes());
        }

        let server_commitment = sha256_hex(chain[0].as_bytes());
        Self { chain, server_commitment }
    }

    /// El compromiso publicado por adelantado: `SHA256(h_0)`.
    #[must_use]
    pub fn server_commitment(&self) -> &str {
        &self.server_commitment
    }

    /// Cantidad total de elementos materializados (`chainLength`).
    #[must_use]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// `true` si la cadena no tiene elementos (nunca ocurre tras `new`, que
    /// exige `length >= 1`).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// El digest en la posicion `index`, si existe.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.chain.get(index).map(String::as_str)
    }

    /// Chequeo estructural usado por el verificador: cada digest almacenado
    /// tiene 64 caracteres hexadecimales en minuscula.
    #[must_use]
    pub fn all_digests_well_formed(&self) -> bool {
        self.chain
            .iter()
            .all(|digest| digest.len() == 64 && digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_elements_satisfy_the_iterated_hash_relation() {
        let chain = HashChain::new(b"seed-bytes", 4);
        assert_eq!(chain.get(3).unwrap(), sha256_hex(b"seed-bytes"));
        assert_eq!(chain.get(2).unwrap(), sha256_hex(chain.get(3).unwrap().as_bytes()));
        assert_eq!(chain.get(1).unwrap(), sha256_hex(chain.get(2).unwrap().as_bytes()));
        assert_eq!(chain.get(0).unwrap(), sha256_hex(chain.get(1).unwrap().as_bytes()));
    }

    #[test]
    fn server_commitment_is_sha256_of_head() {
        let chain = HashChain::new(b"seed-bytes", 4);
        assert_eq!(chain.server_commitment(), sha256_hex(chain.get(0).unwrap().as_bytes()));
    }

    #[test]
    fn two_chains_from_the_same_seed_are_identical() {
        let first = HashChain::new(b"deterministic-seed", 1000);
        let second = HashChain::new(b"deterministic-seed", 1000);
        assert_eq!(first, second);
    }

    #[test]
    fn all_digests_are_well_formed_lowercase_hex() {
        let chain = HashChain::new(b"seed-bytes", 10);
        assert!(chain.all_digests_well_formed());
    }
}
