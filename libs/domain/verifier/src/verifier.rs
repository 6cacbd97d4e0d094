// [libs/domain/verifier/src/verifier.rs]
//! Recomputa, a partir de un `SpinRecord` almacenado y el `serverSecret`,
//! todo lo que un giro honesto habria producido, y compara bit a bit.
//! Sin estado propio; cada llamada es independiente de las anteriores.

use fairspin_domain_models::{SpinRecord, VerificationResult};
use fairspin_domain_reels::{map_spin, ReelConfiguration};
use fairspin_domain_session::HashChain;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use tracing::instrument;

type HmacSha256 = Hmac<Sha256>;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

fn hmac_hex(key: &[u8], message: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC acepta claves de cualquier longitud");
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Recomputa compromiso, entropia, firma, posiciones y simbolos de `record`
/// y los compara contra lo almacenado, en ese orden. Devuelve el primer
/// chequeo que falle; nunca intenta reparar nada.
#[instrument(skip(record, reel_config, server_secret), fields(spin_id = %record.spin_id))]
pub fn verify_spin_record(record: &SpinRecord, reel_config: &ReelConfiguration, server_secret: &[u8]) -> VerificationResult {
    let proof = &record.proof;

    let expected_commitment = sha256_hex(proof.house_seed.as_bytes());
    if expected_commitment != proof.commitment {
        return VerificationResult::failed("commitment");
    }

    let expected_entropy = hmac_hex(
        server_secret,
        &format!("{}:{}:{}", proof.house_seed, proof.client_seed, proof.nonce),
    );
    if expected_entropy != record.entropy_hex {
        return VerificationResult::failed("entropy");
    }

    let expected_signature = hmac_hex(
        server_secret,
        &format!("{}:{}:{}:{}", record.spin_id, proof.commitment, proof.client_seed, proof.nonce),
    );
    if expected_signature != proof.signature {
        return VerificationResult::failed("signature");
    }

    let outcome = match map_spin(&record.entropy_hex, record.bet, reel_config) {
        Ok(outcome) => outcome,
        Err(_) => return VerificationResult::failed("reelPositions"),
    };
    if outcome.positions != record.reel_positions {
        return VerificationResult::failed("reelPositions");
    }
    if outcome.symbols != record.symbols {
        return VerificationResult::failed("symbols");
    }

    VerificationResult::ok()
}

/// Verificacion estructural de la cadena de hashes de una sesion: cada
/// digest almacenado tiene 64 caracteres hex en minuscula, y `currentIndex`
/// nunca supera `chainLength`.
#[must_use]
pub fn verify_hash_chain_structure(hash_chain: &HashChain, current_index: u32) -> VerificationResult {
    if !hash_chain.all_digests_well_formed() {
        return VerificationResult::failed("hashChainDigestFormat");
    }
    if current_index as usize > hash_chain.len() {
        return VerificationResult::failed("currentIndex");
    }
    VerificationResult::ok()
}

/// Verificacion de sesion completa: cada giro del historial, en orden, mas
/// el chequeo estructural de la cadena de hashes. Devuelve el primer fallo
/// encontrado en cualquiera de las dos partes.
pub fn verify_session(
    spin_history: &[SpinRecord],
    reel_config: &ReelConfiguration,
    server_secret: &[u8],
    hash_chain: &HashChain,
    current_index: u32,
) -> VerificationResult {
    for record in spin_history {
        let result = verify_spin_record(record, reel_config, server_secret);
        if !result.valid {
            return result;
        }
    }
    verify_hash_chain_structure(hash_chain, current_index)
}
