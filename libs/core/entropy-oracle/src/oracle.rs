// [libs/core/entropy-oracle/src/oracle.rs]
//! El oraculo de entropia: compromisos, revelaciones y verificacion del
//! protocolo de compromiso-revelacion.
//!
//! El camino `preCommit`/`reveal` separa en el tiempo la publicacion del
//! compromiso de la revelacion de la semilla; `requestEntropy` colapsa ambos
//! pasos para flujos "rapidos" y es deliberadamente menos seguro (la
//! semilla de casa puede, en teoria, elegirse sabiendo ya la del cliente).

use crate::cache::PendingCommitmentCache;
use crate::config::OracleConfig;
use crate::errors::OracleError;
use fairspin_core_chaos::{run_simulation, SystemConfiguration};
use fairspin_domain_models::{HouseCommitment, SpinProof, VerificationResult};
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::{Digest, Sha256};
use tracing::{instrument, warn};

type HmacSha256 = Hmac<Sha256>;

const MIN_CLIENT_SEED_LEN: usize = 16;
const MAX_CLIENT_SEED_LEN: usize = 256;

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

fn validate_client_seed(client_seed: &str) -> Result<(), OracleError> {
    if !(MIN_CLIENT_SEED_LEN..=MAX_CLIENT_SEED_LEN).contains(&client_seed.len()) {
        return Err(OracleError::Validation {
            reason: format!(
                "clientSeed debe tener entre {MIN_CLIENT_SEED_LEN} y {MAX_CLIENT_SEED_LEN} caracteres, recibido {}",
                client_seed.len()
            ),
        });
    }
    Ok(())
}

/// Emisor de compromisos, revelaciones y verificaciones de entropia.
///
/// `serverSecret` es inmutable durante toda la vida del oraculo y nunca se
/// expone fuera de las firmas que produce.
pub struct EntropyOracle {
    cache: PendingCommitmentCache,
    server_secret: Vec<u8>,
    config: OracleConfig,
}

impl EntropyOracle {
    /// Construye un oraculo con el secreto de servidor y la configuracion
    /// dados.
    #[must_use]
    pub fn new(server_secret: Vec<u8>, config: OracleConfig) -> Self {
        Self {
            cache: PendingCommitmentCache::new(),
            server_secret,
            config,
        }
    }

    /// Genera una semilla de casa de 32 bytes criptograficamente fuertes, la
    /// cachea bajo `session_id` con el TTL configurado, y devuelve su
    /// compromiso SHA-256.
    #[instrument(skip(self))]
    pub fn pre_commit(&self, session_id: &str) -> HouseCommitment {
        let mut seed = vec![0u8; 32];
        rand::thread_rng().fill_bytes(&mut seed);
        let commitment = sha256_hex(&seed);
        self.cache.insert(session_id, seed, self.config.cache_ttl_millis);
        commitment
    }

    /// Consume el compromiso pendiente de `session_id` y produce la entropia
    /// revelada mas una prueba. Falla con `NoCommitment` si no hay entrada
    /// viva para la sesion.
    ///
    /// Si `config.cache_enabled` es `false`, la proteccion de un solo uso y
    /// TTL de la cache se desactiva por completo: la semilla se lee con
    /// `peek` y puede revelarse mas de una vez mientras siga en memoria.
    ///
    /// La firma de la prueba usa `proofId` (y no un `spinId` de sesion, que
    /// este oraculo independiente nunca ve) como componente de identidad;
    /// `fairspin-domain-verifier` recalcula la firma de un `SpinRecord` real
    /// con su propio `spinId`, una formula deliberadamente distinta.
    #[instrument(skip(self, client_seed))]
    pub fn reveal(&self, session_id: &str, client_seed: &str, nonce: u32) -> Result<(String, SpinProof), OracleError> {
        validate_client_seed(client_seed)?;
        let house_seed = if self.config.cache_enabled {
            self.cache.consume(session_id)?
        } else {
            self.cache.peek(session_id)?
        };

        let commitment = sha256_hex(&house_seed);
        let house_seed_hex = hex::encode(&house_seed);
        let entropy = hmac_hex(&house_seed, &format!("{client_seed}:{nonce}"));
        let proof_id = sha256_hex(session_id.as_bytes())[..32].to_string();
        let signature = hmac_hex(
            &self.server_secret,
            &format!("{proof_id}:{commitment}:{client_seed}:{nonce}"),
        );

        Ok((
            entropy,
            SpinProof {
                proof_id,
                commitment,
                house_seed: house_seed_hex,
                client_seed: client_seed.to_string(),
                nonce,
                signature,
            },
        ))
    }

    /// Recomputa compromiso, entropia, firma y formato de `proofId` a partir
    /// de `proof`, y los compara contra `entropy`/`commitment`. Las cuatro
    /// comprobaciones deben pasar; se reporta la primera que falle.
    #[must_use]
    pub fn verify(&self, entropy: &str, proof: &SpinProof, commitment: &HouseCommitment) -> VerificationResult {
        if !proof.has_well_formed_proof_id() {
            return VerificationResult::failed("proofId");
        }

        let Ok(house_seed) = hex::decode(&proof.house_seed) else {
            return VerificationResult::failed("houseSeed");
        };

        let expected_commitment = sha256_hex(&house_seed);
        if &expected_commitment != commitment {
            return VerificationResult::failed("commitment");
        }

        let expected_entropy = hmac_hex(&house_seed, &format!("{}:{}", proof.client_seed, proof.nonce));
        if expected_entropy != entropy {
            return VerificationResult::failed("entropy");
        }

        let expected_signature = hmac_hex(
            &self.server_secret,
            &format!("{}:{}:{}:{}", proof.proof_id, proof.commitment, proof.client_seed, proof.nonce),
        );
        if expected_signature != proof.signature {
            return VerificationResult::failed("signature");
        }

        VerificationResult::ok()
    }

    /// Flujo rapido: corre la simulacion de tres cuerpos inmediatamente,
    /// cachea su digest como semilla de casa, y revela en el mismo paso.
    ///
    /// Menos seguro que `preCommit`/`reveal`: no hay separacion temporal
    /// entre la eleccion de la semilla de casa y el conocimiento de la
    /// semilla del cliente.
    #[instrument(skip(self, initial_config, client_seed))]
    pub fn request_entropy(
        &self,
        session_id: &str,
        initial_config: SystemConfiguration,
        client_seed: &str,
        nonce: u32,
    ) -> Result<(String, SpinProof), OracleError> {
        warn!(session_id, "requestEntropy: modo rapido, sin separacion temporal entre semillas");
        let digest = run_simulation(initial_config, self.config.simulation)?;
        let house_seed = hex::decode(&digest.digest_hex).map_err(|_| OracleError::Validation {
            reason: "digest de simulacion no es hex valido".to_string(),
        })?;
        self.cache.insert(session_id, house_seed, self.config.cache_ttl_millis);
        self.reveal(session_id, client_seed, nonce)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Vinculacion del compromiso y entropia bien formada (§8): para
        /// cualquier clientSeed de longitud valida y cualquier nonce,
        /// `commitment == SHA256(houseSeed)` y la entropia revelada es hex
        /// de 64 caracteres en minusculas; `verify` acepta el resultado.
        #[test]
        fn commitment_binds_the_house_seed_and_entropy_is_well_formed(
            seed_bytes in prop::collection::vec(any::<u8>(), 8..32),
            nonce in any::<u32>(),
        ) {
            let oracle = EntropyOracle::new(b"server-secret-bytes".to_vec(), OracleConfig::default());
            let client_seed = hex::encode(&seed_bytes);
            let session_id = "proptest-session";

            let commitment = oracle.pre_commit(session_id);
            let (entropy, proof) = oracle.reveal(session_id, &client_seed, nonce).unwrap();

            let house_seed_bytes = hex::decode(&proof.house_seed).unwrap();
            prop_assert_eq!(sha256_hex(&house_seed_bytes), commitment.clone());
            prop_assert_eq!(&proof.commitment, &commitment);

            prop_assert_eq!(entropy.len(), 64);
            prop_assert!(entropy.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

            let verification = oracle.verify(&entropy, &proof, &commitment);
            prop_assert!(verification.valid);
        }
    }
}
