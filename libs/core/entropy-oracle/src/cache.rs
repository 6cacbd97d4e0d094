// [libs/core/entropy-oracle/src/cache.rs]
//! Cache de compromisos pendientes: un mapeo sessionId -> semilla de casa,
//! de un solo uso y con TTL, con semantica de escritor unico por clave.

use crate::errors::OracleError;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::RwLock;

struct CacheEntry {
    house_seed: Vec<u8>,
    used: bool,
    expires_at_millis: i64,
}

/// Mapeo `sessionId -> (semilla, usado, expiracion)` compartido entre hilos
/// de sesion. Una entrada se consume una unica vez; las entradas vencidas se
/// podan en el proximo acceso a esa clave.
#[derive(Default)]
pub struct PendingCommitmentCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
}

impl PendingCommitmentCache {
    /// Crea una cache vacia.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Inserta una semilla de casa bajo `session_id`, con vencimiento
    /// `ttl_millis` desde ahora. Sobrescribe cualquier entrada previa para la
    /// misma sesion.
    pub fn insert(&self, session_id: &str, house_seed: Vec<u8>, ttl_millis: i64) {
        let expires_at_millis = Utc::now().timestamp_millis() + ttl_millis;
        let mut entries = self.entries.write().expect("lock de cache envenenado");
        entries.insert(
            session_id.to_string(),
            CacheEntry {
                house_seed,
                used: false,
                expires_at_millis,
            },
        );
    }

    /// Consume la entrada de `session_id`: falla con `NoCommitment` si no
    /// existe, ya fue usada, o expiro. Una entrada expirada se elimina aqui
    /// mismo en vez de devolverse.
    pub fn consume(&self, session_id: &str) -> Result<Vec<u8>, OracleError> {
        let mut entries = self.entries.write().expect("lock de cache envenenado");
        let now = Utc::now().timestamp_millis();

        let no_commitment = || OracleError::NoCommitment {
            session_id: session_id.to_string(),
        };

        match entries.get(session_id) {
            None => return Err(no_commitment()),
            Some(entry) if entry.used || entry.expires_at_millis < now => {
                entries.remove(session_id);
                return Err(no_commitment());
            }
            Some(_) => {}
        }

        let entry = entries.get_mut(session_id).expect("verificado arriba");
        entry.used = true;
        Ok(entry.house_seed.clone())
    }

    /// Lee la semilla de casa de `session_id` sin marcarla usada ni exigir
    /// que su TTL siga vigente. Respaldo de `OracleConfig::cache_enabled =
    /// false`: el llamador renuncia a la proteccion de un solo uso.
    pub fn peek(&self, session_id: &str) -> Result<Vec<u8>, OracleError> {
        let entries = self.entries.read().expect("lock de cache envenenado");
        entries
            .get(session_id)
            .map(|entry| entry.house_seed.clone())
            .ok_or_else(|| OracleError::NoCommitment {
                session_id: session_id.to_string(),
            })
    }

    /// Elimina toda entrada vencida al momento de la llamada. Uso
    /// administrativo opcional; `consume` ya poda perezosamente.
    pub fn prune_expired(&self) {
        let now = Utc::now().timestamp_millis();
        let mut entries = self.entries.write().expect("lock de cache envenenado");
        entries.retain(|_, entry| entry.expires_at_millis >= now);
    }
}
