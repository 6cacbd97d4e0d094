// [libs/domain/models/src/events.rs]
//! Eventos de observacion emitidos por la maquina de sesion.
//!
//! En vez de una jerarquia de herencia/emisor dinamico, la sesion mantiene
//! una lista explicita de observadores tipados (`Observer`) a los que
//! notifica variantes concretas de `SessionEvent`.

use crate::errors::ErrorClassification;
use crate::session_types::SessionState;
use crate::spin_record::SpinRecord;

/// Un evento observable emitido por la maquina de sesion.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// La sesion transiciono de un estado a otro.
    StateChange {
        from: SessionState,
        to: SessionState,
    },
    /// Un giro se resolvio (independientemente de si hubo premio).
    Spin(Box<SpinRecord>),
    /// Un giro produjo un premio mayor a cero.
    Win { spin_id: String, amount: i64 },
    /// La sesion entro en un estado de error.
    Error {
        classification: ErrorClassification,
        message: String,
    },
}

/// Implementado por cualquier coleccionista de eventos de sesion (logging,
/// metricas, proyecciones de lectura en el servicio que envuelve al nucleo).
pub trait Observer {
    /// Recibe un evento recien emitido.
    fn notify(&mut self, event: &SessionEvent);
}

/// Observador trivial que solo cuenta eventos por variante; util para
/// pruebas y como placeholder cuando no hace falta observabilidad real.
#[derive(Debug, Default)]
pub struct CountingObserver {
    pub state_changes: u64,
    pub spins: u64,
    pub wins: u64,
    pub errors: u64,
}

impl Observer for CountingObserver {
    fn notify(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::StateChange { .. } => self.state_changes += 1,
            SessionEvent::Spin(_) => self.spins += 1,
            SessionEvent::Win { .. } => self.wins += 1,
            SessionEvent::Error { .. } => self.errors += 1,
        }
    }
}
