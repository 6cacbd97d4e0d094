// [libs/domain/models/src/session_types.rs]
//! Estados de la maquina de sesion (ver matriz de transicion en
//! `fairspin-domain-session`).

use serde::{Deserialize, Serialize};

/// Estado explicito de una sesion de maquina tragamonedas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Init,
    AwaitingBet,
    EntropyRequested,
    Spinning,
    ResultReady,
    Complete,
    /// Sumidero terminal alcanzable desde cualquier estado no terminal;
    /// solo transiciona de vuelta a `Init` via `reset`.
    Error,
}

impl SessionState {
    /// `true` si `self -> to` es una transicion permitida por la matriz
    /// cerrada del estado de sesion.
    #[must_use]
    pub fn can_transition_to(self, to: Self) -> bool {
        use SessionState::{AwaitingBet, Complete, EntropyRequested, Error, Init, ResultReady, Spinning};

        match (self, to) {
            (Init, AwaitingBet) => true,
            (AwaitingBet, EntropyRequested) => true,
            (EntropyRequested, Spinning) => true,
            (Spinning, ResultReady) => true,
            (ResultReady, AwaitingBet) => true,
            (AwaitingBet, Complete) => true,
            (_, Error) if self != Error => true,
            (Error, Init) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SessionState::{AwaitingBet, Complete, EntropyRequested, Error, Init, ResultReady, Spinning};

    #[test]
    fn full_spin_cycle_is_allowed() {
        assert!(Init.can_transition_to(AwaitingBet));
        assert!(AwaitingBet.can_transition_to(EntropyRequested));
        assert!(EntropyRequested.can_transition_to(Spinning));
        assert!(Spinning.can_transition_to(ResultReady));
        assert!(ResultReady.can_transition_to(AwaitingBet));
    }

    #[test]
    fn error_is_reachable_from_every_non_terminal_state_and_only_resets_to_init() {
        for state in [Init, AwaitingBet, EntropyRequested, Spinning, ResultReady] {
            assert!(state.can_transition_to(Error));
        }
        assert!(Error.can_transition_to(Init));
        assert!(!Error.can_transition_to(AwaitingBet));
        assert!(!Error.can_transition_to(Error));
    }

    #[test]
    fn disallowed_transitions_are_rejected() {
        assert!(!Init.can_transition_to(Spinning));
        assert!(!AwaitingBet.can_transition_to(ResultReady));
        assert!(!Complete.can_transition_to(AwaitingBet));
    }
}
