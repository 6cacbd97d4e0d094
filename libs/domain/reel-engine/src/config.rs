// [libs/domain/reel-engine/src/config.rs]
//! Configuracion de carretes: simbolos, paylines y geometria de la grilla.

use crate::errors::ReelError;
use serde::{Deserialize, Serialize};

/// Un simbolo del set de carretes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub id: String,
    /// Valor entero >= 1 usado en el calculo de premios.
    pub value: u32,
}

/// Patron de pago a traves de los carretes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payline {
    /// Indice de fila (en `[0, rowCount)`) leido en cada carrete; su
    /// longitud debe igualar `reelCount`.
    pub rows: Vec<u8>,
    pub multiplier: u32,
}

/// Configuracion completa de una maquina de carretes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReelConfiguration {
    pub reel_count: u8,
    pub symbols_per_reel: u32,
    pub symbols: Vec<Symbol>,
    pub paylines: Vec<Payline>,
    /// Cantidad de filas visibles por carrete. `1` (el valor por defecto)
    /// hace que los indices de fila de los paylines sean vestigiales: el
    /// mapeador simplificado (`map_spin`) lee un unico simbolo por carrete
    /// sin importar `rows`. Valores mayores habilitan la variante
    /// consciente de filas (`map_spin_row_aware`), que sí los usa.
    pub row_count: u8,
}

impl ReelConfiguration {
    /// Valida la configuracion: `reelCount` en `[3, 8]`, `symbolsPerReel >= 1`,
    /// set de simbolos no vacio, y cada payline con la longitud correcta y
    /// filas dentro de rango.
    pub fn validate(&self) -> Result<(), ReelError> {
        if !(3..=8).contains(&self.reel_count) {
            return Err(ReelError::InvalidReelCount {
                reel_count: self.reel_count,
            });
        }
        if self.symbols_per_reel == 0 {
            return Err(ReelError::InvalidSymbolsPerReel);
        }
        if self.symbols.is_empty() {
            return Err(ReelError::EmptySymbolSet);
        }
        let row_count = self.row_count.max(1);
        for payline in &self.paylines {
            if payline.rows.len() != self.reel_count as usize {
                return Err(ReelError::InvalidPayline {
                    reason: format!(
                        "longitud {} no coincide con reelCount {}",
                        payline.rows.len(),
                        self.reel_count
                    ),
                });
            }
            if payline.rows.iter().any(|&row| row >= row_count) {
                return Err(ReelError::InvalidPayline {
                    reason: format!("indice de fila fuera de [0, {row_count})"),
                });
            }
        }
        Ok(())
    }
}
