// [libs/domain/reel-engine/src/mapper.rs]
//! Funcion pura: digest de entropia + configuracion de carretes -> posiciones,
//! simbolos y monto de premio.

use crate::config::{Payline, ReelConfiguration, Symbol};
use crate::errors::ReelError;
use tracing::instrument;

/// Resultado de resolver un giro: posiciones por carrete, el simbolo elegido
/// en cada uno, y el monto total ganado.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinOutcome {
    pub positions: Vec<u32>,
    pub symbols: Vec<String>,
    pub win_amount: i64,
}

fn require_hex_ascii(entropy_hex: &str) -> Result<(), ReelError> {
    if !entropy_hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ReelError::InvalidEntropyEncoding);
    }
    Ok(())
}

/// Extrae la posicion de cada carrete a partir de 8 caracteres hex (32 bits)
/// del digest, interpretados como entero sin signo big-endian y reducidos
/// modulo `symbolsPerReel`.
pub fn extract_positions(entropy_hex: &str, config: &ReelConfiguration) -> Result<Vec<u32>, ReelError> {
    config.validate()?;
    require_hex_ascii(entropy_hex)?;

    let required = 8 * config.reel_count as usize;
    if entropy_hex.len() < required {
        return Err(ReelError::EntropyTooShort {
            required,
            got: entropy_hex.len(),
        });
    }

    let mut positions = Vec::with_capacity(config.reel_count as usize);
    for reel_index in 0..config.reel_count as usize {
        let start = 8 * reel_index;
        let slice = &entropy_hex[start..start + 8];
        let value = u32::from_str_radix(slice, 16).map_err(|_| ReelError::InvalidEntropyEncoding)?;
        positions.push(value % config.symbols_per_reel);
    }
    Ok(positions)
}

fn symbol_at(symbols: &[Symbol], position: u32) -> &Symbol {
    &symbols[position as usize % symbols.len()]
}

fn symbol_value(symbols: &[Symbol], id: &str) -> u32 {
    symbols.iter().find(|s| s.id == id).map_or(0, |s| s.value)
}

/// Mapea cada posicion a un identificador de simbolo, variante simplificada
/// (un simbolo por carrete, sin indexar por fila).
#[must_use]
pub fn positions_to_symbols(positions: &[u32], config: &ReelConfiguration) -> Vec<String> {
    positions
        .iter()
        .map(|&position| symbol_at(&config.symbols, position).id.clone())
        .collect()
}

/// Longitud del prefijo maximo de `symbols` que comparte el primer simbolo.
fn matching_prefix_length(symbols: &[String]) -> usize {
    let Some(first) = symbols.first() else { return 0 };
    symbols.iter().take_while(|s| *s == first).count()
}

fn payline_payout(bet: i64, symbols: &[String], payline: &Payline, reel_config: &ReelConfiguration) -> i64 {
    let prefix_len = matching_prefix_length(symbols);
    if prefix_len < 3 {
        return 0;
    }
    let value = symbol_value(&reel_config.symbols, &symbols[0]) as i64;
    bet * value * (prefix_len as i64 - 2) * payline.multiplier as i64
}

/// Variante simplificada y canonica (ver `map_spin`): suma, para cada
/// payline, el premio de su prefijo coincidente ignorando el indice de fila.
#[must_use]
pub fn compute_win_amount(bet: i64, symbols: &[String], config: &ReelConfiguration) -> i64 {
    config
        .paylines
        .iter()
        .map(|payline| payline_payout(bet, symbols, payline, config))
        .sum()
}

/// Resuelve un giro completo con la variante simplificada: un simbolo visible
/// por carrete, los indices de fila de los paylines son vestigiales. Esta es
/// la variante conectada a `fairspin-domain-session`.
#[instrument(skip(entropy_hex, config), fields(reel_count = config.reel_count))]
pub fn map_spin(entropy_hex: &str, bet: i64, config: &ReelConfiguration) -> Result<SpinOutcome, ReelError> {
    let positions = extract_positions(entropy_hex, config)?;
    let symbols = positions_to_symbols(&positions, config);
    let win_amount = compute_win_amount(bet, &symbols, config);
    Ok(SpinOutcome {
        positions,
        symbols,
        win_amount,
    })
}

/// Construye, para cada carrete, la ventana visible de `rowCount` simbolos
/// consecutivos de la tira (strip) a partir de su posicion, envolviendo
/// modulo `symbolsPerReel`.
#[must_use]
pub fn build_visible_grid(positions: &[u32], config: &ReelConfiguration) -> Vec<Vec<String>> {
    let row_count = config.row_count.max(1) as u32;
    positions
        .iter()
        .map(|&position| {
            (0..row_count)
                .map(|row| {
                    let strip_index = (position + row) % config.symbols_per_reel;
                    symbol_at(&config.symbols, strip_index).id.clone()
                })
                .collect()
        })
        .collect()
}

/// Variante consciente de filas para el interrogante abierto de §9: lee, en
/// cada carrete, el simbolo de la fila que indica el payline dentro de la
/// grilla visible (`build_visible_grid`), en vez de ignorar la fila.
pub fn map_spin_row_aware(entropy_hex: &str, bet: i64, config: &ReelConfiguration) -> Result<SpinOutcome, ReelError> {
    let positions = extract_positions(entropy_hex, config)?;
    let grid = build_visible_grid(&positions, config);

    let mut win_amount = 0i64;
    for payline in &config.paylines {
        let row_symbols: Vec<String> = grid
            .iter()
            .zip(payline.rows.iter())
            .map(|(reel_rows, &row)| reel_rows[row as usize].clone())
            .collect();
        win_amount += payline_payout(bet, &row_symbols, payline, config);
    }

    // La vista "al centro" (fila 0 de cada carrete) se reporta como los
    // simbolos del giro para mantener una forma de salida consistente con
    // la variante simplificada.
    let symbols = grid.iter().map(|rows| rows[0].clone()).collect();

    Ok(SpinOutcome {
        positions,
        symbols,
        win_amount,
    })
}
