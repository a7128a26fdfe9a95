// rule.rs - Rule number <-> output table codec

use log::debug;

use crate::cell::Cell;
use crate::error::{AutomatonError, Result};
use crate::wolfram::Mode;

/// Entries in an elementary (3-cell) rule table.
pub const ELEMENTARY_TABLE_SIZE: usize = 8;
/// Entries in a totalistic table: neighborhood sums 0..=3.
pub const TOTALISTIC_TABLE_SIZE: usize = 4;
/// Widest table a `u64` rule number can describe.
pub const MAX_TABLE_SIZE: usize = u64::BITS as usize;

/// Output table decoded from a rule number.
///
/// Entries are stored most-significant bit first: position 0 holds the
/// highest bit, so the output for pattern `p` lives at `len - 1 - p`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleTable {
    outputs: Vec<Cell>,
}

impl RuleTable {
    /// Decodes the low `size` bits of `rule`. Higher bits are dropped.
    pub fn decode(rule: u64, size: usize) -> Self {
        let size = size.min(MAX_TABLE_SIZE);
        let masked = rule & mask(size);
        if masked != rule {
            debug!("rule {rule} truncated to {masked} for a {size}-entry table");
        }
        let outputs = (0..size)
            .map(|i| Cell::from((masked >> (size - 1 - i)) & 1 == 1))
            .collect();
        Self { outputs }
    }

    /// Like [`RuleTable::decode`], but rejects rules with bits above `size`.
    pub fn try_decode(rule: u64, size: usize) -> Result<Self> {
        let size = size.min(MAX_TABLE_SIZE);
        if rule & !mask(size) != 0 {
            return Err(AutomatonError::RuleOutOfRange { rule, bits: size });
        }
        Ok(Self::decode(rule, size))
    }

    pub fn elementary(rule: u64) -> Self {
        Self::decode(rule, ELEMENTARY_TABLE_SIZE)
    }

    pub fn totalistic(rule: u64) -> Self {
        Self::decode(rule, TOTALISTIC_TABLE_SIZE)
    }

    /// Table sized for `mode`: 8 entries elementary, 4 totalistic.
    pub fn for_mode(mode: Mode, rule: u64) -> Self {
        match mode {
            Mode::Elementary => Self::elementary(rule),
            Mode::Totalistic => Self::totalistic(rule),
        }
    }

    /// Builds a table directly from MSB-first outputs.
    pub fn from_outputs(mut outputs: Vec<Cell>) -> Self {
        outputs.truncate(MAX_TABLE_SIZE);
        Self { outputs }
    }

    /// Concatenates the outputs high bit first.
    pub fn encode(&self) -> u64 {
        self.outputs
            .iter()
            .fold(0, |acc, cell| (acc << 1) | u64::from(cell.bit()))
    }

    /// Returns a copy with the output for `pattern` flipped.
    pub fn toggle(&self, pattern: usize) -> Result<Self> {
        let position = self.position(pattern)?;
        let mut outputs = self.outputs.clone();
        outputs[position] = outputs[position].toggled();
        Ok(Self { outputs })
    }

    /// Output for a pattern index (0 = `000`). Out-of-range patterns are dead.
    pub fn output(&self, pattern: usize) -> Cell {
        self.position(pattern)
            .map_or(Cell::Dead, |position| self.outputs[position])
    }

    /// MSB-first outputs.
    pub fn outputs(&self) -> &[Cell] {
        &self.outputs
    }

    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    fn position(&self, pattern: usize) -> Result<usize> {
        let size = self.outputs.len();
        if pattern >= size {
            return Err(AutomatonError::InvalidIndex { index: pattern, size });
        }
        Ok(size - 1 - pattern)
    }
}

fn mask(size: usize) -> u64 {
    if size >= MAX_TABLE_SIZE { u64::MAX } else { (1u64 << size) - 1 }
}
