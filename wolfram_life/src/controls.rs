// controls.rs - Driver-facing settings and the rule pattern editor model

use log::debug;

use crate::cell::Cell;
use crate::config::{SimConfig, Speed};
use crate::error::Result;
use crate::rule::RuleTable;
use crate::simulation::Simulation;
use crate::wolfram::Mode;

/// Settings a driver exposes to the user.
///
/// Speed and pause only affect scheduling. Mode and rule changes reach the
/// simulation through [`Controls::apply`], which re-initializes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub mode: Mode,
    pub rule: u64,
    pub speed: Speed,
    pub paused: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self::from_config(&SimConfig::default())
    }
}

/// One column of the pattern editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    /// Pattern index fed to [`RuleTable::toggle`].
    pub index: usize,
    /// Neighborhood cells for elementary rules, empty for totalistic sums.
    pub neighborhood: Vec<Cell>,
    pub output: Cell,
}

impl PatternEntry {
    pub fn label(&self) -> String {
        if self.neighborhood.is_empty() {
            format!("sum {}", self.index)
        } else {
            self.neighborhood
                .iter()
                .map(|cell| if cell.is_alive() { '1' } else { '0' })
                .collect()
        }
    }
}

impl Controls {
    pub fn from_config(config: &SimConfig) -> Self {
        Self {
            mode: config.mode,
            rule: config.rule,
            speed: Speed::default(),
            paused: false,
        }
    }

    /// Pushes mode and rule into the simulation. Returns whether it was reset.
    pub fn apply(&self, simulation: &mut Simulation) -> bool {
        simulation.configure(self.mode, self.rule)
    }

    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Table the editor shows for the current mode and rule.
    pub fn table(&self) -> RuleTable {
        RuleTable::for_mode(self.mode, self.rule)
    }

    /// Flips the output of one pattern and stores the re-encoded rule.
    ///
    /// The rule is re-encoded from the table, so bits wider than the table
    /// are dropped. On error the rule is left unchanged.
    pub fn toggle_pattern(&mut self, pattern: usize) -> Result<u64> {
        let toggled = self.table().toggle(pattern)?;
        let rule = toggled.encode();
        debug!("pattern {pattern} toggled: rule {} -> {rule}", self.rule);
        self.rule = rule;
        Ok(rule)
    }

    /// Every pattern with its current output, lowest index first.
    pub fn pattern_entries(&self) -> Vec<PatternEntry> {
        let table = self.table();
        (0..table.len())
            .map(|index| PatternEntry {
                index,
                neighborhood: match self.mode {
                    Mode::Elementary => (0..3)
                        .rev()
                        .map(|bit| Cell::from((index >> bit) & 1 == 1))
                        .collect(),
                    Mode::Totalistic => Vec::new(),
                },
                output: table.output(index),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AutomatonError;

    #[test]
    fn toggling_edits_the_rule_number() {
        let mut controls = Controls::default();
        assert_eq!(controls.toggle_pattern(3), Ok(22));
        assert_eq!(controls.rule, 22);
        assert_eq!(controls.toggle_pattern(3), Ok(30));
    }

    #[test]
    fn failed_toggles_keep_the_last_rule() {
        let mut controls = Controls { mode: Mode::Totalistic, rule: 10, ..Controls::default() };
        assert_eq!(
            controls.toggle_pattern(4),
            Err(AutomatonError::InvalidIndex { index: 4, size: 4 })
        );
        assert_eq!(controls.rule, 10);
    }

    #[test]
    fn wide_codes_are_masked_by_the_editor() {
        let mut controls = Controls { rule: 1935, ..Controls::default() };
        assert_eq!(controls.toggle_pattern(0), Ok(143 ^ 1));
    }

    #[test]
    fn elementary_entries_list_every_neighborhood() {
        let entries = Controls::default().pattern_entries();
        let labels: Vec<String> = entries.iter().map(PatternEntry::label).collect();
        assert_eq!(labels, ["000", "001", "010", "011", "100", "101", "110", "111"]);
        let outputs: Vec<bool> = entries.iter().map(|e| e.output.is_alive()).collect();
        // rule 30 = 00011110, read from pattern 0 upwards
        assert_eq!(outputs, [false, true, true, true, true, false, false, false]);
    }

    #[test]
    fn totalistic_entries_list_sums() {
        let controls = Controls { mode: Mode::Totalistic, rule: 0b1010, ..Controls::default() };
        let entries = controls.pattern_entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[2].label(), "sum 2");
        assert!(entries[1].output.is_alive());
        assert!(!entries[2].output.is_alive());
    }

    #[test]
    fn apply_resets_the_simulation_on_change() {
        let mut simulation = Simulation::new(&SimConfig { width: 9, height: 5, ..SimConfig::default() }).unwrap();
        let mut controls = Controls::default();
        assert!(!controls.apply(&mut simulation));
        simulation.step();
        controls.rule = 110;
        assert!(controls.apply(&mut simulation));
        assert_eq!(simulation.generation(), 0);
        assert_eq!(simulation.rule(), 110);
        assert!(controls.toggle_paused());
    }
}
