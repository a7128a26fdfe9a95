// simulation.rs - Scrolling board driven by a Wolfram row and Life below it

use log::{debug, trace};

use crate::cell::Cell;
use crate::config::{ReseedPolicy, SimConfig};
use crate::error::Result;
use crate::grid::Grid;
use crate::life;
use crate::rule::RuleTable;
use crate::wolfram::{Mode, Wolfram};

/// Owns the board and advances it one generation per [`Simulation::step`].
///
/// Two grids are kept and swap roles every step, so stepping never
/// allocates. Callers only ever see the grid of the last completed step.
#[derive(Debug, Clone)]
pub struct Simulation {
    buffers: [Grid; 2],
    current: usize,
    // top row before the shift, and the rule applied to it
    seed_row: Vec<Cell>,
    wolfram_row: Vec<Cell>,
    wolfram: Wolfram,
    generation: u64,
    reseeded: bool,
    reseed_period: u64,
    reseed_policy: ReseedPolicy,
}

impl Simulation {
    pub fn new(config: &SimConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        let mut simulation = Self {
            buffers: [grid.clone(), grid],
            current: 0,
            seed_row: vec![Cell::Dead; config.width],
            wolfram_row: vec![Cell::Dead; config.width],
            wolfram: Wolfram::new(config.mode, config.rule),
            generation: 0,
            reseeded: false,
            reseed_period: config.reseed_period,
            reseed_policy: config.reseed_policy,
        };
        simulation.initialize(config.mode, config.rule);
        Ok(simulation)
    }

    /// Resets to a single live cell at the top center and generation 0.
    pub fn initialize(&mut self, mode: Mode, rule: u64) {
        self.wolfram = Wolfram::new(mode, rule);
        self.current = 0;
        self.generation = 0;
        self.reseeded = false;
        for buffer in &mut self.buffers {
            buffer.clear();
        }
        let grid = &mut self.buffers[0];
        let center = grid.width() / 2;
        grid.set(center, 0, Cell::Alive);
        debug!("initialized {}x{} board, {mode} rule {rule}", grid.width(), grid.height());
    }

    /// Re-initializes only if `mode` or `rule` differ from the running ones.
    /// Returns whether a reset happened.
    pub fn configure(&mut self, mode: Mode, rule: u64) -> bool {
        if mode == self.wolfram.mode() && rule == self.wolfram.rule() {
            return false;
        }
        self.initialize(mode, rule);
        true
    }

    /// True when the step about to run will reseed the top row.
    pub fn is_reseed_tick(&self) -> bool {
        self.reseed_period != 0 && self.generation % self.reseed_period == 0
    }

    /// Advances one generation and returns the new board.
    ///
    /// Rows scroll down by one, the top row is replaced by the Wolfram rule
    /// applied to the old top row, and Life evolves everything below it. On
    /// reseed ticks the top row is rewritten once more afterwards, according
    /// to the configured [`ReseedPolicy`].
    pub fn step(&mut self) -> &Grid {
        let reseed = self.is_reseed_tick();
        let [first, second] = &mut self.buffers;
        let (front, back) = if self.current == 0 { (first, second) } else { (second, first) };

        self.seed_row.copy_from_slice(front.row(0));
        self.wolfram.next_row_into(&self.seed_row, &mut self.wolfram_row);
        front.scroll_down();
        front.row_mut(0).copy_from_slice(&self.wolfram_row);

        life::next_grid_into(front, back);

        if reseed {
            let source = match self.reseed_policy {
                ReseedPolicy::Advance => &self.wolfram_row,
                ReseedPolicy::Repeat => &self.seed_row,
            };
            self.wolfram.next_row_into(source, back.row_mut(0));
            trace!("reseeded top row at generation {}", self.generation);
        }

        self.reseeded = reseed;
        self.current ^= 1;
        self.generation += 1;
        &self.buffers[self.current]
    }

    pub fn grid(&self) -> &Grid {
        &self.buffers[self.current]
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last completed step reseeded the top row.
    pub fn reseeded(&self) -> bool {
        self.reseeded
    }

    pub fn mode(&self) -> Mode {
        self.wolfram.mode()
    }

    pub fn rule(&self) -> u64 {
        self.wolfram.rule()
    }

    pub fn rule_table(&self) -> &RuleTable {
        self.wolfram.table()
    }

    pub fn wolfram(&self) -> &Wolfram {
        &self.wolfram
    }

    pub fn reseed_policy(&self) -> ReseedPolicy {
        self.reseed_policy
    }

    /// Applies from the next reseed tick on; the board is kept.
    pub fn set_reseed_policy(&mut self, policy: ReseedPolicy) {
        self.reseed_policy = policy;
    }
}
