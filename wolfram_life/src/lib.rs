//! Two composed cellular automata on a scrolling board.
//!
//! A one-dimensional Wolfram automaton writes each new top row while Conway's
//! Game of Life evolves the rows beneath it. Everything here is synchronous
//! and free of I/O; drivers decide when to call [`Simulation::step`] and how
//! to draw the resulting [`Grid`].
//!
//! ```
//! use wolfram_life::{Mode, SimConfig, Simulation};
//!
//! let config = SimConfig { width: 32, height: 16, ..SimConfig::default() };
//! let mut simulation = Simulation::new(&config).unwrap();
//! simulation.step();
//! assert_eq!(simulation.generation(), 1);
//!
//! simulation.initialize(Mode::Totalistic, 1935);
//! assert_eq!(simulation.grid().population(), 1);
//! ```

pub mod cell;
pub mod config;
pub mod controls;
pub mod error;
pub mod grid;
pub mod life;
pub mod patterns;
pub mod presets;
pub mod rule;
pub mod simulation;
pub mod wolfram;

pub use cell::Cell;
pub use config::{ReseedPolicy, SimConfig, Speed};
pub use controls::{Controls, PatternEntry};
pub use error::{AutomatonError, Result};
pub use grid::Grid;
pub use rule::RuleTable;
pub use simulation::Simulation;
pub use wolfram::{Mode, Wolfram};
