// args.rs - Command-line flags for the headless driver

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use wolfram_life::{Mode, ReseedPolicy, SimConfig, Speed};

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 40;

/// Board flags left unset fall back to the `--config` file, then to an
/// 80x40 default board.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about = "Headless Wolfram-seeded Game of Life", long_about = None)]
pub struct Args {
    /// JSON simulation settings; flags given alongside override it
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// elementary or totalistic [default: elementary]
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// [default: 30]
    #[arg(short, long)]
    pub rule: Option<u64>,

    /// slow, medium, fast or max
    #[arg(short, long, default_value_t = Speed::Fast)]
    pub speed: Speed,

    /// [default: 80]
    #[arg(long)]
    pub width: Option<usize>,

    /// [default: 40]
    #[arg(long)]
    pub height: Option<usize>,

    /// Stop after this many generations; run until interrupted if unset.
    #[arg(short, long)]
    pub generations: Option<u64>,

    /// Rows printed per frame; the whole board if unset.
    #[arg(long)]
    pub rows: Option<usize>,

    /// advance or repeat [default: advance]
    #[arg(long)]
    pub reseed: Option<ReseedPolicy>,
}

impl Args {
    /// Settings for the run: the config file if one was given, then flags.
    pub fn sim_config(&self) -> anyhow::Result<SimConfig> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => SimConfig {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                ..SimConfig::default()
            },
        };
        Ok(self.overlay(base))
    }

    /// Replaces the fields of `base` that were given as flags.
    pub fn overlay(&self, base: SimConfig) -> SimConfig {
        SimConfig {
            width: self.width.unwrap_or(base.width),
            height: self.height.unwrap_or(base.height),
            mode: self.mode.unwrap_or(base.mode),
            rule: self.rule.unwrap_or(base.rule),
            reseed_policy: self.reseed.unwrap_or(base.reseed_policy),
            ..base
        }
    }
}

/// Reads a JSON `SimConfig`. Missing fields keep their defaults.
pub fn load_config(path: &Path) -> anyhow::Result<SimConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("wolfram_life_coro").chain(args.iter().copied()))
    }

    fn write_config(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir()
            .join(format!("wolfram_life_coro-{}-{name}.json", std::process::id()));
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn no_flags_gives_defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.speed, Speed::Fast);
        assert_eq!(args.generations, None);
        let config = args.sim_config().unwrap();
        assert_eq!(config.mode, Mode::Elementary);
        assert_eq!((config.width, config.height, config.rule), (80, 40, 30));
        assert_eq!(config.reseed_period, 10);
        assert_eq!(config.reseed_policy, ReseedPolicy::Advance);
    }

    #[test]
    fn flags_fill_the_config() {
        let args = parse(&[
            "--mode", "totalistic", "--rule", "1935", "--speed", "max",
            "--width", "64", "--height", "32", "-g", "12",
            "--rows", "8", "--reseed", "repeat",
        ])
        .unwrap();
        let config = args.sim_config().unwrap();
        assert_eq!(config.mode, Mode::Totalistic);
        assert_eq!(config.rule, 1935);
        assert_eq!((config.width, config.height), (64, 32));
        assert_eq!(config.reseed_policy, ReseedPolicy::Repeat);
        assert_eq!(args.speed, Speed::Max);
        assert_eq!(args.generations, Some(12));
        assert_eq!(args.rows, Some(8));
    }

    #[test]
    fn config_files_fill_missing_fields_and_flags_win() {
        let path = write_config(
            "partial",
            r#"{ "mode": "totalistic", "rule": 1935, "reseed_policy": "repeat", "reseed_period": 0 }"#,
        );
        let file_only = parse(&["--config", path.to_str().unwrap()]).unwrap();
        let config = file_only.sim_config().unwrap();
        assert_eq!(
            config,
            SimConfig {
                mode: Mode::Totalistic,
                rule: 1935,
                reseed_period: 0,
                reseed_policy: ReseedPolicy::Repeat,
                ..SimConfig::default()
            }
        );

        let with_flags = parse(&["-c", path.to_str().unwrap(), "--rule", "2", "--width", "12"]).unwrap();
        let config = with_flags.sim_config().unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!((config.rule, config.width, config.height), (2, 12, 120));
        assert_eq!(config.mode, Mode::Totalistic);
        assert_eq!(config.reseed_period, 0);
    }

    #[test]
    fn bad_config_files_are_reported() {
        let path = write_config("malformed", r#"{ "mode": "hexagonal" }"#);
        let err = load_config(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("invalid config"), "{err}");

        let missing = std::env::temp_dir().join("wolfram_life_coro-does-not-exist.json");
        assert!(load_config(&missing).is_err());
    }

    #[test]
    fn bad_input_is_reported() {
        assert!(parse(&["--rule"]).is_err());
        assert!(parse(&["--rule", "thirty"]).is_err());
        assert!(parse(&["--mode", "hexagonal"]).is_err());
        assert!(parse(&["--zoom", "2x"]).is_err());
        assert!(parse(&["--width", "0"]).unwrap().sim_config().unwrap().validate().is_err());
    }
}
