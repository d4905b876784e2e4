//! Runtime settings, taken from the command line with environment fallbacks.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_TICK_MS: u64 = 16; // ~60 FPS

#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "pixelshatter", about = "Terminal brick-breaking arcade game")]
pub struct Config {
    /// Milliseconds between physics ticks
    #[arg(
        long = "tick-ms",
        value_name = "MILLISECONDS",
        env = "PIXELSHATTER_TICK_MS",
        default_value_t = DEFAULT_TICK_MS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub tick_ms: u64,
    /// Fixed seed for brick layouts. Without one the layout comes from OS entropy.
    #[arg(long, value_name = "SEED", env = "PIXELSHATTER_SEED")]
    pub seed: Option<u64>,
    /// Log destination. Without one, logging stays off so it cannot
    /// scribble over the terminal UI.
    #[arg(long = "log-file", value_name = "PATH", env = "PIXELSHATTER_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Interval between physics ticks
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["pixelshatter"]).unwrap();
        assert_eq!(config.tick_ms, DEFAULT_TICK_MS);
        assert_eq!(config.tick_rate(), Duration::from_millis(16));
        assert_eq!(config.seed, None);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "pixelshatter",
            "--tick-ms",
            "33",
            "--seed",
            "1234",
            "--log-file",
            "/tmp/pixelshatter.log",
        ])
        .unwrap();
        assert_eq!(config.tick_rate(), Duration::from_millis(33));
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/pixelshatter.log")));
    }

    #[rstest]
    #[case(&["pixelshatter", "--tick-ms", "0"])]
    #[case(&["pixelshatter", "--tick-ms", "fast"])]
    #[case(&["pixelshatter", "--seed=-4"])]
    #[case(&["pixelshatter", "--frames", "3"])]
    fn test_rejects_bad_values(#[case] args: &[&str]) {
        assert!(Config::try_parse_from(args).is_err());
    }
}
