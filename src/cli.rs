//! Command-line arguments for the game binary.

use anyhow::{anyhow, Result};

pub const USAGE: &str = "\
usage: tui-flappy [--seed N]

  --seed N    seed the pipe generators for a reproducible run
  -h, --help  print this help

keys: space/up flap, g power-up, p pause, r restart, q quit
set TUI_FLAPPY_LOG=<file> to write logs (level via TUI_FLAPPY_LOG_LEVEL)";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CliOptions {
    pub seed: Option<u64>,
    pub help: bool,
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<CliOptions> {
    let mut opts = CliOptions::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                let seed = v
                    .parse::<u64>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                opts.seed = Some(seed);
            }
            "-h" | "--help" => opts.help = true,
            other => return Err(anyhow!("unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse_args(&[]).unwrap(), CliOptions::default());
    }

    #[test]
    fn parses_seed() {
        let opts = parse_args(&args(&["--seed", "42"])).unwrap();
        assert_eq!(opts.seed, Some(42));
        assert!(!opts.help);
    }

    #[test]
    fn rejects_bad_seed() {
        let err = parse_args(&args(&["--seed", "abc"])).unwrap_err();
        assert!(err.to_string().contains("invalid --seed"));
        assert!(parse_args(&args(&["--seed"])).is_err());
    }

    #[test]
    fn rejects_unknown_flag() {
        let err = parse_args(&args(&["--fast"])).unwrap_err();
        assert!(err.to_string().contains("--fast"));
    }

    #[test]
    fn help_flag() {
        assert!(parse_args(&args(&["-h"])).unwrap().help);
    }
}
