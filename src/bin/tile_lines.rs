//! tile-lines: print the cells on a line between two grid locations.
//!
//! Run: `tile-lines --mode covering 0,0 3,1`

use anyhow::{bail, Context, Result};
use clap::Parser;
use tile_lines::config::LineConfig;
use tile_lines::prelude::*;

/// Print the cells on a line between two grid locations
#[derive(Parser, Debug)]
#[command(name = "tile-lines")]
#[command(version)]
#[command(about = "Diagonal and covering lines on a tile grid", long_about = None)]
struct Cli {
    /// Start cell as COL,ROW
    #[arg(allow_hyphen_values = true, value_parser = parse_location)]
    start: Location,

    /// End cell as COL,ROW
    #[arg(allow_hyphen_values = true, value_parser = parse_location)]
    end: Location,

    /// Line mode (diagonal or covering); overrides the config file
    #[arg(short, long)]
    mode: Option<LineMode>,

    /// Leave out the two endpoint cells
    #[arg(short, long)]
    exclusive: bool,

    /// Config file path
    #[arg(short, long)]
    config: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn parse_location(s: &str) -> Result<Location> {
    let Some((col, row)) = s.split_once(',') else {
        bail!("expected COL,ROW, got {s:?}");
    };
    let col = col.trim().parse().with_context(|| format!("bad column in {s:?}"))?;
    let row = row.trim().parse().with_context(|| format!("bad row in {s:?}"))?;
    Ok(Location::new(col, row))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = match &cli.config {
        Some(path) => LineConfig::load(path)?,
        None => LineConfig::default(),
    };

    let mode = cli.mode.unwrap_or(config.defaults.mode);
    let exclusive = cli.exclusive || config.defaults.exclusive;
    let request = LineRequest::new(mode, cli.start, cli.end).exclusive(exclusive);

    for cell in request.rasterize() {
        println!("{cell}");
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_location() {
        let loc = parse_location("3,-7").unwrap();
        assert_eq!(loc.coords(), (3, -7));
        assert_eq!(parse_location(" -2 , 5 ").unwrap().coords(), (-2, 5));
    }

    #[test]
    fn test_parse_location_missing_comma() {
        let err = parse_location("3 7").unwrap_err();
        assert!(err.to_string().contains("expected COL,ROW"));
    }

    #[test]
    fn test_parse_location_bad_numbers() {
        let err = parse_location("x,7").unwrap_err();
        assert!(err.to_string().contains("bad column"));
        let err = parse_location("3,").unwrap_err();
        assert!(err.to_string().contains("bad row"));
    }
}
