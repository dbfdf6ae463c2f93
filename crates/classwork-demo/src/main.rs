//! Classwork demo harness
//!
//! Builds every entity in a roster and prints the transcript.
//! Runs entirely in-process: no networking, no persistence.
//!
//! Usage:
//!   cargo run -p classwork-demo
//!   cargo run -p classwork-demo -- --verbose
//!   cargo run -p classwork-demo -- --roster path/to/roster.json
//!
//! Set `RUST_LOG=info` to see where the roster came from.

use std::fmt;
use std::path::{Path, PathBuf};

use classwork_logic::roster::{validate_roster, Roster, RosterIssue};
use classwork_logic::transcript;

// ── Default roster (same JSON the tests use) ────────────────────────────
const ROSTER_JSON: &str = include_str!("../../../data/roster.json");

// ── Command line ────────────────────────────────────────────────────────

struct Options {
    verbose: bool,
    roster_path: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Options {
    let mut options = Options {
        verbose: false,
        roster_path: None,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--verbose" => options.verbose = true,
            "--roster" => match args.next() {
                Some(path) => options.roster_path = Some(PathBuf::from(path)),
                None => log::warn!("--roster given without a path, using embedded roster"),
            },
            other => log::warn!("ignoring unknown argument {other:?}"),
        }
    }
    options
}

// ── Roster loading ──────────────────────────────────────────────────────

#[derive(Debug)]
enum LoadError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse {
        origin: String,
        source: serde_json::Error,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "could not read {}: {}", path.display(), source)
            }
            Self::Parse { origin, source } => {
                write!(f, "could not parse roster from {origin}: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

fn parse_roster(json: &str, origin: &str) -> Result<Roster, LoadError> {
    serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })
}

fn load_roster(path: Option<&Path>) -> Result<Roster, LoadError> {
    match path {
        Some(path) => {
            log::info!("loading roster from {}", path.display());
            let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            parse_roster(&json, &path.display().to_string())
        }
        None => {
            log::info!("using embedded roster");
            parse_roster(ROSTER_JSON, "embedded roster")
        }
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn run(options: &Options) -> Result<(), LoadError> {
    let roster = load_roster(options.roster_path.as_deref())?;

    let issues = validate_roster(&roster);
    for issue in &issues {
        log::warn!("roster: {issue}");
    }
    if roster.is_empty() {
        log::warn!("roster is empty, nothing to print");
    }

    for line in transcript::render(&roster) {
        println!("{line}");
    }

    if options.verbose {
        println!();
        for line in verbose_report(&roster, &issues) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Launch tier per ship, then every roster issue.
fn verbose_report(roster: &Roster, issues: &[RosterIssue]) -> Vec<String> {
    let mut lines = vec!["--- Launch tiers ---".to_string()];
    for entry in &roster.ships {
        let ship = entry.to_spaceship();
        let outcome = ship.launch_outcome();
        let status = if outcome.reached_orbit() {
            "airborne"
        } else {
            "grounded"
        };
        lines.push(format!(
            "  {}: {} gallons -> {} ({})",
            ship.name(),
            ship.fuel(),
            outcome.label(),
            status
        ));
    }
    lines.push(format!("--- Roster issues: {} ---", issues.len()));
    for issue in issues {
        lines.push(format!("  ✗ {issue}"));
    }
    lines
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = parse_args(std::env::args().skip(1));
    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use classwork_logic::roster::ShipEntry;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        let options = parse_args(args(&[]));
        assert!(!options.verbose);
        assert!(options.roster_path.is_none());
    }

    #[test]
    fn test_parse_args_flags() {
        let options = parse_args(args(&["--verbose", "--roster", "crew.json"]));
        assert!(options.verbose);
        assert_eq!(options.roster_path, Some(PathBuf::from("crew.json")));
    }

    #[test]
    fn test_parse_args_dangling_roster() {
        let options = parse_args(args(&["--roster"]));
        assert!(options.roster_path.is_none());
    }

    #[test]
    fn test_embedded_roster_loads() {
        let roster = load_roster(None).unwrap();
        assert_eq!(roster, Roster::default());
    }

    #[test]
    fn test_roster_file_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"ships":[{{"name":"Serenity","captain":"Mal","fuel":80.5}}],"people":[{{"name":"Zoe"}}]}}"#
        )
        .unwrap();

        let roster = load_roster(Some(file.path())).unwrap();
        assert_eq!(roster.ships.len(), 1);
        assert_eq!(roster.ships[0].name, "Serenity");
        assert_eq!(roster.ships[0].captain, "Mal");
        assert_eq!(roster.ships[0].fuel, 80.5);
        assert!(roster.rectangles.is_empty());
        assert!(roster.books.is_empty());
        assert_eq!(roster.people[0].to_person().greet(), "Hello, Zoe.");
    }

    #[test]
    fn test_roster_file_with_bad_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[1, 2,").unwrap();
        let err = load_roster(Some(file.path())).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }

    #[test]
    fn test_verbose_report_default_roster() {
        let roster = Roster::default();
        let issues = validate_roster(&roster);
        assert_eq!(
            verbose_report(&roster, &issues),
            vec![
                "--- Launch tiers ---",
                "  Gatticca 3000: 15 gallons -> crashed (grounded)",
                "--- Roster issues: 0 ---",
            ]
        );
    }

    #[test]
    fn test_verbose_report_lists_tiers_and_issues() {
        let mut roster = Roster::default();
        roster.ships[0].fuel = -2.0;
        roster.ships.push(ShipEntry {
            name: "Serenity".to_string(),
            captain: "Mal".to_string(),
            fuel: 40.0,
        });
        let issues = validate_roster(&roster);
        assert_eq!(
            verbose_report(&roster, &issues),
            vec![
                "--- Launch tiers ---",
                "  Gatticca 3000: -2 gallons -> crashed (grounded)",
                "  Serenity: 40 gallons -> barely (airborne)",
                "--- Roster issues: 1 ---",
                "  ✗ ship #0 has invalid fuel -2",
            ]
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_roster(Some(Path::new("/nonexistent/classwork/roster.json"))).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().starts_with("could not read"));
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = parse_roster("{ not json", "inline").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
        assert!(err.to_string().contains("inline"));
    }
}
