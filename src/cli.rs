use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};
use std::path::PathBuf;

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// What a single invocation does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Fetch,
    Export,
    Check,
    Seed,
    Sql,
}

/// Tennis score snapshots
///
/// By default runs the fetch pipeline once: asks a search-grounded model for
/// today's results, checks the answer looks like real scores, stores it in the
/// `score_snapshots` table and removes snapshots older than seven days.
/// Meant to be run from an hourly timer.
///
/// Required environment:
/// - GEMINI_API_KEY (fetch only)
/// - SUPABASE_URL
/// - SUPABASE_ANON_KEY
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch and validate as usual but print the result instead of saving it.
    #[arg(long = "dry-run", help_heading = "Fetch", conflicts_with_all = ["export", "check", "seed", "sql"])]
    pub dry_run: bool,

    /// Build the prompt for this date (YYYY-MM-DD) instead of today.
    #[arg(long = "date", short = 'd', help_heading = "Fetch", conflicts_with_all = ["export", "check", "seed", "sql"])]
    pub date: Option<String>,

    /// Export the players and matches tables to backup.json, players.csv and matches.csv,
    /// and report matches recorded more than once.
    #[arg(long = "export", short = 'e', help_heading = "Export", conflicts_with_all = ["check", "seed", "sql"])]
    pub export: bool,

    /// Directory the export files are written to.
    #[arg(long = "output-dir", short = 'o', help_heading = "Export", default_value = ".", value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Show the most recent snapshots. Inserts the sample snapshot if the table is empty.
    #[arg(long = "check", help_heading = "Data", conflicts_with_all = ["seed", "sql"])]
    pub check: bool,

    /// Insert the sample snapshot.
    #[arg(long = "seed", short = 's', help_heading = "Data", conflicts_with = "sql")]
    pub seed: bool,

    /// Print the SQL that creates the score_snapshots table.
    #[arg(long = "sql", help_heading = "Data")]
    pub sql: bool,

    /// Log at debug level.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.export {
            Mode::Export
        } else if self.check {
            Mode::Check
        } else if self.seed {
            Mode::Seed
        } else if self.sql {
            Mode::Sql
        } else {
            Mode::Fetch
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_fetch() {
        let args = Args::try_parse_from(["tennis_scores"]).unwrap();
        assert_eq!(args.mode(), Mode::Fetch);
        assert!(!args.dry_run);
        assert_eq!(args.output_dir, PathBuf::from("."));
    }

    #[test]
    fn test_mode_flags() {
        let args = Args::try_parse_from(["tennis_scores", "--export", "-o", "/tmp/out"]).unwrap();
        assert_eq!(args.mode(), Mode::Export);
        assert_eq!(args.output_dir, PathBuf::from("/tmp/out"));

        let args = Args::try_parse_from(["tennis_scores", "--seed"]).unwrap();
        assert_eq!(args.mode(), Mode::Seed);

        let args = Args::try_parse_from(["tennis_scores", "--check"]).unwrap();
        assert_eq!(args.mode(), Mode::Check);

        let args = Args::try_parse_from(["tennis_scores", "--sql"]).unwrap();
        assert_eq!(args.mode(), Mode::Sql);

        let args = Args::try_parse_from(["tennis_scores", "--dry-run", "-d", "2026-01-09"]).unwrap();
        assert_eq!(args.mode(), Mode::Fetch);
        assert_eq!(args.date.as_deref(), Some("2026-01-09"));
    }

    #[test]
    fn test_conflicting_modes_are_rejected() {
        assert!(Args::try_parse_from(["tennis_scores", "--export", "--seed"]).is_err());
        assert!(Args::try_parse_from(["tennis_scores", "--dry-run", "--sql"]).is_err());
        assert!(Args::try_parse_from(["tennis_scores", "--check", "--sql"]).is_err());
    }
}
