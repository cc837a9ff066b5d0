use std::path::PathBuf;

use clap::Parser;
use tasklist_core::Locale;

#[derive(Parser, Debug)]
#[command(name = "tasklist")]
#[command(version, about = "A single-screen to-do list for the terminal", long_about = None)]
pub struct Cli {
    /// Interface language (pt-br or en)
    #[arg(short, long, env = "TASKLIST_LANG", default_value = "pt-br")]
    pub lang: Locale,

    /// Task to add at startup (repeatable)
    #[arg(short = 't', long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long, env = "TASKLIST_LOG_FILE", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub locale: Locale,
    pub seed_tasks: Vec<String>,
    pub log_file: Option<PathBuf>,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Self {
            locale: cli.lang,
            seed_tasks: cli.tasks,
            log_file: cli.log_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config: Config = Cli::try_parse_from(["tasklist"]).unwrap().into();
        assert_eq!(config.locale, Locale::PtBr);
        assert!(config.seed_tasks.is_empty());
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "tasklist",
            "--lang",
            "en",
            "-t",
            "Buy milk",
            "--task",
            "Walk dog",
            "--log-file",
            "/tmp/tasklist.log",
        ])
        .unwrap();
        let config = Config::from(cli);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(config.seed_tasks, vec!["Buy milk", "Walk dog"]);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/tasklist.log")));
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(Cli::try_parse_from(["tasklist", "--lang", "fr"]).is_err());
    }
}
