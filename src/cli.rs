use crate::store::settings::Settings;
use clap::Parser;
use std::path::PathBuf;

/// Search a course catalog, build a shortlist, export it as CSV.
#[derive(Debug, Parser)]
#[command(name = "coursepick", version, about)]
pub struct Cli {
    /// Course catalog CSV (falls back to `catalog_path` in config.json)
    pub catalog: Option<PathBuf>,

    /// Export file path [default: my_courses.csv]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Start with the courses from a previous export
    #[arg(long, value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Command line first, then settings.
    pub fn catalog_path(&self, settings: &Settings) -> Option<PathBuf> {
        self.catalog
            .clone()
            .or_else(|| settings.catalog_path.clone())
    }

    pub fn export_path(&self, settings: &Settings) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| settings.export_path())
    }
}
