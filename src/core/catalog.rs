use crate::core::offering::{CourseOffering, DISPLAY_COLUMNS};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Errors that can occur while loading a course table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// The static course table, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    offerings: Vec<CourseOffering>,
    source: Option<PathBuf>,
}

impl Catalog {
    pub fn new(offerings: Vec<CourseOffering>) -> Self {
        Self {
            offerings,
            source: None,
        }
    }

    /// Load a catalog from a CSV file on disk.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        tracing::info!(
            path = %path.display(),
            rows = catalog.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a CSV table with a header row.
    ///
    /// Header names are trimmed before matching and every column in
    /// `DISPLAY_COLUMNS` must be present. Other columns are ignored, short
    /// rows get empty cells. Rows pass through in source order, duplicates
    /// included.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
            .collect();

        let mut positions = [0usize; DISPLAY_COLUMNS.len()];
        let mut missing = Vec::new();
        for (slot, column) in positions.iter_mut().zip(DISPLAY_COLUMNS) {
            match headers.iter().position(|h| h == column) {
                Some(i) => *slot = i,
                None => missing.push(column.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let mut offerings = Vec::new();
        for record in reader.records() {
            let record = record?;
            let values = positions.map(|i| record.get(i).unwrap_or_default().to_string());
            offerings.push(CourseOffering::from_display_values(values));
        }

        Ok(Self::new(offerings))
    }

    /// Indices of offerings whose code or title contains `term`,
    /// case-insensitively, in catalog order.
    ///
    /// A blank term matches everything; callers that treat blank input as
    /// "no search" should not call this.
    pub fn search(&self, term: &str) -> Vec<usize> {
        let needle = term.to_lowercase();
        self.offerings
            .iter()
            .enumerate()
            .filter(|(_, o)| {
                contains_ignore_case(&o.code, &needle) || contains_ignore_case(&o.title, &needle)
            })
            .map(|(i, _)| i)
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&CourseOffering> {
        self.offerings.get(index)
    }

    pub fn offerings(&self) -> &[CourseOffering] {
        &self.offerings
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }

    /// Path the catalog was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// `needle` must already be lowercase. An empty haystack never matches a
/// non-empty needle.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
