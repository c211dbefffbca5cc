use crate::core::catalog::Catalog;
use crate::core::export::ExportError;
use crate::core::offering::{
    CourseId, CourseOffering, DISPLAY_COLUMNS, identity_label, parse_identity_label,
};
use std::collections::HashSet;

/// Result of adding an offering to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of a label-based removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveReport {
    pub removed: usize,
    /// Labels that match no entry and are not of the form `"<code> (<section>)"`.
    pub malformed: Vec<String>,
    /// Labels that render the same for more than one distinct identity.
    pub ambiguous: Vec<String>,
}

/// Result of merging an exported table back into the selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub duplicates: usize,
}

/// The courses a user has picked in this session, in the order they were
/// added. No two entries share a `CourseId`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<CourseOffering>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CourseOffering] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_selected(&self, id: &CourseId) -> bool {
        self.entries.iter().any(|e| e.has_id(id))
    }

    /// Append a copy of `offering` unless an entry with the same identity is
    /// already present.
    pub fn add(&mut self, offering: &CourseOffering) -> AddOutcome {
        if self.is_selected(&offering.id()) {
            return AddOutcome::AlreadyPresent;
        }
        self.entries.push(offering.clone());
        AddOutcome::Added
    }

    /// Remove every entry whose identity is in `ids`. Returns how many
    /// entries were actually removed; absent identities are ignored.
    pub fn remove(&mut self, ids: &HashSet<CourseId>) -> usize {
        let before = self.entries.len();
        self.entries.retain(|e| !ids.contains(&e.id()));
        before - self.entries.len()
    }

    /// Remove entries by their rendered identity label.
    ///
    /// A label only ever removes entries whose own label is identical to it.
    /// Labels shared by two different identities are skipped and reported.
    pub fn remove_labels(&mut self, labels: &[String]) -> RemoveReport {
        let mut report = RemoveReport::default();
        let mut targets = HashSet::new();

        for label in labels {
            let matching: HashSet<CourseId> = self
                .entries
                .iter()
                .filter(|e| identity_label(e) == *label)
                .map(CourseOffering::id)
                .collect();

            match matching.len() {
                0 => {
                    if let Err(e) = parse_identity_label(label) {
                        tracing::warn!(%label, error = %e, "Skipping malformed identity label");
                        report.malformed.push(label.clone());
                    }
                }
                1 => targets.extend(matching),
                _ => {
                    tracing::warn!(%label, "Skipping ambiguous identity label");
                    report.ambiguous.push(label.clone());
                }
            }
        }

        report.removed = self.remove(&targets);
        report
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of the numeric credit values; non-numeric credits count as zero.
    pub fn total_credits(&self) -> f32 {
        self.entries.iter().filter_map(CourseOffering::credit_value).sum()
    }

    /// Render the selection as CSV: a header row of `DISPLAY_COLUMNS`, then
    /// one row per entry in selection order.
    pub fn to_export_format(&self) -> Result<String, ExportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(DISPLAY_COLUMNS)?;
        for entry in &self.entries {
            writer.write_record(entry.display_values())?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| ExportError::Io(e.into_error()))?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Merge the rows of a previously exported table through `add`.
    pub fn import(&mut self, table: &Catalog) -> ImportReport {
        let mut report = ImportReport::default();
        for offering in table.offerings() {
            match self.add(offering) {
                AddOutcome::Added => report.added += 1,
                AddOutcome::AlreadyPresent => report.duplicates += 1,
            }
        }
        report
    }
}
