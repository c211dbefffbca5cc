use std::fmt;

/// Columns shown in the results and selection tables, in display order.
///
/// These are also the columns a catalog file must provide and the columns
/// written to an export.
pub const DISPLAY_COLUMNS: [&str; 11] = [
    "Course Code",
    "Title",
    "Section",
    "Day1",
    "Time1",
    "Day2",
    "Time2",
    "Room1",
    "Room2",
    "Faculty Name",
    "Credit",
];

/// Identity of an offering: the same course code in two sections is two
/// distinct offerings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId {
    pub code: String,
    pub section: String,
}

impl CourseId {
    pub fn new(code: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            section: section.into(),
        }
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.section)
    }
}

/// One row of the catalog. Every cell is kept as text; empty cells are empty
/// strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseOffering {
    pub code: String,
    pub title: String,
    pub section: String,
    pub day1: String,
    pub time1: String,
    pub day2: String,
    pub time2: String,
    pub room1: String,
    pub room2: String,
    pub faculty: String,
    /// Credit as written in the source, numeric or not.
    pub credit: String,
}

impl CourseOffering {
    pub fn id(&self) -> CourseId {
        CourseId::new(self.code.clone(), self.section.clone())
    }

    /// True when this offering has the given identity. Avoids allocating a
    /// `CourseId` during scans.
    pub fn has_id(&self, id: &CourseId) -> bool {
        self.code == id.code && self.section == id.section
    }

    /// Numeric view of the credit cell, if it parses.
    pub fn credit_value(&self) -> Option<f32> {
        self.credit.trim().parse::<f32>().ok()
    }

    /// Cells in `DISPLAY_COLUMNS` order.
    pub fn display_values(&self) -> [&str; 11] {
        [
            self.code.as_str(),
            self.title.as_str(),
            self.section.as_str(),
            self.day1.as_str(),
            self.time1.as_str(),
            self.day2.as_str(),
            self.time2.as_str(),
            self.room1.as_str(),
            self.room2.as_str(),
            self.faculty.as_str(),
            self.credit.as_str(),
        ]
    }

    /// Builds an offering from cells in `DISPLAY_COLUMNS` order.
    pub fn from_display_values(values: [String; 11]) -> Self {
        let [
            code,
            title,
            section,
            day1,
            time1,
            day2,
            time2,
            room1,
            room2,
            faculty,
            credit,
        ] = values;
        Self {
            code,
            title,
            section,
            day1,
            time1,
            day2,
            time2,
            room1,
            room2,
            faculty,
            credit,
        }
    }
}

/// Errors from parsing an identity label back into a `CourseId`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("label {0:?} is not of the form \"<code> (<section>)\"")]
    MissingSection(String),
    #[error("label {0:?} has an empty course code")]
    EmptyCode(String),
}

/// Human-readable identity, `"<code> (<section>)"`.
pub fn identity_label(offering: &CourseOffering) -> String {
    format!("{} ({})", offering.code, offering.section)
}

/// Parses `"<code> (<section>)"` back into an identity.
///
/// Splits at the last `" ("`, so a code containing the delimiter still
/// parses; a section containing it does not round-trip. Callers that hold
/// structured identities should use them instead.
pub fn parse_identity_label(label: &str) -> Result<CourseId, LabelError> {
    let inner = label
        .strip_suffix(')')
        .ok_or_else(|| LabelError::MissingSection(label.to_string()))?;
    let (code, section) = inner
        .rsplit_once(" (")
        .ok_or_else(|| LabelError::MissingSection(label.to_string()))?;
    if code.is_empty() {
        return Err(LabelError::EmptyCode(label.to_string()));
    }
    Ok(CourseId::new(code, section))
}
