//! Tabular user import.
//!
//! Reads CSV (or tab-separated) text with a header row into [`UserRecord`]s.
//! Header names are matched case-insensitively; `name` and `age` are required
//! and any other columns are ignored. Parsing is all-or-nothing: the first bad
//! row aborts the whole import.

use csv::{ReaderBuilder, StringRecord};

use crate::domain::UserRecord;

const NAME_COLUMN: &str = "name";
const AGE_COLUMN: &str = "age";

/// Reasons a tabular payload is rejected.
///
/// Row numbers are 1-based and count data rows only, excluding the header.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// The payload holds no header row at all.
    #[error("no columns to parse from input")]
    Empty,
    /// The payload is not valid delimited text.
    #[error("malformed tabular data: {message}")]
    Malformed { message: String },
    /// The header lacks a required column.
    #[error("missing required column '{column}'")]
    MissingColumn { column: &'static str },
    /// A row has no value for a required column.
    #[error("row {row}: missing value for '{column}'")]
    MissingField { row: usize, column: &'static str },
    /// A row's age cell is not an integer.
    #[error("row {row}: age '{value}' is not an integer")]
    InvalidAge { row: usize, value: String },
}

impl ImportError {
    /// Stable machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Empty => "empty_input",
            Self::Malformed { .. } => "malformed_input",
            Self::MissingColumn { .. } => "missing_column",
            Self::MissingField { .. } => "missing_field",
            Self::InvalidAge { .. } => "invalid_age",
        }
    }

    /// Data row the failure refers to, if it is row specific.
    pub fn row(&self) -> Option<usize> {
        match self {
            Self::MissingField { row, .. } | Self::InvalidAge { row, .. } => Some(*row),
            Self::Empty | Self::Malformed { .. } | Self::MissingColumn { .. } => None,
        }
    }

    /// Column the failure refers to, if any.
    pub fn column(&self) -> Option<&'static str> {
        match self {
            Self::MissingColumn { column } | Self::MissingField { column, .. } => Some(*column),
            Self::InvalidAge { .. } => Some(AGE_COLUMN),
            Self::Empty | Self::Malformed { .. } => None,
        }
    }

    fn malformed(error: &csv::Error) -> Self {
        Self::Malformed {
            message: error.to_string(),
        }
    }
}

/// Parse tabular text into records, preserving row order.
///
/// # Examples
/// ```
/// use roster::domain::parse_user_table;
///
/// let records = parse_user_table(b"Name,AGE\nCara,22\nCarl,28\n").expect("valid table");
/// assert_eq!(records.len(), 2);
/// assert_eq!(records[0].name(), "Cara");
/// assert_eq!(records[1].age(), 28);
/// ```
///
/// # Errors
/// Returns [`ImportError`] when the text is empty or malformed, a required
/// column is absent, or any row lacks a usable `name` or `age`.
pub fn parse_user_table(data: &[u8]) -> Result<Vec<UserRecord>, ImportError> {
    if data.iter().all(u8::is_ascii_whitespace) {
        return Err(ImportError::Empty);
    }

    let delimiter = sniff_delimiter(data);
    ensure_quotes_closed(data, delimiter)?;

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|err| ImportError::malformed(&err))?
        .clone();
    let columns = Columns::locate(&headers)?;

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = result.map_err(|err| ImportError::malformed(&err))?;
        records.push(columns.extract(&row, index + 1)?);
    }
    Ok(records)
}

/// Tab-separated when the header line has tabs but no commas.
fn sniff_delimiter(data: &[u8]) -> u8 {
    let header = data.split(|byte| *byte == b'\n').next().unwrap_or_default();
    if header.contains(&b'\t') && !header.contains(&b',') {
        b'\t'
    } else {
        b','
    }
}

/// Reject input whose last quoted field never closes.
///
/// The `csv` reader treats end of input as closing any open quote, which would
/// silently swallow the rest of the file into one cell. Quotes only open a
/// field when they are its first byte; a doubled quote inside a quoted field
/// is an escaped literal.
fn ensure_quotes_closed(data: &[u8], delimiter: u8) -> Result<(), ImportError> {
    let mut line = 1;
    let mut opened_on = None;
    let mut at_field_start = true;
    let mut bytes = data.iter().copied().peekable();

    while let Some(byte) = bytes.next() {
        if byte == b'\n' {
            line += 1;
        }
        match opened_on {
            Some(_) if byte == b'"' => {
                if bytes.peek() == Some(&b'"') {
                    bytes.next();
                } else {
                    opened_on = None;
                    at_field_start = false;
                }
            }
            Some(_) => {}
            None if at_field_start && byte == b'"' => {
                opened_on = Some(line);
                at_field_start = false;
            }
            None => at_field_start = byte == delimiter || byte == b'\n' || byte == b'\r',
        }
    }

    match opened_on {
        Some(line) => Err(ImportError::Malformed {
            message: format!("unterminated quoted field starting on line {line}"),
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, Copy)]
struct Columns {
    name: usize,
    age: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self, ImportError> {
        let position = |column: &'static str| {
            headers
                .iter()
                .position(|header| normalise_header(header) == column)
                .ok_or(ImportError::MissingColumn { column })
        };
        Ok(Self {
            name: position(NAME_COLUMN)?,
            age: position(AGE_COLUMN)?,
        })
    }

    fn extract(self, row: &StringRecord, row_number: usize) -> Result<UserRecord, ImportError> {
        let name = row
            .get(self.name)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ImportError::MissingField {
                row: row_number,
                column: NAME_COLUMN,
            })?;
        let raw_age = row
            .get(self.age)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ImportError::MissingField {
                row: row_number,
                column: AGE_COLUMN,
            })?;
        let age = raw_age
            .parse::<i64>()
            .map_err(|_| ImportError::InvalidAge {
                row: row_number,
                value: raw_age.to_owned(),
            })?;
        Ok(UserRecord::imported(name, age))
    }
}

fn normalise_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_lowercase()
}
