use crate::core::{HeaderSet, Record};

/// Decoded file content split into its header and data lines.
///
/// Lines are separated on `\n` only and fields on a literal `,`. There is no
/// quoting: a comma inside a value always starts a new field.
#[derive(Debug)]
pub struct CsvDocument<'a> {
    headers: HeaderSet,
    rows: Vec<&'a str>,
}

impl<'a> CsvDocument<'a> {
    /// Surrounding whitespace is trimmed first, so a trailing newline does not
    /// produce an extra row. Empty content yields no headers and no rows.
    pub fn parse(content: &'a str) -> Self {
        let mut lines = content.trim().split('\n');
        let headers = lines.next().map(HeaderSet::from_line).unwrap_or_default();

        Self {
            headers,
            rows: lines.collect(),
        }
    }

    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    pub fn rows(&self) -> &[&'a str] {
        &self.rows
    }
}

/// Maps one data line onto the header columns by position. Missing values
/// become empty strings and values past the last header are dropped.
pub fn parse_row(headers: &HeaderSet, line: &str) -> Record {
    let mut values = line.split(',').map(str::trim);

    let data = headers
        .columns()
        .iter()
        .map(|name| (name.clone(), values.next().unwrap_or_default().to_string()))
        .collect();

    Record::with_data(data)
}
