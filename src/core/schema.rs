/// Ordered column names taken from the first line of a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    columns: Vec<String>,
}

impl HeaderSet {
    /// Splits a header line on commas and trims each name. A blank line
    /// yields an empty set.
    pub fn from_line(line: &str) -> Self {
        if line.trim().is_empty() {
            return Self::default();
        }

        Self {
            columns: line.split(',').map(|s| s.trim().to_string()).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_line_trims_names() {
        let headers = HeaderSet::from_line(" id , name,email ");
        assert_eq!(headers.columns(), ["id", "name", "email"]);
    }

    #[test]
    fn test_blank_line_is_empty() {
        assert!(HeaderSet::from_line("").is_empty());
        assert!(HeaderSet::from_line("   \r").is_empty());
    }
}
