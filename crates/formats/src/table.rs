/// Happy-path CSV table: comma-delimited, first line is the header, every
/// cell trimmed. Quoting and escaped delimiters are deliberately out of
/// scope; the source dataset never uses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvTableError {
    Empty,
}

impl std::fmt::Display for CsvTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CsvTableError::Empty => write!(f, "CSV input is empty"),
        }
    }
}

impl std::error::Error for CsvTableError {}

impl CsvTable {
    /// Blank lines are skipped. Short rows are padded with empty cells and
    /// long rows truncated, so every row matches the header width.
    pub fn parse(text: &str) -> Result<Self, CsvTableError> {
        let mut lines = text.trim().lines();
        let header_line = lines.next().filter(|l| !l.trim().is_empty());
        let Some(header_line) = header_line else {
            return Err(CsvTableError::Empty);
        };

        let headers: Vec<String> = header_line.split(',').map(|h| h.trim().to_string()).collect();

        let mut rows = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let mut cells: Vec<String> = line.split(',').map(|c| c.trim().to_string()).collect();
            cells.resize(headers.len(), String::new());
            rows.push(cells);
        }

        Ok(Self { headers, rows })
    }

    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }
}

#[cfg(test)]
mod tests {
    use super::{CsvTable, CsvTableError};
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_header_and_rows_with_trimming() {
        let t = CsvTable::parse("a, b ,c\n 1,2 ,3\n\n4,5,6\n").unwrap();
        assert_eq!(t.headers, vec!["a", "b", "c"]);
        assert_eq!(t.rows, vec![vec!["1", "2", "3"], vec!["4", "5", "6"]]);
    }

    #[test]
    fn pads_and_truncates_rows_to_header_width() {
        let t = CsvTable::parse("a,b,c\n1\n1,2,3,4").unwrap();
        assert_eq!(t.rows[0], vec!["1", "", ""]);
        assert_eq!(t.rows[1], vec!["1", "2", "3"]);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(CsvTable::parse(""), Err(CsvTableError::Empty));
        assert_eq!(CsvTable::parse("  \n \n"), Err(CsvTableError::Empty));
    }

    #[test]
    fn column_finds_headers() {
        let t = CsvTable::parse("country,region\nJapan,Asia").unwrap();
        assert_eq!(t.column("region"), Some(1));
        assert_eq!(t.column("continent"), None);
    }
}
