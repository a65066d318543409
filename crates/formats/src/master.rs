use dataset::{CountryRecord, Dataset};
use foundation::{DemographicFilter, Dimension, SampleYear};

use crate::table::{CsvTable, CsvTableError};

/// Loader errors for the primary dataset. Both variants are fatal for the
/// session; the dashboard does not initialize without the master data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MasterDataError {
    Table(CsvTableError),
    /// Parsed, but every row was dropped (no non-empty country cell).
    NoUsableRows,
}

impl std::fmt::Display for MasterDataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MasterDataError::Table(e) => write!(f, "master data table error: {e}"),
            MasterDataError::NoUsableRows => {
                write!(f, "master data contains no usable country rows")
            }
        }
    }
}

impl std::error::Error for MasterDataError {}

/// What a header column means for a row.
enum ColumnKind {
    Country,
    Region,
    Continent,
    Dimension(Dimension),
    /// Sampled year count for a demographic slice.
    Migration(SampleYear, DemographicFilter),
    /// Numeric by the header rule (4-digit-year prefix) but not a sampled
    /// year, or any other column. Carried by the raw table, ignored here.
    Other,
}

fn classify(header: &str) -> ColumnKind {
    match header {
        "country" => return ColumnKind::Country,
        "region" => return ColumnKind::Region,
        "continent" => return ColumnKind::Continent,
        _ => {}
    }
    if let Some(dim) = Dimension::from_code(header) {
        return ColumnKind::Dimension(dim);
    }

    // Year columns: `<year>` or `<year>_<filter>` with a 4-digit prefix.
    let digits: String = header.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.len() == 4 {
        if let Some(year) = digits.parse::<u16>().ok().and_then(SampleYear::new) {
            let filter = match header[4..].strip_prefix('_') {
                None if header.len() == 4 => DemographicFilter::All,
                Some("male") => DemographicFilter::Male,
                Some("female") => DemographicFilter::Female,
                _ => return ColumnKind::Other,
            };
            return ColumnKind::Migration(year, filter);
        }
    }
    ColumnKind::Other
}

/// Numeric cell contract: unparseable or empty numeric cells become 0.
fn numeric(cell: &str) -> f64 {
    cell.parse::<f64>().unwrap_or(0.0)
}

/// Parses the master CSV into country records, preserving row order.
///
/// Rows whose `country` cell is empty or whitespace are dropped; every
/// other row is kept.
pub fn parse_master_csv(text: &str) -> Result<Vec<CountryRecord>, MasterDataError> {
    let table = CsvTable::parse(text).map_err(MasterDataError::Table)?;
    let kinds: Vec<ColumnKind> = table.headers.iter().map(|h| classify(h)).collect();

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let mut record = CountryRecord::default();
        for (cell, kind) in row.iter().zip(&kinds) {
            match kind {
                ColumnKind::Country => record.name = cell.clone(),
                ColumnKind::Region => record.region = cell.clone(),
                ColumnKind::Continent => record.continent = cell.clone(),
                ColumnKind::Dimension(dim) => record.culture.set(*dim, numeric(cell)),
                ColumnKind::Migration(year, filter) => {
                    record.migration.set(*filter, *year, numeric(cell));
                }
                ColumnKind::Other => {}
            }
        }
        if record.name.trim().is_empty() {
            continue;
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(MasterDataError::NoUsableRows);
    }
    Ok(records)
}

/// Convenience wrapper: parse and index in one step.
pub fn load_dataset(text: &str) -> Result<Dataset, MasterDataError> {
    parse_master_csv(text).map(Dataset::from_records)
}

#[cfg(test)]
mod tests {
    use super::{MasterDataError, load_dataset, parse_master_csv};
    use foundation::{DemographicFilter, Dimension, SampleYear};
    use pretty_assertions::assert_eq;

    const CSV: &str = "\
country,region,continent,pdi,idv,2024,2024_male,2024_female,2021
Japan,East Asia,Asia,54,46,100,60,40,7
Brazil,South America,South America,69,38,50,30,20,3
,ghost,row,1,2,3,4,5,6
Kenya,East Africa,Africa,64,n/a,,12,8,1
";

    #[test]
    fn keeps_every_row_with_a_country_name() {
        let records = parse_master_csv(CSV).unwrap();
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Japan", "Brazil", "Kenya"]);
    }

    #[test]
    fn maps_dimension_and_migration_columns() {
        let records = parse_master_csv(CSV).unwrap();
        let japan = &records[0];
        let y2024 = SampleYear::new(2024).unwrap();

        assert_eq!(japan.region, "East Asia");
        assert_eq!(japan.dimension(Dimension::PowerDistance), 54.0);
        assert_eq!(japan.migration_count(DemographicFilter::All, y2024), 100.0);
        assert_eq!(japan.migration_count(DemographicFilter::Male, y2024), 60.0);
        assert_eq!(japan.migration_count(DemographicFilter::Female, y2024), 40.0);
    }

    #[test]
    fn unparseable_numeric_cells_become_zero() {
        let records = parse_master_csv(CSV).unwrap();
        let kenya = &records[2];
        let y2024 = SampleYear::new(2024).unwrap();

        // "n/a" and an empty cell both land on the numeric default.
        assert_eq!(kenya.dimension(Dimension::Individualism), 0.0);
        assert_eq!(kenya.migration_count(DemographicFilter::All, y2024), 0.0);
        assert_eq!(kenya.migration_count(DemographicFilter::Male, y2024), 12.0);
    }

    #[test]
    fn header_only_input_reports_no_usable_rows() {
        let err = parse_master_csv("country,region\n,\n , \n").unwrap_err();
        assert_eq!(err, MasterDataError::NoUsableRows);
    }

    #[test]
    fn load_dataset_preserves_order_and_lookup() {
        let ds = load_dataset(CSV).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(ds.get("Brazil").is_some());
    }
}
