//! Characterization table rows and the comma-separated table format.
//!
//! A table file has a header line naming its columns followed by one row
//! per characterized latency:
//!
//! ```text
//! latency(ns),idle energy(pJ),dynamic energy(pJ),area(um^2)
//! 0.5,0.0004495,0.3045,406
//! 1,0.000775,0.2625,350
//! ```
//!
//! Only `latency(ns)` is mandatory. Area-only tables carry `latency(ns)` and
//! `area(um^2)`; unknown columns are ignored.

use crate::error::TableError;

const LATENCY_COLUMN: &str = "latency(ns)";

/// A value column of a characterization table.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Metric {
    /// Energy per cycle while idle, in pJ.
    IdleEnergy,
    /// Energy per action, in pJ.
    DynamicEnergy,
    /// Area, in um².
    Area,
}

impl Metric {
    /// Returns the column header of this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::IdleEnergy => "idle energy(pJ)",
            Metric::DynamicEnergy => "dynamic energy(pJ)",
            Metric::Area => "area(um^2)",
        }
    }

    const ALL: [Metric; 3] = [Metric::IdleEnergy, Metric::DynamicEnergy, Metric::Area];
}

/// One characterized operating point.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterizationRow {
    /// The latency exactly as written in the file, used for key matching.
    pub latency_key: String,
    /// The latency in nanoseconds.
    pub latency_ns: f64,
    /// Idle energy in pJ, if the table carries it.
    pub idle_energy: Option<f64>,
    /// Dynamic energy in pJ, if the table carries it.
    pub dynamic_energy: Option<f64>,
    /// Area in um², if the table carries it.
    pub area: Option<f64>,
}

impl CharacterizationRow {
    /// Returns the value of the given metric, if present.
    pub fn get(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::IdleEnergy => self.idle_energy,
            Metric::DynamicEnergy => self.dynamic_energy,
            Metric::Area => self.area,
        }
    }
}

/// All characterized rows of one primitive family, in file order.
///
/// The first row is the fallback for latencies the table does not carry.
#[derive(Clone, Debug)]
pub struct CharacterizationTable {
    name: String,
    rows: Vec<CharacterizationRow>,
}

impl CharacterizationTable {
    /// Parses a table from its text.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] for a missing `latency(ns)` column, a
    /// row with the wrong number of fields or a non-numeric cell, and
    /// [`TableError::Empty`] if there are no data rows.
    pub fn parse(name: &str, text: &str) -> Result<Self, TableError> {
        let parse_err = |line: usize, message: String| TableError::Parse {
            table: name.to_string(),
            line,
            message,
        };

        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (header_line, header) = lines
            .next()
            .ok_or_else(|| TableError::Empty(name.to_string()))?;
        let columns: Vec<&str> = header.split(',').map(str::trim).collect();
        let index_of = |column: &str| columns.iter().position(|c| *c == column);

        let latency_idx = index_of(LATENCY_COLUMN).ok_or_else(|| {
            parse_err(header_line, format!("missing '{LATENCY_COLUMN}' column"))
        })?;
        let metric_idx: Vec<(Metric, usize)> = Metric::ALL
            .iter()
            .filter_map(|&m| index_of(m.column()).map(|i| (m, i)))
            .collect();

        let mut rows = Vec::new();
        for (line_no, line) in lines {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() != columns.len() {
                return Err(parse_err(
                    line_no,
                    format!(
                        "expected {} fields, found {}",
                        columns.len(),
                        fields.len()
                    ),
                ));
            }
            let number = |idx: usize| -> Result<f64, TableError> {
                fields[idx].parse::<f64>().map_err(|_| {
                    parse_err(
                        line_no,
                        format!("'{}' in column '{}' is not a number", fields[idx], columns[idx]),
                    )
                })
            };

            let mut row = CharacterizationRow {
                latency_key: fields[latency_idx].to_string(),
                latency_ns: number(latency_idx)?,
                idle_energy: None,
                dynamic_energy: None,
                area: None,
            };
            for &(metric, idx) in &metric_idx {
                let value = Some(number(idx)?);
                match metric {
                    Metric::IdleEnergy => row.idle_energy = value,
                    Metric::DynamicEnergy => row.dynamic_energy = value,
                    Metric::Area => row.area = value,
                }
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(TableError::Empty(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            rows,
        })
    }

    /// Returns the table name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the rows in file order.
    pub fn rows(&self) -> &[CharacterizationRow] {
        &self.rows
    }

    /// Returns the row whose latency key equals `key`, if any.
    pub fn find(&self, key: &str) -> Option<&CharacterizationRow> {
        self.rows.iter().find(|r| r.latency_key == key)
    }

    /// Returns the fallback row.
    pub fn first(&self) -> &CharacterizationRow {
        // `parse` rejects tables without rows.
        &self.rows[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = "\
latency(ns),idle energy(pJ),dynamic energy(pJ),area(um^2)
1,0.001,0.25,300
5,0.003,0.2,280
";

    #[test]
    fn parse_full_table() {
        let table = CharacterizationTable::parse("adder", FULL).unwrap();
        assert_eq!(table.name(), "adder");
        assert_eq!(table.rows().len(), 2);
        let row = table.find("5").unwrap();
        assert_eq!(row.latency_ns, 5.0);
        assert_eq!(row.get(Metric::IdleEnergy), Some(0.003));
        assert_eq!(row.get(Metric::DynamicEnergy), Some(0.2));
        assert_eq!(row.get(Metric::Area), Some(280.0));
        assert_eq!(table.first().latency_key, "1");
    }

    #[test]
    fn parse_area_only_table() {
        let text = "latency(ns),area(um^2)\n0.5,12.5\n2,10\n";
        let table = CharacterizationTable::parse("reg_area", text).unwrap();
        let row = table.find("0.5").unwrap();
        assert_eq!(row.get(Metric::Area), Some(12.5));
        assert_eq!(row.get(Metric::DynamicEnergy), None);
    }

    #[test]
    fn keys_are_matched_textually() {
        let text = "latency(ns),area(um^2)\n1.0,3\n";
        let table = CharacterizationTable::parse("t", text).unwrap();
        assert!(table.find("1").is_none());
        assert!(table.find("1.0").is_some());
    }

    #[test]
    fn blank_lines_and_spaces_ignored() {
        let text = "\nlatency(ns), area(um^2)\n\n 2 , 7 \n";
        let table = CharacterizationTable::parse("t", text).unwrap();
        assert_eq!(table.find("2").unwrap().area, Some(7.0));
    }

    #[test]
    fn missing_latency_column() {
        let err = CharacterizationTable::parse("t", "area(um^2)\n3\n").unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 1, .. }));
    }

    #[test]
    fn ragged_row() {
        let err = CharacterizationTable::parse("t", "latency(ns),area(um^2)\n1,2,3\n").unwrap_err();
        assert!(matches!(err, TableError::Parse { line: 2, .. }));
    }

    #[test]
    fn non_numeric_cell() {
        let err = CharacterizationTable::parse("t", "latency(ns),area(um^2)\n1,big\n").unwrap_err();
        match err {
            TableError::Parse { message, .. } => assert!(message.contains("'big'")),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn header_only_is_empty() {
        let err = CharacterizationTable::parse("t", "latency(ns),area(um^2)\n").unwrap_err();
        assert!(matches!(err, TableError::Empty(_)));
        let err = CharacterizationTable::parse("t", "").unwrap_err();
        assert!(matches!(err, TableError::Empty(_)));
    }
}
