//! Reading records from delimited text.
//!
//! Expected layout, one header line then one student per row:
//!
//! ```text
//! id,age,average,absences,category
//! s1,20,8.9,0.9,math
//! s2,23,4.5,0.9
//! ```
//!
//! The category column is optional per row. Rows with any other field count
//! are skipped. A numeric field that does not parse aborts the read, as does a
//! non-finite average or absence count, or a negative absence count.

use crate::error::{Error, Result};
use crate::record::Record;
use std::io;
use std::path::Path;

const ID: usize = 0;
const AGE: usize = 1;
const AVERAGE: usize = 2;
const ABSENCES: usize = 3;
const CATEGORY: usize = 4;

/// Read every record from `reader`, in row order, unencoded.
pub fn read_records<R: io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for row in rdr.records() {
        let row = row?;
        let line = row.position().map_or(0, csv::Position::line);

        if !(4..=5).contains(&row.len()) {
            tracing::warn!(line, fields = row.len(), "skipping row with wrong field count");
            skipped += 1;
            continue;
        }

        let field = |i: usize| row.get(i).unwrap_or_default();
        let age = parse(field(AGE), line, "age")?;
        let average = parse_real(field(AVERAGE), line, "average", f64::NEG_INFINITY)?;
        let absences = parse_real(field(ABSENCES), line, "absences", 0.0)?;

        records.push(Record::new(
            field(ID),
            age,
            average,
            absences,
            field(CATEGORY),
        ));
    }

    tracing::info!(records = records.len(), skipped, "records read");
    Ok(records)
}

/// Read every record from the file at `path`.
pub fn read_path(path: impl AsRef<Path>) -> Result<Vec<Record>> {
    let file = std::fs::File::open(path)?;
    read_records(io::BufReader::new(file))
}

fn parse<T: std::str::FromStr>(value: &str, line: u64, column: &'static str) -> Result<T> {
    value.parse().map_err(|_| Error::Malformed {
        line,
        column,
        value: value.to_owned(),
    })
}

/// Parse a finite real no smaller than `min`. NaN and infinities are rejected.
fn parse_real(value: &str, line: u64, column: &'static str, min: f64) -> Result<f64> {
    let x: f64 = parse(value, line, column)?;
    if !x.is_finite() || x < min {
        return Err(Error::Malformed {
            line,
            column,
            value: value.to_owned(),
        });
    }
    Ok(x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::record::Features;

    #[test]
    fn test_reads_rows_in_order() {
        let text = "id,age,average,absences,category\n\
                    s1,20,8.9,0.9,math\n\
                    s2, 23 , 4.5 ,0.9, art \n";
        let rs = read_records(text.as_bytes()).unwrap();
        assert_eq!(rs.len(), 2);
        assert_eq!(rs[0].id(), "s1");
        assert_eq!(rs[0].age(), 20);
        assert!((rs[0].average() - 8.9).abs() < 1e-12);
        assert_eq!(rs[0].category(), "math");
        assert_eq!(rs[1].age(), 23);
        assert_eq!(rs[1].category(), "art");
        assert!(!rs[0].is_encoded());
    }

    #[test]
    fn test_missing_category_is_empty() {
        let text = "id,age,average,absences\ns1,20,8.9,0.9\n";
        let rs = read_records(text.as_bytes()).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs[0].category(), "");
    }

    #[test]
    fn test_wrong_field_count_skipped() {
        let text = "id,age,average,absences,category\n\
                    s1,20,8.9\n\
                    s2,21,7.0,0.1,math,extra\n\
                    \n\
                    s3,22,6.0,0.2,art\n";
        let rs = read_records(text.as_bytes()).unwrap();
        assert_eq!(rs.len(), 1);
        assert_eq!(rs[0].id(), "s3");
    }

    #[test]
    fn test_unparsable_number_aborts() {
        let text = "id,age,average,absences,category\n\
                    s1,twenty,8.9,0.9,math\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        match err {
            Error::Malformed { line, column, value } => {
                assert_eq!(line, 2);
                assert_eq!(column, "age");
                assert_eq!(value, "twenty");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_negative_age_rejected() {
        let text = "id,age,average,absences\ns1,-3,8.9,0.9\n";
        assert!(matches!(
            read_records(text.as_bytes()),
            Err(Error::Malformed { column: "age", .. })
        ));
    }

    #[test]
    fn test_non_finite_reals_rejected() {
        for (row, column) in [
            ("s1,20,NaN,0.9,math", "average"),
            ("s1,20,inf,0.9,math", "average"),
            ("s1,20,8.9,inf,math", "absences"),
            ("s1,20,8.9,NaN,math", "absences"),
        ] {
            let text = format!("id,age,average,absences,category\n{row}\n");
            match read_records(text.as_bytes()) {
                Err(Error::Malformed { line: 2, column: c, .. }) => assert_eq!(c, column, "{row}"),
                other => panic!("{row}: unexpected result {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_absences_rejected() {
        let text = "id,age,average,absences,category\n\
                    s1,20,8.9,0.9,math\n\
                    s2,40,5.0,-3.0,art\n";
        let err = read_records(text.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed {
                line: 3,
                column: "absences",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_absences_accepted() {
        let text = "id,age,average,absences\ns1,20,0.0,0\n";
        let rs = read_records(text.as_bytes()).unwrap();
        assert_eq!(rs[0].absences(), 0.0);
    }

    #[test]
    fn test_header_only() {
        let rs = read_records("id,age,average,absences,category\n".as_bytes()).unwrap();
        assert!(rs.is_empty());
    }
}
