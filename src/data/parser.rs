use csv::{ReaderBuilder, Trim};

use super::model::{Sample, TimelineDataset};
use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// CSV row parser
// ---------------------------------------------------------------------------

/// Parse the captured stdout of the test executable into a dataset.
///
/// The stream has no header; every line is `x,y[,extra...]` with decimal
/// fields.  Field counts may vary between lines, but each non-blank line
/// must carry at least the two values the scatterplot needs.  Blank lines
/// (including the usual trailing newline) are skipped rather than treated
/// as malformed rows.  Empty output parses to an empty dataset.
pub fn parse_rows(bytes: &[u8]) -> Result<TimelineDataset, ViewerError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let mut samples = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        // A whitespace-only line comes through as a single empty field.
        if record.iter().all(str::is_empty) {
            continue;
        }

        let values = record
            .iter()
            .map(|field| {
                field.parse::<f64>().map_err(|_| ViewerError::InvalidField {
                    line,
                    field: field.to_string(),
                })
            })
            .collect::<Result<Vec<f64>, ViewerError>>()?;

        if values.len() < 2 {
            return Err(ViewerError::ShortRow {
                line,
                fields: values.len(),
            });
        }

        samples.push(Sample { values });
    }

    log::debug!("parsed {} samples", samples.len());
    Ok(TimelineDataset { samples })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(ds: &TimelineDataset) -> Vec<Vec<f64>> {
        ds.samples.iter().map(|s| s.values.clone()).collect()
    }

    #[test]
    fn parses_one_row_per_line_in_order() {
        let ds = parse_rows(b"0.0,1.0\n1.0,2.0\n2.0,1.5\n").unwrap();
        assert_eq!(
            values(&ds),
            vec![vec![0.0, 1.0], vec![1.0, 2.0], vec![2.0, 1.5]]
        );
        assert_eq!(ds.xs().collect::<Vec<_>>(), vec![0.0, 1.0, 2.0]);
        assert_eq!(ds.ys().collect::<Vec<_>>(), vec![1.0, 2.0, 1.5]);
    }

    #[test]
    fn extra_trailing_fields_are_kept_on_the_row() {
        let ds = parse_rows(b"3.14,2.71,9.99\n").unwrap();
        assert_eq!(values(&ds), vec![vec![3.14, 2.71, 9.99]]);
        // The plot only ever reads the first two.
        assert_eq!(ds.samples[0].x(), 3.14);
        assert_eq!(ds.samples[0].y(), 2.71);
    }

    #[test]
    fn non_numeric_field_names_the_offender_and_line() {
        let err = parse_rows(b"abc,1.0\n").unwrap_err();
        match err {
            ViewerError::InvalidField { line, field } => {
                assert_eq!(line, 1);
                assert_eq!(field, "abc");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
        assert!(parse_rows(b"abc,1.0\n")
            .unwrap_err()
            .to_string()
            .contains("abc"));
    }

    #[test]
    fn invalid_field_reports_the_right_line() {
        let err = parse_rows(b"0.0,1.0\n1.0,x\n").unwrap_err();
        match err {
            ViewerError::InvalidField { line, field } => {
                assert_eq!(line, 2);
                assert_eq!(field, "x");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }

    #[test]
    fn single_field_line_is_a_short_row() {
        let err = parse_rows(b"1.0\n").unwrap_err();
        match err {
            ViewerError::ShortRow { line, fields } => {
                assert_eq!(line, 1);
                assert_eq!(fields, 1);
            }
            other => panic!("expected ShortRow, got {other:?}"),
        }
    }

    #[test]
    fn two_fields_is_valid_minimal_input() {
        let ds = parse_rows(b"1.0,2.0\n").unwrap();
        assert_eq!(values(&ds), vec![vec![1.0, 2.0]]);
    }

    #[test]
    fn empty_output_is_an_empty_dataset() {
        assert!(parse_rows(b"").unwrap().is_empty());
        assert!(parse_rows(b"\n").unwrap().is_empty());
        assert!(parse_rows(b"   \n").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_between_rows_are_skipped() {
        let ds = parse_rows(b"0.0,1.0\n\n1.0,2.0\n\n").unwrap();
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn row_count_matches_non_empty_line_count() {
        let input = b"0.0,0.0\n1.0,1.0\n2.0,4.0\n3.0,9.0\n";
        let non_empty = input.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();
        assert_eq!(parse_rows(input).unwrap().len(), non_empty);
    }

    #[test]
    fn parsing_is_idempotent() {
        let input = b"0.5,-1.25\n1e3,2.5e-2,7\n";
        assert_eq!(parse_rows(input).unwrap(), parse_rows(input).unwrap());
    }

    #[test]
    fn formatted_floats_round_trip() {
        let ds = parse_rows(b"0.1,123.456\n").unwrap();
        for v in &ds.samples[0].values {
            let reparsed: f64 = format!("{v}").parse().unwrap();
            assert_eq!(reparsed, *v);
        }
    }
}
