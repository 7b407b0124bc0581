//! Series-collection transposition.

use crate::error::{ChartDataError, ChartDataResult};
use crate::types::{DataPoint, Row};

/// Transpose a series collection so each per-position category becomes a
/// series and each series key becomes a category.
///
/// Output row `i` takes its key from the first input row's `values[i]` and
/// collects `values[i].value` of every input row in order, keyed by that
/// row's key. Alignment is strictly positional; category keys are never
/// re-matched by name, so rows whose categories are ordered differently
/// transpose by position, not by label.
///
/// The transform is pure and self-inverse: rotating twice reproduces the
/// original keys and values. An empty input rotates to an empty output.
///
/// Returns [`ChartDataError::ShapeMismatch`] when rows have unequal `values`
/// lengths, since a positional transpose of ragged input would pair values
/// with the wrong categories.
///
/// ```rust
/// use chart_data_analysis::transform::rotate;
/// use chart_data_analysis::types::{DataPoint, Row};
///
/// let input = vec![
///     Row::new("2000", vec![DataPoint::new("UK", 9.0), DataPoint::new("France", 2.0)]),
///     Row::new("2001", vec![DataPoint::new("UK", 10.0), DataPoint::new("France", 10.0)]),
/// ];
///
/// let output = rotate(&input).unwrap();
/// assert_eq!(output[0].key, "UK");
/// assert_eq!(output[0].values[1], DataPoint::new("2001", 10.0));
/// ```
pub fn rotate(rows: &[Row]) -> ChartDataResult<Vec<Row>> {
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };

    let width = first.values.len();
    for row in rows {
        if row.values.len() != width {
            return Err(ChartDataError::ShapeMismatch {
                message: format!(
                    "cannot rotate ragged row set: series '{}' has {} values, expected {}",
                    row.key,
                    row.values.len(),
                    width
                ),
            });
        }
    }

    let output = (0..width)
        .map(|i| {
            Row::new(
                first.values[i].key.clone(),
                rows.iter()
                    .map(|row| DataPoint::new(row.key.clone(), row.values[i].value))
                    .collect(),
            )
        })
        .collect();

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::rotate;
    use crate::error::ChartDataError;
    use crate::types::{DataPoint, Row};

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::new(
                "2000",
                vec![
                    DataPoint::new("UK", 9.0),
                    DataPoint::new("France", 2.0),
                    DataPoint::new("Spain", 18.0),
                ],
            ),
            Row::new(
                "2001",
                vec![
                    DataPoint::new("UK", 10.0),
                    DataPoint::new("France", 10.0),
                    DataPoint::new("Spain", 2.0),
                ],
            ),
        ]
    }

    #[test]
    fn rotate_swaps_series_and_categories() {
        let output = rotate(&sample_rows()).unwrap();

        assert_eq!(output.len(), 3);
        assert_eq!(output[0].key, "UK");
        assert_eq!(output[1].key, "France");
        assert_eq!(output[2].key, "Spain");
        assert_eq!(
            output[1].values,
            vec![DataPoint::new("2000", 2.0), DataPoint::new("2001", 10.0)]
        );
    }

    #[test]
    fn rotate_twice_reproduces_the_input() {
        let input = sample_rows();
        let back = rotate(&rotate(&input).unwrap()).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn rotate_empty_input_is_empty() {
        assert_eq!(rotate(&[]).unwrap(), Vec::<Row>::new());
    }

    #[test]
    fn rotate_rejects_ragged_rows() {
        let mut rows = sample_rows();
        rows[1].values.pop();

        let err = rotate(&rows).unwrap_err();
        assert!(matches!(err, ChartDataError::ShapeMismatch { .. }));
        let msg = err.to_string();
        assert!(msg.contains("ragged"));
        assert!(msg.contains("'2001'"));
    }
}
