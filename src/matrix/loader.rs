//! Text loader and structural validation.
//!
//! Format: one matrix row per line, integer distances separated by
//! whitespace. Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # four cities
//! 0 1 2 3
//! 1 0 4 5
//! 2 4 0 6
//! 3 5 6 0
//! ```

use std::fs;
use std::path::Path;

use super::error::{MatrixError, ValidationError};
use super::types::DistanceMatrix;

/// Reads and validates a distance matrix from `path`.
pub fn load_matrix<P: AsRef<Path>>(path: P) -> Result<DistanceMatrix, MatrixError> {
    let text = fs::read_to_string(path)?;
    parse_matrix(&text)
}

/// Parses and validates a distance matrix from its text form.
///
/// # Examples
///
/// ```
/// use u_antcolony::matrix::{parse_matrix, MatrixError};
///
/// let m = parse_matrix("# demo\n0 3\n3 0\n").unwrap();
/// assert_eq!(m.get(0, 1), 3.0);
///
/// let err = parse_matrix("0 1\n1 1\n").unwrap_err();
/// assert!(matches!(err, MatrixError::Validation(_)));
/// ```
pub fn parse_matrix(text: &str) -> Result<DistanceMatrix, MatrixError> {
    let mut rows = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map(|v| v as f64)
                    .map_err(|_| MatrixError::InputFormat {
                        line: idx + 1,
                        token: token.to_string(),
                    })
            })
            .collect::<Result<Vec<f64>, _>>()?;
        rows.push(row);
    }

    DistanceMatrix::new(rows)
}

/// Checks that `rows` describe a usable distance matrix.
///
/// Checks run in order: shape, size (at least 2 nodes), zero diagonal,
/// then finite non-negative entries. The first failure is returned.
pub fn validate(rows: &[Vec<f64>]) -> Result<(), MatrixError> {
    let n = rows.len();
    if n == 0 {
        return Err(MatrixError::Size { nodes: 0 });
    }

    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
        return Err(ValidationError::NotSquare {
            rows: n,
            row,
            len: r.len(),
        }
        .into());
    }

    if n < 2 {
        return Err(MatrixError::Size { nodes: n });
    }

    for (index, r) in rows.iter().enumerate() {
        let value = r[index];
        if value != 0.0 {
            return Err(ValidationError::NonZeroDiagonal { index, value }.into());
        }
    }

    for (row, r) in rows.iter().enumerate() {
        for (col, &value) in r.iter().enumerate() {
            if !value.is_finite() {
                return Err(ValidationError::NonFinite { row, col }.into());
            }
            if value < 0.0 {
                return Err(ValidationError::Negative { row, col, value }.into());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FOUR: &str = "0 1 2 3\n1 0 4 5\n2 4 0 6\n3 5 6 0\n";

    #[test]
    fn test_parse_valid() {
        let m = parse_matrix(FOUR).unwrap();
        assert_eq!(m.len(), 4);
        assert_eq!(m.get(2, 3), 6.0);
        assert_eq!(m.get(3, 2), 6.0);
    }

    #[test]
    fn test_parse_skips_blank_and_comment_lines() {
        let text = "# header\n\n0 7\n   \n# middle\n7 0\n";
        let m = parse_matrix(text).unwrap();
        assert_eq!(m.len(), 2);
        assert_eq!(m.get(0, 1), 7.0);
    }

    #[test]
    fn test_parse_rejects_non_integer() {
        let err = parse_matrix("0 1\n1 x\n").unwrap_err();
        match err {
            MatrixError::InputFormat { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "x");
            }
            other => panic!("expected InputFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_float_token() {
        let err = parse_matrix("0 1.5\n1.5 0\n").unwrap_err();
        assert!(matches!(err, MatrixError::InputFormat { line: 1, .. }));
    }

    #[test]
    fn test_non_zero_diagonal() {
        let err = parse_matrix("0 1\n1 1\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Validation(ValidationError::NonZeroDiagonal { index: 1, .. })
        ));
    }

    #[test]
    fn test_not_square() {
        let err = parse_matrix("0 1 2\n1 0 3\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Validation(ValidationError::NotSquare { rows: 2, row: 0, len: 3 })
        ));
    }

    #[test]
    fn test_ragged_rows() {
        let err = parse_matrix("0 1 2\n1 0\n2 3 0\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Validation(ValidationError::NotSquare { row: 1, len: 2, .. })
        ));
    }

    #[test]
    fn test_negative_entry() {
        let err = parse_matrix("0 -1\n1 0\n").unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Validation(ValidationError::Negative { row: 0, col: 1, .. })
        ));
    }

    #[test]
    fn test_size_errors() {
        assert!(matches!(
            parse_matrix("").unwrap_err(),
            MatrixError::Size { nodes: 0 }
        ));
        assert!(matches!(
            parse_matrix("# only a comment\n\n").unwrap_err(),
            MatrixError::Size { nodes: 0 }
        ));
        assert!(matches!(
            parse_matrix("0\n").unwrap_err(),
            MatrixError::Size { nodes: 1 }
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = DistanceMatrix::new(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::Validation(ValidationError::NonFinite { row: 0, col: 1 })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_matrix("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, MatrixError::Io(_)));
    }

    #[test]
    fn test_error_messages() {
        let err = parse_matrix("0 1\n1 1\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid distance matrix: diagonal entry (1, 1) must be 0, got 1"
        );
    }
}
