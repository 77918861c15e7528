//! # Matrices and Coordinates
//!
//! Integer matrices are stored one row per line with whitespace-separated entries; coordinate
//! lists hold one `x y` pair per line. Empty lines are skipped in both formats. Rows of a matrix
//! may differ in length here; consumers that need rectangular input check it themselves.

use super::*;

/// Reads an integer matrix, one row per non-empty line
///
/// # Errors
/// Returns `InvalidData` if an entry is not an integer.
pub fn read_matrix<R: BufRead>(reader: R) -> Result<Vec<Vec<i64>>> {
    content_lines(reader, "")
        .map(|line| -> Result<Vec<i64>> {
            let (number, line) = line?;
            line.split_whitespace()
                .map(|x| {
                    x.parse::<i64>().map_err(|_| {
                        io_error!(
                            ErrorKind::InvalidData,
                            format!("Invalid entry `{x}` in line {number}")
                        )
                    })
                })
                .collect()
        })
        .collect()
}

/// Reads an integer matrix from a file. See [`read_matrix`].
pub fn read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<i64>>> {
    read_matrix(BufReader::new(File::open(path)?))
}

/// Writes a matrix, one row per line with entries separated by a single space
pub fn write_matrix<T: Write>(matrix: &[Vec<i64>], mut writer: T) -> Result<()> {
    for row in matrix {
        writeln!(writer, "{}", row.iter().join(" "))?;
    }
    Ok(())
}

/// Reads a list of integer coordinates `x y`, one pair per non-empty line
///
/// # Errors
/// Returns `InvalidData` if a line does not consist of exactly two integers.
pub fn read_coordinates<R: BufRead>(reader: R) -> Result<Vec<(i64, i64)>> {
    let mut coordinates = Vec::new();
    for line in content_lines(reader, "") {
        let (number, line) = line?;
        let mut parts = line.split_whitespace();

        let x: i64 = parse_next_value!(parts, "x-coordinate");
        let y: i64 = parse_next_value!(parts, "y-coordinate");
        raise_error_unless!(
            parts.next().is_none(),
            ErrorKind::InvalidData,
            format!("Too many values in line {number}")
        );

        coordinates.push((x, y));
    }
    Ok(coordinates)
}

/// Reads a list of coordinates from a file. See [`read_coordinates`].
pub fn read_coordinates_file<P: AsRef<Path>>(path: P) -> Result<Vec<(i64, i64)>> {
    read_coordinates(BufReader::new(File::open(path)?))
}
