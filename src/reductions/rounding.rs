use super::*;

/// Nodes of the matrix rounding network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingNode {
    Source,
    Sink,
    Row(usize),
    Col(usize),
}

/// Rounds every entry of `matrix` down or up to a multiple of 10 such that all row sums and all
/// column sums stay the same. Entries already divisible by 10 are kept.
///
/// Every entry `a` has residual `r = a mod 10` in `0..10`. Rounding is possible only if the
/// residuals of each row and of each column sum up to a multiple of 10; the flow network then
/// decides which residuals are rounded up (an edge `Row(i) -> Col(j)` carrying 10) and which are
/// rounded down.
///
/// # Errors
/// - [`NoSolution::RaggedMatrix`] if rows differ in length,
/// - [`NoSolution::RowResidual`] / [`NoSolution::ColumnResidual`] for a line whose residuals
///   do not sum up to a multiple of 10,
/// - [`NoSolution::Unsaturated`] if the maximum flow does not saturate the source.
///
/// # Example
/// ```
/// use wgraphs::reductions::*;
///
/// let matrix = vec![vec![12, 8], vec![8, 12]];
/// let rounded = rounding(&matrix).unwrap();
///
/// assert_eq!(rounded, vec![vec![20, 0], vec![0, 20]]);
/// assert!(same_line_sums(&matrix, &rounded));
/// ```
pub fn rounding(matrix: &[Vec<i64>]) -> Result<Vec<Vec<i64>>, NoSolution> {
    let columns = matrix.first().map_or(0, Vec::len);
    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != columns)
    {
        return Err(NoSolution::RaggedMatrix {
            row,
            expected: columns,
            found,
        });
    }

    let residuals = matrix
        .iter()
        .map(|row| row.iter().map(|a| a.rem_euclid(10)).collect_vec())
        .collect_vec();

    let row_sums = residuals.iter().map(|row| row.iter().sum::<i64>()).collect_vec();
    let col_sums = (0..columns)
        .map(|j| residuals.iter().map(|row| row[j]).sum::<i64>())
        .collect_vec();

    if let Some((row, &residual)) = row_sums.iter().enumerate().find(|(_, r)| *r % 10 != 0) {
        debug!("Matrix rounding: residual sum {residual} of row {row}");
        return Err(NoSolution::RowResidual { row, residual });
    }
    if let Some((column, &residual)) = col_sums.iter().enumerate().find(|(_, r)| *r % 10 != 0) {
        debug!("Matrix rounding: residual sum {residual} of column {column}");
        return Err(NoSolution::ColumnResidual { column, residual });
    }

    let mut network = KeyedGraph::with_capacity(matrix.len() + columns + 2);
    let s = network.add_node(RoundingNode::Source);
    let t = network.add_node(RoundingNode::Sink);

    for (i, row) in residuals.iter().enumerate() {
        for (j, &r) in row.iter().enumerate() {
            if r != 0 {
                network.add_dir_edge(RoundingNode::Row(i), RoundingNode::Col(j), 10);
            }
        }
    }
    for (i, &r) in row_sums.iter().enumerate() {
        network.add_dir_edge(RoundingNode::Source, RoundingNode::Row(i), r);
    }
    for (j, &c) in col_sums.iter().enumerate() {
        network.add_dir_edge(RoundingNode::Col(j), RoundingNode::Sink, c);
    }

    let flow = network.max_flow(s, t);
    let required: i64 = row_sums.iter().sum();
    let value = flow.out_weight_of(s);
    if value != required {
        debug!("Matrix rounding: flow {value} of required {required}");
        return Err(NoSolution::Unsaturated {
            flow: value,
            required,
        });
    }

    Ok(matrix
        .iter()
        .zip(&residuals)
        .enumerate()
        .map(|(i, (row, res))| {
            row.iter()
                .zip(res)
                .enumerate()
                .map(|(j, (&a, &r))| {
                    let up = flow
                        .weight_of_keys(&RoundingNode::Row(i), &RoundingNode::Col(j))
                        .unwrap_or(0);
                    a - r + up
                })
                .collect_vec()
        })
        .collect_vec())
}

/// Returns *true* if both matrices have the same shape, the same row sums and the same column
/// sums
pub fn same_line_sums(a: &[Vec<i64>], b: &[Vec<i64>]) -> bool {
    if a.len() != b.len() || a.iter().zip(b).any(|(x, y)| x.len() != y.len()) {
        return false;
    }

    let rows_match = a
        .iter()
        .zip(b)
        .all(|(x, y)| x.iter().sum::<i64>() == y.iter().sum::<i64>());

    let columns = a.first().map_or(0, Vec::len);
    let columns_match = (0..columns).all(|j| {
        a.iter().map(|row| row.get(j).copied().unwrap_or(0)).sum::<i64>()
            == b.iter().map(|row| row.get(j).copied().unwrap_or(0)).sum::<i64>()
    });

    rows_match && columns_match
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn assert_valid_rounding(matrix: &[Vec<i64>], rounded: &[Vec<i64>]) {
        assert!(same_line_sums(matrix, rounded));
        for (row, new_row) in matrix.iter().zip(rounded) {
            for (&a, &b) in row.iter().zip(new_row) {
                assert_eq!(b.rem_euclid(10), 0);
                assert!((a - b).abs() < 10, "{a} rounded to {b}");
            }
        }
    }

    #[test]
    fn already_rounded() {
        let matrix = vec![vec![10, -20], vec![0, 30]];
        assert_eq!(rounding(&matrix), Ok(matrix.clone()));
        assert_eq!(rounding(&[]), Ok(vec![]));
    }

    #[test]
    fn negative_entries() {
        // residuals [[3, 7], [7, 3]]
        let matrix = vec![vec![-7, 7], vec![7, -7]];
        let rounded = rounding(&matrix).unwrap();
        assert_valid_rounding(&matrix, &rounded);
    }

    #[test]
    fn infeasible_residuals() {
        init_logger();
        assert_eq!(
            rounding(&[vec![11, 9], vec![5, 5]]),
            Err(NoSolution::ColumnResidual {
                column: 0,
                residual: 6
            })
        );
        assert_eq!(
            rounding(&[vec![1, 2], vec![9, 8]]),
            Err(NoSolution::RowResidual {
                row: 0,
                residual: 3
            })
        );
        assert_eq!(
            rounding(&[vec![1, 2], vec![3]]),
            Err(NoSolution::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn line_sums() {
        let a = vec![vec![1, 2], vec![3, 4]];
        assert!(same_line_sums(&a, &[vec![2, 1], vec![2, 5]]));
        assert!(!same_line_sums(&a, &[vec![3, 0], vec![2, 5]]));
        assert!(!same_line_sums(&a, &[vec![3], vec![7]]));
    }

    #[test]
    fn random_feasible_matrices() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);
        for _ in 0..50 {
            let rows = rng.random_range(1..8usize);
            let columns = rng.random_range(1..8usize);

            // start from multiples of 10 and move residual mass along random 2x2 rectangles
            let mut matrix = (0..rows)
                .map(|_| {
                    (0..columns)
                        .map(|_| 10 * rng.random_range(-5..5i64))
                        .collect_vec()
                })
                .collect_vec();
            for _ in 0..rows * columns {
                let (i0, i1) = (rng.random_range(0..rows), rng.random_range(0..rows));
                let (j0, j1) = (rng.random_range(0..columns), rng.random_range(0..columns));
                let d = rng.random_range(1..10i64);
                matrix[i0][j0] += d;
                matrix[i0][j1] -= d;
                matrix[i1][j0] -= d;
                matrix[i1][j1] += d;
            }

            let rounded = rounding(&matrix).unwrap();
            assert_valid_rounding(&matrix, &rounded);
        }
    }
}
