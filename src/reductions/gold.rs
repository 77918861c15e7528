use fxhash::FxHashSet;

use super::*;

/// Integer grid coordinate `(x, y)`
pub type Coordinate = (i64, i64);

/// Nodes of the parity matching network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoldNode {
    Source,
    Sink,
    Cell(i64, i64),
}

/// Returns *true* if `(x, y)` is a black cell, i.e. `x` and `y` have the same parity
pub fn is_black((x, y): Coordinate) -> bool {
    x.rem_euclid(2) == y.rem_euclid(2)
}

/// Matches every black cell to an orthogonally adjacent white cell such that every cell is used
/// exactly once. Returns the matched `(black, white)` pairs in the order the black cells appear
/// in `cells`. Repeated cells are considered once.
///
/// Neighbors of a black cell `(x, y)` are tried in the order `(x, y + 1)`, `(x, y - 1)`,
/// `(x - 1, y)`, `(x + 1, y)`.
///
/// # Errors
/// - [`NoSolution::UnbalancedClasses`] if there are not as many black as white cells,
/// - [`NoSolution::Unsaturated`] if no perfect matching exists.
///
/// # Example
/// ```
/// use wgraphs::reductions::*;
///
/// let pairs = gold(&[(0, 0), (0, 1), (1, 1), (1, 0)]).unwrap();
/// assert_eq!(pairs, vec![((0, 0), (0, 1)), ((1, 1), (1, 0))]);
///
/// assert!(gold(&[(0, 0), (2, 2), (1, 0), (5, 6)]).is_err());
/// ```
pub fn gold(cells: &[Coordinate]) -> Result<Vec<(Coordinate, Coordinate)>, NoSolution> {
    let mut seen = FxHashSet::default();
    let (black, white): (Vec<Coordinate>, Vec<Coordinate>) = cells
        .iter()
        .copied()
        .filter(|&c| seen.insert(c))
        .partition(|&c| is_black(c));

    if black.len() != white.len() {
        debug!(
            "Parity matching: {} black vs. {} white cells",
            black.len(),
            white.len()
        );
        return Err(NoSolution::UnbalancedClasses {
            black: black.len(),
            white: white.len(),
        });
    }

    let (network, s, t) = matching_network(&black, &white);
    let flow = network.max_flow(s, t);

    let matched = flow.out_weight_of(s);
    if matched != black.len() as i64 {
        debug!("Parity matching: only {matched} of {} cells matched", black.len());
        return Err(NoSolution::Unsaturated {
            flow: matched,
            required: black.len() as i64,
        });
    }

    Ok(black
        .iter()
        .filter_map(|&b| {
            flow.weighted_neighbors_of_key(&GoldNode::Cell(b.0, b.1))
                .find_map(|(v, f)| match *v {
                    GoldNode::Cell(x, y) if f == 1 => Some((b, (x, y))),
                    _ => None,
                })
        })
        .collect())
}

/// Builds `Source -> black (1)`, `black -> adjacent white (1)` and `white -> Sink (1)`.
/// Returns the network together with the ids of source and sink.
fn matching_network(
    black: &[Coordinate],
    white: &[Coordinate],
) -> (KeyedGraph<GoldNode, i64>, Node, Node) {
    let white_cells: FxHashSet<Coordinate> = white.iter().copied().collect();

    let mut network = KeyedGraph::with_capacity(black.len() + white.len() + 2);
    let s = network.add_node(GoldNode::Source);
    let t = network.add_node(GoldNode::Sink);

    for &(x, y) in black {
        network.add_unit_edge(GoldNode::Source, GoldNode::Cell(x, y));
        for (nx, ny) in neighbors((x, y)) {
            if white_cells.contains(&(nx, ny)) {
                network.add_unit_edge(GoldNode::Cell(x, y), GoldNode::Cell(nx, ny));
            }
        }
    }

    for &(x, y) in white {
        network.add_unit_edge(GoldNode::Cell(x, y), GoldNode::Sink);
    }

    (network, s, t)
}

/// Orthogonal neighbors of `(x, y)` in the order up, down, left, right. Neighbors outside of
/// the `i64` range are skipped.
fn neighbors((x, y): Coordinate) -> impl Iterator<Item = Coordinate> {
    [
        y.checked_add(1).map(|ny| (x, ny)),
        y.checked_sub(1).map(|ny| (x, ny)),
        x.checked_sub(1).map(|nx| (nx, y)),
        x.checked_add(1).map(|nx| (nx, y)),
    ]
    .into_iter()
    .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn assert_perfect_matching(cells: &[Coordinate], pairs: &[(Coordinate, Coordinate)]) {
        let mut used = FxHashSet::default();
        for &(b, w) in pairs {
            assert!(is_black(b) && !is_black(w));
            assert_eq!((b.0 - w.0).abs() + (b.1 - w.1).abs(), 1);
            assert!(used.insert(b) && used.insert(w));
        }
        let distinct: FxHashSet<Coordinate> = cells.iter().copied().collect();
        assert_eq!(used, distinct);
    }

    #[test]
    fn parity_classes() {
        assert!(is_black((0, 0)));
        assert!(is_black((-1, 3)));
        assert!(!is_black((-1, 0)));
        assert!(!is_black((2, -3)));
    }

    #[test]
    fn unbalanced_classes() {
        init_logger();
        assert_eq!(
            gold(&[(0, 0), (1, 1), (0, 1)]),
            Err(NoSolution::UnbalancedClasses { black: 2, white: 1 })
        );
    }

    #[test]
    fn balanced_but_unmatchable() {
        // (2, 2) has no white neighbor
        assert_eq!(
            gold(&[(0, 0), (0, 1), (2, 2), (5, 6)]),
            Err(NoSolution::Unsaturated {
                flow: 1,
                required: 2
            })
        );
    }

    #[test]
    fn cells_at_the_coordinate_limits() {
        assert_eq!(neighbors((i64::MAX, i64::MIN)).count(), 2);
        assert_eq!(
            neighbors((0, 0)).collect::<Vec<_>>(),
            vec![(0, 1), (0, -1), (-1, 0), (1, 0)]
        );

        let cells = [
            (i64::MAX, i64::MAX),
            (i64::MAX, i64::MAX - 1),
            (i64::MIN, i64::MIN),
            (i64::MIN + 1, i64::MIN),
        ];
        let pairs = gold(&cells).unwrap();
        assert_perfect_matching(&cells, &pairs);
    }

    #[test]
    fn empty_and_duplicates() {
        assert_eq!(gold(&[]), Ok(vec![]));
        assert_eq!(gold(&[(3, 3), (3, 4), (3, 3)]), Ok(vec![((3, 3), (3, 4))]));
    }

    #[test]
    fn requires_augmentation_through_reverse_edges() {
        // the greedy choice (1, 1) -> (1, 2) blocks (2, 2) from its only neighbor
        let cells = [(1, 1), (1, 2), (2, 2), (0, 1)];
        let pairs = gold(&cells).unwrap();
        assert_perfect_matching(&cells, &pairs);
    }

    #[test]
    fn random_rectangles_are_tileable() {
        let rng = &mut Pcg64Mcg::seed_from_u64(41);
        for _ in 0..20 {
            let width = rng.random_range(1..8i64);
            let height = 2 * rng.random_range(1..5i64);
            let (ox, oy) = (rng.random_range(-5..5i64), rng.random_range(-5..5i64));

            let cells = (0..width)
                .flat_map(|x| (0..height).map(move |y| (ox + x, oy + y)))
                .collect::<Vec<_>>();
            let pairs = gold(&cells).unwrap();
            assert_eq!(pairs.len() * 2, cells.len());
            assert_perfect_matching(&cells, &pairs);
        }
    }
}
