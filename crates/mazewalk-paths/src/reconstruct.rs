//! Parent-map backtracking shared by every search strategy.

use std::collections::HashMap;

use mazewalk_core::Cell;

/// Walk `parents` backward from `target` until `source` is reached.
///
/// Returns the chain in backward order, `[target, ..., source]`. When
/// `target == source` the result is the single-cell chain. The walk is
/// bounded by the map size so a corrupted parent map cannot loop forever.
///
/// # Panics
///
/// Panics if the chain from `target` never reaches `source`. Strategies only
/// call this after confirming connectivity, so a break here is a bookkeeping
/// bug in the caller, not bad input.
pub fn reconstruct_rev(parents: &HashMap<Cell, Cell>, source: Cell, target: Cell) -> Vec<Cell> {
    let mut chain = vec![target];
    let mut cur = target;
    let mut budget = parents.len();
    while cur != source {
        match parents.get(&cur) {
            Some(&p) if budget > 0 => {
                chain.push(p);
                cur = p;
                budget -= 1;
            }
            _ => panic!("parent chain from {target} does not reach {source}"),
        }
    }
    chain
}

/// Forward-ordered variant of [`reconstruct_rev`]: `[source, ..., target]`.
pub fn reconstruct(parents: &HashMap<Cell, Cell>, source: Cell, target: Cell) -> Vec<Cell> {
    let mut chain = reconstruct_rev(parents, source, target);
    chain.reverse();
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_map(cells: &[Cell]) -> HashMap<Cell, Cell> {
        cells.windows(2).map(|w| (w[1], w[0])).collect()
    }

    #[test]
    fn forward_and_backward_orders() {
        let cells = [
            Cell::new(0, 0),
            Cell::new(0, 1),
            Cell::new(1, 1),
            Cell::new(2, 1),
        ];
        let parents = chain_map(&cells);
        assert_eq!(
            reconstruct(&parents, cells[0], cells[3]),
            cells.to_vec()
        );
        let mut rev = cells.to_vec();
        rev.reverse();
        assert_eq!(reconstruct_rev(&parents, cells[0], cells[3]), rev);
    }

    #[test]
    fn trivial_chain() {
        let parents = HashMap::new();
        let c = Cell::new(4, 2);
        assert_eq!(reconstruct(&parents, c, c), vec![c]);
    }

    #[test]
    #[should_panic(expected = "does not reach")]
    fn broken_chain_panics() {
        let parents = chain_map(&[Cell::new(0, 0), Cell::new(0, 1)]);
        reconstruct(&parents, Cell::new(5, 5), Cell::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "does not reach")]
    fn cyclic_map_terminates_with_panic() {
        // Two cells pointing at each other; the budget stops the walk.
        let a = Cell::new(0, 0);
        let b = Cell::new(0, 1);
        let parents: HashMap<Cell, Cell> = [(a, b), (b, a)].into_iter().collect();
        reconstruct(&parents, Cell::new(9, 9), a);
    }
}
