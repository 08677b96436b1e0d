//! Fixed-endpoint route optimization by exhaustive permutation search.
//!
//! The first and last stops are pinned; every permutation of the stops
//! between them is evaluated against the total haversine path length and the
//! cheapest ordering wins. The search is factorial in the number of middle
//! stops, which is acceptable here: callers work with single-digit stop
//! counts and correctness, not asymptotic performance, is the goal. A
//! heuristic fallback for larger inputs would slot in as a guard at the top
//! of [`optimize`].

use crate::Stop;
use crate::distance::path_length_km;

/// Reorder the middle stops of a route to minimise total haversine distance.
///
/// The first and last stops keep their positions. Ties between equally cheap
/// orderings keep the first permutation encountered, so the result is
/// deterministic for a given input. Sequences with fewer than three stops
/// have no reorderable middle and are returned unchanged.
///
/// This is a pure function: the input is never mutated and stops keep their
/// identifiers across the reorder.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use wayfinder_core::{Stop, optimize};
///
/// let stops = vec![
///     Stop::new("start", Coord { x: 0.0, y: 0.0 }),
///     Stop::new("far detour", Coord { x: 1.0, y: 1.0 }),
///     Stop::new("near start", Coord { x: 0.1, y: 0.1 }),
///     Stop::new("end", Coord { x: 1.1, y: 1.1 }),
/// ];
/// let ordered = optimize(&stops);
/// assert_eq!(ordered[0].address, "start");
/// assert_eq!(ordered[1].address, "near start");
/// assert_eq!(ordered[3].address, "end");
/// ```
#[must_use]
pub fn optimize(stops: &[Stop]) -> Vec<Stop> {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return stops.to_vec();
    };
    let Some(middle) = stops.get(1..stops.len().saturating_sub(1)) else {
        return stops.to_vec();
    };
    if middle.len() < 2 {
        // One middle stop has a single permutation; nothing to search.
        return stops.to_vec();
    }

    let mut best: Option<(f64, Vec<Stop>)> = None;
    for permutation in permutations(middle) {
        let mut candidate = Vec::with_capacity(stops.len());
        candidate.push(first.clone());
        candidate.extend(permutation);
        candidate.push(last.clone());

        let cost = path_length_km(&candidate);
        let improves = best.as_ref().is_none_or(|(best_cost, _)| cost < *best_cost);
        if improves {
            best = Some((cost, candidate));
        }
    }

    best.map_or_else(|| stops.to_vec(), |(_, ordered)| ordered)
}

/// Every ordering of `items`, built by recursively fixing each element in
/// the head position.
///
/// Generation order is stable: permutations starting with earlier elements
/// come first, which is what makes the tie-breaking in [`optimize`]
/// deterministic.
fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for (index, head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(index);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StopId;
    use geo::Coord;
    use rstest::rstest;

    fn stop(address: &str, x: f64, y: f64) -> Stop {
        Stop::new(address, Coord { x, y })
    }

    fn addresses(stops: &[Stop]) -> Vec<&str> {
        stops.iter().map(|s| s.address.as_str()).collect()
    }

    #[rstest]
    fn permutation_count_is_factorial() {
        assert_eq!(permutations(&[1]).len(), 1);
        assert_eq!(permutations(&[1, 2]).len(), 2);
        assert_eq!(permutations(&[1, 2, 3]).len(), 6);
        assert_eq!(permutations(&[1, 2, 3, 4]).len(), 24);
    }

    #[rstest]
    fn permutation_order_is_stable() {
        let perms = permutations(&[1, 2, 3]);
        assert_eq!(
            perms,
            vec![
                vec![1, 2, 3],
                vec![1, 3, 2],
                vec![2, 1, 3],
                vec![2, 3, 1],
                vec![3, 1, 2],
                vec![3, 2, 1],
            ]
        );
    }

    #[rstest]
    fn empty_permutation_input_yields_one_empty_ordering() {
        let perms: Vec<Vec<i32>> = permutations(&[]);
        assert_eq!(perms, vec![Vec::<i32>::new()]);
    }

    #[rstest]
    fn fewer_than_three_stops_are_returned_unchanged() {
        let stops = vec![stop("a", 0.0, 0.0), stop("b", 1.0, 1.0)];
        assert_eq!(optimize(&stops), stops);
        assert_eq!(optimize(&[]), Vec::<Stop>::new());
    }

    #[rstest]
    fn three_stops_come_back_in_input_order() {
        // A single middle stop has exactly one permutation.
        let stops = vec![
            stop("start", 0.0, 0.0),
            stop("middle", 5.0, 5.0),
            stop("end", 1.0, 1.0),
        ];
        assert_eq!(optimize(&stops), stops);
    }

    #[rstest]
    fn suboptimal_entry_order_is_corrected() {
        // As entered: start -> far -> near -> end zig-zags; the optimizer
        // must swap the middle pair.
        let stops = vec![
            stop("start", 0.0, 0.0),
            stop("far", 0.9, 0.9),
            stop("near", 0.1, 0.1),
            stop("end", 1.0, 1.0),
        ];
        let ordered = optimize(&stops);
        assert_eq!(addresses(&ordered), vec!["start", "near", "far", "end"]);
    }

    #[rstest]
    fn endpoints_stay_pinned_even_when_expensive() {
        // The cheapest unconstrained tour would not start at "start", but
        // the endpoints must hold their positions regardless.
        let stops = vec![
            stop("start", 10.0, 10.0),
            stop("m1", 0.0, 0.0),
            stop("m2", 0.1, 0.0),
            stop("end", 10.1, 10.1),
        ];
        let ordered = optimize(&stops);
        assert_eq!(ordered.first().map(|s| s.id), stops.first().map(|s| s.id));
        assert_eq!(ordered.last().map(|s| s.id), stops.last().map(|s| s.id));
    }

    #[rstest]
    fn identifiers_survive_reordering() {
        let stops = vec![
            stop("start", 0.0, 0.0),
            stop("far", 0.9, 0.9),
            stop("near", 0.1, 0.1),
            stop("end", 1.0, 1.0),
        ];
        let mut before: Vec<_> = stops.iter().map(|s| s.id).collect();
        let ordered = optimize(&stops);
        let mut after: Vec<_> = ordered.iter().map(|s| s.id).collect();
        before.sort_by_key(StopId::to_string);
        after.sort_by_key(StopId::to_string);
        assert_eq!(before, after);
    }

    #[rstest]
    fn identical_coordinates_stay_distinct_stops() {
        // Two stops at the same point but with different addresses remain
        // separate entries; no merging is attempted.
        let stops = vec![
            stop("start", 0.0, 0.0),
            stop("twin-a", 0.5, 0.5),
            stop("twin-b", 0.5, 0.5),
            stop("end", 1.0, 1.0),
        ];
        let ordered = optimize(&stops);
        assert_eq!(ordered.len(), 4);
        let middle: Vec<_> = addresses(&ordered)
            .into_iter()
            .filter(|a| a.starts_with("twin"))
            .collect();
        assert_eq!(middle.len(), 2);
    }
}
