//! Formal Verification Specifications for tile-lines
//!
//! Design-by-contract specifications using Verus-style pre/postconditions.
//! These serve as both documentation and verification targets.
//!
//! Without Verus, they serve as checked documentation via debug_assert!().

/// Postconditions shared by every line rasterizer
///
/// # Verification Specifications
///
/// #[ensures(!exclusive ==> result[0] == start && result[len - 1] == end)]
/// #[ensures(exclusive ==> !result.contains(start) && !result.contains(end))]
/// #[ensures(forall i, j: i != j ==> result[i] != result[j])]
/// #[ensures(forall c in result: c.map == start.map)]
pub mod line_contracts {
    use crate::geometry::Location;
    use std::collections::HashSet;

    /// Check that no cell appears twice.
    ///
    /// #[ensures(result == true ==> forall i != j: cells[i] != cells[j])]
    pub fn has_no_duplicates(cells: &[Location]) -> bool {
        let mut seen = HashSet::with_capacity(cells.len());
        cells.iter().all(|c| seen.insert(*c))
    }

    /// Check that consecutive cells share an edge.
    ///
    /// #[ensures(result == true ==> forall i: |cells[i] - cells[i + 1]|_1 == 1)]
    pub fn is_four_connected(cells: &[Location]) -> bool {
        cells.windows(2).all(|w| w[0].is_adjacent4(w[1]))
    }

    /// Check that consecutive cells touch at an edge or corner.
    ///
    /// #[ensures(result == true ==> forall i: |cells[i] - cells[i + 1]|_inf == 1)]
    pub fn is_eight_connected(cells: &[Location]) -> bool {
        cells.windows(2).all(|w| w[0].is_adjacent8(w[1]))
    }

    /// Check the endpoint rule for a result, comparing coordinates only.
    ///
    /// #[ensures(!exclusive && result ==> cells.first() == start && cells.last() == end)]
    /// #[ensures(exclusive && result ==> start, end not in cells)]
    pub fn respects_endpoints(
        cells: &[Location],
        start: Location,
        end: Location,
        exclusive: bool,
    ) -> bool {
        let (start, end) = (start.coords(), end.coords());
        if exclusive {
            cells.iter().all(|c| c.coords() != start && c.coords() != end)
        } else {
            cells.first().map(|c| c.coords()) == Some(start)
                && cells.last().map(|c| c.coords()) == Some(end)
        }
    }

    /// Check that every cell carries `map`.
    pub fn shares_map(cells: &[Location], start: Location) -> bool {
        cells.iter().all(|c| c.map == start.map)
    }
}

/// Length contracts for the two rasterizers
///
/// #[requires(distance fits in usize)]
/// #[ensures(inclusive ==> exclusive + 2 == inclusive || distance == 0)]
pub mod length_contracts {
    /// Expected length of a diagonal line over Chebyshev distance `n`.
    ///
    /// #[ensures(n == 0 ==> result == if exclusive { 0 } else { 1 })]
    /// #[ensures(n > 0 && !exclusive ==> result == n + 1)]
    /// #[ensures(n > 0 && exclusive ==> result == n - 1)]
    pub fn diagonal_len(n: u64, exclusive: bool) -> u64 {
        match (n, exclusive) {
            (0, true) => 0,
            (0, false) => 1,
            (n, true) => n - 1,
            (n, false) => n + 1,
        }
    }

    /// Expected length of a covering line over Manhattan distance `m`.
    ///
    /// #[ensures(m == 0 ==> result == if exclusive { 0 } else { 1 })]
    /// #[ensures(m > 0 && !exclusive ==> result == m + 1)]
    /// #[ensures(m > 0 && exclusive ==> result == m - 1)]
    pub fn covering_len(m: u64, exclusive: bool) -> u64 {
        // Same shape as the diagonal case, over a different distance.
        diagonal_len(m, exclusive)
    }
}
