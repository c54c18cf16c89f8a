//! Conway's B3/S23 rule

/// Next state of a cell given its state and its number of alive neighbours
///
/// - alive with fewer than 2 or more than 3 neighbours dies
/// - alive with 2 or 3 neighbours survives
/// - dead with exactly 3 neighbours is born
#[inline]
pub fn next_state(alive: bool, alive_neighbors: usize) -> bool {
    matches!((alive, alive_neighbors), (true, 2) | (true, 3) | (false, 3))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underpopulation() {
        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
    }

    #[test]
    fn test_survival() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
    }

    #[test]
    fn test_overpopulation() {
        for n in 4..=8 {
            assert!(!next_state(true, n), "{} neighbours should kill", n);
        }
    }

    #[test]
    fn test_birth_needs_exactly_three() {
        for n in 0..=8 {
            assert_eq!(next_state(false, n), n == 3, "dead cell with {} neighbours", n);
        }
    }
}
