// conflict.rs
//
// Decides whether two routes cross inside the junction. Route 1 sweeps the
// clockwise arc from its start to its end; route 2 collides with it when it
// has to cut across that arc to enter or to leave.

use crate::data_structures::{Route, RoutePair};

/// True if route `s1 -> e1` and route `s2 -> e2` cross.
///
/// The routes must be distinct, and must share neither a start nor an end. All
/// positions are measured clockwise from `s1`, so the caller may pass either
/// junction or shift-relative coordinates.
pub fn collides(s1: usize, e1: usize, s2: usize, e2: usize, n_ways: usize) -> bool {
    let clockwise = |to: usize| (to + n_ways - s1 % n_ways) % n_ways;
    let re1 = clockwise(e1);
    let rs2 = clockwise(s2);
    let re2 = clockwise(e2);

    // Enters inside the arc and leaves beyond its end, or back at its start.
    let cuts_out = 0 < rs2 && rs2 < re1 && (re1 < re2 || re2 == 0);
    // Enters at or past the arc's end and leaves inside it.
    let cuts_in = 0 < re2 && re2 < re1 && re1 <= rs2;

    cuts_out || cuts_in
}

pub fn pair_collides(pair: &RoutePair, n_ways: usize) -> bool {
    routes_collide(&pair.first, &pair.second, n_ways)
}

pub fn routes_collide(first: &Route, second: &Route, n_ways: usize) -> bool {
    collides(first.start, first.end, second.start, second.end, n_ways)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interleaved_routes_collide() {
        // 0 -> 2 against 3 -> 1 on a four-way junction.
        assert!(collides(0, 2, 3, 1, 4));
        // 0 -> 3 against 4 -> 1: route 2 starts past the arc and ends inside it.
        assert!(collides(0, 3, 4, 1, 6));
        // and against 1 -> 5: starts inside, ends beyond.
        assert!(collides(0, 3, 1, 5, 6));
    }

    #[test]
    fn nested_and_disjoint_routes_do_not_collide() {
        assert!(!collides(0, 5, 1, 3, 6));
        assert!(!collides(0, 2, 3, 5, 6));
        assert!(!collides(0, 1, 2, 3, 4));
    }

    #[test]
    fn chained_routes_collide_only_when_doubling_back_inside() {
        // 0 -> 3 then 3 -> 1: the second route turns back across the first.
        assert!(collides(0, 3, 3, 1, 6));
        // 0 -> 3 then 3 -> 4 or 3 -> 0 stays outside the arc.
        assert!(!collides(0, 3, 3, 4, 6));
        assert!(!collides(0, 3, 3, 0, 6));
    }

    #[test]
    fn returning_to_the_start_from_inside_collides() {
        // 2 -> 0 starts inside 0 -> 3 and must cross it to reach way 0.
        assert!(collides(0, 3, 2, 0, 6));
        assert!(collides(0, 2, 1, 0, 4));
    }

    #[test]
    fn answer_does_not_depend_on_which_route_leads() {
        for n_ways in 2..=8 {
            for s1 in 0..n_ways {
                for e1 in 0..n_ways {
                    for s2 in 0..n_ways {
                        for e2 in 0..n_ways {
                            if s1 == e1 || s2 == e2 || s1 == s2 || e1 == e2 {
                                continue;
                            }
                            assert_eq!(
                                collides(s1, e1, s2, e2, n_ways),
                                collides(s2, e2, s1, e1, n_ways),
                                "{s1}->{e1} vs {s2}->{e2} on {n_ways} ways"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn shifting_both_routes_does_not_change_the_answer() {
        let first = Route::new(2, 5);
        let second = Route::new(4, 0);
        let expected = routes_collide(&first, &second, 7);
        for shift in 0..7 {
            assert_eq!(
                routes_collide(&first.shifted(shift, 7), &second.shifted(shift, 7), 7),
                expected
            );
        }
    }
}
