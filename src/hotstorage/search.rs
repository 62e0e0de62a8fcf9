use super::brp::{BrpState, Move};
use crate::error::Result;
use tracing::debug;

/// Result of a bounded search.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    /// Shortest solution found, `None` if the budget ran out first.
    pub best: Option<Vec<Move>>,
    /// Number of states popped from the frontier.
    pub expanded: usize,
}

/// Does a simple depth first search using forced moves starting from the initial BrpState.
///
/// At most `budget` states are expanded. Among equally short solutions the first one found wins.
pub fn depth_first_search(initial: BrpState, budget: usize) -> Result<SearchOutcome> {
    let mut remaining = budget;
    let mut outcome = SearchOutcome::default();
    let mut stack = vec![initial];
    let mut possible_moves = Vec::new();
    while remaining > 0 {
        let Some(state) = stack.pop() else {
            break;
        };
        remaining -= 1;
        outcome.expanded += 1;
        if state.is_solved() {
            let sol = state.into_moves();
            if outcome
                .best
                .as_ref()
                .map_or(true, |curr_best| sol.len() < curr_best.len())
            {
                outcome.best = Some(sol);
            }
        } else {
            // dead ends (nowhere to relocate) produce no children and are dropped
            state.forced_moves(&mut possible_moves);
            for mov in &possible_moves {
                stack.push(state.apply_move(*mov)?);
            }
        }
    }
    debug!(
        expanded = outcome.expanded,
        frontier = stack.len(),
        best = outcome.best.as_ref().map(Vec::len),
        "depth first search finished"
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotstorage::{
        priority::prioritize_by_due_date,
        testutil::{block, stack, world},
        StackId, World,
    };

    const HANDOVER: StackId = 9;

    fn initial(world: &World) -> BrpState {
        BrpState::new(world, &prioritize_by_due_date(world)).unwrap()
    }

    fn crowded_yard() -> World {
        world(
            stack(0, 5, vec![block(1, 70), block(2, 10), block(3, 40)]),
            vec![
                stack(1, 3, vec![block(4, 20), block(5, 80), block(6, 30)]),
                stack(2, 3, vec![block(7, 50), block(8, 15)]),
                stack(3, 3, vec![block(9, 60)]),
            ],
            HANDOVER,
            true,
        )
    }

    #[test]
    fn accessible_block_is_delivered_directly() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        let outcome = depth_first_search(initial(&world), 1000).unwrap();
        assert_eq!(outcome.best, Some(vec![Move::new(0, HANDOVER, 1)]));
    }

    #[test]
    fn buried_block_is_freed_first() {
        // stored top to bottom, so block 2 sits on top of block 1 during the search
        let world = world(
            stack(0, 3, vec![block(2, 20), block(1, 10)]),
            vec![stack(1, 1, vec![])],
            HANDOVER,
            true,
        );
        let best = depth_first_search(initial(&world), 1000)
            .unwrap()
            .best
            .unwrap();
        assert_eq!(best[..2], [Move::new(0, 1, 2), Move::new(0, HANDOVER, 1)]);
        assert_eq!(best[2], Move::new(1, HANDOVER, 2));
        assert_eq!(best.len(), 3);
    }

    #[test]
    fn zero_budget_finds_nothing() {
        let outcome = depth_first_search(initial(&crowded_yard()), 0).unwrap();
        assert!(outcome.best.is_none());
        assert_eq!(outcome.expanded, 0);
    }

    #[test]
    fn expansions_never_exceed_budget() {
        for budget in [1, 2, 5, 17, 100] {
            let outcome = depth_first_search(initial(&crowded_yard()), budget).unwrap();
            assert!(outcome.expanded <= budget);
        }
    }

    #[test]
    fn search_is_deterministic() {
        let first = depth_first_search(initial(&crowded_yard()), 1000).unwrap();
        let second = depth_first_search(initial(&crowded_yard()), 1000).unwrap();
        assert!(first.best.is_some());
        assert_eq!(first.best, second.best);
        assert_eq!(first.expanded, second.expanded);
    }

    #[test]
    fn larger_budget_never_yields_longer_solution() {
        let small = depth_first_search(initial(&crowded_yard()), 50)
            .unwrap()
            .best;
        let large = depth_first_search(initial(&crowded_yard()), 5000)
            .unwrap()
            .best
            .unwrap();
        if let Some(small) = small {
            assert!(large.len() <= small.len());
        }
    }

    #[test]
    fn solution_delivers_every_block() {
        let best = depth_first_search(initial(&crowded_yard()), 1000)
            .unwrap()
            .best
            .unwrap();
        let delivered = best.iter().filter(|mov| mov.tgt() == HANDOVER).count();
        assert_eq!(delivered, 9);
    }

    #[test]
    fn production_above_capacity_is_drained() {
        // three arrivals on a production stack that only holds one
        let world = world(
            stack(0, 1, vec![block(3, 30), block(2, 20), block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        let best = depth_first_search(initial(&world), 1000)
            .unwrap()
            .best
            .unwrap();
        assert!(best.iter().all(|mov| mov.tgt() != 0));
        assert_eq!(
            best,
            vec![
                Move::new(0, 1, 3),
                Move::new(0, 1, 2),
                Move::new(0, HANDOVER, 1),
                Move::new(1, HANDOVER, 2),
                Move::new(1, HANDOVER, 3),
            ]
        );
    }

    #[test]
    fn dead_end_is_not_a_solution() {
        // block 1 is buried and there is no free stack to relocate to
        let world = world(
            stack(0, 2, vec![]),
            vec![stack(1, 2, vec![block(1, 10), block(2, 20)])],
            HANDOVER,
            true,
        );
        let outcome = depth_first_search(initial(&world), 1000).unwrap();
        assert!(outcome.best.is_none());
        assert_eq!(outcome.expanded, 1);
    }
}
