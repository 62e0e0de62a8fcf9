use super::{hotstorage_model::World, BlockId, Priority};
use std::collections::HashMap;

/// Assign a priority to each block based on its due date.
/// This is not a good strategy but it is very simple.
/// The block with the lowest priority (due date) has to be retrieved first.
///
/// Blocks are collected top to bottom from the production stack, then bottom to top
/// from every buffer. Blocks with equal due dates keep that order.
pub fn prioritize_by_due_date(world: &World) -> HashMap<BlockId, Priority> {
    let mut all_blocks: Vec<_> = world
        .get_Production()
        .get_BottomToTop()
        .iter()
        .rev()
        .chain(
            world
                .get_Buffers()
                .iter()
                .flat_map(|stack| stack.get_BottomToTop()),
        )
        .collect();

    // sort_by_key is stable
    all_blocks.sort_by_key(|block| block.get_Due().get_MilliSeconds());
    all_blocks
        .iter()
        .map(|block| block.get_Id())
        .zip(0..)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotstorage::testutil::{block, stack, world};

    #[test]
    fn empty_world_has_no_priorities() {
        let world = world(stack(0, 4, vec![]), vec![stack(1, 2, vec![])], 9, true);
        assert!(prioritize_by_due_date(&world).is_empty());
    }

    #[test]
    fn ranks_are_dense_and_follow_due_dates() {
        let world = world(
            stack(0, 4, vec![block(10, 300), block(11, 100)]),
            vec![stack(1, 3, vec![block(12, 200), block(13, 50)])],
            9,
            true,
        );
        let prios = prioritize_by_due_date(&world);
        assert_eq!(prios.len(), 4);
        assert_eq!(prios[&13], 0);
        assert_eq!(prios[&11], 1);
        assert_eq!(prios[&12], 2);
        assert_eq!(prios[&10], 3);
    }

    #[test]
    fn ties_keep_production_top_first_then_buffers() {
        let world = world(
            stack(0, 4, vec![block(1, 100), block(2, 100)]),
            vec![
                stack(1, 3, vec![block(3, 100), block(4, 100)]),
                stack(2, 3, vec![block(5, 100)]),
            ],
            9,
            true,
        );
        let prios = prioritize_by_due_date(&world);
        assert_eq!(prios[&2], 0);
        assert_eq!(prios[&1], 1);
        assert_eq!(prios[&3], 2);
        assert_eq!(prios[&4], 3);
        assert_eq!(prios[&5], 4);
    }
}
