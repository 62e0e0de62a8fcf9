use super::{
    hotstorage_model::{CraneSchedule, World},
    priority::prioritize_by_due_date,
    schedule::create_schedule_from_solution,
    search::depth_first_search,
    BlockId, Priority, StackId,
};
use crate::{
    config::SearchConfig,
    error::{PlanError, Result},
};
use std::{collections::HashMap, iter::once};
use tracing::{debug, warn};

/// Generate a schedule for the current world state by solving an restricted offline BRP
pub fn calculate_schedule(world: &World, config: &SearchConfig) -> Result<CraneSchedule> {
    let priorities = prioritize_by_due_date(world);
    let initial_state = BrpState::new(world, &priorities)?;
    debug!(blocks = initial_state.block_count(), "starting search");
    let outcome = depth_first_search(initial_state, config.node_budget)?;
    if outcome.best.is_none() {
        warn!(
            expanded = outcome.expanded,
            budget = config.node_budget,
            "search budget exhausted without a solution"
        );
    }
    Ok(create_schedule_from_solution(
        world,
        outcome.best,
        config.max_schedule_moves,
    ))
}

/// A block for the BRP
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Block {
    id: BlockId,
    prio: Priority,
}

/// A possible move for the BRP
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    src: StackId,
    tgt: StackId,
    block: BlockId,
}

impl Move {
    #[cfg(test)]
    pub fn new(src: StackId, tgt: StackId, block: BlockId) -> Self {
        Self { src, tgt, block }
    }
    pub fn src(&self) -> StackId {
        self.src
    }
    pub fn tgt(&self) -> StackId {
        self.tgt
    }
    pub fn block(&self) -> BlockId {
        self.block
    }
}

/// A stack for the BlockRelocationProblem
#[derive(Clone, Debug)]
struct Stack {
    id: StackId,
    max_height: usize,
    blocks: Vec<Block>,
}

impl Stack {
    /// Get the Block on top of the stack
    fn top(&self) -> Option<Block> {
        self.blocks.last().copied()
    }

    /// Get the block that has to be removed before all others in the stack.
    /// This is currently O(n).
    fn most_urgent(&self) -> Option<Block> {
        self.blocks.iter().min_by_key(|block| block.prio).copied()
    }

    fn is_full(&self) -> bool {
        self.blocks.len() >= self.max_height
    }
}

/// The state information for simple constrained offline BlockRelocationProblem (BRP)
/// For each state we can get the valid moves in this state and we can apply a move to get a new state.
/// Every state owns its stacks, so applying a move never touches the parent.
#[derive(Clone, Debug)]
pub struct BrpState {
    stacks: Vec<Stack>,
    moves: Vec<Move>,
    arrival_id: StackId,
    handover_id: StackId,
}

impl BrpState {
    /// Construct a new BRP from a given world state and an mapping from blocks to priorities.
    ///
    /// The production stack is stored top to bottom: the search pulls arrivals in reverse order.
    pub fn new(world: &World, priorities: &HashMap<BlockId, Priority>) -> Result<Self> {
        let prod = world.get_Production();
        let annotate = |block: &super::hotstorage_model::Block| {
            let id = block.get_Id();
            priorities
                .get(&id)
                .map(|&prio| Block { id, prio })
                .ok_or(PlanError::MalformedSnapshot { block: id })
        };

        let arrival = Stack {
            id: prod.get_Id(),
            max_height: prod.get_MaxHeight().max(0) as usize,
            blocks: prod
                .get_BottomToTop()
                .iter()
                .rev()
                .map(annotate)
                .collect::<Result<_>>()?,
        };

        let stacks = once(Ok::<_, PlanError>(arrival))
            .chain(world.get_Buffers().iter().map(|stack| -> Result<Stack> {
                Ok(Stack {
                    id: stack.get_Id(),
                    max_height: stack.get_MaxHeight().max(0) as usize,
                    blocks: stack
                        .get_BottomToTop()
                        .iter()
                        .map(annotate)
                        .collect::<Result<_>>()?,
                })
            }))
            .collect::<Result<_>>()?;

        Ok(Self {
            stacks,
            moves: Vec::new(),
            arrival_id: prod.get_Id(),
            handover_id: world.get_Handover().get_Id(),
        })
    }

    pub fn is_solved(&self) -> bool {
        self.not_empty_stacks().next().is_none()
    }

    #[cfg(test)]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Consumes the state and returns the moves performed to get to it.
    pub fn into_moves(self) -> Vec<Move> {
        self.moves
    }

    /// Number of blocks still in the yard.
    pub fn block_count(&self) -> usize {
        self.stacks.iter().map(|s| s.blocks.len()).sum()
    }

    /// Number of blocks this state has sent to the handover.
    #[cfg(test)]
    pub fn delivered_count(&self) -> usize {
        self.moves
            .iter()
            .filter(|mov| mov.tgt == self.handover_id)
            .count()
    }

    fn not_full_stacks(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().filter(|s| !s.is_full())
    }
    fn not_empty_stacks(&self) -> impl Iterator<Item = &Stack> {
        self.stacks.iter().filter(|s| !s.blocks.is_empty())
    }

    fn stack_index(&self, id: StackId) -> Result<usize> {
        self.stacks
            .iter()
            .position(|s| s.id == id)
            .ok_or(PlanError::UnknownStack { stack: id })
    }

    /// Apply a move to this instance and return the new state.
    pub fn apply_move(&self, mov: Move) -> Result<Self> {
        let mut result = self.clone();
        let src = result.stack_index(mov.src)?;
        let block = result.stacks[src]
            .blocks
            .pop()
            .ok_or(PlanError::EmptyStack { stack: mov.src })?;
        if block.id != mov.block {
            return Err(PlanError::UnexpectedBlock {
                stack: mov.src,
                expected: mov.block,
                found: block.id,
            });
        }
        if mov.tgt != self.handover_id {
            let tgt = result.stack_index(mov.tgt)?;
            let tgt = &mut result.stacks[tgt];
            tgt.blocks.push(block);
            debug_assert!(
                tgt.blocks.len() <= tgt.max_height,
                "stack {} over capacity",
                tgt.id
            );
        }
        result.moves.push(mov);
        Ok(result)
    }

    /// Fills the moves parameter with all forced moves that can be applied to this state.
    /// Forced moves are those that either remove the next block or relocate blocks that prevent the removal of the next block.
    pub fn forced_moves(&self, moves: &mut Vec<Move>) {
        moves.clear();
        let next = self
            .not_empty_stacks()
            .filter_map(|stack| Some((stack, stack.most_urgent()?, stack.top()?)))
            .min_by_key(|(_, urgent, _)| urgent.prio);

        if let Some((src, urgent, top)) = next {
            if urgent.id == top.id {
                moves.push(Move {
                    src: src.id,
                    tgt: self.handover_id,
                    block: top.id,
                });
            } else {
                for tgt in self.not_full_stacks() {
                    if src.id == tgt.id || tgt.id == self.arrival_id {
                        continue;
                    }
                    moves.push(Move {
                        src: src.id,
                        tgt: tgt.id,
                        block: top.id,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotstorage::testutil::{block, stack, world};

    const HANDOVER: StackId = 9;

    fn state(world: &World) -> BrpState {
        BrpState::new(world, &prioritize_by_due_date(world)).unwrap()
    }

    fn forced(state: &BrpState) -> Vec<Move> {
        let mut moves = Vec::new();
        state.forced_moves(&mut moves);
        moves
    }

    #[test]
    fn production_is_stored_top_to_bottom() {
        let world = world(
            stack(0, 3, vec![block(1, 10), block(2, 20)]),
            vec![],
            HANDOVER,
            true,
        );
        let state = state(&world);
        assert_eq!(state.stacks[0].top().map(|b| b.id), Some(1));
        assert_eq!(state.stacks[0].blocks[0].id, 2);
    }

    #[test]
    fn missing_priority_is_malformed() {
        let world = world(stack(0, 3, vec![block(1, 10)]), vec![], HANDOVER, true);
        let err = BrpState::new(&world, &HashMap::new()).unwrap_err();
        assert!(matches!(err, PlanError::MalformedSnapshot { block: 1 }));
    }

    #[test]
    fn solved_state_has_no_forced_moves() {
        let world = world(stack(0, 3, vec![]), vec![stack(1, 2, vec![])], HANDOVER, true);
        let state = state(&world);
        assert!(state.is_solved());
        assert!(forced(&state).is_empty());
    }

    #[test]
    fn accessible_urgent_block_goes_to_handover() {
        let world = world(
            stack(0, 3, vec![]),
            vec![
                stack(1, 3, vec![block(1, 50), block(2, 10)]),
                stack(2, 3, vec![block(3, 20)]),
            ],
            HANDOVER,
            true,
        );
        assert_eq!(forced(&state(&world)), vec![Move::new(1, HANDOVER, 2)]);
    }

    #[test]
    fn buried_urgent_block_relocates_top_to_every_free_buffer() {
        let world = world(
            stack(0, 3, vec![block(4, 90)]),
            vec![
                stack(1, 3, vec![block(1, 10), block(2, 50)]),
                stack(2, 2, vec![block(3, 60)]),
                stack(3, 1, vec![]),
                stack(4, 1, vec![block(5, 70)]),
            ],
            HANDOVER,
            true,
        );
        let moves = forced(&state(&world));
        assert_eq!(moves, vec![Move::new(1, 2, 2), Move::new(1, 3, 2)]);
    }

    #[test]
    fn production_is_never_a_target() {
        let world = world(
            stack(0, 5, vec![]),
            vec![
                stack(1, 3, vec![block(1, 10), block(2, 50)]),
                stack(2, 3, vec![]),
            ],
            HANDOVER,
            true,
        );
        let moves = forced(&state(&world));
        assert!(moves.iter().all(|mov| mov.tgt() != 0));
        assert_eq!(moves.len(), 1);
    }

    #[test]
    fn non_full_yard_always_has_a_forced_move() {
        for extra in 0..4 {
            let buffer: Vec<_> = (0..extra).map(|i| block(10 + i, 100 + i as i64)).collect();
            let world = world(
                stack(0, 5, vec![block(1, 5), block(2, 500)]),
                vec![stack(1, 5, buffer), stack(2, 5, vec![])],
                HANDOVER,
                true,
            );
            assert!(!forced(&state(&world)).is_empty());
        }
    }

    #[test]
    fn generated_moves_never_exceed_capacity() {
        let world = world(
            stack(0, 4, vec![block(1, 10), block(2, 20), block(3, 30)]),
            vec![
                stack(1, 1, vec![block(4, 5)]),
                stack(2, 2, vec![block(5, 40)]),
                stack(3, 1, vec![]),
            ],
            HANDOVER,
            true,
        );
        let initial = state(&world);
        let mut frontier = vec![initial];
        let mut moves = Vec::new();
        while let Some(state) = frontier.pop() {
            state.forced_moves(&mut moves);
            for mov in &moves {
                if mov.tgt() != HANDOVER {
                    let tgt = &state.stacks[state.stack_index(mov.tgt()).unwrap()];
                    assert!(tgt.blocks.len() < tgt.max_height);
                }
                frontier.push(state.apply_move(*mov).unwrap());
            }
        }
    }

    #[test]
    fn blocks_are_conserved_across_reachable_states() {
        let world = world(
            stack(0, 4, vec![block(1, 30), block(2, 10), block(3, 20)]),
            vec![
                stack(1, 2, vec![block(4, 5), block(5, 50)]),
                stack(2, 2, vec![block(6, 15)]),
            ],
            HANDOVER,
            true,
        );
        let initial = state(&world);
        let total = initial.block_count();
        assert_eq!(total, 6);

        let mut frontier = vec![initial];
        let mut moves = Vec::new();
        let mut visited = 0;
        while let Some(state) = frontier.pop() {
            visited += 1;
            assert_eq!(state.block_count() + state.delivered_count(), total);
            state.forced_moves(&mut moves);
            for mov in &moves {
                frontier.push(state.apply_move(*mov).unwrap());
            }
        }
        assert!(visited > 1);
    }

    #[test]
    fn apply_move_leaves_parent_untouched() {
        let world = world(
            stack(0, 3, vec![block(2, 20), block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        let parent = state(&world);
        let child = parent.apply_move(Move::new(0, 1, 2)).unwrap();
        assert_eq!(parent.block_count(), 2);
        assert!(parent.moves().is_empty());
        assert_eq!(child.moves(), &[Move::new(0, 1, 2)]);
        assert_eq!(child.stacks[1].top().map(|b| b.id), Some(2));
    }

    #[test]
    fn apply_move_rejects_inconsistent_moves() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        let state = state(&world);
        assert!(matches!(
            state.apply_move(Move::new(7, 1, 1)),
            Err(PlanError::UnknownStack { stack: 7 })
        ));
        assert!(matches!(
            state.apply_move(Move::new(1, 0, 1)),
            Err(PlanError::EmptyStack { stack: 1 })
        ));
        assert!(matches!(
            state.apply_move(Move::new(0, 1, 5)),
            Err(PlanError::UnexpectedBlock { found: 1, .. })
        ));
    }

    #[test]
    fn calculate_schedule_delivers_accessible_block() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        let schedule = calculate_schedule(&world, &SearchConfig::default()).unwrap();
        let moves = schedule.get_Moves();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].get_BlockId(), 1);
        assert_eq!(moves[0].get_SourceId(), 0);
        assert_eq!(moves[0].get_TargetId(), HANDOVER);
    }
}
