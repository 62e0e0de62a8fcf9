mod brp;
mod heuristic;
mod hotstorage_model;
mod priority;
mod schedule;
mod search;

pub use hotstorage_model::{CraneSchedule, World};

use crate::{
    config::{OptimizerType, PlannerConfig, SearchConfig},
    error::Result,
};
use tracing::debug;

pub type StackId = i32;
pub type BlockId = i32;
pub type Priority = u32;

/// Something that can propose crane moves for a world snapshot.
pub trait Strategy {
    fn propose(&self, world: &World) -> Result<CraneSchedule>;
}

/// Single-step rules without look-ahead.
pub struct RuleBased;

impl Strategy for RuleBased {
    fn propose(&self, world: &World) -> Result<CraneSchedule> {
        Ok(heuristic::next_moves(world))
    }
}

/// Bounded depth first search over the block relocation problem.
pub struct ModelBased {
    pub search: SearchConfig,
}

impl Strategy for ModelBased {
    fn propose(&self, world: &World) -> Result<CraneSchedule> {
        brp::calculate_schedule(world, &self.search)
    }
}

pub fn strategy(config: &PlannerConfig) -> Box<dyn Strategy> {
    match config.strategy {
        OptimizerType::RuleBased => Box::new(RuleBased),
        OptimizerType::ModelBased => Box::new(ModelBased {
            search: config.search.clone(),
        }),
    }
}

pub fn plan_moves(world: &World, strategy: &dyn Strategy) -> Result<Option<CraneSchedule>> {
    if !world.get_Crane().get_Schedule().get_Moves().is_empty() {
        // Leave the existing schedule alone
        return Ok(None);
    }
    let mut schedule = strategy.propose(world)?;

    if schedule.get_Moves().is_empty() {
        // avoid sending empty schedules
        Ok(None)
    } else {
        // set sequence number because the simulation only accepts Schedules with increasing sequence numbers.
        let sequence = world.get_Crane().get_Schedule().get_SequenceNr().wrapping_add(1);
        schedule.set_SequenceNr(sequence);
        debug!(sequence, moves = schedule.get_Moves().len(), "new schedule");
        Ok(Some(schedule))
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::hotstorage_model::{Block, Stack, World};
    use protobuf::RepeatedField;

    pub fn block(id: i32, due: i64) -> Block {
        let mut block = Block::new();
        block.set_Id(id);
        block.mut_Due().set_MilliSeconds(due);
        block
    }

    pub fn ready_block(id: i32, due: i64) -> Block {
        let mut block = block(id, due);
        block.set_Ready(true);
        block
    }

    pub fn stack(id: i32, max_height: i32, bottom_to_top: Vec<Block>) -> Stack {
        let mut stack = Stack::new();
        stack.set_Id(id);
        stack.set_MaxHeight(max_height);
        stack.set_BottomToTop(RepeatedField::from_vec(bottom_to_top));
        stack
    }

    pub fn world(production: Stack, buffers: Vec<Stack>, handover: i32, ready: bool) -> World {
        let mut world = World::new();
        world.set_Production(production);
        world.set_Buffers(RepeatedField::from_vec(buffers));
        world.mut_Handover().set_Id(handover);
        world.mut_Handover().set_Ready(ready);
        world
    }
}

#[cfg(test)]
mod tests {
    use super::hotstorage_model::CraneMove;
    use super::testutil::{block, stack, world};
    use super::*;

    const HANDOVER: i32 = 9;

    fn moves(schedule: &CraneSchedule) -> Vec<(i32, i32, i32)> {
        schedule
            .get_Moves()
            .iter()
            .map(|m| (m.get_BlockId(), m.get_SourceId(), m.get_TargetId()))
            .collect()
    }

    fn model_based(budget: usize) -> Box<dyn Strategy> {
        strategy(&PlannerConfig::default().with_node_budget(budget))
    }

    #[test]
    fn urgent_block_on_top_is_delivered() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        let schedule = plan_moves(&world, model_based(1000).as_ref())
            .unwrap()
            .unwrap();
        assert_eq!(moves(&schedule), vec![(1, 0, HANDOVER)]);
    }

    #[test]
    fn buried_block_relocates_blocker_first() {
        // production is searched top to bottom: block 2 covers block 1
        let world = world(
            stack(0, 3, vec![block(2, 20), block(1, 10)]),
            vec![stack(1, 1, vec![])],
            HANDOVER,
            true,
        );
        let schedule = plan_moves(&world, model_based(1000).as_ref())
            .unwrap()
            .unwrap();
        assert_eq!(
            moves(&schedule),
            vec![(2, 0, 1), (1, 0, HANDOVER), (2, 1, HANDOVER)]
        );
    }

    #[test]
    fn closed_handover_yields_no_schedule() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            false,
        );
        assert!(plan_moves(&world, model_based(1000).as_ref())
            .unwrap()
            .is_none());
    }

    #[test]
    fn zero_budget_yields_no_schedule() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        assert!(plan_moves(&world, model_based(0).as_ref()).unwrap().is_none());
    }

    #[test]
    fn existing_schedule_is_left_alone() {
        let mut world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        world
            .mut_Crane()
            .mut_Schedule()
            .mut_Moves()
            .push(CraneMove::new());
        assert!(plan_moves(&world, model_based(1000).as_ref())
            .unwrap()
            .is_none());
    }

    #[test]
    fn sequence_number_follows_the_snapshot() {
        let mut world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        world.mut_Crane().mut_Schedule().set_SequenceNr(41);
        let schedule = plan_moves(&world, model_based(1000).as_ref())
            .unwrap()
            .unwrap();
        assert_eq!(schedule.get_SequenceNr(), 42);
    }

    #[test]
    fn sequence_number_wraps_instead_of_overflowing() {
        let mut world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        world.mut_Crane().mut_Schedule().set_SequenceNr(i32::MAX);
        let schedule = plan_moves(&world, model_based(1000).as_ref())
            .unwrap()
            .unwrap();
        assert_eq!(schedule.get_SequenceNr(), i32::MIN);
    }

    #[test]
    fn rule_based_strategy_is_selectable() {
        let config = PlannerConfig::default().with_strategy(OptimizerType::RuleBased);
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 2, vec![])],
            HANDOVER,
            true,
        );
        let schedule = plan_moves(&world, strategy(&config).as_ref())
            .unwrap()
            .unwrap();
        assert_eq!(moves(&schedule), vec![(1, 0, 1)]);
    }
}
