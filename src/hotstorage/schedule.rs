use super::{
    brp::Move,
    hotstorage_model::{CraneMove, CraneSchedule, World},
};

/// Translates the BRP solution into a CraneSchedule
///
/// Only the first `max_moves` moves are used, and the schedule stops before the first
/// handover delivery while the handover is not ready.
pub fn create_schedule_from_solution(
    world: &World,
    moves: Option<Vec<Move>>,
    max_moves: usize,
) -> CraneSchedule {
    let mut schedule = CraneSchedule::new();
    let handover = world.get_Handover();
    let is_ready = handover.get_Ready();
    for opt_mov in moves.unwrap_or_default().into_iter().take(max_moves) {
        if !is_ready && opt_mov.tgt() == handover.get_Id() {
            break;
        }
        let mut mov = CraneMove::new();
        mov.set_BlockId(opt_mov.block());
        mov.set_SourceId(opt_mov.src());
        mov.set_TargetId(opt_mov.tgt());
        schedule.mut_Moves().push(mov);
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotstorage::testutil::{stack, world};

    const HANDOVER: i32 = 9;

    fn yard(ready: bool) -> World {
        world(
            stack(0, 3, vec![]),
            vec![stack(1, 3, vec![]), stack(2, 3, vec![])],
            HANDOVER,
            ready,
        )
    }

    fn ids(schedule: &CraneSchedule) -> Vec<(i32, i32, i32)> {
        schedule
            .get_Moves()
            .iter()
            .map(|m| (m.get_BlockId(), m.get_SourceId(), m.get_TargetId()))
            .collect()
    }

    #[test]
    fn no_solution_gives_empty_schedule() {
        let schedule = create_schedule_from_solution(&yard(true), None, 3);
        assert!(schedule.get_Moves().is_empty());
    }

    #[test]
    fn schedule_is_capped() {
        let moves = vec![
            Move::new(0, 1, 5),
            Move::new(0, HANDOVER, 4),
            Move::new(1, HANDOVER, 5),
            Move::new(2, HANDOVER, 6),
        ];
        let schedule = create_schedule_from_solution(&yard(true), Some(moves), 3);
        assert_eq!(
            ids(&schedule),
            vec![(5, 0, 1), (4, 0, HANDOVER), (5, 1, HANDOVER)]
        );
    }

    #[test]
    fn handover_not_ready_blocks_first_delivery() {
        let moves = vec![Move::new(0, HANDOVER, 4), Move::new(1, 2, 7)];
        let schedule = create_schedule_from_solution(&yard(false), Some(moves), 3);
        assert!(schedule.get_Moves().is_empty());
    }

    #[test]
    fn handover_not_ready_truncates_after_relocations() {
        let moves = vec![
            Move::new(0, 1, 5),
            Move::new(0, HANDOVER, 4),
            Move::new(1, 2, 5),
        ];
        let schedule = create_schedule_from_solution(&yard(false), Some(moves), 3);
        assert_eq!(ids(&schedule), vec![(5, 0, 1)]);
    }

    #[test]
    fn sequence_number_is_left_to_the_caller() {
        let moves = vec![Move::new(0, 1, 5)];
        let schedule = create_schedule_from_solution(&yard(true), Some(moves), 3);
        assert_eq!(schedule.get_SequenceNr(), 0);
    }
}
