use super::hotstorage_model::{CraneMove, CraneSchedule, World};

/// Use simple heuristics to come up with a crane schedule.
/// At most one move is proposed: a delivery if one is possible, otherwise clearing production.
pub fn next_moves(world: &World) -> CraneSchedule {
    let mut schedule = CraneSchedule::new();
    let mov = any_handover_move(world).or_else(|| clear_production_stack(world));
    if let Some(mov) = mov {
        schedule.mut_Moves().push(mov);
    }
    schedule
}

fn crane_move(block: i32, src: i32, tgt: i32) -> CraneMove {
    let mut mov = CraneMove::new();
    mov.set_BlockId(block);
    mov.set_SourceId(src);
    mov.set_TargetId(tgt);
    mov
}

/// If any block on top of a buffer can be moved to the handover, move it.
fn any_handover_move(world: &World) -> Option<CraneMove> {
    let handover = world.get_Handover();
    if !handover.get_Ready() {
        return None;
    }
    world.get_Buffers().iter().find_map(|stack| {
        let top = stack.get_BottomToTop().last()?;
        top.get_Ready()
            .then(|| crane_move(top.get_Id(), stack.get_Id(), handover.get_Id()))
    })
}

/// If the top block of the production stack can be put on a buffer, move it there.
fn clear_production_stack(world: &World) -> Option<CraneMove> {
    let production = world.get_Production();
    let block = production.get_BottomToTop().last()?;
    let free = world
        .get_Buffers()
        .iter()
        .find(|b| (b.get_MaxHeight().max(0) as usize) > b.get_BottomToTop().len())?;
    Some(crane_move(block.get_Id(), production.get_Id(), free.get_Id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hotstorage::testutil::{block, ready_block, stack, world};

    const HANDOVER: i32 = 9;

    fn only_move(schedule: &CraneSchedule) -> (i32, i32, i32) {
        assert_eq!(schedule.get_Moves().len(), 1);
        let mov = &schedule.get_Moves()[0];
        (mov.get_BlockId(), mov.get_SourceId(), mov.get_TargetId())
    }

    #[test]
    fn ready_block_goes_to_handover() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![
                stack(1, 2, vec![block(2, 20)]),
                stack(2, 2, vec![block(3, 30), ready_block(4, 40)]),
            ],
            HANDOVER,
            true,
        );
        assert_eq!(only_move(&next_moves(&world)), (4, 2, HANDOVER));
    }

    #[test]
    fn closed_handover_clears_production_instead() {
        let world = world(
            stack(0, 3, vec![block(5, 50), block(1, 10)]),
            vec![
                stack(1, 1, vec![ready_block(2, 20)]),
                stack(2, 2, vec![]),
            ],
            HANDOVER,
            false,
        );
        assert_eq!(only_move(&next_moves(&world)), (1, 0, 2));
    }

    #[test]
    fn nothing_to_do() {
        let world = world(
            stack(0, 3, vec![block(1, 10)]),
            vec![stack(1, 1, vec![block(2, 20)])],
            HANDOVER,
            true,
        );
        assert!(next_moves(&world).get_Moves().is_empty());
    }
}
