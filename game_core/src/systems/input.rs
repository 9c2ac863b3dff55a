use crate::{InputQueue, Paddle, PaddleIntent};
use hecs::World;

/// Drain queued keyboard input into paddle intents.
///
/// AI paddles carry no `PaddleIntent`, so queued input for their player ID
/// is dropped here.
pub fn ingest_inputs(world: &mut World, queue: &mut InputQueue) {
    for (player_id, dir) in queue.inputs.drain(..) {
        for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
            if paddle.player_id == player_id {
                intent.dir = dir;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ai_paddle, create_paddle, InputQueue, PaddleIntent};

    #[test]
    fn test_input_sets_matching_paddle_intent() {
        let mut world = hecs::World::new();
        let left = create_paddle(&mut world, 0, 300.0);
        let right = create_paddle(&mut world, 1, 300.0);

        let mut queue = InputQueue::new();
        queue.push_input(0, -1);
        queue.push_input(1, 1);
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, -1);
        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().dir, 1);
        assert!(queue.inputs.is_empty(), "Queue should be drained");
    }

    #[test]
    fn test_input_ignored_for_ai_paddle() {
        let mut world = hecs::World::new();
        create_paddle(&mut world, 0, 300.0);
        let ai = create_ai_paddle(&mut world, 1, 300.0);

        let mut queue = InputQueue::new();
        queue.push_input(1, 1);
        ingest_inputs(&mut world, &mut queue);

        assert!(
            world.get::<&PaddleIntent>(ai).is_err(),
            "AI paddle has no intent component"
        );
    }

    #[test]
    fn test_later_input_wins_within_a_frame() {
        let mut world = hecs::World::new();
        let left = create_paddle(&mut world, 0, 300.0);

        let mut queue = InputQueue::new();
        queue.push_input(0, 1);
        queue.push_input(0, 0);
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().dir, 0);
    }
}
