use crate::{AiControlled, Ball, Config, GameMap, Paddle, Time};
use hecs::World;

/// Drive AI paddles toward the ball's vertical position.
///
/// Proportional tracking with a speed ceiling: the step is the raw distance
/// to the ball, clamped to one frame's worth of travel at paddle speed.
pub fn drive_ai_paddles(world: &mut World, time: &Time, map: &GameMap, config: &Config) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    let ball_y = match ball_y {
        Some(y) => y,
        None => return, // No ball in world
    };

    let max_step = config.paddle_speed * time.dt;
    for (_entity, (paddle, _ai)) in world.query_mut::<(&mut Paddle, &AiControlled)>() {
        let step = (ball_y - paddle.y).clamp(-max_step, max_step);
        paddle.y = map.clamp_y(paddle.y + step, config.paddle_height / 2.0);
    }
}
