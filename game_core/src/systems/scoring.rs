use crate::{Ball, Config, Events, GameMap, Paddle, Score, ServeState};
use hecs::World;

/// Check whether the ball left the playfield horizontally and, if so,
/// count the point and reset the round (scored variant only).
pub fn check_scoring(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    serve: &ServeState,
    events: &mut Events,
) {
    let ball_x = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.x)
    };

    let ball_x = match ball_x {
        Some(x) => x,
        None => return,
    };

    if ball_x < 0.0 {
        score.increment_right();
        events.right_scored = true;
        reset_round(world, map, config, serve);
    } else if ball_x > map.width {
        score.increment_left();
        events.left_scored = true;
        reset_round(world, map, config, serve);
    }
}

/// Recenter both paddles and the ball and apply a fresh serve vector.
fn reset_round(world: &mut World, map: &GameMap, config: &Config, serve: &ServeState) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = map.paddle_spawn_y();
    }
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = map.center();
        ball.vel = config.serve_velocity(serve.side);
    }
}
