use crate::{Aabb, Ball, Config, Events, GameMap, Paddle};
use glam::Vec2;
use hecs::World;

/// Check ball collisions with walls and paddles.
///
/// Wall bounces compare the ball center against the playfield bounds, flip
/// the vertical velocity, scale both components by the velocity multiplier
/// and nudge the ball back inside by a fixed offset. Paddle bounces flip the
/// horizontal velocity and reposition the ball flush with the paddle's front
/// edge; the return angle depends only on the incoming vertical velocity,
/// never on where the paddle was struck.
pub fn check_collisions(world: &mut World, map: &GameMap, config: &Config, events: &mut Events) {
    // Collect ball data without holding borrows
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Top/bottom wall bounces
    if ball_pos.y > map.height {
        ball_vel.x *= config.velocity_multiplier;
        ball_vel.y = -ball_vel.y * config.velocity_multiplier;
        ball_pos.y -= config.wall_rebound_nudge;
        events.ball_hit_wall = true;
    } else if ball_pos.y < 0.0 {
        ball_vel.x *= config.velocity_multiplier;
        ball_vel.y = -ball_vel.y * config.velocity_multiplier;
        ball_pos.y += config.wall_rebound_nudge;
        events.ball_hit_wall = true;
    }

    // Paddle intercepts
    let paddles: Vec<(u8, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player_id, p.y))
        .collect();

    for (player_id, paddle_y) in paddles {
        let rect = Aabb::from_center_size(
            Vec2::new(config.paddle_x(player_id), paddle_y),
            Vec2::new(config.paddle_width, config.paddle_height),
        );
        let within_extent = ball_pos.y >= rect.min.y && ball_pos.y <= rect.max.y;
        if !within_extent {
            continue;
        }

        // Intercept once the ball center reaches the front edge while
        // moving toward the paddle
        if player_id == 0 {
            if ball_vel.x < 0.0 && ball_pos.x <= rect.max.x {
                ball_vel.x = -ball_vel.x;
                ball_pos.x = rect.max.x;
                events.ball_hit_paddle = true;
            }
        } else if ball_vel.x > 0.0 && ball_pos.x >= rect.min.x {
            ball_vel.x = -ball_vel.x;
            ball_pos.x = rect.min.x;
            events.ball_hit_paddle = true;
        }
    }

    if events.ball_hit_wall || events.ball_hit_paddle {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = ball_pos;
            ball.vel = ball_vel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events, GameMap};

    fn setup_world() -> (hecs::World, Config, GameMap, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let map = GameMap::new();
        let events = Events::new();
        (world, config, map, events)
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, -3.0); // Past the top wall
        let ball_vel = Vec2::new(100.0, -60.0);
        create_ball(&mut world, ball_pos, ball_vel);

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!((ball.vel.y - 66.0).abs() < 1e-3, "Y flips and scales 1.1x");
            assert!((ball.vel.x - 110.0).abs() < 1e-3, "X scales 1.1x");
            assert!(
                (ball.pos.y - 7.0).abs() < 1e-3,
                "Nudged back by the fixed offset"
            );
        }
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, map, mut events) = setup_world();
        let ball_pos = Vec2::new(400.0, map.height + 4.0);
        let ball_vel = Vec2::new(-100.0, 60.0);
        create_ball(&mut world, ball_pos, ball_vel);

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!((ball.vel.y + 66.0).abs() < 1e-3, "Y flips and scales 1.1x");
            assert!((ball.vel.x + 110.0).abs() < 1e-3, "X scales 1.1x");
            assert!((ball.pos.y - (map.height - 6.0)).abs() < 1e-3);
        }
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_wall_nudge_can_leave_ball_outside() {
        // The rebound is a fixed offset, not a reflection. A large overshoot
        // stays out of bounds for another frame.
        let (mut world, config, map, mut events) = setup_world();
        let overshoot = config.wall_rebound_nudge + 15.0;
        create_ball(
            &mut world,
            Vec2::new(400.0, map.height + overshoot),
            Vec2::new(100.0, 500.0),
        );

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert!(
                ball.pos.y > map.height,
                "Fixed nudge does not resolve a deep overshoot"
            );
            assert!(ball.vel.y < 0.0, "Velocity still flips upward");
        }
    }

    #[test]
    fn test_ball_bounces_off_left_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_y = 300.0;
        create_paddle(&mut world, 0, paddle_y);

        let front_edge = config.paddle_x(0) + config.paddle_width / 2.0;
        let ball_vel = Vec2::new(-200.0, 45.0);
        create_ball(&mut world, Vec2::new(front_edge - 2.0, paddle_y + 20.0), ball_vel);

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, 200.0, "X velocity flips, magnitude unchanged");
            assert_eq!(ball.vel.y, 45.0, "Y velocity untouched by paddle contact");
            assert_eq!(
                ball.pos.x, front_edge,
                "Ball repositioned flush with the front edge"
            );
        }
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_bounces_off_right_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_y = 300.0;
        create_paddle(&mut world, 1, paddle_y);

        let front_edge = config.paddle_x(1) - config.paddle_width / 2.0;
        let ball_vel = Vec2::new(250.0, -80.0);
        create_ball(&mut world, Vec2::new(front_edge + 3.0, paddle_y - 30.0), ball_vel);

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -250.0);
            assert_eq!(ball.vel.y, -80.0, "No deflection from contact point");
            assert_eq!(ball.pos.x, front_edge);
        }
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_no_bounce_outside_vertical_extent() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_y = 300.0;
        create_paddle(&mut world, 0, paddle_y);

        let front_edge = config.paddle_x(0) + config.paddle_width / 2.0;
        let miss_y = paddle_y + config.paddle_height / 2.0 + 5.0;
        let ball_vel = Vec2::new(-200.0, 0.0);
        create_ball(&mut world, Vec2::new(front_edge - 2.0, miss_y), ball_vel);

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, -200.0, "Ball passes the paddle");
        }
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_bounce_when_moving_away_from_paddle() {
        let (mut world, config, map, mut events) = setup_world();
        let paddle_y = 300.0;
        create_paddle(&mut world, 0, paddle_y);

        let front_edge = config.paddle_x(0) + config.paddle_width / 2.0;
        // Just bounced: sitting at the front edge but moving right
        create_ball(&mut world, Vec2::new(front_edge, paddle_y), Vec2::new(200.0, 45.0));

        check_collisions(&mut world, &map, &config, &mut events);

        for (_entity, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.vel.x, 200.0, "Ball should not bounce when moving away");
        }
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, map, mut events) = setup_world();
        create_paddle(&mut world, 0, 300.0);

        // Should not panic or error
        check_collisions(&mut world, &map, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
