use game_core::{
    create_ai_paddle, create_ball, create_paddle, step, Ball, Config, Events, GameMap, InputQueue,
    Paddle, Score, ServeState, Time,
};
use hecs::World;

/// A complete local game: world plus the resources the pipeline needs.
pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub score: Score,
    pub serve: ServeState,
    pub events: Events,
    pub queue: InputQueue,
}

impl LocalGame {
    /// Spawn both paddles and a served ball. With `ai_opponent` the right
    /// paddle tracks the ball instead of reading keyboard input.
    pub fn new(config: Config, ai_opponent: bool) -> Self {
        let map = GameMap::new();
        let serve = ServeState::default();
        let mut world = World::new();

        let spawn_y = map.paddle_spawn_y();
        create_paddle(&mut world, 0, spawn_y);
        if ai_opponent {
            create_ai_paddle(&mut world, 1, spawn_y);
        } else {
            create_paddle(&mut world, 1, spawn_y);
        }
        create_ball(&mut world, map.center(), config.serve_velocity(serve.side));

        Self {
            world,
            time: Time::new(0.016, 0.0),
            map,
            config,
            score: Score::new(),
            serve,
            events: Events::new(),
            queue: InputQueue::new(),
        }
    }

    pub fn push_input(&mut self, player_id: u8, dir: i8) {
        self.queue.push_input(player_id, dir);
    }

    /// Advance the simulation by one frame of wall-clock time.
    pub fn step(&mut self, dt: f32) {
        self.time.dt = dt;
        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.score,
            &self.serve,
            &mut self.events,
            &mut self.queue,
        );
    }

    /// Ball center, if the ball is still on the field's entity list.
    pub fn ball_pos(&self) -> Option<(f32, f32)> {
        let mut query = self.world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| (ball.pos.x, ball.pos.y))
    }

    /// (left, right) paddle centers.
    pub fn paddle_ys(&self) -> (f32, f32) {
        let mut left = self.map.paddle_spawn_y();
        let mut right = self.map.paddle_spawn_y();
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            if paddle.player_id == 0 {
                left = paddle.y;
            } else {
                right = paddle.y;
            }
        }
        (left, right)
    }
}
