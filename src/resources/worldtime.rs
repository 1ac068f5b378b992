use bevy_ecs::prelude::Resource;

/// Length of one simulation tick in seconds. Demo speeds are given per tick.
pub const TICK_SECONDS: f32 = 1.0 / 60.0;

#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f32,
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    /// Frame delta expressed in ticks.
    pub fn ticks(&self) -> f32 {
        self.delta / TICK_SECONDS
    }
}
