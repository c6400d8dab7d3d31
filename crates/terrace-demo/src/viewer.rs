//! The scripted viewer that drives streaming in the headless demo.

use glam::Vec3;
use terrace_config::ViewerConfig;
use terrace_world::World;

/// Starting altitude in fly mode.
pub const FLY_ALTITUDE: f32 = 150.0;

/// Heading change per tick, radians. Makes the viewer trace a wide circle.
pub const TURN_RATE: f32 = 0.002;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveMode {
    /// Eye height follows the terrain, never dipping below the water.
    Walk,
    /// Altitude is left alone.
    Fly,
}

#[derive(Clone, Debug)]
pub struct Viewer {
    position: Vec3,
    heading: f32,
    speed: f32,
    eye_height: f32,
    mode: MoveMode,
}

impl Viewer {
    pub fn new(config: &ViewerConfig) -> Self {
        let mode = if config.walk {
            MoveMode::Walk
        } else {
            MoveMode::Fly
        };
        let y = match mode {
            MoveMode::Walk => config.eye_height,
            MoveMode::Fly => FLY_ALTITUDE,
        };
        Self {
            position: Vec3::new(config.start_x, y, config.start_z),
            heading: 0.0,
            speed: config.speed,
            eye_height: config.eye_height,
            mode,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn mode(&self) -> MoveMode {
        self.mode
    }

    /// Horizontal unit vector the viewer is moving along.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.heading.cos(), 0.0, self.heading.sin())
    }

    /// Move one tick forward, then settle onto the ground when walking.
    pub fn step(&mut self, world: &World) {
        self.position += self.forward() * self.speed;
        self.heading = (self.heading + TURN_RATE) % std::f32::consts::TAU;
        self.follow_ground(world);
    }

    /// In walk mode, put the eye `eye_height` above the terrain or the water, whichever is higher.
    pub fn follow_ground(&mut self, world: &World) {
        if self.mode == MoveMode::Walk {
            let ground = world.ground_height(self.position).max(0.0);
            self.position.y = ground + self.eye_height;
        }
    }
}
