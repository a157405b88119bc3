use serde::{Deserialize, Serialize};

use crate::error::{ensure_finite, ensure_positive, SandboxError};
use crate::math::Vector2;

/// Gravitational accelerations along -Y, in m/s².
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GravityPreset {
    Earth,
    Moon,
    Sun,
}

impl GravityPreset {
    pub fn acceleration(self) -> f64 {
        match self {
            GravityPreset::Earth => -9.81,
            GravityPreset::Moon => -1.6,
            GravityPreset::Sun => -275.0,
        }
    }
}

/// Which debug layers the overlay builder emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    pub draw_hitboxes: bool,
    pub draw_velocity: bool,
    pub draw_forces: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            draw_hitboxes: true,
            draw_velocity: true,
            draw_forces: true,
        }
    }
}

/// World constants for the sandbox, passed explicitly to every entry point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Fixed simulation steps per second (default: 120).
    pub tick_rate: f64,
    /// Viewport width in pixels (default: 1080).
    pub viewport_width_px: f64,
    /// Viewport height in pixels (default: 1080).
    pub viewport_height_px: f64,
    /// Pixels per world unit (default: 27).
    pub unit_scale: f64,
    /// Vertical gravitational acceleration. Negative pulls down.
    pub gravity: f64,
    /// Fraction of perpendicular speed kept on a wall bounce, in [0, 1].
    pub restitution: f64,
    /// Perpendicular speed below which a wall contact counts as resting.
    pub bounce_threshold: f64,
    /// Spring constant of the pointer drag force.
    pub drag_stiffness: f64,
    /// Upper bound on fixed steps run for one rendered frame.
    pub max_steps_per_frame: u32,
    pub debug: DebugSettings,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tick_rate: 120.0,
            viewport_width_px: 1080.0,
            viewport_height_px: 1080.0,
            unit_scale: 27.0,
            gravity: GravityPreset::Earth.acceleration(),
            restitution: 0.5,
            bounce_threshold: 0.5,
            drag_stiffness: 1.0,
            max_steps_per_frame: 10,
            debug: DebugSettings::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SandboxError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_gravity_preset(mut self, preset: GravityPreset) -> Self {
        self.gravity = preset.acceleration();
        self
    }

    /// Check every constant is usable before the first tick.
    pub fn validate(&self) -> Result<(), SandboxError> {
        ensure_positive("tick_rate", self.tick_rate)?;
        ensure_positive("viewport_width_px", self.viewport_width_px)?;
        ensure_positive("viewport_height_px", self.viewport_height_px)?;
        ensure_positive("unit_scale", self.unit_scale)?;
        ensure_finite("gravity", self.gravity)?;
        ensure_finite("drag_stiffness", self.drag_stiffness)?;
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(SandboxError::invalid("restitution", self.restitution));
        }
        if !(self.bounce_threshold >= 0.0 && self.bounce_threshold.is_finite()) {
            return Err(SandboxError::invalid("bounce_threshold", self.bounce_threshold));
        }
        if self.max_steps_per_frame == 0 {
            return Err(SandboxError::invalid("max_steps_per_frame", 0.0));
        }
        Ok(())
    }

    pub fn world_width(&self) -> f64 {
        self.viewport_width_px / self.unit_scale
    }

    pub fn world_height(&self) -> f64 {
        self.viewport_height_px / self.unit_scale
    }

    /// One display pixel expressed in world units.
    pub fn pixel(&self) -> f64 {
        1.0 / self.unit_scale
    }

    pub fn gravity_vector(&self) -> Vector2 {
        Vector2::from_cartesian(0.0, self.gravity)
    }

    /// Convert a viewport pixel position (Y-down) to world units (Y-up).
    pub fn pixel_to_world(&self, x: f64, y: f64) -> glam::DVec2 {
        glam::DVec2::new(x / self.unit_scale, self.world_height() - y / self.unit_scale)
    }

    /// Convert a world position (Y-up) to viewport pixels (Y-down).
    pub fn world_to_pixel(&self, p: glam::DVec2) -> glam::DVec2 {
        glam::DVec2::new(p.x * self.unit_scale, self.viewport_height_px - p.y * self.unit_scale)
    }
}
