use glam::DVec2;

use crate::core::boundary::{self, Walls, WallContact};
use crate::core::config::SimConfig;
use crate::core::forces::ForceAccumulator;
use crate::core::integrator;
use crate::error::{ensure_finite, ensure_positive, SandboxError};
use crate::math::{Rect, Vector2};

/// Builder for describing a body before creation.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub position: Vector2,
    pub size: Vector2,
    pub velocity: Vector2,
    pub rotation: f64,
    pub mass: f64,
}

impl BodyDesc {
    /// A resting, unrotated box of the given width, height and mass at the origin.
    pub fn rect(width: f64, height: f64, mass: f64) -> Self {
        Self {
            position: Vector2::ZERO,
            size: Vector2::from_cartesian(width, height),
            velocity: Vector2::ZERO,
            rotation: 0.0,
            mass,
        }
    }

    pub fn with_position(mut self, x: f64, y: f64) -> Self {
        self.position = Vector2::from_cartesian(x, y);
        self
    }

    pub fn with_velocity(mut self, x: f64, y: f64) -> Self {
        self.velocity = Vector2::from_cartesian(x, y);
        self
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }
}

/// What one `step` did, for overlays and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub net_force: Vector2,
    pub acceleration: Vector2,
    /// Wall contacts in resolution order; empty for free motion.
    pub contacts: Vec<WallContact>,
}

/// A rectangular body with cosmetic rotation.
///
/// The bounding envelope is cached: it is computed at construction and
/// refreshed at the end of every step, so rotation changes made by the
/// driver take effect on the envelope one step later.
#[derive(Debug, Clone)]
pub struct Body {
    position: Vector2,
    size: Vector2,
    velocity: Vector2,
    rotation: f64,
    mass: f64,
    forces: ForceAccumulator,
    envelope: Rect,
}

impl Body {
    pub fn new(desc: BodyDesc) -> Result<Self, SandboxError> {
        ensure_positive("mass", desc.mass)?;
        ensure_positive("width", desc.size.x())?;
        ensure_positive("height", desc.size.y())?;
        ensure_finite("position.x", desc.position.x())?;
        ensure_finite("position.y", desc.position.y())?;
        ensure_finite("velocity.x", desc.velocity.x())?;
        ensure_finite("velocity.y", desc.velocity.y())?;
        ensure_finite("rotation", desc.rotation)?;

        let mut body = Self {
            position: desc.position,
            size: desc.size,
            velocity: desc.velocity,
            rotation: desc.rotation,
            mass: desc.mass,
            forces: ForceAccumulator::new(),
            envelope: Rect::new(DVec2::ZERO, DVec2::ZERO),
        };
        body.refresh_envelope();
        Ok(body)
    }

    pub fn position(&self) -> Vector2 {
        self.position
    }

    pub fn size(&self) -> Vector2 {
        self.size
    }

    pub fn velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Rotation is cosmetic and set directly by the driver.
    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    pub fn apply_force(&mut self, force: Vector2) {
        self.forces.apply(force);
    }

    pub fn forces(&self) -> &ForceAccumulator {
        &self.forces
    }

    pub fn net_force(&self) -> Vector2 {
        self.forces.net()
    }

    /// Rotated-corner envelope as of the last step.
    pub fn bounding_envelope(&self) -> Rect {
        self.envelope
    }

    /// Half of the envelope's height, used as clearance on both axes.
    pub fn half_extent(&self) -> f64 {
        self.envelope.height() / 2.0
    }

    /// World-space corners for the current position and rotation,
    /// counter-clockwise from the top-right.
    pub fn corners(&self) -> [DVec2; 4] {
        let center = self.position.to_glam();
        let half = self.size.to_glam() * 0.5;
        let rot = DVec2::from_angle(self.rotation);
        [
            DVec2::new(half.x, half.y),
            DVec2::new(-half.x, half.y),
            DVec2::new(-half.x, -half.y),
            DVec2::new(half.x, -half.y),
        ]
        .map(|offset| center + rot.rotate(offset))
    }

    /// Advance one fixed tick using the forces applied since the last clear.
    pub fn step(&mut self, config: &SimConfig) -> Result<StepReport, SandboxError> {
        let net_force = self.forces.net();
        if !net_force.is_finite() {
            return Err(SandboxError::NonFinite { quantity: "net force" });
        }
        let acceleration = integrator::acceleration(&net_force, self.mass);

        let walls = Walls::new(config, self.half_extent());
        let contacts = boundary::resolve(
            &mut self.position,
            &mut self.velocity,
            &acceleration,
            &net_force,
            &walls,
        );

        if !self.velocity.is_finite() {
            return Err(SandboxError::NonFinite { quantity: "velocity" });
        }
        if !self.position.is_finite() {
            return Err(SandboxError::NonFinite { quantity: "position" });
        }

        self.refresh_envelope();

        Ok(StepReport {
            net_force,
            acceleration,
            contacts,
        })
    }

    fn refresh_envelope(&mut self) {
        self.envelope = Rect::enclosing(self.corners());
    }
}
