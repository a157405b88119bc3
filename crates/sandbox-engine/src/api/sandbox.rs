use crate::core::body::{Body, BodyDesc, StepReport};
use crate::core::config::SimConfig;
use crate::core::roster::{BodyId, Entry, Roster};
use crate::core::time::FixedTimestep;
use crate::error::SandboxError;
use crate::input::pointer::{self, PointerState};
use crate::input::queue::{InputEvent, InputQueue};
use crate::math::Vector2;
use crate::renderer::instance::RenderBuffer;
#[cfg(feature = "debug-overlay")]
use crate::systems::debug::{build_debug_overlay, DebugOverlay};
use crate::systems::render::build_render_buffer;

/// The sandbox driver: owns the roster and runs the per-tick loop.
///
/// Each tick, for every body in roster order: clear forces, apply gravity
/// scaled by mass, apply the pointer drag force if any, then step.
pub struct Sandbox {
    config: SimConfig,
    roster: Roster,
    input: InputQueue,
    pointer: PointerState,
    timestep: FixedTimestep,
    /// Latest step report per body, in roster order.
    reports: Vec<StepReport>,
    render_buffer: RenderBuffer,
    #[cfg(feature = "debug-overlay")]
    overlay: DebugOverlay,
    tick_count: u64,
}

impl Sandbox {
    /// Create an empty sandbox. Fails if the config does not validate.
    pub fn new(config: SimConfig) -> Result<Self, SandboxError> {
        config.validate()?;
        let timestep = FixedTimestep::new(config.tick_rate, config.max_steps_per_frame);
        Ok(Self {
            config,
            roster: Roster::new(),
            input: InputQueue::default(),
            pointer: PointerState::default(),
            timestep,
            reports: Vec::new(),
            render_buffer: RenderBuffer::new(),
            #[cfg(feature = "debug-overlay")]
            overlay: DebugOverlay::default(),
            tick_count: 0,
        })
    }

    /// Create a sandbox populated with the given bodies.
    pub fn with_bodies(
        config: SimConfig,
        bodies: impl IntoIterator<Item = BodyDesc>,
    ) -> Result<Self, SandboxError> {
        let mut sandbox = Self::new(config)?;
        for desc in bodies {
            sandbox.spawn(desc)?;
        }
        log::info!(
            "sandbox ready: {} bodies in a {}x{} world at {} ticks/s",
            sandbox.roster.len(),
            sandbox.config.world_width(),
            sandbox.config.world_height(),
            sandbox.config.tick_rate
        );
        Ok(sandbox)
    }

    /// Three boxes of increasing size and mass, dropped from rest.
    pub fn demo(config: SimConfig) -> Result<Self, SandboxError> {
        Self::with_bodies(
            config,
            [
                BodyDesc::rect(1.0, 1.0, 1.0).with_position(3.0, 6.0),
                BodyDesc::rect(2.0, 2.0, 2.0).with_position(7.0, 7.0),
                BodyDesc::rect(3.0, 3.0, 3.0).with_position(11.0, 7.5),
            ],
        )
    }

    /// Add a body to the roster. It must fit inside the viewport.
    pub fn spawn(&mut self, desc: BodyDesc) -> Result<BodyId, SandboxError> {
        let body = Body::new(desc)?;
        let envelope = body.bounding_envelope();
        if envelope.width() >= self.config.world_width() {
            return Err(SandboxError::invalid("width", envelope.width()));
        }
        if envelope.height() >= self.config.world_height() {
            return Err(SandboxError::invalid("height", envelope.height()));
        }
        Ok(self.roster.insert(body))
    }

    /// Queue a pointer event for the next frame.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one fixed tick for every body with the current pointer state.
    pub fn tick(&mut self) -> Result<(), SandboxError> {
        self.reports.clear();
        let config = &self.config;
        let gravity = config.gravity_vector();

        for entry in self.roster.iter_mut() {
            let mass = entry.body.mass();
            entry.body.clear_forces();
            entry
                .body
                .apply_force(Vector2::from_cartesian(gravity.x() * mass, gravity.y() * mass));

            let outcome = pointer::evaluate(&entry.body, entry.grab, &self.pointer, config);
            entry.grab = outcome.grab;
            if let Some(force) = outcome.force {
                entry.body.apply_force(force);
            }
            if let Some(rotation) = outcome.rotation {
                entry.body.set_rotation(rotation);
            }

            let report = entry.body.step(config).map_err(|err| {
                log::error!("body {:?} failed to step: {}", entry.id, err);
                err
            })?;
            self.reports.push(report);
        }

        self.tick_count += 1;
        Ok(())
    }

    /// Run one rendered frame: fold queued input, run as many fixed ticks as
    /// `frame_dt` covers, and rebuild the render data. Returns the tick count.
    pub fn frame(&mut self, frame_dt: f64) -> Result<u32, SandboxError> {
        let events = self.input.drain();
        self.pointer.apply_all(&events);

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.tick()?;
        }

        build_render_buffer(self.roster.iter(), &self.config, &mut self.render_buffer);
        #[cfg(feature = "debug-overlay")]
        build_debug_overlay(self.roster.iter(), &self.reports, &self.config, &mut self.overlay);

        Ok(steps)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.roster.get(id).map(|e| &e.body)
    }

    pub fn entry(&self, id: BodyId) -> Option<&Entry> {
        self.roster.get(id)
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn reports(&self) -> &[StepReport] {
        &self.reports
    }

    pub fn render_buffer(&self) -> &RenderBuffer {
        &self.render_buffer
    }

    #[cfg(feature = "debug-overlay")]
    pub fn overlay(&self) -> &DebugOverlay {
        &self.overlay
    }

    /// Fixed ticks run since creation.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
