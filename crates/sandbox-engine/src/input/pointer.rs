//! Pointer drag as an external force provider.
//!
//! The physics core knows nothing about input devices. Each tick the driver
//! asks [`evaluate`] what the pointer does to a body and feeds at most one
//! extra force into that body's accumulator before stepping it.

use std::f64::consts::FRAC_PI_2;

use glam::DVec2;

use crate::core::body::Body;
use crate::core::config::SimConfig;
use crate::input::queue::InputEvent;
use crate::math::Vector2;

/// Last known pointer position and button state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Viewport pixels (Y-down); `None` when outside the viewport or unseen.
    pub position: Option<DVec2>,
    pub pressed: bool,
}

impl PointerState {
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.position = Some(DVec2::new(x, y));
                self.pressed = true;
            }
            InputEvent::PointerUp { x, y } => {
                self.position = Some(DVec2::new(x, y));
                self.pressed = false;
            }
            InputEvent::PointerMove { x, y } => {
                self.position = Some(DVec2::new(x, y));
            }
            InputEvent::PointerLeave => {
                self.position = None;
                self.pressed = false;
            }
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a InputEvent>) {
        for event in events {
            self.apply(event);
        }
    }
}

/// Pointer relationship with one body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grab {
    #[default]
    Idle,
    /// Pointer is over the body; the body is selected but not pulled.
    Hovered,
    /// Selected body being pulled toward the held pointer.
    Dragged,
}

impl Grab {
    pub fn is_selected(self) -> bool {
        !matches!(self, Grab::Idle)
    }
}

/// Result of evaluating the pointer against one body for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    pub grab: Grab,
    /// Extra force to apply this tick.
    pub force: Option<Vector2>,
    /// New cosmetic rotation; `None` leaves it as is.
    pub rotation: Option<f64>,
}

/// Decide the pointer's effect on `body` given its grab state from last tick.
///
/// Uses the body's cached envelope, so hit testing sees where the body was
/// drawn rather than where this tick will move it.
pub fn evaluate(body: &Body, previous: Grab, pointer: &PointerState, config: &SimConfig) -> DragOutcome {
    let released = DragOutcome {
        grab: Grab::Idle,
        force: None,
        rotation: Some(0.0),
    };
    let Some(pixel) = pointer.position else {
        return released;
    };
    let target = config.pixel_to_world(pixel.x, pixel.y);
    let envelope = body.bounding_envelope();

    if target.distance(envelope.center()) < envelope.width() / 2.0 {
        return DragOutcome {
            grab: Grab::Hovered,
            force: None,
            rotation: None,
        };
    }

    if previous.is_selected() && pointer.pressed {
        let pull = (target - body.position().to_glam()) * config.drag_stiffness;
        let force = Vector2::from(pull);
        return DragOutcome {
            grab: Grab::Dragged,
            force: Some(force),
            rotation: Some(force.angle() + FRAC_PI_2),
        };
    }

    released
}
