//! Viewport wall collisions.
//!
//! Each of the four edges is checked against the body's *current* state in
//! the fixed order of [`Edge::ORDER`]. Edges are not mutually exclusive: a
//! body in a corner is resolved by two edges in turn, and the second sees the
//! state the first left behind.

use crate::core::config::SimConfig;
use crate::core::integrator::{self, Axis};
use crate::math::Vector2;

/// One side of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Evaluation order. Reordering changes corner results.
    pub const ORDER: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Axis perpendicular to this wall.
    pub fn axis(self) -> Axis {
        match self {
            Edge::Left | Edge::Right => Axis::X,
            Edge::Top | Edge::Bottom => Axis::Y,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Edge::Left => "left",
            Edge::Right => "right",
            Edge::Top => "top",
            Edge::Bottom => "bottom",
        }
    }

    /// Centre coordinate at which the body just touches this wall.
    fn contact_coordinate(self, walls: &Walls) -> f64 {
        match self {
            Edge::Left | Edge::Bottom => walls.half_extent,
            Edge::Right => walls.width - walls.half_extent,
            Edge::Top => walls.height - walls.half_extent,
        }
    }

    fn overlaps(self, position: &Vector2, walls: &Walls) -> bool {
        let p = self.axis().of(position);
        let contact = self.contact_coordinate(walls);
        match self {
            Edge::Left | Edge::Bottom => p < contact,
            Edge::Right | Edge::Top => p > contact,
        }
    }
}

/// How a wall contact was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Perpendicular velocity reflected and damped by restitution.
    Bounce,
    /// Perpendicular velocity snapped to zero.
    Rest,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    pub edge: Edge,
    pub kind: ContactKind,
    /// Perpendicular velocity component before resolution.
    pub impact_velocity: f64,
}

/// Viewport extents and contact constants for one body's step.
#[derive(Debug, Clone, Copy)]
pub struct Walls {
    pub width: f64,
    pub height: f64,
    /// Effective half-size of the body, applied on both axes.
    pub half_extent: f64,
    pub restitution: f64,
    pub bounce_threshold: f64,
    pub tick_rate: f64,
    /// One display pixel in world units.
    pub pixel: f64,
}

impl Walls {
    pub fn new(config: &SimConfig, half_extent: f64) -> Self {
        Self {
            width: config.world_width(),
            height: config.world_height(),
            half_extent,
            restitution: config.restitution,
            bounce_threshold: config.bounce_threshold,
            tick_rate: config.tick_rate,
            pixel: config.pixel(),
        }
    }
}

/// Advance position and velocity by one tick, resolving wall contacts.
///
/// Returns the contacts in the order they were resolved. An empty result
/// means no edge fired and both axes moved freely.
pub fn resolve(
    position: &mut Vector2,
    velocity: &mut Vector2,
    acceleration: &Vector2,
    net_force: &Vector2,
    walls: &Walls,
) -> Vec<WallContact> {
    let mut contacts = Vec::new();
    for edge in Edge::ORDER {
        if edge.overlaps(position, walls) {
            contacts.push(resolve_edge(edge, position, velocity, acceleration, net_force, walls));
        }
    }
    if contacts.is_empty() {
        integrator::integrate_free(position, velocity, acceleration, walls.tick_rate);
    }
    contacts
}

fn resolve_edge(
    edge: Edge,
    position: &mut Vector2,
    velocity: &mut Vector2,
    acceleration: &Vector2,
    net_force: &Vector2,
    walls: &Walls,
) -> WallContact {
    let axis = edge.axis();
    let contact = edge.contact_coordinate(walls);
    let v = axis.of(velocity);

    let kind = if v.abs() >= walls.bounce_threshold {
        log::debug!("hit {} wall at {}m/s", edge.name(), v);
        let reflected = -v * walls.restitution + axis.of(acceleration) / walls.tick_rate;
        axis.set(velocity, reflected);
        axis.set(position, contact + reflected / walls.tick_rate);
        ContactKind::Bounce
    } else {
        axis.set(velocity, 0.0);
        // Follow the net force by one pixel: off the wall when pulled away,
        // into it when pressed against it.
        let nudge = if axis.of(net_force) > 0.0 { walls.pixel } else { -walls.pixel };
        axis.set(position, contact + nudge);
        ContactKind::Rest
    };

    integrator::integrate_axis(axis.other(), position, velocity, acceleration, walls.tick_rate);

    WallContact {
        edge,
        kind,
        impact_velocity: v,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn walls() -> Walls {
        Walls {
            width: 40.0,
            height: 40.0,
            half_extent: 0.5,
            restitution: 0.5,
            bounce_threshold: 0.5,
            tick_rate: 120.0,
            pixel: 1.0 / 27.0,
        }
    }

    #[test]
    fn free_motion_when_clear_of_walls() {
        let mut p = Vector2::from_cartesian(20.0, 20.0);
        let mut v = Vector2::from_cartesian(1.0, 0.0);
        let a = Vector2::from_cartesian(0.0, -9.81);
        let contacts = resolve(&mut p, &mut v, &a, &a, &walls());
        assert!(contacts.is_empty());
        assert_relative_eq!(v.y(), -9.81 / 120.0);
        assert_relative_eq!(p.x(), 20.0 + 1.0 / 120.0);
    }

    #[test]
    fn right_wall_bounce_reflects_x_and_integrates_y() {
        let mut p = Vector2::from_cartesian(39.8, 20.0);
        let mut v = Vector2::from_cartesian(4.0, 1.0);
        let a = Vector2::from_cartesian(0.0, -9.81);
        let contacts = resolve(&mut p, &mut v, &a, &a, &walls());

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].edge, Edge::Right);
        assert_eq!(contacts[0].kind, ContactKind::Bounce);
        assert_eq!(contacts[0].impact_velocity, 4.0);
        assert_relative_eq!(v.x(), -2.0);
        assert_relative_eq!(p.x(), 39.5 - 2.0 / 120.0);
        let vy = 1.0 - 9.81 / 120.0;
        assert_relative_eq!(v.y(), vy);
        assert_relative_eq!(p.y(), 20.0 + vy / 120.0);
    }

    #[test]
    fn resting_contact_follows_net_force() {
        let w = walls();

        let mut p = Vector2::from_cartesian(0.3, 20.0);
        let mut v = Vector2::from_cartesian(-0.2, 0.0);
        let pull = Vector2::from_cartesian(3.0, 0.0);
        let contacts = resolve(&mut p, &mut v, &pull, &pull, &w);
        assert_eq!(contacts[0].kind, ContactKind::Rest);
        assert_eq!(v.x(), 0.0);
        assert_relative_eq!(p.x(), 0.5 + w.pixel);

        let mut p = Vector2::from_cartesian(0.3, 20.0);
        let mut v = Vector2::from_cartesian(0.4, 0.0);
        let press = Vector2::from_cartesian(-3.0, 0.0);
        resolve(&mut p, &mut v, &press, &press, &w);
        assert_eq!(v.x(), 0.0);
        assert_relative_eq!(p.x(), 0.5 - w.pixel);
    }

    #[test]
    fn zero_net_force_presses_into_the_wall() {
        let w = walls();
        let mut p = Vector2::from_cartesian(0.2, 20.0);
        let mut v = Vector2::ZERO;
        resolve(&mut p, &mut v, &Vector2::ZERO, &Vector2::ZERO, &w);
        assert_relative_eq!(p.x(), 0.5 - w.pixel);
    }

    #[test]
    fn threshold_speed_bounces() {
        let mut p = Vector2::from_cartesian(20.0, 0.1);
        let mut v = Vector2::from_cartesian(0.0, -0.5);
        let contacts = resolve(&mut p, &mut v, &Vector2::ZERO, &Vector2::ZERO, &walls());
        assert_eq!(contacts[0].edge, Edge::Bottom);
        assert_eq!(contacts[0].kind, ContactKind::Bounce);
        assert_relative_eq!(v.y(), 0.25);
    }

    #[test]
    fn edge_order_is_left_right_top_bottom() {
        assert_eq!(Edge::ORDER, [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom]);
        assert_eq!(Edge::Top.axis(), Axis::Y);
        assert_eq!(Edge::Left.name(), "left");
    }
}
