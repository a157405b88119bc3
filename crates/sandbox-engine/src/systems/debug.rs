//! Debug overlay: opt-in hitbox, force and kinematics visualisation.
//!
//! Produces polylines and text labels in viewport pixels. Drawing them is up
//! to the host; the sandbox only decides what to show.

use glam::DVec2;

use crate::core::body::StepReport;
use crate::core::config::{DebugSettings, SimConfig};
use crate::core::roster::Entry;
use crate::math::Vector2;

/// What a debug line depicts, so hosts can colour it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugKind {
    Hitbox,
    Force,
    NetForce,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebugLine {
    pub kind: DebugKind,
    pub points: Vec<[f32; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DebugLabel {
    pub anchor: [f32; 2],
    pub text: String,
}

/// Lines and labels for one frame.
#[derive(Debug, Clone, Default)]
pub struct DebugOverlay {
    pub lines: Vec<DebugLine>,
    pub labels: Vec<DebugLabel>,
}

impl DebugOverlay {
    pub fn clear(&mut self) {
        self.lines.clear();
        self.labels.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.labels.is_empty()
    }
}

/// Rebuild the overlay from each body and the report of its latest step.
///
/// `reports` pairs with `entries` by position. Before the first tick there
/// are no reports, so the acceleration row and net-force arrow are skipped.
pub fn build_debug_overlay<'a>(
    entries: impl Iterator<Item = &'a Entry>,
    reports: &[StepReport],
    config: &SimConfig,
    overlay: &mut DebugOverlay,
) {
    overlay.clear();
    let DebugSettings {
        draw_hitboxes,
        draw_velocity,
        draw_forces,
    } = config.debug;
    let line_height = 20.0;

    for (index, entry) in entries.enumerate() {
        let body = &entry.body;
        let report = reports.get(index);
        let hitbox = body
            .bounding_envelope()
            .to_pixels(config.unit_scale, config.viewport_height_px);
        let center = hitbox.center();

        if draw_hitboxes {
            overlay.lines.push(DebugLine {
                kind: DebugKind::Hitbox,
                points: hitbox.outline().into_iter().map(|[x, y]| [x as f32, y as f32]).collect(),
            });
        }

        if draw_velocity {
            let position = body.position();
            let velocity = body.velocity();
            let mut rows = vec![
                format!("x={} y={}", position.x(), position.y()),
                format!("Vx={} Vy={}", velocity.x(), velocity.y()),
            ];
            if let Some(report) = report {
                rows.push(format!("Ax={} Ay={}", report.acceleration.x(), report.acceleration.y()));
            }
            for (row, text) in rows.into_iter().enumerate() {
                overlay.labels.push(DebugLabel {
                    anchor: to_f32(center + DVec2::new(0.0, line_height * row as f64)),
                    text,
                });
            }
        }

        if draw_forces {
            for force in body.forces().iter() {
                push_arrow(overlay, DebugKind::Force, center, force, "F", config);
            }
            if let Some(report) = report {
                push_arrow(overlay, DebugKind::NetForce, center, &report.net_force, "Fnet", config);
            }
        }
    }
}

/// Arrow from `origin`, `unit_scale` pixels per newton, labelled at its tip.
fn push_arrow(
    overlay: &mut DebugOverlay,
    kind: DebugKind,
    origin: DVec2,
    force: &Vector2,
    prefix: &str,
    config: &SimConfig,
) {
    let tip = Vector2::from_polar(config.unit_scale * force.magnitude(), force.angle());
    let end = origin + DVec2::new(tip.x(), -tip.y());
    overlay.lines.push(DebugLine {
        kind,
        points: vec![to_f32(origin), to_f32(end)],
    });
    overlay.labels.push(DebugLabel {
        anchor: to_f32(end),
        text: format!("{}={}N", prefix, force.magnitude()),
    });
}

fn to_f32(p: DVec2) -> [f32; 2] {
    [p.x as f32, p.y as f32]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::{Body, BodyDesc};
    use crate::core::roster::Roster;

    fn roster_with_gravity(config: &SimConfig) -> (Roster, Vec<StepReport>) {
        let mut roster = Roster::new();
        let id = roster.insert(Body::new(BodyDesc::rect(1.0, 1.0, 1.0).with_position(20.0, 20.0)).unwrap());
        let entry = roster.get_mut(id).unwrap();
        entry.body.apply_force(config.gravity_vector());
        let report = entry.body.step(config).unwrap();
        (roster, vec![report])
    }

    #[test]
    fn full_overlay_has_hitbox_force_and_net_force() {
        let config = SimConfig::default();
        let (roster, reports) = roster_with_gravity(&config);
        let mut overlay = DebugOverlay::default();
        build_debug_overlay(roster.iter(), &reports, &config, &mut overlay);

        let kinds: Vec<DebugKind> = overlay.lines.iter().map(|l| l.kind).collect();
        assert_eq!(kinds, vec![DebugKind::Hitbox, DebugKind::Force, DebugKind::NetForce]);
        assert_eq!(overlay.lines[0].points.len(), 5);
        // 3 kinematics rows + 2 force labels
        assert_eq!(overlay.labels.len(), 5);
        assert!(overlay.labels.iter().any(|l| l.text == "Fnet=9.81N"));
    }

    #[test]
    fn force_arrow_points_down_on_screen() {
        let config = SimConfig::default();
        let (roster, reports) = roster_with_gravity(&config);
        let mut overlay = DebugOverlay::default();
        build_debug_overlay(roster.iter(), &reports, &config, &mut overlay);

        let arrow = &overlay.lines[1].points;
        assert!(arrow[1][1] > arrow[0][1], "gravity arrow should grow downward in pixels");
        let length = arrow[1][1] - arrow[0][1];
        assert!((length - 27.0 * 9.81).abs() < 1e-2);
    }

    #[test]
    fn readouts_and_arrows_start_at_hitbox_center() {
        let config = SimConfig::default();
        let (roster, reports) = roster_with_gravity(&config);
        let mut overlay = DebugOverlay::default();
        build_debug_overlay(roster.iter(), &reports, &config, &mut overlay);

        let outline = &overlay.lines[0].points;
        let mid = [(outline[0][0] + outline[2][0]) / 2.0, (outline[0][1] + outline[2][1]) / 2.0];
        let anchor = overlay.labels[0].anchor;
        assert!((anchor[0] - mid[0]).abs() < 1e-3 && (anchor[1] - mid[1]).abs() < 1e-3);
        let arrow_start = overlay.lines[1].points[0];
        assert!((arrow_start[0] - mid[0]).abs() < 1e-3 && (arrow_start[1] - mid[1]).abs() < 1e-3);
    }

    #[test]
    fn disabled_layers_produce_nothing() {
        let mut config = SimConfig::default();
        config.debug = DebugSettings {
            draw_hitboxes: false,
            draw_velocity: false,
            draw_forces: false,
        };
        let (roster, reports) = roster_with_gravity(&config);
        let mut overlay = DebugOverlay::default();
        build_debug_overlay(roster.iter(), &reports, &config, &mut overlay);
        assert!(overlay.is_empty());
    }
}
