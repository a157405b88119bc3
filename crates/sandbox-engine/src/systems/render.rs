use crate::core::config::SimConfig;
use crate::core::roster::Entry;
use crate::input::pointer::Grab;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Rebuild the render buffer from the roster, one instance per body.
pub fn build_render_buffer<'a>(
    entries: impl Iterator<Item = &'a Entry>,
    config: &SimConfig,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();
    let scale = config.unit_scale;

    for entry in entries {
        let body = &entry.body;
        let center = config.world_to_pixel(body.position().to_glam());
        let envelope = body.bounding_envelope();

        buffer.push(RenderInstance {
            x: center.x as f32,
            y: center.y as f32,
            rotation: body.rotation() as f32,
            width: (body.size().x() * scale) as f32,
            height: (body.size().y() * scale) as f32,
            hitbox_width: (envelope.width() * scale) as f32,
            hitbox_height: (envelope.height() * scale) as f32,
            grab: grab_code(entry.grab),
        });
    }
}

fn grab_code(grab: Grab) -> f32 {
    match grab {
        Grab::Idle => 0.0,
        Grab::Hovered => 1.0,
        Grab::Dragged => 2.0,
    }
}
