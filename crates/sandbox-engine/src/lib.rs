pub mod api;
pub mod core;
pub mod error;
pub mod input;
pub mod math;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use crate::api::sandbox::Sandbox;
pub use crate::core::body::{Body, BodyDesc, StepReport};
pub use crate::core::boundary::{ContactKind, Edge, WallContact};
pub use crate::core::config::{DebugSettings, GravityPreset, SimConfig};
pub use crate::core::forces::ForceAccumulator;
pub use crate::core::roster::{BodyId, Entry, Roster};
pub use crate::core::time::FixedTimestep;
pub use crate::error::SandboxError;
pub use crate::input::pointer::{DragOutcome, Grab, PointerState};
pub use crate::input::queue::{InputEvent, InputQueue};
pub use crate::math::{PixelRect, Rect, Vector2};
pub use crate::renderer::instance::{RenderBuffer, RenderInstance};
pub use crate::systems::render::build_render_buffer;

#[cfg(feature = "debug-overlay")]
pub use crate::systems::debug::{build_debug_overlay, DebugKind, DebugLabel, DebugLine, DebugOverlay};
