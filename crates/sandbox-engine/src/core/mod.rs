pub mod body;
pub mod boundary;
pub mod config;
pub mod forces;
pub mod integrator;
pub mod roster;
pub mod time;

pub use body::{Body, BodyDesc, StepReport};
pub use boundary::{ContactKind, Edge, WallContact};
pub use config::{DebugSettings, GravityPreset, SimConfig};
pub use forces::ForceAccumulator;
pub use roster::{BodyId, Roster};
pub use time::FixedTimestep;
