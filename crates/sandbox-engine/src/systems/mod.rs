pub mod render;
#[cfg(feature = "debug-overlay")]
pub mod debug;
