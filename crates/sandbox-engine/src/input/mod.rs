pub mod pointer;
pub mod queue;

pub use pointer::{DragOutcome, Grab, PointerState};
pub use queue::{InputEvent, InputQueue};
