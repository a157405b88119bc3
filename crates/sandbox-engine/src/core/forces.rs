use crate::math::Vector2;

/// Forces applied to one body during the current tick.
///
/// Append-only within a tick; the driver clears it wholesale before
/// repopulating it for the next one.
#[derive(Debug, Clone, Default)]
pub struct ForceAccumulator {
    forces: Vec<Vector2>,
}

impl ForceAccumulator {
    pub fn new() -> Self {
        Self {
            forces: Vec::with_capacity(4),
        }
    }

    pub fn clear(&mut self) {
        self.forces.clear();
    }

    pub fn apply(&mut self, force: Vector2) {
        self.forces.push(force);
    }

    /// Sum of every applied force, added in application order.
    pub fn net(&self) -> Vector2 {
        self.forces.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2> {
        self.forces.iter()
    }

    pub fn len(&self) -> usize {
        self.forces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forces.is_empty()
    }
}
