use crate::core::body::Body;
use crate::input::pointer::Grab;

/// Unique identifier for a body in the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// A body plus the driver-side state that travels with it.
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: BodyId,
    pub body: Body,
    pub grab: Grab,
}

/// Fixed roster of bodies stored in a flat Vec, in insertion order.
/// Bodies are added during setup and never removed while the sandbox runs.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    entries: Vec<Entry>,
    next_id: u32,
}

impl Roster {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(8),
            next_id: 1,
        }
    }

    /// Add a body and return its id.
    pub fn insert(&mut self, body: Body) -> BodyId {
        let id = BodyId(self.next_id.max(1));
        self.next_id = id.0 + 1;
        self.entries.push(Entry {
            id,
            body,
            grab: Grab::Idle,
        });
        id
    }

    pub fn get(&self, id: BodyId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::body::BodyDesc;

    fn body(x: f64) -> Body {
        Body::new(BodyDesc::rect(1.0, 1.0, 1.0).with_position(x, 5.0)).unwrap()
    }

    #[test]
    fn insert_assigns_sequential_ids() {
        let mut roster = Roster::new();
        let a = roster.insert(body(1.0));
        let b = roster.insert(body(2.0));
        assert_eq!(a, BodyId(1));
        assert_eq!(b, BodyId(2));
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.get(b).unwrap().body.position().x(), 2.0);
        assert_eq!(roster.get(a).unwrap().grab, Grab::Idle);
    }

    #[test]
    fn default_roster_also_starts_at_one() {
        let mut roster = Roster::default();
        assert_eq!(roster.insert(body(1.0)), BodyId(1));
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let mut roster = Roster::new();
        roster.insert(body(3.0));
        roster.insert(body(1.0));
        let xs: Vec<f64> = roster.iter().map(|e| e.body.position().x()).collect();
        assert_eq!(xs, vec![3.0, 1.0]);
        assert!(roster.get(BodyId(9)).is_none());
    }
}
