/// Pointer events the sandbox understands.
/// Coordinates are viewport pixels with the origin at the top-left (Y-down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The primary button went down at (x, y).
    PointerDown { x: f64, y: f64 },
    /// The primary button was released at (x, y).
    PointerUp { x: f64, y: f64 },
    /// The pointer moved to (x, y).
    PointerMove { x: f64, y: f64 },
    /// The pointer left the viewport.
    PointerLeave,
}

/// Pointer events waiting for the next frame, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: Vec<InputEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push(event);
    }

    /// Hand over everything queued so far, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_returns_events_in_arrival_order_once() {
        let mut queue = InputQueue::default();
        queue.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        queue.push(InputEvent::PointerMove { x: 12.0, y: 20.0 });
        queue.push(InputEvent::PointerLeave);

        assert_eq!(
            queue.drain(),
            vec![
                InputEvent::PointerDown { x: 10.0, y: 20.0 },
                InputEvent::PointerMove { x: 12.0, y: 20.0 },
                InputEvent::PointerLeave,
            ]
        );
        assert!(queue.drain().is_empty());
    }
}
