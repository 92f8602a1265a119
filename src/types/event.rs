/// A point in client (viewport) coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Pointer input delivered to the reorder controller.
///
/// Mouse and touch input are handled uniformly: both reduce to a single
/// client-space location.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// Mouse event with client coordinates
    Mouse { client_x: f64, client_y: f64 },
    /// Touch event with the currently active touch points
    Touch { touches: Vec<Point> },
}

impl PointerEvent {
    pub fn mouse(client_x: f64, client_y: f64) -> Self {
        Self::Mouse { client_x, client_y }
    }

    /// Single-finger touch at the given client position.
    pub fn touch(client_x: f64, client_y: f64) -> Self {
        Self::Touch {
            touches: vec![Point {
                x: client_x,
                y: client_y,
            }],
        }
    }

    /// Extract the pointer location.
    ///
    /// Touch events use the first active touch. A touch event without any
    /// active touches (e.g. `touchend`) has no location.
    pub fn location(&self) -> Option<Point> {
        match self {
            Self::Mouse { client_x, client_y } => Some(Point {
                x: *client_x,
                y: *client_y,
            }),
            Self::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Kinds of pointer notifications the controller listens for while dragging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Mouse or touch movement
    Move,
    /// Mouse button release or touch end
    End,
    /// Touch cancellation
    Cancel,
}
