/// Platform-neutral integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Minimum selection size (in pixels) on both axes.
///
/// Anything smaller is rejected before a bitmap is requested.
pub const MIN_SELECTION_SIZE: i32 = 10;

impl RectI32 {
    #[inline]
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Construct a normalized rectangle from two points.
    #[inline]
    pub fn from_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            left: x1.min(x2),
            top: y1.min(y2),
            right: x1.max(x2),
            bottom: y1.max(y2),
        }
    }

    /// True if both width and height are at least `min_size`.
    #[inline]
    pub fn is_valid_min_size(&self, min_size: i32) -> bool {
        self.width() >= min_size && self.height() >= min_size
    }

    /// Size label shown next to the pointer while dragging.
    pub fn size_label(&self) -> String {
        format!("{} x {}", self.width(), self.height())
    }
}

/// Validate a selection rectangle against a minimum size.
#[inline]
pub fn validate_min_size(rect: RectI32, min_size: i32) -> Option<RectI32> {
    if rect.is_valid_min_size(min_size) {
        Some(rect)
    } else {
        None
    }
}

/// Selection phase.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Overlay is active; `selection` is the in-progress drag rectangle, if any.
    Selecting { selection: Option<RectI32> },
}

/// Input actions (pure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Overlay opened; start accepting pointer input.
    Begin,
    /// Primary button pressed at the given screen position.
    PointerDown { x: i32, y: i32 },
    /// Pointer moved while the overlay is active.
    PointerMove { x: i32, y: i32 },
    /// Primary button released.
    PointerUp { x: i32, y: i32 },
    /// Explicit cancel (e.g. ESC).
    Cancel,
}

/// Effects requested by the selection model (executed by the host).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Redraw the drag rectangle and its size label.
    UpdateFeedback { selection: RectI32 },
    /// Drag finished with a rectangle that satisfies the minimum size.
    Confirmed { selection: RectI32 },
    /// Drag finished with a rectangle below the minimum size.
    Rejected { selection: RectI32 },
    /// Selection aborted by the user.
    Cancelled,
}

/// Selection state machine model.
#[derive(Debug, Default)]
pub struct Model {
    phase: Phase,
    anchor: Option<(i32, i32)>,
}

impl Model {
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.phase, Phase::Selecting { .. })
    }

    /// In-progress drag rectangle, if any.
    pub fn visible_selection(&self) -> Option<RectI32> {
        match &self.phase {
            Phase::Idle => None,
            Phase::Selecting { selection } => *selection,
        }
    }

    pub fn reduce(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Begin => {
                if let Phase::Idle = self.phase {
                    self.phase = Phase::Selecting { selection: None };
                    self.anchor = None;
                }
                Vec::new()
            }

            Action::PointerDown { x, y } => {
                if let Phase::Selecting { selection } = &mut self.phase {
                    // A new press starts a new rectangle.
                    *selection = None;
                    self.anchor = Some((x, y));
                }
                Vec::new()
            }

            Action::PointerMove { x, y } => {
                let (Phase::Selecting { selection }, Some((sx, sy))) = (&mut self.phase, self.anchor)
                else {
                    return Vec::new();
                };

                let rect = RectI32::from_points(sx, sy, x, y);
                *selection = Some(rect);
                vec![Effect::UpdateFeedback { selection: rect }]
            }

            Action::PointerUp { x, y } => {
                if !self.is_selecting() {
                    self.anchor = None;
                    return Vec::new();
                }

                // Release without a press degenerates to an empty rectangle.
                let (sx, sy) = self.anchor.take().unwrap_or((x, y));
                let rect = RectI32::from_points(sx, sy, x, y);
                self.phase = Phase::Idle;

                match validate_min_size(rect, MIN_SELECTION_SIZE) {
                    Some(selection) => vec![Effect::Confirmed { selection }],
                    None => vec![Effect::Rejected { selection: rect }],
                }
            }

            Action::Cancel => {
                if !self.is_selecting() {
                    return Vec::new();
                }
                self.phase = Phase::Idle;
                self.anchor = None;
                vec![Effect::Cancelled]
            }
        }
    }
}
