/// An axis-aligned rectangle in viewport-relative pixel coordinates.
///
/// `top <= bottom` and `left <= right` are expected but not enforced: malformed bounds simply make
/// [`crate::is_in_viewport`] return `false` (or `true`) depending on which term dominates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Bounds {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Returns these bounds moved by `(dx, dy)`.
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.top + dy,
            self.right + dx,
            self.bottom + dy,
            self.left + dx,
        )
    }

    /// Shrinks the rectangle inward by `inset` (negative sides grow it).
    pub fn inset(&self, inset: &Bounds) -> Self {
        Self::new(
            self.top + inset.top,
            self.right - inset.right,
            self.bottom - inset.bottom,
            self.left + inset.left,
        )
    }
}

/// Window (global viewport) dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Per-side offsets; an absent side counts as `0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideOffsets {
    pub top: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
}

impl SideOffsets {
    pub fn with_top(mut self, top: f64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_right(mut self, right: f64) -> Self {
        self.right = Some(right);
        self
    }

    pub fn with_bottom(mut self, bottom: f64) -> Self {
        self.bottom = Some(bottom);
        self
    }

    pub fn with_left(mut self, left: f64) -> Self {
        self.left = Some(left);
        self
    }
}

/// Inward shrink applied to the viewport before intersection testing.
///
/// A positive offset means the element has to be further inside the viewport before it counts as
/// visible; a negative offset triggers early (e.g. to preload just below the fold).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Offset {
    /// The same offset on all four sides.
    Uniform(f64),
    /// Independent offsets per side.
    Sides(SideOffsets),
}

impl Default for Offset {
    fn default() -> Self {
        Self::Uniform(0.0)
    }
}

impl From<f64> for Offset {
    fn from(v: f64) -> Self {
        Self::Uniform(v)
    }
}

impl From<SideOffsets> for Offset {
    fn from(sides: SideOffsets) -> Self {
        Self::Sides(sides)
    }
}

/// A state change committed by [`crate::Controller`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Hidden → visible; `on_render` has been invoked.
    Rendered,
    /// Visible → hidden; `on_reset` has been invoked.
    Reset,
}
