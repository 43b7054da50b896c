/// The two states of a tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// Not yet scrolled into view (or reset); tracking listeners are active while mounted.
    #[default]
    Hidden,
    /// Scrolled into view; only the reset listener (if configured) remains.
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// A lightweight, serializable snapshot of a controller's visibility.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibilityState {
    pub has_been_scrolled_into_view: bool,
}

impl From<Visibility> for VisibilityState {
    fn from(v: Visibility) -> Self {
        Self {
            has_been_scrolled_into_view: v.is_visible(),
        }
    }
}
