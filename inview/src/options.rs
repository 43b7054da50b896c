use alloc::sync::Arc;

use crate::{EventName, Offset};

/// A callback fired after a visibility transition has been committed.
pub type TransitionCallback = Arc<dyn Fn() + Send + Sync>;

/// Configuration for [`crate::Controller`].
///
/// This type is designed to be cheap to clone: callbacks are stored in `Arc`s so adapters can
/// rebuild options every render without reallocating closures.
pub struct InViewOptions {
    /// Inward shrink applied to the viewport before intersection testing.
    pub offset: Offset,

    /// A window event that forces a recomputation while tracking (e.g. a custom app event fired
    /// after a layout change that does not scroll or resize).
    pub event_to_update: Option<EventName>,

    /// A window event that, once the element is visible, resets it to hidden and resumes
    /// tracking.
    pub event_to_reset: Option<EventName>,

    /// Invoked once per hidden → visible transition, after the new state is committed.
    pub on_render: Option<TransitionCallback>,

    /// Invoked once per visible → hidden transition, after the new state is committed.
    pub on_reset: Option<TransitionCallback>,
}

impl Default for InViewOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InViewOptions {
    fn clone(&self) -> Self {
        Self {
            offset: self.offset,
            event_to_update: self.event_to_update.clone(),
            event_to_reset: self.event_to_reset.clone(),
            on_render: self.on_render.clone(),
            on_reset: self.on_reset.clone(),
        }
    }
}

impl InViewOptions {
    pub fn new() -> Self {
        Self {
            offset: Offset::default(),
            event_to_update: None,
            event_to_reset: None,
            on_render: None,
            on_reset: None,
        }
    }

    /// Sets the offset; accepts a uniform `f64` or [`crate::SideOffsets`].
    pub fn with_offset(mut self, offset: impl Into<Offset>) -> Self {
        self.offset = offset.into();
        self
    }

    pub fn with_event_to_update(mut self, name: impl Into<Arc<str>>) -> Self {
        self.event_to_update = Some(EventName::Custom(name.into()));
        self
    }

    pub fn with_event_to_reset(mut self, name: impl Into<Arc<str>>) -> Self {
        self.event_to_reset = Some(EventName::Custom(name.into()));
        self
    }

    pub fn with_on_render(mut self, on_render: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_render = on_render.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_reset(mut self, on_reset: Option<impl Fn() + Send + Sync + 'static>) -> Self {
        self.on_reset = on_reset.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for InViewOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InViewOptions")
            .field("offset", &self.offset)
            .field("event_to_update", &self.event_to_update)
            .field("event_to_reset", &self.event_to_reset)
            .field("on_render", &self.on_render.is_some())
            .field("on_reset", &self.on_reset.is_some())
            .finish()
    }
}
