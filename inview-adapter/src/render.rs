use alloc::sync::Arc;
use core::fmt;

/// Renders the child for the current visibility (`true` once scrolled into view).
pub type RenderFn<N> = Arc<dyn Fn(bool) -> N + Send + Sync>;

/// What a lazily rendered component shows in each state.
///
/// `N` is the host framework's node type (a view description, widget, string, ...).
pub struct RenderSlots<N> {
    /// Shown while hidden.
    pub placeholder: Option<N>,
    /// Shown once visible.
    pub content: Option<N>,
    /// Fallback for whichever state has no dedicated slot.
    pub render: Option<RenderFn<N>>,
}

impl<N> Default for RenderSlots<N> {
    fn default() -> Self {
        Self {
            placeholder: None,
            content: None,
            render: None,
        }
    }
}

impl<N: Clone> Clone for RenderSlots<N> {
    fn clone(&self) -> Self {
        Self {
            placeholder: self.placeholder.clone(),
            content: self.content.clone(),
            render: self.render.clone(),
        }
    }
}

impl<N> RenderSlots<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder(mut self, placeholder: N) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_content(mut self, content: N) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_render(mut self, render: impl Fn(bool) -> N + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }
}

impl<N: Clone> RenderSlots<N> {
    /// Picks the child to render.
    ///
    /// The slot for the current state wins (placeholder while hidden, content while visible);
    /// otherwise `render(visible)` is called; otherwise nothing is rendered.
    pub fn select(&self, visible: bool) -> Option<N> {
        let slot = if visible {
            &self.content
        } else {
            &self.placeholder
        };
        if let Some(node) = slot {
            return Some(node.clone());
        }
        self.render.as_ref().map(|render| render(visible))
    }
}

impl<N: fmt::Debug> fmt::Debug for RenderSlots<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderSlots")
            .field("placeholder", &self.placeholder)
            .field("content", &self.content)
            .field("render", &self.render.is_some())
            .finish()
    }
}
