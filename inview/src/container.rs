use crate::Host;

/// The scroll container an element is tracked against.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Container<E> {
    /// The global viewport. Used whenever the nearest scroller is the document's root scroller.
    Window,
    /// A scrollable ancestor element.
    Element(E),
}

/// Document rendering mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompatMode {
    /// Standards mode (`CSS1Compat`): the root element scrolls the viewport, and so does
    /// `<body>` through propagation.
    #[default]
    Standards,
    /// Quirks mode (`BackCompat`): `<body>` is the root scroller only if reported as the
    /// scrolling element.
    BackCompat,
}

/// The document elements that may stand for the root scroller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentRoots<E> {
    pub scrolling_element: Option<E>,
    pub document_element: Option<E>,
    pub body: Option<E>,
    pub compat_mode: CompatMode,
}

impl<E> Default for DocumentRoots<E> {
    fn default() -> Self {
        Self {
            scrolling_element: None,
            document_element: None,
            body: None,
            compat_mode: CompatMode::Standards,
        }
    }
}

impl<E: PartialEq> DocumentRoots<E> {
    /// Whether scrolling `element` scrolls the global viewport.
    pub fn is_root_scroller(&self, element: &E) -> bool {
        let is = |root: &Option<E>| root.as_ref() == Some(element);
        is(&self.scrolling_element)
            || is(&self.document_element)
            || (self.compat_mode == CompatMode::Standards && is(&self.body))
    }
}

/// Resolves the container `element` is tracked against.
///
/// Returns `None` if the element has no scrollable ancestor yet (not mounted). A root scroller is
/// normalized to [`Container::Window`], since scroll and resize events on the window are the
/// portable signal.
pub fn resolve_container<H: Host>(host: &H, element: &H::Element) -> Option<Container<H::Element>> {
    let parent = host.scroll_parent(element)?;
    if host.document_roots().is_root_scroller(&parent) {
        Some(Container::Window)
    } else {
        Some(Container::Element(parent))
    }
}
