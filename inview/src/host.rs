use alloc::sync::Arc;
use core::fmt;

use crate::{Bounds, DocumentRoots, Size};

/// Identity of a [`crate::Controller`] instance.
///
/// Ids are assigned by whoever creates the controller, usually the host that will route events
/// to it. Every subscription carries its owner id so a host that serves many controllers can
/// route a fired event back to the one that registered it. Ids only need to be unique per host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControllerId(u64);

impl ControllerId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Where a listener is registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventTarget<E> {
    /// The global viewport.
    Window,
    /// A scrollable ancestor element.
    Element(E),
}

/// The event a listener is registered for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    Scroll,
    Resize,
    /// An application-defined event name (see `event_to_update` / `event_to_reset`).
    Custom(Arc<str>),
}

impl EventName {
    pub fn custom(name: impl Into<Arc<str>>) -> Self {
        Self::Custom(name.into())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::Custom(name) => &**name,
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which controller handler a fired event must be delivered to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Schedules a coalesced recomputation.
    Update,
    /// Returns a visible element to the hidden/tracking state.
    Reset,
}

/// Registration flags forwarded to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ListenerOptions {
    /// The listener never cancels the event (scroll listeners are registered passive).
    pub passive: bool,
}

/// A single listener registration.
///
/// Subscriptions compare by value: the exact value handed to [`Host::add_listener`] is handed to
/// [`Host::remove_listener`] later, so hosts can match removals structurally.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subscription<E> {
    pub owner: ControllerId,
    pub target: EventTarget<E>,
    pub event: EventName,
    pub listener: Listener,
    pub options: ListenerOptions,
}

/// Capabilities a UI host provides to a [`crate::Controller`].
///
/// The controller holds no UI objects. Everything it needs to know about the element tree and
/// every side effect it performs goes through this trait:
/// - geometry: `window_size`, `bounding_rect`, `client_rect`
/// - tree queries: `scroll_parent`, `document_roots`
/// - listener registration: `add_listener` / `remove_listener`
/// - re-rendering: `visibility_changed`
///
/// When an event registered through `add_listener` fires, the host forwards
/// `subscription.listener` to [`crate::Controller::handle_event`] of the owning controller. On
/// each display refresh where [`crate::Controller::needs_frame`] is `true`, the host calls
/// [`crate::Controller::on_frame`].
pub trait Host {
    type Element: Clone + PartialEq;

    /// Current size of the global viewport (e.g. `innerWidth` x `innerHeight`).
    fn window_size(&self) -> Size;

    /// The element's border-box rectangle in viewport coordinates, or `None` if it cannot be
    /// measured (e.g. detached).
    fn bounding_rect(&self, element: &Self::Element) -> Option<Bounds>;

    /// The visible scrollport of a scroll container in viewport coordinates.
    ///
    /// Defaults to [`Host::bounding_rect`]; hosts that know border and scrollbar sizes should
    /// clip them here.
    fn client_rect(&self, element: &Self::Element) -> Option<Bounds> {
        self.bounding_rect(element)
    }

    /// The nearest scrollable ancestor of `element`.
    ///
    /// Returns `None` when the element has no ancestors yet. Like the DOM, hosts usually fall
    /// back to the document's root scroller when no ancestor scrolls.
    fn scroll_parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// The document's root elements, used to recognize the root scroller.
    fn document_roots(&self) -> DocumentRoots<Self::Element>;

    fn add_listener(&mut self, subscription: &Subscription<Self::Element>);

    fn remove_listener(&mut self, subscription: &Subscription<Self::Element>);

    /// Called after a controller commits a visibility change and before its `on_render` /
    /// `on_reset` callback runs. Hosts re-render the component here.
    fn visibility_changed(&mut self, owner: ControllerId, visible: bool) {
        let _ = (owner, visible);
    }
}
