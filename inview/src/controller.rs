use alloc::vec::Vec;

use crate::frame::PendingFrame;
use crate::listeners::ListenerSet;
use crate::{
    Container, ControllerId, EventName, EventTarget, Host, InViewOptions, Listener,
    ListenerOptions, Subscription, Transition, Visibility, VisibilityState, element_bounds,
    is_in_viewport, offset_bounds, resolve_container, viewport_bounds,
};

/// Where a controller is in its host component's lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, not mounted yet. An element may already be attached.
    #[default]
    Idle,
    /// Mounted: listening and recomputing according to its visibility.
    Mounted,
    /// Unmounted. Terminal: every further call is a no-op.
    Unmounted,
}

/// A headless "render once scrolled into view" controller.
///
/// This type is intentionally UI-agnostic:
/// - It does not hold any UI objects; the element handle `E` is opaque.
/// - Your host binding drives it: lifecycle (`on_mount` / `attach` / `on_unmount`), fired events
///   (`handle_event`) and display refreshes (`on_frame`).
/// - Geometry, tree queries, listener registration and re-rendering go through [`Host`].
///
/// While hidden and mounted, the controller listens for scroll on its container, resize on the
/// window and the optional update event. Every trigger only schedules work; the next `on_frame`
/// runs a single recomputation with fresh geometry. Once the element intersects the (offset)
/// viewport, tracking listeners are dropped, the optional reset listener is registered, and
/// `on_render` fires.
#[derive(Debug)]
pub struct Controller<E> {
    id: ControllerId,
    options: InViewOptions,
    element: Option<E>,
    container: Option<Container<E>>,
    visibility: Visibility,
    lifecycle: Lifecycle,
    pending: PendingFrame,
    listeners: ListenerSet<E>,
    recomputations: u64,
}

impl<E: Clone + PartialEq> Controller<E> {
    /// Creates an idle controller. `id` must be unique among the controllers served by one host.
    pub fn new(id: ControllerId, options: InViewOptions) -> Self {
        idebug!(id = id.get(), "Controller::new");
        Self {
            id,
            options,
            element: None,
            container: None,
            visibility: Visibility::Hidden,
            lifecycle: Lifecycle::Idle,
            pending: PendingFrame::default(),
            listeners: ListenerSet::new(),
            recomputations: 0,
        }
    }

    pub fn id(&self) -> ControllerId {
        self.id
    }

    pub fn options(&self) -> &InViewOptions {
        &self.options
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    /// Returns a lightweight snapshot of the current visibility.
    pub fn visibility_state(&self) -> VisibilityState {
        self.visibility.into()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn element(&self) -> Option<&E> {
        self.element.as_ref()
    }

    pub fn container(&self) -> Option<&Container<E>> {
        self.container.as_ref()
    }

    /// The listener registrations currently held on the host.
    pub fn subscriptions(&self) -> impl Iterator<Item = &Subscription<E>> {
        self.listeners.iter()
    }

    pub fn subscription_count(&self) -> usize {
        self.listeners.len()
    }

    /// Whether a recomputation is pending; hosts request a display-refresh callback when `true`.
    pub fn needs_frame(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted && self.pending.is_pending()
    }

    /// Number of recomputations run so far.
    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Replaces the options.
    ///
    /// While mounted, listeners are re-synced so a changed update/reset event name takes effect
    /// immediately; while hidden, a recomputation is scheduled to apply a changed offset.
    pub fn set_options<H: Host<Element = E>>(&mut self, host: &mut H, options: InViewOptions) {
        self.options = options;
        if self.lifecycle != Lifecycle::Mounted {
            return;
        }
        self.sync_listeners(host);
        if !self.is_visible() {
            self.schedule_update();
        }
    }

    /// Attaches (or detaches, with `None`) the rendered element and resolves its container.
    ///
    /// This is the host's "element ref" hook and may be called again whenever the element
    /// changes. While tracking, the container scroll listener follows the new container.
    pub fn attach<H: Host<Element = E>>(&mut self, host: &mut H, element: Option<E>) {
        if self.lifecycle == Lifecycle::Unmounted {
            iwarn!(id = self.id.get(), "attach after unmount ignored");
            return;
        }
        self.container = element
            .as_ref()
            .and_then(|element| resolve_container(host, element));
        self.element = element;
        itrace!(
            id = self.id.get(),
            has_element = self.element.is_some(),
            container = ?self.container.as_ref().map(|c| matches!(c, Container::Window)),
            "attach"
        );
        if self.lifecycle == Lifecycle::Mounted {
            self.sync_listeners(host);
            if !self.is_visible() {
                self.schedule_update();
            }
        }
    }

    /// Mounts the controller: attaches `element`, schedules one recomputation and begins
    /// listening.
    pub fn on_mount<H: Host<Element = E>>(&mut self, host: &mut H, element: Option<E>) {
        if self.lifecycle != Lifecycle::Idle {
            iwarn!(id = self.id.get(), lifecycle = ?self.lifecycle, "on_mount ignored");
            return;
        }
        self.attach(host, element);
        self.lifecycle = Lifecycle::Mounted;
        idebug!(id = self.id.get(), "mount");
        self.schedule_update();
        self.start_listening(host);
    }

    /// Unmounts the controller: removes every listener and cancels the pending recomputation.
    pub fn on_unmount<H: Host<Element = E>>(&mut self, host: &mut H) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        idebug!(
            id = self.id.get(),
            subscriptions = self.listeners.len(),
            pending = self.pending.is_pending(),
            "unmount"
        );
        self.listeners.clear(host);
        self.pending.take();
        self.lifecycle = Lifecycle::Unmounted;
    }

    /// Delivers an event registered through [`Host::add_listener`].
    pub fn handle_event<H: Host<Element = E>>(
        &mut self,
        host: &mut H,
        listener: Listener,
    ) -> Option<Transition> {
        if self.lifecycle != Lifecycle::Mounted {
            return None;
        }
        match listener {
            Listener::Update => {
                self.request_update();
                None
            }
            Listener::Reset => self.reset(host),
        }
    }

    /// Requests a coalesced recomputation on the next frame.
    ///
    /// Ignored unless the controller is mounted and hidden.
    pub fn request_update(&mut self) {
        if self.lifecycle != Lifecycle::Mounted || self.is_visible() {
            itrace!(id = self.id.get(), "request_update ignored");
            return;
        }
        self.schedule_update();
    }

    /// Runs the pending recomputation, if any. Call this once per display refresh.
    pub fn on_frame<H: Host<Element = E>>(&mut self, host: &mut H) -> Option<Transition> {
        if self.lifecycle != Lifecycle::Mounted {
            return None;
        }
        if !self.pending.take() {
            return None;
        }
        itrace!(id = self.id.get(), "on_frame");
        self.recompute(host)
    }

    fn schedule_update(&mut self) {
        itrace!(
            id = self.id.get(),
            replaced = self.pending.is_pending(),
            "schedule_update"
        );
        self.pending.schedule();
    }

    fn recompute<H: Host<Element = E>>(&mut self, host: &mut H) -> Option<Transition> {
        debug_assert_eq!(self.lifecycle, Lifecycle::Mounted);
        self.recomputations = self.recomputations.saturating_add(1);
        if self.is_visible() {
            return None;
        }

        let element = element_bounds(host, self.element.as_ref())?;
        let viewport = viewport_bounds(host, self.container.as_ref())?;
        let offset = offset_bounds(&self.options.offset);

        if !is_in_viewport(&element, &viewport, Some(&offset)) {
            itrace!(
                id = self.id.get(),
                element = ?element,
                viewport = ?viewport,
                "recompute: not in view"
            );
            return None;
        }
        Some(self.render(host))
    }

    fn render<H: Host<Element = E>>(&mut self, host: &mut H) -> Transition {
        self.stop_listening(host);
        if let Some(sub) = self.reset_subscription() {
            self.listeners.add(host, sub);
        }

        self.visibility = Visibility::Visible;
        idebug!(id = self.id.get(), "hidden -> visible");
        host.visibility_changed(self.id, true);
        if let Some(on_render) = &self.options.on_render {
            on_render();
        }
        Transition::Rendered
    }

    fn reset<H: Host<Element = E>>(&mut self, host: &mut H) -> Option<Transition> {
        if !self.is_visible() {
            itrace!(id = self.id.get(), "reset while hidden ignored");
            return None;
        }
        if !self.listeners.iter().any(|sub| sub.listener == Listener::Reset) {
            iwarn!(id = self.id.get(), "reset without a reset subscription ignored");
            return None;
        }
        self.listeners.remove(host, |sub| sub.listener == Listener::Reset);

        self.visibility = Visibility::Hidden;
        idebug!(id = self.id.get(), "visible -> hidden");
        host.visibility_changed(self.id, false);
        if let Some(on_reset) = &self.options.on_reset {
            on_reset();
        }

        self.start_listening(host);
        self.schedule_update();
        Some(Transition::Reset)
    }

    fn start_listening<H: Host<Element = E>>(&mut self, host: &mut H) {
        for sub in self.tracking_subscriptions() {
            self.listeners.add(host, sub);
        }
    }

    fn stop_listening<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.listeners.clear(host);
    }

    /// Brings the host registrations in line with the current lifecycle, visibility, container
    /// and options.
    fn sync_listeners<H: Host<Element = E>>(&mut self, host: &mut H) {
        let desired: Vec<Subscription<E>> = match (self.lifecycle, self.visibility) {
            (Lifecycle::Mounted, Visibility::Hidden) => self.tracking_subscriptions(),
            (Lifecycle::Mounted, Visibility::Visible) => {
                self.reset_subscription().into_iter().collect()
            }
            _ => Vec::new(),
        };
        self.listeners.remove(host, |sub| !desired.contains(sub));
        for sub in desired {
            self.listeners.add(host, sub);
        }
    }

    fn subscription(
        &self,
        target: EventTarget<E>,
        event: EventName,
        listener: Listener,
    ) -> Subscription<E> {
        Subscription {
            owner: self.id,
            target,
            event,
            listener,
            options: ListenerOptions::default(),
        }
    }

    fn tracking_subscriptions(&self) -> Vec<Subscription<E>> {
        let mut subs = Vec::with_capacity(3);
        if let Some(container) = &self.container {
            let target = match container {
                Container::Window => EventTarget::Window,
                Container::Element(el) => EventTarget::Element(el.clone()),
            };
            let mut scroll = self.subscription(target, EventName::Scroll, Listener::Update);
            scroll.options.passive = true;
            subs.push(scroll);
        }
        subs.push(self.subscription(EventTarget::Window, EventName::Resize, Listener::Update));
        if let Some(event) = &self.options.event_to_update {
            subs.push(self.subscription(EventTarget::Window, event.clone(), Listener::Update));
        }
        subs
    }

    fn reset_subscription(&self) -> Option<Subscription<E>> {
        let event = self.options.event_to_reset.clone()?;
        Some(self.subscription(EventTarget::Window, event, Listener::Reset))
    }
}
