use alloc::borrow::Cow;
use alloc::string::String;

use inview::{Controller, ControllerId, Host, InViewOptions, Listener, Transition};

use crate::RenderSlots;

/// The element a [`LazyRender`] wraps its child in. The controller tracks this element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wrapper {
    /// Element or component name; `"div"` by default.
    pub tag: Cow<'static, str>,
    pub class_name: Option<String>,
}

impl Default for Wrapper {
    fn default() -> Self {
        Self {
            tag: Cow::Borrowed("div"),
            class_name: None,
        }
    }
}

impl Wrapper {
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            class_name: None,
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

/// A render description produced by [`LazyRender::render`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered<'a, N> {
    pub tag: &'a str,
    pub class_name: Option<&'a str>,
    pub child: Option<N>,
}

/// A framework-neutral "render when scrolled into view" component.
///
/// This bundles a [`Controller`] with its wrapper element description and render slots. A
/// framework binding forwards its lifecycle to `on_mount` / `on_unmount`, its event and frame
/// callbacks to `handle_event` / `on_frame`, and calls `render` whenever the host reports a
/// visibility change.
#[derive(Debug)]
pub struct LazyRender<E, N> {
    wrapper: Wrapper,
    slots: RenderSlots<N>,
    controller: Controller<E>,
}

impl<E: Clone + PartialEq, N: Clone> LazyRender<E, N> {
    pub fn new(id: ControllerId, options: InViewOptions, slots: RenderSlots<N>) -> Self {
        Self {
            wrapper: Wrapper::default(),
            slots,
            controller: Controller::new(id, options),
        }
    }

    pub fn with_wrapper(mut self, wrapper: Wrapper) -> Self {
        self.wrapper = wrapper;
        self
    }

    pub fn wrapper(&self) -> &Wrapper {
        &self.wrapper
    }

    pub fn slots(&self) -> &RenderSlots<N> {
        &self.slots
    }

    pub fn set_slots(&mut self, slots: RenderSlots<N>) {
        self.slots = slots;
    }

    pub fn controller(&self) -> &Controller<E> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller<E> {
        &mut self.controller
    }

    pub fn is_visible(&self) -> bool {
        self.controller.is_visible()
    }

    pub fn on_mount<H: Host<Element = E>>(&mut self, host: &mut H, element: Option<E>) {
        self.controller.on_mount(host, element);
    }

    pub fn on_unmount<H: Host<Element = E>>(&mut self, host: &mut H) {
        self.controller.on_unmount(host);
    }

    pub fn handle_event<H: Host<Element = E>>(
        &mut self,
        host: &mut H,
        listener: Listener,
    ) -> Option<Transition> {
        self.controller.handle_event(host, listener)
    }

    pub fn on_frame<H: Host<Element = E>>(&mut self, host: &mut H) -> Option<Transition> {
        self.controller.on_frame(host)
    }

    pub fn render(&self) -> Rendered<'_, N> {
        Rendered {
            tag: &self.wrapper.tag,
            class_name: self.wrapper.class_name.as_deref(),
            child: self.slots.select(self.controller.is_visible()),
        }
    }
}
