use alloc::vec::Vec;

use inview::{
    Bounds, CompatMode, Controller, ControllerId, DocumentRoots, EventName, EventTarget, Host,
    Listener, Size, Subscription, Transition,
};

/// Handle of a node in a [`SimHost`] tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Border box relative to the parent's content origin.
    rect: Bounds,
    /// `overflow: auto | scroll`.
    scrollable: bool,
    scroll_x: f64,
    scroll_y: f64,
}

/// An in-memory host: a tree of boxes, a window, and a listener registry.
///
/// Useful for tests, demos, and hosts that lay out boxes themselves (TUI-style). The tree
/// always has a root `html` node with a `body` child. The window scroll is the root's scroll
/// offset (or `body`'s in quirks mode, where `body` is the scrolling element).
///
/// `SimHost` does not own controllers: [`SimHost::dispatch`] and [`SimHost::frame`] take the
/// controllers to route to.
#[derive(Clone, Debug)]
pub struct SimHost {
    nodes: Vec<Node>,
    window: Size,
    compat_mode: CompatMode,
    listeners: Vec<Subscription<NodeId>>,
    visibility_changes: Vec<(ControllerId, bool)>,
    next_id: u64,
}

const HTML: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl SimHost {
    pub fn new(window: Size) -> Self {
        let root = |parent| Node {
            parent,
            children: Vec::new(),
            rect: Bounds::new(0.0, window.width, window.height, 0.0),
            scrollable: false,
            scroll_x: 0.0,
            scroll_y: 0.0,
        };
        let mut html = root(None);
        html.children.push(BODY);
        Self {
            nodes: alloc::vec![html, root(Some(HTML))],
            window,
            compat_mode: CompatMode::Standards,
            listeners: Vec::new(),
            visibility_changes: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocates an id for a controller this host will serve.
    pub fn next_id(&mut self) -> ControllerId {
        let id = ControllerId::new(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn html(&self) -> NodeId {
        HTML
    }

    pub fn body(&self) -> NodeId {
        BODY
    }

    /// Creates a detached node with a border box relative to its future parent.
    pub fn create(&mut self, rect: Bounds) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: None,
            children: Vec::new(),
            rect,
            scrollable: false,
            scroll_x: 0.0,
            scroll_y: 0.0,
        });
        id
    }

    /// Appends `child` to `parent`, detaching it from its previous parent first.
    ///
    /// Returns `false` and leaves the tree unchanged if `parent` is `child` or one of its
    /// descendants, or if `child` is the root.
    pub fn append(&mut self, parent: NodeId, child: NodeId) -> bool {
        if child == HTML || self.is_inclusive_ancestor(child, parent) {
            return false;
        }
        if let Some(prev) = self.nodes[child.0].parent {
            self.nodes[prev.0].children.retain(|c| *c != child);
        }
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
        true
    }

    pub fn append_new(&mut self, parent: NodeId, rect: Bounds) -> NodeId {
        let id = self.create(rect);
        self.append(parent, id);
        id
    }

    pub fn remove(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|c| *c != node);
        }
    }

    pub fn set_rect(&mut self, node: NodeId, rect: Bounds) {
        self.nodes[node.0].rect = rect;
    }

    pub fn set_scrollable(&mut self, node: NodeId, scrollable: bool) {
        self.nodes[node.0].scrollable = scrollable;
    }

    pub fn set_compat_mode(&mut self, compat_mode: CompatMode) {
        self.compat_mode = compat_mode;
    }

    pub fn window(&self) -> Size {
        self.window
    }

    pub fn resize_window(&mut self, window: Size) {
        self.window = window;
    }

    /// Sets a node's scroll offset. Offsets are not clamped.
    pub fn scroll_to(&mut self, node: NodeId, x: f64, y: f64) {
        let n = &mut self.nodes[node.0];
        n.scroll_x = x;
        n.scroll_y = y;
    }

    /// Scrolls the window (the document's scrolling element).
    pub fn scroll_window_to(&mut self, x: f64, y: f64) {
        let root = self.scrolling_element();
        self.scroll_to(root, x, y);
    }

    pub fn subscriptions(&self) -> &[Subscription<NodeId>] {
        &self.listeners
    }

    /// The listeners an event fired on `target` reaches.
    pub fn listeners_for(
        &self,
        target: &EventTarget<NodeId>,
        event: &EventName,
    ) -> Vec<(ControllerId, Listener)> {
        self.listeners
            .iter()
            .filter(|s| &s.target == target && &s.event == event)
            .map(|s| (s.owner, s.listener))
            .collect()
    }

    /// Drains the `(controller, visible)` notifications received since the last call.
    pub fn take_visibility_changes(&mut self) -> Vec<(ControllerId, bool)> {
        core::mem::take(&mut self.visibility_changes)
    }

    /// Fires `event` on `target`, delivering it to the owning controllers.
    pub fn dispatch(
        &mut self,
        target: EventTarget<NodeId>,
        event: EventName,
        controllers: &mut [&mut Controller<NodeId>],
    ) -> Vec<(ControllerId, Transition)> {
        let mut out = Vec::new();
        for (owner, listener) in self.listeners_for(&target, &event) {
            let Some(c) = controllers.iter_mut().find(|c| c.id() == owner) else {
                continue;
            };
            if let Some(t) = c.handle_event(self, listener) {
                out.push((owner, t));
            }
        }
        out
    }

    /// Runs one display refresh for every controller that requested one.
    pub fn frame(
        &mut self,
        controllers: &mut [&mut Controller<NodeId>],
    ) -> Vec<(ControllerId, Transition)> {
        let mut out = Vec::new();
        for c in controllers.iter_mut() {
            if !c.needs_frame() {
                continue;
            }
            if let Some(t) = c.on_frame(self) {
                out.push((c.id(), t));
            }
        }
        out
    }

    fn scrolling_element(&self) -> NodeId {
        match self.compat_mode {
            CompatMode::Standards => HTML,
            CompatMode::BackCompat => BODY,
        }
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, mut node: NodeId) -> bool {
        loop {
            if node == ancestor {
                return true;
            }
            match self.nodes[node.0].parent {
                Some(parent) => node = parent,
                None => return false,
            }
        }
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.is_inclusive_ancestor(HTML, node)
    }

    fn overflows(&self, node: NodeId) -> bool {
        let n = &self.nodes[node.0];
        n.children.iter().any(|c| {
            let r = &self.nodes[c.0].rect;
            r.bottom > n.rect.height() || r.right > n.rect.width()
        })
    }
}

impl Host for SimHost {
    type Element = NodeId;

    fn window_size(&self) -> Size {
        self.window
    }

    fn bounding_rect(&self, element: &NodeId) -> Option<Bounds> {
        if !self.is_attached(*element) {
            return None;
        }
        let node = &self.nodes[element.0];
        let mut rect = node.rect;
        let mut parent = node.parent;
        while let Some(p) = parent {
            let pn = &self.nodes[p.0];
            rect = rect.translate(pn.rect.left - pn.scroll_x, pn.rect.top - pn.scroll_y);
            parent = pn.parent;
        }
        Some(rect)
    }

    fn scroll_parent(&self, element: &NodeId) -> Option<NodeId> {
        if !self.is_attached(*element) || *element == HTML {
            return None;
        }
        let mut current = self.nodes[element.0].parent;
        while let Some(node) = current {
            if node == HTML {
                break;
            }
            if self.nodes[node.0].scrollable && self.overflows(node) {
                return Some(node);
            }
            current = self.nodes[node.0].parent;
        }
        Some(self.scrolling_element())
    }

    fn document_roots(&self) -> DocumentRoots<NodeId> {
        DocumentRoots {
            scrolling_element: Some(self.scrolling_element()),
            document_element: Some(HTML),
            body: Some(BODY),
            compat_mode: self.compat_mode,
        }
    }

    fn add_listener(&mut self, subscription: &Subscription<NodeId>) {
        self.listeners.push(subscription.clone());
    }

    fn remove_listener(&mut self, subscription: &Subscription<NodeId>) {
        self.listeners.retain(|s| s != subscription);
    }

    fn visibility_changed(&mut self, owner: ControllerId, visible: bool) {
        self.visibility_changes.push((owner, visible));
    }
}
