use crate::*;

use alloc::string::String;
use inview::{
    Bounds, CompatMode, Container, ControllerId, EventName, EventTarget, Host, InViewOptions,
    Listener, Size, Transition,
};

fn window() -> Size {
    Size {
        width: 800.0,
        height: 800.0,
    }
}

/// `top..top + height`, 100px wide, relative to the parent's content origin.
fn boxed(top: f64, height: f64) -> Bounds {
    Bounds::new(top, 100.0, top + height, 0.0)
}

#[test]
fn slot_for_current_state_wins() {
    let slots = RenderSlots::new()
        .with_placeholder("placeholder")
        .with_content("content")
        .with_render(|visible| if visible { "render:on" } else { "render:off" });
    assert_eq!(slots.select(false), Some("placeholder"));
    assert_eq!(slots.select(true), Some("content"));
}

#[test]
fn render_fn_fills_missing_slots() {
    let only_placeholder = RenderSlots::new()
        .with_placeholder("placeholder")
        .with_render(|visible| if visible { "render:on" } else { "render:off" });
    assert_eq!(only_placeholder.select(false), Some("placeholder"));
    assert_eq!(only_placeholder.select(true), Some("render:on"));

    let only_render = RenderSlots::new().with_render(|visible| visible);
    assert_eq!(only_render.select(false), Some(false));
    assert_eq!(only_render.select(true), Some(true));
}

#[test]
fn nothing_to_render() {
    let empty = RenderSlots::<&str>::new();
    assert_eq!(empty.select(false), None);
    assert_eq!(empty.select(true), None);

    let only_content = RenderSlots::new().with_content("content");
    assert_eq!(only_content.select(false), None);
    assert_eq!(only_content.select(true), Some("content"));
}

#[test]
fn wrapper_defaults_to_div() {
    let c = LazyRender::<NodeId, &str>::new(
        ControllerId::new(1),
        InViewOptions::new(),
        RenderSlots::new().with_placeholder("..."),
    );
    let out = c.render();
    assert_eq!(out.tag, "div");
    assert_eq!(out.class_name, None);
    assert_eq!(out.child, Some("..."));

    let c = c.with_wrapper(Wrapper::new("section").with_class_name("lazy"));
    let out = c.render();
    assert_eq!(out.tag, "section");
    assert_eq!(out.class_name, Some("lazy"));
}

#[test]
fn sim_scroll_parent_walks_to_overflowing_ancestor() {
    let mut host = SimHost::new(window());
    let body = host.body();

    let panel = host.append_new(body, boxed(100.0, 300.0));
    let inner = host.append_new(panel, boxed(0.0, 2000.0));
    let item = host.append_new(inner, boxed(1000.0, 50.0));

    // Not scrollable: falls through to the document's scrolling element.
    assert_eq!(host.scroll_parent(&item), Some(host.html()));

    host.set_scrollable(panel, true);
    assert_eq!(host.scroll_parent(&item), Some(panel));

    // Scrollable but nothing overflows.
    host.set_rect(inner, boxed(0.0, 200.0));
    assert_eq!(host.scroll_parent(&item), Some(host.html()));

    let detached = host.create(boxed(0.0, 10.0));
    assert_eq!(host.scroll_parent(&detached), None);
    assert_eq!(host.bounding_rect(&detached), None);
}

#[test]
fn sim_append_rejects_cycles() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let a = host.create(boxed(0.0, 100.0));
    let b = host.create(boxed(0.0, 50.0));

    assert!(host.append(a, b));
    assert!(!host.append(b, a));
    assert!(!host.append(a, a));
    assert!(!host.append(body, host.html()));

    // The rejected appends left both nodes detached, so lookups still terminate.
    assert_eq!(host.scroll_parent(&b), None);
    assert_eq!(host.bounding_rect(&a), None);

    assert!(host.append(body, a));
    assert_eq!(host.scroll_parent(&b), Some(host.html()));
    assert_eq!(host.bounding_rect(&b), Some(boxed(0.0, 50.0)));
}

#[test]
fn sim_root_scrollers_normalize_to_window() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let item = host.append_new(body, boxed(0.0, 10.0));

    assert_eq!(
        inview::resolve_container(&host, &item),
        Some(Container::Window)
    );

    host.set_compat_mode(CompatMode::BackCompat);
    assert_eq!(host.scroll_parent(&item), Some(body));
    assert_eq!(
        inview::resolve_container(&host, &item),
        Some(Container::Window)
    );
}

#[test]
fn sim_bounding_rect_follows_scroll() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let panel = host.append_new(body, boxed(100.0, 300.0));
    let item = host.append_new(panel, boxed(1000.0, 50.0));

    assert_eq!(host.bounding_rect(&item), Some(boxed(1100.0, 50.0)));
    host.scroll_to(panel, 0.0, 800.0);
    assert_eq!(host.bounding_rect(&item), Some(boxed(300.0, 50.0)));
    host.scroll_window_to(0.0, 50.0);
    assert_eq!(host.bounding_rect(&item), Some(boxed(250.0, 50.0)));
    assert_eq!(host.bounding_rect(&panel), Some(boxed(50.0, 300.0)));
}

#[test]
fn scrolling_a_nested_panel_renders_content() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let panel = host.append_new(body, boxed(100.0, 300.0));
    host.set_scrollable(panel, true);
    let item = host.append_new(panel, boxed(1000.0, 50.0));

    let mut c = LazyRender::new(
        host.next_id(),
        InViewOptions::new(),
        RenderSlots::new()
            .with_placeholder("...")
            .with_content("loaded"),
    );
    c.on_mount(&mut host, Some(item));
    assert_eq!(c.controller().container(), Some(&Container::Element(panel)));
    assert!(host.frame(&mut [c.controller_mut()]).is_empty());
    assert_eq!(c.render().child, Some("..."));

    // Window scroll does not reach a controller tracking the panel.
    host.scroll_window_to(0.0, 500.0);
    let fired = host.dispatch(
        EventTarget::Window,
        EventName::Scroll,
        &mut [c.controller_mut()],
    );
    assert!(fired.is_empty());
    assert!(!c.controller().needs_frame());
    host.scroll_window_to(0.0, 0.0);

    host.scroll_to(panel, 0.0, 800.0);
    host.dispatch(
        EventTarget::Element(panel),
        EventName::Scroll,
        &mut [c.controller_mut()],
    );
    let id = c.controller().id();
    assert_eq!(
        host.frame(&mut [c.controller_mut()]),
        [(id, Transition::Rendered)]
    );
    assert_eq!(host.take_visibility_changes(), [(id, true)]);
    assert_eq!(c.render().child, Some("loaded"));
    assert!(host.subscriptions().is_empty());
}

#[test]
fn resizing_the_window_reveals_element() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let item = host.append_new(body, boxed(900.0, 50.0));

    let mut c = LazyRender::new(
        host.next_id(),
        InViewOptions::new(),
        RenderSlots::new().with_content(1u8),
    );
    c.on_mount(&mut host, Some(item));
    host.frame(&mut [c.controller_mut()]);
    assert!(!c.is_visible());
    assert_eq!(c.render().child, None);

    host.resize_window(Size {
        width: 800.0,
        height: 1000.0,
    });
    host.dispatch(
        EventTarget::Window,
        EventName::Resize,
        &mut [c.controller_mut()],
    );
    host.frame(&mut [c.controller_mut()]);
    assert!(c.is_visible());
    assert_eq!(c.render().child, Some(1));
}

#[test]
fn reset_event_returns_to_placeholder() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let item = host.append_new(body, boxed(100.0, 50.0));

    let mut c = LazyRender::new(
        host.next_id(),
        InViewOptions::new().with_event_to_reset("feed:refresh"),
        RenderSlots::new().with_render(|visible| {
            if visible {
                String::from("post")
            } else {
                String::from("skeleton")
            }
        }),
    );
    c.on_mount(&mut host, Some(item));
    host.frame(&mut [c.controller_mut()]);
    assert_eq!(c.render().child.as_deref(), Some("post"));

    // Scroll away, then reset: the element stays hidden until it is scrolled back.
    host.scroll_window_to(0.0, 2000.0);
    let id = c.controller().id();
    let fired = host.dispatch(
        EventTarget::Window,
        EventName::custom("feed:refresh"),
        &mut [c.controller_mut()],
    );
    assert_eq!(fired, [(id, Transition::Reset)]);
    assert_eq!(c.render().child.as_deref(), Some("skeleton"));
    assert!(host.frame(&mut [c.controller_mut()]).is_empty());

    host.scroll_window_to(0.0, 0.0);
    host.dispatch(
        EventTarget::Window,
        EventName::Scroll,
        &mut [c.controller_mut()],
    );
    assert_eq!(
        host.frame(&mut [c.controller_mut()]),
        [(id, Transition::Rendered)]
    );
    assert_eq!(
        host.take_visibility_changes(),
        [(id, true), (id, false), (id, true)]
    );
}

#[test]
fn events_route_to_their_owner() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let near = host.append_new(body, boxed(1000.0, 50.0));
    let far = host.append_new(body, boxed(3000.0, 50.0));

    let mut a = LazyRender::new(
        host.next_id(),
        InViewOptions::new(),
        RenderSlots::new().with_content('a'),
    );
    let mut b = LazyRender::new(
        host.next_id(),
        InViewOptions::new(),
        RenderSlots::new().with_content('b'),
    );
    a.on_mount(&mut host, Some(near));
    b.on_mount(&mut host, Some(far));
    host.frame(&mut [a.controller_mut(), b.controller_mut()]);

    host.scroll_window_to(0.0, 500.0);
    host.dispatch(
        EventTarget::Window,
        EventName::Scroll,
        &mut [a.controller_mut(), b.controller_mut()],
    );
    let out = host.frame(&mut [a.controller_mut(), b.controller_mut()]);
    assert_eq!(out, [(a.controller().id(), Transition::Rendered)]);
    assert!(!b.is_visible());

    b.on_unmount(&mut host);
    assert!(host.subscriptions().is_empty());
    assert_eq!(
        b.handle_event(&mut host, Listener::Update),
        None
    );
}

#[test]
fn detached_element_waits_for_layout() {
    let mut host = SimHost::new(window());
    let body = host.body();
    let item = host.create(boxed(10.0, 10.0));

    let mut c = LazyRender::new(
        host.next_id(),
        InViewOptions::new(),
        RenderSlots::new().with_content(()),
    );
    c.on_mount(&mut host, Some(item));
    assert_eq!(c.controller().container(), None);
    assert!(host.frame(&mut [c.controller_mut()]).is_empty());

    assert!(host.append(body, item));
    c.controller_mut().attach(&mut host, Some(item));
    assert_eq!(host.frame(&mut [c.controller_mut()]).len(), 1);
    assert!(c.is_visible());
}
