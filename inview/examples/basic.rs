// Example: a minimal host driving one controller through a simulated window scroll.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use inview::{
    Bounds, Controller, ControllerId, DocumentRoots, EventName, EventTarget, Host, InViewOptions, SideOffsets,
    Size, Subscription,
};

/// One element in a 600px-high window, laid out at `doc_top` in document coordinates.
struct WindowHost {
    scroll_y: f64,
    doc_top: f64,
    listeners: Vec<Subscription<()>>,
}

impl Host for WindowHost {
    type Element = ();

    fn window_size(&self) -> Size {
        Size {
            width: 400.0,
            height: 600.0,
        }
    }

    fn bounding_rect(&self, _: &()) -> Option<Bounds> {
        let top = self.doc_top - self.scroll_y;
        Some(Bounds::new(top, 400.0, top + 50.0, 0.0))
    }

    fn scroll_parent(&self, _: &()) -> Option<()> {
        Some(())
    }

    fn document_roots(&self) -> DocumentRoots<()> {
        DocumentRoots {
            scrolling_element: Some(()),
            ..DocumentRoots::default()
        }
    }

    fn add_listener(&mut self, subscription: &Subscription<()>) {
        self.listeners.push(subscription.clone());
    }

    fn remove_listener(&mut self, subscription: &Subscription<()>) {
        self.listeners.retain(|s| s != subscription);
    }
}

fn main() {
    let mut host = WindowHost {
        scroll_y: 0.0,
        doc_top: 1500.0,
        listeners: Vec::new(),
    };

    let rendered = Arc::new(AtomicBool::new(false));
    let opts = InViewOptions::new()
        .with_offset(SideOffsets::default().with_bottom(100.0))
        .with_on_render(Some({
            let rendered = Arc::clone(&rendered);
            move || rendered.store(true, Ordering::Relaxed)
        }));

    let mut c = Controller::new(ControllerId::new(1), opts);
    c.on_mount(&mut host, Some(()));

    // Simulate a 60fps loop where the user scrolls 40px per frame.
    let mut frame = 0u32;
    while !rendered.load(Ordering::Relaxed) && frame < 100 {
        frame += 1;
        host.scroll_y += 40.0;

        let fired: Vec<_> = host
            .listeners
            .iter()
            .filter(|s| s.target == EventTarget::Window && s.event == EventName::Scroll)
            .map(|s| s.listener)
            .collect();
        for listener in fired {
            c.handle_event(&mut host, listener);
        }

        if c.needs_frame() {
            if let Some(t) = c.on_frame(&mut host) {
                println!("frame={frame} scroll_y={} transition={t:?}", host.scroll_y);
            }
        }
    }

    println!(
        "visible={} recomputations={} listeners_left={}",
        c.is_visible(),
        c.recomputations(),
        host.listeners.len()
    );
    c.on_unmount(&mut host);
}
