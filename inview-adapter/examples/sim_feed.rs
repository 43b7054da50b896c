// Example: a feed of lazily rendered cards inside a simulated window.
use inview::{Bounds, EventName, EventTarget, InViewOptions, Size};
use inview_adapter::{LazyRender, RenderSlots, SimHost, Wrapper};

fn main() {
    let mut host = SimHost::new(Size {
        width: 360.0,
        height: 640.0,
    });
    let body = host.body();

    // 20 cards, 200px tall, preloaded 100px before they reach the fold.
    let mut cards: Vec<LazyRender<_, String>> = (0..20)
        .map(|i| {
            let top = i as f64 * 200.0;
            let node = host.append_new(body, Bounds::new(top, 360.0, top + 180.0, 0.0));
            let mut card = LazyRender::new(
                host.next_id(),
                InViewOptions::new().with_offset(-100.0),
                RenderSlots::new()
                    .with_placeholder(String::from("<skeleton>"))
                    .with_render(move |_| format!("card #{i}")),
            )
            .with_wrapper(Wrapper::default().with_class_name("card"));
            card.on_mount(&mut host, Some(node));
            card
        })
        .collect();

    for scroll_y in (0..=3000).step_by(250) {
        host.scroll_window_to(0.0, scroll_y as f64);

        let mut controllers: Vec<_> = cards.iter_mut().map(|c| c.controller_mut()).collect();
        host.dispatch(EventTarget::Window, EventName::Scroll, &mut controllers);
        let rendered = host.frame(&mut controllers);

        let visible = cards.iter().filter(|c| c.is_visible()).count();
        println!(
            "scroll_y={scroll_y:>4} newly_rendered={} visible={visible} listeners={}",
            rendered.len(),
            host.subscriptions().len()
        );
    }

    for card in cards.iter().take(3) {
        println!("{:?}", card.render());
    }
}
