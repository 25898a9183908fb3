use super::SharedCarousel;
use crate::frame::FrameLoop;
use crate::subscription::{callback_of, Subscription, Subscriptions};
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Per-card `mouseenter`/`mouseleave` listeners.
pub struct HoverHandlers {
    _subs: Subscriptions,
    _closures: Vec<Closure<dyn FnMut()>>,
}

pub fn wire_hover_handlers(
    carousel: &SharedCarousel,
    items: &[web::HtmlElement],
    frame_loop: &FrameLoop,
) -> anyhow::Result<HoverHandlers> {
    let mut subs = Subscriptions::new();
    let mut closures = Vec::with_capacity(items.len() * 2);

    for (index, item) in items.iter().enumerate() {
        let (c, lp) = (carousel.clone(), frame_loop.clone());
        let enter = Closure::wrap(Box::new(move || {
            c.borrow_mut().on_hover_start(index);
            lp.wake();
        }) as Box<dyn FnMut()>);
        let (c, lp) = (carousel.clone(), frame_loop.clone());
        let leave = Closure::wrap(Box::new(move || {
            c.borrow_mut().on_hover_end();
            lp.wake();
        }) as Box<dyn FnMut()>);

        subs.push(Subscription::listen(
            item,
            "mouseenter",
            &callback_of(&enter),
        )?);
        subs.push(Subscription::listen(
            item,
            "mouseleave",
            &callback_of(&leave),
        )?);
        closures.push(enter);
        closures.push(leave);
    }

    Ok(HoverHandlers {
        _subs: subs,
        _closures: closures,
    })
}
