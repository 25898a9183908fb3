pub mod hover;
pub mod pointer;

use crate::dom;
use crate::frame::FrameLoop;
use crate::render::DomRenderer;
use crate::subscription::{callback_of, Subscription};
use ring_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub use hover::{wire_hover_handlers, HoverHandlers};
pub use pointer::{wire_pointer_handlers, PointerHandlers};

pub type SharedCarousel = Rc<RefCell<Carousel<DomRenderer>>>;

/// Keeps the window `resize` listener attached for the widget's lifetime.
pub struct ResizeHandler {
    _subscription: Subscription,
    _closure: Closure<dyn FnMut()>,
}

/// Apply the current viewport width once, then on every resize.
pub fn wire_resize(
    carousel: &SharedCarousel,
    window: &web::Window,
    frame_loop: &FrameLoop,
) -> anyhow::Result<ResizeHandler> {
    apply_viewport_scale(carousel, window);

    let carousel = carousel.clone();
    let window_for_cb = window.clone();
    let lp = frame_loop.clone();
    let closure = Closure::wrap(Box::new(move || {
        apply_viewport_scale(&carousel, &window_for_cb);
        lp.wake();
    }) as Box<dyn FnMut()>);
    let subscription = Subscription::listen(window, "resize", &callback_of(&closure))?;
    Ok(ResizeHandler {
        _subscription: subscription,
        _closure: closure,
    })
}

fn apply_viewport_scale(carousel: &SharedCarousel, window: &web::Window) {
    let Some(width) = dom::viewport_width(window) else {
        return;
    };
    let mut c = carousel.borrow_mut();
    let scale = c.on_resize(width);
    c.sink().set_scale(scale);
}
