//! Mouse and touch dragging.
//!
//! `mousedown`/`touchstart` on the container live as long as the widget. The
//! document-level move and release listeners are attached only while a drag
//! is in progress and are held as [`Subscription`]s, so ending the drag or
//! tearing down the widget detaches them.

use super::SharedCarousel;
use crate::frame::FrameLoop;
use crate::scoped::{ScopedList, SharedList};
use crate::subscription::{callback_of, Subscription, Subscriptions};
use wasm_bindgen::closure::Closure;
use web_sys as web;

const DRAG_EVENTS_MOVE: [&str; 2] = ["mousemove", "touchmove"];
const DRAG_EVENTS_RELEASE: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Owns the pointer closures. Fields drop in order, so every listener is
/// detached before the closures it calls. `drag_subs` empties on drop even
/// though the drag closures still hold handles to it.
pub struct PointerHandlers {
    _drag_subs: ScopedList<Subscription>,
    _mount_subs: Subscriptions,
    _mouse_down: Closure<dyn FnMut(web::MouseEvent)>,
    _touch_start: Closure<dyn FnMut(web::TouchEvent)>,
    _mouse_move: Closure<dyn FnMut(web::MouseEvent)>,
    _touch_move: Closure<dyn FnMut(web::TouchEvent)>,
    _release: Closure<dyn FnMut(web::Event)>,
}

#[derive(Clone)]
struct DragCallbacks {
    target: web::EventTarget,
    mouse_move: js_sys::Function,
    touch_move: js_sys::Function,
    release: js_sys::Function,
}

pub fn wire_pointer_handlers(
    carousel: &SharedCarousel,
    document: &web::Document,
    container: &web::HtmlElement,
    frame_loop: &FrameLoop,
) -> anyhow::Result<PointerHandlers> {
    let drag_subs = ScopedList::new();

    let mouse_move = {
        let c = carousel.clone();
        Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            c.borrow_mut().on_drag_move(ev.client_x() as f64);
        }) as Box<dyn FnMut(_)>)
    };
    let touch_move = {
        let c = carousel.clone();
        Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(x) = first_touch_x(&ev) {
                c.borrow_mut().on_drag_move(x);
            }
        }) as Box<dyn FnMut(_)>)
    };
    let release = {
        let c = carousel.clone();
        let subs = drag_subs.handle();
        let lp = frame_loop.clone();
        Closure::wrap(Box::new(move |_ev: web::Event| {
            end_drag(&c, &subs);
            lp.wake();
        }) as Box<dyn FnMut(_)>)
    };

    let callbacks = DragCallbacks {
        target: document.clone().into(),
        mouse_move: callback_of(&mouse_move),
        touch_move: callback_of(&touch_move),
        release: callback_of(&release),
    };

    let mouse_down = {
        let c = carousel.clone();
        let subs = drag_subs.handle();
        let cb = callbacks.clone();
        Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            begin_drag(&c, &subs, &cb, ev.client_x() as f64);
        }) as Box<dyn FnMut(_)>)
    };
    let touch_start = {
        let c = carousel.clone();
        let subs = drag_subs.handle();
        let cb = callbacks;
        Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(x) = first_touch_x(&ev) {
                begin_drag(&c, &subs, &cb, x);
            }
        }) as Box<dyn FnMut(_)>)
    };

    let mut mount_subs = Subscriptions::new();
    if carousel.borrow().is_draggable() {
        mount_subs.push(Subscription::listen(
            container,
            "mousedown",
            &callback_of(&mouse_down),
        )?);
        mount_subs.push(Subscription::listen(
            container,
            "touchstart",
            &callback_of(&touch_start),
        )?);
    }

    Ok(PointerHandlers {
        _drag_subs: drag_subs,
        _mount_subs: mount_subs,
        _mouse_down: mouse_down,
        _touch_start: touch_start,
        _mouse_move: mouse_move,
        _touch_move: touch_move,
        _release: release,
    })
}

// Multi-touch is not supported: only the first touch point steers the ring.
#[inline]
fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

fn begin_drag(
    carousel: &SharedCarousel,
    subs: &SharedList<Subscription>,
    cb: &DragCallbacks,
    pointer_x: f64,
) {
    {
        let mut c = carousel.borrow_mut();
        if !c.on_drag_start(pointer_x) {
            return;
        }
        let cursor = c.cursor();
        c.sink().set_cursor(cursor);
    }

    let mut subs = subs.borrow_mut();
    // a drag that never saw its release still holds listeners
    subs.clear();
    let moves = DRAG_EVENTS_MOVE
        .into_iter()
        .zip([&cb.mouse_move, &cb.touch_move]);
    let releases = DRAG_EVENTS_RELEASE.into_iter().map(|e| (e, &cb.release));
    for (event, callback) in moves.chain(releases) {
        match Subscription::listen(&cb.target, event, callback) {
            Ok(s) => subs.push(s),
            Err(e) => log::error!("[drag] {:?}", e),
        }
    }
    log::debug!("[drag] listening on {} document events", subs.len());
}

fn end_drag(carousel: &SharedCarousel, subs: &SharedList<Subscription>) {
    {
        let mut c = carousel.borrow_mut();
        c.on_drag_end();
        let cursor = c.cursor();
        c.sink().set_cursor(cursor);
    }
    subs.borrow_mut().clear();
}
