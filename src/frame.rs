use crate::events::SharedCarousel;
use crate::style;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub carousel: SharedCarousel,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(carousel: SharedCarousel) -> Self {
        Self {
            carousel,
            last_instant: Instant::now(),
        }
    }

    /// Returns `true` while another frame is needed.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;

        let mut guard = self.carousel.borrow_mut();
        let c = &mut *guard;
        c.tick(dt);
        if c.take_items_dirty() {
            let styles: Vec<style::ItemStyle> = (0..c.ring().item_count())
                .map(|i| style::item_style(c, i))
                .collect();
            let finished = c.entrance_finished();
            c.sink_mut().apply_items(&styles, finished);
        }
        c.needs_frame()
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that parks while the ring is idle.
/// Input handlers call [`FrameLoop::wake`] after mutating the carousel.
#[derive(Clone)]
pub struct FrameLoop {
    ctx: Rc<RefCell<FrameContext>>,
    tick: TickSlot,
    parked: Rc<Cell<bool>>,
    alive: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn start(ctx: FrameContext) -> Self {
        let this = Self {
            ctx: Rc::new(RefCell::new(ctx)),
            tick: Rc::new(RefCell::new(None)),
            parked: Rc::new(Cell::new(false)),
            alive: Rc::new(Cell::new(true)),
        };
        let lp = this.clone();
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !lp.alive.get() {
                // breaks the closure <-> handle cycle; freed once this call returns
                _ = lp.tick.borrow_mut().take();
                log::info!("[frame] loop stopped");
                return;
            }
            if lp.ctx.borrow_mut().frame() {
                request_frame(&lp.tick);
            } else {
                lp.parked.set(true);
                log::debug!("[frame] idle, parked");
            }
        }) as Box<dyn FnMut()>));
        request_frame(&this.tick);
        this
    }

    /// Resume a parked loop. No-op while frames are already scheduled.
    pub fn wake(&self) {
        if !self.parked.replace(false) {
            return;
        }
        // the parked interval is not animation time
        self.ctx.borrow_mut().last_instant = Instant::now();
        request_frame(&self.tick);
    }

    /// Stop the loop; the closure drops itself on its next call.
    pub fn stop(&self) {
        self.alive.set(false);
        self.wake();
    }
}

fn request_frame(tick: &TickSlot) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
