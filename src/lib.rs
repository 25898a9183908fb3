#![cfg(target_arch = "wasm32")]
use ring_core::Carousel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod options;
mod render;
mod scoped;
mod style;
mod subscription;

use events::{HoverHandlers, PointerHandlers, ResizeHandler, SharedCarousel};
use frame::{FrameContext, FrameLoop};
use scoped::Defer;

/// A mounted ring. Dropping it (or calling `destroy`) detaches every
/// listener, stops the frame loop and removes the generated DOM.
#[wasm_bindgen]
pub struct RingHandle {
    mounted: Option<Mounted>,
}

struct Mounted {
    carousel: SharedCarousel,
    frame_loop: FrameLoop,
    _pointer: PointerHandlers,
    _hover: HoverHandlers,
    _resize: ResizeHandler,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.carousel.borrow().sink().remove();
    }
}

#[wasm_bindgen]
impl RingHandle {
    pub fn destroy(&mut self) {
        if self.mounted.take().is_some() {
            log::info!("[ring] destroyed");
        }
    }

    /// Current ring rotation in degrees, `NaN` once destroyed.
    pub fn angle(&self) -> f64 {
        self.mounted
            .as_ref()
            .map(|m| m.carousel.borrow().angle())
            .unwrap_or(f64::NAN)
    }

    #[wasm_bindgen(js_name = facingIndex)]
    pub fn facing_index(&self) -> Option<usize> {
        self.mounted
            .as_ref()
            .map(|m| m.carousel.borrow().facing_index())
    }
}

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<RingHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(js_name = mountRing)]
pub fn mount_ring(element_id: &str) -> Result<RingHandle, JsValue> {
    mount(element_id).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ring-web starting");

    let has_root = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::RING_ROOT_ID))
        .is_some();
    if !has_root {
        log::info!(
            "no #{} element; waiting for mountRing()",
            constants::RING_ROOT_ID
        );
        return Ok(());
    }
    match mount(constants::RING_ROOT_ID) {
        Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(e) => log::error!("init error: {:?}", e),
    }
    Ok(())
}

fn mount(element_id: &str) -> anyhow::Result<RingHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let host = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;

    let options = dom::read_options(&host)?;
    let renderer = render::DomRenderer::build(&document, &host, &options)?;
    let items = renderer.items.clone();
    let container = renderer.container.clone();
    // undo the mount if anything below fails
    let remove_on_error = {
        let container = container.clone();
        Defer::new(move || container.remove())
    };
    let carousel: SharedCarousel = Rc::new(RefCell::new(Carousel::new(&options, renderer)?));

    let frame_loop = FrameLoop::start(FrameContext::new(carousel.clone()));
    let stop_on_error = {
        let frame_loop = frame_loop.clone();
        Defer::new(move || frame_loop.stop())
    };

    let pointer = events::wire_pointer_handlers(&carousel, &document, &container, &frame_loop)?;
    let hover = events::wire_hover_handlers(&carousel, &items, &frame_loop)?;
    let resize = events::wire_resize(&carousel, &window, &frame_loop)?;
    stop_on_error.disarm();
    remove_on_error.disarm();

    log::info!(
        "[ring] mounted #{} with {} images",
        element_id,
        options.images.len()
    );
    Ok(RingHandle {
        mounted: Some(Mounted {
            carousel,
            frame_loop,
            _pointer: pointer,
            _hover: hover,
            _resize: resize,
        }),
    })
}
