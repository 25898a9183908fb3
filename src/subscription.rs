use smallvec::SmallVec;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener. Dropping it detaches the listener, so every
/// exit path (drag end, teardown, unwinding) releases it.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
}

pub type Subscriptions = SmallVec<[Subscription; 4]>;

impl Subscription {
    pub fn listen(
        target: &web::EventTarget,
        event: &'static str,
        callback: &js_sys::Function,
    ) -> anyhow::Result<Self> {
        target
            .add_event_listener_with_callback(event, callback)
            .map_err(|e| anyhow::anyhow!("listen {}: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback: callback.clone(),
        })
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.callback);
    }
}

/// JS function handle for a closure that stays owned on the Rust side.
#[inline]
pub fn callback_of<T: ?Sized>(closure: &Closure<T>) -> js_sys::Function {
    closure.as_ref().unchecked_ref::<js_sys::Function>().clone()
}
