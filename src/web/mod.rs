//! Browser layer, compiled only with the `hydrate` feature.
//!
//! ARCHITECTURE
//! ============
//! [`dom`] and [`storage`] implement the binding traits over `web-sys`,
//! [`observer`] adapts `IntersectionObserver` onto [`crate::trigger`], and
//! [`runtime`] attaches every component to its browser events.

pub mod dom;
pub mod observer;
pub mod runtime;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::error::FolioError;

pub(crate) fn js_error(value: JsValue) -> FolioError {
    FolioError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Run `f` once, `delay_ms` from now.
pub(crate) fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::sleep(Duration::from_millis(u64::from(delay_ms))).await;
        f();
    });
}

/// Run `f` on the next animation frame.
///
/// Returns `false` (and drops `f`) when no frame could be requested, leaving
/// the fallback to the caller.
pub(crate) fn request_frame(f: impl FnOnce() + 'static) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let mut pending = Some(f);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if let Some(f) = pending.take() {
            f();
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => {
            *holder.borrow_mut() = Some(cb);
            true
        }
        Err(err) => {
            log::debug!("requestAnimationFrame failed: {}", js_error(err));
            false
        }
    }
}

/// Attach `handler` to `event` on `target` for the page's lifetime.
pub(crate) fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F)
where
    F: FnMut(web_sys::Event) + 'static,
{
    let cb = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    match target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref()) {
        Ok(()) => cb.forget(),
        Err(err) => log::warn!("could not listen for {event}: {}", js_error(err)),
    }
}
