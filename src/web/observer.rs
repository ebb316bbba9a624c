//! `IntersectionObserver` adapter.
//!
//! Each call observes one set of elements with one set of options, feeding
//! every batch of entries through a [`TriggerSet`] so threshold and one-shot
//! handling match the natively tested logic. One-shot elements are
//! unobserved as soon as they fire.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::js_error;
use crate::error::Result;
use crate::trigger::{Crossing, TriggerSet, VisibilityOptions};

type Shared<T> = Rc<RefCell<T>>;

/// Call `on_cross` whenever an element in `nodes` crosses the threshold.
///
/// Without `IntersectionObserver` every element is reported as entered
/// immediately.
pub fn observe_visibility<F>(nodes: Vec<Element>, options: VisibilityOptions, on_cross: F)
where
    F: FnMut(&Element, Crossing) + 'static,
{
    if nodes.is_empty() {
        return;
    }
    let set: Shared<TriggerSet<Element>> = Rc::new(RefCell::new(TriggerSet::new(options)));
    for node in &nodes {
        set.borrow_mut().observe(node.clone());
    }
    let on_cross: Shared<F> = Rc::new(RefCell::new(on_cross));

    match build_observer(options, Rc::clone(&set), Rc::clone(&on_cross)) {
        Ok(observer) => {
            for node in &nodes {
                observer.observe(node);
            }
        }
        Err(err) => {
            log::info!("visibility observation unavailable ({err}), triggering immediately");
            let entered = set.borrow_mut().enter_all();
            for node in &entered {
                (on_cross.borrow_mut())(node, Crossing::Enter);
            }
        }
    }
}

fn build_observer<F>(
    options: VisibilityOptions,
    set: Shared<TriggerSet<Element>>,
    on_cross: Shared<F>,
) -> Result<IntersectionObserver>
where
    F: FnMut(&Element, Crossing) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let samples = entries.iter().map(|value| {
                let entry: IntersectionObserverEntry = value.unchecked_into();
                (entry.target(), entry.intersection_ratio(), entry.is_intersecting())
            });
            let crossings = set.borrow_mut().sample_all(samples);
            for (node, crossing) in crossings {
                if options.once {
                    observer.unobserve(&node);
                }
                (on_cross.borrow_mut())(&node, crossing);
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(js_error)?;
    callback.forget();
    Ok(observer)
}
