//! Boot sequence: attaches every component to the live page.
//!
//! Each feature is wired independently. A feature whose nodes are missing is
//! skipped with a debug line; a feature that fails to wire is logged and the
//! rest still boot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Date;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{
    Element, Event, EventTarget, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent, MouseEvent,
    ScrollBehavior, ScrollToOptions, TouchEvent, Window,
};

use super::dom::DomBinding;
use super::observer::observe_visibility;
use super::storage::LocalStore;
use super::{after, listen, request_frame};
use crate::binding::{UiBinding, UiNode};
use crate::config::{CONFIG_ELEMENT_ID, FolioConfig};
use crate::counter::CounterAnimator;
use crate::error::{FolioError, Result};
use crate::extras::cursor::{CursorFollower, HOVER_SELECTOR};
use crate::extras::form::{self, ContactForm};
use crate::extras::images::{self, LAZY_IMAGE_SELECTOR};
use crate::extras::keyboard::{self, KeyAction, KeyPress};
use crate::extras::page::{self, FOCUSABLE_SELECTOR};
use crate::extras::swipe::SwipeDetector;
use crate::nav;
use crate::reveal::{self, RevealAnimator};
use crate::scroll::ScrollTracker;
use crate::skills::SkillBars;
use crate::theme::{self, ThemeController};
use crate::typing::Typewriter;

thread_local! {
    static TYPEWRITER: RefCell<Option<Rc<RefCell<Typewriter>>>> = const { RefCell::new(None) };
}

/// Boot all components. Called once from the WASM start hook.
pub fn start() {
    let raw_config = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    if console_log::init_with_level(log::Level::Trace).is_err() {
        log::debug!("console logger already installed");
    }
    let config = FolioConfig::from_json_or_default(raw_config.as_deref());
    log::set_max_level(config.level().to_level_filter());

    match boot(&config) {
        Ok(()) => log::info!("folio ready"),
        Err(err) => log::error!("folio failed to start: {err}"),
    }
}

/// Stop the typing effect. Exposed for test harnesses and teardown.
#[wasm_bindgen(js_name = stopTyping)]
pub fn stop_typing() {
    TYPEWRITER.with(|slot| {
        if let Some(writer) = slot.borrow_mut().take() {
            writer.borrow_mut().stop();
        }
    });
}

fn boot(config: &FolioConfig) -> Result<()> {
    let window = web_sys::window().ok_or(FolioError::NoWindow)?;
    let binding = DomBinding::new(&window)?;
    let document: EventTarget = binding.document().clone().into();

    wire_reveal(&binding, &config.reveal_selectors);
    wire_skills(&binding);
    wire_counters(&binding);
    wire_typing(&binding, &config.typing_phrases);
    wire_theme(&window, &binding, &config.theme_storage_key);
    wire_nav(&window, &binding, &document, config.nav_scroll_offset);
    wire_scroll(&window, &binding);
    wire_keyboard(&window, &binding, &document);
    wire_swipe(&binding, &document);
    wire_cursor(&window, &binding, &document, config.cursor_min_viewport_width);
    wire_focus_ring(&binding);
    wire_images(&binding);
    wire_contact_form(&binding);
    wire_page(&window, &binding, &document);
    Ok(())
}

fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

// ── Scroll-driven components ────────────────────────────────────

fn wire_reveal(binding: &DomBinding, selectors: &[String]) {
    let reveal = Rc::new(RevealAnimator::tag(binding, selectors));
    let nodes = reveal.nodes().to_vec();
    if nodes.is_empty() {
        log::debug!("no reveal targets, skipping scroll reveal");
        return;
    }
    observe_visibility(nodes, RevealAnimator::<Element>::options(), move |node, _| reveal.reveal(node));
}

fn wire_skills(binding: &DomBinding) {
    let skills = SkillBars::from_binding(binding);
    let Some(section) = skills.section().cloned() else {
        log::debug!("no skills section, skipping skill bars");
        return;
    };
    let skills = Rc::new(RefCell::new(skills));
    observe_visibility(vec![section], SkillBars::<Element>::options(), move |_, _| {
        let plan = skills.borrow_mut().trigger();
        for step in plan {
            let skills = Rc::clone(&skills);
            after(step.delay_ms, move || skills.borrow_mut().fill(step.index));
        }
    });
}

fn wire_counters(binding: &DomBinding) {
    let counters = CounterAnimator::from_binding(binding);
    let nodes = counters.nodes();
    if nodes.is_empty() {
        log::debug!("no counters, skipping counter animation");
        return;
    }
    let counters = Rc::new(RefCell::new(counters));
    let frame_pending = Rc::new(Cell::new(false));
    observe_visibility(nodes, CounterAnimator::<Element>::options(), move |node, _| {
        if counters.borrow_mut().start(node, Date::now()) {
            run_counter_frames(Rc::clone(&counters), Rc::clone(&frame_pending));
        }
    });
}

fn run_counter_frames(counters: Rc<RefCell<CounterAnimator<Element>>>, frame_pending: Rc<Cell<bool>>) {
    if frame_pending.replace(true) {
        return;
    }
    let (counters_cb, pending_cb) = (Rc::clone(&counters), Rc::clone(&frame_pending));
    let requested = request_frame(move || {
        pending_cb.set(false);
        if counters_cb.borrow_mut().tick(Date::now()) {
            run_counter_frames(counters_cb, pending_cb);
        }
    });
    if !requested {
        frame_pending.set(false);
        counters.borrow_mut().tick(f64::INFINITY);
    }
}

fn wire_scroll(window: &Window, binding: &DomBinding) {
    let tracker = Rc::new(RefCell::new(ScrollTracker::new()));
    tracker.borrow_mut().apply(binding, window.scroll_y().unwrap_or_default());

    let (window_cb, binding) = (window.clone(), binding.clone());
    listen(window.as_ref(), "scroll", move |_| {
        if !tracker.borrow_mut().on_scroll() {
            return;
        }
        let (tracker_cb, window_frame, binding_frame) = (Rc::clone(&tracker), window_cb.clone(), binding.clone());
        let requested = request_frame(move || {
            let scroll_y = window_frame.scroll_y().unwrap_or_default();
            tracker_cb.borrow_mut().apply(&binding_frame, scroll_y);
        });
        if !requested {
            tracker.borrow_mut().apply(&binding, window_cb.scroll_y().unwrap_or_default());
        }
    });
}

// ── Content effects ─────────────────────────────────────────────

fn wire_typing(binding: &DomBinding, phrases: &[String]) {
    let Some(node) = binding.typed_text() else {
        log::debug!("no typed text element, skipping typing effect");
        return;
    };
    let writer = Rc::new(RefCell::new(Typewriter::new(phrases)));
    TYPEWRITER.with(|slot| *slot.borrow_mut() = Some(Rc::clone(&writer)));

    wasm_bindgen_futures::spawn_local(async move {
        loop {
            let Some(step) = writer.borrow_mut().step() else {
                break;
            };
            node.set_text(&step.text);
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(step.delay_ms))).await;
        }
        log::debug!("typing effect stopped");
    });
}

fn wire_theme(window: &Window, binding: &DomBinding, storage_key: &str) {
    let store = LocalStore::new(window);
    let controller = Rc::new(RefCell::new(ThemeController::load(binding, &store, storage_key)));
    let Some(toggle) = binding.theme_toggle() else {
        log::debug!("no theme toggle, theme is read-only");
        return;
    };
    let binding = binding.clone();
    listen(toggle.as_ref(), "click", move |_| {
        let delay = controller.borrow_mut().toggle(&binding, &store);
        let binding = binding.clone();
        after(delay, move || theme::clear_transition(&binding));
    });
}

// ── Navigation ──────────────────────────────────────────────────

fn wire_nav(window: &Window, binding: &DomBinding, document: &EventTarget, scroll_offset: f64) {
    if let Some(toggle) = binding.nav_toggle() {
        let binding = binding.clone();
        listen(toggle.as_ref(), "click", move |_| {
            nav::toggle_menu(&binding);
        });
    }

    for link in binding.nav_links() {
        let binding = binding.clone();
        listen(link.as_ref(), "click", move |_| nav::close_menu(&binding));
    }

    {
        let binding = binding.clone();
        listen(document, "click", move |event| {
            if let Some(target) = event_element(&event) {
                nav::on_document_click(&binding, &target);
            }
        });
    }

    for anchor in binding.query_all(r##"a[href^="#"]"##) {
        let (binding, window) = (binding.clone(), window.clone());
        let href = anchor.attr("href").unwrap_or_default();
        listen(anchor.as_ref(), "click", move |event| {
            event.prevent_default();
            if let Some(target) = nav::anchor_target(&binding, &href) {
                smooth_scroll_to(&window, nav::anchor_scroll_top(target.offset_top(), scroll_offset));
            }
        });
    }

    if let Some(button) = binding.back_to_top() {
        let window = window.clone();
        listen(button.as_ref(), "click", move |_| smooth_scroll_to(&window, 0.0));
    }
}

fn wire_keyboard(window: &Window, binding: &DomBinding, document: &EventTarget) {
    let (window, binding) = (window.clone(), binding.clone());
    listen(document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let on_nav_toggle = match (event_element(&event), binding.nav_toggle()) {
            (Some(target), Some(toggle)) => target == toggle,
            _ => false,
        };
        let key = key_event.key();
        let press = KeyPress { key: &key, ctrl: key_event.ctrl_key(), on_nav_toggle };
        for action in keyboard::actions(press) {
            if action.prevents_default() {
                event.prevent_default();
            }
            match action {
                KeyAction::CloseMenu => nav::close_menu(&binding),
                KeyAction::ToggleMenu => {
                    nav::toggle_menu(&binding);
                }
                KeyAction::ScrollToTop => smooth_scroll_to(&window, 0.0),
                KeyAction::ScrollToBottom => {
                    let bottom = binding.body().map_or(0, |body| body.scroll_height());
                    smooth_scroll_to(&window, f64::from(bottom));
                }
            }
        }
    });
}

fn wire_swipe(binding: &DomBinding, document: &EventTarget) {
    fn touch_y(event: &Event) -> Option<f64> {
        let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
        Some(f64::from(touch.screen_y()))
    }

    let detector = Rc::new(Cell::new(SwipeDetector::new()));
    {
        let detector = Rc::clone(&detector);
        listen(document, "touchstart", move |event| {
            if let Some(y) = touch_y(&event) {
                let mut current = detector.get();
                current.touch_start(y);
                detector.set(current);
            }
        });
    }
    let binding = binding.clone();
    listen(document, "touchend", move |event| {
        if let Some(y) = touch_y(&event) {
            detector.get().handle_end(&binding, y);
        }
    });
}

// ── Peripherals ─────────────────────────────────────────────────

fn wire_cursor(window: &Window, binding: &DomBinding, document: &EventTarget, min_width: f64) {
    let width = window.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or_default());
    let cursor = CursorFollower::new(width, min_width);
    if !cursor.enabled() {
        log::debug!("viewport {width}px too narrow for custom cursor");
        return;
    }

    {
        let binding = binding.clone();
        listen(document, "mousemove", move |event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                cursor.on_move(&binding, f64::from(mouse.client_x()), f64::from(mouse.client_y()));
            }
        });
    }

    for element in binding.query_all(HOVER_SELECTOR) {
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let binding = binding.clone();
            listen(element.as_ref(), event, move |_| cursor.on_hover(&binding, entering));
        }
    }
}

fn wire_focus_ring(binding: &DomBinding) {
    for element in binding.query_all(FOCUSABLE_SELECTOR) {
        for (event, focused) in [("focus", true), ("blur", false)] {
            let node = element.clone();
            listen(element.as_ref(), event, move |_| page::focus_ring(&node, focused));
        }
    }
}

fn wire_images(binding: &DomBinding) {
    let lazy = binding.query_all(LAZY_IMAGE_SELECTOR);
    if lazy.is_empty() {
        log::debug!("no deferred images, skipping lazy loading");
    }
    observe_visibility(lazy, images::lazy_options(), |img, _| {
        images::load_deferred(img);
    });

    for img in binding.query_all("img") {
        let node = img.clone();
        listen(img.as_ref(), "error", move |_| images::on_image_error(&node));
    }
}

fn wire_contact_form(binding: &DomBinding) {
    fn field_value(binding: &DomBinding, id: &str) -> String {
        let Some(el) = binding.by_id(id) else {
            return String::new();
        };
        if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = el.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    let Some(form_el) = binding.by_id("contact-form") else {
        log::debug!("no contact form, skipping validation");
        return;
    };
    let binding = binding.clone();
    let form_node = form_el.clone();
    listen(form_el.as_ref(), "submit", move |event| {
        event.prevent_default();
        let submitted = ContactForm {
            name: field_value(&binding, "name"),
            email: field_value(&binding, "email"),
            subject: field_value(&binding, "subject"),
            message: field_value(&binding, "message"),
        };
        let errors = form::validate(&submitted);
        if errors.is_empty() {
            log::info!("contact form accepted");
            if let Some(html_form) = form_node.dyn_ref::<HtmlFormElement>() {
                html_form.reset();
            }
            return;
        }
        for error in errors {
            if let Some(delay) = form::show_error(&binding, error.field, error.message) {
                let binding = binding.clone();
                after(delay, move || form::clear_error(&binding, error.field));
            }
        }
    });
}

fn wire_page(window: &Window, binding: &DomBinding, document: &EventTarget) {
    page::update_copyright(binding, Date::new_0().get_full_year());

    {
        let binding = binding.clone();
        listen(document, "visibilitychange", move |_| {
            page::on_visibility_change(&binding, binding.document().hidden());
        });
    }

    let binding = binding.clone();
    listen(window.as_ref(), "load", move |_| {
        let delay = reveal::on_window_load(&binding);
        let binding = binding.clone();
        after(delay, move || reveal::reveal_hero(&binding));
    });
}
