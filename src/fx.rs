//! Decorative page effects: smooth scroll, scroll reveal, mouse parallax,
//! typewriter heading, background flicker, load fade, keyboard shortcuts.
//! Pure presentation glue — every missing target is skipped silently.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions, Window, window};

/// Fixed-header offset applied to every in-page scroll target.
const NAV_OFFSET_PX: i32 = 80;
/// Sections reveal once their top clears the viewport bottom by this much.
const REVEAL_MARGIN_PX: f64 = 50.0;
const TYPE_LEAD_IN_MS: i32 = 1000;
const TYPE_STEP_MS: i32 = 100;
const FLICKER_INTERVAL_MS: i32 = 3000;
const FADE_DELAY_MS: i32 = 100;

pub(crate) fn install(doc: &Document, win: &Window) -> Result<(), JsValue> {
    install_smooth_scroll(doc)?;
    install_scroll_reveal(doc, win)?;
    install_parallax(doc)?;
    install_typewriter(doc)?;
    install_flicker(win)?;
    install_load_fade(win)?;
    install_keyboard_nav(doc)?;
    Ok(())
}

fn scroll_to_y(top: f64) {
    let Some(win) = window() else {
        return;
    };
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&opts);
}

/// Anchor links scroll smoothly with the header offset; links to other pages
/// (or external URLs) keep their default navigation.
fn install_smooth_scroll(doc: &Document) -> Result<(), JsValue> {
    let links = doc.query_selector_all(".nav-link")?;
    for i in 0..links.length() {
        let Some(link) = links.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let target = link.get_attribute("href").unwrap_or_default();
        let closure = Closure::wrap(Box::new(move |evt: web_sys::Event| {
            if target.contains(".html") || target.contains("http") {
                return;
            }
            evt.prevent_default();
            let Some(doc) = window().and_then(|w| w.document()) else {
                return;
            };
            if let Ok(Some(section)) = doc.query_selector(&target) {
                if let Ok(section) = section.dyn_into::<HtmlElement>() {
                    scroll_to_y(f64::from(section.offset_top() - NAV_OFFSET_PX));
                }
            }
        }) as Box<dyn FnMut(_)>);
        link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

/// Hide every `.section` below the fold and slide it in as it scrolls into
/// view. One initial pass reveals whatever is already visible.
fn install_scroll_reveal(doc: &Document, win: &Window) -> Result<(), JsValue> {
    let sections = doc.query_selector_all(".section")?;
    for i in 0..sections.length() {
        if let Some(section) = sections.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            let style = section.style();
            style.set_property("opacity", "0").ok();
            style.set_property("transform", "translateY(30px)").ok();
            style
                .set_property("transition", "opacity 0.6s ease, transform 0.6s ease")
                .ok();
        }
    }
    let closure = Closure::wrap(Box::new(reveal_visible_sections) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())?;
    closure.forget();
    reveal_visible_sections();
    Ok(())
}

fn reveal_visible_sections() {
    let Some(win) = window() else {
        return;
    };
    let Some(doc) = win.document() else {
        return;
    };
    let viewport = win
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let Ok(sections) = doc.query_selector_all(".section") else {
        return;
    };
    for i in 0..sections.length() {
        let Some(section) = sections.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        if section.get_bounding_client_rect().top() < viewport - REVEAL_MARGIN_PX {
            let style = section.style();
            style.set_property("opacity", "1").ok();
            style.set_property("transform", "translateY(0)").ok();
        }
    }
}

/// Cards tilt toward the pointer, stronger the closer it gets; leaving the
/// container resets them.
fn install_parallax(doc: &Document) -> Result<(), JsValue> {
    let Some(container) = doc.query_selector(".container")? else {
        return Ok(());
    };
    let mv = Closure::wrap(Box::new(move |evt: web_sys::MouseEvent| {
        let Some(win) = window() else {
            return;
        };
        let Some(doc) = win.document() else {
            return;
        };
        let vw = win
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        let vh = win
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        let mouse_x = f64::from(evt.client_x()) / vw;
        let mouse_y = f64::from(evt.client_y()) / vh;
        let Ok(cards) = doc.query_selector_all(".feature-card, .info-card") else {
            return;
        };
        for i in 0..cards.length() {
            let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let rect = card.get_bounding_client_rect();
            let card_x = rect.left() + rect.width() / 2.0;
            let card_y = rect.top() + rect.height() / 2.0;
            let dx = (f64::from(evt.client_x()) - card_x).abs() / vw;
            let dy = (f64::from(evt.client_y()) - card_y).abs() / vh;
            let intensity = (1.0 - (dx * dx + dy * dy).sqrt() * 2.0).max(0.0);
            let style = card.style();
            style
                .set_property(
                    "transform",
                    &format!(
                        "translateY({}px) rotate3d({}, {}, 0, {}deg)",
                        -intensity * 5.0,
                        mouse_y - 0.5,
                        mouse_x - 0.5,
                        intensity * 2.0
                    ),
                )
                .ok();
            style
                .set_property(
                    "box-shadow",
                    &format!(
                        "0 {}px {}px rgba(255, 107, 53, {})",
                        intensity * 10.0,
                        intensity * 20.0,
                        intensity * 0.3
                    ),
                )
                .ok();
        }
    }) as Box<dyn FnMut(_)>);
    container.add_event_listener_with_callback("mousemove", mv.as_ref().unchecked_ref())?;
    mv.forget();

    let leave = Closure::wrap(Box::new(move |_evt: web_sys::MouseEvent| {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(cards) = doc.query_selector_all(".feature-card, .info-card") else {
            return;
        };
        for i in 0..cards.length() {
            if let Some(card) = cards.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                let style = card.style();
                style.remove_property("transform").ok();
                style.remove_property("box-shadow").ok();
            }
        }
    }) as Box<dyn FnMut(_)>);
    container.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
    leave.forget();
    Ok(())
}

/// Retype the hero heading character by character after a short lead-in.
fn install_typewriter(doc: &Document) -> Result<(), JsValue> {
    let Some(hero) = doc.query_selector(".poster-overlay h2")? else {
        return Ok(());
    };
    let full: Vec<char> = hero.text_content().unwrap_or_default().chars().collect();
    if full.is_empty() {
        return Ok(());
    }
    hero.set_text_content(Some(""));

    let typed = Rc::new(RefCell::new(String::new()));
    let next = Rc::new(Cell::new(0usize));
    // Self-rescheduling timeout closure, same shape as an animation loop.
    let step: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let step_inner = step.clone();
    *step.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let i = next.get();
        let Some(&c) = full.get(i) else {
            return;
        };
        typed.borrow_mut().push(c);
        hero.set_text_content(Some(typed.borrow().as_str()));
        next.set(i + 1);
        if i + 1 < full.len() {
            schedule(&step_inner, TYPE_STEP_MS);
        }
    }) as Box<dyn FnMut()>));
    schedule(&step, TYPE_LEAD_IN_MS);
    Ok(())
}

fn schedule(callback: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>, delay_ms: i32) {
    let Some(win) = window() else {
        return;
    };
    if let Some(c) = callback.borrow().as_ref() {
        let _ = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(c.as_ref().unchecked_ref(), delay_ms);
    }
}

/// Nudge the `.flicker` element to a faint random opacity every few seconds.
fn install_flicker(win: &Window) -> Result<(), JsValue> {
    let tick = Closure::wrap(Box::new(move || {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(Some(el)) = doc.query_selector(".flicker") else {
            return;
        };
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            return;
        };
        let opacity = crate::rand_unit() * 0.1 + 0.02;
        el.style().set_property("opacity", &format!("{opacity:.3}")).ok();
    }) as Box<dyn FnMut()>);
    win.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        FLICKER_INTERVAL_MS,
    )?;
    tick.forget();
    Ok(())
}

/// Fade the body in once the page finishes loading.
fn install_load_fade(win: &Window) -> Result<(), JsValue> {
    let on_load = Closure::wrap(Box::new(move || {
        let Some(win) = window() else {
            return;
        };
        let Some(body) = win.document().and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        style.set_property("opacity", "0").ok();
        style.set_property("transition", "opacity 1s ease").ok();
        let fade_in = Closure::wrap(Box::new(move || {
            if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
                body.style().set_property("opacity", "1").ok();
            }
        }) as Box<dyn FnMut()>);
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            fade_in.as_ref().unchecked_ref(),
            FADE_DELAY_MS,
        );
        fade_in.forget();
    }) as Box<dyn FnMut()>);
    win.add_event_listener_with_callback("load", on_load.as_ref().unchecked_ref())?;
    on_load.forget();
    Ok(())
}

/// Escape scrolls back to the top; digits 1-3 jump to the Nth section.
fn install_keyboard_nav(doc: &Document) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |evt: web_sys::KeyboardEvent| {
        let key = evt.key();
        if key == "Escape" {
            scroll_to_y(0.0);
            return;
        }
        let index = match key.as_str() {
            "1" => 0u32,
            "2" => 1,
            "3" => 2,
            _ => return,
        };
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        let Ok(sections) = doc.query_selector_all(".section") else {
            return;
        };
        if let Some(section) = sections.get(index).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            scroll_to_y(f64::from(section.offset_top() - NAV_OFFSET_PX));
        }
    }) as Box<dyn FnMut(_)>);
    doc.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
