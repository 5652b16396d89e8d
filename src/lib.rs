//! Backroom modpack site enhancement crate.
//!
//! Runs alongside the hand-authored promo pages (landing, download, tutorial)
//! and layers behavior on top of them: a two-locale text swap driven by a
//! declarative binding table, a probabilistic easter-egg reveal timer, and a
//! handful of decorative effects (smooth scroll, scroll reveal, parallax,
//! typewriter, flicker). The page structure itself is never created here —
//! the crate only reads and rewrites what the host pages already provide.

use wasm_bindgen::prelude::*;

pub mod egg;
pub mod locale;
pub mod page;

mod fx;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wire every page behavior: initial locale render plus toggle button,
/// decorative effects, and the reveal timer (skipped on the tutorial page).
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    let win = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let route = page::Route::current();
    locale::install(route)?;
    fx::install(&doc, &win)?;
    egg::install(route)?;
    Ok(())
}

/// Cancel the reveal timer and any in-flight reveal stage. Intended for the
/// host page to call before navigating away or tearing the document down.
#[wasm_bindgen]
pub fn teardown_page() {
    egg::shutdown();
}

pub(crate) fn performance_now() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Uniform draw in `[0, 1)`. With the `rng` feature this pulls browser
/// entropy; the fallback is a linear transform of the performance clock
/// (not crypto secure, fine for cosmetic triggering).
pub(crate) fn rand_unit() -> f64 {
    #[cfg(feature = "rng")]
    {
        let mut bytes = [0u8; 4];
        if getrandom::getrandom(&mut bytes).is_ok() {
            let raw = u32::from_le_bytes(bytes);
            return f64::from(raw) / (f64::from(u32::MAX) + 1.0);
        }
    }
    let now = performance_now();
    let mixed = (now as u64 as u32)
        .wrapping_mul(1_664_525)
        .wrapping_add(1_013_904_223);
    f64::from(mixed) / (f64::from(u32::MAX) + 1.0)
}
