//! Probabilistic easter-egg reveal.
//!
//! A 3-second interval draws a biased coin with memory: the first tick after
//! a reveal (or after a reset) triggers with probability 0.5, and any tick
//! that follows a miss triggers unconditionally, so a miss streak never
//! exceeds one tick. A triggered reveal plays a fixed sequence — pop the
//! overlay in, six glow pulses at 200 ms, hold one second, fade out, then a
//! ten-second quiet period before the coin is armed again.
//!
//! [`RevealMachine`] is the pure core: it consumes caller-supplied draws and
//! hands back stage effects with their delays, so tests drive both branches
//! deterministically. The wasm driver below owns the interval and the stage
//! timeout through cancellable handles; [`shutdown`] clears both.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, window};

use crate::page::Route;

/// Interval between trigger evaluations.
pub const TICK_MS: i32 = 3000;
/// Cadence of the glow pulse while flashing.
pub const FLASH_STEP_MS: i32 = 200;
/// Number of pulse alternations per reveal.
pub const FLASH_STEPS: u8 = 6;
/// Pause between the last pulse and the fade-out.
pub const HOLD_MS: i32 = 1000;
/// Nominal duration of the fade-out transition.
pub const HIDE_ANIM_MS: i32 = 300;
/// Quiet period after the overlay is hidden.
pub const COOLDOWN_MS: i32 = 10000;

const OVERLAY_ID: &str = "easter-egg";
const OVERLAY_SRC: &str = "sp.PNG";

/// Where the reveal sequence currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Pulsing the glow; the counter is the number of pulses already played.
    Flashing(u8),
    /// Fully visible, waiting before the fade-out.
    Holding,
    /// Fade-out transition running.
    Hiding,
    /// Hidden, waiting out the quiet period.
    Cooldown,
}

/// What a tick decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// A reveal is mid-flight or cooling down; nothing was evaluated.
    Suppressed,
    /// The coin came up tails; the next tick is guaranteed to trigger.
    Miss,
    /// Start the reveal sequence (if the overlay exists).
    Trigger,
}

/// Visual action a stage asks the driver to perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Animate the overlay to full visibility.
    Show,
    /// Set the glow pulse; `bright` alternates across the six steps.
    Pulse { bright: bool },
    /// Animate the overlay back to hidden.
    Hide,
    /// Fade-out finished; nothing visual, the quiet period begins.
    Settle,
    /// Quiet period over; the trigger coin is armed again.
    Rearm,
}

/// One scheduled stage: the effect to apply now and the delay until the next
/// advance, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stage {
    pub effect: Effect,
    pub next_in_ms: Option<i32>,
}

/// Pure trigger rule and reveal sequence. All timing is expressed as delays
/// returned to the caller; the machine never sleeps or schedules anything
/// itself.
#[derive(Debug)]
pub struct RevealMachine {
    cooldown_active: bool,
    consecutive_misses: u32,
    phase: Phase,
}

impl Default for RevealMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealMachine {
    pub fn new() -> Self {
        Self {
            cooldown_active: false,
            consecutive_misses: 0,
            phase: Phase::Idle,
        }
    }

    pub fn cooling(&self) -> bool {
        self.cooldown_active
    }

    pub fn misses(&self) -> u32 {
        self.consecutive_misses
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Evaluate the trigger rule with the caller's uniform draw `r` in
    /// `[0, 1)`. The first miss is a coin flip; the tick after any miss
    /// triggers for every possible draw.
    pub fn tick(&mut self, r: f64) -> TickOutcome {
        if self.cooldown_active {
            return TickOutcome::Suppressed;
        }
        let p = if self.consecutive_misses > 0 { 1.0 } else { 0.5 };
        if r < p {
            self.consecutive_misses = 0;
            TickOutcome::Trigger
        } else {
            self.consecutive_misses += 1;
            TickOutcome::Miss
        }
    }

    /// Enter the reveal sequence. The caller applies [`Effect::Show`] itself
    /// and only calls this once the overlay is known to exist — when it does
    /// not, the sequence is simply never begun and the cooldown stays unset.
    pub fn begin(&mut self) -> Stage {
        self.cooldown_active = true;
        self.phase = Phase::Flashing(0);
        Stage {
            effect: Effect::Show,
            next_in_ms: Some(FLASH_STEP_MS),
        }
    }

    /// Advance to the next stage once its delay has elapsed. Returns `None`
    /// from `Idle` (nothing in flight).
    pub fn advance(&mut self) -> Option<Stage> {
        match self.phase {
            Phase::Idle => None,
            Phase::Flashing(n) => {
                let done = n + 1 >= FLASH_STEPS;
                self.phase = if done { Phase::Holding } else { Phase::Flashing(n + 1) };
                Some(Stage {
                    effect: Effect::Pulse { bright: n % 2 == 0 },
                    next_in_ms: Some(if done { HOLD_MS } else { FLASH_STEP_MS }),
                })
            }
            Phase::Holding => {
                self.phase = Phase::Hiding;
                Some(Stage {
                    effect: Effect::Hide,
                    next_in_ms: Some(HIDE_ANIM_MS),
                })
            }
            Phase::Hiding => {
                self.phase = Phase::Cooldown;
                Some(Stage {
                    effect: Effect::Settle,
                    next_in_ms: Some(COOLDOWN_MS),
                })
            }
            Phase::Cooldown => {
                self.phase = Phase::Idle;
                self.cooldown_active = false;
                Some(Stage {
                    effect: Effect::Rearm,
                    next_in_ms: None,
                })
            }
        }
    }
}

// --- WASM driver --------------------------------------------------------------

type StageCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

struct EggController {
    machine: RevealMachine,
    interval_id: i32,
    _interval: Closure<dyn FnMut()>,
    stage: StageCallback,
    stage_timeout: Option<i32>,
}

thread_local! {
    static EGG: RefCell<Option<EggController>> = const { RefCell::new(None) };
}

/// Create the overlay and start the tick interval. The tutorial page never
/// runs the reveal at all.
pub(crate) fn install(route: Route) -> Result<(), JsValue> {
    if route == Route::Tutorial {
        return Ok(());
    }
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    ensure_overlay(&doc)?;

    let stage: StageCallback = Rc::new(RefCell::new(None));
    *stage.borrow_mut() = Some(Closure::wrap(Box::new(run_stage) as Box<dyn FnMut()>));

    let interval = Closure::wrap(Box::new(run_tick) as Box<dyn FnMut()>);
    let interval_id = win.set_interval_with_callback_and_timeout_and_arguments_0(
        interval.as_ref().unchecked_ref(),
        TICK_MS,
    )?;

    let controller = EggController {
        machine: RevealMachine::new(),
        interval_id,
        _interval: interval,
        stage,
        stage_timeout: None,
    };
    EGG.with(|cell| cell.replace(Some(controller)));
    Ok(())
}

/// Cancel the interval and any scheduled stage, dropping the controller.
pub(crate) fn shutdown() {
    if let Some(controller) = EGG.with(|cell| cell.borrow_mut().take()) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(controller.interval_id);
            if let Some(id) = controller.stage_timeout {
                win.clear_timeout_with_handle(id);
            }
        }
    }
}

fn run_tick() {
    let r = crate::rand_unit();
    EGG.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return;
        };
        if controller.machine.tick(r) == TickOutcome::Trigger {
            // Overlay gone: abort silently, cooldown never set.
            let Some(overlay) = overlay_element() else {
                return;
            };
            let stage = controller.machine.begin();
            apply_effect(&overlay, stage.effect);
            if let Some(delay) = stage.next_in_ms {
                schedule_stage(controller, delay);
            }
        }
    });
}

fn run_stage() {
    EGG.with(|cell| {
        let mut slot = cell.borrow_mut();
        let Some(controller) = slot.as_mut() else {
            return;
        };
        controller.stage_timeout = None;
        let Some(stage) = controller.machine.advance() else {
            return;
        };
        if let Some(overlay) = overlay_element() {
            apply_effect(&overlay, stage.effect);
        }
        if let Some(delay) = stage.next_in_ms {
            schedule_stage(controller, delay);
        }
    });
}

fn schedule_stage(controller: &mut EggController, delay_ms: i32) {
    let Some(win) = window() else {
        return;
    };
    if let Some(callback) = controller.stage.borrow().as_ref() {
        if let Ok(id) = win.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms,
        ) {
            controller.stage_timeout = Some(id);
        }
    }
}

fn overlay_element() -> Option<Element> {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(OVERLAY_ID))
}

fn apply_effect(overlay: &Element, effect: Effect) {
    match effect {
        Effect::Show => {
            overlay
                .set_attribute("style", &overlay_style(true, false))
                .ok();
        }
        Effect::Pulse { bright } => {
            overlay
                .set_attribute("style", &overlay_style(true, bright))
                .ok();
        }
        Effect::Hide => {
            overlay
                .set_attribute("style", &overlay_style(false, false))
                .ok();
        }
        Effect::Settle | Effect::Rearm => {}
    }
}

fn ensure_overlay(doc: &Document) -> Result<(), JsValue> {
    if doc.get_element_by_id(OVERLAY_ID).is_some() {
        return Ok(());
    }
    let img = doc.create_element("img")?;
    img.set_id(OVERLAY_ID);
    img.set_attribute("src", OVERLAY_SRC)?;
    img.set_attribute("alt", "Easter Egg")?;
    img.set_attribute("style", &overlay_style(false, false))?;
    doc.body()
        .ok_or_else(|| JsValue::from_str("no body"))?
        .append_child(&img)?;
    Ok(())
}

fn overlay_style(visible: bool, bright: bool) -> String {
    let (opacity, scale) = if visible { ("1", "1") } else { ("0", "0") };
    let glow = if bright {
        "drop-shadow(0 0 30px rgba(255, 107, 53, 1))"
    } else {
        "drop-shadow(0 0 20px rgba(255, 107, 53, 0.8))"
    };
    format!(
        "position:fixed; top:50%; left:50%; transform:translate(-50%,-50%) scale({scale}); \
         max-width:300px; max-height:300px; z-index:10000; opacity:{opacity}; \
         transition:all 0.3s ease; pointer-events:none; filter:{glow};"
    )
}
