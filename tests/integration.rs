// Integration tests (native) for the `backroom-fx` crate.
// These tests avoid wasm-specific functionality and exercise the pure state
// machines so they can run under `cargo test` on the host.

use std::collections::HashMap;

use backroom_fx::egg::{
    COOLDOWN_MS, Effect, FLASH_STEP_MS, FLASH_STEPS, HIDE_ANIM_MS, HOLD_MS, Phase, RevealMachine,
    TickOutcome,
};
use backroom_fx::locale::{Locale, LocaleEngine, TextSink};
use backroom_fx::page::Route;

/// Sink standing in for the page. Selectors listed in `present` expose that
/// many elements; everything else is treated as fully present.
#[derive(Default)]
struct RecordingSink {
    present: HashMap<&'static str, usize>,
    writes: Vec<(&'static str, usize, String)>,
    title: Option<String>,
    lang: Option<String>,
}

impl RecordingSink {
    fn text_for(&self, selector: &str, index: usize) -> Option<&str> {
        self.writes
            .iter()
            .rev()
            .find(|(s, i, _)| *s == selector && *i == index)
            .map(|(_, _, t)| t.as_str())
    }
}

impl TextSink for RecordingSink {
    fn set_text(&mut self, selector: &'static str, index: usize, text: &str) {
        if let Some(&count) = self.present.get(selector) {
            if index >= count {
                return;
            }
        }
        self.writes.push((selector, index, text.to_string()));
    }

    fn set_alt(&mut self, selector: &'static str, text: &str) {
        self.writes.push((selector, 0, text.to_string()));
    }

    fn set_title(&mut self, text: &str) {
        self.title = Some(text.to_string());
    }

    fn set_lang(&mut self, tag: &str) {
        self.lang = Some(tag.to_string());
    }
}

// --- Reveal trigger rule ------------------------------------------------------

#[test]
fn first_tick_is_a_coin_flip() {
    let mut m = RevealMachine::new();
    assert_eq!(m.tick(0.49), TickOutcome::Trigger);

    let mut m = RevealMachine::new();
    assert_eq!(m.tick(0.5), TickOutcome::Miss);
    assert_eq!(m.misses(), 1);
}

#[test]
fn tick_after_a_miss_triggers_for_any_draw() {
    // Force a miss, then draw values that would miss a fair coin; the
    // follow-up tick must trigger regardless because p becomes 1.0.
    for follow_up in [0.5, 0.75, 0.999_999] {
        let mut m = RevealMachine::new();
        assert_eq!(m.tick(0.9), TickOutcome::Miss);
        assert_eq!(m.tick(follow_up), TickOutcome::Trigger);
        assert_eq!(m.misses(), 0);
    }
}

#[test]
fn miss_streak_never_exceeds_one() {
    // Adversarial draw sequence: all high values. Misses must alternate with
    // guaranteed triggers, never two misses back to back.
    let mut m = RevealMachine::new();
    let mut prev_missed = false;
    for _ in 0..100 {
        let missed = m.tick(0.99) == TickOutcome::Miss;
        assert!(!(missed && prev_missed), "two consecutive misses");
        prev_missed = missed;
    }
}

#[test]
fn cooldown_gates_ticks() {
    let mut m = RevealMachine::new();
    assert_eq!(m.tick(0.9), TickOutcome::Miss);
    m.begin();
    assert!(m.cooling());
    for _ in 0..10 {
        assert_eq!(m.tick(0.0), TickOutcome::Suppressed);
    }
    // State untouched by suppressed ticks.
    assert_eq!(m.misses(), 1);
    assert_eq!(m.phase(), Phase::Flashing(0));
}

#[test]
fn trigger_without_begin_leaves_cooldown_unset() {
    // The driver only calls begin() when the overlay exists; a trigger whose
    // sequence is aborted must leave the machine re-armed.
    let mut m = RevealMachine::new();
    assert_eq!(m.tick(0.1), TickOutcome::Trigger);
    assert!(!m.cooling());
    assert_eq!(m.phase(), Phase::Idle);
}

#[test]
fn reveal_sequence_walks_every_stage_in_order() {
    let mut m = RevealMachine::new();
    assert_eq!(m.tick(0.0), TickOutcome::Trigger);

    let first = m.begin();
    assert_eq!(first.effect, Effect::Show);
    assert_eq!(first.next_in_ms, Some(FLASH_STEP_MS));

    // Six pulses, alternating bright/dim, 200ms apart except the last which
    // leads into the hold.
    for n in 0..FLASH_STEPS {
        let stage = m.advance().expect("flash stage");
        assert_eq!(stage.effect, Effect::Pulse { bright: n % 2 == 0 });
        let expected = if n + 1 == FLASH_STEPS { HOLD_MS } else { FLASH_STEP_MS };
        assert_eq!(stage.next_in_ms, Some(expected));
        assert!(m.cooling());
    }

    let hide = m.advance().expect("hide stage");
    assert_eq!(hide.effect, Effect::Hide);
    assert_eq!(hide.next_in_ms, Some(HIDE_ANIM_MS));

    let settle = m.advance().expect("settle stage");
    assert_eq!(settle.effect, Effect::Settle);
    assert_eq!(settle.next_in_ms, Some(COOLDOWN_MS));
    assert!(m.cooling());

    let rearm = m.advance().expect("rearm stage");
    assert_eq!(rearm.effect, Effect::Rearm);
    assert_eq!(rearm.next_in_ms, None);
    assert!(!m.cooling());
    assert_eq!(m.phase(), Phase::Idle);

    // Nothing in flight anymore.
    assert!(m.advance().is_none());
    // And the coin is armed again.
    assert_eq!(m.tick(0.1), TickOutcome::Trigger);
}

// --- Route detection ----------------------------------------------------------

#[test]
fn routes_match_by_path_substring() {
    assert_eq!(Route::from_path("/site/index.html"), Route::Landing);
    assert_eq!(Route::from_path("/"), Route::Landing);
    assert_eq!(Route::from_path("/site/download.html"), Route::Download);
    assert_eq!(Route::from_path("/site/tutorial.html"), Route::Tutorial);
}

// --- Locale engine ------------------------------------------------------------

#[test]
fn default_locale_is_chinese() {
    let engine = LocaleEngine::new(Route::Landing);
    assert_eq!(engine.current(), Locale::Zh);
}

#[test]
fn toggle_switches_to_english_and_rerenders() {
    let mut sink = RecordingSink::default();
    let mut engine = LocaleEngine::new(Route::Landing);
    engine.render(&mut sink);
    assert_eq!(sink.lang.as_deref(), Some("zh-CN"));
    assert_eq!(sink.text_for(".nav-link[href='#download']", 0), Some("下载"));

    let active = engine.toggle(&mut sink);
    assert_eq!(active, Locale::En);
    assert_eq!(sink.lang.as_deref(), Some("en"));
    assert_eq!(
        sink.text_for(".nav-link[href='#download']", 0),
        Some("Download")
    );
}

#[test]
fn double_toggle_restores_identical_text() {
    let mut before = RecordingSink::default();
    let mut engine = LocaleEngine::new(Route::Landing);
    engine.render(&mut before);

    let mut after = RecordingSink::default();
    engine.toggle(&mut RecordingSink::default());
    engine.toggle(&mut after);

    assert_eq!(engine.current(), Locale::Zh);
    assert_eq!(before.writes, after.writes);
    assert_eq!(before.title, after.title);
    assert_eq!(before.lang, after.lang);
}

#[test]
fn short_step_title_list_gets_partial_updates() {
    // Page exposes 2 of the 4 expected step titles; exactly 2 are written
    // and nothing errors.
    let mut sink = RecordingSink::default();
    sink.present.insert(".step-title", 2);
    let engine = LocaleEngine::new(Route::Download);
    engine.render(&mut sink);

    let step_title_writes: Vec<_> = sink
        .writes
        .iter()
        .filter(|(s, _, _)| *s == ".step-title")
        .collect();
    assert_eq!(step_title_writes.len(), 2);
    assert!(step_title_writes.iter().all(|(_, i, _)| *i < 2));
}

#[test]
fn missing_target_is_silently_skipped() {
    let mut sink = RecordingSink::default();
    sink.present.insert(".tutorial-main-title", 0);
    let engine = LocaleEngine::new(Route::Landing);
    engine.render(&mut sink);
    assert!(sink.text_for(".tutorial-main-title", 0).is_none());
}

#[test]
fn title_follows_route() {
    let mut sink = RecordingSink::default();
    LocaleEngine::new(Route::Download).render(&mut sink);
    assert_eq!(
        sink.title.as_deref(),
        Some("下载启动器 - 我的世界 Backroom 整合包")
    );

    let mut sink = RecordingSink::default();
    LocaleEngine::new(Route::Landing).render(&mut sink);
    assert_eq!(sink.title.as_deref(), Some("我的世界 Backroom 整合包"));
}
