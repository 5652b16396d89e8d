// Invariants of the translation tables and the binding map.
// Native-friendly: no wasm/browser APIs involved.

use std::collections::{HashMap, HashSet};

use backroom_fx::locale::{BINDINGS, Binding, Locale, TextField};

#[test]
fn every_field_is_translated_in_both_locales() {
    for locale in [Locale::Zh, Locale::En] {
        let pack = locale.texts();
        for &field in TextField::ALL {
            assert!(
                !pack.get(field).is_empty(),
                "empty text for {field:?} in {locale:?}"
            );
        }
    }
}

#[test]
fn field_list_has_no_duplicates() {
    let mut seen = HashSet::new();
    for &field in TextField::ALL {
        assert!(seen.insert(field), "duplicate field {field:?} in ALL");
    }
}

#[test]
fn document_language_tags() {
    assert_eq!(Locale::Zh.texts().html_lang, "zh-CN");
    assert_eq!(Locale::En.texts().html_lang, "en");
}

#[test]
fn toggle_labels_name_the_other_language() {
    // The button shows the language you would switch to.
    assert_eq!(Locale::Zh.texts().language_toggle, "English");
    assert_eq!(Locale::En.texts().language_toggle, "中文");
}

#[test]
fn locale_other_is_an_involution() {
    assert_eq!(Locale::Zh.other(), Locale::En);
    assert_eq!(Locale::En.other(), Locale::Zh);
    assert_eq!(Locale::Zh.other().other(), Locale::Zh);
}

#[test]
fn indexed_bindings_cover_contiguous_ranges() {
    // For every selector bound by position, the indices must form 0..n with
    // no gaps; a gap would mean a table entry that can never apply.
    let mut by_selector: HashMap<&str, Vec<usize>> = HashMap::new();
    for &(_, binding) in BINDINGS {
        if let Binding::TextAt(sel, index) = binding {
            by_selector.entry(sel).or_default().push(index);
        }
    }
    for (sel, mut indices) in by_selector {
        indices.sort_unstable();
        let expected: Vec<usize> = (0..indices.len()).collect();
        assert_eq!(indices, expected, "non-contiguous indices for '{sel}'");
    }
}

#[test]
fn meta_fields_are_not_bound_to_selectors() {
    // Title and document language are written by the engine prologue, not
    // through the binding table.
    for &(field, _) in BINDINGS {
        assert!(
            !matches!(
                field,
                TextField::HtmlLang | TextField::Title | TextField::DownloadTitle
            ),
            "{field:?} must not appear in BINDINGS"
        );
    }
}

#[test]
fn binding_selectors_are_nonempty() {
    for &(field, binding) in BINDINGS {
        let sel = match binding {
            Binding::Text(s) | Binding::TextAt(s, _) | Binding::Alt(s) => s,
        };
        assert!(!sel.is_empty(), "empty selector for {field:?}");
    }
}
