//! Two-locale text engine for the promo pages.
//!
//! All user-visible strings live in one [`TextPack`] per locale (a struct of
//! `&'static str`, so the two tables cannot drift apart: a field missing from
//! one locale is a compile error). Where each string lands on the page is
//! declared once in [`BINDINGS`] instead of being scattered through ad-hoc
//! queries; targets the current page does not have are skipped silently.
//!
//! The engine itself is a plain instantiable struct. The wasm layer owns a
//! single instance in a thread-local cell and feeds it a [`TextSink`] that
//! writes the real DOM; tests substitute a recording sink.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::page::Route;

mod texts_en;
mod texts_zh;

/// A selected display language. Exactly one is active at a time; `Zh` is the
/// fixed default and nothing is persisted across page loads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Locale {
    Zh,
    En,
}

impl Locale {
    pub fn other(self) -> Self {
        match self {
            Locale::Zh => Locale::En,
            Locale::En => Locale::Zh,
        }
    }

    pub fn texts(self) -> &'static TextPack {
        match self {
            Locale::Zh => &texts_zh::TEXTS,
            Locale::En => &texts_en::TEXTS,
        }
    }
}

/// Every translatable string of the three pages, for one locale.
#[derive(Debug)]
pub struct TextPack {
    // Page metadata
    pub html_lang: &'static str,
    pub title: &'static str,
    pub download_title: &'static str,

    // Navigation bar
    pub nav_download: &'static str,
    pub nav_about: &'static str,
    pub language_toggle: &'static str,
    pub back_to_home: &'static str,

    // Logo / poster
    pub subtitle: &'static str,
    pub poster_alt: &'static str,

    // Landing download section
    pub download_section_title: &'static str,
    pub steps_title: &'static str,
    pub step_1: &'static str,
    pub step_2: &'static str,
    pub download_btn_1: &'static str,
    pub download_btn_2: &'static str,
    pub download_btn_3: &'static str,

    // Download page
    pub download_page_title: &'static str,
    pub download_page_subtitle: &'static str,
    pub windows_version: &'static str,
    pub windows_compatible: &'static str,
    pub mac_version: &'static str,
    pub mac_compatible: &'static str,
    pub file_size: &'static str,
    pub version_label: &'static str,
    pub download_for_windows: &'static str,
    pub download_for_mac: &'static str,
    pub installation_instructions: &'static str,
    pub step_1_title: &'static str,
    pub step_2_title: &'static str,
    pub step_3_title: &'static str,
    pub step_4_title: &'static str,
    pub step_1_desc: &'static str,
    pub step_2_desc: &'static str,
    pub step_3_desc: &'static str,
    pub step_4_desc: &'static str,

    // Warnings
    pub warning_title: &'static str,
    pub warning_1: &'static str,
    pub warning_2: &'static str,
    pub warning_3: &'static str,
    pub warning_4: &'static str,
    pub warning_5: &'static str,

    // Footer
    pub footer: &'static str,

    // Tutorial page
    pub tutorial_title: &'static str,
    pub launcher_error_title: &'static str,
    pub modpack_video_title: &'static str,
    pub skin_video_title: &'static str,
    pub video_description: &'static str,
    pub video_instructions: &'static str,
    pub modpack_instruction_1: &'static str,
    pub modpack_instruction_2: &'static str,
    pub modpack_instruction_3: &'static str,
    pub modpack_instruction_4: &'static str,
    pub skin_instruction_1: &'static str,
    pub skin_instruction_2: &'static str,
    pub skin_instruction_3: &'static str,
    pub skin_instruction_4: &'static str,
}

/// Names one field of [`TextPack`], so bindings and tests can enumerate the
/// table without string keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextField {
    HtmlLang,
    Title,
    DownloadTitle,
    NavDownload,
    NavAbout,
    LanguageToggle,
    BackToHome,
    Subtitle,
    PosterAlt,
    DownloadSectionTitle,
    StepsTitle,
    Step1,
    Step2,
    DownloadBtn1,
    DownloadBtn2,
    DownloadBtn3,
    DownloadPageTitle,
    DownloadPageSubtitle,
    WindowsVersion,
    WindowsCompatible,
    MacVersion,
    MacCompatible,
    FileSize,
    VersionLabel,
    DownloadForWindows,
    DownloadForMac,
    InstallationInstructions,
    Step1Title,
    Step2Title,
    Step3Title,
    Step4Title,
    Step1Desc,
    Step2Desc,
    Step3Desc,
    Step4Desc,
    WarningTitle,
    Warning1,
    Warning2,
    Warning3,
    Warning4,
    Warning5,
    Footer,
    TutorialTitle,
    LauncherErrorTitle,
    ModpackVideoTitle,
    SkinVideoTitle,
    VideoDescription,
    VideoInstructions,
    ModpackInstruction1,
    ModpackInstruction2,
    ModpackInstruction3,
    ModpackInstruction4,
    SkinInstruction1,
    SkinInstruction2,
    SkinInstruction3,
    SkinInstruction4,
}

impl TextField {
    pub const ALL: &'static [TextField] = &[
        TextField::HtmlLang,
        TextField::Title,
        TextField::DownloadTitle,
        TextField::NavDownload,
        TextField::NavAbout,
        TextField::LanguageToggle,
        TextField::BackToHome,
        TextField::Subtitle,
        TextField::PosterAlt,
        TextField::DownloadSectionTitle,
        TextField::StepsTitle,
        TextField::Step1,
        TextField::Step2,
        TextField::DownloadBtn1,
        TextField::DownloadBtn2,
        TextField::DownloadBtn3,
        TextField::DownloadPageTitle,
        TextField::DownloadPageSubtitle,
        TextField::WindowsVersion,
        TextField::WindowsCompatible,
        TextField::MacVersion,
        TextField::MacCompatible,
        TextField::FileSize,
        TextField::VersionLabel,
        TextField::DownloadForWindows,
        TextField::DownloadForMac,
        TextField::InstallationInstructions,
        TextField::Step1Title,
        TextField::Step2Title,
        TextField::Step3Title,
        TextField::Step4Title,
        TextField::Step1Desc,
        TextField::Step2Desc,
        TextField::Step3Desc,
        TextField::Step4Desc,
        TextField::WarningTitle,
        TextField::Warning1,
        TextField::Warning2,
        TextField::Warning3,
        TextField::Warning4,
        TextField::Warning5,
        TextField::Footer,
        TextField::TutorialTitle,
        TextField::LauncherErrorTitle,
        TextField::ModpackVideoTitle,
        TextField::SkinVideoTitle,
        TextField::VideoDescription,
        TextField::VideoInstructions,
        TextField::ModpackInstruction1,
        TextField::ModpackInstruction2,
        TextField::ModpackInstruction3,
        TextField::ModpackInstruction4,
        TextField::SkinInstruction1,
        TextField::SkinInstruction2,
        TextField::SkinInstruction3,
        TextField::SkinInstruction4,
    ];
}

impl TextPack {
    pub fn get(&self, field: TextField) -> &'static str {
        match field {
            TextField::HtmlLang => self.html_lang,
            TextField::Title => self.title,
            TextField::DownloadTitle => self.download_title,
            TextField::NavDownload => self.nav_download,
            TextField::NavAbout => self.nav_about,
            TextField::LanguageToggle => self.language_toggle,
            TextField::BackToHome => self.back_to_home,
            TextField::Subtitle => self.subtitle,
            TextField::PosterAlt => self.poster_alt,
            TextField::DownloadSectionTitle => self.download_section_title,
            TextField::StepsTitle => self.steps_title,
            TextField::Step1 => self.step_1,
            TextField::Step2 => self.step_2,
            TextField::DownloadBtn1 => self.download_btn_1,
            TextField::DownloadBtn2 => self.download_btn_2,
            TextField::DownloadBtn3 => self.download_btn_3,
            TextField::DownloadPageTitle => self.download_page_title,
            TextField::DownloadPageSubtitle => self.download_page_subtitle,
            TextField::WindowsVersion => self.windows_version,
            TextField::WindowsCompatible => self.windows_compatible,
            TextField::MacVersion => self.mac_version,
            TextField::MacCompatible => self.mac_compatible,
            TextField::FileSize => self.file_size,
            TextField::VersionLabel => self.version_label,
            TextField::DownloadForWindows => self.download_for_windows,
            TextField::DownloadForMac => self.download_for_mac,
            TextField::InstallationInstructions => self.installation_instructions,
            TextField::Step1Title => self.step_1_title,
            TextField::Step2Title => self.step_2_title,
            TextField::Step3Title => self.step_3_title,
            TextField::Step4Title => self.step_4_title,
            TextField::Step1Desc => self.step_1_desc,
            TextField::Step2Desc => self.step_2_desc,
            TextField::Step3Desc => self.step_3_desc,
            TextField::Step4Desc => self.step_4_desc,
            TextField::WarningTitle => self.warning_title,
            TextField::Warning1 => self.warning_1,
            TextField::Warning2 => self.warning_2,
            TextField::Warning3 => self.warning_3,
            TextField::Warning4 => self.warning_4,
            TextField::Warning5 => self.warning_5,
            TextField::Footer => self.footer,
            TextField::TutorialTitle => self.tutorial_title,
            TextField::LauncherErrorTitle => self.launcher_error_title,
            TextField::ModpackVideoTitle => self.modpack_video_title,
            TextField::SkinVideoTitle => self.skin_video_title,
            TextField::VideoDescription => self.video_description,
            TextField::VideoInstructions => self.video_instructions,
            TextField::ModpackInstruction1 => self.modpack_instruction_1,
            TextField::ModpackInstruction2 => self.modpack_instruction_2,
            TextField::ModpackInstruction3 => self.modpack_instruction_3,
            TextField::ModpackInstruction4 => self.modpack_instruction_4,
            TextField::SkinInstruction1 => self.skin_instruction_1,
            TextField::SkinInstruction2 => self.skin_instruction_2,
            TextField::SkinInstruction3 => self.skin_instruction_3,
            TextField::SkinInstruction4 => self.skin_instruction_4,
        }
    }
}

/// How a field reaches the page. The selectors are the stable hooks the host
/// pages provide (ids, classes, attribute-qualified nav links).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// Text content of the first match of a CSS selector.
    Text(&'static str),
    /// Text content of the Nth match of a CSS selector.
    TextAt(&'static str, usize),
    /// `alt` attribute of the first match.
    Alt(&'static str),
}

/// The whole field-to-target map, declared once. Page title and document
/// language are handled separately in [`LocaleEngine::render`] because the
/// title depends on the route. Fields without a DOM hook (`FileSize`,
/// `VersionLabel`, `DownloadPageSubtitle`) are carried in the table but not
/// bound, matching the pages as they exist today.
pub const BINDINGS: &[(TextField, Binding)] = &[
    (TextField::NavDownload, Binding::Text(".nav-link[href='#download']")),
    (TextField::NavAbout, Binding::Text(".nav-link[href='#about']")),
    (TextField::BackToHome, Binding::Text(".nav-link[href$='index.html']")),
    (TextField::LanguageToggle, Binding::Text("#language-toggle")),
    (TextField::Subtitle, Binding::Text(".subtitle")),
    (TextField::PosterAlt, Binding::Alt(".poster")),
    (TextField::DownloadSectionTitle, Binding::Text("#download h2")),
    (TextField::StepsTitle, Binding::Text("#download h3")),
    (TextField::Step1, Binding::TextAt("#download li", 0)),
    (TextField::Step2, Binding::TextAt("#download li", 1)),
    (TextField::DownloadBtn1, Binding::TextAt(".download-btn", 0)),
    (TextField::DownloadBtn2, Binding::TextAt(".download-btn", 1)),
    (TextField::DownloadBtn3, Binding::TextAt(".download-btn", 2)),
    (TextField::DownloadPageTitle, Binding::Text(".download-page-title")),
    (TextField::WindowsVersion, Binding::Text(".windows-version")),
    (TextField::WindowsCompatible, Binding::Text(".windows-compatible")),
    (TextField::MacVersion, Binding::Text(".mac-version")),
    (TextField::MacCompatible, Binding::Text(".mac-compatible")),
    (TextField::DownloadForWindows, Binding::Text(".download-windows-btn")),
    (TextField::DownloadForMac, Binding::Text(".download-mac-btn")),
    (
        TextField::InstallationInstructions,
        Binding::Text(".installation-instructions"),
    ),
    (TextField::Step1Title, Binding::TextAt(".step-title", 0)),
    (TextField::Step2Title, Binding::TextAt(".step-title", 1)),
    (TextField::Step3Title, Binding::TextAt(".step-title", 2)),
    (TextField::Step4Title, Binding::TextAt(".step-title", 3)),
    (TextField::Step1Desc, Binding::TextAt(".step-desc", 0)),
    (TextField::Step2Desc, Binding::TextAt(".step-desc", 1)),
    (TextField::Step3Desc, Binding::TextAt(".step-desc", 2)),
    (TextField::Step4Desc, Binding::TextAt(".step-desc", 3)),
    (TextField::WarningTitle, Binding::Text("#about h3")),
    (TextField::Warning1, Binding::TextAt("#about li", 0)),
    (TextField::Warning2, Binding::TextAt("#about li", 1)),
    (TextField::Warning3, Binding::TextAt("#about li", 2)),
    (TextField::Warning4, Binding::TextAt("#about li", 3)),
    (TextField::Warning5, Binding::TextAt("#about li", 4)),
    (TextField::Footer, Binding::Text(".footer p")),
    (TextField::TutorialTitle, Binding::Text(".tutorial-main-title")),
    (TextField::LauncherErrorTitle, Binding::Text(".launcher-error-title")),
    (TextField::ModpackVideoTitle, Binding::Text(".modpack-video-title")),
    (TextField::SkinVideoTitle, Binding::Text(".skin-video-title")),
    (TextField::VideoDescription, Binding::TextAt(".video-description", 0)),
    (TextField::VideoDescription, Binding::TextAt(".video-description", 1)),
    (TextField::VideoInstructions, Binding::TextAt(".video-instructions", 0)),
    (TextField::VideoInstructions, Binding::TextAt(".video-instructions", 1)),
    (TextField::VideoInstructions, Binding::TextAt(".video-instructions", 2)),
    (TextField::ModpackInstruction1, Binding::TextAt(".instruction-item", 0)),
    (TextField::ModpackInstruction2, Binding::TextAt(".instruction-item", 1)),
    (TextField::ModpackInstruction3, Binding::TextAt(".instruction-item", 2)),
    (TextField::ModpackInstruction4, Binding::TextAt(".instruction-item", 3)),
    (TextField::SkinInstruction1, Binding::TextAt(".instruction-item", 4)),
    (TextField::SkinInstruction2, Binding::TextAt(".instruction-item", 5)),
    (TextField::SkinInstruction3, Binding::TextAt(".instruction-item", 6)),
    (TextField::SkinInstruction4, Binding::TextAt(".instruction-item", 7)),
];

/// Where rendered strings land. The wasm implementation writes the live DOM;
/// tests substitute a recording sink. Implementations apply what exists and
/// ignore the rest — a missing target is never an error.
pub trait TextSink {
    fn set_text(&mut self, selector: &'static str, index: usize, text: &str);
    fn set_alt(&mut self, selector: &'static str, text: &str);
    fn set_title(&mut self, text: &str);
    fn set_lang(&mut self, tag: &str);
}

/// Owns the active locale and re-renders the page through a [`TextSink`] on
/// every change. Instantiable per test; the page gets exactly one.
#[derive(Debug)]
pub struct LocaleEngine {
    active: Locale,
    route: Route,
}

impl LocaleEngine {
    pub fn new(route: Route) -> Self {
        Self {
            active: Locale::Zh,
            route,
        }
    }

    pub fn current(&self) -> Locale {
        self.active
    }

    pub fn set_locale(&mut self, locale: Locale, sink: &mut impl TextSink) {
        self.active = locale;
        self.render(sink);
    }

    pub fn toggle(&mut self, sink: &mut impl TextSink) -> Locale {
        self.set_locale(self.active.other(), sink);
        self.active
    }

    /// Re-render every bound target from the active locale's table. Title and
    /// document language are written unconditionally; the download page gets
    /// its own title.
    pub fn render(&self, sink: &mut impl TextSink) {
        let pack = self.active.texts();
        sink.set_lang(pack.html_lang);
        sink.set_title(match self.route {
            Route::Download => pack.download_title,
            _ => pack.title,
        });
        for &(field, binding) in BINDINGS {
            let text = pack.get(field);
            match binding {
                Binding::Text(sel) => sink.set_text(sel, 0, text),
                Binding::TextAt(sel, index) => sink.set_text(sel, index, text),
                Binding::Alt(sel) => sink.set_alt(sel, text),
            }
        }
    }
}

// --- WASM glue ---------------------------------------------------------------

thread_local! {
    static ENGINE: RefCell<Option<LocaleEngine>> = const { RefCell::new(None) };
}

/// Sink that writes the live document. Stateless; every call re-resolves its
/// target so the sink stays correct if the page mutates between renders.
struct DomSink;

impl TextSink for DomSink {
    fn set_text(&mut self, selector: &'static str, index: usize, text: &str) {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(nodes) = doc.query_selector_all(selector) {
            if let Some(node) = nodes.get(index as u32) {
                node.set_text_content(Some(text));
            }
        }
    }

    fn set_alt(&mut self, selector: &'static str, text: &str) {
        let Some(doc) = window().and_then(|w| w.document()) else {
            return;
        };
        if let Ok(Some(el)) = doc.query_selector(selector) {
            el.set_attribute("alt", text).ok();
        }
    }

    fn set_title(&mut self, text: &str) {
        if let Some(doc) = window().and_then(|w| w.document()) {
            doc.set_title(text);
        }
    }

    fn set_lang(&mut self, tag: &str) {
        if let Some(root) = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            root.set_attribute("lang", tag).ok();
        }
    }
}

/// Render the default locale and hook the toggle button.
pub(crate) fn install(route: Route) -> Result<(), JsValue> {
    let doc = window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let mut engine = LocaleEngine::new(route);
    engine.render(&mut DomSink);
    ENGINE.with(|cell| cell.replace(Some(engine)));

    if let Some(btn) = doc.get_element_by_id("language-toggle") {
        let closure = Closure::wrap(Box::new(move || {
            ENGINE.with(|cell| {
                if let Some(engine) = cell.borrow_mut().as_mut() {
                    engine.toggle(&mut DomSink);
                }
            });
        }) as Box<dyn FnMut()>);
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}
