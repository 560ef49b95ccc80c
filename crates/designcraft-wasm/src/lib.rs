//! WebAssembly bindings for the DesignCraft generation engine.
//!
//! This crate provides the JavaScript API the browser UI talks to: prompt
//! generation with simulated processing latency, style/tab selection for
//! the code panel, preview markup, suggestion filtering, and the
//! `localStorage`-backed archive.
//!
//! ## Example
//!
//! ```js
//! import { DesignCraftEngine } from 'designcraft-engine';
//!
//! const engine = new DesignCraftEngine();
//!
//! // Generate a component (resolves after a simulated delay)
//! const code = await engine.generate('botão flutuante verde piscando');
//!
//! // Switch the code panel
//! engine.selectStyle('utility');
//! engine.selectTab('css');
//! console.log(engine.activeCode());
//!
//! // Render the live preview
//! previewBox.innerHTML = engine.previewHtml();
//!
//! // Persist the current generation
//! engine.archiveCurrent();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use designcraft_archive::{ArchiveStore, ArchivedEntry};
use designcraft_codegen::GenerationSession;
use designcraft_core::{CodeLang, ColorPalette, StyleKind};
use designcraft_parser::suggest;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod storage;

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();
}

/// Engine state shared between the synchronous API surface and the pending
/// generation future. All access happens on the single UI thread.
struct EngineState {
    palette: ColorPalette,
    session: Option<GenerationSession>,
    archive: ArchiveStore,
    active_style: StyleKind,
    active_tab: CodeLang,
    processing: bool,
}

impl EngineState {
    fn new(archive: ArchiveStore) -> Self {
        Self {
            palette: ColorPalette::new(),
            session: None,
            archive,
            active_style: StyleKind::Semantic,
            active_tab: CodeLang::Html,
            processing: false,
        }
    }

    /// Code panel text for the active style and tab; empty before the
    /// first generation.
    fn active_code(&self) -> String {
        self.session
            .as_ref()
            .map(|session| session.code(self.active_style, self.active_tab).to_string())
            .unwrap_or_default()
    }
}

/// The main DesignCraft engine interface for JavaScript.
#[wasm_bindgen]
pub struct DesignCraftEngine {
    state: Rc<RefCell<EngineState>>,
}

#[wasm_bindgen]
impl DesignCraftEngine {
    /// Create a new engine instance, loading any archived components from
    /// `localStorage`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(EngineState::new(storage::load_archive()))),
        }
    }

    /// Get the version of the engine.
    #[wasm_bindgen(js_name = version)]
    pub fn version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }

    /// Generate a component from a prompt.
    ///
    /// Resolves with the active code panel text after a randomized
    /// 1000-2000 ms simulated processing delay. At most one generation is
    /// expected in flight; the UI should disable its trigger while
    /// `isProcessing` is true.
    #[wasm_bindgen]
    pub fn generate(&self, prompt: String) -> js_sys::Promise {
        self.state.borrow_mut().processing = true;
        let state = Rc::clone(&self.state);

        future_to_promise(async move {
            let delay_ms = (js_sys::Math::random() * 1000.0 + 1000.0) as i32;
            let _ = wasm_bindgen_futures::JsFuture::from(timeout_promise(delay_ms)).await;

            let mut state = state.borrow_mut();
            state.processing = false;
            let session = GenerationSession::generate(&prompt, &state.palette)
                .map_err(|e| JsError::new(&format!("Generation error: {e}")))?;
            state.session = Some(session);
            Ok(JsValue::from_str(&state.active_code()))
        })
    }

    /// Select the style variant shown in the code panel.
    #[wasm_bindgen(js_name = selectStyle)]
    pub fn select_style(&self, key: &str) -> Result<(), JsError> {
        let style = StyleKind::from_key(key)
            .ok_or_else(|| JsError::new(&format!("Unknown style key: {key}")))?;
        self.state.borrow_mut().active_style = style;
        Ok(())
    }

    /// Select the language tab shown in the code panel.
    #[wasm_bindgen(js_name = selectTab)]
    pub fn select_tab(&self, lang: &str) -> Result<(), JsError> {
        let tab = CodeLang::from_key(lang)
            .ok_or_else(|| JsError::new(&format!("Unknown language tab: {lang}")))?;
        self.state.borrow_mut().active_tab = tab;
        Ok(())
    }

    /// Code panel text for the active style and tab.
    #[wasm_bindgen(js_name = activeCode)]
    pub fn active_code(&self) -> String {
        self.state.borrow().active_code()
    }

    /// Preview markup: the semantic css in a `<style>` wrapper plus the
    /// semantic html. Empty before the first generation.
    #[wasm_bindgen(js_name = previewHtml)]
    pub fn preview_html(&self) -> String {
        self.state
            .borrow()
            .session
            .as_ref()
            .map(|session| session.preview_html())
            .unwrap_or_default()
    }

    /// Whether the current generation has a real utility style variant.
    /// The UI should branch on this rather than inspecting the code text.
    #[wasm_bindgen(js_name = supportsUtilityStyle)]
    pub fn supports_utility_style(&self) -> bool {
        self.state
            .borrow()
            .session
            .as_ref()
            .map(|session| session.cache().utility_supported())
            .unwrap_or(false)
    }

    /// Whether a generation is currently in flight.
    #[wasm_bindgen(getter, js_name = isProcessing)]
    pub fn is_processing(&self) -> bool {
        self.state.borrow().processing
    }

    /// Archive the current generation and rewrite the persisted payload.
    ///
    /// Always archives the semantic bundle; the utility variant is
    /// illustrative.
    #[wasm_bindgen(js_name = archiveCurrent)]
    pub fn archive_current(&self) -> Result<(), JsError> {
        let mut state = self.state.borrow_mut();

        let (prompt, codes) = match state.session.as_ref() {
            Some(session) => (
                session.prompt().to_string(),
                session.cache().semantic().clone(),
            ),
            None => return Err(JsError::new("No component generated. Call generate() first.")),
        };

        let date: String = js_sys::Date::new_0()
            .to_locale_date_string("pt-BR", &JsValue::UNDEFINED)
            .into();
        let entry = ArchivedEntry::new(js_sys::Date::now() as u64, prompt, codes, date);

        state.archive.push(entry);
        storage::persist_archive(&state.archive)
    }

    /// All archived entries in archive order.
    #[wasm_bindgen]
    pub fn archived(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.state.borrow().archive.entries())
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Number of archived entries.
    #[wasm_bindgen(js_name = archivedCount)]
    pub fn archived_count(&self) -> usize {
        self.state.borrow().archive.len()
    }

    /// Filter the suggestion list against a partial prompt input.
    #[wasm_bindgen]
    pub fn suggestions(&self, input: &str) -> Vec<String> {
        suggest(input).into_iter().map(String::from).collect()
    }
}

impl Default for DesignCraftEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// A promise resolving after `ms` milliseconds, driving the simulated
/// processing delay. Resolves immediately when no window is available.
fn timeout_promise(ms: i32) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().and_then(|window| {
            window
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .ok()
        });
        if scheduled.is_none() {
            let _ = resolve.call0(&JsValue::NULL);
        }
    })
}
