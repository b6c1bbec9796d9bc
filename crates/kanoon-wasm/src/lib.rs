//! WASM bindings for the judgment extraction engine.
//!
//! This crate exposes the extraction pipeline to browsers and Node.js. The
//! caller fetches the raw judgment file itself and passes the text in.

use wasm_bindgen::prelude::*;

use kanoon_core::judgment::JudgmentExtractor;
use kanoon_core::models::config::FormatConfig;
use kanoon_core::{search, Citation};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract one case's body and parallel citations from raw file text.
#[wasm_bindgen]
pub fn extract_case(document: &str, anchor: &str) -> Result<JsValue, JsValue> {
    let case = kanoon_core::extract_case(document, anchor)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&case).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a citation such as "75 DLR (AD) 65".
#[wasm_bindgen]
pub fn parse_citation(input: &str) -> Result<JsValue, JsValue> {
    let citation = Citation::parse(input).map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&citation).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Derive the anchor token for a raw citation string.
#[wasm_bindgen]
pub fn derive_anchor(citation: &str) -> String {
    kanoon_core::derive_anchor(citation)
}

/// Whether a string can serve as a citation anchor.
#[wasm_bindgen]
pub fn is_valid_anchor(anchor: &str) -> bool {
    kanoon_core::is_valid_anchor(anchor)
}

/// Escaped HTML for `text` with query matches wrapped in `<mark>`.
#[wasm_bindgen]
pub fn highlight_html(text: &str, query: &str) -> String {
    search::highlight::to_html(text, query)
}

/// Judgment reader class for browser use.
#[wasm_bindgen]
pub struct JudgmentReader {
    format: FormatConfig,
    validate: bool,
}

#[wasm_bindgen]
impl JudgmentReader {
    /// Create a reader with default formatting.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            format: FormatConfig::default(),
            validate: false,
        }
    }

    /// Set the formatter configuration from a JS object
    /// (`{ terminology: [{pattern, replacement}], paragraph_style }`).
    #[wasm_bindgen]
    pub fn set_format(&mut self, config: JsValue) -> Result<(), JsValue> {
        self.format =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Also run the whole-document validation parse on each read.
    #[wasm_bindgen]
    pub fn set_validation(&mut self, validate: bool) {
        self.validate = validate;
    }

    /// Extract and format a judgment for display.
    #[wasm_bindgen]
    pub fn read(&self, document: &str, anchor: &str) -> Result<JsValue, JsValue> {
        let extractor = JudgmentExtractor::new()
            .with_format(self.format.clone())
            .with_document_validation(self.validate);

        let result = extractor
            .extract(document, anchor)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        #[derive(serde::Serialize)]
        struct ReadResult {
            body: String,
            parallel_citations: Vec<String>,
            paragraphs: Vec<String>,
            warnings: Vec<String>,
            processing_time_ms: u64,
        }

        let output = ReadResult {
            body: result.case.body,
            parallel_citations: result.case.parallel_citations,
            paragraphs: result.paragraphs,
            warnings: result.warnings,
            processing_time_ms: result.processing_time_ms,
        };

        serde_wasm_bindgen::to_value(&output).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for JudgmentReader {
    fn default() -> Self {
        Self::new()
    }
}
