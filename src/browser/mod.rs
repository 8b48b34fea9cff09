//! Browser entry point and JS exports.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered server-side; this module attaches behavior to the
//! markup once the document is parsed. Every routine is independent: one
//! failing is logged and the others still run.

mod bootstrap;
mod dom;
mod page;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::config::{CONFIG_ELEMENT_ID, UiConfig};
use crate::error::UiError;
use crate::footer::LOAD_BANNER;
use crate::money::{self, DEFAULT_CURRENCY};

/// Global object other page scripts read the formatters from.
const GLOBAL_NAME: &str = "financasweb";

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, config_err) = match read_config(&document) {
        Ok(config) => (config, None),
        Err(err) => (UiConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.log_level()) {
        log::debug!("logger already installed: {err}");
    }
    if let Some(err) = config_err {
        log::warn!("config: {err}, using defaults");
    }

    if let Err(err) = install_global(&window) {
        log::warn!("exports: failed to install window.{GLOBAL_NAME}: {err}");
    }

    if document.ready_state() == "loading" {
        let doc = document.clone();
        let cb = Closure::once(move || hydrate_page(&window, &doc, &config));
        if let Err(err) = document.add_event_listener_with_callback("DOMContentLoaded", cb.as_ref().unchecked_ref()) {
            log::warn!("start: cannot wait for DOMContentLoaded: {err:?}");
            return;
        }
        cb.forget();
    } else {
        hydrate_page(&window, &document, &config);
    }
}

fn read_config(document: &Document) -> Result<UiConfig, UiError> {
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .unwrap_or_default();
    UiConfig::from_json(&raw)
}

/// Run the widget bootstrapper and the footer stamper.
fn hydrate_page(window: &Window, document: &Document, config: &UiConfig) {
    let steps: [(&str, Result<(), UiError>); 8] = [
        ("widgets", page::init_widgets(document, config)),
        ("alerts", page::init_alerts(document, config)),
        ("confirm", page::init_confirmations(window, document, config)),
        ("money", page::init_money_inputs(document, config)),
        ("nav", page::init_nav(window, document, config)),
        ("theme", page::init_theme(document, config)),
        ("filters", page::init_filters(document, config)),
        ("footer", page::stamp_footer(document, config)),
    ];
    for (name, result) in steps {
        if let Err(err) = result {
            log::warn!("{name}: {err}");
        }
    }
    log::info!("{LOAD_BANNER}");
}

fn format_money_js(value: f64, currency: Option<String>) -> Result<String, JsValue> {
    money::format_money(value, currency.as_deref().unwrap_or(DEFAULT_CURRENCY))
        .map_err(|err| js_sys::RangeError::new(&err.to_string()).into())
}

/// Format an amount as pt-BR currency. Throws `RangeError` on a bad code.
#[wasm_bindgen(js_name = formatMoney)]
pub fn format_money(value: f64, currency: Option<String>) -> Result<String, JsValue> {
    format_money_js(value, currency)
}

/// Format an amount in Brazilian reais.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(value: f64) -> String {
    money::format_currency(value)
}

/// Expose `window.financasweb = { formatMoney, formatCurrency }`.
fn install_global(window: &Window) -> Result<(), UiError> {
    let api = js_sys::Object::new();

    let format_money = Closure::wrap(Box::new(|value: f64, currency: JsValue| -> JsValue {
        match format_money_js(value, currency.as_string()) {
            Ok(text) => JsValue::from_str(&text),
            Err(err) => wasm_bindgen::throw_val(err),
        }
    }) as Box<dyn Fn(f64, JsValue) -> JsValue>);
    js_sys::Reflect::set(&api, &JsValue::from_str("formatMoney"), format_money.as_ref())?;
    format_money.forget();

    let format_currency = Closure::wrap(Box::new(|value: f64| -> JsValue {
        JsValue::from_str(&money::format_currency(value))
    }) as Box<dyn Fn(f64) -> JsValue>);
    js_sys::Reflect::set(&api, &JsValue::from_str("formatCurrency"), format_currency.as_ref())?;
    format_currency.forget();

    js_sys::Reflect::set(window, &JsValue::from_str(GLOBAL_NAME), &api)?;
    Ok(())
}
