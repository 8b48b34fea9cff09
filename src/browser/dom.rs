//! web-sys glue: element queries, listener registration, and the DOM-backed
//! [`Surface`].

use std::collections::HashMap;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event};

use crate::error::UiError;
use crate::render::{Surface, Target};

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, UiError> {
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        let Some(node) = list.item(i) else {
            continue;
        };
        if let Ok(el) = node.dyn_into::<Element>() {
            out.push(el);
        }
    }
    Ok(out)
}

/// Attach `handler` to `event` on `el` for the lifetime of the page.
pub fn listen<F>(el: &Element, event: &str, handler: F) -> Result<(), UiError>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    el.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Resolves [`Target`]s to bound elements. Unbound targets are no-ops.
#[derive(Default)]
pub struct DomSurface {
    elements: HashMap<Target, Element>,
}

impl DomSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, target: Target, el: Element) {
        self.elements.insert(target, el);
    }
}

impl Surface for DomSurface {
    fn set_class(&mut self, target: Target, class: &str, on: bool) -> Result<(), UiError> {
        let Some(el) = self.elements.get(&target) else {
            return Ok(());
        };
        let list = el.class_list();
        if on {
            list.add_1(class)?;
        } else {
            list.remove_1(class)?;
        }
        Ok(())
    }

    fn set_text(&mut self, target: Target, text: &str) -> Result<(), UiError> {
        if let Some(el) = self.elements.get(&target) {
            el.set_text_content(Some(text));
        }
        Ok(())
    }
}
