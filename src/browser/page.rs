//! Per-behavior page wiring.
//!
//! Each `init_*` function looks up its elements, returns early when they are
//! absent, and attaches listeners whose state is owned by the closures.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlTextAreaElement, Window};

use super::bootstrap::{ALERT_CLOSED_EVENT, Alert, Popover, Tooltip};
use super::dom::{DomSurface, listen, query_all};
use crate::alerts::{AlertRegistry, should_auto_dismiss};
use crate::config::UiConfig;
use crate::confirm::{Decision, confirm_message};
use crate::error::UiError;
use crate::filters::FilterPanel;
use crate::footer::{current_year, year_patch};
use crate::money::{FieldKind, format_money_input};
use crate::nav::{active_links, patches as nav_patches};
use crate::render::{self, Target};
use crate::theme::{LocalStore, ThemeToggle};

/// Tooltips and popovers for every `data-bs-toggle` trigger.
pub fn init_widgets(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    for el in query_all(document, &config.tooltip_selector)? {
        if let Err(err) = Tooltip::new(&el) {
            log::warn!("widgets: tooltip init failed, is bootstrap loaded? {err:?}");
            break;
        }
    }
    for el in query_all(document, &config.popover_selector)? {
        if let Err(err) = Popover::new(&el) {
            log::warn!("widgets: popover init failed, is bootstrap loaded? {err:?}");
            break;
        }
    }
    Ok(())
}

/// Schedule every non-persistent alert to close after the configured delay.
pub fn init_alerts(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let registry: Rc<RefCell<AlertRegistry<Timeout>>> = Rc::new(RefCell::new(AlertRegistry::new()));

    for el in query_all(document, &config.alert_selector)? {
        if !should_auto_dismiss(&el.class_name(), &config.persistent_alert_class) {
            continue;
        }
        let token = registry.borrow_mut().reserve();

        let registry_for_timer = Rc::clone(&registry);
        let el_for_timer = el.clone();
        let timeout = Timeout::new(config.alert_dismiss_ms, move || {
            let fired = registry_for_timer.borrow_mut().fire(token);
            let Some(timeout) = fired else {
                return;
            };
            // Running inside this timer's own callback; dropping it here would
            // free the closure mid-call.
            timeout.forget();
            if let Err(err) = close_alert(&el_for_timer) {
                log::warn!("alerts: auto-dismiss failed: {err}");
            }
        });
        registry.borrow_mut().arm(token, timeout);

        let registry_for_close = Rc::clone(&registry);
        listen(&el, ALERT_CLOSED_EVENT, move |_| {
            let cancelled = registry_for_close.borrow_mut().cancel(token);
            drop(cancelled);
        })?;
    }

    log::debug!("alerts: {} scheduled", registry.borrow().pending_count());
    Ok(())
}

fn close_alert(el: &Element) -> Result<(), UiError> {
    Alert::get_or_create_instance(el)?.close()?;
    Ok(())
}

/// Blocking confirm prompt on every `data-confirm` control.
pub fn init_confirmations(window: &Window, document: &Document, config: &UiConfig) -> Result<(), UiError> {
    for el in query_all(document, &config.confirm_selector())? {
        let window = window.clone();
        let el_for_click = el.clone();
        let attribute = config.confirm_attribute.clone();
        let default_message = config.confirm_message.clone();
        listen(&el, "click", move |event| {
            let attr = el_for_click.get_attribute(&attribute);
            let message = confirm_message(attr.as_deref(), &default_message);
            let decision = Decision::from_prompt(window.confirm_with_message(message));
            if decision.prevents_default() {
                event.prevent_default();
            }
        })?;
    }
    Ok(())
}

/// Value-bearing element behind a `.money-input`.
enum MoneyField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl MoneyField {
    fn from_element(el: Element) -> Option<Self> {
        // The tag name already pins the element's interface.
        let field = match FieldKind::from_tag(&el.tag_name())? {
            FieldKind::Input => Self::Input(el.unchecked_into()),
            FieldKind::TextArea => Self::TextArea(el.unchecked_into()),
        };
        Some(field)
    }

    fn value(&self) -> String {
        match self {
            Self::Input(input) => input.value(),
            Self::TextArea(area) => area.value(),
        }
    }

    fn set_value(&self, value: &str) {
        match self {
            Self::Input(input) => input.set_value(value),
            Self::TextArea(area) => area.set_value(value),
        }
    }
}

/// Reformat `.money-input` fields on every keystroke.
pub fn init_money_inputs(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    for el in query_all(document, &config.money_input_selector)? {
        let Some(field) = MoneyField::from_element(el.clone()) else {
            log::debug!("money: skipping element without a value: {}", el.tag_name());
            continue;
        };
        let empty = config.empty_amount;
        listen(&el, "input", move |_| {
            field.set_value(&format_money_input(&field.value(), empty));
        })?;
    }
    Ok(())
}

/// Mark the nav link(s) for the current path active.
pub fn init_nav(window: &Window, document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let current_path = window.location().pathname()?;
    let links = query_all(document, &config.nav_link_selector)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|link| link.get_attribute("href")).collect();
    let active = active_links(&current_path, &hrefs, config.nav_match);

    let mut surface = DomSurface::new();
    for (i, link) in links.into_iter().enumerate() {
        surface.bind(Target::NavLink(i), link);
    }
    render::apply(&mut surface, &nav_patches(&active, &config.active_class))
}

struct ThemeController {
    toggle: ThemeToggle,
    store: LocalStore,
    surface: DomSurface,
}

/// Restore the saved theme and wire the toggler.
pub fn init_theme(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let Some(toggler) = document.get_element_by_id(&config.theme_toggler_id) else {
        return Ok(());
    };

    let mut surface = DomSurface::new();
    if let Some(body) = document.body() {
        surface.bind(Target::Body, body.into());
    }
    if let Some(icon) = toggler.query_selector("i")? {
        surface.bind(Target::ThemeIcon, icon);
    }

    let store = LocalStore::new();
    let toggle = ThemeToggle::load(&store, config);
    render::apply(&mut surface, &toggle.patches())?;

    let controller = Rc::new(RefCell::new(ThemeController { toggle, store, surface }));
    listen(&toggler, "click", move |_| {
        let mut guard = controller.borrow_mut();
        let ThemeController { toggle, store, surface } = &mut *guard;
        let patches = toggle.toggle(store);
        if let Err(err) = render::apply(surface, &patches) {
            log::warn!("theme: render failed: {err}");
        }
    })
}

/// Wire the advanced filters show/hide button.
pub fn init_filters(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let Some(button) = document.get_element_by_id(&config.filter_toggle_id) else {
        return Ok(());
    };
    let Some(panel_el) = document.get_element_by_id(&config.filter_panel_id) else {
        return Ok(());
    };

    let hidden = panel_el.class_list().contains(&config.hidden_class);
    let mut panel = FilterPanel::from_markup(hidden, config);
    let mut surface = DomSurface::new();
    surface.bind(Target::FilterPanel, panel_el);
    surface.bind(Target::FilterButton, button.clone());

    listen(&button, "click", move |_| {
        let patches = panel.toggle();
        if let Err(err) = render::apply(&mut surface, &patches) {
            log::warn!("filters: render failed: {err}");
        }
    })
}

/// Write the current year into the footer placeholder.
pub fn stamp_footer(document: &Document, config: &UiConfig) -> Result<(), UiError> {
    let Some(el) = document.get_element_by_id(&config.footer_year_id) else {
        return Ok(());
    };
    let mut surface = DomSurface::new();
    surface.bind(Target::FooterYear, el);
    render::apply(&mut surface, &[year_patch(current_year())])
}
