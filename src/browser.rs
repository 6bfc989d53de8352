//! Browser bindings: `localStorage` store, DOM view, and the JS entry points.
//!
//! Requires a browser environment. Everything here is compiled only with the
//! `hydrate` feature; the toggle logic itself lives in [`crate::toggler`] and
//! is exercised natively through [`crate::memory`].

use wasm_bindgen::prelude::*;
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{Document, Element, Event, HtmlElement, Storage};

use crate::config::ToggleConfig;
use crate::error::ThemeError;
use crate::mount::MountSlot;
use crate::store::ThemeStore;
use crate::theme::{Icon, IconSet};
use crate::toggler::ThemeToggler;
use crate::view::ThemeView;

thread_local! {
    static MOUNT: MountSlot = const { MountSlot::new() };
}

/// Install the panic hook and console logger when the module loads.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
}

/// Bind the toggle to the stock markup (`#theme-toggle`, `body.dark-mode`,
/// storage key `theme`).
///
/// # Errors
///
/// Fails if the page is already loaded and the toggle element or body is
/// missing. When mounting is deferred to `DOMContentLoaded`, such failures
/// are logged instead. Only the first successful mount on a page binds;
/// later calls log a warning and return `Ok`.
#[wasm_bindgen]
pub fn mount() -> Result<(), JsValue> {
    schedule(ToggleConfig::default()).map_err(to_js)
}

/// Bind the toggle using a JSON [`ToggleConfig`].
///
/// # Errors
///
/// Fails on an invalid config, or as for [`mount`].
#[wasm_bindgen]
pub fn mount_with_config(config_json: &str) -> Result<(), JsValue> {
    let config = ToggleConfig::from_json(config_json).map_err(to_js)?;
    schedule(config).map_err(to_js)
}

/// Claim the page's mount slot, then attach. Repeat mounts are ignored.
fn schedule(config: ToggleConfig) -> Result<(), ThemeError> {
    if !MOUNT.with(MountSlot::claim) {
        log::warn!("theme toggle already mounted, ignoring mount on #{}", config.toggle_id);
        return Ok(());
    }
    let result = attach_when_ready(config);
    if result.is_err() {
        MOUNT.with(MountSlot::release);
    }
    result
}

/// Attach now if the DOM is parsed, otherwise once `DOMContentLoaded` fires.
fn attach_when_ready(config: ToggleConfig) -> Result<(), ThemeError> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return attach(&config);
    }

    let on_ready = Closure::once(move || {
        if let Err(e) = attach(&config) {
            MOUNT.with(MountSlot::release);
            log::error!("theme toggle mount failed: {e}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_ready.forget();
    Ok(())
}

fn attach(config: &ToggleConfig) -> Result<(), ThemeError> {
    let view = DomView::new(config)?;
    let target = view.toggle.clone();
    let store = LocalStorageStore::new(config.storage_key.clone());

    let mut toggler = ThemeToggler::new(store, view);
    let theme = toggler.initialize()?;

    // Lives for the page; the browser never runs two clicks at once.
    let on_click = Closure::wrap(Box::new(move |_: Event| {
        if let Err(e) = toggler.handle_toggle_click() {
            log::error!("theme toggle failed: {e}");
        }
    }) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(dom_err)?;
    on_click.forget();

    log::info!("theme toggle mounted on #{} ({theme})", config.toggle_id);
    Ok(())
}

/// `window.localStorage` entry under a fixed key.
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    #[must_use]
    pub fn new(key: String) -> Self {
        Self { key }
    }

    fn storage() -> Result<Storage, ThemeError> {
        let window = web_sys::window().ok_or_else(|| ThemeError::Storage("no window available".to_owned()))?;
        window
            .local_storage()
            .map_err(storage_err)?
            .ok_or_else(|| ThemeError::Storage("localStorage is disabled".to_owned()))
    }
}

impl ThemeStore for LocalStorageStore {
    fn get(&self) -> Result<Option<String>, ThemeError> {
        Self::storage()?.get_item(&self.key).map_err(storage_err)
    }

    fn set(&mut self, value: &str) -> Result<(), ThemeError> {
        Self::storage()?.set_item(&self.key, value).map_err(storage_err)
    }
}

/// `<body>` class list plus the toggle control's inner HTML.
pub struct DomView {
    body: HtmlElement,
    toggle: Element,
    dark_class: String,
    icons: IconSet,
}

impl DomView {
    /// Resolve the body and toggle element.
    ///
    /// # Errors
    ///
    /// [`ThemeError::MissingBody`] or [`ThemeError::MissingElement`] if either
    /// is absent.
    pub fn new(config: &ToggleConfig) -> Result<Self, ThemeError> {
        let document = document()?;
        let body = document.body().ok_or(ThemeError::MissingBody)?;
        let toggle = document
            .get_element_by_id(&config.toggle_id)
            .ok_or_else(|| ThemeError::MissingElement(config.toggle_id.clone()))?;
        Ok(Self {
            body,
            toggle,
            dark_class: config.dark_class.clone(),
            icons: config.icons.clone(),
        })
    }
}

impl ThemeView for DomView {
    fn add_dark(&mut self) -> Result<(), ThemeError> {
        self.body.class_list().add_1(&self.dark_class).map_err(dom_err)
    }

    fn toggle_dark(&mut self) -> Result<(), ThemeError> {
        self.body
            .class_list()
            .toggle(&self.dark_class)
            .map(|_| ())
            .map_err(dom_err)
    }

    fn is_dark(&self) -> Result<bool, ThemeError> {
        Ok(self.body.class_list().contains(&self.dark_class))
    }

    fn set_icon(&mut self, icon: Icon) -> Result<(), ThemeError> {
        self.toggle.set_inner_html(self.icons.markup(icon));
        Ok(())
    }
}

fn document() -> Result<Document, ThemeError> {
    let window = web_sys::window().ok_or(ThemeError::NoWindow)?;
    window
        .document()
        .ok_or_else(|| ThemeError::Dom("window has no document".to_owned()))
}

fn storage_err(e: JsValue) -> ThemeError {
    ThemeError::Storage(format!("{e:?}"))
}

fn dom_err(e: JsValue) -> ThemeError {
    ThemeError::Dom(format!("{e:?}"))
}

fn to_js(e: ThemeError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
