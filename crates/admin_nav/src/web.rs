//! Browser bindings: DOM container, `fetch` source and the JS entry points.

use async_trait::async_trait;
use log::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Response};

use crate::config::NavSettings;
use crate::container::MenuContainer;
use crate::error::NavError;
use crate::renderer::{MenuRenderer, MenuSource};
use crate::source::{ConfigSource, HttpResponse};

/// A page element used as the menu container.
#[derive(Clone, Debug)]
pub struct DomContainer {
    element: Element,
}

impl DomContainer {
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Looks the container up by id; `None` if the page has no such element.
    pub fn find(document: &Document, id: &str) -> Option<Self> {
        document.get_element_by_id(id).map(Self::new)
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn links(&self, link_class: &str) -> Vec<Element> {
        let Ok(nodes) = self.element.query_selector_all(&format!(".{link_class}")) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }
}

impl MenuContainer for DomContainer {
    fn replace_content(&mut self, markup: &str) {
        self.element.set_inner_html(markup);
    }

    fn nav_link_hrefs(&self, link_class: &str) -> Vec<Option<String>> {
        self.links(link_class)
            .iter()
            .map(|link| link.get_attribute("href"))
            .collect()
    }

    fn add_link_class(&mut self, link_class: &str, index: usize, class: &str) {
        if let Some(link) = self.links(link_class).get(index) {
            if let Err(e) = link.class_list().add_1(class) {
                error!("Failed to add class '{}': {:?}", class, e);
            }
        }
    }
}

/// [`ConfigSource`] using `window.fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FetchSource;

#[async_trait(?Send)]
impl ConfigSource for FetchSource {
    async fn fetch(&self, url: &str) -> Result<HttpResponse, NavError> {
        let transport = |e: JsValue| NavError::Transport {
            url: url.to_string(),
            message: format!("{:?}", e),
        };

        let window = web_sys::window().ok_or_else(|| transport(JsValue::from_str("no window")))?;
        let response: Response = JsFuture::from(window.fetch_with_str(url))
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;

        let body = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse {
            status: response.status(),
            status_text: response.status_text(),
            body,
        })
    }
}

/// Builds a renderer for the current page.
pub fn page_renderer(settings: NavSettings) -> MenuRenderer<FetchSource, DomContainer> {
    let window = web_sys::window();
    let container = window
        .as_ref()
        .and_then(|w| w.document())
        .and_then(|doc| DomContainer::find(&doc, &settings.container_id));
    let path = window
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();

    MenuRenderer::new(FetchSource, container, &path).with_settings(settings)
}

/// Renders the sidebar of the current page.
pub async fn run(settings: NavSettings) -> MenuSource {
    page_renderer(settings).initialize().await
}

/// JS-facing handle, for pages that drive the menu from their own scripts.
///
/// ```javascript,ignore
/// import init, { AdminNavigation } from './admin_nav.js';
/// await init();
/// const nav = new AdminNavigation();
/// nav.configUrl = '/admin/menu.json';
/// await nav.init();
/// ```
#[wasm_bindgen(js_name = AdminNavigation)]
pub struct AdminNavigation {
    settings: NavSettings,
}

#[wasm_bindgen(js_class = AdminNavigation)]
impl AdminNavigation {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            settings: NavSettings::default(),
        }
    }

    #[wasm_bindgen(getter, js_name = configUrl)]
    pub fn config_url(&self) -> String {
        self.settings.config_url.clone()
    }

    #[wasm_bindgen(setter, js_name = configUrl)]
    pub fn set_config_url(&mut self, url: String) {
        self.settings.config_url = url;
    }

    #[wasm_bindgen(getter, js_name = containerId)]
    pub fn container_id(&self) -> String {
        self.settings.container_id.clone()
    }

    #[wasm_bindgen(setter, js_name = containerId)]
    pub fn set_container_id(&mut self, id: String) {
        self.settings.container_id = id;
    }

    /// Renders the menu. Resolves to `true` if the fallback menu was used.
    pub fn init(&self) -> js_sys::Promise {
        let settings = self.settings.clone();
        wasm_bindgen_futures::future_to_promise(async move {
            let source = run(settings).await;
            Ok(JsValue::from_bool(source == MenuSource::Fallback))
        })
    }
}

impl Default for AdminNavigation {
    fn default() -> Self {
        Self::new()
    }
}

/// Module entry point: renders the menu once the document is parsed.
#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let launch = || {
        wasm_bindgen_futures::spawn_local(async {
            run(NavSettings::default()).await;
        })
    };

    if document.ready_state() != "loading" {
        log::info!("Document already parsed, rendering navigation menu");
        launch();
        return;
    }

    let on_ready: Closure<dyn FnMut(web_sys::Event)> =
        Closure::once(move |_: web_sys::Event| launch());
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        error!("Failed to register DOMContentLoaded handler: {:?}", e);
        return;
    }
    on_ready.forget();
}
