//! Sidebar lifecycle: load, render, highlight, degrade.

use log::{error, info, warn};

use crate::config::{MenuConfiguration, MenuItem, NavSettings};
use crate::container::MenuContainer;
use crate::error::NavError;
use crate::markup;
use crate::source::ConfigSource;

/// Which menu ended up on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuSource {
    /// Built from the fetched configuration.
    Configured,
    /// The hardcoded three-link menu.
    Fallback,
}

/// Result of a render attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered { links: usize },
    /// The page has no render target. Not an error: some pages omit the menu.
    ContainerMissing,
}

/// Returns the file name part of a location path.
///
/// `/admin/clientes.html` gives `clientes.html`; a path ending in `/` gives
/// an empty name, which matches no link.
pub fn page_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Renders the admin sidebar into a container.
///
/// Built once per page:
///
/// ```rust,ignore
/// let mut renderer = MenuRenderer::new(source, container, "/admin/clientes.html");
/// renderer.initialize().await;
/// ```
///
/// `container` is `None` when the page has no element with the configured
/// id; every render step is then a no-op.
pub struct MenuRenderer<S, C> {
    source: S,
    container: Option<C>,
    settings: NavSettings,
    current_page: String,
    config: Option<MenuConfiguration>,
}

impl<S: ConfigSource, C: MenuContainer> MenuRenderer<S, C> {
    pub fn new(source: S, container: Option<C>, location_path: &str) -> Self {
        Self {
            source,
            container,
            settings: NavSettings::default(),
            current_page: page_name(location_path).to_string(),
            config: None,
        }
    }

    pub fn with_settings(mut self, settings: NavSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn settings(&self) -> &NavSettings {
        &self.settings
    }

    /// File name of the page being displayed.
    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    /// The configuration loaded by [`initialize`](Self::initialize), if any.
    pub fn configuration(&self) -> Option<&MenuConfiguration> {
        self.config.as_ref()
    }

    pub fn container(&self) -> Option<&C> {
        self.container.as_ref()
    }

    pub fn into_container(self) -> Option<C> {
        self.container
    }

    /// Loads the configuration and renders it, or the fallback menu if
    /// loading fails. Never fails itself.
    pub async fn initialize(&mut self) -> MenuSource {
        match self.load_configuration().await {
            Ok(config) => {
                self.render(&config.menu_items);
                self.set_active_page();
                self.config = Some(config);
                MenuSource::Configured
            }
            Err(err) => {
                error!("Failed to initialize navigation menu: {}", err);
                self.render_fallback();
                MenuSource::Fallback
            }
        }
    }

    /// Fetches and parses the menu definition.
    ///
    /// Items are returned as found; nothing checks that required fields are
    /// present.
    pub async fn load_configuration(&self) -> Result<MenuConfiguration, NavError> {
        let url = self.settings.config_url.as_str();

        let result = async {
            let response = self.source.fetch(url).await?;
            if !response.is_success() {
                return Err(NavError::HttpStatus {
                    status: response.status,
                    status_text: response.status_text,
                });
            }
            MenuConfiguration::from_json(&response.body)
        }
        .await;

        match &result {
            Ok(config) => info!("Menu configuration loaded: {} items", config.len()),
            Err(err) => error!("Error loading {}: {}", url, err),
        }

        result
    }

    /// Writes the sorted menu into the container.
    pub fn render(&mut self, items: &[MenuItem]) -> RenderOutcome {
        let Some(container) = self.container.as_mut() else {
            self.warn_missing_container();
            return RenderOutcome::ContainerMissing;
        };

        let html = markup::render_menu(items, &self.settings.link_class);
        container.replace_content(&html);

        info!("Menu rendered with {} items", items.len());
        RenderOutcome::Rendered { links: items.len() }
    }

    /// Marks every link pointing at the current page as active.
    ///
    /// Returns how many links were marked; zero and several are both fine.
    pub fn set_active_page(&mut self) -> usize {
        let Some(container) = self.container.as_mut() else {
            return 0;
        };

        let link_class = &self.settings.link_class;
        let mut marked = 0;
        for (index, href) in container.nav_link_hrefs(link_class).into_iter().enumerate() {
            if href.as_deref() == Some(self.current_page.as_str()) {
                container.add_link_class(link_class, index, &self.settings.active_class);
                info!("Active page: {}", self.current_page);
                marked += 1;
            }
        }
        marked
    }

    /// Writes the hardcoded menu and highlights the current page in it.
    pub fn render_fallback(&mut self) -> RenderOutcome {
        warn!("Using fallback menu");

        let Some(container) = self.container.as_mut() else {
            self.warn_missing_container();
            return RenderOutcome::ContainerMissing;
        };

        container.replace_content(&markup::render_fallback(&self.settings.link_class));
        self.set_active_page();

        RenderOutcome::Rendered {
            links: markup::FALLBACK_LINKS.len(),
        }
    }

    fn warn_missing_container(&self) {
        warn!(
            "No element with id=\"{}\", menu not rendered",
            self.settings.container_id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_name() {
        assert_eq!(page_name("/admin/clientes.html"), "clientes.html");
        assert_eq!(page_name("index.html"), "index.html");
        assert_eq!(page_name("/admin/"), "");
        assert_eq!(page_name(""), "");
    }
}
