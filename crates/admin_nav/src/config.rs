//! Menu definition document and renderer settings.

use serde::{Deserialize, Serialize};

use crate::error::NavError;

/// Relative location of the menu definition, resolved against the page URL.
pub const DEFAULT_CONFIG_URL: &str = "assets/js/menu-config.json";
/// Id of the element the menu is rendered into.
pub const DEFAULT_CONTAINER_ID: &str = "admin-sidebar";
/// Class carried by every rendered navigation link.
pub const DEFAULT_LINK_CLASS: &str = "nav-item";
/// Class added to the link that matches the current page.
pub const DEFAULT_ACTIVE_CLASS: &str = "active";

/// One entry of the sidebar.
///
/// Fields are not validated. A missing string field deserializes as empty
/// and a missing `order` as `0`, so an incomplete entry still renders.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuItem {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    /// Link target, also the key compared against the current page name.
    #[serde(default)]
    pub url: String,
    /// Bootstrap Icons class, e.g. `bi-people`.
    #[serde(default)]
    pub icon: String,
    /// Ascending sort key. Duplicates keep their document order.
    #[serde(default)]
    pub order: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl MenuItem {
    /// Returns the badge text when there is something to show.
    pub fn badge_text(&self) -> Option<&str> {
        self.badge.as_deref().filter(|badge| !badge.is_empty())
    }
}

/// The whole menu definition document.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuConfiguration {
    #[serde(rename = "menuItems")]
    pub menu_items: Vec<MenuItem>,
}

impl MenuConfiguration {
    /// Parses a menu definition. Fails when the body is not JSON or has no
    /// `menuItems` array.
    pub fn from_json(body: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn len(&self) -> usize {
        self.menu_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.menu_items.is_empty()
    }
}

/// Settings for a [`MenuRenderer`](crate::MenuRenderer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavSettings {
    /// Where the menu definition is fetched from.
    ///
    /// ## Default
    /// `assets/js/menu-config.json`, relative to the current page
    pub config_url: String,
    /// Id of the render target element (default: `admin-sidebar`)
    pub container_id: String,
    /// Class of every rendered link, also used to find links when marking
    /// the active one (default: `nav-item`)
    pub link_class: String,
    /// Class added to links matching the current page (default: `active`)
    pub active_class: String,
}

impl Default for NavSettings {
    fn default() -> Self {
        Self {
            config_url: DEFAULT_CONFIG_URL.to_string(),
            container_id: DEFAULT_CONTAINER_ID.to_string(),
            link_class: DEFAULT_LINK_CLASS.to_string(),
            active_class: DEFAULT_ACTIVE_CLASS.to_string(),
        }
    }
}

impl NavSettings {
    pub fn with_config_url(mut self, url: impl Into<String>) -> Self {
        self.config_url = url.into();
        self
    }

    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = id.into();
        self
    }

    pub fn with_link_class(mut self, class: impl Into<String>) -> Self {
        self.link_class = class.into();
        self
    }

    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }
}
