//! # Admin Nav
//!
//! Config-driven sidebar navigation for admin pages, compiled to WebAssembly.
//!
//! On page load the menu definition is fetched from
//! `assets/js/menu-config.json`, sorted by `order` and written into the
//! `#admin-sidebar` element. The link pointing at the current page gets the
//! `active` class. If the definition can't be loaded a hardcoded three-link
//! menu is shown instead, so the page always has navigation.
//!
//! ## Menu Definition
//!
//! ```json
//! {
//!   "menuItems": [
//!     { "id": "dashboard", "label": "Dashboard", "url": "index.html",
//!       "icon": "bi-speedometer2", "order": 1 },
//!     { "id": "tickets", "label": "Tickets", "url": "tickets.html",
//!       "icon": "bi-ticket", "order": 2, "badge": "5" }
//!   ]
//! }
//! ```
//!
//! ## Outside the Browser
//!
//! [`MenuRenderer`] is generic over where the definition comes from
//! ([`ConfigSource`]) and where the menu goes ([`MenuContainer`]), so the
//! whole lifecycle runs natively against [`StaticSource`] and
//! [`MemoryContainer`]:
//!
//! ```rust
//! use admin_nav::{MemoryContainer, MenuRenderer, MenuSource, StaticSource};
//!
//! let source = StaticSource::new().with_body(
//!     "assets/js/menu-config.json",
//!     r#"{"menuItems":[{"id":"home","label":"Home","url":"index.html","icon":"bi-house","order":1}]}"#,
//! );
//! let mut renderer = MenuRenderer::new(source, Some(MemoryContainer::new()), "/admin/index.html");
//!
//! let used = futures_lite::future::block_on(renderer.initialize());
//! assert_eq!(used, MenuSource::Configured);
//! ```

// Module declarations
mod config;
mod container;
mod error;
pub mod markup;
mod renderer;
mod source;

#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-exports
pub use config::{
    DEFAULT_ACTIVE_CLASS, DEFAULT_CONFIG_URL, DEFAULT_CONTAINER_ID, DEFAULT_LINK_CLASS,
    MenuConfiguration, MenuItem, NavSettings,
};
pub use container::{MemoryContainer, MenuContainer};
pub use error::NavError;
pub use renderer::{MenuRenderer, MenuSource, RenderOutcome, page_name};
pub use source::{ConfigSource, HttpResponse, StaticSource};

// async_trait is part of the ConfigSource signature
pub use async_trait::async_trait;
