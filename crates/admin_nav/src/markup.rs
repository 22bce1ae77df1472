//! HTML fragments for the sidebar.
//!
//! Everything here is plain string building so the same output can be
//! written into a DOM element or inspected in tests.

use crate::config::MenuItem;

/// Class of the badge `<span>` rendered after a label.
pub const BADGE_CLASS: &str = "menu-badge";

/// A link of the hardcoded menu used when the configuration can't be loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallbackLink {
    pub href: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Minimal menu rendered when the configuration can't be loaded.
pub const FALLBACK_LINKS: [FallbackLink; 3] = [
    FallbackLink {
        href: "index.html",
        icon: "bi-speedometer2",
        label: "Dashboard",
    },
    FallbackLink {
        href: "clientes.html",
        icon: "bi-building",
        label: "Clientes",
    },
    FallbackLink {
        href: "configuracion.html",
        icon: "bi-sliders",
        label: "Configuración",
    },
];

/// Escapes text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Reverses [`escape`].
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Returns the items ordered by `order`, ties in document order.
pub fn sorted_items(items: &[MenuItem]) -> Vec<&MenuItem> {
    let mut sorted: Vec<&MenuItem> = items.iter().collect();
    // sort_by_key is stable
    sorted.sort_by_key(|item| item.order);
    sorted
}

/// Builds the anchor for a single item.
pub fn render_menu_item(item: &MenuItem, link_class: &str) -> String {
    let label = escape(&item.label);
    let badge = item
        .badge_text()
        .map(|badge| format!(r#" <span class="{BADGE_CLASS}">{}</span>"#, escape(badge)))
        .unwrap_or_default();

    format!(
        r#"<a href="{url}" class="{class}" data-page="{id}" title="{label}"><i class="bi {icon}"></i> {label}{badge}</a>"#,
        url = escape(&item.url),
        class = escape(link_class),
        id = escape(&item.id),
        icon = escape(&item.icon),
    )
}

/// Builds the markup for the whole menu, sorted by `order`.
pub fn render_menu(items: &[MenuItem], link_class: &str) -> String {
    sorted_items(items)
        .into_iter()
        .map(|item| render_menu_item(item, link_class))
        .collect()
}

/// Builds the markup of the hardcoded fallback menu.
pub fn render_fallback(link_class: &str) -> String {
    let class = escape(link_class);
    FALLBACK_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" class="{class}"><i class="bi {}"></i> {}</a>"#,
                link.href,
                link.icon,
                escape(link.label),
            )
        })
        .collect()
}

/// Lists the `href` of every `<a>` carrying `class`, in document order.
///
/// Only understands double-quoted attributes, which is all this module
/// emits. An anchor without `href` yields `None`.
pub fn nav_link_hrefs(markup: &str, class: &str) -> Vec<Option<String>> {
    let mut hrefs = Vec::new();
    let mut rest = markup;

    while let Some(start) = rest.find("<a") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('>') else {
            break;
        };
        let tag = &after[..end];
        rest = &after[end + 1..];

        // skip <abbr>, <article> and friends
        if !tag.starts_with(char::is_whitespace) {
            continue;
        }

        let has_class = attribute(tag, "class")
            .is_some_and(|value| value.split_whitespace().any(|c| c == class));
        if has_class {
            hrefs.push(attribute(tag, "href").map(unescape));
        }
    }

    hrefs
}

fn attribute<'a>(tag: &'a str, name: &str) -> Option<&'a str> {
    let needle = format!("{name}=\"");
    let mut offset = 0;

    while let Some(pos) = tag[offset..].find(&needle) {
        let at = offset + pos;
        let value_start = at + needle.len();
        if tag[..at].ends_with(char::is_whitespace) {
            let len = tag[value_start..].find('"')?;
            return Some(&tag[value_start..value_start + len]);
        }
        offset = value_start;
    }

    None
}
