//! Browser-only checks for the DOM container.
//!
//! Run with `wasm-pack test --headless --firefox crates/admin_nav`.

#![cfg(target_arch = "wasm32")]

use admin_nav::web::DomContainer;
use admin_nav::{MenuContainer, markup};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn detached_container() -> DomContainer {
    let document = web_sys::window().unwrap().document().unwrap();
    DomContainer::new(document.create_element("nav").unwrap())
}

#[wasm_bindgen_test]
fn test_dom_container_marks_links() {
    let mut container = detached_container();
    container.replace_content(&markup::render_fallback("nav-item"));

    let hrefs = container.nav_link_hrefs("nav-item");
    assert_eq!(hrefs.len(), 3);
    assert_eq!(hrefs[1].as_deref(), Some("clientes.html"));

    container.add_link_class("nav-item", 1, "active");
    let marked = container.element().query_selector(".active").unwrap().unwrap();
    assert_eq!(marked.get_attribute("href").as_deref(), Some("clientes.html"));
}

#[wasm_bindgen_test]
fn test_dom_container_replaces_content() {
    let mut container = detached_container();
    container.element().set_inner_html("<p>placeholder</p>");

    container.replace_content("");
    assert_eq!(container.element().inner_html(), "");
    assert!(container.nav_link_hrefs("nav-item").is_empty());
}
