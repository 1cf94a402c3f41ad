use web_sys::wasm_bindgen::{JsValue, closure::Closure};
use wotd_core::menu::NavStyle;

use crate::{dom, error::AppError};

/// Defines `window.openNav` and `window.closeNav` for the templates' `onclick`
/// handlers.
pub fn install() {
    for (name, open) in [("openNav", true), ("closeNav", false)] {
        if let Err(e) = expose(name, open) {
            leptos::logging::error!("Failed to install {}: {}", name, e);
        }
    }
}

fn expose(name: &str, open: bool) -> Result<(), AppError> {
    let handler = Closure::<dyn Fn()>::new(move || {
        if let Err(e) = dom::style_nav(NavStyle::new(open)) {
            leptos::logging::error!("Failed to toggle the menu: {}", e);
        }
    });
    let window = dom::window()?;
    js_sys::Reflect::set(&window, &JsValue::from_str(name), handler.as_ref())?;
    // The page holds on to the function for its whole lifetime.
    handler.forget();
    Ok(())
}
