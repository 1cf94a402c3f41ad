//! Thin wrappers over the browser APIs the islands need.

use chrono::{NaiveDate, NaiveDateTime};
use web_sys::wasm_bindgen::JsCast;
use wotd_core::{CardDate, Theme, menu, menu::NavStyle, theme};

use crate::error::AppError;

pub fn window() -> Result<web_sys::Window, AppError> {
    web_sys::window().ok_or_else(|| AppError::Dom("Window unavailable".into()))
}

pub fn document() -> Result<web_sys::Document, AppError> {
    window()?
        .document()
        .ok_or_else(|| AppError::Dom("Document unavailable".into()))
}

pub fn mount_point(id: &str) -> Option<web_sys::HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

pub fn text_of(id: &str) -> Option<String> {
    document().ok()?.get_element_by_id(id)?.text_content()
}

pub fn remove_by_id(id: &str) {
    if let Some(element) = document().ok().and_then(|d| d.get_element_by_id(id)) {
        element.remove();
    }
}

/// Date information of the last word card on the page, `None` if there are
/// no cards yet.
pub fn last_card_date(
    card_selector: &str,
    date_selector: &str,
) -> Result<Option<CardDate>, AppError> {
    let cards = document()?.query_selector_all(card_selector)?;
    let Some(last) = cards.length().checked_sub(1).and_then(|idx| cards.item(idx)) else {
        return Ok(None);
    };
    let last = last
        .dyn_into::<web_sys::Element>()
        .map_err(|_| AppError::Dom(format!("{card_selector} matched a non-element")))?;

    let date = last
        .query_selector(date_selector)?
        .ok_or_else(|| AppError::MissingElement(format!("{card_selector} {date_selector}")))?;

    Ok(Some(CardDate {
        attribute: date.get_attribute("data-date"),
        text: date.text_content().unwrap_or_default(),
    }))
}

/// Today in the browser's local timezone.
pub fn today() -> Option<NaiveDate> {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
}

pub fn now_utc() -> Option<NaiveDateTime> {
    chrono::DateTime::from_timestamp_millis(js_sys::Date::now() as i64).map(|now| now.naive_utc())
}

pub fn prefers_light() -> bool {
    window()
        .ok()
        .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Sets `data-theme` on the root element and points every SVG icon at the
/// variant for `theme`.
pub fn apply_theme(theme: Theme, asset_base: &str) -> Result<(), AppError> {
    let document = document()?;
    document
        .document_element()
        .ok_or_else(|| AppError::MissingElement("html".into()))?
        .set_attribute("data-theme", theme.as_str())?;

    let images = document.images();
    for idx in 0..images.length() {
        let Some(img) = images
            .item(idx)
            .and_then(|el| el.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            continue;
        };
        if let Some(src) = theme::themed_icon_path(asset_base, theme, &img.src()) {
            img.set_src(&src);
        }
    }
    Ok(())
}

pub fn style_nav(style: NavStyle) -> Result<(), AppError> {
    let menu = element_by_id(menu::MENU_ID)?;
    menu.style().set_property("display", style.menu_display)?;
    menu.style().set_property("width", style.menu_width)?;
    element_by_id(menu::OVERLAY_ID)?
        .style()
        .set_property("display", style.overlay_display)?;
    Ok(())
}

fn element_by_id(id: &str) -> Result<web_sys::HtmlElement, AppError> {
    mount_point(id).ok_or_else(|| AppError::MissingElement(format!("#{id}")))
}

pub fn alert(message: &str) {
    if let Err(e) = window().and_then(|w| w.alert_with_message(message).map_err(AppError::from)) {
        leptos::logging::error!("Failed to show alert: {}", e);
    }
}

pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).map_err(AppError::from))
        .unwrap_or(false)
}

pub fn redirect(href: &str) {
    if let Err(e) = window().and_then(|w| w.location().set_href(href).map_err(AppError::from)) {
        leptos::logging::error!("Failed to redirect to {}: {}", href, e);
    }
}
