//! Markup for grid items
//!
//! Uses a Mustache template so attribute values are HTML-escaped.

use super::view::{GridView, ItemView};
use crate::models::RenderError;

const ITEM_TEMPLATE: &str = include_str!("templates/grid_item.html.mustache");

fn item_template() -> Result<mustache::Template, RenderError> {
    Ok(mustache::compile_str(ITEM_TEMPLATE)?)
}

/// Render one item as a `.video-item` element
pub fn render_item_html(item: &ItemView) -> Result<String, RenderError> {
    Ok(item_template()?.render_to_string(item)?)
}

/// Render every item in display order, compiling the template once
pub fn render_grid_html(view: &GridView) -> Result<String, RenderError> {
    let template = item_template()?;
    view.items
        .iter()
        .map(|item| template.render_to_string(item))
        .collect::<Result<Vec<_>, _>>()
        .map(|parts| parts.join("\n"))
        .map_err(RenderError::from)
}
