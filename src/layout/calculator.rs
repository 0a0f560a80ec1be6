//! Item width calculation
//!
//! Every item in the grid shares one width, derived from the container
//! width, the column count and the scale slider.

/// Pixel floor applied when no settings are supplied
pub const DEFAULT_MIN_ITEM_WIDTH: u32 = 150;

/// Compute the per-item pixel width
///
/// `floor(max(container_width / columns * scale_percent / 100, min_width))`.
/// A column count of zero is treated as one.
pub fn compute_item_width(
    container_width: u32,
    columns: u32,
    scale_percent: u32,
    min_width: u32,
) -> u32 {
    let base_width = f64::from(container_width) / f64::from(columns.max(1));
    let raw_width = base_width * (f64::from(scale_percent) / 100.0);
    raw_width.max(f64::from(min_width)).floor() as u32
}
