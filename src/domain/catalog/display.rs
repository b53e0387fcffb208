// SPDX-License-Identifier: MPL-2.0
//! Display helpers for catalog values.

/// Formats a view counter the way video cards show it.
///
/// Below a thousand the raw number is shown; above, one decimal with a
/// `K` or `M` suffix.
///
/// ```
/// use codecast::domain::catalog::format_view_count;
///
/// assert_eq!(format_view_count(999), "999");
/// assert_eq!(format_view_count(1_250), "1.3K");
/// assert_eq!(format_view_count(3_400_000), "3.4M");
/// ```
#[must_use]
pub fn format_view_count(count: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = count as f64;
    if count >= 1_000_000 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        count.to_string()
    }
}
