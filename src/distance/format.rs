//! Human-readable distance formatting.

/// Formats meters as `"850 m"` below one kilometer and `"12.3 km"` above.
///
/// # Examples
///
/// ```
/// use u_territory::distance::format_distance;
///
/// assert_eq!(format_distance(850.4), "850 m");
/// assert_eq!(format_distance(12_345.0), "12.3 km");
/// ```
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{meters:.0} m")
    } else {
        format!("{:.1} km", meters / 1000.0)
    }
}
