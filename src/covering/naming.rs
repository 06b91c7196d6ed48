//! Circle naming schemes.

/// Sequential numeric name for the circle at zero-based `index`: `"1"`, `"2"`, ...
pub fn numeric_name(index: usize) -> String {
    (index + 1).to_string()
}

/// Bijective base-26 name for the circle at zero-based `index`.
///
/// # Examples
///
/// ```
/// use u_territory::covering::alphabetical_name;
///
/// assert_eq!(alphabetical_name(0), "A");
/// assert_eq!(alphabetical_name(25), "Z");
/// assert_eq!(alphabetical_name(26), "AA");
/// assert_eq!(alphabetical_name(27), "AB");
/// ```
pub fn alphabetical_name(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    letters.iter().rev().collect()
}
