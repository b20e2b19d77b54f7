//! Comma separated bit names, e.g. `-Fcolor,no-bell`

/// Prefix that turns a bit name into a request to clear the bit
pub const CLEAR_PREFIX: &str = "no-";

/// Apply the bit names listed in `raw` to `current`.
///
/// `table` is a comma separated list of known names; the position of a
/// name in it is the bit it controls, starting at bit 0. Each entry of
/// `raw` sets the bit of the matching name, or clears it when written as
/// `no-name`. Entries are applied left to right, so a later entry can
/// undo an earlier one. Unknown names are ignored, as are table names
/// past the 32nd.
///
/// The table order is the meaning of the mask. Callers that keep a mask
/// around must keep the table order stable too.
///
/// ```
/// let mask = oldopt::bitflags::apply("y,no-x", 0b001, "x,y,z");
/// assert_eq!(mask, 0b010);
/// ```
pub fn apply(raw: &str, current: u32, table: &str) -> u32 {
    let mut mask = current;
    for entry in raw.split(',') {
        let (name, clear) = match entry.strip_prefix(CLEAR_PREFIX) {
            Some(name) => (name, true),
            None => (entry, false),
        };
        for (known, bit) in table.split(',').zip(0..u32::BITS) {
            if known != name {
                continue;
            }
            if clear {
                mask &= !(1_u32 << bit);
            } else {
                mask |= 1_u32 << bit;
            }
        }
    }
    mask
}
