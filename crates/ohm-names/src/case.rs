//! Conversion between the camel-case spelling of a name and `lower_snake`.

use crate::name::TagName;

/// Lowercase a name, separating its parts with `_`.
///
/// # Examples
/// ```
/// use ohm_names::{TagName, name_to_lower};
/// assert_eq!(name_to_lower(&TagName::parse("Gen1P")?), "gen1_p");
/// assert_eq!(
///     name_to_lower(&TagName::parse("Wtg1InvInlet2InvTemp")?),
///     "wtg1_inv_inlet2_inv_temp"
/// );
/// # Ok::<(), ohm_names::NameError>(())
/// ```
#[must_use]
pub fn name_to_lower(name: &TagName<'_>) -> String {
    name.parts().join("_").to_lowercase()
}

/// Rebuild a camel-case name from its `lower_snake` spelling.
///
/// The first character and every character after an underscore is
/// uppercased and the underscores are dropped; everything else is kept as
/// is, so this only inverts [`name_to_lower`] for names whose parts were
/// already properly cased.
///
/// # Examples
/// ```
/// assert_eq!(ohm_names::lower_to_name("gen1_p"), "Gen1P");
/// ```
#[must_use]
pub fn lower_to_name(lower: &str) -> String {
    let mut name = String::with_capacity(lower.len());
    let mut at_part_start = true;
    for c in lower.chars() {
        if c == '_' {
            at_part_start = true;
        } else if at_part_start {
            name.extend(c.to_uppercase());
            at_part_start = false;
        } else {
            name.push(c);
        }
    }
    name
}
