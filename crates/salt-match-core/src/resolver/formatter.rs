//! Canonical composition text formatting.

use crate::models::CompositionComponent;

/// Serialize resolved components back into canonical composition text.
///
/// One segment per ingredient, joined by `" + "`. A segment is
/// `"{name} {value}{unit}"` when the strength is present, or just the name.
/// Re-parsing the output reproduces the same names, values and units in the
/// same order.
pub fn format_components(components: &[CompositionComponent]) -> String {
    components
        .iter()
        .map(|c| match (c.strength_value, c.strength_unit.as_deref()) {
            (Some(value), Some(unit)) => format!("{} {}{}", c.resolved_name, value, unit),
            _ => c.resolved_name.clone(),
        })
        .collect::<Vec<_>>()
        .join(" + ")
}
