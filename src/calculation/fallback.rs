//! Resolution of calculated values against stored component values.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::ZeroFallback;
use crate::models::{Amount, ComponentContext};

/// Uses the calculated value when there is one, otherwise the stored value.
pub(crate) fn or_stored(calculated: Option<Decimal>, context: &ComponentContext<'_>) -> Option<Amount> {
    calculated.map(Amount::new).or_else(|| context.stored_value())
}

/// Resolves a calculated value that may legitimately be zero.
///
/// Under [`ZeroFallback::Legacy`] a zero is treated as "no value" and replaced
/// by the stored value, which may itself be absent.
pub(crate) fn resolve_zero(
    calculated: Decimal,
    context: &ComponentContext<'_>,
    policy: ZeroFallback,
) -> Option<Amount> {
    match policy {
        ZeroFallback::Strict => Some(Amount::new(calculated)),
        ZeroFallback::Legacy if calculated.is_zero() => {
            let stored = context.stored_value();
            debug!(
                stored = ?stored.map(|v| v.to_string()),
                "Computed zero replaced by stored value"
            );
            stored
        }
        ZeroFallback::Legacy => Some(Amount::new(calculated)),
    }
}
