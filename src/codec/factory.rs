// ============================================================================
// Registry Factory
// Creates codec registries from configuration
// ============================================================================

use super::{DecimalCodec, Registry, RegistryBuilder, RustDecimalCodec};
use crate::domain::config::{CodecKind, ExponentPolicy, SerializationConfig};
use crate::numeric::Decimal;

/// Creates a codec registry from configuration
///
/// # Arguments
/// * `config` - Serialization configuration
///
/// # Returns
/// * `Result<Registry, String>` - Populated registry or validation error
///
/// # Example
/// ```
/// use decimal128_codec::prelude::*;
///
/// let registry = create_from_config(&SerializationConfig::standard()).unwrap();
/// assert!(registry.contains::<Decimal>());
/// assert!(registry.contains::<rust_decimal::Decimal>());
/// ```
pub fn create_from_config(config: &SerializationConfig) -> Result<Registry, String> {
    // Validate configuration first
    config.validate()?;

    let decimal_codec = create_decimal_codec(config.exponent_policy);

    let mut builder = RegistryBuilder::new();
    if config.codecs.contains(&CodecKind::Decimal) {
        builder = builder.register_codec::<Decimal>(decimal_codec);
    }
    if config.codecs.contains(&CodecKind::RustDecimal) {
        builder = builder
            .register_codec::<rust_decimal::Decimal>(RustDecimalCodec::new(decimal_codec));
    }

    Ok(builder.build())
}

/// Creates the decimal codec matching the exponent policy
fn create_decimal_codec(policy: ExponentPolicy) -> DecimalCodec {
    match policy {
        ExponentPolicy::Fold => DecimalCodec::new(),
        ExponentPolicy::Exact => DecimalCodec::strict(),
    }
}
