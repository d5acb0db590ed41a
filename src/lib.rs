// ============================================================================
// Decimal128 Codec Library
// Lossless bridge between arbitrary-precision decimals and 128-bit decimals
// ============================================================================

//! # Decimal128 Codec
//!
//! Type-directed codecs that store application decimals in the 128-bit
//! decimal interchange format used by document stores.
//!
//! ## Features
//!
//! - **Arbitrary-precision decimal** with explicit scale and negative zero
//! - **IEEE 754-2008 decimal128** (binary integer significand) value type
//! - **No silent rounding**: values that do not fit fail with a distinct error
//! - **Registry dispatch** by runtime type, built once and passed explicitly
//! - **Stateless codecs**, safe to share across threads
//!
//! ## Example
//!
//! ```rust
//! use decimal128_codec::prelude::*;
//!
//! let registry = create_from_config(&SerializationConfig::standard()).unwrap();
//!
//! let price: Decimal = "123.456".parse().unwrap();
//! let mut writer = BinaryWriter::new();
//! registry.encode(&mut writer, &price).unwrap();
//!
//! let mut reader = BinaryReader::new(writer.as_bytes());
//! let back: Decimal = registry.decode(&mut reader).unwrap();
//! assert_eq!(back, price);
//!
//! // 35 significant digits do not fit in a decimal128
//! let too_wide: Decimal = format!("1{}", "9".repeat(34)).parse().unwrap();
//! assert_eq!(
//!     registry.encode(&mut writer, &too_wide),
//!     Err(CodecError::PrecisionOverflow { digits: 35 })
//! );
//! ```

pub mod codec;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod wire;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{
        create_from_config, CodecError, CodecResult, DecimalCodec, Registry, RegistryBuilder,
        RustDecimalCodec,
    };
    pub use crate::domain::{CodecKind, ExponentPolicy, Quote, SerializationConfig};
    pub use crate::interfaces::{TypedRef, TypedSlot, ValueCodec};
    pub use crate::numeric::{Decimal, NumericError};
    pub use crate::wire::{
        BinaryReader, BinaryWriter, Decimal128, Decimal128Kind, ElementType, ValueReader,
        ValueWriter, WireError,
    };
}
