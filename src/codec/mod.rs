// ============================================================================
// Codec Module
// Decimal codecs and the registry that dispatches to them by runtime type
// ============================================================================

mod decimal_codec;
mod errors;
mod registry;
mod rust_decimal_codec;

pub mod factory;

pub use decimal_codec::DecimalCodec;
pub use errors::{CodecError, CodecResult};
pub use factory::create_from_config;
pub use registry::{Registry, RegistryBuilder};
pub use rust_decimal_codec::RustDecimalCodec;
