// ============================================================================
// Domain Models Module
// Serialization configuration and the documents stored through the codecs
// ============================================================================

pub mod config;
pub mod quote;

pub use config::{CodecKind, ExponentPolicy, SerializationConfig};
pub use quote::Quote;
