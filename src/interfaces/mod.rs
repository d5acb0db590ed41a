// ============================================================================
// Interfaces Module
// Contains the codec contract and the type-tagged values it works on
// ============================================================================

mod typed;
mod value_codec;

pub use typed::{TypedRef, TypedSlot};
pub use value_codec::ValueCodec;
