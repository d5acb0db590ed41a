// ============================================================================
// Codec Registry
// Maps runtime type identifiers to value codecs
// ============================================================================

use super::errors::{CodecError, CodecResult};
use crate::interfaces::{TypedRef, TypedSlot, ValueCodec};
use crate::wire::{ValueReader, ValueWriter};
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

struct Entry {
    type_name: &'static str,
    codec: Arc<dyn ValueCodec>,
}

/// Immutable type-to-codec mapping.
///
/// Built once through [`RegistryBuilder`] and passed explicitly to every
/// encode/decode call site. Cloning shares the same mapping.
///
/// # Example
/// ```
/// use decimal128_codec::prelude::*;
///
/// let registry = Registry::builder()
///     .register_codec::<Decimal>(DecimalCodec::new())
///     .build();
///
/// let mut writer = BinaryWriter::new();
/// registry.encode(&mut writer, &Decimal::new(123456, 3)).unwrap();
///
/// let mut reader = BinaryReader::new(writer.as_bytes());
/// let back: Decimal = registry.decode(&mut reader).unwrap();
/// assert_eq!(back, Decimal::new(123456, 3));
/// ```
#[derive(Clone, Default)]
pub struct Registry {
    codecs: Arc<HashMap<TypeId, Entry>>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Codec registered for `type_id`, if any.
    pub fn lookup(&self, type_id: TypeId) -> Option<&dyn ValueCodec> {
        self.codecs.get(&type_id).map(|entry| entry.codec.as_ref())
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.codecs.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    /// Encode a type-erased value with the codec registered for its type.
    ///
    /// # Errors
    /// - `NoCodec` if nothing is registered for the value's type
    /// - whatever the selected codec reports
    pub fn encode_value(&self, writer: &mut dyn ValueWriter, value: TypedRef<'_>) -> CodecResult<()> {
        let codec = self
            .lookup(value.type_id())
            .ok_or(CodecError::NoCodec {
                type_name: value.type_name(),
            })?;

        tracing::trace!(codec = codec.name(), value_type = value.type_name(), "encode");
        codec.encode_value(writer, value)
    }

    /// Decode into a type-erased slot with the codec registered for its type.
    ///
    /// # Errors
    /// - `NoCodec` if nothing is registered for the slot's declared type
    /// - whatever the selected codec reports
    pub fn decode_value(&self, reader: &mut dyn ValueReader, slot: TypedSlot<'_>) -> CodecResult<()> {
        let codec = self
            .lookup(slot.type_id())
            .ok_or(CodecError::NoCodec {
                type_name: slot.type_name(),
            })?;

        tracing::trace!(codec = codec.name(), slot_type = slot.type_name(), "decode");
        codec.decode_value(reader, slot)
    }

    /// Typed convenience over [`Registry::encode_value`].
    pub fn encode<T: Any>(&self, writer: &mut dyn ValueWriter, value: &T) -> CodecResult<()> {
        self.encode_value(writer, TypedRef::of(value))
    }

    /// Typed convenience over [`Registry::decode_value`].
    pub fn decode<T: Any + Default>(&self, reader: &mut dyn ValueReader) -> CodecResult<T> {
        let mut out = T::default();
        self.decode_value(reader, TypedSlot::of(&mut out))?;
        Ok(out)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for entry in self.codecs.values() {
            map.entry(&entry.type_name, &entry.codec.name());
        }
        map.finish()
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Collects codec registrations before freezing them into a [`Registry`].
#[derive(Default)]
pub struct RegistryBuilder {
    codecs: HashMap<TypeId, Entry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `codec` for values of type `T`.
    ///
    /// A later registration for the same type replaces the earlier one.
    pub fn register_codec<T: Any>(mut self, codec: impl ValueCodec + 'static) -> Self {
        let type_name = type_name::<T>();
        tracing::debug!(value_type = type_name, codec = codec.name(), "registering codec");

        let previous = self.codecs.insert(
            TypeId::of::<T>(),
            Entry {
                type_name,
                codec: Arc::new(codec),
            },
        );
        if previous.is_some() {
            tracing::debug!(value_type = type_name, "replaced previously registered codec");
        }
        self
    }

    pub fn build(self) -> Registry {
        tracing::debug!(codecs = self.codecs.len(), "built codec registry");
        Registry {
            codecs: Arc::new(self.codecs),
        }
    }
}
