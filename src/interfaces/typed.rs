// ============================================================================
// Type-Tagged Values
// Erased values and destination slots carrying their runtime type
// ============================================================================

use std::any::{type_name, Any, TypeId};
use std::fmt;

/// Borrowed value of any type, tagged with its runtime type.
///
/// This is what a codec receives on encode. The codec checks the tag
/// before touching the payload.
#[derive(Clone, Copy)]
pub struct TypedRef<'a> {
    value: &'a dyn Any,
    type_id: TypeId,
    type_name: &'static str,
}

impl<'a> TypedRef<'a> {
    pub fn of<T: Any>(value: &'a T) -> Self {
        Self {
            value,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The payload, if it has type `T`.
    pub fn downcast<T: Any>(&self) -> Option<&'a T> {
        self.value.downcast_ref::<T>()
    }
}

impl fmt::Debug for TypedRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedRef<{}>", self.type_name)
    }
}

/// Mutable destination of any type, tagged with its declared type.
///
/// This is what a codec receives on decode. The decoded value is assigned
/// through [`TypedSlot::downcast_mut`] only after the tag has been checked.
pub struct TypedSlot<'a> {
    slot: &'a mut dyn Any,
    type_id: TypeId,
    type_name: &'static str,
}

impl<'a> TypedSlot<'a> {
    pub fn of<T: Any>(slot: &'a mut T) -> Self {
        Self {
            slot,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The destination, if it was declared as `T`.
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.slot.downcast_mut::<T>()
    }
}

impl fmt::Debug for TypedSlot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypedSlot<{}>", self.type_name)
    }
}
