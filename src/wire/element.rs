// ============================================================================
// Element Types
// Type tags preceding every value in the binary document format
// ============================================================================

/// Type byte written before each value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ElementType {
    Double = 0x01,
    String = 0x02,
    Boolean = 0x08,
    DateTime = 0x09,
    Null = 0x0A,
    Int32 = 0x10,
    Int64 = 0x12,
    Decimal128 = 0x13,
}

impl ElementType {
    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0x01 => Some(ElementType::Double),
            0x02 => Some(ElementType::String),
            0x08 => Some(ElementType::Boolean),
            0x09 => Some(ElementType::DateTime),
            0x0A => Some(ElementType::Null),
            0x10 => Some(ElementType::Int32),
            0x12 => Some(ElementType::Int64),
            0x13 => Some(ElementType::Decimal128),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_byte_mapping() {
        assert_eq!(ElementType::Decimal128.as_u8(), 0x13);
        assert_eq!(ElementType::from_u8(0x13), Some(ElementType::Decimal128));
        assert_eq!(ElementType::from_u8(0x09), Some(ElementType::DateTime));
        assert_eq!(ElementType::from_u8(0x7F), None);
    }
}
