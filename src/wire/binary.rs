// ============================================================================
// Binary Writer / Reader
// In-memory element stream: type byte followed by a little-endian payload
// ============================================================================

use super::{Decimal128, ElementType, ValueReader, ValueWriter, WireError, WireResult};
use chrono::{DateTime, Utc};

/// Appends elements to an owned byte buffer.
#[derive(Debug, Default, Clone)]
pub struct BinaryWriter {
    buf: Vec<u8>,
}

impl BinaryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    fn tag(&mut self, element: ElementType) {
        self.buf.push(element.as_u8());
    }
}

impl ValueWriter for BinaryWriter {
    fn write_decimal128(&mut self, value: Decimal128) -> WireResult<()> {
        self.tag(ElementType::Decimal128);
        self.buf.extend_from_slice(&value.to_bytes());
        Ok(())
    }

    fn write_string(&mut self, value: &str) -> WireResult<()> {
        // Length prefix counts the trailing NUL.
        let len = i32::try_from(value.len() + 1).map_err(|_| WireError::InvalidString)?;
        self.tag(ElementType::String);
        self.buf.extend_from_slice(&len.to_le_bytes());
        self.buf.extend_from_slice(value.as_bytes());
        self.buf.push(0);
        Ok(())
    }

    fn write_datetime(&mut self, value: DateTime<Utc>) -> WireResult<()> {
        self.tag(ElementType::DateTime);
        self.buf
            .extend_from_slice(&value.timestamp_millis().to_le_bytes());
        Ok(())
    }

    fn write_int64(&mut self, value: i64) -> WireResult<()> {
        self.tag(ElementType::Int64);
        self.buf.extend_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn write_null(&mut self) -> WireResult<()> {
        self.tag(ElementType::Null);
        Ok(())
    }
}

/// Reads elements from a borrowed byte slice.
#[derive(Debug, Clone)]
pub struct BinaryReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume the type byte if it matches `expected`.
    fn expect_tag(&mut self, expected: ElementType) -> WireResult<()> {
        let found = *self.bytes.get(self.pos).ok_or(WireError::Truncated {
            needed: 1,
            remaining: 0,
        })?;
        if found != expected.as_u8() {
            return Err(WireError::UnexpectedElement { expected, found });
        }
        self.pos += 1;
        Ok(())
    }

    fn take<const N: usize>(&mut self) -> WireResult<[u8; N]> {
        let slice = self.take_slice(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    fn take_slice(&mut self, len: usize) -> WireResult<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(WireError::Truncated {
                needed: len,
                remaining,
            });
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    /// Run `read` and rewind to the element start if it fails.
    fn atomically<T>(&mut self, read: impl FnOnce(&mut Self) -> WireResult<T>) -> WireResult<T> {
        let start = self.pos;
        let result = read(self);
        if result.is_err() {
            self.pos = start;
        }
        result
    }
}

impl ValueReader for BinaryReader<'_> {
    fn peek_type(&self) -> WireResult<ElementType> {
        let found = *self.bytes.get(self.pos).ok_or(WireError::Truncated {
            needed: 1,
            remaining: 0,
        })?;
        ElementType::from_u8(found).ok_or(WireError::UnknownElement { found })
    }

    fn read_decimal128(&mut self) -> WireResult<Decimal128> {
        self.atomically(|r| {
            r.expect_tag(ElementType::Decimal128)?;
            Ok(Decimal128::from_bytes(r.take::<16>()?))
        })
    }

    fn read_string(&mut self) -> WireResult<String> {
        self.atomically(|r| {
            r.expect_tag(ElementType::String)?;
            let len = i32::from_le_bytes(r.take::<4>()?);
            let len = usize::try_from(len)
                .ok()
                .filter(|len| *len >= 1)
                .ok_or(WireError::InvalidString)?;
            let payload = r.take_slice(len)?;
            let (text, nul) = payload.split_at(len - 1);
            if nul[0] != 0 {
                return Err(WireError::InvalidString);
            }
            String::from_utf8(text.to_vec()).map_err(|_| WireError::InvalidString)
        })
    }

    fn read_datetime(&mut self) -> WireResult<DateTime<Utc>> {
        self.atomically(|r| {
            r.expect_tag(ElementType::DateTime)?;
            let millis = i64::from_le_bytes(r.take::<8>()?);
            DateTime::from_timestamp_millis(millis).ok_or(WireError::InvalidDateTime { millis })
        })
    }

    fn read_int64(&mut self) -> WireResult<i64> {
        self.atomically(|r| {
            r.expect_tag(ElementType::Int64)?;
            Ok(i64::from_le_bytes(r.take::<8>()?))
        })
    }

    fn read_null(&mut self) -> WireResult<()> {
        self.atomically(|r| r.expect_tag(ElementType::Null))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_decimal128_element_layout() {
        let mut writer = BinaryWriter::new();
        writer.write_decimal128("1".parse().unwrap()).unwrap();

        let bytes = writer.into_bytes();
        assert_eq!(bytes.len(), 17);
        assert_eq!(bytes[0], 0x13);
        assert_eq!(bytes[1], 0x01);
        assert_eq!(bytes[16], 0x30);
    }

    #[test]
    fn test_mixed_elements_round_trip() {
        let time = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let price: Decimal128 = "50000.25".parse().unwrap();

        let mut writer = BinaryWriter::new();
        writer.write_string("BTC-USD").unwrap();
        writer.write_datetime(time).unwrap();
        writer.write_decimal128(price).unwrap();
        writer.write_int64(-7).unwrap();
        writer.write_null().unwrap();

        let mut reader = BinaryReader::new(writer.as_bytes());
        assert_eq!(reader.peek_type().unwrap(), ElementType::String);
        assert_eq!(reader.read_string().unwrap(), "BTC-USD");
        assert_eq!(reader.read_datetime().unwrap(), time);
        assert_eq!(reader.read_decimal128().unwrap(), price);
        assert_eq!(reader.read_int64().unwrap(), -7);
        reader.read_null().unwrap();
        assert!(reader.is_empty());
    }

    #[test]
    fn test_unexpected_element_does_not_consume() {
        let mut writer = BinaryWriter::new();
        writer.write_string("not a number").unwrap();

        let mut reader = BinaryReader::new(writer.as_bytes());
        assert_eq!(
            reader.read_decimal128(),
            Err(WireError::UnexpectedElement {
                expected: ElementType::Decimal128,
                found: 0x02
            })
        );
        assert_eq!(reader.read_string().unwrap(), "not a number");
    }

    #[test]
    fn test_truncated_input() {
        let mut writer = BinaryWriter::new();
        writer.write_decimal128(Decimal128::ZERO).unwrap();
        let bytes = writer.into_bytes();

        let mut reader = BinaryReader::new(&bytes[..10]);
        assert_eq!(
            reader.read_decimal128(),
            Err(WireError::Truncated {
                needed: 16,
                remaining: 9
            })
        );
        assert_eq!(reader.remaining(), 10);

        let mut empty = BinaryReader::new(&[]);
        assert_eq!(
            empty.peek_type(),
            Err(WireError::Truncated {
                needed: 1,
                remaining: 0
            })
        );
    }

    #[test]
    fn test_unknown_type_byte() {
        let reader = BinaryReader::new(&[0x7F]);
        assert_eq!(reader.peek_type(), Err(WireError::UnknownElement { found: 0x7F }));
    }

    #[test]
    fn test_invalid_string_payload() {
        // Length 3 but no NUL terminator.
        let bytes = [0x02, 3, 0, 0, 0, b'a', b'b', b'c'];
        let mut reader = BinaryReader::new(&bytes);
        assert_eq!(reader.read_string(), Err(WireError::InvalidString));
    }
}
