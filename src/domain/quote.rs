// ============================================================================
// Quote Document
// ============================================================================

use crate::codec::{CodecResult, Registry};
use crate::numeric::Decimal;
use crate::wire::{ValueReader, ValueWriter};
use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Bid/ask quote for a ticker at a point in time.
///
/// Field order on the wire: ticker, time, bid, ask. The two prices go through
/// the registry, so whichever codec is registered for [`Decimal`] decides
/// their encoding. `time` is stored with millisecond precision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quote {
    pub ticker: String,
    pub time: DateTime<Utc>,
    pub bid: Decimal,
    pub ask: Decimal,
}

impl Quote {
    pub fn new(ticker: impl Into<String>, time: DateTime<Utc>, bid: Decimal, ask: Decimal) -> Self {
        Self {
            ticker: ticker.into(),
            time,
            bid,
            ask,
        }
    }

    /// True when the bid is above the ask
    pub fn is_crossed(&self) -> bool {
        self.bid > self.ask
    }

    pub fn encode(&self, registry: &Registry, writer: &mut dyn ValueWriter) -> CodecResult<()> {
        writer.write_string(&self.ticker)?;
        writer.write_datetime(self.time)?;
        registry.encode(writer, &self.bid)?;
        registry.encode(writer, &self.ask)?;
        Ok(())
    }

    pub fn decode(registry: &Registry, reader: &mut dyn ValueReader) -> CodecResult<Self> {
        let ticker = reader.read_string()?;
        let time = reader.read_datetime()?;
        let bid = registry.decode::<Decimal>(reader)?;
        let ask = registry.decode::<Decimal>(reader)?;
        Ok(Self {
            ticker,
            time,
            bid,
            ask,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{CodecError, DecimalCodec};
    use crate::wire::{BinaryReader, BinaryWriter, Decimal128, WireError};
    use chrono::TimeZone;

    fn registry() -> Registry {
        Registry::builder()
            .register_codec::<Decimal>(DecimalCodec::new())
            .build()
    }

    fn quote() -> Quote {
        Quote::new(
            "BTC-USD",
            Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap(),
            "64999.50".parse().unwrap(),
            "65000.25".parse().unwrap(),
        )
    }

    #[test]
    fn test_quote_round_trip() {
        let registry = registry();
        let original = quote();

        let mut writer = BinaryWriter::new();
        original.encode(&registry, &mut writer).unwrap();

        let mut reader = BinaryReader::new(writer.as_bytes());
        let decoded = Quote::decode(&registry, &mut reader).unwrap();

        assert_eq!(decoded, original);
        assert!(decoded.bid.is_identical(&original.bid));
        assert!(reader.is_empty());
    }

    #[test]
    fn test_is_crossed() {
        let mut q = quote();
        assert!(!q.is_crossed());
        q.bid = "65001".parse().unwrap();
        assert!(q.is_crossed());
    }

    #[test]
    fn test_missing_codec_fails() {
        let empty = Registry::default();
        let mut writer = BinaryWriter::new();

        assert!(matches!(
            quote().encode(&empty, &mut writer),
            Err(CodecError::NoCodec { .. })
        ));
    }

    #[test]
    fn test_nan_price_rejected() {
        let mut writer = BinaryWriter::new();
        writer.write_string("ETH-USD").unwrap();
        writer
            .write_datetime(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .unwrap();
        writer.write_decimal128(Decimal128::NAN).unwrap();
        writer.write_decimal128("1".parse().unwrap()).unwrap();

        let mut reader = BinaryReader::new(writer.as_bytes());
        assert_eq!(
            Quote::decode(&registry(), &mut reader),
            Err(CodecError::SpecialValue {
                value: Decimal128::NAN
            })
        );
    }

    #[test]
    fn test_truncated_document() {
        let mut writer = BinaryWriter::new();
        quote().encode(&registry(), &mut writer).unwrap();
        let bytes = writer.into_bytes();

        let mut reader = BinaryReader::new(&bytes[..bytes.len() - 4]);
        assert!(matches!(
            Quote::decode(&registry(), &mut reader),
            Err(CodecError::Wire(WireError::Truncated { .. }))
        ));
    }
}
