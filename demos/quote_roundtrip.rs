// ============================================================================
// Quote Round-Trip Example
// ============================================================================

use chrono::{Duration, TimeZone, Utc};
use decimal128_codec::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal128 Codec Example ===\n");

    let registry = match create_from_config(&SerializationConfig::standard()) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return;
        }
    };
    println!("Registry: {:?}\n", registry);

    // Store a few quotes, as a document store driver would
    let start = Utc.with_ymd_and_hms(2024, 5, 17, 9, 30, 0).unwrap();
    let quotes: Vec<Quote> = (0i128..3)
        .map(|i| {
            Quote::new(
                "BTC-USD",
                start + Duration::seconds(i as i64),
                Decimal::new(6_499_950 + i * 25, 2),
                Decimal::new(6_500_025 + i * 25, 2),
            )
        })
        .collect();

    let mut writer = BinaryWriter::new();
    for quote in &quotes {
        if let Err(e) = quote.encode(&registry, &mut writer) {
            eprintln!("Failed to encode quote: {}", e);
            return;
        }
    }
    println!("Encoded {} quotes into {} bytes", quotes.len(), writer.len());

    // Read them back
    println!("\nStored quotes:");
    let mut reader = BinaryReader::new(writer.as_bytes());
    while !reader.is_empty() {
        match Quote::decode(&registry, &mut reader) {
            Ok(q) => println!("  {} {} bid={} ask={}", q.time, q.ticker, q.bid, q.ask),
            Err(e) => {
                eprintln!("Failed to decode quote: {}", e);
                return;
            }
        }
    }

    // Values that do not fit fail instead of rounding
    println!("\nEdge values:");
    let codec = DecimalCodec::new();
    for text in [
        "123456789012345678901234567890.123456",
        "0.000000000000000000000000000000000000001",
    ] {
        let value: Decimal = match text.parse() {
            Ok(v) => v,
            Err(e) => {
                eprintln!("  {}: {}", text, e);
                continue;
            }
        };
        match codec.to_decimal128(&value) {
            Ok(wire) => println!("  {} -> {}", text, wire),
            Err(e) => println!("  {} -> {}", text, e),
        }
    }

    println!("\n=== Example Complete ===");
}
