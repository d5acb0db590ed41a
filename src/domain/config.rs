// ============================================================================
// Serialization Configuration
// Which decimal codecs a registry carries and how strictly they encode
// ============================================================================

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Exponent Policy
// ============================================================================

/// How encoding treats values that fit only after moving digits into the exponent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ExponentPolicy {
    /// Fold exactly: strip trailing zeros, zero-pad the coefficient, or
    /// clamp the exponent of a zero, whenever the value stays the same
    Fold,

    /// Encode the canonical digits as they are; reject anything that does not fit
    Exact,
}

// ============================================================================
// Codec Kind
// ============================================================================

/// Application decimal types a registry can carry a codec for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CodecKind {
    /// Arbitrary-precision `numeric::Decimal`
    Decimal,

    /// `rust_decimal::Decimal`
    RustDecimal,
}

// ============================================================================
// Complete Serialization Configuration
// ============================================================================

/// Configuration for building a codec registry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SerializationConfig {
    /// Decimal types to register
    pub codecs: HashSet<CodecKind>,

    /// Encoding policy shared by all decimal codecs
    pub exponent_policy: ExponentPolicy,
}

impl SerializationConfig {
    /// Create a new configuration with required parameters
    pub fn new(codecs: HashSet<CodecKind>, exponent_policy: ExponentPolicy) -> Self {
        Self {
            codecs,
            exponent_policy,
        }
    }

    /// Builder method: Add a codec
    pub fn with_codec(mut self, kind: CodecKind) -> Self {
        self.codecs.insert(kind);
        self
    }

    /// Builder method: Set the exponent policy
    pub fn with_exponent_policy(mut self, policy: ExponentPolicy) -> Self {
        self.exponent_policy = policy;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.codecs.is_empty() {
            return Err("At least one decimal codec must be enabled".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl SerializationConfig {
    /// Both decimal codecs, exact folding allowed
    pub fn standard() -> Self {
        Self::new(
            [CodecKind::Decimal, CodecKind::RustDecimal].into_iter().collect(),
            ExponentPolicy::Fold,
        )
    }

    /// Both decimal codecs, digits encoded as written
    pub fn strict() -> Self {
        Self::standard().with_exponent_policy(ExponentPolicy::Exact)
    }

    /// Only the arbitrary-precision decimal codec
    pub fn decimal_only() -> Self {
        Self::new(
            [CodecKind::Decimal].into_iter().collect(),
            ExponentPolicy::Fold,
        )
    }
}

impl Default for SerializationConfig {
    fn default() -> Self {
        Self::standard()
    }
}
