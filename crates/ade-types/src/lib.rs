//! Validated value types shared across the ADE risk engine crates.

/// Errors that can occur when creating validated value types.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// The input text was empty or contained only whitespace
    #[error("drug name cannot be empty")]
    EmptyDrugName,
}

/// Upper bound for every risk score.
pub const MAX_SCORE: u8 = 100;

/// A risk score guaranteed to lie in `0..=100`.
///
/// Scores are built by summing integer weights; the only way to turn a raw sum into a
/// `RiskScore` is [`RiskScore::saturating`], which clamps anything above 100 down to 100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RiskScore(u8);

impl RiskScore {
    /// A score of zero.
    pub const ZERO: RiskScore = RiskScore(0);

    /// Creates a score from a raw additive sum, saturating at [`MAX_SCORE`].
    pub fn saturating(raw: u32) -> Self {
        let clamped = raw.min(u32::from(MAX_SCORE));
        // `clamped` is at most 100 so the narrowing cannot truncate.
        Self(clamped as u8)
    }

    /// Returns the score as an integer percentage.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<RiskScore> for u8 {
    fn from(score: RiskScore) -> Self {
        score.0
    }
}

impl std::fmt::Display for RiskScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl serde::Serialize for RiskScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

impl<'de> serde::Deserialize<'de> for RiskScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = u32::deserialize(deserializer)?;
        Ok(RiskScore::saturating(raw))
    }
}

/// A normalised drug name: trimmed, lowercased and non-empty.
///
/// Two names that differ only in case or surrounding whitespace compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrugName(String);

impl DrugName {
    /// Creates a new `DrugName` from the given input.
    ///
    /// The input is trimmed and lowercased. If the trimmed result is empty,
    /// `TypeError::EmptyDrugName` is returned.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TypeError::EmptyDrugName);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Returns the normalised name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DrugName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DrugName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_score_saturates_at_one_hundred() {
        assert_eq!(RiskScore::saturating(255).value(), 100);
        assert_eq!(RiskScore::saturating(u32::MAX).value(), 100);
        assert_eq!(RiskScore::saturating(100).value(), 100);
        assert_eq!(RiskScore::saturating(99).value(), 99);
        assert_eq!(RiskScore::saturating(0), RiskScore::ZERO);
    }

    #[test]
    fn test_risk_score_serialises_as_plain_integer() {
        let json = serde_json::to_string(&RiskScore::saturating(70)).unwrap();
        assert_eq!(json, "70");
    }

    #[test]
    fn test_risk_score_deserialise_clamps() {
        let score: RiskScore = serde_json::from_str("230").unwrap();
        assert_eq!(score.value(), 100);
    }

    #[test]
    fn test_risk_score_display_is_percentage() {
        assert_eq!(RiskScore::saturating(45).to_string(), "45%");
    }

    #[test]
    fn test_drug_name_normalises_case_and_whitespace() {
        let a = DrugName::new(" WARFARIN ").unwrap();
        let b = DrugName::new("warfarin").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "warfarin");
    }

    #[test]
    fn test_drug_name_rejects_blank_input() {
        assert!(matches!(DrugName::new(""), Err(TypeError::EmptyDrugName)));
        assert!(matches!(DrugName::new("  \t"), Err(TypeError::EmptyDrugName)));
    }
}
