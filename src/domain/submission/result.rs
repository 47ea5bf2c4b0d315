//! Classification result returned by the remote service.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Risk assessment for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: String,
    pub reason: String,
    pub recommendation: String,
}

impl RiskAssessment {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::parse(&self.risk_level)
    }
}

/// Severity bucket derived from the service's free-text risk label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Unknown,
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Buckets a label such as "ความเสี่ยงสูง". High wins over medium over low.
    pub fn parse(label: &str) -> Self {
        if label.contains("สูง") {
            RiskLevel::High
        } else if label.contains("กลาง") {
            RiskLevel::Medium
        } else if label.contains("ต่ำ") {
            RiskLevel::Low
        } else {
            RiskLevel::Unknown
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::High => "ความเสี่ยงสูง",
            RiskLevel::Medium => "ความเสี่ยงกลาง",
            RiskLevel::Low => "ความเสี่ยงต่ำ",
            RiskLevel::Unknown => "ไม่ทราบ",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping from category name to its assessment. Immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassificationResult(BTreeMap<String, RiskAssessment>);

impl ClassificationResult {
    pub fn new(assessments: BTreeMap<String, RiskAssessment>) -> Self {
        Self(assessments)
    }

    pub fn get(&self, category: &str) -> Option<&RiskAssessment> {
        self.0.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RiskAssessment)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Categories expected but absent from this result.
    ///
    /// A partial result is valid; callers show a coverage warning.
    pub fn missing_categories(&self, expected: &[String]) -> Vec<String> {
        expected
            .iter()
            .filter(|category| !self.0.contains_key(*category))
            .cloned()
            .collect()
    }
}

impl FromIterator<(String, RiskAssessment)> for ClassificationResult {
    fn from_iter<I: IntoIterator<Item = (String, RiskAssessment)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
