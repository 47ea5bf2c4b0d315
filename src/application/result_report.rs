//! ResultReport - what the operator sees after classification.

use serde::Serialize;

use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::{AnswerField, AnswerSet};
use crate::domain::submission::{ClassificationResult, RiskLevel};

/// Shown for fields the patient did not answer.
pub const NOT_SPECIFIED: &str = "ไม่ได้ระบุ";

/// Highest severity present and how many categories share it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallRisk {
    pub level: RiskLevel,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub level: RiskLevel,
    pub risk_label: String,
    pub reason: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRow {
    pub field: AnswerField,
    pub label: &'static str,
    pub value: String,
}

/// Downloadable copy of a report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportExport<'a> {
    pub patient: &'a AnswerSet,
    pub assessment: &'a ClassificationResult,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultReport {
    pub overall: OverallRisk,
    pub categories: Vec<CategoryRow>,
    /// Expected categories absent from the result.
    pub missing_categories: Vec<String>,
    pub preview: Vec<PreviewRow>,
}

impl ResultReport {
    /// `expected` is the category list from the service; pass an empty slice
    /// when it is unknown.
    pub fn build(answers: &AnswerSet, result: &ClassificationResult, expected: &[String]) -> Self {
        let categories = result
            .iter()
            .map(|(category, assessment)| CategoryRow {
                category: category.clone(),
                level: assessment.level(),
                risk_label: assessment.risk_level.clone(),
                reason: assessment.reason.clone(),
                recommendation: assessment.recommendation.clone(),
            })
            .collect::<Vec<_>>();

        Self {
            overall: overall_risk(&categories),
            categories,
            missing_categories: result.missing_categories(expected),
            preview: preview(answers),
        }
    }

    pub fn is_partial(&self) -> bool {
        !self.missing_categories.is_empty()
    }

    pub fn coverage_warning(&self) -> Option<String> {
        if !self.is_partial() {
            return None;
        }
        Some(format!(
            "ประเมินได้ {} ด้าน ขาด {} ด้าน: {}",
            self.categories.len(),
            self.missing_categories.len(),
            self.missing_categories.join(", ")
        ))
    }

    /// One-line summary, e.g. "ความเสี่ยงสูง (2/5)".
    pub fn summary(&self) -> String {
        format!(
            "{} ({}/{})",
            self.overall.level,
            self.overall.count,
            self.categories.len()
        )
    }
}

/// High if any category is high, else medium if any is medium, else low.
fn overall_risk(rows: &[CategoryRow]) -> OverallRisk {
    if rows.is_empty() {
        return OverallRisk {
            level: RiskLevel::Unknown,
            count: 0,
        };
    }

    let count = |level| rows.iter().filter(|row| row.level == level).count();
    for level in [RiskLevel::High, RiskLevel::Medium] {
        let n = count(level);
        if n > 0 {
            return OverallRisk { level, count: n };
        }
    }
    OverallRisk {
        level: RiskLevel::Low,
        count: count(RiskLevel::Low),
    }
}

fn preview(answers: &AnswerSet) -> Vec<PreviewRow> {
    AnswerField::ALL
        .iter()
        .filter_map(|field| {
            answers.display_value(*field).map(|value| PreviewRow {
                field: *field,
                label: field.label(),
                value,
            })
        })
        .collect()
}

/// Display value of `field`, or [`NOT_SPECIFIED`].
pub fn display_or_unspecified(answers: &AnswerSet, field: AnswerField) -> String {
    answers
        .display_value(field)
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

pub fn export<'a>(
    answers: &'a AnswerSet,
    result: &'a ClassificationResult,
    at: Timestamp,
) -> ReportExport<'a> {
    ReportExport {
        patient: answers,
        assessment: result,
        date: at.to_rfc3339(),
    }
}

/// `risk_assessment_{hn}_{millis}.json`, with `patient` when HN is blank.
pub fn export_file_name(answers: &AnswerSet, at: Timestamp) -> String {
    let hn = answers
        .hn
        .as_deref()
        .map(str::trim)
        .filter(|hn| !hn.is_empty())
        .unwrap_or("patient");
    format!("risk_assessment_{}_{}.json", hn, at.as_unix_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::submission::RiskAssessment;
    use chrono::{TimeZone, Utc};

    fn result(levels: &[(&str, &str)]) -> ClassificationResult {
        levels
            .iter()
            .map(|(category, level)| {
                (
                    category.to_string(),
                    RiskAssessment {
                        risk_level: level.to_string(),
                        reason: "เหตุผล".into(),
                        recommendation: "คำแนะนำ".into(),
                    },
                )
            })
            .collect()
    }

    #[test]
    fn high_risk_dominates() {
        let report = ResultReport::build(
            &AnswerSet::default(),
            &result(&[
                ("a", "ความเสี่ยงต่ำ"),
                ("b", "ความเสี่ยงสูง"),
                ("c", "ความเสี่ยงกลาง"),
                ("d", "ความเสี่ยงสูง"),
            ]),
            &[],
        );
        assert_eq!(
            report.overall,
            OverallRisk {
                level: RiskLevel::High,
                count: 2
            }
        );
        assert_eq!(report.summary(), "ความเสี่ยงสูง (2/4)");
    }

    #[test]
    fn all_low_counts_low_categories() {
        let report = ResultReport::build(
            &AnswerSet::default(),
            &result(&[("a", "ความเสี่ยงต่ำ"), ("b", "n/a")]),
            &[],
        );
        assert_eq!(report.overall.level, RiskLevel::Low);
        assert_eq!(report.overall.count, 1);
    }

    #[test]
    fn partial_result_warns() {
        let expected = vec!["a".to_string(), "b".to_string()];
        let report =
            ResultReport::build(&AnswerSet::default(), &result(&[("a", "ความเสี่ยงต่ำ")]), &expected);
        assert!(report.is_partial());
        assert!(report.coverage_warning().unwrap().contains('b'));
    }

    #[test]
    fn complete_result_has_no_warning() {
        let expected = vec!["a".to_string()];
        let report =
            ResultReport::build(&AnswerSet::default(), &result(&[("a", "ความเสี่ยงต่ำ")]), &expected);
        assert_eq!(report.coverage_warning(), None);
    }

    #[test]
    fn preview_lists_only_answered_fields() {
        let answers = AnswerSet {
            age: Some(60),
            procedures: Some(vec!["ก".into(), "ข".into()]),
            ..Default::default()
        };
        let report = ResultReport::build(&answers, &ClassificationResult::default(), &[]);

        assert_eq!(report.preview.len(), 2);
        assert_eq!(report.preview[1].value, "ก, ข");
        assert_eq!(display_or_unspecified(&answers, AnswerField::Hn), NOT_SPECIFIED);
    }

    #[test]
    fn export_shape_and_file_name() {
        let at = Timestamp::from_datetime(Utc.with_ymd_and_hms(2026, 10, 16, 8, 0, 0).unwrap());
        let answers = AnswerSet {
            hn: Some("HN55".into()),
            ..Default::default()
        };
        let assessment = result(&[("a", "ความเสี่ยงต่ำ")]);

        let json = serde_json::to_value(export(&answers, &assessment, at)).unwrap();
        assert_eq!(json["patient"]["hn"], "HN55");
        assert!(json["assessment"]["a"].is_object());
        assert!(json["date"].as_str().unwrap().starts_with("2026-10-16T08:00:00"));

        assert_eq!(
            export_file_name(&answers, at),
            format!("risk_assessment_HN55_{}.json", at.as_unix_millis())
        );
        assert!(export_file_name(&AnswerSet::default(), at).starts_with("risk_assessment_patient_"));
    }
}
