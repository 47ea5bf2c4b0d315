//! AnswerSet - the partial record of questionnaire responses.
//!
//! The record holds the 27 numbered questions, the free-text note for the
//! surgeon, and the optional `*_description` companions of the status
//! questions. It is built one `FieldUpdate` at a time.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::options::{AntibioticCompliance, CompressType, JawWiring, PainRelief};
use crate::domain::foundation::ValidationError;

/// Pain on a 0-10 scale, 0 meaning no pain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PainScore(u8);

impl PainScore {
    pub const NONE: PainScore = PainScore(0);
    pub const MAX: u8 = 10;

    /// Creates a pain score, rejecting values above 10.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if value > Self::MAX {
            return Err(ValidationError::out_of_range(
                "pain_score",
                0,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// True strictly above the no-pain baseline.
    pub fn indicates_pain(&self) -> bool {
        self.0 > Self::NONE.0
    }
}

impl TryFrom<u8> for PainScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PainScore> for u8 {
    fn from(score: PainScore) -> Self {
        score.0
    }
}

impl fmt::Display for PainScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Behaviour shared by every answer value type.
pub trait Answer {
    /// Whether the value counts as answered. Blank text and empty lists do not.
    fn is_answered(&self) -> bool;

    /// Rendering used in previews and reports.
    fn display(&self) -> String;
}

impl Answer for String {
    fn is_answered(&self) -> bool {
        !self.trim().is_empty()
    }

    fn display(&self) -> String {
        self.clone()
    }
}

impl Answer for Vec<String> {
    fn is_answered(&self) -> bool {
        !self.is_empty()
    }

    fn display(&self) -> String {
        self.join(", ")
    }
}

impl Answer for u32 {
    fn is_answered(&self) -> bool {
        true
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl Answer for PainScore {
    fn is_answered(&self) -> bool {
        true
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

macro_rules! labelled_answer {
    ($($ty:ty),*) => {
        $(
            impl Answer for $ty {
                fn is_answered(&self) -> bool {
                    true
                }

                fn display(&self) -> String {
                    self.label().to_string()
                }
            }
        )*
    };
}

labelled_answer!(PainRelief, AntibioticCompliance, CompressType, JawWiring);

answer_fields! {
    // Part 1: basic information (Q1-5)
    age: u32 => Age, "อายุ";
    gender: String => Gender, "เพศ";
    hn: String => Hn, "HN";
    procedures: Vec<String> => Procedures, "หัตถการที่ทำ";
    surgery_date: String => SurgeryDate, "วันที่ผ่าตัด";
    note: String => Note, "หมายเหตุสำหรับแพทย์";

    // Part 2: symptoms (Q6-20)
    pain_score: PainScore => PainScore, "ระดับความปวด";
    pain_medication_effective: PainRelief => PainMedicationEffective, "ยาแก้ปวดมีผล";
    swelling_status: String => SwellingStatus, "อาการบวม";
    swelling_description: String => SwellingDescription, "คำอธิบายอาการบวม";
    breathing_or_swallowing_difficulty: String => BreathingOrSwallowingDifficulty, "หายใจ/กลืนลำบาก";
    breathing_description: String => BreathingDescription, "คำอธิบายการหายใจ/กลืน";
    bleeding_status: String => BleedingStatus, "อาการเลือดออก";
    bleeding_description: String => BleedingDescription, "คำอธิบายอาการเลือดออก";
    fever_status: String => FeverStatus, "อาการไข้";
    fever_description: String => FeverDescription, "คำอธิบายอาการไข้";
    numbness_status: String => NumbnessStatus, "อาการชา";
    numbness_description: String => NumbnessDescription, "คำอธิบายอาการชา";
    phlebitis: String => Phlebitis, "บริเวณเข็มน้ำเกลือ";
    phlebitis_description: String => PhlebitisDescription, "คำอธิบายบริเวณเข็มน้ำเกลือ";
    suture_status: String => SutureStatus, "ไหมเย็บแผล";
    suture_description: String => SutureDescription, "คำอธิบายไหมเย็บแผล";
    other_symptoms: Vec<String> => OtherSymptoms, "อาการอื่นๆ";
    antibiotic_compliance: AntibioticCompliance => AntibioticCompliance, "การทานยาฆ่าเชื้อ";
    antibiotic_description: String => AntibioticDescription, "จำนวนครั้งที่ลืมทาน";
    compress_type: CompressType => CompressType, "ประคบ";
    has_imf: JawWiring => HasImf, "การมัดฟัน (IMF)";
    imf_wire_status: String => ImfWireStatus, "ลวด/ยางมัดฟัน";
    imf_wire_description: String => ImfWireDescription, "คำอธิบายลวด/ยางมัดฟัน";
    walking_status: String => WalkingStatus, "การเดิน";
    walking_description: String => WalkingDescription, "คำอธิบายการเดิน";

    // Part 3: daily life (Q21-27)
    brushing_teeth: String => BrushingTeeth, "การแปรงฟัน";
    brushing_description: String => BrushingDescription, "คำอธิบายการแปรงฟัน";
    mouth_rinsing: String => MouthRinsing, "การบ้วนปาก";
    rinsing_description: String => RinsingDescription, "คำอธิบายการบ้วนปาก";
    feeding_method: String => FeedingMethod, "วิธีการรับประทานอาหาร";
    feeding_description: String => FeedingDescription, "คำอธิบายวิธีการรับประทานอาหาร";
    food_types: Vec<String> => FoodTypes, "ประเภทอาหาร";
    food_amount: String => FoodAmount, "ปริมาณอาหาร";
    food_amount_description: String => FoodAmountDescription, "คำอธิบายปริมาณอาหาร";
    additional_questions: String => AdditionalQuestions, "คำถามเพิ่มเติม";
    ng_tube_position: String => NgTubePosition, "ตำแหน่งสายยาง";
    ng_tube_description: String => NgTubeDescription, "คำอธิบายตำแหน่งสายยาง";
}

/// Status questions and the free-text description tied to each.
///
/// A description is only meaningful while its parent is answered.
pub const DESCRIBED_FIELDS: &[(AnswerField, AnswerField)] = &[
    (AnswerField::SwellingStatus, AnswerField::SwellingDescription),
    (AnswerField::BreathingOrSwallowingDifficulty, AnswerField::BreathingDescription),
    (AnswerField::BleedingStatus, AnswerField::BleedingDescription),
    (AnswerField::FeverStatus, AnswerField::FeverDescription),
    (AnswerField::NumbnessStatus, AnswerField::NumbnessDescription),
    (AnswerField::Phlebitis, AnswerField::PhlebitisDescription),
    (AnswerField::SutureStatus, AnswerField::SutureDescription),
    (AnswerField::AntibioticCompliance, AnswerField::AntibioticDescription),
    (AnswerField::ImfWireStatus, AnswerField::ImfWireDescription),
    (AnswerField::WalkingStatus, AnswerField::WalkingDescription),
    (AnswerField::BrushingTeeth, AnswerField::BrushingDescription),
    (AnswerField::MouthRinsing, AnswerField::RinsingDescription),
    (AnswerField::FeedingMethod, AnswerField::FeedingDescription),
    (AnswerField::FoodAmount, AnswerField::FoodAmountDescription),
    (AnswerField::NgTubePosition, AnswerField::NgTubeDescription),
];

impl AnswerField {
    /// The description companion of a status question.
    pub fn description(&self) -> Option<AnswerField> {
        DESCRIBED_FIELDS
            .iter()
            .find(|(parent, _)| parent == self)
            .map(|(_, description)| *description)
    }

    /// True for the `*_description` companions.
    pub fn is_description(&self) -> bool {
        DESCRIBED_FIELDS.iter().any(|(_, description)| description == self)
    }
}

/// An ordered batch of field edits applied as one shallow merge.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerPatch {
    updates: Vec<FieldUpdate>,
}

impl AnswerPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an edit; later edits to the same field win.
    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.updates.push(update);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = AnswerField> + '_ {
        self.updates.iter().map(FieldUpdate::field)
    }
}

impl From<FieldUpdate> for AnswerPatch {
    fn from(update: FieldUpdate) -> Self {
        AnswerPatch::new().with(update)
    }
}

impl FromIterator<FieldUpdate> for AnswerPatch {
    fn from_iter<I: IntoIterator<Item = FieldUpdate>>(iter: I) -> Self {
        Self {
            updates: iter.into_iter().collect(),
        }
    }
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shallow merge: patched keys are replaced, all other keys are kept.
    pub fn merge(&mut self, patch: AnswerPatch) {
        for update in patch.updates {
            self.apply(update);
        }
    }

    /// Fields currently holding an answer, in questionnaire order.
    pub fn answered_fields(&self) -> Vec<AnswerField> {
        AnswerField::ALL
            .iter()
            .copied()
            .filter(|field| self.has(*field))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == AnswerSet::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pain_score_rejects_values_above_ten() {
        assert!(PainScore::new(10).is_ok());
        let err = PainScore::new(11).unwrap_err();
        assert!(err.to_string().contains("pain_score"));
    }

    #[test]
    fn pain_score_baseline_is_not_pain() {
        assert!(!PainScore::NONE.indicates_pain());
        assert!(PainScore::new(1).unwrap().indicates_pain());
    }

    #[test]
    fn merge_replaces_only_patched_keys() {
        let mut answers = AnswerSet::new();
        answers.merge(
            AnswerPatch::new()
                .with(FieldUpdate::Hn(Some("HN-001".into())))
                .with(FieldUpdate::Gender(Some("หญิง".into()))),
        );
        answers.merge(FieldUpdate::Hn(Some("HN-002".into())).into());

        assert_eq!(answers.hn.as_deref(), Some("HN-002"));
        assert_eq!(answers.gender.as_deref(), Some("หญิง"));
    }

    #[test]
    fn none_update_retracts_answer() {
        let mut answers = AnswerSet::new();
        answers.apply(FieldUpdate::FeverStatus(Some("ไม่มีไข้".into())));
        answers.apply(FieldUpdate::FeverStatus(None));
        assert!(answers.fever_status.is_none());
    }

    #[test]
    fn blank_text_and_empty_lists_are_not_answers() {
        let mut answers = AnswerSet::new();
        answers.hn = Some("   ".into());
        answers.procedures = Some(vec![]);
        assert!(!answers.has(AnswerField::Hn));
        assert!(!answers.has(AnswerField::Procedures));
        assert_eq!(answers.display_value(AnswerField::Hn), None);
    }

    #[test]
    fn pain_score_zero_counts_as_answered() {
        let mut answers = AnswerSet::new();
        answers.pain_score = Some(PainScore::NONE);
        assert!(answers.has(AnswerField::PainScore));
        assert_eq!(answers.display_value(AnswerField::PainScore).as_deref(), Some("0"));
    }

    #[test]
    fn absent_keys_are_skipped_when_serialized() {
        let mut answers = AnswerSet::new();
        answers.age = Some(42);
        let json = serde_json::to_value(&answers).unwrap();
        assert_eq!(json, serde_json::json!({ "age": 42 }));
    }

    #[test]
    fn field_keys_match_wire_names() {
        assert_eq!(AnswerField::BreathingOrSwallowingDifficulty.key(), "breathing_or_swallowing_difficulty");
        assert_eq!(AnswerField::from_key("has_imf"), Some(AnswerField::HasImf));
        assert_eq!(AnswerField::from_key("unknown"), None);
    }

    #[test]
    fn status_fields_know_their_description() {
        assert_eq!(
            AnswerField::AntibioticCompliance.description(),
            Some(AnswerField::AntibioticDescription)
        );
        assert_eq!(AnswerField::Age.description(), None);
        assert!(AnswerField::RinsingDescription.is_description());
    }

    #[test]
    fn out_of_range_pain_score_fails_to_deserialize() {
        let result = serde_json::from_str::<AnswerSet>(r#"{"pain_score": 42}"#);
        assert!(result.is_err());
    }
}
