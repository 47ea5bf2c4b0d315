//! Shared fixtures for integration tests.

#![allow(dead_code)]

use postop_intake::domain::questionnaire::{
    AnswerPatch, AnswerSet, AntibioticCompliance, CompressType, FieldUpdate, JawWiring,
    PainRelief, PainScore,
};
use postop_intake::domain::submission::{ClassificationResult, RiskAssessment};

pub fn basic_info() -> AnswerPatch {
    AnswerPatch::new()
        .with(FieldUpdate::Age(Some(28)))
        .with(FieldUpdate::Gender(Some("ชาย".into())))
        .with(FieldUpdate::Hn(Some("HN-2026-001".into())))
        .with(FieldUpdate::Procedures(Some(vec!["ผ่าฟันคุด".into()])))
        .with(FieldUpdate::SurgeryDate(Some("2026-10-10".into())))
}

/// Step 2 with every gate open.
pub fn symptoms() -> AnswerPatch {
    AnswerPatch::new()
        .with(FieldUpdate::PainScore(Some(PainScore::new(5).expect("valid score"))))
        .with(FieldUpdate::PainMedicationEffective(Some(PainRelief::Improved)))
        .with(FieldUpdate::SwellingStatus(Some("บวมเล็กน้อย".into())))
        .with(FieldUpdate::BreathingOrSwallowingDifficulty(Some("ไม่มี".into())))
        .with(FieldUpdate::BleedingStatus(Some("ไม่มีเลือดออก".into())))
        .with(FieldUpdate::FeverStatus(Some("ไม่มีไข้".into())))
        .with(FieldUpdate::NumbnessStatus(Some("ไม่ชา".into())))
        .with(FieldUpdate::Phlebitis(Some("ปกติ".into())))
        .with(FieldUpdate::SutureStatus(Some("ปกติ".into())))
        .with(FieldUpdate::AntibioticCompliance(Some(AntibioticCompliance::ForgotOccasionally)))
        .with(FieldUpdate::AntibioticDescription(Some("1".into())))
        .with(FieldUpdate::CompressType(Some(CompressType::Cold)))
        .with(FieldUpdate::HasImf(Some(JawWiring::Wired)))
        .with(FieldUpdate::ImfWireStatus(Some("ลวดอยู่ครบ".into())))
        .with(FieldUpdate::WalkingStatus(Some("เดินได้ปกติ".into())))
}

pub fn daily_life() -> AnswerPatch {
    AnswerPatch::new()
        .with(FieldUpdate::BrushingTeeth(Some("แปรงฟันได้".into())))
        .with(FieldUpdate::MouthRinsing(Some("บ้วนปากได้".into())))
        .with(FieldUpdate::FeedingMethod(Some("รับประทานทางปาก".into())))
        .with(FieldUpdate::FoodTypes(Some(vec!["อาหารเหลว".into()])))
        .with(FieldUpdate::FoodAmount(Some("รับประทานอาหารปริมาณปกติ".into())))
        .with(FieldUpdate::NgTubePosition(Some("ไม่ได้ใส่สายยาง".into())))
}

pub fn complete_answers() -> AnswerSet {
    let mut answers = AnswerSet::new();
    answers.merge(basic_info());
    answers.merge(symptoms());
    answers.merge(daily_life());
    answers
}

pub fn classification(categories: &[&str]) -> ClassificationResult {
    categories
        .iter()
        .map(|category| {
            (
                category.to_string(),
                RiskAssessment {
                    risk_level: "ความเสี่ยงต่ำ".into(),
                    reason: "อาการอยู่ในเกณฑ์ปกติ".into(),
                    recommendation: "ติดตามอาการต่อเนื่อง".into(),
                },
            )
        })
        .collect()
}
