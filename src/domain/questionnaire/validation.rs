//! Step validation rules.
//!
//! One pure rule per wizard step. A rule lists the fields the step requires
//! for the current answers, including conditionally required follow-ups, and
//! the step is complete when every listed field is answered. Rules never touch
//! storage or the network and run on every edit.

use super::answers::{AnswerField, AnswerSet};

/// Pure predicate deciding whether a step is complete.
pub type StepRule = fn(&AnswerSet) -> bool;

/// Lists the fields a step currently requires.
pub type RequirementList = fn(&AnswerSet) -> Vec<AnswerField>;

/// Whether a single required field is satisfied.
///
/// Age zero is treated as unanswered; every other field only needs a non-empty
/// value.
pub fn is_satisfied(answers: &AnswerSet, field: AnswerField) -> bool {
    match field {
        AnswerField::Age => answers.age.is_some_and(|age| age > 0),
        other => answers.has(other),
    }
}

/// Fields required by part 1 (basic information).
pub fn basic_info_requirements(_answers: &AnswerSet) -> Vec<AnswerField> {
    vec![
        AnswerField::Age,
        AnswerField::Gender,
        AnswerField::Hn,
        AnswerField::Procedures,
        AnswerField::SurgeryDate,
    ]
}

/// Fields required by part 2 (symptoms).
///
/// Follow-ups are only required while their gate is open:
/// - pain-medication effect when the pain score is above zero,
/// - missed-dose count when antibiotics were forgotten occasionally,
/// - wire status when the jaw is wired.
pub fn symptoms_requirements(answers: &AnswerSet) -> Vec<AnswerField> {
    let mut required = vec![AnswerField::PainScore];

    if answers.pain_score.is_some_and(|score| score.indicates_pain()) {
        required.push(AnswerField::PainMedicationEffective);
    }

    required.extend([
        AnswerField::SwellingStatus,
        AnswerField::BreathingOrSwallowingDifficulty,
        AnswerField::BleedingStatus,
        AnswerField::FeverStatus,
        AnswerField::NumbnessStatus,
        AnswerField::Phlebitis,
        AnswerField::SutureStatus,
        AnswerField::AntibioticCompliance,
    ]);

    if answers
        .antibiotic_compliance
        .is_some_and(|compliance| compliance.needs_missed_dose_count())
    {
        required.push(AnswerField::AntibioticDescription);
    }

    required.extend([AnswerField::CompressType, AnswerField::HasImf]);

    if answers.has_imf.is_some_and(|wiring| wiring.is_wired()) {
        required.push(AnswerField::ImfWireStatus);
    }

    required.push(AnswerField::WalkingStatus);
    required
}

/// Fields required by part 3 (daily life).
pub fn daily_life_requirements(_answers: &AnswerSet) -> Vec<AnswerField> {
    vec![
        AnswerField::BrushingTeeth,
        AnswerField::MouthRinsing,
        AnswerField::FeedingMethod,
        AnswerField::FoodTypes,
        AnswerField::FoodAmount,
        AnswerField::NgTubePosition,
    ]
}

fn all_satisfied(answers: &AnswerSet, required: Vec<AnswerField>) -> bool {
    required.into_iter().all(|field| is_satisfied(answers, field))
}

pub fn basic_info_complete(answers: &AnswerSet) -> bool {
    all_satisfied(answers, basic_info_requirements(answers))
}

pub fn symptoms_complete(answers: &AnswerSet) -> bool {
    all_satisfied(answers, symptoms_requirements(answers))
}

pub fn daily_life_complete(answers: &AnswerSet) -> bool {
    all_satisfied(answers, daily_life_requirements(answers))
}

/// Unsatisfied fields of a requirement list, for diagnostics.
pub fn missing_fields(answers: &AnswerSet, requirements: RequirementList) -> Vec<AnswerField> {
    requirements(answers)
        .into_iter()
        .filter(|field| !is_satisfied(answers, *field))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::questionnaire::answers::PainScore;
    use crate::domain::questionnaire::options::{
        AntibioticCompliance, CompressType, JawWiring, PainRelief,
    };

    fn basic_info() -> AnswerSet {
        AnswerSet {
            age: Some(34),
            gender: Some("ชาย".into()),
            hn: Some("HN-1234".into()),
            procedures: Some(vec!["ถอนฟัน (Extraction)".into()]),
            surgery_date: Some("2025-01-10".into()),
            ..AnswerSet::default()
        }
    }

    fn symptoms(pain: u8) -> AnswerSet {
        AnswerSet {
            pain_score: Some(PainScore::new(pain).unwrap()),
            swelling_status: Some("บวมลดลง".into()),
            breathing_or_swallowing_difficulty: Some("ไม่มี".into()),
            bleeding_status: Some("ไม่มีเลือดซึมหรือไหลแล้ว".into()),
            fever_status: Some("ไม่มีไข้".into()),
            numbness_status: Some("หายชาแล้วหลังทำหัตถการ".into()),
            phlebitis: Some("ไม่มีอาการปวด/บวม/แดง รอบรอยเข็ม".into()),
            suture_status: Some("ไหมแน่นดี / ไม่ได้สังเกต".into()),
            antibiotic_compliance: Some(AntibioticCompliance::AsPrescribed),
            compress_type: Some(CompressType::Cold),
            has_imf: Some(JawWiring::NotWired),
            walking_status: Some("เดินได้ปกติ".into()),
            ..AnswerSet::default()
        }
    }

    #[test]
    fn basic_info_requires_all_five_fields() {
        assert!(basic_info_complete(&basic_info()));

        let mut answers = basic_info();
        answers.procedures = Some(vec![]);
        assert!(!basic_info_complete(&answers));
        assert_eq!(
            missing_fields(&answers, basic_info_requirements),
            vec![AnswerField::Procedures]
        );
    }

    #[test]
    fn zero_age_is_not_an_answer() {
        let mut answers = basic_info();
        answers.age = Some(0);
        assert!(!basic_info_complete(&answers));
    }

    #[test]
    fn pain_follow_up_not_required_at_baseline() {
        assert!(symptoms_complete(&symptoms(0)));
    }

    #[test]
    fn pain_follow_up_required_above_baseline() {
        let answers = symptoms(5);
        assert!(!symptoms_complete(&answers));
        assert_eq!(
            missing_fields(&answers, symptoms_requirements),
            vec![AnswerField::PainMedicationEffective]
        );

        let mut answered = answers;
        answered.pain_medication_effective = Some(PainRelief::Improved);
        assert!(symptoms_complete(&answered));
    }

    #[test]
    fn missed_dose_count_only_required_when_forgetting() {
        let mut answers = symptoms(0);
        answers.antibiotic_compliance = Some(AntibioticCompliance::NeverTook);
        assert!(symptoms_complete(&answers));

        answers.antibiotic_compliance = Some(AntibioticCompliance::ForgotOccasionally);
        assert!(!symptoms_complete(&answers));

        answers.antibiotic_description = Some("2".into());
        assert!(symptoms_complete(&answers));
    }

    #[test]
    fn wire_status_only_required_when_wired() {
        let mut answers = symptoms(0);
        answers.has_imf = Some(JawWiring::Wired);
        assert!(!symptoms_complete(&answers));

        answers.imf_wire_status = Some("ลวด/ยางมัดฟันแน่นดี".into());
        assert!(symptoms_complete(&answers));
    }

    #[test]
    fn missing_pain_score_blocks_symptoms() {
        let mut answers = symptoms(0);
        answers.pain_score = None;
        assert!(!symptoms_complete(&answers));
    }

    #[test]
    fn daily_life_needs_a_food_type() {
        let mut answers = AnswerSet {
            brushing_teeth: Some("แปรงฟันได้".into()),
            mouth_rinsing: Some("บ้วนปากได้".into()),
            feeding_method: Some("รับประทานอาหารได้ปกติ".into()),
            food_amount: Some("รับประทานอาหารปริมาณปกติ".into()),
            ng_tube_position: Some("สายยางอยู่ในตำแหน่งเดิม,  เทปยึดจมูกกับสายแน่นดี ไม่เลื่อนหลุด".into()),
            ..AnswerSet::default()
        };
        assert!(!daily_life_complete(&answers));

        answers.food_types = Some(vec!["อาหารปั่นเหลวมีกาก เช่น โจ๊กปั่นเหลว ไก่ปั่น".into()]);
        assert!(daily_life_complete(&answers));
    }

    #[test]
    fn descriptions_are_never_required_for_ungated_steps() {
        let answers = basic_info();
        let required = daily_life_requirements(&answers);
        assert!(required.iter().all(|field| !field.is_description()));
    }
}
