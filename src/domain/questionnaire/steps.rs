//! Questionnaire step layout.
//!
//! A questionnaire is an ordered list of steps, each carrying the rule that
//! gates progression past it. The post-operative follow-up form has three:
//!
//! 1. Basic information (Q1-5) → 2. Symptoms (Q6-20) → 3. Daily life (Q21-27)
//!
//! The wizard only relies on the list, so other layouts work the same way.

use super::answers::{AnswerField, AnswerSet};
use super::validation::{
    basic_info_complete, basic_info_requirements, daily_life_complete, daily_life_requirements,
    missing_fields, symptoms_complete, symptoms_requirements, RequirementList, StepRule,
};

/// One page of the wizard.
#[derive(Debug, Clone, Copy)]
pub struct StepDefinition {
    pub title: &'static str,
    /// Question range shown under the title, e.g. "ข้อ 1-5".
    pub subtitle: &'static str,
    rule: StepRule,
    requirements: RequirementList,
}

impl StepDefinition {
    pub const fn new(
        title: &'static str,
        subtitle: &'static str,
        rule: StepRule,
        requirements: RequirementList,
    ) -> Self {
        Self {
            title,
            subtitle,
            rule,
            requirements,
        }
    }

    /// Whether the step's required fields are satisfied.
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        (self.rule)(answers)
    }

    /// Required fields still unanswered.
    pub fn missing(&self, answers: &AnswerSet) -> Vec<AnswerField> {
        missing_fields(answers, self.requirements)
    }
}

/// Ordered steps of a questionnaire. Step numbers are 1-based.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    steps: Vec<StepDefinition>,
}

impl Questionnaire {
    /// Builds a questionnaire from at least one step.
    pub fn new(steps: Vec<StepDefinition>) -> Option<Self> {
        if steps.is_empty() {
            None
        } else {
            Some(Self { steps })
        }
    }

    /// The three-part post-operative follow-up form.
    pub fn post_operative() -> Self {
        Self {
            steps: vec![
                StepDefinition::new(
                    "ข้อมูลพื้นฐาน",
                    "ข้อ 1-5",
                    basic_info_complete,
                    basic_info_requirements,
                ),
                StepDefinition::new(
                    "อาการ",
                    "ข้อ 6-20",
                    symptoms_complete,
                    symptoms_requirements,
                ),
                StepDefinition::new(
                    "การใช้ชีวิตประจำวัน",
                    "ข้อ 21-27",
                    daily_life_complete,
                    daily_life_requirements,
                ),
            ],
        }
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Step by 1-based number.
    pub fn step(&self, number: usize) -> Option<&StepDefinition> {
        number.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    pub fn contains(&self, number: usize) -> bool {
        (1..=self.step_count()).contains(&number)
    }

    /// Completion of every step, indexed from step 1.
    pub fn validity(&self, answers: &AnswerSet) -> Vec<bool> {
        self.steps.iter().map(|step| step.is_complete(answers)).collect()
    }

    /// True when every step is complete.
    pub fn is_complete(&self, answers: &AnswerSet) -> bool {
        self.steps.iter().all(|step| step.is_complete(answers))
    }
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self::post_operative()
    }
}
