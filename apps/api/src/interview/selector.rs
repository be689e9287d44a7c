//! Question selection — skills → categories → bank questions, deduplicated.

use std::collections::HashSet;

use crate::interview::question_bank::{QuestionBank, QuestionEntry};
use crate::resume::skills::{Category, SkillTerm};

/// Selects the questions for a skill set.
///
/// An empty skill set yields no questions; callers apply the python fallback
/// (`SkillDetection::from_skills`) before getting here.
pub fn select_questions<'a>(bank: &'a QuestionBank, skills: &[SkillTerm]) -> Vec<&'a QuestionEntry> {
    let categories: Vec<Category> = skills.iter().map(|s| s.category()).collect();
    select_for_categories(bank, &categories)
}

/// Concatenates each category's questions and drops repeated prompts, keeping
/// first-seen order.
pub fn select_for_categories<'a>(
    bank: &'a QuestionBank,
    categories: &[Category],
) -> Vec<&'a QuestionEntry> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .flat_map(|&category| bank.questions_for(category))
        .filter(|q| seen.insert(q.prompt))
        .collect()
}
