//! Skill detection — substring scan of résumé text against a fixed vocabulary,
//! plus the many-to-one mapping from skill terms to question-bank categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One entry of the closed skill vocabulary. Serialized as its literal term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillTerm {
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "machine learning")]
    MachineLearning,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "deep learning")]
    DeepLearning,
    #[serde(rename = "data science")]
    DataScience,
    #[serde(rename = "aws")]
    Aws,
    #[serde(rename = "azure")]
    Azure,
    #[serde(rename = "cloud")]
    Cloud,
    #[serde(rename = "networking")]
    Networking,
    #[serde(rename = "computer networks")]
    ComputerNetworks,
}

/// Canonical key into the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "machine learning")]
    MachineLearning,
    #[serde(rename = "data science")]
    DataScience,
    #[serde(rename = "cloud")]
    Cloud,
    #[serde(rename = "networking")]
    Networking,
}

/// Skill set used when a résumé matches nothing in the vocabulary.
pub const FALLBACK_SKILL: SkillTerm = SkillTerm::Python;

pub const FALLBACK_WARNING: &str =
    "No matching predefined skills found. Using default Python questions.";

impl SkillTerm {
    /// Vocabulary in detection order.
    pub const ALL: [SkillTerm; 10] = [
        SkillTerm::Python,
        SkillTerm::MachineLearning,
        SkillTerm::Ml,
        SkillTerm::DeepLearning,
        SkillTerm::DataScience,
        SkillTerm::Aws,
        SkillTerm::Azure,
        SkillTerm::Cloud,
        SkillTerm::Networking,
        SkillTerm::ComputerNetworks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillTerm::Python => "python",
            SkillTerm::MachineLearning => "machine learning",
            SkillTerm::Ml => "ml",
            SkillTerm::DeepLearning => "deep learning",
            SkillTerm::DataScience => "data science",
            SkillTerm::Aws => "aws",
            SkillTerm::Azure => "azure",
            SkillTerm::Cloud => "cloud",
            SkillTerm::Networking => "networking",
            SkillTerm::ComputerNetworks => "computer networks",
        }
    }

    /// Collapses synonymous terms; a term without an explicit mapping is its own category.
    pub fn category(self) -> Category {
        match self {
            SkillTerm::Ml | SkillTerm::DeepLearning | SkillTerm::MachineLearning => {
                Category::MachineLearning
            }
            SkillTerm::Aws | SkillTerm::Azure | SkillTerm::Cloud => Category::Cloud,
            SkillTerm::ComputerNetworks | SkillTerm::Networking => Category::Networking,
            SkillTerm::Python => Category::Python,
            SkillTerm::DataScience => Category::DataScience,
        }
    }
}

impl fmt::Display for SkillTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SkillTerm::ALL
            .iter()
            .copied()
            .find(|term| term.as_str() == needle)
            .ok_or_else(|| format!("Unknown skill term '{s}'"))
    }
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Python => "python",
            Category::MachineLearning => "machine learning",
            Category::DataScience => "data science",
            Category::Cloud => "cloud",
            Category::Networking => "networking",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of skill detection after the fallback rule has been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillDetection {
    pub skills: Vec<SkillTerm>,
    pub used_fallback: bool,
}

impl SkillDetection {
    /// Wraps an explicit skill set, substituting the fallback when it is empty.
    pub fn from_skills(skills: Vec<SkillTerm>) -> Self {
        if skills.is_empty() {
            Self {
                skills: vec![FALLBACK_SKILL],
                used_fallback: true,
            }
        } else {
            Self {
                skills,
                used_fallback: false,
            }
        }
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.used_fallback.then_some(FALLBACK_WARNING)
    }

    /// Distinct categories of the detected skills, first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for skill in &self.skills {
            let category = skill.category();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        categories
    }
}

/// Returns every vocabulary term that occurs as a raw substring of `text`.
///
/// `text` is expected to be lower-cased already. Matching does not respect word
/// boundaries, so "ml" is found inside "html".
pub fn detect_skills(text: &str) -> Vec<SkillTerm> {
    SkillTerm::ALL
        .iter()
        .copied()
        .filter(|term| text.contains(term.as_str()))
        .collect()
}

pub fn detect_skills_or_default(text: &str) -> SkillDetection {
    SkillDetection::from_skills(detect_skills(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_single_python_term() {
        assert_eq!(
            detect_skills("five years of python scripting"),
            vec![SkillTerm::Python]
        );
    }

    #[test]
    fn test_detects_aws_only() {
        assert_eq!(detect_skills("deployed services on aws"), vec![SkillTerm::Aws]);
    }

    #[test]
    fn test_detection_is_subset_of_vocabulary_and_deterministic() {
        let text = "python, deep learning, azure cloud and computer networks";
        let first = detect_skills(text);
        let second = detect_skills(text);
        assert_eq!(first, second);
        assert!(first.iter().all(|s| SkillTerm::ALL.contains(s)));
    }

    #[test]
    fn test_networking_and_computer_networks_match_independently() {
        let only_networks = detect_skills("studied computer networks");
        assert_eq!(only_networks, vec![SkillTerm::ComputerNetworks]);

        let both = detect_skills("networking lab, computer networks course");
        assert!(both.contains(&SkillTerm::Networking));
        assert!(both.contains(&SkillTerm::ComputerNetworks));
    }

    #[test]
    fn test_ml_matches_inside_longer_words() {
        assert_eq!(detect_skills("html and css"), vec![SkillTerm::Ml]);
    }

    #[test]
    fn test_machine_learning_does_not_imply_ml() {
        assert_eq!(
            detect_skills("machine learning"),
            vec![SkillTerm::MachineLearning]
        );
    }

    #[test]
    fn test_no_terms_falls_back_to_python() {
        let detection = detect_skills_or_default("accountant with excel experience");
        assert_eq!(detection.skills, vec![SkillTerm::Python]);
        assert!(detection.used_fallback);
        assert_eq!(detection.warning(), Some(FALLBACK_WARNING));
    }

    #[test]
    fn test_detected_terms_do_not_warn() {
        let detection = detect_skills_or_default("python");
        assert!(!detection.used_fallback);
        assert_eq!(detection.warning(), None);
    }

    #[test]
    fn test_ml_and_deep_learning_share_category() {
        assert_eq!(SkillTerm::Ml.category(), Category::MachineLearning);
        assert_eq!(SkillTerm::DeepLearning.category(), Category::MachineLearning);
        assert_eq!(SkillTerm::Ml.category(), SkillTerm::DeepLearning.category());
    }

    #[test]
    fn test_cloud_and_networking_mappings() {
        assert_eq!(SkillTerm::Aws.category(), Category::Cloud);
        assert_eq!(SkillTerm::Azure.category(), Category::Cloud);
        assert_eq!(SkillTerm::ComputerNetworks.category(), Category::Networking);
    }

    #[test]
    fn test_unmapped_terms_map_to_themselves() {
        for term in [
            SkillTerm::Python,
            SkillTerm::MachineLearning,
            SkillTerm::DataScience,
            SkillTerm::Cloud,
            SkillTerm::Networking,
        ] {
            assert_eq!(term.as_str(), term.category().as_str());
        }
    }

    #[test]
    fn test_categories_are_deduplicated() {
        let detection =
            SkillDetection::from_skills(vec![SkillTerm::Ml, SkillTerm::DeepLearning, SkillTerm::Aws]);
        assert_eq!(
            detection.categories(),
            vec![Category::MachineLearning, Category::Cloud]
        );
    }

    #[test]
    fn test_skill_term_parses_case_insensitively() {
        assert_eq!("Deep Learning".parse::<SkillTerm>(), Ok(SkillTerm::DeepLearning));
        assert!("rust".parse::<SkillTerm>().is_err());
    }

    #[test]
    fn test_skill_term_serializes_as_literal() {
        let json = serde_json::to_string(&SkillTerm::ComputerNetworks).unwrap();
        assert_eq!(json, r#""computer networks""#);
    }
}
