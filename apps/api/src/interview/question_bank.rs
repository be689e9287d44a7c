//! Static question bank. Each prompt is stored next to its single reference
//! answer, so any question the selector returns can always be scored.

use crate::resume::skills::Category;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuestionEntry {
    pub prompt: &'static str,
    pub category: Category,
    pub reference: &'static str,
}

const BUILTIN_QUESTIONS: &[QuestionEntry] = &[
    QuestionEntry {
        prompt: "Explain OOP in Python.",
        category: Category::Python,
        reference: "Object oriented programming is based on classes and objects with concepts like inheritance and polymorphism.",
    },
    QuestionEntry {
        prompt: "What is the difference between list and tuple?",
        category: Category::Python,
        reference: "List is mutable while tuple is immutable.",
    },
    QuestionEntry {
        prompt: "What is overfitting?",
        category: Category::MachineLearning,
        reference: "Overfitting occurs when a model performs well on training data but poorly on new data.",
    },
    QuestionEntry {
        prompt: "Explain bias-variance tradeoff.",
        category: Category::MachineLearning,
        reference: "Bias is error due to wrong assumptions and variance is error due to sensitivity to small changes.",
    },
    QuestionEntry {
        prompt: "What is data preprocessing?",
        category: Category::DataScience,
        reference: "It involves cleaning and transforming raw data into usable format.",
    },
    QuestionEntry {
        prompt: "Explain normalization.",
        category: Category::DataScience,
        reference: "Normalization scales data to a standard range.",
    },
    QuestionEntry {
        prompt: "What is scalability in cloud computing?",
        category: Category::Cloud,
        reference: "Scalability is the ability to increase or decrease resources based on demand.",
    },
    QuestionEntry {
        prompt: "Explain IaaS vs PaaS.",
        category: Category::Cloud,
        reference: "IaaS provides infrastructure while PaaS provides development platform.",
    },
    QuestionEntry {
        prompt: "What is jitter?",
        category: Category::Networking,
        reference: "Jitter is variation in packet delay.",
    },
    QuestionEntry {
        prompt: "Explain packet loss.",
        category: Category::Networking,
        reference: "Packet loss occurs when packets fail to reach destination.",
    },
];

/// Immutable question table, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    entries: &'static [QuestionEntry],
}

impl QuestionBank {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_QUESTIONS)
    }

    pub fn from_entries(entries: &'static [QuestionEntry]) -> Self {
        Self { entries }
    }

    /// Questions filed under `category`, in bank order. Empty for unlisted categories.
    pub fn questions_for(&self, category: Category) -> impl Iterator<Item = &QuestionEntry> {
        self.entries.iter().filter(move |q| q.category == category)
    }

    pub fn find(&self, prompt: &str) -> Option<&QuestionEntry> {
        self.entries.iter().find(|q| q.prompt == prompt)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
