// Résumé intake: PDF text extraction and skill-vocabulary matching.

pub mod extract;
#[cfg(test)]
pub mod fixtures;
pub mod handlers;
pub mod skills;
