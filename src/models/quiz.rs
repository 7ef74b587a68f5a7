// src/models/quiz.rs

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::question::Question;

/// Category id meaning "all categories" in quiz play.
pub const ALL_CATEGORIES: i64 = 0;

/// DTO for requesting the next quiz question.
///
/// The server keeps no quiz state; the client resends every id it has
/// already been shown.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    #[serde(deserialize_with = "deserialize_category_id")]
    pub id: i64,

    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategory {
    /// `None` for the "all categories" sentinel, otherwise the category to filter by.
    pub fn filter(&self) -> Option<i64> {
        (self.id != ALL_CATEGORIES).then_some(self.id)
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

// Category ids come from JSON object keys on the client, so "3" and 3 are both accepted.
fn deserialize_category_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Number(id) => Ok(id),
        RawId::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid category id '{}'", text))),
    }
}
