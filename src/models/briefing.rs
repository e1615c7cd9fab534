use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefingCard {
    pub id: i64,
    pub ranks: i64,
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub date: NaiveDate,
    pub articles: Vec<Article>,
    pub is_scrap: bool,
    #[serde(default)]
    pub is_briefing_open: Option<bool>,
    #[serde(default)]
    pub is_warning: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: i64,
    pub press: String,
    pub title: String,
    pub url: String,
}

/// Response of the keyword list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keywords {
    pub created_at: NaiveDate,
    pub briefings: Vec<KeywordBriefing>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordBriefing {
    pub id: i64,
    pub ranks: i64,
    pub title: String,
    pub subtitle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_card_without_optional_flags() {
        let json = r#"{
            "id": 12,
            "ranks": 1,
            "title": "Chips",
            "subtitle": "Export rules tighten",
            "content": "...",
            "date": "2023-10-03",
            "articles": [{"id": 1, "press": "Yonhap", "title": "t", "url": "https://example.com/a"}],
            "isScrap": true
        }"#;
        let card: BriefingCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, 12);
        assert_eq!(card.date, NaiveDate::from_ymd_opt(2023, 10, 3).unwrap());
        assert_eq!(card.articles[0].press, "Yonhap");
        assert!(card.is_scrap);
        assert_eq!(card.is_briefing_open, None);
    }
}
