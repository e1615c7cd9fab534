use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One briefing saved to a member's scrapbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapRecord {
    pub briefing_id: i64,
    pub title: String,
    pub subtitle: String,
    pub date: NaiveDate,
    pub time_of_day: String,
    #[serde(rename = "ranks")]
    pub rank: i64,
    #[serde(rename = "gptModel")]
    pub model_info: String,
}

/// Records sharing one date, in the order they arrived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapSection {
    pub date: NaiveDate,
    pub records: Vec<ScrapRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_names() {
        let json = r#"{
            "briefingId": 4,
            "title": "Rates",
            "subtitle": "Bank of Korea holds",
            "date": "2024-01-15",
            "timeOfDay": "Morning",
            "ranks": 2,
            "gptModel": "GPT-4"
        }"#;
        let record: ScrapRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.briefing_id, 4);
        assert_eq!(record.rank, 2);
        assert_eq!(record.model_info, "GPT-4");
        assert_eq!(record.time_of_day, "Morning");
    }
}
