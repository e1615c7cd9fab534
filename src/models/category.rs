use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Content categories shown as tabs in the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BriefingCategory {
    Social,
    Science,
    Global,
    Economy,
    Culture,
}

/// Keyword tags the server understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KeywordsType {
    Korea,
    Global,
    Social,
    Science,
}

impl BriefingCategory {
    pub const ALL: [BriefingCategory; 5] = [
        BriefingCategory::Social,
        BriefingCategory::Science,
        BriefingCategory::Global,
        BriefingCategory::Economy,
        BriefingCategory::Culture,
    ];

    pub fn keyword_type(&self) -> KeywordsType {
        match self {
            BriefingCategory::Social => KeywordsType::Social,
            BriefingCategory::Science => KeywordsType::Science,
            BriefingCategory::Global => KeywordsType::Global,
            // No economy tag on the server yet; falls back to SOCIAL until one exists.
            BriefingCategory::Economy => KeywordsType::Social,
            BriefingCategory::Culture => KeywordsType::Korea,
        }
    }
}

impl FromStr for BriefingCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "social" => Ok(BriefingCategory::Social),
            "science" => Ok(BriefingCategory::Science),
            "global" => Ok(BriefingCategory::Global),
            "economy" => Ok(BriefingCategory::Economy),
            "culture" => Ok(BriefingCategory::Culture),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

impl KeywordsType {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordsType::Korea => "KOREA",
            KeywordsType::Global => "GLOBAL",
            KeywordsType::Social => "SOCIAL",
            KeywordsType::Science => "SCIENCE",
        }
    }
}

impl fmt::Display for KeywordsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_is_deterministic() {
        for category in BriefingCategory::ALL {
            assert_eq!(category.keyword_type(), category.keyword_type());
        }
    }

    #[test]
    fn economy_falls_back_to_social() {
        assert_eq!(BriefingCategory::Economy.keyword_type(), KeywordsType::Social);
        assert_eq!(BriefingCategory::Culture.keyword_type(), KeywordsType::Korea);
    }

    #[test]
    fn wire_tags_match_serde() {
        assert_eq!(
            serde_json::to_string(&KeywordsType::Korea).unwrap(),
            format!("\"{}\"", KeywordsType::Korea.as_str())
        );
    }
}
