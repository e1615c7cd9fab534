mod briefing;
mod category;
mod scrap;

pub use briefing::{Article, BriefingCard, KeywordBriefing, Keywords};
pub use category::{BriefingCategory, KeywordsType};
pub use scrap::{ScrapRecord, ScrapSection};
