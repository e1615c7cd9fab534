use crate::models::{ScrapRecord, ScrapSection};

/// Splits records into sections of consecutive equal dates.
///
/// Input is expected newest first. Nothing is sorted here: equal dates that are
/// not adjacent end up in separate sections.
pub fn group_by_date<I>(records: I) -> Vec<ScrapSection>
where
    I: IntoIterator<Item = ScrapRecord>,
{
    let mut sections: Vec<ScrapSection> = Vec::new();

    for record in records {
        match sections.last_mut() {
            Some(section) if section.date == record.date => section.records.push(record),
            _ => sections.push(ScrapSection {
                date: record.date,
                records: vec![record],
            }),
        }
    }

    sections
}

pub fn flatten(sections: Vec<ScrapSection>) -> Vec<ScrapRecord> {
    sections
        .into_iter()
        .flat_map(|section| section.records)
        .collect()
}
