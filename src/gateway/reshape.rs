//! Reshaping of raw provider records into `PaperSummary` values

use super::models::{Author, PaperSummary};
use serde::Deserialize;
use serde_json::Value;

/// Why a record could not be reshaped
#[derive(Debug, thiserror::Error)]
pub enum ReshapeError {
    #[error("invalid record: {0}")]
    Invalid(#[from] serde_json::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),
}

/// Outcome of reshaping a single record
#[derive(Debug, Clone, PartialEq)]
pub enum Reshaped {
    Paper(PaperSummary),
    Skipped { reason: String },
}

impl Reshaped {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Reshaped::Skipped { .. })
    }
}

/// Record as the provider sends it; every field may be absent or null
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderRecord {
    title: Option<String>,
    #[serde(rename = "abstract")]
    abstract_text: Option<String>,
    paper_id: Option<String>,
    url: Option<String>,
    year: Option<i64>,
    authors: Option<Vec<ProviderAuthor>>,
    citation_count: Option<u64>,
    venue: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderAuthor {
    name: String,
}

/// Turns provider records into summaries, substituting defaults for absent fields
#[derive(Debug, Clone)]
pub struct Reshaper {
    missing_abstract: String,
}

impl Reshaper {
    pub fn new(missing_abstract: impl Into<String>) -> Self {
        Self {
            missing_abstract: missing_abstract.into(),
        }
    }

    /// Reshape one record, tagging it as skipped instead of failing
    pub fn reshape(&self, record: Value) -> Reshaped {
        match self.try_reshape(record) {
            Ok(paper) => Reshaped::Paper(paper),
            Err(e) => Reshaped::Skipped {
                reason: e.to_string(),
            },
        }
    }

    fn try_reshape(&self, record: Value) -> Result<PaperSummary, ReshapeError> {
        let record: ProviderRecord = serde_json::from_value(record)?;

        let title = record.title.ok_or(ReshapeError::MissingField("title"))?;
        let paper_id = record.paper_id.ok_or(ReshapeError::MissingField("paperId"))?;
        let url = record.url.ok_or(ReshapeError::MissingField("url"))?;

        // empty abstracts count as missing
        let abstract_text = record
            .abstract_text
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| self.missing_abstract.clone());

        let authors = record
            .authors
            .unwrap_or_default()
            .into_iter()
            .map(|a| Author { name: a.name })
            .collect();

        Ok(PaperSummary {
            title,
            abstract_text,
            paper_id,
            url,
            year: record.year,
            authors,
            citation_count: record.citation_count.unwrap_or(0),
            venue: record.venue,
        })
    }
}

impl Default for Reshaper {
    fn default() -> Self {
        Self::new(crate::config::SearchSettings::default().missing_abstract)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_record() -> Value {
        json!({
            "paperId": "204e3073870fae3d05bcbc2f6a8e263d9b72e776",
            "url": "https://www.semanticscholar.org/paper/204e3073870fae3d05bcbc2f6a8e263d9b72e776",
            "title": "Attention is All you Need",
            "abstract": "The dominant sequence transduction models...",
            "venue": "Neural Information Processing Systems",
            "year": 2017,
            "citationCount": 120000,
            "authors": [
                {"authorId": "40348417", "name": "Ashish Vaswani"},
                {"authorId": "1846258", "name": "Noam M. Shazeer"}
            ]
        })
    }

    fn paper(outcome: Reshaped) -> PaperSummary {
        match outcome {
            Reshaped::Paper(p) => p,
            Reshaped::Skipped { reason } => panic!("record skipped: {}", reason),
        }
    }

    #[test]
    fn test_full_record() {
        let p = paper(Reshaper::default().reshape(full_record()));
        assert_eq!(p.title, "Attention is All you Need");
        assert_eq!(p.year, Some(2017));
        assert_eq!(p.citation_count, 120000);
        assert_eq!(p.venue.as_deref(), Some("Neural Information Processing Systems"));
        assert_eq!(
            p.authors.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            vec!["Ashish Vaswani", "Noam M. Shazeer"]
        );
    }

    #[test]
    fn test_defaults_for_absent_fields() {
        let record = json!({"paperId": "p1", "url": "https://s2/p1", "title": "Bare"});
        let p = paper(Reshaper::default().reshape(record));
        assert_eq!(p.abstract_text, "No abstract available");
        assert_eq!(p.citation_count, 0);
        assert!(p.authors.is_empty());
        assert_eq!(p.year, None);
        assert_eq!(p.venue, None);
    }

    #[test]
    fn test_defaults_for_null_and_empty_fields() {
        let record = json!({
            "paperId": "p1",
            "url": "https://s2/p1",
            "title": "Nulls",
            "abstract": "",
            "citationCount": null,
            "authors": null,
            "year": null,
            "venue": ""
        });
        let p = paper(Reshaper::new("n/a").reshape(record));
        assert_eq!(p.abstract_text, "n/a");
        assert_eq!(p.citation_count, 0);
        assert!(p.authors.is_empty());
        assert_eq!(p.venue.as_deref(), Some(""));
    }

    #[test]
    fn test_bad_records_are_skipped() {
        let reshaper = Reshaper::default();
        let mut wrong_year = full_record();
        wrong_year["year"] = json!("2017");
        let mut nameless_author = full_record();
        nameless_author["authors"] = json!([{"authorId": "1"}]);
        let mut no_title = full_record();
        no_title["title"] = Value::Null;

        for record in [wrong_year, nameless_author, no_title, json!("not an object")] {
            assert!(reshaper.reshape(record).is_skipped());
        }
    }

    #[test]
    fn test_skip_reason_names_field() {
        let mut record = full_record();
        record.as_object_mut().unwrap().remove("paperId");
        match Reshaper::default().reshape(record) {
            Reshaped::Skipped { reason } => assert_eq!(reason, "missing field `paperId`"),
            other => panic!("expected skip, got {:?}", other),
        }
    }
}
