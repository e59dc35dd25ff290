//! Citation string rendering

use serde::Deserialize;

/// Bibliographic fields of one paper; every field may be absent
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaperDetails {
    pub paper_id: Option<String>,
    pub title: Option<String>,
    pub authors: Option<Vec<CitedAuthor>>,
    pub venue: Option<String>,
    pub year: Option<i64>,
    pub publication_date: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CitedAuthor {
    pub name: Option<String>,
}

impl PaperDetails {
    /// Publication year, falling back to the date prefix, then `n.d.`
    pub fn year_label(&self) -> String {
        if let Some(year) = self.year {
            return year.to_string();
        }
        self.publication_date
            .as_deref()
            .and_then(|date| date.get(..4))
            .unwrap_or("n.d.")
            .to_string()
    }

    fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    fn venue(&self) -> &str {
        self.venue.as_deref().unwrap_or_default()
    }

    fn author_names(&self) -> Vec<&str> {
        self.authors
            .iter()
            .flatten()
            .filter_map(|a| a.name.as_deref())
            .collect()
    }
}

/// Supported citation styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CitationFormat {
    #[default]
    BibTex,
    Apa,
    Mla,
    Chicago,
}

impl CitationFormat {
    /// Parse a style name case-insensitively; unknown names fall back to BibTeX
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "apa" => CitationFormat::Apa,
            "mla" => CitationFormat::Mla,
            "chicago" => CitationFormat::Chicago,
            _ => CitationFormat::BibTex,
        }
    }

    /// Render `paper`; `fallback_key` keys the BibTeX entry when the paper has no id
    pub fn render(self, paper: &PaperDetails, fallback_key: &str) -> String {
        match self {
            CitationFormat::BibTex => bibtex(paper, fallback_key),
            CitationFormat::Apa => format!(
                "{} ({}). {}. {}.",
                short_authors(&paper.author_names(), " & ", " et al."),
                paper.year_label(),
                paper.title(),
                paper.venue()
            ),
            CitationFormat::Mla => format!(
                "{}. \"{}.\" {}, {}.",
                short_authors(&paper.author_names(), ", and ", ", et al."),
                paper.title(),
                paper.venue(),
                paper.year_label()
            ),
            CitationFormat::Chicago => format!(
                "{}. \"{}.\" {} ({}).",
                short_authors(&paper.author_names(), " and ", " et al."),
                paper.title(),
                paper.venue(),
                paper.year_label()
            ),
        }
    }
}

fn bibtex(paper: &PaperDetails, fallback_key: &str) -> String {
    let key = paper.paper_id.as_deref().unwrap_or(fallback_key);
    format!(
        "@article{{{},\n  title={{{}}},\n  author={{{}}},\n  journal={{{}}},\n  year={{{}}}\n}}",
        key,
        paper.title(),
        paper.author_names().join(" and "),
        paper.venue(),
        paper.year_label()
    )
}

/// One author, two joined by `pair`, or the first followed by `many`
fn short_authors(names: &[&str], pair: &str, many: &str) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{}{}{}", first, pair, second),
        [first, ..] => format!("{}{}", first, many),
    }
}
