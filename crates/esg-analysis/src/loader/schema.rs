//! Canonical columns and header synonym resolution.

use esg_core::errors::SchemaError;

/// Columns the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalColumn {
    Company,
    Content,
    Title,
    Date,
    Source,
    MarketCap,
    Debt,
}

impl CanonicalColumn {
    pub fn name(self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Content => "content",
            Self::Title => "title",
            Self::Date => "date",
            Self::Source => "source",
            Self::MarketCap => "market_cap",
            Self::Debt => "debt",
        }
    }

    /// Resolve a normalized header, including its Korean synonyms.
    pub fn from_header(header: &str) -> Option<Self> {
        match header {
            "company" | "회사" | "기업" => Some(Self::Company),
            "content" | "내용" | "본문" => Some(Self::Content),
            "title" | "제목" | "기사제목" => Some(Self::Title),
            "date" | "날짜" | "작성일" => Some(Self::Date),
            "source" | "출처" => Some(Self::Source),
            "market_cap" | "시가총액" => Some(Self::MarketCap),
            "debt" | "부채비율" => Some(Self::Debt),
            _ => None,
        }
    }
}

/// Normalize a raw header cell: drop BOMs, surrounding whitespace and
/// quotes, then lowercase.
pub fn normalize_header(raw: &str) -> String {
    raw.replace('\u{feff}', "")
        .trim()
        .trim_matches('"')
        .trim_matches('\'')
        .to_lowercase()
}

/// Positions of the canonical columns within a record.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    pub company: usize,
    pub content: usize,
    pub title: Option<usize>,
    pub date: Option<usize>,
    pub source: Option<usize>,
    pub market_cap: Option<usize>,
    pub debt: Option<usize>,
    /// Headers after normalization and synonym mapping, in input order.
    pub observed: Vec<String>,
}

impl ColumnMap {
    /// Build the map from raw header cells. The first header resolving to a
    /// canonical column wins; later duplicates are ignored.
    pub fn from_headers<'a, I>(headers: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut slots: [Option<usize>; 7] = [None; 7];
        let mut observed = Vec::new();

        for (idx, raw) in headers.into_iter().enumerate() {
            let normalized = normalize_header(raw);
            match CanonicalColumn::from_header(&normalized) {
                Some(column) => {
                    let slot = &mut slots[column as usize];
                    if slot.is_some() {
                        tracing::warn!(
                            column = column.name(),
                            header = %normalized,
                            "duplicate column after synonym mapping, keeping the first"
                        );
                    } else {
                        *slot = Some(idx);
                    }
                    observed.push(column.name().to_string());
                }
                None => observed.push(normalized),
            }
        }

        if observed.is_empty() {
            return Err(SchemaError::NoHeader);
        }

        let required = |column: CanonicalColumn| {
            slots[column as usize].ok_or_else(|| SchemaError::MissingColumn {
                column: column.name().to_string(),
                observed: observed.clone(),
            })
        };
        let company = required(CanonicalColumn::Company)?;
        let content = required(CanonicalColumn::Content)?;

        Ok(Self {
            company,
            content,
            title: slots[CanonicalColumn::Title as usize],
            date: slots[CanonicalColumn::Date as usize],
            source: slots[CanonicalColumn::Source as usize],
            market_cap: slots[CanonicalColumn::MarketCap as usize],
            debt: slots[CanonicalColumn::Debt as usize],
            observed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header_strips_bom_quotes_and_case() {
        assert_eq!(normalize_header("\u{feff}\"Company\" "), "company");
        assert_eq!(normalize_header("'TITLE'"), "title");
    }

    #[test]
    fn test_korean_synonyms_resolve() {
        let map = ColumnMap::from_headers(["기업", "기사제목", "본문", "작성일", "출처"]).unwrap();
        assert_eq!(map.company, 0);
        assert_eq!(map.title, Some(1));
        assert_eq!(map.content, 2);
        assert_eq!(map.date, Some(3));
        assert_eq!(map.source, Some(4));
        assert_eq!(map.observed, vec!["company", "title", "content", "date", "source"]);
    }

    #[test]
    fn test_missing_content_names_observed_columns() {
        let err = ColumnMap::from_headers(["Company", "Title", "Extra"]).unwrap_err();
        match err {
            SchemaError::MissingColumn { column, observed } => {
                assert_eq!(column, "content");
                assert_eq!(observed, vec!["company", "title", "extra"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_company_checked_before_content() {
        let err = ColumnMap::from_headers(["title"]).unwrap_err();
        assert!(err.to_string().contains("'company'"));
    }

    #[test]
    fn test_first_duplicate_wins() {
        let map = ColumnMap::from_headers(["company", "내용", "content"]).unwrap();
        assert_eq!(map.content, 1);
    }

    #[test]
    fn test_optional_columns_absent() {
        let map = ColumnMap::from_headers(["company", "content"]).unwrap();
        assert!(map.title.is_none());
        assert!(map.date.is_none());
        assert!(map.source.is_none());
        assert!(map.market_cap.is_none());
    }
}
