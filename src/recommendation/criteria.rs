use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::core::library::{LibraryError, LibraryResult};

// RecommendationCriteria selects which catalog index a recommendation is drawn from
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum RecommendationCriteria {
    Genre(String),
    ReleaseYear(i32),
}

impl RecommendationCriteria {
    /// Builds criteria from caller text. A release year must parse as an integer within
    /// `1..=max_release_year`, anything else is a validation error.
    pub fn parse(text: &str, by_year: bool, max_release_year: i32) -> LibraryResult<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(LibraryError::validation("recommendation criteria must not be empty", Some("400".to_string())));
        }
        if !by_year {
            return Ok(RecommendationCriteria::Genre(trimmed.to_string()));
        }
        let year = parse_release_year(trimmed, max_release_year)?;
        Ok(RecommendationCriteria::ReleaseYear(year))
    }
}

pub fn parse_release_year(text: &str, max_release_year: i32) -> LibraryResult<i32> {
    let year: i32 = text.trim().parse().map_err(|err| {
        LibraryError::validation(format!("release year '{}' is not a number: {}", text, err).as_str(), Some("400".to_string()))
    })?;
    validate_release_year(year, max_release_year)
}

pub fn validate_release_year(year: i32, max_release_year: i32) -> LibraryResult<i32> {
    if year <= 0 || year > max_release_year {
        return Err(LibraryError::validation(
            format!("release year {} must be between 1 and {}", year, max_release_year).as_str(), Some("400".to_string())));
    }
    Ok(year)
}

impl Display for RecommendationCriteria {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RecommendationCriteria::Genre(genre) => write!(f, "genre {}", genre),
            RecommendationCriteria::ReleaseYear(year) => write!(f, "release year {}", year),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::LibraryError;
    use crate::recommendation::criteria::{parse_release_year, RecommendationCriteria};

    #[tokio::test]
    async fn test_should_parse_genre() {
        let criteria = RecommendationCriteria::parse(" Fantasy ", false, 2025).expect("should parse genre");
        assert_eq!(RecommendationCriteria::Genre("Fantasy".to_string()), criteria);
    }

    #[tokio::test]
    async fn test_should_parse_year() {
        let criteria = RecommendationCriteria::parse("1965", true, 2025).expect("should parse year");
        assert_eq!(RecommendationCriteria::ReleaseYear(1965), criteria);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_years() {
        assert!(matches!(parse_release_year("abc", 2025), Err(LibraryError::Validation { .. })));
        assert!(matches!(parse_release_year("99999999999", 2025), Err(LibraryError::Validation { .. })));
        assert!(matches!(parse_release_year("0", 2025), Err(LibraryError::Validation { .. })));
        assert!(matches!(parse_release_year("2026", 2025), Err(LibraryError::Validation { .. })));
        assert_eq!(2025, parse_release_year("2025", 2025).expect("should accept upper bound"));
        assert!(matches!(RecommendationCriteria::parse("", false, 2025), Err(LibraryError::Validation { .. })));
    }
}
