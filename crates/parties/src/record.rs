// ABOUTME: PartyRecord struct holding one extracted party entry.
// ABOUTME: Serializes to the {"name", "doc_url"} JSON object shape.

use serde::{Deserialize, Serialize};

/// One entry of the registered-parties list.
///
/// `doc_url`, when present, is absolute, uses https, and carries no query
/// string. Records keep the document order of the source list; nothing is
/// deduplicated or reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyRecord {
    pub name: String,
    pub doc_url: Option<String>,
}

impl PartyRecord {
    /// Returns true if the record carries a document link.
    pub fn has_doc_url(&self) -> bool {
        self.doc_url.as_ref().map_or(false, |u| !u.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_with_name_before_doc_url() {
        let record = PartyRecord {
            name: "Party One".to_string(),
            doc_url: Some("https://minjust.gov.ru/ru/documents/1/".to_string()),
        };

        let json = serde_json::to_string_pretty(&record).unwrap();
        assert_eq!(
            json,
            "{\n  \"name\": \"Party One\",\n  \"doc_url\": \"https://minjust.gov.ru/ru/documents/1/\"\n}"
        );
    }

    #[test]
    fn test_missing_url_serializes_as_null() {
        let record = PartyRecord {
            name: "Party Two".to_string(),
            doc_url: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, "{\"name\":\"Party Two\",\"doc_url\":null}");
    }

    #[test]
    fn test_non_ascii_text_is_not_escaped() {
        let record = PartyRecord {
            name: "Политическая партия".to_string(),
            doc_url: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("Политическая партия"));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_has_doc_url() {
        let mut record = PartyRecord {
            name: "Party".to_string(),
            doc_url: None,
        };
        assert!(!record.has_doc_url());

        record.doc_url = Some(String::new());
        assert!(!record.has_doc_url());

        record.doc_url = Some("https://minjust.gov.ru/ru/documents/1/".to_string());
        assert!(record.has_doc_url());
    }

    #[test]
    fn test_round_trips_through_json() {
        let record = PartyRecord {
            name: "КПРФ".to_string(),
            doc_url: Some("https://minjust.gov.ru/ru/documents/7768/".to_string()),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PartyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
