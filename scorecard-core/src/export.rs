use serde::Serialize;

use crate::model::{CorpusRecord, Rating, RatingMap};

/// Ratings projected back onto corpus order
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Export {
    /// One line per record, blank where unrated
    pub text: String,
    /// Ids of unrated records, in corpus order
    pub unrated: Vec<String>,
    /// Per-position ratings, `null` where unrated
    pub ratings: Vec<Option<Rating>>,
}

impl Export {
    pub fn is_complete(&self) -> bool {
        self.unrated.is_empty()
    }

    /// Banner listing unrated ids, `None` once every record is rated
    pub fn warning(&self) -> Option<String> {
        if self.unrated.is_empty() {
            return None;
        }
        let ids: Vec<String> = self.unrated.iter().map(|id| format!("ID: {id}")).collect();
        Some(format!("Unrated records: {}", ids.join(", ")))
    }
}

/// Serialize ratings in record order for pasting into a spreadsheet column.
///
/// The text always has exactly `records.len()` lines so that row alignment
/// with the source table survives gaps.
pub fn serialize(records: &[CorpusRecord], ratings: &RatingMap) -> Export {
    let column: Vec<Option<Rating>> = (0..records.len())
        .map(|index| ratings.get(&index).copied())
        .collect();

    let text = column
        .iter()
        .map(|rating| rating.map(|r| r.to_string()).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n");

    let unrated = records
        .iter()
        .zip(&column)
        .filter(|(_, rating)| rating.is_none())
        .map(|(record, _)| record.id.clone())
        .collect();

    Export {
        text,
        unrated,
        ratings: column,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: &[&str]) -> Vec<CorpusRecord> {
        ids.iter().map(|id| CorpusRecord::new(*id, "x")).collect()
    }

    fn ratings(pairs: &[(usize, u8)]) -> RatingMap {
        pairs
            .iter()
            .map(|&(i, v)| (i, Rating::new(v).unwrap()))
            .collect()
    }

    #[test]
    fn test_gaps_keep_alignment() {
        let export = serialize(&records(&["a", "b", "c"]), &ratings(&[(0, 5), (2, 1)]));
        assert_eq!(export.text, "5\n\n1");
        assert_eq!(export.text.split('\n').count(), 3);
        assert_eq!(export.unrated, vec!["b".to_string()]);
    }

    #[test]
    fn test_nothing_rated() {
        let export = serialize(&records(&["a", "b"]), &RatingMap::new());
        assert_eq!(export.text, "\n");
        assert_eq!(export.unrated, vec!["a".to_string(), "b".to_string()]);
        assert!(!export.is_complete());
    }

    #[test]
    fn test_duplicate_ids_are_positional() {
        let export = serialize(&records(&["a", "a"]), &ratings(&[(1, 2)]));
        assert_eq!(export.text, "\n2");
        assert_eq!(export.unrated, vec!["a".to_string()]);
    }

    #[test]
    fn test_warning_banner() {
        let export = serialize(&records(&["a", "b", "c"]), &ratings(&[(1, 4)]));
        assert_eq!(
            export.warning().as_deref(),
            Some("Unrated records: ID: a, ID: c")
        );

        let done = serialize(&records(&["a"]), &ratings(&[(0, 4)]));
        assert!(done.is_complete());
        assert_eq!(done.warning(), None);
    }

    #[test]
    fn test_json_shape() {
        let export = serialize(&records(&["a", "b"]), &ratings(&[(1, 3)]));
        let json = serde_json::to_string(&export).unwrap();
        assert_eq!(json, r#"{"text":"\n3","unrated":["a"],"ratings":[null,3]}"#);
    }
}
