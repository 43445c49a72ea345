use proptest::prelude::*;
use scorecard_core::{serialize, Corpus, CorpusRecord, Rating, Session};

fn arb_records(max: usize) -> impl Strategy<Value = Vec<CorpusRecord>> {
    prop::collection::vec(("[a-z0-9]{1,6}", "[a-zA-Z ]{1,20}"), 1..max).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(id, text)| CorpusRecord::new(id, text))
            .collect()
    })
}

fn arb_rating() -> impl Strategy<Value = Rating> {
    (1u8..=5).prop_map(|v| Rating::new(v).expect("in range"))
}

fn session_of(records: Vec<CorpusRecord>) -> Session {
    Session::new(Corpus::new("prop", records, 0))
}

proptest! {
    #[test]
    fn export_has_one_line_per_record(
        records in arb_records(30),
        picks in prop::collection::vec((any::<prop::sample::Index>(), arb_rating()), 0..40),
    ) {
        let len = records.len();
        let mut session = session_of(records);
        for (index, rating) in picks {
            session.rate(index.index(len), rating);
        }
        let export = session.export();
        prop_assert_eq!(export.text.split('\n').count(), len);
        prop_assert_eq!(export.ratings.len(), len);
    }

    #[test]
    fn last_write_wins(records in arb_records(10), first in arb_rating(), second in arb_rating(), pick in any::<prop::sample::Index>()) {
        let len = records.len();
        let index = pick.index(len);
        let mut session = session_of(records);
        session.rate(index, first);
        session.rate(index, second);
        prop_assert_eq!(session.rating_at(index), Some(second));
        prop_assert_eq!(session.rated_count(), 1);
    }

    #[test]
    fn focus_clamps_at_both_ends(records in arb_records(20), extra in 1usize..10) {
        let len = records.len();
        let mut session = session_of(records);
        for _ in 0..len + extra {
            session.move_focus_next();
        }
        prop_assert_eq!(session.focus(), Some(len - 1));
        for _ in 0..len + extra {
            session.move_focus_prev();
        }
        prop_assert_eq!(session.focus(), Some(0));
    }

    #[test]
    fn unrated_lists_exactly_missing_positions(
        records in arb_records(20),
        rated in prop::collection::btree_set(0usize..20, 0..20),
    ) {
        let mut session = session_of(records.clone());
        for &index in &rated {
            session.rate(index, Rating::new(2).expect("in range"));
        }
        let expected: Vec<String> = records
            .iter()
            .enumerate()
            .filter(|(i, _)| !rated.contains(i))
            .map(|(_, r)| r.id.clone())
            .collect();
        prop_assert_eq!(session.export().unrated, expected);
    }

    #[test]
    fn rating_everything_leaves_nothing_unrated(records in arb_records(20), rating in arb_rating()) {
        let len = records.len();
        let mut session = session_of(records);
        for index in 0..len {
            session.rate(index, rating);
        }
        let export = serialize(session.records(), session.ratings());
        prop_assert!(export.unrated.is_empty());
        prop_assert!(!export.text.split('\n').any(str::is_empty));
    }
}
