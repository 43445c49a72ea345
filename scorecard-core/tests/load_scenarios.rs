use scorecard_core::{
    load_corpus, App, Effect, Key, LoadError, Rating, RetrievalError, Session,
};

fn serve(text: &'static str) -> impl Fn(&str) -> Result<String, RetrievalError> {
    move |_| Ok(text.to_string())
}

#[test]
fn two_record_scenario() {
    let corpus = load_corpus(&serve("id,text\na,hi\nb,yo\n"), "mem").expect("load");
    let mut session = Session::new(corpus);
    assert!(session.rate(1, Rating::new(3).expect("in range")));

    let export = session.export();
    assert_eq!(export.text, "\n3");
    assert_eq!(export.unrated, vec!["a".to_string()]);
}

#[test]
fn extra_columns_and_bad_rows_are_tolerated() {
    let csv = "text,id,score\nhello,a,1\n,b,2\nworld,,3\nbye,c\n";
    let corpus = load_corpus(&serve(csv), "mem").expect("load");
    let ids: Vec<_> = corpus.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(corpus.dropped_rows, 2);
}

#[test]
fn transport_failure_leaves_state_untouched() {
    let mut app = App::new();
    app.request_load("first");
    app.finish_load(load_corpus(&serve("id,text\na,hi\n"), "first"));
    app.handle_key(Key::Char('f'));
    let before = app.export();

    let Effect::Load(location) = app.request_load("http://unreachable") else {
        panic!("load should start");
    };
    let refuse = |location: &str| -> Result<String, RetrievalError> {
        Err(RetrievalError::Transport {
            location: location.to_string(),
            message: "dns error".to_string(),
        })
    };
    app.finish_load(load_corpus(&refuse, &location));

    assert_eq!(app.export(), before);
    assert_eq!(app.title(), "first");
    assert!(app.load.error().is_some_and(|e| e.contains("dns error")));
}

#[test]
fn load_error_kinds_display() {
    assert_eq!(LoadError::InFlight.to_string(), "A load is already in progress");
    let no_body = LoadError::from(RetrievalError::NoBody {
        location: "u".into(),
    });
    assert_eq!(no_body.to_string(), "No response body from u");
}
