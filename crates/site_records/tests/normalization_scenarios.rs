use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use site_records::{
    load_lectures, load_people, normalize_record, order_roster, parse_yaml, roster_sort_key,
    select, Context, Corpus, NullSink, Person, TagQuery, ValidationFailed, PERSON_SCHEMA,
};

fn quiet() -> Context {
    Context::with_sink(Box::new(NullSink))
}

fn people(ctx: &mut Context, sources: &[(&str, &str)]) -> Corpus<Person> {
    let raw = sources
        .iter()
        .map(|(handle, text)| (handle.to_string(), parse_yaml(text).expect("person yaml")))
        .collect::<Vec<_>>();
    load_people(raw, ctx).expect("load people")
}

#[test]
fn alice_gets_the_default_order_and_sorts_by_her_last_initial() {
    let mut ctx = quiet();
    let corpus = people(
        &mut ctx,
        &[
            (
                "zhu",
                "name: Al Zhu\nposition: Ops\nurl: ''\nbio: ''\ntags: [management]\n",
            ),
            (
                "alice",
                "name: Alice Park\nposition: CEO\nurl: ''\nbio: ''\ntags: [management]\norder: null\n",
            ),
            (
                "adams",
                "name: Cy Adams\nposition: CTO\nurl: ''\nbio: ''\ntags: [management]\n",
            ),
        ],
    );

    let alice = corpus.get("alice").expect("alice loaded");
    assert_eq!(alice.order, 100);
    assert_eq!(
        roster_sort_key(alice.order, alice.name.as_deref()),
        100_000 + i64::from(u32::from('P'))
    );

    let mut rows = select(&corpus, &TagQuery::any(["management"]));
    order_roster(&mut rows);
    let ids: Vec<_> = rows.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["adams", "alice", "zhu"]);
    assert!(!ctx.has_errors());
}

#[test]
fn null_tag_list_defaults_to_empty_with_one_warning() {
    let mut ctx = quiet();
    let corpus = people(
        &mut ctx,
        &[("bob", "name: Bob\nposition: PI\nurl: x\nbio: hi\ntags: null\n")],
    );

    assert_eq!(corpus.get("bob").map(|p| p.tags.len()), Some(0));
    assert_eq!(ctx.warnings(), ["bob:tags:No tags specified"]);
}

#[test]
fn missing_required_field_excludes_the_person_and_fails_the_run() {
    let mut ctx = quiet();
    let corpus = people(
        &mut ctx,
        &[
            ("nobio", "name: No Bio\nposition: PI\nurl: ''\ntags: []\n"),
            ("ok", "name: Ok Person\nposition: PI\nurl: ''\nbio: ''\ntags: []\n"),
        ],
    );

    assert!(!corpus.contains("nobio"));
    assert!(corpus.contains("ok"));
    assert_eq!(ctx.errors(), ["nobio:missing field bio"]);

    let ValidationFailed { report } = ctx.bail().expect_err("errors recorded");
    assert_eq!(
        report,
        "You need to fix the following problems:\nnobio:missing field bio"
    );
}

#[test]
fn untitled_lecture_is_defaulted_and_wrapped() {
    let mut ctx = quiet();
    let raw = parse_yaml(
        "C05:\n  date: Feb 10, 2016\n  title: null\n  vimeo: https://vimeo.com/123\n  ready: false\n  files: null\n  presenters: []\n",
    )
    .expect("yaml");

    let corpus = load_lectures(raw, &mut ctx).expect("load");

    let lecture = corpus.get("C05").expect("lecture loaded");
    assert_eq!(lecture.title, "(untitled)");
    assert_eq!(lecture.vimeo, ["https://vimeo.com/123"]);
    assert!(lecture.files.is_empty());
    assert!(!lecture.is_ready());
    assert_eq!(
        ctx.warnings(),
        ["C05:title:untitled lecture", "C05:files:No files"]
    );
    assert!(ctx.bail().is_ok());
}

#[test]
fn normalizing_a_normalized_person_changes_nothing() {
    let mut ctx = quiet();
    let Value::Object(mut record) = json!({
        "name": null,
        "position": null,
        "url": null,
        "bio": "  ",
        "tags": null,
    }) else {
        unreachable!()
    };
    normalize_record("ghost", &mut record, &PERSON_SCHEMA, &mut ctx).expect("first");
    let once = record.clone();
    let warnings = ctx.warnings().to_vec();

    normalize_record("ghost", &mut record, &PERSON_SCHEMA, &mut ctx).expect("second");

    assert_eq!(record, once);
    assert_eq!(ctx.warnings(), warnings.as_slice());
}

#[test]
fn odd_text_and_flag_values_are_coerced_without_failing_the_run() {
    let mut ctx = quiet();
    let corpus = people(
        &mut ctx,
        &[(
            "bob",
            "name: Bob Ray\nposition: PI\nurl: ''\nbio: [line one, line two]\ntags: []\norder: 9223372036854775807\n",
        )],
    );
    let bob = corpus.get("bob").expect("bob loaded");
    assert_eq!(bob.bio, "line one line two");
    assert_eq!(bob.order, i64::MAX);
    assert_eq!(roster_sort_key(bob.order, bob.name.as_deref()), i64::MAX);

    let raw = parse_yaml(
        "C01:\n  date: 2016-02-03\n  title: Intro\n  vimeo: []\n  ready: 'yes'\n  files: []\n  presenters: []\n",
    )
    .expect("yaml");
    let lectures = load_lectures(raw, &mut ctx).expect("load");
    assert!(lectures.get("C01").expect("lecture loaded").is_ready());

    assert!(ctx.errors().is_empty());
    assert!(ctx.bail().is_ok());
}
