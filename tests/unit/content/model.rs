use super::*;

const FEED: &str = r#"{
    "topic": "Stack",
    "atoms": [
        {"id": "a2", "concept": "Push", "atom_type": "example", "content": "Push adds to the top.",
         "difficulty": "medium", "order": 2, "estimated_read_time_sec": 6},
        {"id": "a1", "concept": "Stack", "atom_type": "explanation", "content": "A stack is LIFO.",
         "difficulty": "easy", "order": 1, "estimated_read_time_sec": 4},
        {"id": "a3", "concept": "Stack vs Queue", "atom_type": "comparison",
         "content": "{\"left\":{\"title\":\"Stack\",\"points\":[\"LIFO\"]},\"right\":{\"title\":\"Queue\",\"points\":[\"FIFO\"]}}",
         "difficulty": "hard", "order": 3},
        {"id": 4, "concept": "Pop", "atom_type": "question", "content": "What does pop return?",
         "answer": "The top element.", "difficulty": "extreme", "order": 4}
    ]
}"#;

#[test]
fn feed_resolves_all_known_types() {
    let feed = AtomFeed::from_json_str(FEED).unwrap();
    assert_eq!(feed.topic, "Stack");
    assert_eq!(feed.len(), 4);
    assert!(feed.skipped.is_empty());

    let cmp = &feed.atoms[2];
    assert_eq!(cmp.atom_type, AtomType::Comparison);
    let Content::Comparison(data) = &cmp.content else {
        panic!("comparison content should resolve to structured data");
    };
    assert_eq!(data.left.title, "Stack");
    assert_eq!(data.right.points, vec!["FIFO".to_string()]);
}

#[test]
fn numeric_ids_and_unknown_difficulty_are_tolerated() {
    let feed = AtomFeed::from_json_str(FEED).unwrap();
    let q = &feed.atoms[3];
    assert_eq!(q.id, "4");
    assert_eq!(q.difficulty, Difficulty::Easy);
    assert_eq!(q.answer.as_deref(), Some("The top element."));
}

#[test]
fn ordered_sorts_by_order_field() {
    let feed = AtomFeed::from_json_str(FEED).unwrap();
    let ids: Vec<&str> = feed.ordered().iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a1", "a2", "a3", "4"]);
}

#[test]
fn comparison_object_content_is_accepted() {
    let s = r#"{"topic":"t","atoms":[{"id":"c","concept":"x","atom_type":"comparison",
        "content":{"left":{"title":"L","points":[]},"right":{"title":"R"}}}]}"#;
    let feed = AtomFeed::from_json_str(s).unwrap();
    assert!(matches!(feed.atoms[0].content, Content::Comparison(_)));
}

#[test]
fn malformed_comparison_is_a_content_error() {
    let s = r#"{"topic":"t","atoms":[{"id":"bad","concept":"x","atom_type":"comparison",
        "content":"not json"}]}"#;
    let err = AtomFeed::from_json_str(s).unwrap_err();
    assert!(matches!(err, ScrollaError::Content(_)));
    assert!(err.to_string().contains("bad"));
}

#[test]
fn non_string_plain_content_is_rejected() {
    let s = r#"{"atoms":[{"id":"n","concept":"x","atom_type":"example","content":42}]}"#;
    assert!(matches!(
        AtomFeed::from_json_str(s),
        Err(ScrollaError::Content(_))
    ));
}

#[test]
fn unknown_types_are_skipped() {
    let s = r#"{"atoms":[{"id":"m","concept":"x","atom_type":"meme","content":"?"},
        {"id":"e","concept":"y","atom_type":"explanation"}]}"#;
    let feed = AtomFeed::from_json_str(s).unwrap();
    assert_eq!(feed.skipped, vec!["m".to_string()]);
    assert_eq!(feed.atoms[0].content, Content::PlainText(String::new()));
}

#[test]
fn entries_keep_every_atom_with_raw_labels() {
    let s = r#"{"atoms":[
        {"id":"p","atom_type":"pitfall","content":"Off by one.","estimated_read_time_sec":3},
        {"id":"c","atom_type":"comparison","content":{"left":{"title":"A"},"right":{"title":"B"}}},
        {"id":"n","content":"no type"}]}"#;
    let feed = AtomFeed::from_json_str(s).unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed.skipped, vec!["p".to_string(), "n".to_string()]);

    let labels: Vec<&str> = feed.entries.iter().map(|e| e.atom_type.as_str()).collect();
    assert_eq!(labels, ["pitfall", "comparison", "unknown"]);
    assert_eq!(feed.entries[0].content, "Off by one.");
    assert_eq!(feed.entries[0].estimated_read_time_sec, 3.0);
    assert!(feed.entries[1].content.starts_with('{'));
    assert_eq!(feed.entries[2].estimated_read_time_sec, 0.0);
}

#[test]
fn invalid_json_is_a_serde_error() {
    assert!(matches!(
        AtomFeed::from_json_str("{"),
        Err(ScrollaError::Serde(_))
    ));
}

#[test]
fn comparison_text_flattens_panels() {
    let c = Content::Comparison(ComparisonData {
        left: ComparisonPanel {
            title: "A".into(),
            points: vec!["one".into()],
        },
        right: ComparisonPanel {
            title: "B".into(),
            points: vec!["two".into(), "three".into()],
        },
    });
    assert_eq!(c.text(), "A one B two three");
}

#[test]
fn difficulty_levels_and_labels() {
    assert_eq!(Difficulty::parse_lenient("Hard").level(), 3);
    assert_eq!(Difficulty::parse_lenient("medium").level(), 2);
    assert_eq!(Difficulty::parse_lenient("").level(), 1);
    assert_eq!(AtomType::Question.label(), "✦ Challenge");
    assert_eq!("comparison".parse::<AtomType>().unwrap(), AtomType::Comparison);
    assert!("Comparison".parse::<AtomType>().is_err());
}
