use quizcraft::error::ParseError;
use quizcraft::parse::parse_question_set;

fn record(i: usize) -> String {
    format!(
        r#"{{"question": "What is fact number {i}?", "options": ["Alpha {i}", "Beta {i}", "Gamma {i}", "Delta {i}"], "correct_index": {}}}"#,
        i % 4
    )
}

fn records(count: usize) -> String {
    let body = (0..count).map(record).collect::<Vec<_>>().join(",\n");
    format!("[\n{body}\n]")
}

#[test]
fn parses_bare_array() {
    let set = parse_question_set(&records(5)).unwrap();
    assert_eq!(set.questions().len(), 5);
    assert_eq!(set.questions()[0].prompt(), "What is fact number 0?");
    assert_eq!(set.questions()[3].correct(), 3);
}

#[test]
fn parses_questions_envelope() {
    let text = format!(r#"{{"questions": {}}}"#, records(5));
    let set = parse_question_set(&text).unwrap();
    assert_eq!(set.questions().len(), 5);
}

#[test]
fn parses_fenced_code_block() {
    let text = format!("Here you go!\n```json\n{}\n```\nEnjoy the quiz.", records(5));
    let set = parse_question_set(&text).unwrap();
    assert_eq!(set.questions().len(), 5);
}

#[test]
fn parses_prose_wrapped_envelope() {
    let text = format!(
        "Sure! I generated your quiz: {{\"questions\": {}}} Good luck!",
        records(5)
    );
    let set = parse_question_set(&text).unwrap();
    assert_eq!(set.questions().len(), 5);
}

#[test]
fn parsing_is_idempotent() {
    let text = records(5);
    let first = parse_question_set(&text).unwrap();
    let second = parse_question_set(&text).unwrap();
    assert_eq!(first, second);
}

#[test]
fn accepts_camel_case_index_key() {
    let text = r#"[
        {"question": "Q one?", "options": ["a1", "b1", "c1", "d1"], "correctIndex": 1},
        {"question": "Q two?", "options": ["a2", "b2", "c2", "d2"], "correctIndex": 2},
        {"question": "Q three?", "options": ["a3", "b3", "c3", "d3"], "correctIndex": 3},
        {"question": "Q four?", "options": ["a4", "b4", "c4", "d4"], "correctIndex": 0},
        {"question": "Q five?", "options": ["a5", "b5", "c5", "d5"], "correctIndex": 1}
    ]"#;
    let set = parse_question_set(text).unwrap();
    assert_eq!(set.questions()[0].correct(), 1);
    assert_eq!(set.questions()[2].correct(), 3);
}

#[test]
fn resolves_answer_by_option_text() {
    let mut items: Vec<String> = (1..5).map(record).collect();
    items.insert(
        0,
        r#"{"question": "Which planet is red?", "options": ["Venus", "Mars", "Jupiter", "Saturn"], "correct_answer": "Mars"}"#.to_string(),
    );
    let text = format!("[{}]", items.join(","));
    let set = parse_question_set(&text).unwrap();
    assert_eq!(set.questions()[0].correct(), 1);
}

#[test]
fn rejects_four_records() {
    assert_eq!(
        parse_question_set(&records(4)).unwrap_err(),
        ParseError::WrongCount(4)
    );
}

#[test]
fn rejects_six_records() {
    assert_eq!(
        parse_question_set(&records(6)).unwrap_err(),
        ParseError::WrongCount(6)
    );
}

#[test]
fn rejects_empty_question_text() {
    let mut items: Vec<String> = (1..5).map(record).collect();
    items.insert(
        0,
        r#"{"question": "   ", "options": ["a", "b", "c", "d"], "correct_index": 0}"#.to_string(),
    );
    let text = format!("[{}]", items.join(","));
    assert_eq!(
        parse_question_set(&text).unwrap_err(),
        ParseError::EmptyQuestion
    );
}

#[test]
fn rejects_wrong_option_count() {
    let mut items: Vec<String> = (1..5).map(record).collect();
    items.insert(
        0,
        r#"{"question": "Too few?", "options": ["a", "b", "c"], "correct_index": 0}"#.to_string(),
    );
    let text = format!("[{}]", items.join(","));
    assert_eq!(
        parse_question_set(&text).unwrap_err(),
        ParseError::OptionCount(3)
    );
}

#[test]
fn rejects_duplicate_options() {
    let mut items: Vec<String> = (1..5).map(record).collect();
    items.insert(
        0,
        r#"{"question": "Twins?", "options": ["same", "same", "c", "d"], "correct_index": 0}"#.to_string(),
    );
    let text = format!("[{}]", items.join(","));
    assert_eq!(
        parse_question_set(&text).unwrap_err(),
        ParseError::DuplicateOption
    );
}

#[test]
fn rejects_out_of_range_index() {
    for bad in [4i64, -1] {
        let mut items: Vec<String> = (1..5).map(record).collect();
        items.insert(
            0,
            format!(r#"{{"question": "Range?", "options": ["a", "b", "c", "d"], "correct_index": {bad}}}"#),
        );
        let text = format!("[{}]", items.join(","));
        assert_eq!(
            parse_question_set(&text).unwrap_err(),
            ParseError::IndexOutOfRange(bad)
        );
    }
}

#[test]
fn rejects_unresolvable_answer_text() {
    let mut items: Vec<String> = (1..5).map(record).collect();
    items.insert(
        0,
        r#"{"question": "Lost?", "options": ["a", "b", "c", "d"], "correct_answer": "e"}"#.to_string(),
    );
    let text = format!("[{}]", items.join(","));
    assert_eq!(
        parse_question_set(&text).unwrap_err(),
        ParseError::UnresolvedAnswer("e".to_string())
    );
}

#[test]
fn rejects_record_without_answer_reference() {
    let mut items: Vec<String> = (1..5).map(record).collect();
    items.insert(
        0,
        r#"{"question": "No key?", "options": ["a", "b", "c", "d"]}"#.to_string(),
    );
    let text = format!("[{}]", items.join(","));
    assert_eq!(
        parse_question_set(&text).unwrap_err(),
        ParseError::MissingAnswer
    );
}

#[test]
fn rejects_plain_prose() {
    assert_eq!(
        parse_question_set("I could not generate a quiz today, sorry.").unwrap_err(),
        ParseError::NoStructure
    );
}
