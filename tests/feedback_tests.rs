use wordle_assist::{feedback_pattern, Feedback, FeedbackPattern};

fn feedbacks(guess: &str, answer: &str) -> Vec<Feedback> {
    FeedbackPattern::calculate(guess, answer).feedbacks().to_vec()
}

#[test]
fn test_all_correct() {
    let pattern = FeedbackPattern::calculate("crane", "crane");
    assert!(pattern.is_win());
    assert_eq!(pattern, FeedbackPattern::all_exact(5));
}

#[test]
fn test_same_word_is_always_a_win() {
    for word in ["a", "eerie", "mississippi", "abcdefghij"] {
        assert!(FeedbackPattern::calculate(word, word).is_win(), "{}", word);
    }
}

#[test]
fn test_all_absent() {
    assert_eq!(feedback_pattern("quick", "dream"), "BBBBB");
    assert_eq!(feedback_pattern("aaaaa", "bbbbb"), "BBBBB");
}

#[test]
fn test_mixed_feedback() {
    assert_eq!(
        feedbacks("crane", "charm"),
        vec![
            Feedback::Exact,
            Feedback::Present,
            Feedback::Exact,
            Feedback::Absent,
            Feedback::Absent,
        ]
    );
}

#[test]
fn test_known_patterns() {
    assert_eq!(feedback_pattern("crane", "earth"), "BYYBY");
    assert_eq!(feedback_pattern("apple", "apply"), "GGGGB");
    assert_eq!(feedback_pattern("tests", "toast"), "GBYYB");
    assert_eq!(feedback_pattern("hello", "world"), "BBBGY");
    assert_eq!(feedback_pattern("abcde", "abcde"), "GGGGG");
}

#[test]
fn test_duplicate_letters_resolve_exact_first() {
    assert_eq!(feedback_pattern("aabbc", "babac"), "YGGYG");
    assert_eq!(feedback_pattern("edcba", "abcde"), "YYGYY");
}

#[test]
fn test_duplicate_letters_in_guess() {
    assert_eq!(feedback_pattern("speed", "creep"), "BYGGB");
}

#[test]
fn test_duplicate_letters_in_answer() {
    assert_eq!(feedback_pattern("arose", "creep"), "BGBBY");
}

#[test]
fn test_duplicate_guess_limited_answer() {
    // Only one spare 'e': the leftmost non-exact copy gets it.
    assert_eq!(feedback_pattern("geese", "creep"), "BYGBB");
}

#[test]
fn test_case_insensitive() {
    assert_eq!(feedback_pattern("CRANE", "earth"), "BYYBY");
    assert_eq!(feedback_pattern("crane", "EARTH"), "BYYBY");
}

#[test]
fn test_other_lengths() {
    assert_eq!(feedback_pattern("cat", "act"), "YYG");
    assert_eq!(feedback_pattern("letter", "settle"), "YGGGYB");
}

#[test]
fn test_long_runs_of_one_letter() {
    let answer = "a".repeat(300);
    let guess = format!("{}a", "b".repeat(299));
    let expected = format!("{}G", "B".repeat(299));
    assert_eq!(feedback_pattern(&guess, &answer), expected);

    let guess = format!("b{}", "a".repeat(299));
    let answer = format!("{}b", "a".repeat(299));
    let expected = format!("Y{}Y", "G".repeat(298));
    assert_eq!(feedback_pattern(&guess, &answer), expected);
}

#[test]
fn test_specific_wordle_cases() {
    assert_eq!(feedback_pattern("sores", "those"), "YYBYB");
}

#[test]
fn test_pattern_parse() {
    let pattern = FeedbackPattern::parse("gybbb").unwrap();
    assert_eq!(pattern.to_string(), "GYBBB");

    let pattern2 = FeedbackPattern::parse("21000").unwrap();
    assert_eq!(pattern, pattern2);

    let pattern3 = FeedbackPattern::parse("GYXBB").unwrap();
    assert_eq!(pattern, pattern3);
}

#[test]
fn test_pattern_parse_invalid() {
    assert!(FeedbackPattern::parse("").is_none());
    assert!(FeedbackPattern::parse("gybzb").is_none());
}

#[test]
fn test_emoji_display() {
    let pattern = FeedbackPattern::new(vec![
        Feedback::Exact,
        Feedback::Present,
        Feedback::Absent,
        Feedback::Absent,
        Feedback::Exact,
    ]);
    assert_eq!(pattern.to_emoji_string(), "🟩🟨⬛⬛🟩");
    assert_eq!(pattern.to_string(), "GYBBG");
    assert!(!pattern.is_win());
}
