//! Known sentence-splitting scenarios

use punkt_core::language::english;
use punkt_core::{
    Annotation, AnnotationContext, PunctuationSet, SentenceTokenizer, Storage, Token,
    TypeBasedAnnotation, WordTokenizer,
};

fn split<'a>(tokenizer: &SentenceTokenizer, text: &'a str) -> Vec<&'a str> {
    tokenizer.tokenize(text).into_iter().map(|s| s.text).collect()
}

fn english_tokenizer() -> SentenceTokenizer {
    english::sentence_tokenizer(Storage::new()).unwrap()
}

#[test]
fn test_multi_dot_abbreviation_breaks_only_before_sentence_start() {
    let mut trainer = english::trainer().unwrap();
    trainer.train("I saw the cat. The dog ran.", true);
    let mut storage = trainer.into_storage();
    storage.add_abbreviation("al");
    storage.add_abbreviation("etc");

    let tokenizer = english::sentence_tokenizer(storage).unwrap();
    let text = "One custom abbreviation is F.B.I.  The abbreviation, F.B.I. should properly break.";
    let sentences = tokenizer.tokenize(text);

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "One custom abbreviation is F.B.I.");
    assert_eq!(
        sentences[1].text,
        "  The abbreviation, F.B.I. should properly break."
    );
    assert_eq!(sentences[1].start, sentences[0].end);
    assert_eq!(sentences[1].end, text.len());
}

#[test]
fn test_lower_case_after_closing_quote_does_not_break() {
    let text = "She turned to him, \"This is great.\" she said.";
    assert_eq!(split(&english_tokenizer(), text), vec![text]);
}

#[test]
fn test_upper_case_after_closing_quote_breaks() {
    let text = "She turned to him, \"This is great.\" She held the book out to show him.";
    let sentences = english_tokenizer().tokenize(text);

    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "She turned to him, \"This is great.\"");
    assert_eq!(sentences[0].end, 35);
    assert_eq!(sentences[1].text, " She held the book out to show him.");
}

#[test]
fn test_numbered_list_items() {
    assert_eq!(
        split(&english_tokenizer(), "1. The first item. 2. The second item."),
        vec!["1. The first item.", " 2. The second item."]
    );
}

#[test]
fn test_numbered_list_items_with_closing_parenthesis() {
    let tokenizer = english_tokenizer();
    assert_eq!(
        split(&tokenizer, "1.) The first item. 2.) The second item."),
        vec!["1.) The first item.", " 2.) The second item."]
    );
    assert_eq!(
        split(&tokenizer, "1) The first item. 2) The second item."),
        vec!["1) The first item.", " 2) The second item."]
    );
}

#[test]
fn test_zero_tokens_zero_sentences() {
    assert!(english_tokenizer().tokenize("").is_empty());
    assert!(SentenceTokenizer::new(Storage::new()).tokenize("").is_empty());
}

#[test]
fn test_text_without_end_punctuation_is_one_sentence() {
    let text = "a line without any terminal mark, just commas; and colons:";
    let sentences = english_tokenizer().tokenize(text);
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].text, text);
    assert_eq!((sentences[0].start, sentences[0].end), (0, text.len()));
}

#[test]
fn test_known_abbreviation_never_breaks_in_first_pass() {
    let storage = Storage::with_abbreviations(["etc", "approx", "dept"]);
    let rules = PunctuationSet::default();
    let ctx = AnnotationContext {
        storage: &storage,
        rules: &rules,
    };

    let text = "Bring tools etc. Then the Dept. of Works said approx. Twelve. Also co-dept. Done.";
    let mut tokens: Vec<Token> = WordTokenizer::default().tokenize(text, true);
    TypeBasedAnnotation.annotate(&ctx, &mut tokens);

    for token in &tokens {
        if matches!(token.text(), "etc." | "Dept." | "approx." | "co-dept.") {
            assert!(token.abbr, "{} should be an abbreviation", token.text());
            assert!(!token.sent_break, "{} should not break", token.text());
        }
    }
    assert!(tokens
        .iter()
        .any(|t| t.text() == "Twelve." && t.sent_break));
}

#[test]
fn test_sentence_texts_match_offsets() {
    let text = "Dr. Who? Yes.\n\nNew paragraph here! “Quoted.” End";
    let tokenizer = english_tokenizer();
    for sentence in tokenizer.tokenize(text) {
        assert_eq!(&text[sentence.start..sentence.end], sentence.text);
    }
}
