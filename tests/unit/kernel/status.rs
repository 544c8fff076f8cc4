use super::*;

#[test]
fn hello_world_counts() {
    let status = StatusSnapshot::compute("Hello world");
    assert_eq!(status.word_count, 2);
    assert_eq!(status.char_count, 11);
}

#[test]
fn empty_and_blank_text_have_no_words() {
    assert_eq!(StatusSnapshot::compute("").word_count, 0);
    assert_eq!(StatusSnapshot::compute("   ").word_count, 0);
    assert_eq!(StatusSnapshot::compute("\n\t \n").word_count, 0);
    assert_eq!(StatusSnapshot::compute("   ").char_count, 3);
}

#[test]
fn words_split_on_any_whitespace_run() {
    let status = StatusSnapshot::compute("  one\ttwo\n\nthree   four ");
    assert_eq!(status.word_count, 4);
}

#[test]
fn char_count_is_unicode_scalar_values() {
    let text = "héllo wörld 你好";
    let status = StatusSnapshot::compute(text);
    assert_eq!(status.char_count, text.chars().count());
    assert_eq!(status.word_count, 3);
}

#[test]
fn single_space_joined_tokens() {
    let tokens = ["a", "bb", "ccc", "dddd", "e"];
    for n in 1..=tokens.len() {
        let text = tokens[..n].join(" ");
        assert_eq!(StatusSnapshot::compute(&text).word_count, n);
    }
}

#[test]
fn rope_counts_match_str_counts_across_chunks() {
    let mut text = String::new();
    for i in 0..5000 {
        text.push_str("word");
        text.push_str(&i.to_string());
        text.push(if i % 7 == 0 { '\n' } else { ' ' });
    }
    let rope = Rope::from_str(&text);
    assert!(rope.chunks().count() > 1);

    assert_eq!(
        StatusSnapshot::from_rope(&rope),
        StatusSnapshot::compute(&text)
    );
    assert_eq!(StatusSnapshot::from_rope(&rope).word_count, 5000);
}
