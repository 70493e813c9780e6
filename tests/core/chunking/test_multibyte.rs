// UTF-8 safety tests: chunk boundaries never split a character
//
// Validates chunking of CJK, Hangul, Arabic, Cyrillic and emoji
// text. Offsets are character offsets.

use crate::common::assert_covers;
use studyrag::chunk_text;

#[test]
fn test_chunk_hangul() {
    let text = "세포는 생명의 기본 단위이다. 세포막은 물질의 출입을 조절한다.";
    let chunks = chunk_text(text, 7, 2).unwrap();

    assert_covers(text, &chunks);
}

#[test]
fn test_chunk_chinese() {
    let text = "中文测试字符串用于分块";
    let chunks = chunk_text(text, 4, 1).unwrap();

    assert_covers(text, &chunks);
    assert_eq!(chunks[0].text, "中文测试");
    assert_eq!(chunks[1].text, "试字符串");
}

#[test]
fn test_chunk_arabic_and_cyrillic() {
    for text in ["مرحبا بالعالم العربية", "Привет мир, русский текст"] {
        let chunks = chunk_text(text, 5, 2).unwrap();
        assert_covers(text, &chunks);
    }
}

#[test]
fn test_chunk_emoji_at_boundaries() {
    let text = "🚀🎉🦀".repeat(10);
    let chunks = chunk_text(&text, 4, 1).unwrap();

    assert_covers(&text, &chunks);
    for chunk in &chunks {
        assert_eq!(chunk.text.chars().count(), chunk.len());
    }
}

#[test]
fn test_chunk_mixed_scripts() {
    let text = "DNA 복제 (replication) → 複製 🧬 happens before mitosis.";
    for size in 1..=12 {
        let chunks = chunk_text(text, size, 3).unwrap();
        assert_covers(text, &chunks);
    }
}

#[test]
fn test_last_chunk_ends_at_character_length() {
    let text = "가".repeat(11);
    let chunks = chunk_text(&text, 5, 0).unwrap();

    assert_eq!(chunks.last().unwrap().end, 11);
    assert_ne!(chunks.last().unwrap().end, text.len());
}
