/// Normalises line endings and splits text at every manual line break. Segments that
/// contain nothing but whitespace are dropped, so blank lines in the input do not turn
/// into empty rows on the slide.
pub fn split_on_hard_breaks(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n')
        .filter(|segment| !segment.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Greedily packs the words of a single segment into lines of at most `width`
/// characters. Words are never split, so a word longer than `width` sits on a line of
/// its own. Runs of whitespace between words collapse to a single space. A `width` of
/// zero is treated as one.
pub fn wrap_segment(segment: &str, width: usize) -> Vec<String> {
    let width = width.max(1);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in segment.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits `text` on manual line breaks, then word-wraps each segment to `width`
/// characters. A manual break always starts a new line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    split_on_hard_breaks(text)
        .iter()
        .flat_map(|segment| wrap_segment(segment, width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collapse(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn honours_manual_breaks() {
        let lines = wrap_text("CAC Registered.\nSEO Optimized.", 20);
        assert_eq!(lines, vec!["CAC Registered.", "SEO Optimized."]);
    }

    #[test]
    fn normalises_line_endings() {
        assert_eq!(split_on_hard_breaks("a\r\nb\rc"), vec!["a", "b", "c"]);
    }

    #[test]
    fn drops_blank_segments() {
        assert_eq!(split_on_hard_breaks("one\n\n  \ntwo\n"), vec!["one", "two"]);
        assert!(wrap_text("", 20).is_empty());
        assert!(wrap_text(" \n\t ", 20).is_empty());
    }

    #[test]
    fn greedy_fill() {
        let lines = wrap_segment("Scams. Fake Vendors. Fear.", 20);
        assert_eq!(lines, vec!["Scams. Fake Vendors.", "Fear."]);
    }

    #[test]
    fn exact_fit_stays_on_one_line() {
        assert_eq!(wrap_segment("abcd efgh", 9), vec!["abcd efgh"]);
        assert_eq!(wrap_segment("abcd efgh", 8), vec!["abcd", "efgh"]);
    }

    #[test]
    fn long_words_are_not_split() {
        let lines = wrap_segment("a supercalifragilistic word", 5);
        assert_eq!(lines, vec!["a", "supercalifragilistic", "word"]);
    }

    #[test]
    fn narrow_width_gives_one_word_per_line() {
        let text = "Trust is the only currency.";
        for width in [0, 1, 2] {
            let lines = wrap_segment(text, width);
            assert_eq!(lines, vec!["Trust", "is", "the", "only", "currency."]);
        }
    }

    #[test]
    fn counts_characters_not_bytes() {
        // each word is four characters but eight bytes
        let lines = wrap_segment("éééé éééé", 9);
        assert_eq!(lines, vec!["éééé éééé"]);
    }

    #[test]
    fn lines_respect_width_and_keep_every_word() {
        for words in [5, 17, 60, 200] {
            let text = lipsum::lipsum(words);
            for width in [1, 7, 20, 45] {
                let lines = wrap_segment(&text, width);
                for line in &lines {
                    let len = line.chars().count();
                    assert!(
                        len <= width || !line.contains(' '),
                        "line {line:?} exceeds {width} characters"
                    );
                }
                assert_eq!(lines.join(" "), collapse(&text));
            }
        }
    }

    #[test]
    fn wrap_text_keeps_every_word_across_breaks() {
        let text = format!("{}\n{}", lipsum::lipsum(30), lipsum::lipsum(12));
        let lines = wrap_text(&text, 20);
        assert_eq!(collapse(&lines.join(" ")), collapse(&text));
    }
}
