/// Short text derived from club descriptions for cards, heroes and bullet lists.
///
/// Lengths count characters, not bytes. Truncated output always ends with `…`.

const ELLIPSIS: char = '…';

pub const MAX_WORDS_PER_BULLET: usize = 10;
pub const MAX_BULLET_CHARS: usize = 55;
pub const MAX_BULLETS: usize = 3;
pub const SHORT_DESCRIPTION_CHARS: usize = 220;
pub const SHORT_SUMMARY_CHARS: usize = 120;
const HIGHLIGHT_TAGLINE_LIMIT: usize = 80;

pub fn trim_to_words(text: &str, max_words: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= max_words {
        return words.join(" ");
    }
    let mut out = words[..max_words].join(" ");
    out.push(ELLIPSIS);
    out
}

/// Cuts at the last word boundary that fits, or hard-cuts a single overlong word.
pub fn trim_to_length(text: &str, max_chars: usize) -> String {
    let t = text.trim();
    if t.chars().count() <= max_chars {
        return t.to_string();
    }
    let window: String = t.chars().take(max_chars + 1).collect();
    let head = window
        .trim_end_matches(|c: char| !c.is_whitespace())
        .trim_end();
    let mut out = if head.is_empty() {
        t.chars().take(max_chars).collect::<String>().trim_end().to_string()
    } else {
        head.to_string()
    };
    out.push(ELLIPSIS);
    out
}

pub fn short_description(description: &str) -> String {
    trim_to_length(description, SHORT_DESCRIPTION_CHARS)
}

/// Roughly two lines of hero text.
pub fn short_summary(description: &str) -> String {
    trim_to_length(description, SHORT_SUMMARY_CHARS)
}

/// Splits after `.`, `!` or `?` when whitespace follows.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        let at_boundary = matches!(ch, '.' | '!' | '?')
            && chars.peek().is_some_and(|(_, next)| next.is_whitespace());
        if !at_boundary {
            continue;
        }
        sentences.push(text[start..i + ch.len_utf8()].trim());
        while chars.peek().is_some_and(|(_, c)| c.is_whitespace()) {
            chars.next();
        }
        start = chars.peek().map(|(j, _)| *j).unwrap_or(text.len());
    }
    sentences.push(text[start..].trim());
    sentences.retain(|s| !s.is_empty());
    sentences
}

/// Up to three scannable "what we do" bullets of at most ten words each.
pub fn what_we_do_bullets(description: &str, tagline: Option<&str>) -> Vec<String> {
    let text = description.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut bullets = Vec::new();
    if let Some(tagline) = tagline.filter(|t| !t.trim().is_empty()) {
        if tagline.split_whitespace().count() <= MAX_WORDS_PER_BULLET {
            bullets.push(trim_to_words(tagline, MAX_WORDS_PER_BULLET));
        }
    }
    for sentence in split_sentences(text) {
        if bullets.len() >= MAX_BULLETS {
            break;
        }
        let bullet = trim_to_words(sentence, MAX_WORDS_PER_BULLET);
        if !bullet.is_empty() && !bullets.contains(&bullet) {
            bullets.push(bullet);
        }
    }
    bullets.truncate(MAX_BULLETS);
    bullets
}

/// Longer highlights, bounded by characters instead of words.
pub fn description_highlights(description: &str, tagline: Option<&str>) -> Vec<String> {
    let text = description.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let mut bullets = Vec::new();
    if let Some(tagline) = tagline.filter(|t| !t.trim().is_empty()) {
        if tagline.chars().count() < HIGHLIGHT_TAGLINE_LIMIT {
            bullets.push(trim_to_length(tagline, MAX_BULLET_CHARS));
        }
    }
    for sentence in split_sentences(text) {
        if bullets.len() >= MAX_BULLETS {
            break;
        }
        let bullet = trim_to_length(sentence, MAX_BULLET_CHARS);
        if !bullet.is_empty() && !bullets.contains(&bullet) {
            bullets.push(bullet);
        }
    }
    bullets.truncate(MAX_BULLETS);
    bullets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_kept_when_within_limit() {
        assert_eq!(trim_to_words("  raise   money  ", 10), "raise money");
        assert_eq!(trim_to_words("a b c d", 2), "a b…");
    }

    #[test]
    fn length_cuts_at_word_boundary() {
        assert_eq!(trim_to_length("The quick brown fox jumps", 12), "The quick…");
        assert_eq!(trim_to_length("short", 12), "short");
    }

    #[test]
    fn length_hard_cuts_a_single_long_word() {
        assert_eq!(trim_to_length("abcdefghijkl", 5), "abcde…");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        assert_eq!(trim_to_length("ééé ééé", 7), "ééé ééé");
        assert_eq!(trim_to_length("ééé ééé", 5), "ééé…");
    }

    #[test]
    fn short_description_leaves_short_text_alone() {
        assert_eq!(short_description("  We meet weekly. "), "We meet weekly.");
        let long = "word ".repeat(60);
        let cut = short_description(&long);
        assert!(cut.ends_with('…'));
        assert!(cut.chars().count() <= SHORT_DESCRIPTION_CHARS + 1);
        assert!(short_summary(&long).chars().count() <= SHORT_SUMMARY_CHARS + 1);
    }

    #[test]
    fn sentences_split_on_terminators() {
        assert_eq!(
            split_sentences("We debate. Do you?  Join us! v1.2 is out"),
            vec!["We debate.", "Do you?", "Join us!", "v1.2 is out"]
        );
        assert!(split_sentences("   ").is_empty());
    }

    #[test]
    fn bullets_start_with_short_tagline_and_skip_duplicates() {
        let description = "We raise money. We raise money. We visit hospitals. We run bake sales.";
        let bullets = what_we_do_bullets(description, Some("We raise money."));
        assert_eq!(
            bullets,
            vec!["We raise money.", "We visit hospitals.", "We run bake sales."]
        );
    }

    #[test]
    fn bullets_are_empty_without_description() {
        assert!(what_we_do_bullets("  ", Some("tagline")).is_empty());
        assert!(description_highlights("", None).is_empty());
    }

    #[test]
    fn highlights_are_bounded_by_characters() {
        let description = "Model United Nations lets students represent countries in simulated \
                           debates about global issues. Conferences run each term.";
        let highlights = description_highlights(description, None);
        assert_eq!(highlights.len(), 2);
        assert!(highlights[0].ends_with('…'));
        assert!(highlights[0].chars().count() <= MAX_BULLET_CHARS + 1);
        assert_eq!(highlights[1], "Conferences run each term.");
    }
}
