//! Placeholder prose, standing in for real business data.

const PARAGRAPH_WORDS: usize = 60;

/// A short run of `n` lorem-ipsum words.
pub fn words(n: usize) -> String {
    lipsum::lipsum_words(n)
}

/// `n` paragraphs of placeholder prose, separated by blank lines.
pub fn paragraphs(n: usize) -> String {
    (0..n)
        .map(|_| lipsum::lipsum_words(PARAGRAPH_WORDS))
        .collect::<Vec<_>>()
        .join("\n\n")
}
