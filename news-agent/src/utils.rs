/// Split text into sentences on whitespace that follows `.`, `!` or `?`.
/// Whitespace runs are collapsed first; empty fragments are dropped.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        current.push(word);
        if word.ends_with(['.', '!', '?']) {
            sentences.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        sentences.push(current.join(" "));
    }

    sentences
}

/// First `max_sentences` sentences joined by single spaces. Text without any
/// sentence comes back trimmed.
pub fn summarize(text: &str, max_sentences: usize) -> String {
    let sentences = split_sentences(text);
    if sentences.is_empty() {
        return text.trim().to_string();
    }
    sentences
        .into_iter()
        .take(max_sentences)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whitespace-delimited tokens across all parts.
pub fn count_words<'a, I>(parts: I) -> usize
where
    I: IntoIterator<Item = &'a str>,
{
    parts.into_iter().map(|p| p.split_whitespace().count()).sum()
}

/// Case-insensitive search for any of `needles` inside `sentence`.
pub fn contains_any(sentence: &str, needles: &[&str]) -> bool {
    let lowered = sentence.to_lowercase();
    needles.iter().any(|n| lowered.contains(n))
}
