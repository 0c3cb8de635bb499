// src/services/classifier.rs

/// Keywords that mark a question as needing live, web-grounded information.
pub const REALTIME_KEYWORDS: [&str; 8] = [
    "today",
    "latest",
    "notice",
    "exam",
    "result",
    "admit card",
    "update",
    "news",
];

/// Case-insensitive substring match against [`REALTIME_KEYWORDS`].
/// No word boundaries: "updated" matches "update".
pub fn needs_realtime(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    REALTIME_KEYWORDS.iter().any(|k| text_lower.contains(k))
}
