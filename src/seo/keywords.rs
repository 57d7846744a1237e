//! Bulgarian keyword extraction and slug transliteration.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Zа-яА-Я0-9\s]").expect("valid token regex"));

/// Bulgarian stopwords excluded from extracted keywords.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "и", "в", "на", "с", "за", "по", "от", "до", "че", "как", "кои", "кой", "кога",
        "къде", "защо", "тъй", "като", "не", "да", "ще", "са", "е", "съм", "сме", "сте",
        "или", "но", "ако", "защото", "така", "само", "още", "при", "между", "без",
        "над", "под", "след", "преди", "тук", "там", "този", "тази", "тези", "това",
        "ни", "ви", "си", "му", "ѝ", "им", "ми", "ти", "го", "я", "ги", "наш", "ваш",
        "техен", "техни", "много", "повече", "най", "вече", "поради", "относно",
        "също", "може", "трябва", "беше", "били", "бъде", "има", "имат", "имаме",
        "имате", "имаха",
    ]
    .into_iter()
    .collect()
});

/// Cyrillic-to-Latin slug for URL-safe section routes.
#[must_use]
pub fn slugify_bg(text: &str) -> String {
    let transliterated: String = text.to_lowercase().chars().map(transliterate).collect();

    let mut slug = String::with_capacity(transliterated.len());
    let mut last_dash = true;
    for c in transliterated.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }

    slug.trim_matches('-').to_string()
}

fn transliterate(c: char) -> std::borrow::Cow<'static, str> {
    let latin = match c {
        'а' => "a",
        'б' => "b",
        'в' => "v",
        'г' => "g",
        'д' => "d",
        'е' => "e",
        'ж' => "zh",
        'з' => "z",
        'и' => "i",
        'й' => "y",
        'к' => "k",
        'л' => "l",
        'м' => "m",
        'н' => "n",
        'о' => "o",
        'п' => "p",
        'р' => "r",
        'с' => "s",
        'т' => "t",
        'у' => "u",
        'ф' => "f",
        'х' => "h",
        'ц' => "ts",
        'ч' => "ch",
        'ш' => "sh",
        'щ' => "sht",
        'ъ' => "a",
        'ь' => "y",
        'ю' => "yu",
        'я' => "ya",
        _ => return std::borrow::Cow::Owned(c.to_string()),
    };
    std::borrow::Cow::Borrowed(latin)
}

/// Frequency-ranked keyword extraction with stopword filtering.
///
/// `extra` terms come first (lowercased), then ranked tokens; duplicates are
/// removed keeping the first occurrence, and the result is capped at `max`.
#[must_use]
pub fn extract_keywords_bg(text: &str, extra: &[String], max: usize) -> Vec<String> {
    let extra_lower: Vec<String> = extra
        .iter()
        .filter(|e| !e.is_empty())
        .map(|e| e.to_lowercase())
        .collect();

    if text.is_empty() {
        return dedup_stable(extra_lower.into_iter(), max);
    }

    let lowered = text.to_lowercase();
    let cleaned = NON_WORD.replace_all(&lowered, " ");
    let mut freq: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.chars().count() <= 2 || STOPWORDS.contains(token) {
            continue;
        }
        let count = freq.entry(token).or_insert(0);
        if *count == 0 {
            first_seen.push(token);
        }
        *count += 1;
    }

    // Stable ranking: frequency descending, first appearance breaking ties.
    let mut ranked: Vec<&str> = first_seen.clone();
    ranked.sort_by_key(|t| {
        let pos = first_seen.iter().position(|s| s == t).unwrap_or(usize::MAX);
        (std::cmp::Reverse(freq[t]), pos)
    });

    dedup_stable(
        extra_lower
            .into_iter()
            .chain(ranked.into_iter().map(String::from)),
        max,
    )
}

fn dedup_stable<I: Iterator<Item = String>>(items: I, max: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for item in items {
        if seen.insert(item.clone()) {
            out.push(item);
            if out.len() == max {
                break;
            }
        }
    }
    out
}
