//! Keyword lexicons with whole-word, case-insensitive matching.

use crate::{ChatsenseError, Result};
use lazy_static::lazy_static;
use regex::Regex;

/// Built-in positive keywords.
pub const POSITIVE_WORDS: &[&str] = &[
    "excelente", "ótimo", "ótima", "otimo", "otima", "maravilhoso", "maravilhosa",
    "perfeito", "perfeita", "adorei", "amei", "gostei", "feliz", "satisfeito",
    "satisfeita", "incrível", "incrivel", "parabéns", "parabens", "obrigado",
    "obrigada", "rápido", "rápida", "rapido", "rapida", "eficiente", "recomendo",
    "resolvido", "resolvida", "sucesso", "top", "legal", "atencioso", "atenciosa",
];

/// Built-in negative keywords.
pub const NEGATIVE_WORDS: &[&str] = &[
    "ruim", "péssimo", "péssima", "pessimo", "pessima", "horrível", "horrivel",
    "terrível", "terrivel", "problema", "problemas", "erro", "falha", "defeito",
    "demora", "demorado", "lento", "lenta", "insatisfeito", "insatisfeita",
    "reclamação", "reclamacao", "odiei", "odeio", "pior", "absurdo", "decepcionado",
    "decepcionada", "decepção", "quebrado", "quebrada", "atraso", "atrasado",
    "chateado", "chateada", "raiva",
];

lazy_static! {
    static ref DEFAULT_POSITIVE: Lexicon =
        Lexicon::new(POSITIVE_WORDS.iter().copied()).unwrap();
    static ref DEFAULT_NEGATIVE: Lexicon =
        Lexicon::new(NEGATIVE_WORDS.iter().copied()).unwrap();
}

/// A closed keyword list compiled into a single whole-word matcher.
#[derive(Debug, Clone)]
pub struct Lexicon {
    words: Vec<String>,
    matcher: Regex,
}

impl Lexicon {
    /// Compile a lexicon. Words are trimmed, lower-cased and deduplicated.
    ///
    /// Fails on an empty list or an empty entry.
    pub fn new<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized = Vec::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                return Err(ChatsenseError::Configuration(
                    "Lexicon entries cannot be empty".to_string(),
                ));
            }
            if !normalized.contains(&word) {
                normalized.push(word);
            }
        }

        if normalized.is_empty() {
            return Err(ChatsenseError::Configuration(
                "Lexicon cannot be empty".to_string(),
            ));
        }

        // Longest first so multi-word entries win over their prefixes
        let mut alternatives: Vec<&str> = normalized.iter().map(String::as_str).collect();
        alternatives.sort_by_key(|w| std::cmp::Reverse(w.len()));
        // Explicit non-word edges so entries like "c++" still match as tokens
        let pattern = format!(
            r"(?:^|\W)({})(?:\W|$)",
            alternatives
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|")
        );

        let matcher = Regex::new(&pattern)
            .map_err(|e| ChatsenseError::Configuration(format!("Invalid lexicon: {}", e)))?;

        Ok(Self {
            words: normalized,
            matcher,
        })
    }

    /// The built-in positive lexicon.
    pub fn positive() -> Self {
        DEFAULT_POSITIVE.clone()
    }

    /// The built-in negative lexicon.
    pub fn negative() -> Self {
        DEFAULT_NEGATIVE.clone()
    }

    /// Return a new lexicon with extra words appended.
    pub fn extended<I, S>(&self, extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra: Vec<String> = extra.into_iter().map(|w| w.as_ref().to_string()).collect();
        if extra.is_empty() {
            return Ok(self.clone());
        }
        Lexicon::new(self.words.iter().map(String::as_str).chain(extra.iter().map(String::as_str)))
    }

    /// Count whole-word keyword occurrences in already lower-cased text.
    pub fn count_matches(&self, lowered: &str) -> usize {
        let mut count = 0;
        let mut at = 0;
        // resume at the end of the keyword so a shared separator can open the next match
        while let Some(word) = self.matcher.captures_at(lowered, at).and_then(|c| c.get(1)) {
            count += 1;
            at = word.end();
        }
        count
    }

    /// Whether the lexicon contains this word (case-insensitive).
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim().to_lowercase();
        self.words.contains(&word)
    }

    /// The normalized keywords.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon has no keywords. Always false for a constructed lexicon.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_matching() {
        let lexicon = Lexicon::new(["bom", "erro"]).unwrap();
        assert_eq!(lexicon.count_matches("foi bom, muito bom"), 2);
        // Substrings inside longer words do not count
        assert_eq!(lexicon.count_matches("bombeiro"), 0);
        assert_eq!(lexicon.count_matches("terror"), 0);
    }

    #[test]
    fn test_accented_words_respect_boundaries() {
        let lexicon = Lexicon::new(["péssimo"]).unwrap();
        assert_eq!(lexicon.count_matches("atendimento péssimo!"), 1);
        assert_eq!(lexicon.count_matches("péssimos"), 0);
    }

    #[test]
    fn test_normalization() {
        let lexicon = Lexicon::new([" Ótimo ", "ótimo", "TOP"]).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("top"));
        assert!(lexicon.contains("ÓTIMO"));
    }

    #[test]
    fn test_malformed_lexicon_is_rejected() {
        assert!(Lexicon::new(["bom", "  "]).is_err());
        assert!(Lexicon::new(Vec::<String>::new()).is_err());
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let lexicon = Lexicon::new(["c++"]).unwrap();
        assert_eq!(lexicon.count_matches("ccc"), 0);
        assert_eq!(lexicon.count_matches("c"), 0);
    }

    #[test]
    fn test_entries_with_non_word_edges_match() {
        let lexicon = Lexicon::new(["c++", "10/10", "bom"]).unwrap();
        assert_eq!(lexicon.count_matches("c++"), 1);
        assert_eq!(lexicon.count_matches("usei c++ e nota 10/10!"), 2);
        assert_eq!(lexicon.count_matches("nota 10/100"), 0);
        assert_eq!(lexicon.count_matches("c++x"), 0);
    }

    #[test]
    fn test_adjacent_keywords_share_a_separator() {
        let lexicon = Lexicon::new(["bom", "ótimo"]).unwrap();
        assert_eq!(lexicon.count_matches("bom bom bom"), 3);
        assert_eq!(lexicon.count_matches("bom,ótimo"), 2);
    }

    #[test]
    fn test_extended() {
        let base = Lexicon::positive();
        let extended = base.extended(["sensacional"]).unwrap();
        assert_eq!(extended.len(), base.len() + 1);
        assert_eq!(extended.count_matches("foi sensacional"), 1);
        assert_eq!(base.count_matches("foi sensacional"), 0);
    }
}
