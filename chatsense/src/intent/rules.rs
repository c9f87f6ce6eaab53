//! Ordered keyword rules used by the intent classifier.

use super::Intent;

/// Confidence reported when no rule fires.
pub const FALLBACK_CONFIDENCE: f32 = 0.3;

/// A single piece of lexical evidence for an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The lower-cased text contains this substring anywhere.
    Contains(String),
    /// The lower-cased text opens with this word (or phrase), followed by a
    /// non-alphanumeric character or the end of the text.
    Opener(String),
}

impl Trigger {
    /// Check the trigger against already lower-cased, trimmed text.
    pub fn matches(&self, lowered: &str) -> bool {
        match self {
            Trigger::Contains(needle) => lowered.contains(needle.as_str()),
            Trigger::Opener(word) => lowered.strip_prefix(word.as_str()).is_some_and(|rest| {
                rest.chars().next().is_none_or(|c| !c.is_alphanumeric())
            }),
        }
    }
}

/// An intent rule: any trigger firing assigns `intent` with a fixed `confidence`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntentRule {
    /// Intent assigned when the rule fires
    pub intent: Intent,
    /// Fixed confidence of this rule, independent of how many triggers fire
    pub confidence: f32,
    /// Triggers, any of which fires the rule
    pub triggers: Vec<Trigger>,
}

impl IntentRule {
    /// Whether any trigger fires on the lower-cased text.
    pub fn fires(&self, lowered: &str) -> bool {
        self.triggers.iter().any(|t| t.matches(lowered))
    }
}

// (intent, confidence, openers, substrings) in precedence order
const RULE_TABLE: &[(Intent, f32, &[&str], &[&str])] = &[
    (
        Intent::Question,
        0.80,
        &[
            "como", "qual", "quais", "quando", "onde", "quem", "quanto", "quantos", "quantas",
            "por que", "porque", "o que", "será", "pode", "podem", "poderia", "vocês têm",
            "tem como",
        ],
        &["?"],
    ),
    (
        Intent::Complaint,
        0.85,
        &[],
        &[
            "problema", "reclama", "não funciona", "nao funciona", "não consigo",
            "nao consigo", "erro", "defeito", "péssim", "pessim", "horrível", "horrivel",
            "terrível", "terrivel", "insatisfeit", "absurdo", "quebrad", "atrasad", "atraso",
            "decepcionad",
        ],
    ),
    (
        Intent::Feedback,
        0.75,
        &[],
        &[
            "sugest", "sugiro", "opinião", "opiniao", "acho que", "feedback", "avaliação",
            "avaliacao", "gostei", "adorei", "excelente", "recomendo", "elogi",
        ],
    ),
    (
        Intent::Request,
        0.80,
        &[],
        &[
            "quero", "gostaria", "preciso", "solicit", "por favor", "pode me", "me envi",
            "cancelar", "agendar", "alterar", "trocar", "me ajud",
        ],
    ),
    (
        Intent::Greeting,
        0.95,
        &["oi", "olá", "ola", "opa", "e aí", "e ai", "eae"],
        &["bom dia", "boa tarde", "boa noite"],
    ),
    (
        Intent::Goodbye,
        0.90,
        &[],
        &[
            "tchau", "até logo", "ate logo", "até mais", "ate mais", "até breve",
            "até amanhã", "adeus", "falou",
        ],
    ),
    (
        Intent::Gratitude,
        0.95,
        &[],
        &["obrigad", "agradeç", "agradec", "valeu", "grato", "grata"],
    ),
];

/// Build the built-in rule list in precedence order.
///
/// The fallback intent is not a rule; the classifier assigns it when no rule
/// fires.
pub fn default_rules() -> Vec<IntentRule> {
    RULE_TABLE
        .iter()
        .map(|(intent, confidence, openers, substrings)| IntentRule {
            intent: *intent,
            confidence: *confidence,
            triggers: openers
                .iter()
                .map(|w| Trigger::Opener((*w).to_string()))
                .chain(substrings.iter().map(|s| Trigger::Contains((*s).to_string())))
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_requires_word_boundary() {
        let opener = Trigger::Opener("oi".to_string());
        assert!(opener.matches("oi"));
        assert!(opener.matches("oi, tudo bem"));
        assert!(!opener.matches("oito pedidos"));
        assert!(!opener.matches("depois eu vejo"));
    }

    #[test]
    fn test_contains_is_substring() {
        let trigger = Trigger::Contains("reclama".to_string());
        assert!(trigger.matches("quero fazer uma reclamação"));
        assert!(!trigger.matches("tudo certo"));
    }

    #[test]
    fn test_default_rule_order() {
        let order: Vec<Intent> = default_rules().iter().map(|r| r.intent).collect();
        assert_eq!(order, Intent::ALL[..7].to_vec());
    }

    #[test]
    fn test_specific_rules_outrank_broad_rules() {
        let rules = default_rules();
        let confidence = |intent: Intent| {
            rules
                .iter()
                .find(|r| r.intent == intent)
                .map(|r| r.confidence)
                .unwrap()
        };

        assert!(confidence(Intent::Greeting) > confidence(Intent::Question));
        assert!(confidence(Intent::Gratitude) > confidence(Intent::Request));
        assert!(FALLBACK_CONFIDENCE < confidence(Intent::Feedback));
    }
}
