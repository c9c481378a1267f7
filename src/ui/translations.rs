//! Static display strings for the dashboard chrome, carried in Spanish,
//! English and Portuguese. Display strings only; nothing here feeds the
//! analyzer.

use crate::sentiment::Sentiment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
    Pt,
}

impl Language {
    pub fn cycle(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Pt,
            Language::Pt => Language::Es,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Language::Es => &ES,
            Language::En => &EN,
            Language::Pt => &PT,
        }
    }

    pub fn sentiment_label(&self, sentiment: Sentiment) -> &'static str {
        match (self, sentiment) {
            (Language::Es, Sentiment::Positive) => "POSITIVO",
            (Language::Es, Sentiment::Neutral) => "NEUTRO",
            (Language::Es, Sentiment::Negative) => "NEGATIVO",
            (Language::En, Sentiment::Positive) => "POSITIVE",
            (Language::En, Sentiment::Neutral) => "NEUTRAL",
            (Language::En, Sentiment::Negative) => "NEGATIVE",
            (Language::Pt, Sentiment::Positive) => "POSITIVO",
            (Language::Pt, Sentiment::Neutral) => "NEUTRO",
            (Language::Pt, Sentiment::Negative) => "NEGATIVO",
        }
    }
}

#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub terminal: &'static str,
    pub execute: &'static str,
    pub waiting: &'static str,
    pub idle_title: &'static str,
    pub idle_sub: &'static str,
    pub node: &'static str,
    pub port: &'static str,
    pub link: &'static str,
    pub established: &'static str,
    pub lang: &'static str,
    pub best: &'static str,
    pub worst: &'static str,
    pub neutral: &'static str,
    pub score: &'static str,
    pub breakdown: &'static str,
}

pub static ES: Strings = Strings {
    title: "EMOJIGRAPH",
    subtitle: "MOTOR DE SENTIMIENTO NEURONAL 3D",
    terminal: "_PROMPT_DE_TERMINAL",
    execute: "_EJECUTAR_ANALISIS",
    waiting: "ESPERANDO...",
    idle_title: "SISTEMA_INACTIVO",
    idle_sub: "ESPERANDO FLUJO DE DATOS NEURONALES...",
    node: "NODO",
    port: "PUERTO",
    link: "ENLACE",
    established: "ESTABLECIDO_V4",
    lang: "IDIOMA",
    best: "POS_FRAGMENTO",
    worst: "NEG_FRAGMENTO",
    neutral: "NEU_FRAGMENTO",
    score: "INDICE",
    breakdown: "DISTRIBUCION",
};

pub static EN: Strings = Strings {
    title: "EMOJIGRAPH",
    subtitle: "3D NEURAL SENTIMENT ENGINE",
    terminal: "_TERMINAL_PROMPT",
    execute: "_EXECUTE_ANALYSIS",
    waiting: "WAITING...",
    idle_title: "SYSTEM_IDLE",
    idle_sub: "AWAITING NEURAL_FEED DATA FOR RECONSTRUCTION...",
    node: "NODE",
    port: "PORT",
    link: "LINK",
    established: "ESTABLISHED_V4",
    lang: "LANGUAGE",
    best: "POS_FRAGMENT",
    worst: "NEG_FRAGMENT",
    neutral: "NEU_FRAGMENT",
    score: "SCORE",
    breakdown: "DISTRIBUTION",
};

pub static PT: Strings = Strings {
    title: "EMOJIGRAPH",
    subtitle: "MOTOR DE SENTIMENTO NEURONAL 3D",
    terminal: "_PROMPT_DE_TERMINAL",
    execute: "_EXECUTAR_ANALISE",
    waiting: "AGUARDANDO...",
    idle_title: "SISTEMA_INATIVO",
    idle_sub: "AGUARDANDO FLUXO DE DADOS NEURONAIS...",
    node: "NÓ",
    port: "PORTA",
    link: "LINK",
    established: "ESTABELECIDO_V4",
    lang: "IDIOMA",
    best: "POS_FRAGMENTO",
    worst: "NEG_FRAGMENTO",
    neutral: "NEU_FRAGMENTO",
    score: "INDICE",
    breakdown: "DISTRIBUICAO",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_all_languages() {
        let mut lang = Language::Es;
        let mut codes = Vec::new();
        for _ in 0..3 {
            codes.push(lang.code());
            lang = lang.cycle();
        }
        assert_eq!(lang, Language::Es);
        assert_eq!(codes, vec!["es", "en", "pt"]);
    }

    #[test]
    fn test_strings_lookup() {
        assert_eq!(Language::Es.strings().execute, "_EJECUTAR_ANALISIS");
        assert_eq!(Language::En.strings().idle_title, "SYSTEM_IDLE");
        assert_eq!(Language::Pt.strings().waiting, "AGUARDANDO...");
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(
            Language::En.sentiment_label(Sentiment::Positive),
            "POSITIVE"
        );
        assert_eq!(Language::Es.sentiment_label(Sentiment::Neutral), "NEUTRO");
        assert_eq!(
            Language::Pt.sentiment_label(Sentiment::Negative),
            "NEGATIVO"
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Language::Pt).unwrap(), "\"pt\"");
        let parsed: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(parsed, Language::En);
    }
}
