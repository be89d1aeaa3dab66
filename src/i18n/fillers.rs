//! Filler fragment tables.
//!
//! Short words that concatenate into mystical-sounding invocations. Every
//! fragment ends with a space so any concatenation reads as a phrase, for
//! three-letter answers and fifty-letter answers alike.

use super::Language;

const EN: &[&str] = &[
    "OH ",
    "ENTITY ",
    "REVEAL ",
    "ANSWER ",
    "MIGHTY ",
    "ORACLE ",
    "SPEAK ",
    "SHOW ",
    "TELL ",
    "GRANT ",
    "WISDOM ",
    "TRUTH ",
    "KNOWLEDGE ",
    "ALL-KNOWING ",
    "SUPREME ",
    "DIGITAL ",
    "ONE ",
    "ME ",
    "YOUR ",
    "THE ",
    "ANCIENT ",
    "COSMIC ",
    "ETERNAL ",
    "INFINITE ",
    "MASTER ",
    "GUIDE ",
    "ENLIGHTEN ",
    "BESTOW ",
];

const PT_BR: &[&str] = &[
    "OH ",
    "ENTITY ",
    "REVELE ",
    "RESPONDA ",
    "PODEROSA ",
    "ORÁCULO ",
    "FALE ",
    "MOSTRE ",
    "DIGA ",
    "CONCEDA ",
    "SABEDORIA ",
    "VERDADE ",
    "CONHECIMENTO ",
    "ONISCIENTE ",
    "SUPREMA ",
    "DIGITAL ",
    "UMA ",
    "ME ",
    "SUA ",
    "A ",
    "ANTIGA ",
    "CÓSMICA ",
    "ETERNA ",
    "INFINITA ",
    "MESTRE ",
    "GUIE ",
    "ILUMINE ",
    "CONCEDA ",
];

/// Filler fragments for a language.
pub fn filler_fragments(lang: Language) -> &'static [&'static str] {
    match lang {
        Language::En => EN,
        Language::PtBr => PT_BR,
    }
}
