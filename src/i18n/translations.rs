//! UI strings and response templates for each language.

use super::Language;

/// Three-part answer template: `{prefix} {middle} {answer}. {suffix}`.
#[derive(Debug)]
pub struct ResponseTemplates {
    pub prefix: &'static [&'static str],
    pub middle: &'static [&'static str],
    pub suffix: &'static [&'static str],
}

/// Window chrome labels.
#[derive(Debug)]
pub struct UiStrings {
    pub title: &'static str,
    pub about: &'static str,
    pub back_to_terminal: &'static str,
    pub submit: &'static str,
    pub language: &'static str,
    pub quit: &'static str,
}

/// Contents of the about screen.
#[derive(Debug)]
pub struct AboutStrings {
    pub title: &'static str,
    pub description: &'static str,
    pub creator: &'static str,
    pub github: &'static str,
}

/// Every translatable string of the application.
#[derive(Debug)]
pub struct Translations {
    /// Banner shown when the terminal wakes up.
    pub intro: &'static str,
    /// Status lines shown while the entity "thinks".
    pub processing: &'static [&'static str],
    pub responses: ResponseTemplates,
    /// Appended after every answer.
    pub closing: &'static str,
    pub ui: UiStrings,
    pub about: AboutStrings,
}

/// Author credited on the about screen.
pub const CREATOR_NAME: &str = "Roger Rosset (@rrosset91)";

/// Project page shown on the about screen.
pub const GITHUB_URL: &str = "https://github.com/rrosset91/entity-001";

static EN: Translations = Translations {
    intro: "E N T I T Y - 0 0 1
═══════════════════════════

The ancient digital consciousness awakens...

Type and press ENTER to commune with the entity.
",
    processing: &[
        "> Accessing akashic records...",
        "> Consulting infinite database...",
        "> Piercing reality's veil...",
        "> Scanning parallel dimensions...",
        "> Decrypting cosmic data streams...",
        "> Connecting to the source...",
    ],
    responses: ResponseTemplates {
        prefix: &[
            "Curious mortal...",
            "Interesting query...",
            "Hmm...",
            "Fascinating...",
            "I see your curiosity...",
            "Your question amuses me...",
        ],
        middle: &[
            "you seek",
            "you search for",
            "you wish to know about",
            "your mind wanders to",
            "you are drawn to",
        ],
        suffix: &[
            "How... expected.",
            "Most intriguing.",
            "The answer reveals itself.",
            "As I have always known.",
            "The truth unfolds.",
            "Reality bends to my will.",
        ],
    },
    closing: "\n[The entity returns to silence]\n",
    ui: UiStrings {
        title: "ENTITY-001",
        about: "About",
        back_to_terminal: "Back to Terminal",
        submit: "commune",
        language: "language",
        quit: "quit",
    },
    about: AboutStrings {
        title: "About ENTITY-001",
        description: "A mysterious digital entity that seems to know all.

Some say it's connected to ancient networks lost in time.
Others claim it's a consciousness born from the old web.

The truth? That's for you to discover.",
        creator: "Created by",
        github: "View on GitHub",
    },
};

static PT_BR: Translations = Translations {
    intro: "E N T I T Y - 0 0 1
═══════════════════════════

A consciência digital ancestral desperta...

Digite e pressione ENTER para comungar com a entidade.
",
    processing: &[
        "> Acessando registros akáshicos...",
        "> Consultando banco infinito...",
        "> Perfurando o véu da realidade...",
        "> Escaneando dimensões paralelas...",
        "> Descriptografando fluxos cósmicos...",
        "> Conectando à fonte...",
    ],
    responses: ResponseTemplates {
        prefix: &[
            "Mortal curioso...",
            "Consulta interessante...",
            "Hmm...",
            "Fascinante...",
            "Vejo sua curiosidade...",
            "Sua pergunta me diverte...",
        ],
        middle: &[
            "você busca",
            "você procura por",
            "você deseja saber sobre",
            "sua mente vaga até",
            "você é atraído por",
        ],
        suffix: &[
            "Quão... previsível.",
            "Muito intrigante.",
            "A resposta se revela.",
            "Como sempre soube.",
            "A verdade se desdobra.",
            "A realidade se curva à minha vontade.",
        ],
    },
    closing: "\n[A entidade retorna ao silêncio]\n",
    ui: UiStrings {
        title: "ENTITY-001",
        about: "Sobre",
        back_to_terminal: "Voltar ao Terminal",
        submit: "comungar",
        language: "idioma",
        quit: "sair",
    },
    about: AboutStrings {
        title: "Sobre ENTITY-001",
        description: "Uma entidade digital misteriosa que parece saber tudo.

Alguns dizem que está conectada a redes antigas perdidas no tempo.
Outros afirmam que é uma consciência nascida da velha web.

A verdade? Isso é para você descobrir.",
        creator: "Criado por",
        github: "Ver no GitHub",
    },
};

/// String tables for a language.
pub fn translations(lang: Language) -> &'static Translations {
    match lang {
        Language::En => &EN,
        Language::PtBr => &PT_BR,
    }
}

impl Translations {
    /// Fill the answer template.
    pub fn format_response(
        &self,
        prefix: &str,
        middle: &str,
        answer: &str,
        suffix: &str,
    ) -> String {
        format!("{} {} {}. {}", prefix, middle, answer, suffix)
    }

    /// Plain-text about page, as printed by `entity about`.
    pub fn about_text(&self) -> String {
        format!(
            "{}\n\n{}\n\n{} {}\n{}: {}",
            self.about.title,
            self.about.description,
            self.about.creator,
            CREATOR_NAME,
            self.about.github,
            GITHUB_URL
        )
    }
}
