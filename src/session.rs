//! The oracle's question/answer cycle.
//!
//! The user types, the screen shows filler from the [`Typewriter`], and what
//! was really typed is kept as the hidden answer. On ENTER the entity
//! "processes" for a few steps and then reveals the answer inside a response
//! template.
//!
//! Time is passed in explicitly through [`Session::tick`], so the whole cycle
//! can be driven without a terminal and without sleeping.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::beeper::{Beeper, Cue};
use crate::i18n::{filler_fragments, translations, Language, Translations};
use crate::typewriter::{
    picker_for_seed, BoxedPicker, FragmentPicker, Typewriter, TypewriterError, MIN_FILLER_LEN,
};

/// Number of processing lines shown before each answer.
pub const PROCESSING_LINES: usize = 3;

/// Where the session is in the question/answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Intro shown, nothing typed yet.
    Awaiting,
    /// Keystrokes are being mapped to filler.
    Typing,
    /// Processing lines are being printed.
    Processing,
    /// The answer has been printed, closing text pending.
    Revealing,
    /// Cycle complete; the next keystroke starts a new one.
    Finished,
}

impl Phase {
    /// True while the entity is talking and keystrokes are ignored.
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Processing | Phase::Revealing)
    }
}

/// Tunables for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    /// Delay between consecutive lines printed by the entity.
    pub processing_step: Duration,
    /// Characters of filler generated up front on every reset.
    pub min_filler_len: usize,
    /// Fixed RNG seed. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            processing_step: Duration::from_millis(700),
            min_filler_len: MIN_FILLER_LEN,
            seed: None,
        }
    }
}

/// One line the entity will print once its turn comes.
#[derive(Debug)]
struct ScriptStep {
    text: String,
    cue: Option<Cue>,
    phase_after: Phase,
}

/// State of one terminal session.
pub struct Session {
    language: Language,
    strings: &'static Translations,
    typewriter: Typewriter<BoxedPicker>,
    /// Picks processing lines and response templates.
    picker: BoxedPicker,
    beeper: Beeper,
    phase: Phase,
    transcript: String,
    /// What the user really typed this cycle.
    secret: String,
    /// Filler characters shown for the current input line.
    ///
    /// Only grows within a cycle: the filler on screen stays a prefix of the
    /// typewriter's buffer even after a backspace.
    typed: usize,
    step: Duration,
    script: VecDeque<ScriptStep>,
    next_step_at: Option<Instant>,
}

impl Session {
    /// Create a session, seeding both pickers from `options.seed` if set.
    pub fn new(
        language: Language,
        options: SessionOptions,
        beeper: Beeper,
    ) -> Result<Self, TypewriterError> {
        let filler_picker = picker_for_seed(options.seed);
        let template_picker = picker_for_seed(options.seed.map(|s| s.wrapping_add(1)));
        Self::with_pickers(language, options, beeper, filler_picker, template_picker)
    }

    /// Create a session with explicit pickers for filler and templates.
    pub fn with_pickers(
        language: Language,
        options: SessionOptions,
        beeper: Beeper,
        filler_picker: BoxedPicker,
        template_picker: BoxedPicker,
    ) -> Result<Self, TypewriterError> {
        let typewriter = Typewriter::with_min_filler_len(
            filler_fragments(language).iter().copied(),
            filler_picker,
            options.min_filler_len,
        )?;
        let strings = translations(language);
        tracing::info!(language = %language, "Session started");
        Ok(Self {
            language,
            strings,
            typewriter,
            picker: template_picker,
            beeper,
            phase: Phase::Awaiting,
            transcript: strings.intro.to_string(),
            secret: String::new(),
            typed: 0,
            step: options.processing_step,
            script: VecDeque::new(),
            next_step_at: None,
        })
    }

    /// Handle a printable keystroke. Returns false if it was ignored.
    pub fn type_char(&mut self, ch: char) -> bool {
        if self.phase.is_busy() || ch.is_control() {
            return false;
        }
        if matches!(self.phase, Phase::Awaiting | Phase::Finished) {
            self.begin_cycle();
        }
        self.secret.push(ch);
        self.transcript.push(self.typewriter.next_char());
        self.typed += 1;
        true
    }

    /// Remove the last character of the hidden answer.
    ///
    /// The filler already on screen stays. Returns false if nothing was
    /// removed.
    pub fn backspace(&mut self) -> bool {
        if self.phase != Phase::Typing {
            return false;
        }
        self.secret.pop().is_some()
    }

    /// Submit the hidden answer and start processing.
    ///
    /// Ignored unless something non-blank was typed this cycle.
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Typing || self.secret.trim().is_empty() {
            return false;
        }
        tracing::debug!(chars = self.typed, "Question submitted");
        self.transcript.push('\n');
        self.script = self.build_script();
        self.phase = Phase::Processing;
        self.beeper.play(Cue::StartProcessing, now);
        self.next_step_at = Some(now);
        self.tick(now);
        true
    }

    /// Advance timers: print due script lines and play due beeps.
    pub fn tick(&mut self, now: Instant) {
        while let Some(at) = self.next_step_at {
            if at > now {
                break;
            }
            let Some(step) = self.script.pop_front() else {
                self.next_step_at = None;
                break;
            };
            self.transcript.push_str(&step.text);
            self.transcript.push('\n');
            if let Some(cue) = step.cue {
                self.beeper.play(cue, at);
            }
            self.phase = step.phase_after;
            self.next_step_at = if self.script.is_empty() {
                None
            } else {
                Some(at + self.step)
            };
        }
        self.beeper.tick(now);
    }

    /// Switch language: new filler, new strings, fresh transcript.
    pub fn set_language(&mut self, language: Language) -> Result<(), TypewriterError> {
        self.typewriter
            .reset_with(filler_fragments(language).iter().copied())?;
        self.language = language;
        self.strings = translations(language);
        self.transcript = self.strings.intro.to_string();
        self.phase = Phase::Awaiting;
        self.secret.clear();
        self.typed = 0;
        self.script.clear();
        self.next_step_at = None;
        Ok(())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn strings(&self) -> &'static Translations {
        self.strings
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Everything printed so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Filler characters served in the current cycle.
    pub fn filler_position(&self) -> usize {
        self.typewriter.position()
    }

    pub fn beeper_mut(&mut self) -> &mut Beeper {
        &mut self.beeper
    }

    fn begin_cycle(&mut self) {
        if self.phase == Phase::Finished {
            self.transcript.push('\n');
        }
        self.typewriter.reset();
        self.secret.clear();
        self.typed = 0;
        self.phase = Phase::Typing;
    }

    fn build_script(&mut self) -> VecDeque<ScriptStep> {
        let strings = self.strings;
        let mut script: VecDeque<ScriptStep> =
            pick_distinct(&mut self.picker, strings.processing.len(), PROCESSING_LINES)
                .into_iter()
                .map(|i| ScriptStep {
                    text: strings.processing[i].to_string(),
                    cue: None,
                    phase_after: Phase::Processing,
                })
                .collect();

        let templates = &strings.responses;
        let prefix = templates.prefix[pick(&mut self.picker, templates.prefix.len())];
        let middle = templates.middle[pick(&mut self.picker, templates.middle.len())];
        let suffix = templates.suffix[pick(&mut self.picker, templates.suffix.len())];
        script.push_back(ScriptStep {
            text: format!(
                "\n{}",
                strings.format_response(prefix, middle, self.secret.trim(), suffix)
            ),
            cue: Some(Cue::RevealAnswer),
            phase_after: Phase::Revealing,
        });
        script.push_back(ScriptStep {
            text: strings.closing.trim_end_matches('\n').to_string(),
            cue: Some(Cue::Finish),
            phase_after: Phase::Finished,
        });
        script
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("language", &self.language)
            .field("phase", &self.phase)
            .field("typed", &self.typed)
            .field("pending_steps", &self.script.len())
            .finish()
    }
}

fn pick(picker: &mut impl FragmentPicker, len: usize) -> usize {
    picker.pick(len) % len
}

/// Up to `count` distinct indices from `0..len`, in pick order.
fn pick_distinct(picker: &mut impl FragmentPicker, len: usize, count: usize) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..len).collect();
    let count = count.min(len);
    for i in 0..count {
        let j = i + pick(picker, len - i);
        indices.swap(i, j);
    }
    indices.truncate(count);
    indices
}
