//! PC-speaker style beep cues.
//!
//! Each [`Cue`] expands to a short schedule of square-wave [`Beep`]s. The
//! [`Beeper`] queues scheduled beeps against a deadline and hands them to a
//! [`BeepSink`] once due, so callers never block on audio.

use std::io::Write;
use std::time::{Duration, Instant};

/// One square-wave tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Beep {
    pub frequency_hz: u32,
    pub duration: Duration,
}

impl Beep {
    pub const fn new(frequency_hz: u32, duration_ms: u64) -> Self {
        Self {
            frequency_hz,
            duration: Duration::from_millis(duration_ms),
        }
    }
}

/// Moments in the question/answer cycle that get a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// Single beep: processing starts.
    StartProcessing,
    /// Double beep: the answer is revealed.
    RevealAnswer,
    /// Lower tone: the entity falls silent.
    Finish,
}

/// A beep at an offset from the moment its cue was played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledBeep {
    pub offset: Duration,
    pub beep: Beep,
}

const START_PROCESSING: &[ScheduledBeep] = &[ScheduledBeep {
    offset: Duration::ZERO,
    beep: Beep::new(1000, 100),
}];

const REVEAL_ANSWER: &[ScheduledBeep] = &[
    ScheduledBeep {
        offset: Duration::ZERO,
        beep: Beep::new(1200, 100),
    },
    ScheduledBeep {
        offset: Duration::from_millis(150),
        beep: Beep::new(1200, 100),
    },
];

const FINISH: &[ScheduledBeep] = &[ScheduledBeep {
    offset: Duration::ZERO,
    beep: Beep::new(800, 150),
}];

impl Cue {
    /// Beeps making up this cue, ordered by offset.
    pub fn schedule(self) -> &'static [ScheduledBeep] {
        match self {
            Cue::StartProcessing => START_PROCESSING,
            Cue::RevealAnswer => REVEAL_ANSWER,
            Cue::Finish => FINISH,
        }
    }
}

/// Something that can make a beep.
pub trait BeepSink {
    fn beep(&mut self, beep: &Beep);
}

/// Rings the terminal bell. Pitch and length are up to the terminal.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl BeepSink for TerminalBell {
    fn beep(&mut self, beep: &Beep) {
        let mut stdout = std::io::stdout();
        // A lost bell is not worth interrupting the session for
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::debug!(error = %e, "Failed to ring terminal bell");
        }
        tracing::trace!(frequency_hz = beep.frequency_hz, "Beep");
    }
}

/// Discards every beep.
#[derive(Debug, Default)]
pub struct SilentSink;

impl BeepSink for SilentSink {
    fn beep(&mut self, _beep: &Beep) {}
}

/// Queues cues and plays their beeps when due.
pub struct Beeper {
    sink: Box<dyn BeepSink>,
    enabled: bool,
    pending: Vec<(Instant, Beep)>,
}

impl Beeper {
    pub fn new(sink: Box<dyn BeepSink>, enabled: bool) -> Self {
        Self {
            sink,
            enabled,
            pending: Vec::new(),
        }
    }

    /// A beeper that never makes a sound.
    pub fn silent() -> Self {
        Self::new(Box::new(SilentSink), false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or mute. Muting drops anything still queued.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending.clear();
        }
    }

    /// Queue a cue starting at `now`. Beeps due immediately play right away.
    pub fn play(&mut self, cue: Cue, now: Instant) {
        if !self.enabled {
            return;
        }
        tracing::debug!(?cue, "Playing cue");
        self.pending.extend(
            cue.schedule()
                .iter()
                .map(|scheduled| (now + scheduled.offset, scheduled.beep)),
        );
        self.tick(now);
    }

    /// Play every queued beep whose deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        let mut due = Vec::new();
        self.pending.retain(|(deadline, beep)| {
            if *deadline <= now {
                due.push((*deadline, *beep));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(deadline, _)| *deadline);
        for (_, beep) in due {
            self.sink.beep(&beep);
        }
    }

    /// Number of beeps still waiting for their deadline.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl std::fmt::Debug for Beeper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Beeper")
            .field("enabled", &self.enabled)
            .field("pending", &self.pending.len())
            .finish()
    }
}
