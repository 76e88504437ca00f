//! Process-wide audio context.
//!
//! Created once by [`init_audio`] (the front-end calls it on the first user
//! action). Cues played before that are dropped. Mute is a separate flag so it
//! can be set before the context exists.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, OnceLock};

use crate::cue::{cue_for_event, Cue};
use crate::sink::{NullSink, ToneSink};
use crate::types::GameEvent;

/// Owns the sink and remembers whether it has failed before
pub struct AudioContext {
    sink: Box<dyn ToneSink>,
    failed: bool,
}

impl AudioContext {
    pub fn new(sink: Box<dyn ToneSink>) -> Self {
        Self {
            sink,
            failed: false,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.sink.name()
    }

    /// Play `cue`; failures are logged once and otherwise ignored
    pub fn play(&mut self, cue: Cue) {
        if let Err(e) = self.sink.play(cue) {
            if !self.failed {
                eprintln!("[Audio] {} backend failed: {:#}", self.sink.name(), e);
                self.failed = true;
            }
        }
    }
}

static CONTEXT: OnceLock<Mutex<AudioContext>> = OnceLock::new();
static MUTED: AtomicBool = AtomicBool::new(false);

fn default_sink() -> Box<dyn ToneSink> {
    #[cfg(feature = "rodio")]
    {
        match crate::sink::RodioSink::open() {
            Ok(sink) => return Box::new(sink),
            Err(e) => eprintln!("[Audio] No output device, running silent: {:#}", e),
        }
    }
    Box::new(NullSink)
}

/// Create the context with the default backend. Later calls do nothing.
///
/// Returns `true` if this call created it.
pub fn init_audio() -> bool {
    init_audio_with(default_sink)
}

/// Like [`init_audio`] with a caller-supplied backend
pub fn init_audio_with<F>(make_sink: F) -> bool
where
    F: FnOnce() -> Box<dyn ToneSink>,
{
    let mut created = false;
    CONTEXT.get_or_init(|| {
        created = true;
        let ctx = AudioContext::new(make_sink());
        eprintln!("[Audio] Initialized ({} backend)", ctx.backend());
        Mutex::new(ctx)
    });
    created
}

pub fn is_initialized() -> bool {
    CONTEXT.get().is_some()
}

pub fn set_muted(muted: bool) {
    MUTED.store(muted, Ordering::Relaxed);
}

pub fn is_muted() -> bool {
    MUTED.load(Ordering::Relaxed)
}

/// Play `cue` if the context exists and audio is not muted
pub fn play(cue: Cue) {
    if is_muted() {
        return;
    }
    let Some(ctx) = CONTEXT.get() else {
        return;
    };
    match ctx.lock() {
        Ok(mut ctx) => ctx.play(cue),
        Err(poisoned) => poisoned.into_inner().play(cue),
    }
}

/// Play the cue for `event`, if it has one
pub fn play_event(event: &GameEvent) {
    if let Some(cue) = cue_for_event(event) {
        play(cue);
    }
}
