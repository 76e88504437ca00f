//! Retro sound cues.
//!
//! [`cue`] maps game events to short synthesized tones, [`context`] holds the
//! process-wide audio context and [`sink`] is where tones end up.
//! The default build is silent; enable the `rodio` feature for real output.

pub use retro_tetris_types as types;

pub mod context;
pub mod cue;
pub mod sink;

pub use context::{
    init_audio, init_audio_with, is_initialized, is_muted, play, play_event, set_muted, AudioContext,
};
pub use cue::{cue_for_event, Cue, Tone, Waveform};
pub use sink::{NullSink, RecordingSink, ToneSink};

#[cfg(feature = "rodio")]
pub use sink::RodioSink;
