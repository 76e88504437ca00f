//! Tone sinks.
//!
//! A [`ToneSink`] receives whole cues. The engine never sees sink errors;
//! [`crate::context`] logs and drops them.

use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::cue::Cue;

pub trait ToneSink: Send {
    fn play(&mut self, cue: Cue) -> Result<()>;

    /// Backend name for logs
    fn name(&self) -> &'static str;
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ToneSink for NullSink {
    fn play(&mut self, _cue: Cue) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Keeps every played cue; clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    played: Arc<Mutex<Vec<Cue>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn played(&self) -> Vec<Cue> {
        match self.played.lock() {
            Ok(played) => played.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ToneSink for RecordingSink {
    fn play(&mut self, cue: Cue) -> Result<()> {
        match self.played.lock() {
            Ok(mut played) => played.push(cue),
            Err(poisoned) => poisoned.into_inner().push(cue),
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

#[cfg(feature = "rodio")]
pub use self::rodio_out::RodioSink;

#[cfg(feature = "rodio")]
mod rodio_out {
    use std::sync::mpsc::{self, Sender};
    use std::thread;
    use std::time::Duration;

    use anyhow::{anyhow, Context, Result};
    use rodio::{OutputStream, Sink, Source};

    use super::ToneSink;
    use crate::cue::{Cue, Tone};

    const SAMPLE_RATE: u32 = 44_100;

    /// Mixes the tones of one cue
    struct CueSource {
        tones: &'static [Tone],
        sample_idx: u64,
        total_samples: u64,
        phases: Vec<f32>,
    }

    impl CueSource {
        fn new(cue: Cue) -> Self {
            let tones = cue.tones();
            Self {
                tones,
                sample_idx: 0,
                total_samples: u64::from(SAMPLE_RATE) * u64::from(cue.duration_ms()) / 1000,
                phases: vec![0.0; tones.len()],
            }
        }
    }

    impl Iterator for CueSource {
        type Item = f32;

        fn next(&mut self) -> Option<f32> {
            if self.sample_idx >= self.total_samples {
                return None;
            }
            let now_ms = self.sample_idx as f32 * 1000.0 / SAMPLE_RATE as f32;
            let mut value = 0.0;
            for (tone, phase) in self.tones.iter().zip(self.phases.iter_mut()) {
                if now_ms < tone.offset_ms as f32 || now_ms >= tone.end_ms() as f32 {
                    continue;
                }
                let t = now_ms - tone.offset_ms as f32;
                value += tone.waveform.sample(*phase) * tone.gain_at(t);
                *phase = (*phase + tone.freq_at(t) / SAMPLE_RATE as f32).fract();
            }
            self.sample_idx += 1;
            Some(value)
        }
    }

    impl Source for CueSource {
        fn current_frame_len(&self) -> Option<usize> {
            None
        }

        fn channels(&self) -> u16 {
            1
        }

        fn sample_rate(&self) -> u32 {
            SAMPLE_RATE
        }

        fn total_duration(&self) -> Option<Duration> {
            Some(Duration::from_millis(
                self.total_samples * 1000 / u64::from(SAMPLE_RATE),
            ))
        }
    }

    /// Plays cues on the default output device.
    ///
    /// The output stream is not `Send`, so it lives on its own thread and cues
    /// are handed over through a channel.
    pub struct RodioSink {
        tx: Sender<Cue>,
    }

    impl RodioSink {
        pub fn open() -> Result<Self> {
            let (tx, rx) = mpsc::channel::<Cue>();
            let (ready_tx, ready_rx) = mpsc::channel::<Result<()>>();

            thread::Builder::new()
                .name("retro-tetris-audio".to_string())
                .spawn(move || {
                    let (_stream, handle) = match OutputStream::try_default() {
                        Ok(pair) => {
                            let _ = ready_tx.send(Ok(()));
                            pair
                        }
                        Err(e) => {
                            let _ = ready_tx.send(Err(anyhow!("open output stream: {e}")));
                            return;
                        }
                    };
                    for cue in rx {
                        match Sink::try_new(&handle) {
                            Ok(sink) => {
                                sink.append(CueSource::new(cue));
                                // One-shot: keeps playing after the handle drops.
                                sink.detach();
                            }
                            Err(e) => eprintln!("[Audio] Could not play {:?}: {}", cue, e),
                        }
                    }
                })
                .context("spawn audio thread")?;

            ready_rx
                .recv()
                .context("audio thread exited during startup")??;
            Ok(Self { tx })
        }
    }

    impl ToneSink for RodioSink {
        fn play(&mut self, cue: Cue) -> Result<()> {
            self.tx
                .send(cue)
                .map_err(|_| anyhow!("audio thread is gone"))
        }

        fn name(&self) -> &'static str {
            "rodio"
        }
    }

}
