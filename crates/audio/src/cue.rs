//! Cue tables.
//!
//! Every cue is a handful of oscillator tones. A tone starts `offset_ms` after
//! the cue, plays for `duration_ms` and, when `fade` is set, ramps its gain
//! down to 1% by the end. `sweep_to_hz` ramps the pitch exponentially.

use crate::types::{Direction, GameEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Square,
    Triangle,
    Sawtooth,
}

impl Waveform {
    /// One sample in `[-1, 1]` at `phase` in `[0, 1)`
    pub fn sample(self, phase: f32) -> f32 {
        match self {
            Waveform::Square => {
                if phase < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
            Waveform::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
            Waveform::Sawtooth => 2.0 * phase - 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub sweep_to_hz: Option<f32>,
    pub offset_ms: u32,
    pub duration_ms: u32,
    pub volume: f32,
    pub waveform: Waveform,
    pub fade: bool,
}

impl Tone {
    const fn square(freq_hz: f32, duration_ms: u32, volume: f32) -> Self {
        Self {
            freq_hz,
            sweep_to_hz: None,
            offset_ms: 0,
            duration_ms,
            volume,
            waveform: Waveform::Square,
            fade: false,
        }
    }

    const fn at(mut self, offset_ms: u32) -> Self {
        self.offset_ms = offset_ms;
        self
    }

    const fn sweep(mut self, to_hz: f32) -> Self {
        self.sweep_to_hz = Some(to_hz);
        self
    }

    const fn faded(mut self) -> Self {
        self.fade = true;
        self
    }

    const fn wave(mut self, waveform: Waveform) -> Self {
        self.waveform = waveform;
        self
    }

    /// Where the tone stops, measured from the start of its cue
    pub fn end_ms(&self) -> u32 {
        self.offset_ms + self.duration_ms
    }

    /// Frequency `t_ms` into the tone
    pub fn freq_at(&self, t_ms: f32) -> f32 {
        match self.sweep_to_hz {
            Some(to) if self.duration_ms > 0 => {
                let p = (t_ms / self.duration_ms as f32).clamp(0.0, 1.0);
                self.freq_hz * (to / self.freq_hz).powf(p)
            }
            _ => self.freq_hz,
        }
    }

    /// Gain `t_ms` into the tone
    pub fn gain_at(&self, t_ms: f32) -> f32 {
        if !self.fade || self.duration_ms == 0 {
            return self.volume;
        }
        let p = (t_ms / self.duration_ms as f32).clamp(0.0, 1.0);
        self.volume * (0.01 / self.volume).powf(p)
    }
}

const MOVE: [Tone; 1] = [Tone::square(200.0, 50, 0.1)];
const SOFT_DROP: [Tone; 1] = [Tone::square(150.0, 60, 0.15)];
const ROTATE: [Tone; 1] = [Tone::square(400.0, 80, 0.15)];
const HARD_DROP: [Tone; 1] = [Tone::square(100.0, 100, 0.3).sweep(50.0).faded()];
const LOCK: [Tone; 1] = [Tone::square(150.0, 100, 0.2)];

// C-E-G chord, staggered by 50ms, all ending at 300ms.
const LINE_CLEAR: [Tone; 3] = [
    Tone::square(523.0, 300, 0.15).faded(),
    Tone::square(659.0, 250, 0.15).at(50).faded(),
    Tone::square(784.0, 200, 0.15).at(100).faded(),
];

const TETRIS: [Tone; 4] = [
    Tone::square(523.0, 150, 0.25).faded(),
    Tone::square(659.0, 150, 0.25).at(100).faded(),
    Tone::square(784.0, 150, 0.25).at(200).faded(),
    Tone::square(1047.0, 150, 0.25).at(300).faded(),
];

const LEVEL_UP: [Tone; 4] = [
    Tone::square(523.0, 100, 0.2).wave(Waveform::Triangle),
    Tone::square(659.0, 100, 0.2).at(80).wave(Waveform::Triangle),
    Tone::square(784.0, 100, 0.2).at(160).wave(Waveform::Triangle),
    Tone::square(1047.0, 100, 0.2).at(240).wave(Waveform::Triangle),
];

const GAME_OVER: [Tone; 1] = [Tone::square(300.0, 500, 0.3)
    .wave(Waveform::Sawtooth)
    .sweep(100.0)
    .faded()];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Move,
    SoftDrop,
    Rotate,
    HardDrop,
    Lock,
    LineClear,
    Tetris,
    LevelUp,
    GameOver,
}

impl Cue {
    pub fn tones(self) -> &'static [Tone] {
        match self {
            Cue::Move => &MOVE,
            Cue::SoftDrop => &SOFT_DROP,
            Cue::Rotate => &ROTATE,
            Cue::HardDrop => &HARD_DROP,
            Cue::Lock => &LOCK,
            Cue::LineClear => &LINE_CLEAR,
            Cue::Tetris => &TETRIS,
            Cue::LevelUp => &LEVEL_UP,
            Cue::GameOver => &GAME_OVER,
        }
    }

    /// Total length of the cue
    pub fn duration_ms(self) -> u32 {
        self.tones().iter().map(Tone::end_ms).max().unwrap_or(0)
    }
}

/// The cue for a game event, if it has one.
///
/// Gravity steps share the soft-drop click. A hard drop is followed by its
/// `Locked` event, so it sounds as thud then lock.
pub fn cue_for_event(event: &GameEvent) -> Option<Cue> {
    match event {
        GameEvent::Moved {
            direction: Direction::Down,
        } => Some(Cue::SoftDrop),
        GameEvent::Moved { .. } => Some(Cue::Move),
        GameEvent::Fell => Some(Cue::SoftDrop),
        GameEvent::Rotated => Some(Cue::Rotate),
        GameEvent::HardDropped { .. } => Some(Cue::HardDrop),
        GameEvent::Locked { .. } => Some(Cue::Lock),
        GameEvent::LinesCleared { .. } => Some(Cue::LineClear),
        GameEvent::Tetris { .. } => Some(Cue::Tetris),
        GameEvent::LevelUp { .. } => Some(Cue::LevelUp),
        GameEvent::GameOver { .. } => Some(Cue::GameOver),
        GameEvent::Started { .. } | GameEvent::Paused | GameEvent::Resumed => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_events_map_to_cues() {
        assert_eq!(
            cue_for_event(&GameEvent::Moved { direction: Direction::Left }),
            Some(Cue::Move)
        );
        assert_eq!(
            cue_for_event(&GameEvent::Moved { direction: Direction::Down }),
            Some(Cue::SoftDrop)
        );
        assert_eq!(cue_for_event(&GameEvent::Fell), Some(Cue::SoftDrop));
        assert_eq!(
            cue_for_event(&GameEvent::Locked { kind: PieceKind::T }),
            Some(Cue::Lock)
        );
        assert_eq!(
            cue_for_event(&GameEvent::Tetris { points: 1200 }),
            Some(Cue::Tetris)
        );
        assert_eq!(cue_for_event(&GameEvent::Paused), None);
        assert_eq!(cue_for_event(&GameEvent::Started { session: 1 }), None);
    }

    #[test]
    fn test_line_clear_chord_ends_together() {
        let ends: Vec<u32> = Cue::LineClear.tones().iter().map(Tone::end_ms).collect();
        assert_eq!(ends, vec![300, 300, 300]);
    }

    #[test]
    fn test_cue_durations() {
        assert_eq!(Cue::Move.duration_ms(), 50);
        assert_eq!(Cue::Tetris.duration_ms(), 450);
        assert_eq!(Cue::LevelUp.duration_ms(), 340);
        assert_eq!(Cue::GameOver.duration_ms(), 500);
    }

    #[test]
    fn test_sweep_and_fade_hit_their_targets() {
        let thud = Cue::HardDrop.tones()[0];
        assert!((thud.freq_at(0.0) - 100.0).abs() < 1e-3);
        assert!((thud.freq_at(100.0) - 50.0).abs() < 1e-3);
        assert!((thud.gain_at(0.0) - 0.3).abs() < 1e-6);
        assert!((thud.gain_at(100.0) - 0.01).abs() < 1e-4);

        let click = Cue::Move.tones()[0];
        assert_eq!(click.freq_at(40.0), 200.0);
        assert_eq!(click.gain_at(40.0), 0.1);
    }

    #[test]
    fn test_waveforms_stay_in_range() {
        for w in [Waveform::Square, Waveform::Triangle, Waveform::Sawtooth] {
            for i in 0..100 {
                let s = w.sample(i as f32 / 100.0);
                assert!((-1.0..=1.0).contains(&s), "{w:?} {s}");
            }
        }
    }
}
