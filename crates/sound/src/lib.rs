//! Fire-and-forget audio cues.
//!
//! Two short synthesised tones: a rising pair for a correct answer and a low
//! buzz for a wrong one. The player degrades to a no-op when no audio device
//! is available, and playback failures never reach the engine.

use std::time::Duration;

use rodio::source::{SineWave, Source};
use rodio::{OutputStream, OutputStreamHandle, Sink};

use tui_quiz_types::SoundCue;

const CUE_VOLUME: f32 = 0.2;

pub struct SoundPlayer {
    // Dropping the stream kills playback; it has to outlive the handle.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
}

impl SoundPlayer {
    /// Open the default audio device, falling back to a silent player when
    /// none is available.
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
            },
            Err(err) => {
                log::warn!("audio unavailable, cues disabled: {err}");
                Self::silent()
            }
        }
    }

    /// A player that never makes a sound.
    pub fn silent() -> Self {
        Self {
            _stream: None,
            handle: None,
        }
    }

    pub fn is_silent(&self) -> bool {
        self.handle.is_none()
    }

    /// Play a cue and return immediately.
    pub fn play(&self, cue: SoundCue) {
        let Some(handle) = &self.handle else {
            return;
        };
        let Ok(sink) = Sink::try_new(handle) else {
            return;
        };
        match cue {
            SoundCue::Correct => {
                sink.append(tone(880.0, 90));
                sink.append(tone(1318.5, 140));
            }
            SoundCue::Wrong => {
                sink.append(tone(220.0, 200));
            }
        }
        sink.detach();
    }
}

impl Default for SoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

fn tone(freq: f32, millis: u64) -> impl Source<Item = f32> {
    SineWave::new(freq)
        .take_duration(Duration::from_millis(millis))
        .amplify(CUE_VOLUME)
}
