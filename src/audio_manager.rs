use std::io::{BufReader, Cursor};
use std::sync::Arc;
use std::time::Duration;
use std::{fs, io};

use log::{debug, warn};
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

fn load_bytes_any(paths: &[&str]) -> Option<Arc<Vec<u8>>> {
    for p in paths {
        match fs::read(p) {
            Ok(b) => {
                debug!("loaded sound {p}");
                return Some(Arc::new(b));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("could not read {p}: {e}"),
        }
    }
    None
}

/// Generated fallback when no sound file is present.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub millis: u64,
    pub volume: f32,
}

pub const ROLL_TONE: Tone = Tone { freq: 330.0, millis: 90, volume: 0.20 };
pub const BUMP_TONE: Tone = Tone { freq: 110.0, millis: 70, volume: 0.25 };
pub const GOAL_TONE: Tone = Tone { freq: 880.0, millis: 450, volume: 0.30 };

/// Sound for one game event: a file if one was found, else a tone.
struct Sfx {
    data: Option<Arc<Vec<u8>>>,
    tone: Tone,
}

impl Sfx {
    fn new(paths: &[&str], tone: Tone) -> Self {
        Self { data: load_bytes_any(paths), tone }
    }
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sfx_sink: Sink,
    roll: Sfx,
    bump: Sfx,
    goal: Sfx,
}

impl AudioManager {
    /// `None` when there is no usable output device.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = match OutputStream::try_default() {
            Ok(s) => s,
            Err(e) => {
                warn!("no audio output: {e}");
                return None;
            }
        };
        let sfx_sink = Sink::try_new(&handle).ok()?;
        Some(Self {
            _stream,
            handle,
            sfx_sink,
            roll: Sfx::new(&["assets/sfx_roll.wav", "assets/sounds/roll.wav"], ROLL_TONE),
            bump: Sfx::new(&["assets/sfx_bump.wav", "assets/sounds/bump.wav"], BUMP_TONE),
            goal: Sfx::new(
                &["assets/sfx_goal.wav", "assets/sounds/goal.wav", "assets/sounds/goal.ogg"],
                GOAL_TONE,
            ),
        })
    }

    pub fn play_roll(&self) {
        self.play(&self.roll, &self.sfx_sink);
    }

    pub fn play_bump(&self) {
        self.play(&self.bump, &self.sfx_sink);
    }

    /// The chime gets its own sink so it is not queued behind a roll.
    pub fn play_goal(&self) {
        if let Ok(sink) = Sink::try_new(&self.handle) {
            self.play(&self.goal, &sink);
            sink.detach();
        }
    }

    fn play(&self, sfx: &Sfx, sink: &Sink) {
        if let Some(d) = sfx.data.clone() {
            match Decoder::new(BufReader::new(Cursor::new(d.as_ref().clone()))) {
                Ok(dec) => {
                    sink.append(dec);
                    return;
                }
                Err(e) => debug!("undecodable sound, using tone: {e}"),
            }
        }
        let t = sfx.tone;
        sink.append(
            SineWave::new(t.freq)
                .take_duration(Duration::from_millis(t.millis))
                .amplify(t.volume),
        );
    }
}
