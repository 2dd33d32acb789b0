/// Launch cue: a short procedural blip via rodio.
///
/// The buffer is generated as an in-memory WAV at init time; playback is
/// fire-and-forget (non-blocking) via rodio's Sink.
///
/// Compile with `--no-default-features` or without the "sound" feature
/// to disable audio entirely (the stub SoundEngine does nothing).

#[cfg(feature = "sound")]
mod inner {
    use std::io::Cursor;
    use std::sync::Arc;

    use rodio::{OutputStream, OutputStreamHandle, Sink};

    const SAMPLE_RATE: u32 = 22050;

    pub struct SoundEngine {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        sfx_fire: Arc<Vec<u8>>,
    }

    impl SoundEngine {
        /// None when no audio device is available; the animation runs mute.
        pub fn new() -> Option<Self> {
            let (stream, handle) = OutputStream::try_default().ok()?;
            let sfx_fire = Arc::new(make_wav(&gen_fire()));
            Some(SoundEngine { _stream: stream, handle, sfx_fire })
        }

        /// One-shot cue at projectile launch.
        pub fn play_fire(&self) {
            if let Ok(sink) = Sink::try_new(&self.handle) {
                let cursor = Cursor::new(self.sfx_fire.as_ref().clone());
                if let Ok(src) = rodio::Decoder::new(cursor) {
                    sink.append(src);
                    sink.detach(); // fire-and-forget
                }
            }
        }
    }

    /// Shot: short descending whistle with a fast fade.
    fn gen_fire() -> Vec<f32> {
        let duration = 0.12;
        let n = (SAMPLE_RATE as f32 * duration) as usize;
        (0..n)
            .map(|i| {
                let t = i as f32 / n as f32;
                let freq = 900.0 - t * 500.0;
                let ti = i as f32 / SAMPLE_RATE as f32;
                let env = (1.0 - t).powf(0.6);
                (ti * freq * 2.0 * std::f32::consts::PI).sin() * env * 0.25
            })
            .collect()
    }

    /// Wrap f32 samples into a valid 16-bit mono WAV buffer.
    fn make_wav(samples: &[f32]) -> Vec<u8> {
        let num_channels: u16 = 1;
        let bits_per_sample: u16 = 16;
        let byte_rate = SAMPLE_RATE * (num_channels as u32) * (bits_per_sample as u32) / 8;
        let block_align = num_channels * bits_per_sample / 8;
        let data_size = samples.len() as u32 * 2;
        let file_size = 36 + data_size;

        let mut buf = Vec::with_capacity(44 + data_size as usize);

        // RIFF header
        buf.extend_from_slice(b"RIFF");
        buf.extend_from_slice(&file_size.to_le_bytes());
        buf.extend_from_slice(b"WAVE");

        // fmt chunk
        buf.extend_from_slice(b"fmt ");
        buf.extend_from_slice(&16u32.to_le_bytes());
        buf.extend_from_slice(&1u16.to_le_bytes()); // PCM
        buf.extend_from_slice(&num_channels.to_le_bytes());
        buf.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
        buf.extend_from_slice(&byte_rate.to_le_bytes());
        buf.extend_from_slice(&block_align.to_le_bytes());
        buf.extend_from_slice(&bits_per_sample.to_le_bytes());

        // data chunk
        buf.extend_from_slice(b"data");
        buf.extend_from_slice(&data_size.to_le_bytes());

        for &s in samples {
            let clamped = s.max(-1.0).min(1.0);
            let val = (clamped * 32767.0) as i16;
            buf.extend_from_slice(&val.to_le_bytes());
        }

        buf
    }
}

#[cfg(feature = "sound")]
pub use inner::SoundEngine;

#[cfg(not(feature = "sound"))]
pub struct SoundEngine;

#[cfg(not(feature = "sound"))]
impl SoundEngine {
    pub fn new() -> Option<Self> { Some(SoundEngine) }
    pub fn play_fire(&self) {}
}
