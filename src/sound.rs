//! Break chime playback.
//!
//! Plays a short synthesized ding when a breathing break starts. Playback
//! is strictly best-effort: a missing audio device or a failed decode must
//! never affect the focus/breathing state machine, so every failure here
//! is swallowed.

use std::io::Cursor;

use rodio::Source;

const SAMPLE_RATE: u32 = 44_100;
const DING_FREQUENCY_HZ: f32 = 880.0;
const DING_SECONDS: f32 = 0.6;

/// Best-effort chime player.
///
/// Holds the audio output stream for the lifetime of the app. If the
/// device cannot be opened the chime is silently disabled.
pub struct Chime {
    _stream: Option<rodio::OutputStream>,
    handle: Option<rodio::OutputStreamHandle>,
    volume: f32,
}

impl Chime {
    /// Open the default audio device.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        match rodio::OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
                volume: volume.clamp(0.0, 1.0),
            },
            Err(_) => Self::disabled(),
        }
    }

    /// A chime that never plays anything.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            _stream: None,
            handle: None,
            volume: 0.0,
        }
    }

    /// Whether an audio device was opened.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        self.handle.is_some()
    }

    /// Ring the chime.
    ///
    /// Decoding happens off-thread so the tick loop never blocks on audio.
    /// All failures are ignored.
    pub fn ring(&self) {
        let Some(handle) = self.handle.clone() else {
            return;
        };

        let wav = synthesize_ding(self.volume);
        std::thread::spawn(move || {
            if let Ok(source) = rodio::Decoder::new(Cursor::new(wav)) {
                let _ = handle.play_raw(source.convert_samples());
            }
        });
    }
}

/// Synthesize the ding as in-memory WAV data.
///
/// A sine at the base frequency plus a quieter octave above, shaped by an
/// exponential decay so it rings like a bell rather than beeping.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn synthesize_ding(volume: f32) -> Vec<u8> {
    let num_samples = (SAMPLE_RATE as f32 * DING_SECONDS) as usize;
    let mut samples = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f32 / SAMPLE_RATE as f32;
        let envelope = (-6.0 * t / DING_SECONDS).exp();
        let fundamental = (2.0 * std::f32::consts::PI * DING_FREQUENCY_HZ * t).sin();
        let octave = 0.4 * (2.0 * std::f32::consts::PI * DING_FREQUENCY_HZ * 2.0 * t).sin();
        let sample = (fundamental + octave) * envelope * volume * 0.7;
        samples.push((sample.clamp(-1.0, 1.0) * f32::from(i16::MAX)) as i16);
    }

    encode_wav(&samples, SAMPLE_RATE)
}

/// Encode mono 16-bit PCM samples as a WAV file in memory.
#[allow(clippy::cast_possible_truncation)]
fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let num_channels = 1u16;
    let bits_per_sample = 16u16;
    let byte_rate = sample_rate * u32::from(num_channels) * u32::from(bits_per_sample) / 8;
    let block_align = num_channels * bits_per_sample / 8;
    let data_size = (samples.len() * 2) as u32;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(file_size as usize + 8);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&file_size.to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&num_channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ding_is_valid_wav() {
        let wav = synthesize_ding(0.5);
        assert!(!wav.is_empty());
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
    }

    #[test]
    fn test_disabled_chime_is_silent() {
        let chime = Chime::disabled();
        assert!(!chime.is_available());
        // Must not panic without a device.
        chime.ring();
    }

    #[test]
    fn test_volume_is_clamped() {
        let wav = synthesize_ding(1.0);
        let loud = synthesize_ding(5.0);
        // Clamping happens per-sample, so an over-driven volume still
        // produces decodable data of the same size.
        assert_eq!(wav.len(), loud.len());
    }
}
