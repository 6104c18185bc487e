//! Synthesised sound effects.
//!
//! Tones are rendered to mono 16-bit PCM and wrapped in a RIFF/WAVE container
//! so tetra can decode them like any other sound file.

use std::f32::consts::PI;
use tetra::audio::Sound;

pub const SAMPLE_RATE: u32 = 44_100;

const BITS_PER_SAMPLE: u16 = 16;
const CHANNELS: u16 = 1;

/// Renders `seconds` of a sine wave at `frequency` Hz.
///
/// `volume` is the peak amplitude as a fraction of `i16::MAX`.
pub fn sine_wave(frequency: f32, seconds: f32, volume: f32) -> Vec<i16> {
    let count = (SAMPLE_RATE as f32 * seconds) as usize;
    let amplitude = i16::MAX as f32 * volume;

    (0..count)
        .map(|n| {
            let t = n as f32 / SAMPLE_RATE as f32;
            (amplitude * (frequency * t * 2.0 * PI).sin()) as i16
        })
        .collect()
}

pub fn encode_wav(samples: &[i16]) -> Vec<u8> {
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * block_align as u32;
    let data_size = samples.len() as u32 * block_align as u32;

    let mut wav = Vec::with_capacity(44 + data_size as usize);

    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_size).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    // PCM
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&CHANNELS.to_le_bytes());
    wav.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_size.to_le_bytes());
    for sample in samples {
        wav.extend_from_slice(&sample.to_le_bytes());
    }

    wav
}

pub fn tone(frequency: f32, seconds: f32, volume: f32) -> Sound {
    let wav = encode_wav(&sine_wave(frequency, seconds, volume));
    Sound::from_file_data(&wav)
}
