//! Canonical 16-bit PCM WAV encoder.
//!
//! Turns a decoded [`AudioBuffer`] into a self-contained RIFF/WAVE byte blob:
//! a single 16-byte `fmt ` subchunk followed by one `data` subchunk of
//! interleaved little-endian 16-bit samples. No extension or metadata chunks.
//! The output is what remote transcription APIs receive, so the byte layout
//! and the sample quantization are fixed contracts: encoding the same buffer
//! twice yields byte-identical output.

use super::buffer::AudioBuffer;

/// MIME type of the encoder output.
pub const WAV_MIME: &str = "audio/wav";

/// Size of the RIFF/WAVE header preceding the sample data.
const HEADER_LEN: usize = 44;

/// Bytes per encoded sample (16-bit PCM).
const BYTES_PER_SAMPLE: usize = 2;

/// An encoded WAV file held in memory.
///
/// Constructed once by [`encode_wav`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavBlob {
    data: Vec<u8>,
}

impl WavBlob {
    /// The encoded bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the blob, returning the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Total length in bytes, header included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True only for the degenerate case of an empty byte vector; a valid
    /// blob is always at least 44 bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// MIME type to tag the bytes with when uploading or saving.
    pub fn mime_type(&self) -> &'static str {
        WAV_MIME
    }
}

/// Little-endian byte writer over a pre-sized buffer.
struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    fn write_tag(&mut self, tag: &[u8; 4]) {
        self.buf.extend_from_slice(tag);
    }

    fn write_u16_le(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn write_u32_le(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn write_i16_le(&mut self, value: i16) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Encodes a decoded audio buffer as a 16-bit PCM WAV blob.
///
/// Pure and total: an empty buffer (zero channels or zero frames) produces a
/// valid 44-byte header-only file rather than an error. Output length is
/// exactly `44 + frame_count * channel_count * 2`.
pub fn encode_wav(buffer: &AudioBuffer) -> WavBlob {
    let channel_count = buffer.channel_count();
    let frame_count = buffer.frame_count();
    let data_len = frame_count * channel_count * BYTES_PER_SAMPLE;
    let total_len = HEADER_LEN + data_len;

    let mut writer = ByteWriter::with_capacity(total_len);

    // RIFF header
    writer.write_tag(b"RIFF");
    writer.write_u32_le((total_len - 8) as u32);
    writer.write_tag(b"WAVE");

    // fmt subchunk: linear PCM, 16 bits per sample
    writer.write_tag(b"fmt ");
    writer.write_u32_le(16);
    writer.write_u16_le(1);
    writer.write_u16_le(channel_count as u16);
    writer.write_u32_le(buffer.sample_rate);
    writer.write_u32_le(buffer.sample_rate * channel_count as u32 * BYTES_PER_SAMPLE as u32);
    writer.write_u16_le((channel_count * BYTES_PER_SAMPLE) as u16);
    writer.write_u16_le(16);

    // data subchunk: frames in order, channels interleaved within each frame
    writer.write_tag(b"data");
    writer.write_u32_le(data_len as u32);
    for frame in 0..frame_count {
        for channel in &buffer.channels {
            writer.write_i16_le(quantize(channel[frame]));
        }
    }

    WavBlob {
        data: writer.into_bytes(),
    }
}

/// Converts one float sample to a signed 16-bit PCM value.
///
/// Clamps to [-1.0, 1.0], then scales asymmetrically so that -1.0 maps to
/// -32768 and 1.0 to 32767, truncating toward zero. The sign test uses a
/// half-step bias (`0.5 + s < 0`), so samples in [-0.5, 0) take the 32767
/// scale. Unusual, but it is the established output contract; do not
/// "correct" it without re-verifying every stored recording.
fn quantize(sample: f32) -> i16 {
    let clamped = sample.clamp(-1.0, 1.0);
    let scaled = if 0.5 + clamped < 0.0 {
        clamped * 32768.0
    } else {
        clamped * 32767.0
    };
    scaled as i16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::buffer::AudioBuffer;
    use std::io::Cursor;

    fn read_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    fn read_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn read_i16(bytes: &[u8], offset: usize) -> i16 {
        i16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn test_empty_mono_buffer_is_header_only() {
        let buffer = AudioBuffer::new(44100, vec![Vec::new()]);
        let blob = encode_wav(&buffer);
        let bytes = blob.bytes();

        assert_eq!(blob.len(), 44);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(read_u32(bytes, 4), 36); // total - 8
        assert_eq!(&bytes[8..12], b"WAVE");
        assert_eq!(&bytes[12..16], b"fmt ");
        assert_eq!(read_u32(bytes, 16), 16);
        assert_eq!(read_u16(bytes, 20), 1); // linear PCM
        assert_eq!(read_u16(bytes, 22), 1); // mono
        assert_eq!(read_u32(bytes, 24), 44100);
        assert_eq!(read_u32(bytes, 28), 44100 * 2); // byte rate
        assert_eq!(read_u16(bytes, 32), 2); // block align
        assert_eq!(read_u16(bytes, 34), 16); // bits per sample
        assert_eq!(&bytes[36..40], b"data");
        assert_eq!(read_u32(bytes, 40), 0);
    }

    #[test]
    fn test_zero_channels_is_header_only() {
        let buffer = AudioBuffer::new(16000, Vec::new());
        let blob = encode_wav(&buffer);

        assert_eq!(blob.len(), 44);
        assert_eq!(read_u16(blob.bytes(), 22), 0);
        assert_eq!(read_u32(blob.bytes(), 40), 0);
    }

    #[test]
    fn test_total_length_formula() {
        let buffer = AudioBuffer::new(22050, vec![vec![0.25; 123], vec![-0.25; 123]]);
        let blob = encode_wav(&buffer);

        assert_eq!(blob.len(), 44 + 123 * 2 * 2);
        assert_eq!(read_u32(blob.bytes(), 4) as usize, blob.len() - 8);
        assert_eq!(read_u32(blob.bytes(), 40) as usize, blob.len() - 44);
    }

    #[test]
    fn test_silence_encodes_to_zero_bytes() {
        let buffer = AudioBuffer::new(8000, vec![vec![0.0; 64]]);
        let blob = encode_wav(&buffer);

        assert!(blob.bytes()[44..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_full_scale_boundaries() {
        let buffer = AudioBuffer::new(8000, vec![vec![1.0, -1.0]]);
        let bytes = encode_wav(&buffer).into_bytes();

        assert_eq!(read_i16(&bytes, 44), 32767);
        assert_eq!(read_i16(&bytes, 46), -32768);
    }

    #[test]
    fn test_out_of_range_samples_are_clamped() {
        let clamped = AudioBuffer::new(8000, vec![vec![2.0, -3.5]]);
        let reference = AudioBuffer::new(8000, vec![vec![1.0, -1.0]]);

        assert_eq!(encode_wav(&clamped), encode_wav(&reference));
    }

    #[test]
    fn test_asymmetric_scale_threshold() {
        // The sign test is biased by a half step: only samples below -0.5
        // take the 32768 scale.
        let buffer = AudioBuffer::new(8000, vec![vec![-0.5, -0.6, 0.5]]);
        let bytes = encode_wav(&buffer).into_bytes();

        // -0.5 * 32767 = -16383.5, truncated toward zero
        assert_eq!(read_i16(&bytes, 44), -16383);
        // -0.6 * 32768 = -19660.8, truncated toward zero
        assert_eq!(read_i16(&bytes, 46), -19660);
        // 0.5 * 32767 = 16383.5, truncated toward zero
        assert_eq!(read_i16(&bytes, 48), 16383);
    }

    #[test]
    fn test_stereo_interleaving() {
        let buffer = AudioBuffer::new(8000, vec![vec![0.0, 0.5], vec![-0.5, 0.0]]);
        let bytes = encode_wav(&buffer).into_bytes();

        // Frame 0: channel 0 then channel 1, then frame 1
        assert_eq!(read_i16(&bytes, 44), 0);
        assert_eq!(read_i16(&bytes, 46), -16383);
        assert_eq!(read_i16(&bytes, 48), 16383);
        assert_eq!(read_i16(&bytes, 50), 0);
    }

    #[test]
    fn test_deterministic_output() {
        let buffer = AudioBuffer::new(
            44100,
            vec![(0..500).map(|i| ((i as f32) * 0.013).sin()).collect()],
        );

        assert_eq!(encode_wav(&buffer), encode_wav(&buffer));
    }

    /// Byte-for-byte comparison against hound for a 1-second 440 Hz sine.
    /// hound writes the same canonical 44-byte header, so given identical
    /// i16 samples the whole file must match.
    #[test]
    fn test_matches_reference_encoder_for_sine() {
        let sample_rate = 44100u32;
        let sine: Vec<f32> = (0..sample_rate)
            .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin())
            .collect();

        let blob = encode_wav(&AudioBuffer::new(sample_rate, vec![sine.clone()]));

        let spec = hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        };
        let mut cursor = Cursor::new(Vec::new());
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for &s in &sine {
            let scaled = if 0.5 + s < 0.0 { s * 32768.0 } else { s * 32767.0 };
            writer.write_sample(scaled as i16).unwrap();
        }
        writer.finalize().unwrap();

        assert_eq!(blob.bytes(), cursor.into_inner().as_slice());
    }

    /// Round-trip through an independent reader: header fields and samples
    /// survive unchanged.
    #[test]
    fn test_readable_by_reference_decoder() {
        let buffer = AudioBuffer::new(16000, vec![vec![0.1, -0.7, 0.9], vec![-0.2, 0.3, -1.0]]);
        let blob = encode_wav(&buffer);

        let mut reader = hound::WavReader::new(Cursor::new(blob.into_bytes())).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 2);
        assert_eq!(spec.sample_rate, 16000);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let samples: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(samples.len(), 6);
        assert_eq!(samples[1], -6553); // -0.2 * 32767 truncated
        assert_eq!(samples[5], -32768);
    }
}
