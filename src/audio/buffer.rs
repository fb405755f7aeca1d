//! Decoded audio buffer shared between capture, decoding and encoding.
//!
//! Samples are stored channel-major as 32-bit floats in the nominal range
//! [-1.0, 1.0]. Every channel holds exactly one sample per frame; the
//! constructors uphold that invariant so downstream code never has to check.

/// Uncompressed multi-channel audio held fully in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// One sample vector per channel, all the same length
    pub channels: Vec<Vec<f32>>,
}

impl AudioBuffer {
    /// Creates a buffer from channel-major sample data.
    ///
    /// All channels must have the same length. Frames beyond the shortest
    /// channel would break interleaving, so unequal lengths are truncated to
    /// the shortest one.
    pub fn new(sample_rate: u32, mut channels: Vec<Vec<f32>>) -> Self {
        if let Some(min_len) = channels.iter().map(|c| c.len()).min() {
            for channel in &mut channels {
                channel.truncate(min_len);
            }
        }
        Self {
            sample_rate,
            channels,
        }
    }

    /// Creates a buffer from interleaved samples, as delivered by audio
    /// capture callbacks and raw PCM decoder output.
    ///
    /// A trailing partial frame is dropped.
    pub fn from_interleaved(sample_rate: u32, channel_count: usize, samples: &[f32]) -> Self {
        if channel_count == 0 {
            return Self {
                sample_rate,
                channels: Vec::new(),
            };
        }

        let frame_count = samples.len() / channel_count;
        let mut channels = vec![Vec::with_capacity(frame_count); channel_count];

        for frame in samples.chunks_exact(channel_count) {
            for (channel, &sample) in channels.iter_mut().zip(frame) {
                channel.push(sample);
            }
        }

        Self {
            sample_rate,
            channels,
        }
    }

    /// Number of channels.
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, |c| c.len())
    }

    /// Duration of the audio in seconds.
    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f32 / self.sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_interleaved_stereo() {
        let samples = [0.1, -0.1, 0.2, -0.2, 0.3, -0.3];
        let buffer = AudioBuffer::from_interleaved(48000, 2, &samples);

        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.frame_count(), 3);
        assert_eq!(buffer.channels[0], vec![0.1, 0.2, 0.3]);
        assert_eq!(buffer.channels[1], vec![-0.1, -0.2, -0.3]);
    }

    #[test]
    fn test_from_interleaved_drops_partial_frame() {
        // 5 samples across 2 channels: last sample has no partner
        let samples = [0.0, 0.0, 0.0, 0.0, 0.5];
        let buffer = AudioBuffer::from_interleaved(44100, 2, &samples);

        assert_eq!(buffer.frame_count(), 2);
    }

    #[test]
    fn test_from_interleaved_zero_channels() {
        let buffer = AudioBuffer::from_interleaved(44100, 0, &[0.1, 0.2]);
        assert_eq!(buffer.channel_count(), 0);
        assert_eq!(buffer.frame_count(), 0);
    }

    #[test]
    fn test_new_truncates_unequal_channels() {
        let buffer = AudioBuffer::new(16000, vec![vec![0.0; 10], vec![0.0; 7]]);
        assert_eq!(buffer.frame_count(), 7);
        assert_eq!(buffer.channels[0].len(), 7);
    }

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::from_interleaved(16000, 1, &[0.0; 8000]);
        assert!((buffer.duration_secs() - 0.5).abs() < f32::EPSILON);
    }
}
