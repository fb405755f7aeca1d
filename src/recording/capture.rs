//! Audio capture module.
//!
//! Handles input device management and PCM sample capture. Audio is captured
//! from the configured input device at its native sample rate and channel
//! layout, stored as interleaved f32 samples, and handed to the WAV encoder
//! as an [`AudioBuffer`] when recording stops.

use crate::audio::AudioBuffer;
use anyhow::{anyhow, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};

#[cfg(target_os = "linux")]
use std::fs::OpenOptions;
#[cfg(target_os = "linux")]
use std::os::unix::io::AsRawFd;

/// Records audio from a specified or default input device.
///
/// Features:
/// - Captures from a specified input device or system default at its native
///   sample rate and channel count
/// - Normalizes integer device formats to f32 in [-1.0, 1.0]
pub struct AudioRecorder {
    /// Actual recording sample rate from device
    sample_rate: u32,
    /// Recorded audio samples (interleaved f32)
    samples: Arc<Mutex<Vec<f32>>>,
    /// Active audio input stream (kept alive during recording)
    stream: Option<cpal::Stream>,
    /// Number of channels in the device's native format
    device_channels: usize,
    /// Device name or "default" to use the system default device
    device_name: String,
}

impl AudioRecorder {
    /// Creates a new audio recorder with requested sample rate and device.
    ///
    /// Note: The actual recording sample rate may differ based on device
    /// capabilities. Call `sample_rate()` after `start_recording()` to get
    /// the actual rate.
    pub fn new(requested_sample_rate: u32, device_name: String) -> Self {
        Self {
            sample_rate: requested_sample_rate,
            samples: Arc::new(Mutex::new(Vec::new())),
            stream: None,
            device_channels: 1,
            device_name,
        }
    }

    /// Starts recording from the configured input device.
    ///
    /// # Errors
    /// - If the specified device is not available
    /// - If device configuration fails
    /// - If audio stream creation fails
    pub fn start_recording(&mut self) -> Result<()> {
        // Get device while suppressing ALSA library warnings
        let device = suppress_alsa_warnings(|| {
            let host = cpal::default_host();

            if self.device_name == "default" {
                host.default_input_device()
                    .ok_or_else(|| anyhow!("No audio input device available"))
            } else {
                find_device_by_name(&host, &self.device_name)
            }
        })?;

        let device_name = device
            .name()
            .unwrap_or_else(|_| "Unknown device".to_string());
        tracing::info!("Recording device: {}", device_name);

        let device_config = device.default_input_config()?;
        let device_sample_rate = device_config.sample_rate().0;
        let num_channels = device_config.channels() as usize;

        if device_sample_rate != self.sample_rate {
            tracing::warn!(
                "Requested sample rate {}Hz but device uses {}Hz. Recording at device rate.",
                self.sample_rate,
                device_sample_rate
            );
        }

        tracing::debug!(
            "Device configuration: {}Hz, {} channels, {:?} samples",
            device_sample_rate,
            num_channels,
            device_config.sample_format()
        );

        // Update to actual device parameters
        self.sample_rate = device_sample_rate;
        self.device_channels = num_channels;

        let samples_arc = Arc::clone(&self.samples);

        let err_fn = |err| {
            tracing::error!("Audio stream error: {}", err);
        };

        let stream = match device_config.sample_format() {
            cpal::SampleFormat::F32 => device.build_input_stream(
                &device_config.into(),
                move |data: &[f32], _: &cpal::InputCallbackInfo| {
                    samples_arc.lock().unwrap().extend_from_slice(data);
                },
                err_fn,
                None,
            )?,
            cpal::SampleFormat::I16 => device.build_input_stream(
                &device_config.into(),
                move |data: &[i16], _: &cpal::InputCallbackInfo| {
                    let mut samples = samples_arc.lock().unwrap();
                    samples.extend(data.iter().map(|&s| s as f32 / 32768.0));
                },
                err_fn,
                None,
            )?,
            cpal::SampleFormat::U16 => device.build_input_stream(
                &device_config.into(),
                move |data: &[u16], _: &cpal::InputCallbackInfo| {
                    let mut samples = samples_arc.lock().unwrap();
                    samples.extend(data.iter().map(|&s| (s as f32 - 32768.0) / 32768.0));
                },
                err_fn,
                None,
            )?,
            other => {
                return Err(anyhow!("Unsupported device sample format: {other:?}"));
            }
        };

        stream.play()?;
        self.stream = Some(stream);

        tracing::debug!("Audio stream started");
        Ok(())
    }

    /// Stops recording and returns the captured audio as a buffer ready for
    /// WAV encoding.
    ///
    /// Returns a buffer with zero frames if nothing was captured; the encoder
    /// handles that case by producing a header-only file.
    pub fn stop_recording(&mut self) -> AudioBuffer {
        // Drop the stream to stop capture
        self.stream = None;

        let samples = std::mem::take(&mut *self.samples.lock().unwrap());
        let buffer = AudioBuffer::from_interleaved(self.sample_rate, self.device_channels, &samples);

        tracing::info!(
            "Recording stopped: {:.2}s ({} frames at {}Hz, {} channels)",
            buffer.duration_secs(),
            buffer.frame_count(),
            buffer.sample_rate,
            buffer.channel_count()
        );

        buffer
    }

    /// Returns the actual sample rate of the recording.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// Finds an audio input device by name or numeric index.
///
/// # Arguments
/// * `host` - The cpal audio host
/// * `device_spec` - Either a device name or a numeric index (0, 1, 2, etc.)
///
/// # Errors
/// - If no device with the specified name/index is found
fn find_device_by_name(host: &cpal::Host, device_spec: &str) -> Result<cpal::Device> {
    // Try to parse as a numeric index first
    if let Ok(index) = device_spec.parse::<usize>() {
        let devices: Vec<_> = host
            .input_devices()
            .map_err(|e| anyhow!("Failed to enumerate devices: {e}"))?
            .collect();

        if index < devices.len() {
            return Ok(devices.into_iter().nth(index).unwrap());
        } else {
            return Err(anyhow!(
                "Device index {} is out of range (0-{})",
                index,
                devices.len().saturating_sub(1)
            ));
        }
    }

    // Try to find by name
    let devices = host
        .input_devices()
        .map_err(|e| anyhow!("Failed to enumerate devices: {e}"))?;

    for device in devices {
        if let Ok(name) = device.name() {
            if name == device_spec {
                return Ok(device);
            }
        }
    }

    Err(anyhow!(
        "Audio input device '{device_spec}' not found. Use 'mediascribe list-devices' to see available devices."
    ))
}

/// Temporarily redirects stderr to /dev/null to suppress ALSA library warnings on Linux.
/// On non-Linux platforms, this is a no-op since ALSA doesn't exist.
#[cfg(target_os = "linux")]
fn suppress_alsa_warnings<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let dev_null = OpenOptions::new()
        .write(true)
        .open("/dev/null")
        .map_err(|e| anyhow!("Failed to open /dev/null: {e}"))?;

    let dev_null_fd = dev_null.as_raw_fd();

    // Save the current stderr file descriptor
    let old_stderr = unsafe { libc::dup(libc::STDERR_FILENO) };
    if old_stderr == -1 {
        return Err(anyhow!("Failed to duplicate stderr"));
    }

    let redirect_result = unsafe { libc::dup2(dev_null_fd, libc::STDERR_FILENO) };
    if redirect_result == -1 {
        unsafe { libc::close(old_stderr) };
        return Err(anyhow!("Failed to redirect stderr"));
    }

    let result = f();

    // Restore the original stderr
    unsafe {
        libc::dup2(old_stderr, libc::STDERR_FILENO);
        libc::close(old_stderr);
    }

    result
}

/// On non-Linux platforms, no stderr suppression is needed since ALSA doesn't exist.
#[cfg(not(target_os = "linux"))]
fn suppress_alsa_warnings<F, T>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    f()
}
