//! Writer for WAV files

#![allow(dead_code)]

use std::path::Path;

use hound::*;

use coupled_lfo_dsp::SAMPLE_RATE;

/// Writes sample data as WAV file in 32-bit float format, one channel per
/// slice in `channels`. Extra samples of longer channels are dropped.
pub fn write_channels(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    channels: &[&[f32]],
) -> std::io::Result<()> {
    let path = format!("out/{filename}");
    let path = Path::new(path.as_str());

    // Create parent directories to the path if they don't exist.
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let spec = WavSpec {
        channels: channels.len() as u16,
        sample_rate: SAMPLE_RATE as u32,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create(path, spec).map_err(to_io_error)?;
    let frames = channels.iter().map(|c| c.len()).min().unwrap_or(0);

    for frame in 0..frames {
        for channel in channels {
            writer.write_sample(channel[frame]).map_err(to_io_error)?;
        }
    }

    writer.finalize().map_err(to_io_error)
}

/// Writes mono sample data duplicated to both channels.
pub fn write(
    filename: impl AsRef<std::path::Path> + core::fmt::Display,
    samples: &[f32],
) -> std::io::Result<()> {
    write_channels(filename, &[samples, samples])
}

fn to_io_error(error: hound::Error) -> std::io::Error {
    match error {
        hound::Error::IoError(error) => error,
        other => std::io::Error::other(other.to_string()),
    }
}
