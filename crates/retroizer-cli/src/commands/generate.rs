//! Test signal generation command.

use clap::{Args, ValueEnum};
use retroizer_io::{StereoSamples, WavSpec, write_wav_stereo};
use std::path::PathBuf;

#[derive(Args)]
pub struct GenerateArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Signal shape
    #[arg(short, long, value_enum, default_value_t = Signal::Sine)]
    signal: Signal,

    /// Frequency in Hz (sine only)
    #[arg(short, long, default_value = "440.0")]
    frequency: f32,

    /// Duration in seconds
    #[arg(short, long, default_value = "2.0")]
    duration: f32,

    /// Peak amplitude, 0.0 to 1.0
    #[arg(short, long, default_value = "0.8")]
    amplitude: f32,

    /// Sample rate in Hz
    #[arg(long, default_value = "44100")]
    sample_rate: u32,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Signal {
    /// Pure sine tone
    Sine,
    /// Rising sawtooth ramp at the given frequency
    Ramp,
    /// White noise (deterministic LCG)
    Noise,
    /// Single full-scale impulse followed by silence
    Impulse,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.duration > 0.0, "duration must be positive");
    anyhow::ensure!(args.sample_rate > 0, "sample rate must be positive");

    let num_frames = (args.duration * args.sample_rate as f32) as usize;
    let amplitude = args.amplitude.clamp(0.0, 1.0);

    let mono: Vec<f32> = match args.signal {
        Signal::Sine => {
            let step = 2.0 * std::f32::consts::PI * args.frequency / args.sample_rate as f32;
            (0..num_frames)
                .map(|i| (i as f32 * step).sin() * amplitude)
                .collect()
        }
        Signal::Ramp => {
            let period = (args.sample_rate as f32 / args.frequency).max(1.0);
            (0..num_frames)
                .map(|i| {
                    let phase = (i as f32 / period).fract();
                    (phase * 2.0 - 1.0) * amplitude
                })
                .collect()
        }
        Signal::Noise => {
            let mut state: u32 = 0x1234_5678;
            (0..num_frames)
                .map(|_| {
                    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                    let unit = f32::from((state >> 16) as u16) / 32_768.0 - 1.0;
                    unit * amplitude
                })
                .collect()
        }
        Signal::Impulse => {
            let mut samples = vec![0.0; num_frames];
            if let Some(first) = samples.first_mut() {
                *first = amplitude;
            }
            samples
        }
    };

    let spec = WavSpec {
        channels: 2,
        sample_rate: args.sample_rate,
        bits_per_sample: 32,
    };

    println!(
        "Generating {:?} signal: {} frames at {} Hz",
        args.signal, num_frames, args.sample_rate
    );
    write_wav_stereo(&args.output, &StereoSamples::from_mono(mono), spec)?;
    println!("Wrote {}", args.output.display());

    Ok(())
}
