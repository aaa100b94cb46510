//! File-based degradation processing command.

use clap::Args;
use retroizer_config::Preset;
use retroizer_core::math::linear_to_db;
use retroizer_effects::Rack;
use retroizer_io::{WavSpec, read_wav_stereo, write_wav_stereo};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (always written as stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Preset file (TOML) providing the base control positions
    #[arg(short, long)]
    preset: Option<PathBuf>,

    /// Bit depth control, 0.0 (1 bit) to 1.0 (16 bits)
    #[arg(long, value_name = "0..1")]
    bit_depth: Option<f32>,

    /// Sample rate reduction control, 0.0 (off) to 1.0 (divide by 32)
    #[arg(long, value_name = "0..1")]
    downsample: Option<f32>,

    /// First radio stage blend, 0.0 to 1.0
    #[arg(long, value_name = "0..1")]
    radio_mix1: Option<f32>,

    /// Second radio stage blend, 0.0 to 1.0
    #[arg(long, value_name = "0..1")]
    radio_mix2: Option<f32>,

    /// Save the effective control positions to a preset file
    #[arg(long, value_name = "FILE")]
    save_preset: Option<PathBuf>,

    /// Processing block size
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    output_bits: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)?;
    let sample_rate = spec.sample_rate as f32;

    println!(
        "  {} frames, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f32 / sample_rate
    );

    // Preset first, then per-control flag overrides.
    let mut preset = match &args.preset {
        Some(path) => Preset::load(path)?,
        None => Preset::default(),
    };
    if let Some(v) = args.bit_depth {
        preset.bit_depth = v.clamp(0.0, 1.0);
    }
    if let Some(v) = args.downsample {
        preset.sample_rate_reduction = v.clamp(0.0, 1.0);
    }
    if let Some(v) = args.radio_mix1 {
        preset.radio_mix1 = v.clamp(0.0, 1.0);
    }
    if let Some(v) = args.radio_mix2 {
        preset.radio_mix2 = v.clamp(0.0, 1.0);
    }
    debug!(?preset, "effective controls");

    let input_peak = peak(&samples.left).max(peak(&samples.right));

    let mut rack = Rack::new(sample_rate);
    rack.prepare(sample_rate);
    rack.apply_controls(&preset.to_controls());

    println!("Processing...");
    anyhow::ensure!(args.block_size > 0, "block size must be at least 1");
    let frames = samples.len();
    for start in (0..frames).step_by(args.block_size) {
        let end = (start + args.block_size).min(frames);
        rack.process_block(&mut samples.left[start..end], &mut samples.right[start..end]);
    }

    let output_peak = peak(&samples.left).max(peak(&samples.right));
    println!(
        "  Peak: in {:.1} dB, out {:.1} dB",
        linear_to_db(input_peak),
        linear_to_db(output_peak)
    );

    let out_spec = WavSpec {
        channels: 2,
        sample_rate: spec.sample_rate,
        bits_per_sample: args.output_bits,
    };

    println!("Writing {}...", args.output.display());
    write_wav_stereo(&args.output, &samples, out_spec)?;

    if let Some(path) = &args.save_preset {
        preset.save(path)?;
        println!("Saved preset to {}", path.display());
    }

    println!("Done!");
    Ok(())
}

fn peak(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
}
