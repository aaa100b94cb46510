//! Parameter listing command.

use clap::Args;
use retroizer_core::ParameterInfo;
use retroizer_effects::{BitCrusher, Rack, RadioEffect};

#[derive(Args)]
pub struct ParamsArgs {
    /// Also list each effect's native parameters
    #[arg(long)]
    native: bool,
}

pub fn run(args: ParamsArgs) -> anyhow::Result<()> {
    let rack = Rack::new(44100.0);

    println!("Rack Parameters (normalized 0.0 to 1.0):");
    print_params(&rack);

    if args.native {
        let crusher = BitCrusher::new();
        println!("\nBitCrusher:");
        print_params(&crusher);

        let radio = RadioEffect::new(44100.0);
        println!("\nRadioEffect:");
        print_params(&radio);
    }

    Ok(())
}

fn print_params<P: ParameterInfo>(effect: &P) {
    println!(
        "  {:<5} {:<24} {:<12} {:>8} {:>8} {:>8}",
        "Index", "Name", "ID", "Min", "Max", "Default"
    );
    for i in 0..effect.param_count() {
        if let Some(desc) = effect.param_info(i) {
            println!(
                "  {:<5} {:<24} {:<12} {:>8} {:>8} {:>8}",
                i,
                desc.name,
                desc.string_id,
                format!("{}{}", desc.min, desc.unit.suffix()),
                format!("{}{}", desc.max, desc.unit.suffix()),
                format!("{}{}", desc.default, desc.unit.suffix()),
            );
        }
    }
}
