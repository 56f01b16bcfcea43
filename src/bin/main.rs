use airfoil_resample::airfoil::generate::Naca4Digit;
use airfoil_resample::{process, ProcessParams, Profile, Spacing};
use std::error::Error;
use std::fs;
use tracing::info;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Usage: airfoil-resample [profile.dat] [params.json]
///
/// Prints the resampled loop as JSON. With no arguments a generated NACA 0012 is used.
fn main() -> Result<(), Box<dyn Error>> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let profile = match args.first() {
        Some(path) => Profile::parse(&fs::read_to_string(path)?)?,
        None => {
            let naca = Naca4Digit::new(0.12, 0.0, 0.0).closed();
            Profile::parse(&naca.to_selig("NACA 0012", 60, Spacing::Quadratic))?
        }
    };

    let params = match args.get(1) {
        Some(path) => ProcessParams::from_json(&fs::read_to_string(path)?)?,
        None => ProcessParams::default(),
    };

    info!(profile = %profile, ?params, "Processing");
    let result = process(&profile, &params)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
