use clap::Parser;
use satpos_lib::satellite_geographic_position;

/// Report the WGS84 geodetic position of a satellite at a UTC instant,
/// given its two-line element set.
#[derive(Debug, Parser)]
#[command(version)]
struct Opts {
    /// TLE line 1
    line1: String,

    /// TLE line 2
    line2: String,

    /// UTC instant, e.g. 2000-06-27T18:50:19.733568
    #[arg(long)]
    at: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let opts = Opts::parse();

    let position = satellite_geographic_position(&opts.line1, &opts.line2, &opts.at)?;
    println!("{position}");

    Ok(())
}
