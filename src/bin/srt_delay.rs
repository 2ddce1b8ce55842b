use clap::Parser;
use srtshift::{delay_timestamps, Delay};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "srt_delay")]
#[command(about = "Move every timestamp in an SRT file back by a fixed delay")]
#[command(version)]
struct Cli {
    /// Subtitle file to read
    #[arg(default_value = "input.srt")]
    input: PathBuf,

    /// Where to write the adjusted subtitles (overwritten if present)
    #[arg(default_value = "output_adjusted.srt")]
    output: PathBuf,

    /// Seconds to subtract from every timestamp; negative values move subtitles later
    #[arg(short, long, default_value = "12.80", allow_hyphen_values = true)]
    delay: Delay,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match delay_timestamps(&cli.input, &cli.output, cli.delay) {
        Ok(_) => {
            println!(
                "Successfully adjusted subtitles backward by {} seconds",
                cli.delay
            );
            println!("Output written to: {}", cli.output.display());
        }
        Err(e) => println!("Error: {}", e),
    }
}
