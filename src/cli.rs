// cli.rs - Command-line interface configuration
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "beam-viewer")]
#[command(about = "Rotating T-beam viewer", long_about = None)]
pub struct Cli {
    /// Exit after rendering this many frames
    #[arg(long = "frames")]
    pub frames: Option<u64>,
}
