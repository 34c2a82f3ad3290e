use clap::Parser;

/// Palmview — preview web pages in a simulated mobile device.
#[derive(Parser, Debug)]
#[command(name = "palmview", version, about)]
pub struct Args {
    /// URL to load once the shell is ready.
    #[arg(short = 'u', long)]
    pub url: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. "palmview=debug").
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
