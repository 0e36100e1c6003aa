use std::io;

use clap::Parser;

use ms_calc::{menu, print_banner};

#[derive(Parser, Debug)]
#[command(name = "mstat", version, about = "Mathstats calculator")]
struct Cli {
    /// Suppress the startup banner
    #[clap(short, long, default_value = "false")]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    if !cli.quiet {
        print_banner(&mut out)?;
    }
    menu::run(&mut input, &mut out)?;
    Ok(())
}
