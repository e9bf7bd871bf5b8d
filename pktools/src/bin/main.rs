use clap::{Parser, Subcommand};
use pktools::{blocks, inspect, list};

#[derive(Parser)]
#[command(about = "Read trainer and Pokemon data out of GBA and DS saves")]
struct Opts {
    #[command(subcommand)]
    tool: ToolOpts,
}

#[derive(Subcommand)]
enum ToolOpts {
    /// Print the whole save as JSON
    Inspect(inspect::Opts),
    /// Tabulate party and boxed Pokemon
    List(list::Opts),
    /// Show which save blocks validate
    Blocks(blocks::Opts),
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let opts = Opts::parse();
    match opts.tool {
        ToolOpts::Inspect(opts) => inspect::run(opts),
        ToolOpts::List(opts) => list::run(opts),
        ToolOpts::Blocks(opts) => blocks::run(opts),
    }
}
