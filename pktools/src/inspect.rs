use clap::Args;

use crate::load::SaveArgs;

#[derive(Debug, Args)]
pub struct Opts {
    #[command(flatten)]
    pub save: SaveArgs,
}

/// The full parse result as pretty-printed JSON.
pub fn render(opts: &Opts) -> anyhow::Result<String> {
    let result = opts.save.load()?.parse()?;
    Ok(serde_json::to_string_pretty(&result)?)
}

pub fn run(opts: Opts) -> anyhow::Result<()> {
    println!("{}", render(&opts)?);
    Ok(())
}
