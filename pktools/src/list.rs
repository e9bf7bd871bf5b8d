use clap::Args;
use prettytable::{format, row, Table};

use crate::load::SaveArgs;

#[derive(Debug, Args)]
pub struct Opts {
    #[command(flatten)]
    pub save: SaveArgs,
}

pub fn render(opts: &Opts) -> anyhow::Result<String> {
    let result = opts.save.load()?.parse()?;
    let trainer = &result.trainer;

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.add_row(row!["STATUS", "POS", "SPECIES", "NICKNAME", "LV", "SHINY"]);
    for pkmn in &result.pokemon {
        let species = match &pkmn.forme {
            Some(forme) => format!("{} ({forme})", pkmn.species),
            None => pkmn.species.clone(),
        };
        table.add_row(row![
            pkmn.status,
            pkmn.position,
            species,
            pkmn.nickname,
            pkmn.level,
            if pkmn.shiny { "*" } else { "" },
        ]);
    }

    Ok(format!(
        "{} ({}) {} played, {} money\n{table}",
        trainer.name, trainer.id, trainer.time, trainer.money
    ))
}

pub fn run(opts: Opts) -> anyhow::Result<()> {
    print!("{}", render(&opts)?);
    Ok(())
}
