use std::path::PathBuf;

use clap::Parser;
use pksav::{gen3::is_gen3_length, ParserOptions, SelectedGame};

#[derive(Parser)]
struct Cli {
    #[arg(short, long)]
    sav: PathBuf,
    #[arg(short, long)]
    game: Option<SelectedGame>,
    /// Only print records with this status, e.g. "Team"
    #[arg(short, long)]
    location: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Cli::parse();

    let save_data = std::fs::read(&args.sav)?;
    let options = ParserOptions {
        selected_game: args.game,
        ..Default::default()
    };
    let gba = match args.game {
        Some(game) => game.is_gba(),
        None => is_gen3_length(save_data.len()),
    };
    let result = if gba {
        pksav::parse_gen3_save(&save_data, &options)?
    } else {
        pksav::parse_gen4_save(&save_data, &options)
    };

    println!("Trainer Info: {:?}", result.trainer);
    for pkmn in result
        .pokemon
        .iter()
        .filter(|pkmn| args.location.as_ref().map_or(true, |status| &pkmn.status == status))
    {
        println!("{} {}: {} Lv. {}", pkmn.status, pkmn.position, pkmn.species, pkmn.level);
    }

    Ok(())
}
