use clap::Parser;
use cli::Cli;
use color_eyre::eyre::Result;
use tracing::info;
use wordsnake::{Dictionary, GameId, Player, Simulation};

mod cli;
mod errors;

fn main() -> Result<()> {
    errors::install_hooks()?;

    let cli = Cli::parse();
    let dictionary = match cli.dictionary {
        Some(path) => Dictionary::load(&path)?,
        None => Dictionary::embedded(),
    };
    info!(words = dictionary.len(), "dictionary ready");

    let players = [Player::from("alice"), Player::from("bob")];
    let mut simulation = Simulation::new(GameId(1), players, &dictionary)?;
    for m in simulation.run() {
        println!("{:>3}. {:<8} {}", m.turn, m.player, m.word);
    }

    if let Some(player) = simulation.stuck_player() {
        println!("{player} has no word left to play.");
    }
    println!("{}", simulation.state().statistics());
    Ok(())
}
