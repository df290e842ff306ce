#![warn(clippy::pedantic)]

mod config;
mod net;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cube_convert::{CubieCube, StickerCube, moves::format_moves, parse_moves};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};

use crate::{config::Config, net::Net};

/// Converts between the sticker and piece descriptions of a 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format. Defaults to
    /// `cube-convert/config.toml` in the user's configuration directory.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the pieces shown by a sticker description
    ToCubie {
        /// Six groups of nine stickers in U D F B R L face order, e.g.
        /// "WWWWWWWWW YYYYYYYYY GGGGGGGGG BBBBBBBBB RRRRRRRRR OOOOOOOOO"
        #[arg(required = true, num_args = 1..)]
        stickers: Vec<String>,
    },
    /// Turn a solved cube and print its stickers
    ToStickers {
        /// The move sequence to apply, e.g. "R U' F2"
        moves: Vec<String>,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::ToCubie { stickers } => {
            let stickers = stickers
                .join(" ")
                .parse::<StickerCube>()
                .wrap_err("Could not read the stickers")?;
            let cube = stickers
                .to_cubie_cube()
                .wrap_err("The stickers do not describe a cube")?;
            info!("Converted {stickers}");
            println!("{cube}");
        }
        Commands::ToStickers { moves } => {
            let moves = parse_moves(&moves.join(" ")).wrap_err("Could not read the moves")?;
            let mut cube = CubieCube::SOLVED;
            cube.apply_moves(&moves);
            info!("Applied {}", format_moves(&moves));

            let stickers = cube.to_sticker_cube();
            println!("{}", config.letters.notation(&stickers));
            println!();
            print!("{}", Net::new(&stickers, &config));
        }
    }

    Ok(())
}
