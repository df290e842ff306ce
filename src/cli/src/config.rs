use std::{fs, path::Path};

use color_eyre::eyre::{Result, WrapErr, eyre};
use cube_convert::{Color, StickerCube, geometry::FACE_SIZE};
use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

/// User configuration, read from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Paint sticker nets with terminal colors.
    pub color: bool,
    pub letters: Letters,
}

/// The letter printed for the color of each face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Letters {
    pub up: char,
    pub down: char,
    pub front: char,
    pub back: char,
    pub right: char,
    pub left: char,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            color: true,
            letters: Letters::default(),
        }
    }
}

impl Default for Letters {
    fn default() -> Self {
        Letters {
            up: Color::White.letter(),
            down: Color::Yellow.letter(),
            front: Color::Green.letter(),
            back: Color::Blue.letter(),
            right: Color::Red.letter(),
            left: Color::Orange.letter(),
        }
    }
}

impl Letters {
    #[must_use]
    pub fn get(&self, color: Color) -> char {
        match color {
            Color::White => self.up,
            Color::Yellow => self.down,
            Color::Green => self.front,
            Color::Blue => self.back,
            Color::Red => self.right,
            Color::Orange => self.left,
        }
    }

    /// Sticker notation using these letters. It parses back to the same cube
    /// as long as the letters are distinct.
    #[must_use]
    pub fn notation(&self, stickers: &StickerCube) -> String {
        stickers
            .0
            .chunks_exact(FACE_SIZE)
            .map(|face| face.iter().map(|&color| self.get(color)).collect::<String>())
            .join(" ")
    }
}

impl Config {
    /// Read the configuration at `path`, or from the user's configuration
    /// directory when no path is given. Missing defaults are filled in.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => match dirs::config_dir().map(|dir| dir.join("cube-convert").join("config.toml")) {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No configuration file found, using defaults");
                    return Ok(Config::default());
                }
            },
        };

        debug!("Reading configuration from {}", path.display());
        let text = fs::read_to_string(&path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        let config = Config::parse(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))?;
        debug!("Loaded {config:?}");
        Ok(config)
    }

    fn parse(text: &str) -> Result<Config> {
        let config: Config = toml::from_str(text)?;

        let letters = Color::ALL.map(|color| config.letters.get(color));
        if let Some(duplicate) = letters.iter().duplicates().next() {
            return Err(eyre!("The letter {duplicate:?} is used for more than one face"));
        }
        if let Some(space) = letters.iter().find(|c| c.is_whitespace()) {
            return Err(eyre!("Whitespace {space:?} cannot be used as a face letter"));
        }

        Ok(config)
    }
}
