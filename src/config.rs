use serde::Deserialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use warren_geom::Color;
use warren_walls::WallParams;
use warren_walls::synth::{DEFAULT_WALL_COLOR, DEFAULT_WALL_HEIGHT};

#[derive(Clone, Debug, Default, Deserialize)]
pub struct WarrenConfig {
    #[serde(default)]
    pub walls: Walls,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Walls {
    #[serde(default = "default_wall_height")]
    pub wall_height: f32,
    /// Packed `0xRRGGBB`.
    #[serde(default = "default_wall_color")]
    pub wall_color: u32,
}
fn default_wall_height() -> f32 {
    DEFAULT_WALL_HEIGHT
}
fn default_wall_color() -> u32 {
    DEFAULT_WALL_COLOR
}
impl Default for Walls {
    fn default() -> Self {
        Self {
            wall_height: default_wall_height(),
            wall_color: default_wall_color(),
        }
    }
}

impl WarrenConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, Box<dyn Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn wall_params(&self) -> WallParams {
        WallParams {
            wall_height: self.walls.wall_height,
            wall_color: Color::from_hex(self.walls.wall_color),
        }
    }
}

pub fn load_config_from_path(path: &Path) -> Result<WarrenConfig, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    WarrenConfig::from_toml_str(&s)
}
