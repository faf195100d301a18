use thiserror::Error;

/// Configuration errors, all detected before any engine resource is
/// allocated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid color '{0}': expected R,G,B with each channel in 0-255")]
    InvalidColor(String),

    #[error("invalid cell size '{0}': expected a positive integer")]
    InvalidCellSize(String),

    #[error("missing value for '{0}'")]
    MissingValue(String),

    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Launcher configuration: cell colors and the on-screen size of one cell.
/// Grid dimensions are derived from the display resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub alive_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub cell_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alive_color: [255, 255, 255],
            dead_color: [0, 0, 0],
            cell_size: 8,
        }
    }
}

impl Config {
    /// Parse command line arguments (without the program name). Accepts
    /// both `--flag value` and `--flag=value`.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) => (flag.to_owned(), Some(value.to_owned())),
                None => (arg, None),
            };
            match flag.as_str() {
                "--alive-color" => {
                    config.alive_color = parse_color(&take_value(&flag, inline, &mut args)?)?;
                }
                "--dead-color" => {
                    config.dead_color = parse_color(&take_value(&flag, inline, &mut args)?)?;
                }
                "--cell-size" => {
                    config.cell_size = parse_cell_size(&take_value(&flag, inline, &mut args)?)?;
                }
                _ => return Err(ConfigError::UnknownArgument(flag)),
            }
        }

        Ok(config)
    }

    /// Grid dimensions covering the display: floor(display / cell_size)
    /// per axis.
    pub fn grid_dimensions(&self, display_width: f32, display_height: f32) -> (usize, usize) {
        let cell = self.cell_size as usize;
        (
            display_width as usize / cell,
            display_height as usize / cell,
        )
    }
}

fn take_value(
    flag: &str,
    inline: Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<String, ConfigError> {
    inline
        .or_else(|| args.next())
        .ok_or_else(|| ConfigError::MissingValue(flag.to_owned()))
}

/// Parse "R,G,B" with each channel in 0-255
fn parse_color(value: &str) -> Result<[u8; 3], ConfigError> {
    let invalid = || ConfigError::InvalidColor(value.to_owned());
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part.trim().parse().map_err(|_| invalid())?;
    }
    Ok(rgb)
}

fn parse_cell_size(value: &str) -> Result<u32, ConfigError> {
    match value.parse() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidCellSize(value.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_defaults_are_white_on_black() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.alive_color, [255, 255, 255]);
        assert_eq!(config.dead_color, [0, 0, 0]);
        assert_eq!(config.cell_size, 8);
    }

    #[test]
    fn test_parses_both_argument_forms() {
        let config = parse(&[
            "--alive-color",
            "0,255,150",
            "--dead-color=30,30,30",
            "--cell-size=4",
        ])
        .unwrap();
        assert_eq!(config.alive_color, [0, 255, 150]);
        assert_eq!(config.dead_color, [30, 30, 30]);
        assert_eq!(config.cell_size, 4);
    }

    #[test]
    fn test_rejects_malformed_colors() {
        assert_eq!(
            parse(&["--alive-color", "1,2"]),
            Err(ConfigError::InvalidColor("1,2".into()))
        );
        assert_eq!(
            parse(&["--alive-color", "256,0,0"]),
            Err(ConfigError::InvalidColor("256,0,0".into()))
        );
        assert_eq!(
            parse(&["--dead-color", "a,b,c"]),
            Err(ConfigError::InvalidColor("a,b,c".into()))
        );
    }

    #[test]
    fn test_rejects_nonpositive_cell_size() {
        assert_eq!(
            parse(&["--cell-size", "0"]),
            Err(ConfigError::InvalidCellSize("0".into()))
        );
        assert_eq!(
            parse(&["--cell-size", "-3"]),
            Err(ConfigError::InvalidCellSize("-3".into()))
        );
        assert_eq!(
            parse(&["--cell-size", "big"]),
            Err(ConfigError::InvalidCellSize("big".into()))
        );
    }

    #[test]
    fn test_rejects_unknown_and_valueless_arguments() {
        assert_eq!(
            parse(&["--speed", "9"]),
            Err(ConfigError::UnknownArgument("--speed".into()))
        );
        assert_eq!(
            parse(&["--cell-size"]),
            Err(ConfigError::MissingValue("--cell-size".into()))
        );
    }

    #[test]
    fn test_grid_dimensions_floor_the_display_size() {
        let config = parse(&["--cell-size", "8"]).unwrap();
        assert_eq!(config.grid_dimensions(1920.0, 1080.0), (240, 135));
        assert_eq!(config.grid_dimensions(799.0, 599.0), (99, 74));
    }
}
