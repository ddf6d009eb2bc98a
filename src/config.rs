use std::path::PathBuf;

pub const INPUT_PATH: &str = "assets/logo.png";
pub const OUTPUT_PATH: &str = "src/logo_data.rs";
/// alpha 严格小于该值视为透明
pub const ALPHA_THRESHOLD: u8 = 128;
pub const TRANSPARENT_IDENT: &str = "colors::TRANSPARENT";
pub const CONFIRMATION: &str = "src/logo_data.rs generated!";

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub alpha_threshold: u8,
}

impl Config {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            alpha_threshold: ALPHA_THRESHOLD,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(INPUT_PATH, OUTPUT_PATH)
    }
}
