use std::env;

pub const DEFAULT_STEPS: u32 = 8;

#[derive(Debug, Clone)]
pub struct Config {
    pub steps: u32,
    pub output_dir: String,
    pub palette: Vec<(&'static str, &'static str)>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            steps: env::var("SHADES_STEPS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_STEPS),
            output_dir: env::var("SHADES_OUTPUT_DIR")
                .unwrap_or_else(|_| "shades".to_string()),
            palette: vec![
                ("SUCCESS", "#1e9e3c"),
                ("INFO", "#28b6d2"),
                ("WARN", "#9e5c1e"),
                ("DANGER", "#9e231e"),
                ("PRIMARY", "#2339c2"),
                ("SECONDARY", "#ffcd35"),
                ("GREY", "#4d5b70"),
            ],
        }
    }
}
