use circle_slider::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("invalid JSON on line {line}: {source}")]
    TraceLine { line: usize, source: serde_json::Error },
    #[error("could not write output: {0}")]
    Output(#[from] serde_json::Error),
    #[error("invalid viewport `{0}`; expected <width>x<height>")]
    InvalidViewport(String),
}
