use std::ffi::OsString;

use camino::Utf8PathBuf;

pub const DEFAULT_PORT: u16 = 8081;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable BLOGPATH must be set")]
    MissingBlogPath,
    #[error("BLOGPATH is not valid UTF-8: {0:?}")]
    NonUtf8Path(OsString),
    #[error("invalid port `{0}`")]
    InvalidPort(String),
    #[error("invalid BLOG_WATCH value `{0}`, expected `true` or `false`")]
    InvalidWatchFlag(String),
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    /// Directory the posts are read from.
    pub blog_path: Utf8PathBuf,
    pub port: u16,
    /// Refresh automatically when a post file changes.
    pub watch: bool,
}

impl Config {
    /// The port comes from the first argument, then `BLOG_PORT`, then
    /// [`DEFAULT_PORT`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(std::env::args().nth(1), |key| std::env::var_os(key))
    }

    fn from_parts(
        port_arg: Option<String>,
        var: impl Fn(&str) -> Option<OsString>,
    ) -> Result<Self, ConfigError> {
        let blog_path = var("BLOGPATH")
            .filter(|path| !path.is_empty())
            .ok_or(ConfigError::MissingBlogPath)?;
        let blog_path = Utf8PathBuf::from_path_buf(blog_path.into())
            .map_err(|path| ConfigError::NonUtf8Path(path.into_os_string()))?;

        let port = match port_arg.or_else(|| var("BLOG_PORT").and_then(|p| p.into_string().ok())) {
            Some(port) => port.parse().map_err(|_| ConfigError::InvalidPort(port))?,
            None => DEFAULT_PORT,
        };

        let watch = match var("BLOG_WATCH").map(|w| w.to_string_lossy().into_owned()) {
            Some(watch) => watch
                .parse()
                .map_err(|_| ConfigError::InvalidWatchFlag(watch))?,
            None => false,
        };

        Ok(Config {
            blog_path,
            port,
            watch,
        })
    }
}
