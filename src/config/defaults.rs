//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default number of geodesic path segments
pub const DEFAULT_PATH_POINTS: usize = crate::coord::geodesic::DEFAULT_PATH_POINTS;

/// Default output format
pub const DEFAULT_FORMAT: &str = "text";

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 8787;

/// Default URL provider
pub const DEFAULT_URL_PROVIDER: &str = "google";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "antipodal";
