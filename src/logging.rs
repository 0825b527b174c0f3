//! Logger initialization for the binary.

use std::env;

use env_logger::Env;

/// Environment variable holding the log filter, in `env_logger` syntax.
pub const LOG_ENV: &str = "MAZERUNNER_LOG";

/// Environment variable holding the log style (`auto`, `always` or `never`).
pub const LOG_STYLE_ENV: &str = "MAZERUNNER_LOG_STYLE";

/// Installs the global logger when [`LOG_ENV`] is set.
///
/// Logging stays off otherwise, so it cannot garble the terminal viewer. Returns whether a logger
/// was installed.
pub fn init_logging() -> bool {
    if env::var_os(LOG_ENV).is_none() {
        return false;
    }

    env_logger::Builder::from_env(Env::new().filter(LOG_ENV).write_style(LOG_STYLE_ENV))
        .try_init()
        .is_ok()
}
