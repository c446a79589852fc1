pub mod build_info;

use std::path::PathBuf;
use std::sync::Once;

use tracing_subscriber::{filter::Directive, fmt, EnvFilter};

/// Overrides the application directory when set.
pub const HOME_ENV: &str = "FINANCE_CORE_HOME";
const DEFAULT_DIR_NAME: &str = ".finance_core";
const DEFAULT_DIRECTIVE: &str = "finance_core=info";

static TRACING_INIT: Once = Once::new();

/// Installs the global fmt subscriber once. `RUST_LOG` adds to the default directive.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = DEFAULT_DIRECTIVE.parse::<Directive>() {
            filter = filter.add_directive(directive);
        }
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// `$FINANCE_CORE_HOME`, else `~/.finance_core`, else a directory under the CWD.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = std::env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR_NAME))
}
