//! Version and usage output.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text for `--help`.
pub const USAGE: &str = "\
Browse the GraphQL conference schedule in your terminal.

USAGE:
    graphqlconf [OPTIONS]

OPTIONS:
    --endpoint <url>       GraphQL endpoint (env: GRAPHQLCONF_ENDPOINT)
    --timeout <secs>       Request timeout (env: GRAPHQLCONF_TIMEOUT_SECS)
    --log-level <filter>   tracing filter for the log file (env: GRAPHQLCONF_LOG)
    --no-cache             Disable the in-memory response cache
    -h, --help             Print this help
    -V, --version          Print the version

KEYS:
    up/down, j/k   move       enter  open       tab  switch tab
    left/right     speakers   r      refresh    o    open website
    esc            back       q      quit";

/// Version line printed by `--version`.
pub fn version_line() -> String {
    format!("graphqlconf {}", VERSION)
}

/// Handle the --version command.
pub fn handle_version_command() -> ! {
    println!("{}", version_line());
    std::process::exit(0)
}

/// Handle the --help command.
pub fn handle_help_command() -> ! {
    println!("{}\n\n{}", version_line(), USAGE);
    std::process::exit(0)
}
