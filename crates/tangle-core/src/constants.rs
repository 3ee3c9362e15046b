//! Shared constants for the Tangle analysis engine.

/// Tangle version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project config file name, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "tangle.toml";

// ---- Cycle Engine ----

/// Maximum number of elementary cycles enumerated per strongly connected component.
pub const DEFAULT_MAX_CYCLES_PER_SCC: usize = 100;

/// Maximum DFS steps spent enumerating cycles inside one component.
pub const DEFAULT_MAX_SEARCH_STEPS: usize = 250_000;

// ---- Coupling Metrics ----

/// Lower bound of the god-module fan threshold.
pub const DEFAULT_GOD_MODULE_FLOOR: u32 = 10;

/// Fraction of the total module count used for the god-module fan threshold.
pub const DEFAULT_GOD_MODULE_RATIO: f64 = 0.1;

/// Minimum instability for the unstable-module signal.
pub const DEFAULT_UNSTABLE_INSTABILITY: f64 = 0.9;

/// Fan-out must exceed this for the unstable-module signal.
pub const DEFAULT_UNSTABLE_MIN_FAN_OUT: u32 = 5;

/// Distance from the main sequence above which a module is flagged.
pub const DEFAULT_OFF_MAIN_SEQUENCE_DISTANCE: f64 = 0.7;

/// Minimum `fan_in + fan_out` for the off-main-sequence signal.
pub const DEFAULT_OFF_MAIN_SEQUENCE_MIN_COUPLING: u32 = 1;

/// Distance at or below which a module sits on the main sequence.
pub const MAIN_SEQUENCE_THRESHOLD: f64 = 0.3;

// ---- Report ----

/// Number of entries kept in the fan-in / fan-out rankings.
pub const DEFAULT_FAN_TOP_N: usize = 10;

// ---- Module Resolution ----

/// Source extensions probed when a relative specifier omits one.
pub const SOURCE_EXTENSIONS: [&str; 9] = [
    "ts", "tsx", "d.ts", "js", "jsx", "mts", "cts", "mjs", "cjs",
];

/// Default test-file stem suffixes (`foo.spec.ts`, `foo.test.tsx`, ...).
pub const TEST_STEM_SUFFIXES: [&str; 2] = [".spec", ".test"];

/// Directory segment that marks every file below it as a test file.
pub const TEST_DIRECTORY: &str = "__tests__";
