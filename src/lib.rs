//! Settlement arithmetic for home poker games.
//!
//! Two calculators share one numeric core:
//! - [`payout`] turns buy-in / cash-out pairs into per-player results,
//!   which [`settle`] converts into banker lists or peer-to-peer transfers.
//! - [`sidepot`] partitions all-in bets into main and side pots and
//!   distributes them across one or two boards.
//!
//! Everything in those modules is pure and total. [`session`] wraps them in
//! editable state, [`share`] and [`storage`] move that state around, and
//! [`payments`] turns settled amounts into payment-request links.

pub mod numeric;
pub mod payments;
pub mod payout;
pub mod session;
pub mod settings;
pub mod settle;
pub mod share;
pub mod sidepot;
pub mod storage;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "wasm")]
pub mod wasm;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Chips or currency, carried at full precision until display.
pub type Money = f64;
/// Zero-based index of a pot in partition order.
pub type PotIndex = usize;
/// Zero-based index of a board (run-out).
pub type BoardIndex = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE LIMITS
// ============================================================================
/// Maximum rows in either table.
pub const MAX_ROWS: usize = 32;
/// Maximum number of boards a pot can be run over.
pub const MAX_BOARDS: usize = 2;
/// Amounts strictly inside this band are treated as settled.
pub const DUST: Money = 0.005;

// ============================================================================
// DEFAULTS
// ============================================================================
/// Table buy-in used when neither settings nor snapshot provide one.
pub const DEFAULT_BUY_IN: &str = "30";
/// Currency used when settings do not name one.
pub const DEFAULT_CURRENCY: &str = "EUR";
/// Currencies offered without free-text entry.
pub const KNOWN_CURRENCIES: [&str; 3] = ["EUR", "USD", "BTC"];
/// Regulars offered as one-click row names until settings override them.
pub const USUAL_SUSPECTS: [&str; 22] = [
    "Brian",
    "Cahit",
    "Colm",
    "Cormac",
    "Dillon",
    "Euan",
    "Evangelia",
    "Ferhat",
    "Hannan",
    "James",
    "Kevin",
    "Kunal",
    "Liam",
    "Luke",
    "Marcus",
    "Mic",
    "Muireann",
    "Otto",
    "Patryk",
    "Pawel",
    "Scott",
    "Tuhin",
];

// ============================================================================
// STORAGE KEYS
// ============================================================================
pub const PAYOUT_STORAGE_KEY: &str = "poker-payout:v1";
pub const SIDEPOT_STORAGE_KEY: &str = "poker-sidepot:v1";
pub const SETTINGS_STORAGE_KEY: &str = "poker-calc-settings";
/// Overrides the directory used by [`storage::FileStore::default`].
pub const HOME_ENV: &str = "CHIPSETTLE_HOME";
/// Directory for debug log files written by [`log`].
pub const LOG_ENV: &str = "CHIPSETTLE_LOG";

// ============================================================================
// PAYMENTS
// ============================================================================
pub const REVOLUT_BASE_URL: &str = "https://revolut.me";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging, plus a timestamped DEBUG file log when
/// `CHIPSETTLE_LOG` names a directory.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    if let Ok(dir) = std::env::var(LOG_ENV) {
        let time = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        let file = std::fs::create_dir_all(&dir)
            .and_then(|_| std::fs::File::create(format!("{}/{}.log", dir, time)));
        match file {
            Ok(file) => loggers.push(simplelog::WriteLogger::new(
                log::LevelFilter::Debug,
                config,
                file,
            )),
            Err(e) => eprintln!("file logging disabled: {}", e),
        }
    }
    let _ = simplelog::CombinedLogger::init(loggers);
}
