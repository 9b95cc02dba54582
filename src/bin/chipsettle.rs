//! Chipsettle Binary
//!
//! One-shot payout, side pot, and settlement calculations, plus an
//! interactive editor over tables saved in `$CHIPSETTLE_HOME`.

use chipsettle::cli::Command;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    chipsettle::log();
    Command::parse().run()
}
