use clap::Parser;
use clap::Subcommand;

/// One line of interactive input.
#[derive(Parser)]
pub enum Edit {
    #[command(about = "Show both tables", alias = "ls")]
    Show,
    #[command(about = "Edit the payout table", alias = "p")]
    Payout {
        #[command(subcommand)]
        edit: PayoutEdit,
    },
    #[command(about = "Edit the side pot table", alias = "s")]
    Sidepot {
        #[command(subcommand)]
        edit: SidePotEdit,
    },
    #[command(about = "Record a player's revtag, or the profile's with no name")]
    Revtag {
        #[arg(required = true)]
        revtag: String,
        name: Option<String>,
    },
    #[command(about = "Choose banker or greedy settlement")]
    Mode {
        #[arg(required = true)]
        mode: String,
    },
    #[command(about = "Set the currency for payment links")]
    Currency {
        #[arg(required = true)]
        currency: String,
    },
}

#[derive(Subcommand)]
pub enum PayoutEdit {
    #[command(about = "Append a row at the table buy-in", alias = "a")]
    Add { name: Option<String> },
    #[command(about = "Remove a row", alias = "rm")]
    Remove { row: String },
    #[command(about = "Rename a row")]
    Name { row: String, name: String },
    #[command(about = "Set a row's buy-in", name = "in")]
    In { row: String, amount: String },
    #[command(about = "Set a row's cash-out", name = "out")]
    Out { row: String, amount: String },
    #[command(about = "Add or remove whole buy-ins")]
    Bump {
        row: String,
        #[arg(allow_negative_numbers = true)]
        delta: i32,
    },
    #[command(about = "Mark a row settled, or unsettled")]
    Settled { row: String },
    #[command(about = "Set the table buy-in for every row", name = "buyin")]
    BuyIn { amount: String },
    #[command(about = "Seat a regular", alias = "sus")]
    Suspect { name: String },
    #[command(about = "Settlement with payment links")]
    Settle,
    #[command(about = "Plain text for the group chat")]
    Summary,
    #[command(about = "Share link for the table")]
    Share { base: Option<String> },
    #[command(about = "Link seating these players at a side pot table")]
    Pass { base: Option<String> },
    #[command(about = "Start over")]
    Clear,
}

#[derive(Subcommand)]
pub enum SidePotEdit {
    #[command(about = "Append a row", alias = "a")]
    Add { name: Option<String>, bet: Option<String> },
    #[command(about = "Remove a row", alias = "rm")]
    Remove { row: String },
    #[command(about = "Rename a row")]
    Name { row: String, name: String },
    #[command(about = "Set a row's total bet")]
    Bet { row: String, amount: String },
    #[command(about = "Set the chips already in the pot")]
    Pot { amount: String },
    #[command(about = "Run it once or twice")]
    Boards { count: usize },
    #[command(about = "Toggle a winner (pot board name)", alias = "w")]
    Win { pot: String, board: String, name: String },
    #[command(about = "Seat a regular", alias = "sus")]
    Suspect { name: String },
    #[command(about = "Seat the payout table's players, or those of a shared link")]
    Import { link: Option<String> },
    #[command(about = "Share link for the table")]
    Share { base: Option<String> },
    #[command(about = "Start over")]
    Clear,
}
