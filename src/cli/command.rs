use super::*;
use crate::payout::*;
use crate::session::*;
use crate::settle::*;
use crate::share::*;
use crate::sidepot::*;
use crate::storage::*;
use crate::MAX_ROWS;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about = "Settle home poker games", long_about = None)]
pub enum Command {
    #[command(about = "Net results from buy-ins and cash-outs (name=in:out)", alias = "pay")]
    Payout {
        #[arg(required = true)]
        rows: Vec<String>,
        #[arg(long, help = "banker or greedy; defaults to the saved setting")]
        mode: Option<String>,
        #[arg(long, default_value = crate::DEFAULT_BUY_IN)]
        buy_in: String,
        #[arg(long, help = "print a share code for the table")]
        share: bool,
    },
    #[command(about = "Split all-in bets into pots and award them (name=bet)", alias = "pot")]
    Sidepot {
        #[arg(required = true)]
        bets: Vec<String>,
        #[arg(long, default_value = "")]
        pot: String,
        #[arg(long, default_value = "1")]
        boards: String,
        #[arg(long = "winner", help = "pot:board:name, toggled in order")]
        winners: Vec<String>,
        #[arg(long, help = "print a share code for the table")]
        share: bool,
    },
    #[command(about = "Transfers that square signed balances (name=amount)", alias = "set")]
    Settle {
        #[arg(required = true)]
        balances: Vec<String>,
        #[arg(long, default_value = "greedy")]
        mode: String,
    },
    #[command(about = "Show the table inside a share code or link", alias = "dec")]
    Decode {
        #[arg(required = true)]
        code: String,
        #[arg(long, help = "read it as a side pot table")]
        sidepot: bool,
    },
    #[command(about = "Edit saved tables interactively")]
    Repl,
}

impl Command {
    pub fn run(self) -> anyhow::Result<()> {
        match self {
            Self::Payout {
                rows,
                mode,
                buy_in,
                share,
            } => {
                let ref settings = FileStore::default().load_settings();
                let rows = rows
                    .iter()
                    .map(|s| PayoutRow::try_from(s.as_str()))
                    .collect::<anyhow::Result<Vec<PayoutRow>>>()?;
                if rows.len() > MAX_ROWS {
                    anyhow::bail!("at most {} rows", MAX_ROWS);
                }
                let session = PayoutSession::from(PayoutSnapshot { rows, buy_in });
                let mode = mode
                    .as_deref()
                    .map(SettlementMode::from)
                    .unwrap_or(settings.game_settings.settlement_mode);
                println!("{}", payout_table(session.rows(), session.buy_in()));
                println!("{}", settlement(&session.settlement(mode), settings));
                if share {
                    println!("{}", session.share_code()?);
                }
                Ok(())
            }
            Self::Sidepot {
                bets,
                pot,
                boards,
                winners,
                share,
            } => {
                let rows = bets
                    .iter()
                    .map(|s| SidePotEntry::try_from(s.as_str()))
                    .collect::<anyhow::Result<Vec<SidePotEntry>>>()?;
                if rows.len() > MAX_ROWS {
                    anyhow::bail!("at most {} rows", MAX_ROWS);
                }
                let mut session = SidePotSession::from(SidePotSnapshot {
                    rows,
                    boards,
                    initial_pot: pot,
                });
                for ref seat in winners
                    .iter()
                    .map(|s| Seat::try_from(s.as_str()))
                    .collect::<anyhow::Result<Vec<Seat>>>()?
                {
                    session.toggle_winner(seat.pot, seat.board, &seat.name);
                }
                println!("{}", sidepot_table(&session));
                if share {
                    println!("{}", session.share_code()?);
                }
                Ok(())
            }
            Self::Settle { balances, mode } => {
                let ref settings = FileStore::default().load_settings();
                let balances = balances
                    .iter()
                    .map(|s| Balance::try_from(s.as_str()))
                    .collect::<anyhow::Result<Vec<Balance>>>()?;
                let mode = SettlementMode::from(mode.as_str());
                println!("{}", settlement(&Settlement::from((balances.as_slice(), mode)), settings));
                Ok(())
            }
            Self::Decode { code, sidepot } => {
                let code = share_param(&code).unwrap_or(&code);
                match sidepot {
                    true => {
                        let snapshot = decode_sidepot_share(code)
                            .ok_or_else(|| anyhow::anyhow!("not a side pot share code"))?;
                        println!("{}", sidepot_table(&SidePotSession::from(snapshot)));
                    }
                    false => {
                        let snapshot = decode_payout_share(code)
                            .ok_or_else(|| anyhow::anyhow!("not a payout share code"))?;
                        println!("{}", payout_table(&snapshot.rows, &snapshot.buy_in));
                    }
                }
                Ok(())
            }
            Self::Repl => Repl::new().run(),
        }
    }
}
