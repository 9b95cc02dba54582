use super::*;
use crate::payments::summary;
use crate::session::*;
use crate::settings::Settings;
use crate::settle::SettlementMode;
use crate::share::*;
use crate::storage::*;
use clap::Parser;
use colored::Colorize;
use std::io::Write;

/// Interactive editing of both tables, saved after every change.
pub struct Repl<S: Store = FileStore> {
    store: S,
    settings: Settings,
    payout: PayoutSession,
    sidepot: SidePotSession,
}

impl Repl {
    pub fn new() -> Self {
        Self::from(FileStore::default())
    }
}

impl<S: Store> From<S> for Repl<S> {
    fn from(store: S) -> Self {
        let settings = store.load_settings();
        let payout = PayoutSession::restore(None, &store, &settings);
        let sidepot = SidePotSession::restore(None, &[], &store);
        Self {
            store,
            settings,
            payout,
            sidepot,
        }
    }
}

impl<S: Store> Repl<S> {
    pub fn run(&mut self) -> anyhow::Result<()> {
        log::info!("editing saved tables, type help for commands");
        println!("{}", self.show());
        loop {
            print!("> ");
            let ref mut input = String::new();
            std::io::stdout().flush()?;
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input) {
                    Err(e) => eprintln!("{}", e),
                    Ok(output) => println!("{}", output),
                },
            }
        }
        Ok(())
    }

    /// Apply one line and return what to print.
    pub fn handle(&mut self, input: &str) -> anyhow::Result<String> {
        let output = match Edit::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Edit::Show => return Ok(self.show()),
            Edit::Payout { edit } => self.payout(edit)?,
            Edit::Sidepot { edit } => self.sidepot(edit)?,
            Edit::Revtag { revtag, name } => {
                self.settings = match name {
                    Some(ref name) => self.settings.with_revtag(name, &revtag),
                    None => self.settings.with_profile_revtag(&revtag),
                };
                self.store.save_settings(&self.settings)?;
                return Ok(String::from("saved"));
            }
            Edit::Mode { mode } => {
                self.settings.game_settings.settlement_mode = SettlementMode::from(mode.as_str());
                self.store.save_settings(&self.settings)?;
                return Ok(format!("settling as {}", self.settings.game_settings.settlement_mode));
            }
            Edit::Currency { currency } => {
                let currency = currency.trim().to_uppercase();
                if !crate::KNOWN_CURRENCIES.contains(&currency.as_str()) {
                    log::warn!("{} is not a known currency", currency);
                }
                self.settings.game_settings.currency = currency;
                self.store.save_settings(&self.settings)?;
                return Ok(String::from("saved"));
            }
        };
        self.payout.save(&mut self.store)?;
        self.sidepot.save(&mut self.store)?;
        Ok(output)
    }

    fn show(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n{}",
            "payout".bold().underline(),
            payout_table(self.payout.rows(), self.payout.buy_in()),
            "side pot".bold().underline(),
            sidepot_table(&self.sidepot)
        )
    }

    fn payout(&mut self, edit: PayoutEdit) -> anyhow::Result<String> {
        let ref mut table = self.payout;
        match edit {
            PayoutEdit::Add { name } => {
                table
                    .add_row(name.as_deref().unwrap_or_default())
                    .ok_or_else(|| anyhow::anyhow!("the table is full"))?;
            }
            PayoutEdit::Remove { row } => table.remove_row(ordinal(&row)?),
            PayoutEdit::Name { row, name } => table.set_name(ordinal(&row)?, &name),
            PayoutEdit::In { row, amount } => table.set_row_buy_in(ordinal(&row)?, &amount),
            PayoutEdit::Out { row, amount } => table.set_cash_out(ordinal(&row)?, &amount),
            PayoutEdit::Bump { row, delta } => table.adjust_buy_in(ordinal(&row)?, delta),
            PayoutEdit::Settled { row } => {
                let i = ordinal(&row)?;
                let settled = table.rows().get(i).map(|r| !r.settled).unwrap_or_default();
                table.set_settled(i, settled);
            }
            PayoutEdit::BuyIn { amount } => table.set_buy_in(&amount),
            PayoutEdit::Suspect { name } => table.add_suspect(&name),
            PayoutEdit::Settle => {
                let mode = self.settings.game_settings.settlement_mode;
                return Ok(settlement(&table.settlement(mode), &self.settings));
            }
            PayoutEdit::Summary => {
                let mode = self.settings.game_settings.settlement_mode;
                return Ok(summary(&table.settlement(mode), &self.settings));
            }
            PayoutEdit::Share { base } => {
                let ref code = table.share_code()?;
                return Ok(share_url(base.as_deref().unwrap_or_default(), code));
            }
            PayoutEdit::Pass { base } => {
                return Ok(names_url(base.as_deref().unwrap_or_default(), &table.player_names()));
            }
            PayoutEdit::Clear => {
                table.clear();
                self.store.remove(crate::PAYOUT_STORAGE_KEY)?;
            }
        }
        Ok(payout_table(table.rows(), table.buy_in()))
    }

    fn sidepot(&mut self, edit: SidePotEdit) -> anyhow::Result<String> {
        match edit {
            SidePotEdit::Add { name, bet } => {
                self.sidepot
                    .add_row(
                        name.as_deref().unwrap_or_default(),
                        bet.as_deref().unwrap_or_default(),
                    )
                    .ok_or_else(|| anyhow::anyhow!("the table is full"))?;
            }
            SidePotEdit::Remove { row } => self.sidepot.remove_row(ordinal(&row)?),
            SidePotEdit::Name { row, name } => self.sidepot.set_name(ordinal(&row)?, &name),
            SidePotEdit::Bet { row, amount } => self.sidepot.set_bet(ordinal(&row)?, &amount),
            SidePotEdit::Pot { amount } => self.sidepot.set_initial_pot(&amount),
            SidePotEdit::Boards { count } => self.sidepot.set_boards(count),
            SidePotEdit::Win { pot, board, name } => {
                self.sidepot
                    .toggle_winner(ordinal(&pot)?, ordinal(&board)?, &name)
            }
            SidePotEdit::Suspect { name } => self.sidepot.add_suspect(&name),
            SidePotEdit::Import { link: Some(link) } => {
                let names = names_param(&link);
                self.sidepot = SidePotSession::restore(share_param(&link), &names, &self.store);
            }
            SidePotEdit::Import { link: None } => {
                let names = self
                    .payout
                    .player_names()
                    .into_iter()
                    .map(String::from)
                    .collect::<Vec<String>>();
                self.sidepot = SidePotSession::restore(None, &names, &self.store);
            }
            SidePotEdit::Share { base } => {
                let ref code = self.sidepot.share_code()?;
                return Ok(share_url(base.as_deref().unwrap_or_default(), code));
            }
            SidePotEdit::Clear => {
                self.sidepot.clear();
                self.store.remove(crate::SIDEPOT_STORAGE_KEY)?;
            }
        }
        Ok(sidepot_table(&self.sidepot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repl() -> Repl<MemoryStore> {
        colored::control::set_override(false);
        Repl::from(MemoryStore::default())
    }

    #[test]
    fn edits_are_saved() {
        let mut repl = repl();
        repl.handle("payout name 1 Otto").unwrap();
        repl.handle("p out 1 45").unwrap();
        let saved = repl.store.load_payout().unwrap();
        assert!(saved.rows[0].name == "Otto");
        assert!(saved.rows[0].cash_out == "45");
        assert!(repl.store.load_sidepot().is_some());
    }
    #[test]
    fn bad_input_is_an_error() {
        let mut repl = repl();
        assert!(repl.handle("payout name 0 Otto").is_err());
        assert!(repl.handle("teleport").is_err());
        assert!(repl.handle("payout bump x 1").is_err());
    }
    #[test]
    fn bump_takes_negative_deltas() {
        let mut repl = repl();
        repl.handle("payout bump 1 2").unwrap();
        assert!(repl.payout.rows()[0].buy_in == "90");
        repl.handle("payout bump 1 -1").unwrap();
        assert!(repl.payout.rows()[0].buy_in == "60");
    }
    #[test]
    fn import_seats_payout_players() {
        let mut repl = repl();
        repl.handle("payout name 1 Otto").unwrap();
        repl.handle("payout name 2 Liam").unwrap();
        repl.handle("sidepot boards 2").unwrap();
        repl.handle("sidepot import").unwrap();
        assert!(repl.sidepot.player_names() == vec!["Otto", "Liam"]);
        assert!(repl.sidepot.boards() == crate::sidepot::Boards::Twice);
    }
    #[test]
    fn passed_names_seat_the_side_pot_table() {
        let mut repl = repl();
        repl.handle("payout name 1 Zoë").unwrap();
        repl.handle("payout name 2 O'Neil").unwrap();
        let link = repl.handle("payout pass https://x/sidepot").unwrap();
        assert!(link == "https://x/sidepot?names=Zo%C3%AB,O'Neil");
        repl.handle("payout clear").unwrap();
        repl.handle(&format!("sidepot import {}", link)).unwrap();
        assert!(repl.sidepot.player_names() == vec!["Zoë", "O'Neil"]);
        repl.handle("sidepot import https://x/sidepot?names=Big+Al,%C3%89mile").unwrap();
        assert!(repl.sidepot.player_names() == vec!["Big Al", "Émile"]);
    }
    #[test]
    fn revtags_go_to_settings() {
        let mut repl = repl();
        repl.handle("revtag @otto Otto").unwrap();
        repl.handle("revtag @bank").unwrap();
        repl.handle("mode greedy").unwrap();
        let settings = repl.store.load_settings();
        assert!(settings.revtag_of("otto") == Some("@otto"));
        assert!(settings.profile.revtag == "@bank");
        assert!(settings.game_settings.settlement_mode == SettlementMode::Greedy);
    }
    #[test]
    fn share_links() {
        let mut repl = repl();
        let url = repl.handle("payout share https://chips.example/?s=old").unwrap();
        assert!(url.starts_with("https://chips.example/?s=z"));
    }
    #[test]
    fn clear_forgets_the_table() {
        let mut repl = repl();
        repl.handle("payout name 1 Otto").unwrap();
        repl.handle("payout clear").unwrap();
        assert!(repl.payout.player_names().is_empty());
        assert!(repl.store.load_payout().unwrap().rows.iter().all(|r| r.name.is_empty()));
    }
}
