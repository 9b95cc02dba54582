use crate::numeric::*;
use crate::payments::*;
use crate::payout::*;
use crate::session::*;
use crate::settings::Settings;
use crate::settle::*;
use colored::Colorize;

/// Numbered rows with running totals and a balance verdict.
pub fn payout_table(rows: &[PayoutRow], buy_in: &str) -> String {
    let ref ledger = calculate_payouts(rows);
    let mut lines = vec![format!(
        "{:>3}  {:<12} {:>8} {:>8} {:>9}",
        "#", "name", "in", "out", "net"
    )
    .dimmed()
    .to_string()];
    for (i, row) in rows.iter().enumerate() {
        let line = format!("{:>2}.  {}", i + 1, row);
        lines.push(match row.settled {
            true => format!("{} {}", line.dimmed(), "settled".dimmed()),
            false => line,
        });
    }
    lines.push(format!("buy-in {}  {}", buy_in.bold(), ledger_verdict(ledger)));
    lines.join("\n")
}

pub fn ledger_verdict(ledger: &Ledger) -> String {
    match ledger.is_balanced {
        true => format!("{}  {}", ledger, "balanced".green()),
        false => format!(
            "{}  {}",
            ledger,
            format!("off by {}", fmt(ledger.total_payout)).red()
        ),
    }
}

/// Settlement lines, each followed by its payment link when one is known.
pub fn settlement(settlement: &Settlement, settings: &Settings) -> String {
    let ref plan = PaymentPlan::from((settlement, settings));
    let ref currency = settings.game_settings.currency;
    let item = |verb: &str, i: &PaymentItem| {
        let head = format!("{:<8} {:<24} {:>10} {}", verb, i.label, fmt(i.amount), currency);
        match i.link.is_empty() {
            true => head,
            false => format!("{}  {}", head, i.link.dimmed()),
        }
    };
    let mut lines = Vec::new();
    lines.extend(plan.receive.iter().map(|i| item("receive", i).green().to_string()));
    lines.extend(plan.pay.iter().map(|i| match settlement.mode() {
        SettlementMode::Banker => item("pay", i).red().to_string(),
        SettlementMode::Greedy => item("send", i),
    }));
    if lines.is_empty() {
        lines.push("nothing to settle".dimmed().to_string());
    }
    if !plan.missing.is_empty() {
        lines.push(format!("no revtag for {}", plan.missing.join(", ")).yellow().to_string());
    }
    if plan.missing_profile {
        lines.push("no profile revtag for banker links".yellow().to_string());
    }
    lines.join("\n")
}

/// Rows, pots with their winners per board, and each player's take.
pub fn sidepot_table(session: &SidePotSession) -> String {
    let ref pots = session.pots();
    let boards = session.boards();
    let ref effective = session.effective_selections();
    let ref winnings = session.winnings();
    let mut lines = Vec::new();
    for (i, row) in session.rows().iter().enumerate() {
        lines.push(format!(
            "{:>2}.  {:<12} {:>10}",
            i + 1,
            row.named().unwrap_or("-"),
            fmt(parse(&row.bet))
        ));
    }
    lines.push(format!(
        "initial pot {}  boards {}",
        fmt(parse(session.initial_pot())).bold(),
        boards.to_string().bold()
    ));
    for (i, pot) in pots.iter().enumerate() {
        lines.push(format!("{:>2}.  {}", i + 1, pot).bold().to_string());
        for board in boards.range() {
            let winners = effective.winners(pots, i, board);
            let names = match winners.is_empty() {
                true => "?".yellow().to_string(),
                false => winners.join(", ").green().to_string(),
            };
            lines.push(format!("      board {}: {}", board + 1, names));
        }
    }
    for (name, amount) in winnings.player_winnings.iter() {
        lines.push(format!("{:<12} {:>10}", name, fmt(*amount).green()));
    }
    let total_bet = session.total_bet();
    lines.push(match session.is_balanced() {
        true => format!("won {} of {}  {}", fmt(winnings.total_won), fmt(total_bet), "balanced".green()),
        false => format!(
            "won {} of {}  {}",
            fmt(winnings.total_won),
            fmt(total_bet),
            "unresolved".red()
        ),
    });
    lines.join("\n")
}
