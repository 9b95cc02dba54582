use crate::numeric::parse;
use crate::payout::Balance;
use crate::payout::PayoutRow;
use crate::sidepot::Seat;
use crate::sidepot::SidePotEntry;

/// `name=value`, with a non-blank name.
fn assignment(s: &str) -> anyhow::Result<(&str, &str)> {
    match s.split_once('=') {
        Some((name, value)) if !name.trim().is_empty() => Ok((name.trim(), value.trim())),
        Some(_) => anyhow::bail!("missing player name in {:?}", s),
        None => anyhow::bail!("expected name=value, got {:?}", s),
    }
}

/// `name=in:out` or `name=in`.
impl TryFrom<&str> for PayoutRow {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (name, amounts) = assignment(s)?;
        let (buy_in, cash_out) = amounts.split_once(':').unwrap_or((amounts, ""));
        Ok(Self::new("", name, buy_in.trim(), cash_out.trim()))
    }
}

/// `name=bet`.
impl TryFrom<&str> for SidePotEntry {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (name, bet) = assignment(s)?;
        Ok(Self::new("", name, bet))
    }
}

/// `name=amount`, signed.
impl TryFrom<&str> for Balance {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (name, amount) = assignment(s)?;
        Ok(Self::new(name, parse(amount)))
    }
}

/// `pot:board:name`, both indices starting at 1. The name may contain `:`.
impl TryFrom<&str> for Seat {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut parts = s.splitn(3, ':');
        let pot = ordinal(parts.next().unwrap_or_default())?;
        let board = ordinal(parts.next().unwrap_or_default())?;
        match parts.next().map(str::trim) {
            Some(name) if !name.is_empty() => Ok(Self::from((pot, board, name))),
            _ => anyhow::bail!("expected pot:board:name, got {:?}", s),
        }
    }
}

/// One-based position as typed, zero-based as used.
pub fn ordinal(s: &str) -> anyhow::Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(0) => anyhow::bail!("positions start at 1"),
        Ok(n) => Ok(n - 1),
        Err(e) => anyhow::bail!("invalid position {:?}: {}", s, e),
    }
}
