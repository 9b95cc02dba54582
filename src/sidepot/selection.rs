use super::*;
use crate::BoardIndex;
use crate::PotIndex;
use std::collections::BTreeMap;

/// Composite key for a winner flag. Names never get concatenated into a
/// string key, so a name containing any delimiter is still distinct.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seat {
    pub pot: PotIndex,
    pub board: BoardIndex,
    pub name: String,
}

impl From<(PotIndex, BoardIndex, &str)> for Seat {
    fn from((pot, board, name): (PotIndex, BoardIndex, &str)) -> Self {
        Self {
            pot,
            board,
            name: name.to_string(),
        }
    }
}

/// Sparse winner flags keyed by (pot, board, player). Absent means false.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selections(BTreeMap<Seat, bool>);

impl Selections {
    pub fn is_winner(&self, pot: PotIndex, board: BoardIndex, name: &str) -> bool {
        self.0
            .get(&Seat::from((pot, board, name)))
            .copied()
            .unwrap_or(false)
    }
    pub fn set(&mut self, pot: PotIndex, board: BoardIndex, name: &str, won: bool) {
        self.0.insert(Seat::from((pot, board, name)), won);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Seat, &bool)> {
        self.0.iter()
    }

    /// Flip one flag and copy the new value forward to every later pot on
    /// the same board where the player is still eligible. Earlier pots are
    /// never touched.
    pub fn toggled(&self, pots: &[Pot], pot: PotIndex, board: BoardIndex, name: &str) -> Self {
        let mut next = self.clone();
        let won = !self.is_winner(pot, board, name);
        next.set(pot, board, name, won);
        pots.iter()
            .enumerate()
            .skip(pot + 1)
            .filter(|(_, later)| later.is_eligible(name))
            .for_each(|(i, _)| next.set(i, board, name, won));
        next
    }

    /// Selections as distribution sees them: a pot with a single eligible
    /// player is won by that player on every board, whatever is stored.
    pub fn resolved(&self, pots: &[Pot], boards: Boards) -> Self {
        let mut next = self.clone();
        for (i, pot) in pots.iter().enumerate() {
            if let Some(only) = pot.uncontested() {
                boards.range().for_each(|b| next.set(i, b, only, true));
            }
        }
        next
    }

    /// Winners of one pot on one board, in eligibility order.
    pub fn winners<'a>(&self, pots: &'a [Pot], pot: PotIndex, board: BoardIndex) -> Vec<&'a str> {
        pots.get(pot)
            .map(|p| {
                p.players
                    .iter()
                    .map(String::as_str)
                    .filter(|name| self.is_winner(pot, board, name))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl FromIterator<(Seat, bool)> for Selections {
    fn from_iter<I: IntoIterator<Item = (Seat, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
