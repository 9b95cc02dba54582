use super::*;
use crate::numeric::*;
use crate::Money;
use serde::Serialize;
use std::collections::BTreeMap;

/// Chips each player collects across every pot and board.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Winnings {
    pub player_winnings: BTreeMap<String, Money>,
    pub total_won: Money,
}

impl Winnings {
    pub fn of(&self, name: &str) -> Money {
        self.player_winnings.get(name).copied().unwrap_or(0.)
    }
    /// Whether every chip in play has found a winner, to the cent.
    pub fn is_balanced(&self, in_play: Money) -> bool {
        is_zero_cents(self.total_won - in_play)
    }
    fn credit(&mut self, name: &str, amount: Money) {
        *self.player_winnings.entry(name.to_string()).or_insert(0.) += amount;
    }
}

/// Split each pot evenly across boards, then evenly across that board's
/// selected winners.
///
/// Uncontested pots are credited to their lone player regardless of the
/// stored flags. A board with no winner distributes nothing; the shortfall
/// shows up in [`Winnings::is_balanced`].
pub fn calculate_winnings(pots: &[Pot], boards: Boards, selections: &Selections) -> Winnings {
    let ref effective = selections.resolved(pots, boards);
    let mut winnings = Winnings::default();
    for (i, pot) in pots.iter().enumerate() {
        let per_board = pot.size / boards.count() as Money;
        for board in boards.range() {
            let winners = effective.winners(pots, i, board);
            if winners.is_empty() {
                continue;
            }
            let share = per_board / winners.len() as Money;
            winners.iter().for_each(|name| winnings.credit(name, share));
        }
    }
    winnings.total_won = winnings.player_winnings.values().sum();
    winnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn abc() -> Vec<Pot> {
        calculate_side_pots(
            &[
                Stake::new("A", 10.),
                Stake::new("B", 20.),
                Stake::new("C", 20.),
            ],
            0.,
        )
    }

    #[test]
    fn lone_player_takes_pot_on_both_boards() {
        let ref pots = calculate_side_pots(&[Stake::new("A", 10.), Stake::new("B", 25.)], 0.);
        let w = calculate_winnings(pots, Boards::Twice, &Selections::default());
        assert!(w.of("B") == 15.);
        assert!(w.of("A") == 0.);
        assert!(w.total_won == 15.);
        assert!(!w.is_balanced(35.));
    }
    #[test]
    fn one_board_with_side_pot() {
        let ref pots = abc();
        let s = Selections::default()
            .toggled(pots, 0, 0, "A")
            .toggled(pots, 1, 0, "C");
        let w = calculate_winnings(pots, Boards::Once, &s);
        assert!(w.of("A") == 30.);
        assert!(w.of("C") == 20.);
        assert!(w.is_balanced(50.));
    }
    #[test]
    fn split_boards_and_chops() {
        let ref pots = abc();
        let s = Selections::default()
            .toggled(pots, 0, 0, "B")
            .toggled(pots, 0, 0, "C")
            .toggled(pots, 0, 1, "A")
            .toggled(pots, 1, 1, "B");
        let w = calculate_winnings(pots, Boards::Twice, &s);
        // main 30: board 0 chopped B/C 7.5 each, board 1 to A 15
        // side 20: board 0 B/C via cascade 5 each, board 1 to B 10
        assert!(w.of("A") == 15.);
        assert!(w.of("B") == 22.5);
        assert!(w.of("C") == 12.5);
        assert!(w.is_balanced(50.));
    }
    #[test]
    fn unresolved_board_distributes_nothing() {
        let ref pots = abc();
        let s = Selections::default().toggled(pots, 0, 0, "A");
        let w = calculate_winnings(pots, Boards::Twice, &s);
        assert!(w.of("A") == 15.);
        assert!(w.total_won == 15.);
        assert!(!w.is_balanced(50.));
    }
    #[test]
    fn no_pots_no_winnings() {
        let w = calculate_winnings(&[], Boards::Twice, &Selections::default());
        assert!(w.player_winnings.is_empty());
        assert!(w.total_won == 0.);
        assert!(w.is_balanced(0.));
    }
    #[test]
    fn fully_resolved_hands_conserve_chips() {
        for _ in 0..300 {
            let stakes = (0..rand::random_range(1..=crate::MAX_ROWS))
                .enumerate()
                .map(|(i, _)| Stake::new(&format!("P{}", i), Stake::random().bet))
                .collect::<Vec<Stake>>();
            let ref pots = calculate_side_pots(&stakes, 7.);
            let boards = Boards::from(rand::random_range(1..=2usize));
            let mut s = Selections::default();
            for (i, pot) in pots.iter().enumerate() {
                for b in boards.range() {
                    let k = rand::random_range(0..pot.players.len());
                    s.set(i, b, &pot.players[k], true);
                }
            }
            let w = calculate_winnings(pots, boards, &s);
            let in_play = pots.iter().map(|p| p.size).sum::<Money>();
            assert!(w.is_balanced(in_play));
        }
    }
}
