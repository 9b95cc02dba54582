use super::*;
use crate::Money;

// ephemeral walk over stakes sorted ascending. each distinct bet level closes a pot
// funded by every player still at or above that level.
pub struct Partition {
    stakes: Vec<Stake>,
    initial: Money,
    pots: Vec<Pot>,
    paid: Money,
}

impl From<(&[Stake], Money)> for Partition {
    fn from((stakes, initial): (&[Stake], Money)) -> Self {
        let mut stakes = stakes
            .iter()
            .filter(|s| s.bet > 0.)
            .cloned()
            .collect::<Vec<Stake>>();
        stakes.sort_by(|a, b| a.bet.total_cmp(&b.bet));
        Self {
            stakes,
            initial,
            pots: Vec::new(),
            paid: 0.,
        }
    }
}

impl Partition {
    pub fn pots(mut self) -> Vec<Pot> {
        for i in 0..self.stakes.len() {
            let level = self.stakes[i].bet;
            if level > self.paid {
                self.close(i, level);
            }
            self.paid = level;
        }
        self.pots
    }
    fn close(&mut self, i: usize, level: Money) {
        let remaining = self.stakes.len() - i;
        let mut size = (level - self.paid) * remaining as Money;
        if self.pots.is_empty() && self.initial > 0. {
            size += self.initial;
        }
        self.pots.push(Pot {
            name: Pot::label(self.pots.len()),
            size,
            players: self.stakes[i..].iter().map(|s| s.name.clone()).collect(),
        });
    }
}

/// Split all-in bets into a main pot and side pots.
///
/// Players with no positive bet are ignored. Tied bets share one level, so
/// no zero-size pot is ever produced. `initial` (dead money already in the
/// middle) goes to the main pot.
pub fn calculate_side_pots(stakes: &[Stake], initial: Money) -> Vec<Pot> {
    Partition::from((stakes, initial)).pots()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn stakes(bets: &[(&str, Money)]) -> Vec<Stake> {
        bets.iter().copied().map(Stake::from).collect()
    }
    fn names(pot: &Pot) -> Vec<&str> {
        pot.players.iter().map(String::as_str).collect()
    }

    #[test]
    fn short_stack_with_two_callers() {
        let pots = calculate_side_pots(&stakes(&[("A", 10.), ("B", 20.), ("C", 20.)]), 0.);
        assert!(pots.len() == 2);
        assert!(pots[0].name == "Main Pot");
        assert!(pots[0].size == 30.);
        assert!(names(&pots[0]) == vec!["A", "B", "C"]);
        assert!(pots[1].name == "Side Pot 1");
        assert!(pots[1].size == 20.);
        assert!(names(&pots[1]) == vec!["B", "C"]);
    }
    #[test]
    fn three_levels() {
        let pots = calculate_side_pots(&stakes(&[("C", 300.), ("A", 100.), ("B", 200.)]), 0.);
        assert!(pots.iter().map(|p| p.size).collect::<Vec<_>>() == vec![300., 200., 100.]);
        assert!(names(&pots[2]) == vec!["C"]);
        assert!(pots[2].name == "Side Pot 2");
    }
    #[test]
    fn initial_pot_goes_to_main() {
        let pots = calculate_side_pots(&stakes(&[("A", 10.), ("B", 20.)]), 15.);
        assert!(pots[0].size == 35.);
        assert!(pots[1].size == 10.);
    }
    #[test]
    fn all_tied_is_one_pot() {
        let pots = calculate_side_pots(&stakes(&[("A", 50.), ("B", 50.), ("C", 50.)]), 0.);
        assert!(pots.len() == 1);
        assert!(pots[0].size == 150.);
        assert!(names(&pots[0]) == vec!["A", "B", "C"]);
    }
    #[test]
    fn nobody_betting_is_no_pots() {
        assert!(calculate_side_pots(&[], 25.).is_empty());
        assert!(calculate_side_pots(&stakes(&[("A", 0.), ("B", -5.)]), 25.).is_empty());
    }
    #[test]
    fn zero_bets_are_excluded() {
        let pots = calculate_side_pots(&stakes(&[("A", 0.), ("B", 20.), ("C", 20.)]), 0.);
        assert!(pots.len() == 1);
        assert!(names(&pots[0]) == vec!["B", "C"]);
    }
    #[test]
    fn ties_keep_input_order() {
        let pots = calculate_side_pots(&stakes(&[("B", 5.), ("A", 5.), ("C", 1.)]), 0.);
        assert!(names(&pots[0]) == vec!["C", "B", "A"]);
        assert!(names(&pots[1]) == vec!["B", "A"]);
    }
    #[test]
    fn input_is_untouched() {
        let input = stakes(&[("B", 20.), ("A", 10.)]);
        let copy = input.clone();
        calculate_side_pots(&input, 0.);
        assert!(input == copy);
    }
    #[test]
    fn chips_are_conserved() {
        for _ in 0..500 {
            let input = (0..rand::random_range(0..=crate::MAX_ROWS))
                .map(|_| Stake::random())
                .collect::<Vec<Stake>>();
            let initial = rand::random_range(0..100) as Money;
            let pots = calculate_side_pots(&input, initial);
            let bets = input.iter().map(|s| s.bet).sum::<Money>();
            let total = pots.iter().map(|p| p.size).sum::<Money>();
            let expected = if pots.is_empty() { 0. } else { bets + initial };
            assert!((total - expected).abs() < 1e-6);
        }
    }
    #[test]
    fn eligibility_only_shrinks() {
        for _ in 0..500 {
            let input = (0..rand::random_range(0..=crate::MAX_ROWS))
                .map(|_| Stake::random())
                .collect::<Vec<Stake>>();
            let pots = calculate_side_pots(&input, 0.);
            for pair in pots.windows(2) {
                assert!(pair[1].players.len() < pair[0].players.len());
                assert!(pair[1].players.iter().all(|p| pair[0].is_eligible(p)));
            }
            assert!(pots.iter().all(|p| p.size > 0.));
        }
    }
}
