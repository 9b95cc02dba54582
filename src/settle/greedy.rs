use super::*;
use crate::numeric::*;
use crate::payout::Balance;
use crate::DUST;
use crate::Money;

// ephemeral two-sided book. every step matches the largest outstanding creditor
// with the largest outstanding debtor, so each step retires at least one party.
pub struct Greedy {
    creditors: Vec<Balance>,
    debtors: Vec<Balance>,
    transactions: Vec<Transaction>,
}

impl From<&[Balance]> for Greedy {
    fn from(balances: &[Balance]) -> Self {
        Self {
            creditors: balances
                .iter()
                .filter(|b| b.amount > DUST)
                .cloned()
                .collect(),
            debtors: balances
                .iter()
                .filter(|b| b.amount < -DUST)
                .map(|b| Balance::new(&b.name, b.amount.abs()))
                .collect(),
            transactions: Vec::new(),
        }
    }
}

impl Greedy {
    pub fn transactions(mut self) -> Vec<Transaction> {
        while !self.creditors.is_empty() && !self.debtors.is_empty() {
            Self::largest_first(&mut self.creditors);
            Self::largest_first(&mut self.debtors);
            self.transfer();
        }
        self.transactions.sort_by_key(|t| collation_key(&t.from));
        self.transactions
    }
    fn largest_first(book: &mut [Balance]) {
        book.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    }
    fn transfer(&mut self) {
        let amount = Money::min(self.creditors[0].amount, self.debtors[0].amount);
        if amount > DUST {
            self.transactions.push(Transaction::new(
                &self.debtors[0].name,
                &self.creditors[0].name,
                round_cents(amount),
            ));
        }
        self.creditors[0].amount -= amount;
        self.debtors[0].amount -= amount;
        if self.creditors[0].amount < DUST {
            self.creditors.remove(0);
        }
        if self.debtors[0].amount < DUST {
            self.debtors.remove(0);
        }
    }
}

/// Sort key that ignores case and the common Latin accents, so that
/// "Émile" and "emile" compare equal.
fn collation_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| unaccented(c).map(String::from).unwrap_or_else(|| c.to_string()))
        .collect()
}

fn unaccented(c: char) -> Option<&'static str> {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => Some("a"),
        'æ' => Some("ae"),
        'ç' | 'ć' | 'č' => Some("c"),
        'ď' | 'đ' => Some("d"),
        'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => Some("e"),
        'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => Some("i"),
        'ł' => Some("l"),
        'ñ' | 'ń' | 'ň' => Some("n"),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => Some("o"),
        'œ' => Some("oe"),
        'ř' => Some("r"),
        'ś' | 'š' | 'ş' => Some("s"),
        'ß' => Some("ss"),
        'ť' => Some("t"),
        'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => Some("u"),
        'ý' | 'ÿ' => Some("y"),
        'ź' | 'ż' | 'ž' => Some("z"),
        _ => None,
    }
}

/// Reduce signed balances to a short list of direct transfers.
///
/// Largest-to-largest matching is a heuristic, not a minimum. Residual dust
/// under half a cent is dropped. Output is ordered by payer name, ignoring
/// case and accents.
pub fn compute_greedy_transactions(balances: &[Balance]) -> Vec<Transaction> {
    Greedy::from(balances).transactions()
}
