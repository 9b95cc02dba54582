use crate::numeric::*;
use crate::payout::*;
use crate::settings::Settings;
use crate::settle::*;
use crate::share::*;
use crate::storage::Store;
use crate::Money;
use crate::MAX_ROWS;

/// Editable buy-in / cash-out table.
///
/// Owns the rows, the table buy-in, and the id counter. Every view is
/// recomputed from the rows on demand.
#[derive(Debug, Clone, PartialEq)]
pub struct PayoutSession {
    rows: Vec<PayoutRow>,
    buy_in: String,
    default_buy_in: String,
    next: usize,
}

/// Rows taken as given, with fresh ids.
impl From<PayoutSnapshot> for PayoutSession {
    fn from(snapshot: PayoutSnapshot) -> Self {
        let mut session = Self::new(crate::DEFAULT_BUY_IN);
        session.load(snapshot);
        session
    }
}

impl PayoutSession {
    /// Two blank rows at the default buy-in. A blank default means 30.
    pub fn new(default_buy_in: &str) -> Self {
        let default_buy_in = match default_buy_in {
            "" => String::from(crate::DEFAULT_BUY_IN),
            s => s.to_string(),
        };
        let mut session = Self {
            rows: Vec::new(),
            buy_in: default_buy_in.clone(),
            default_buy_in,
            next: 0,
        };
        session.blank();
        session
    }

    /// Resume from a share code, then from the store, then from scratch.
    pub fn restore(share: Option<&str>, store: &dyn Store, settings: &Settings) -> Self {
        let mut session = Self::new(&settings.game_settings.default_buy_in);
        let restored = share
            .and_then(decode_payout_share)
            .inspect(|_| log::debug!("payout table restored from share code"))
            .or_else(|| store.load_payout().inspect(|_| log::debug!("payout table restored from store")));
        if let Some(snapshot) = restored {
            session.load(snapshot);
        }
        session
    }

    pub fn rows(&self) -> &[PayoutRow] {
        &self.rows
    }
    pub fn buy_in(&self) -> &str {
        &self.buy_in
    }

    fn load(&mut self, snapshot: PayoutSnapshot) {
        self.buy_in = match snapshot.buy_in.as_str() {
            "" => String::from(crate::DEFAULT_BUY_IN),
            b => b.to_string(),
        };
        self.next = 0;
        let rows = snapshot
            .rows
            .into_iter()
            .map(|row| PayoutRow {
                id: self.id(),
                ..row
            })
            .collect();
        self.rows = rows;
    }
    fn id(&mut self) -> String {
        self.next += 1;
        format!("prow-{}", self.next - 1)
    }
    fn blank(&mut self) {
        let ref buy_in = self.default_buy_in.clone();
        let rows = (0..2)
            .map(|_| PayoutRow::new(self.id(), "", buy_in, ""))
            .collect();
        self.rows = rows;
    }

    /// Append a row at the table buy-in. Returns the new row's index, or
    /// `None` when the table is full.
    pub fn add_row(&mut self, name: &str) -> Option<usize> {
        if self.rows.len() >= MAX_ROWS {
            return None;
        }
        let row = PayoutRow::new(self.id(), name, &self.buy_in, "");
        self.rows.push(row);
        Some(self.rows.len() - 1)
    }
    pub fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
    }
    pub fn set_name(&mut self, index: usize, name: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.name = name.to_string();
        }
    }
    pub fn set_row_buy_in(&mut self, index: usize, buy_in: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.buy_in = buy_in.to_string();
        }
    }
    pub fn set_cash_out(&mut self, index: usize, cash_out: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.cash_out = cash_out.to_string();
        }
    }
    pub fn set_settled(&mut self, index: usize, settled: bool) {
        if let Some(row) = self.rows.get_mut(index) {
            row.settled = settled;
        }
    }

    /// Add or remove whole buy-ins from one row, never going below one.
    /// Does nothing while the table buy-in reads as zero.
    pub fn adjust_buy_in(&mut self, index: usize, delta: i32) {
        let unit = parse(&self.buy_in);
        if unit == 0. {
            return;
        }
        if let Some(row) = self.rows.get_mut(index) {
            let next = parse(&row.buy_in) + delta as Money * unit;
            row.buy_in = fmt_int(next.max(unit));
        }
    }

    /// Change the table buy-in. A positive value is also written to every row.
    pub fn set_buy_in(&mut self, buy_in: &str) {
        self.buy_in = buy_in.to_string();
        let parsed = parse(buy_in);
        if parsed > 0. {
            let ref text = fmt_int(parsed);
            self.rows.iter_mut().for_each(|row| row.buy_in = text.clone());
        }
    }

    /// Put a regular into the first unnamed row, or a new row if there is
    /// none and the table has room.
    pub fn add_suspect(&mut self, name: &str) {
        match self.rows.iter().position(|row| row.named().is_none()) {
            Some(i) => {
                let unit = fmt_int(parse(&self.buy_in));
                let row = &mut self.rows[i];
                row.name = name.to_string();
                if row.buy_in.is_empty() {
                    row.buy_in = unit;
                }
            }
            None => {
                self.add_row(name);
            }
        }
    }

    /// Back to two blank rows at the default buy-in, ids restarting at zero.
    pub fn clear(&mut self) {
        self.next = 0;
        self.buy_in = self.default_buy_in.clone();
        self.blank();
    }

    /// Trimmed names of named rows, in table order.
    pub fn player_names(&self) -> Vec<&str> {
        self.rows.iter().filter_map(PayoutRow::named).collect()
    }
    /// Regulars not already seated.
    pub fn available_suspects<'a>(&self, settings: &'a Settings) -> Vec<&'a str> {
        let ref seated = self.player_names();
        settings
            .suspect_names()
            .into_iter()
            .filter(|name| !seated.contains(name))
            .collect()
    }

    pub fn ledger(&self) -> Ledger {
        calculate_payouts(&self.rows)
    }
    pub fn settlement(&self, mode: SettlementMode) -> Settlement {
        Settlement::from((self.rows.as_slice(), mode))
    }
    pub fn snapshot(&self) -> PayoutSnapshot {
        PayoutSnapshot {
            rows: self.rows.clone(),
            buy_in: self.buy_in.clone(),
        }
    }
    pub fn share_code(&self) -> anyhow::Result<String> {
        encode_payout_share(&self.snapshot())
    }
    pub fn save(&self, store: &mut dyn Store) -> anyhow::Result<()> {
        store.save_payout(&self.snapshot())
    }
}
