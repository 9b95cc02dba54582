use crate::numeric::*;
use crate::share::*;
use crate::sidepot::*;
use crate::settings::Settings;
use crate::storage::Store;
use crate::BoardIndex;
use crate::Money;
use crate::PotIndex;
use crate::MAX_ROWS;

/// Editable all-in table: rows, initial pot, board count, and winner flags.
#[derive(Debug, Clone, PartialEq)]
pub struct SidePotSession {
    rows: Vec<SidePotEntry>,
    initial_pot: String,
    boards: Boards,
    selections: Selections,
    next: usize,
}

impl Default for SidePotSession {
    fn default() -> Self {
        let mut session = Self {
            rows: Vec::new(),
            initial_pot: String::new(),
            boards: Boards::default(),
            selections: Selections::default(),
            next: 0,
        };
        session.blank();
        session
    }
}

/// Rows taken as given, with fresh ids and no winners.
impl From<SidePotSnapshot> for SidePotSession {
    fn from(snapshot: SidePotSnapshot) -> Self {
        let mut session = Self::default();
        session.load(snapshot);
        session
    }
}

impl SidePotSession {
    /// Resume from a share code; else seat handed-over names, keeping the
    /// stored boards and initial pot; else the stored table; else scratch.
    pub fn restore(share: Option<&str>, names: &[String], store: &dyn Store) -> Self {
        let mut session = Self::default();
        if let Some(snapshot) = share.and_then(decode_sidepot_share) {
            log::debug!("side pot table restored from share code");
            session.load(snapshot);
            return session;
        }
        let saved = store.load_sidepot();
        let names = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .collect::<Vec<&str>>();
        if !names.is_empty() {
            log::debug!("side pot table seeded with {} names", names.len());
            session.next = 0;
            let rows = names
                .into_iter()
                .map(|name| SidePotEntry::new(session.id(), name, ""))
                .collect();
            session.rows = rows;
            if let Some(saved) = saved {
                if !saved.boards.is_empty() {
                    session.boards = Boards::from(saved.boards.as_str());
                }
                session.initial_pot = saved.initial_pot;
            }
            return session;
        }
        if let Some(snapshot) = saved {
            log::debug!("side pot table restored from store");
            session.load(snapshot);
        }
        session
    }

    fn load(&mut self, snapshot: SidePotSnapshot) {
        if !snapshot.boards.is_empty() {
            self.boards = Boards::from(snapshot.boards.as_str());
        }
        self.initial_pot = snapshot.initial_pot;
        self.next = 0;
        let rows = snapshot
            .rows
            .into_iter()
            .map(|row| SidePotEntry {
                id: self.id(),
                ..row
            })
            .collect();
        self.rows = rows;
    }
    fn id(&mut self) -> String {
        self.next += 1;
        format!("srow-{}", self.next - 1)
    }
    fn blank(&mut self) {
        let rows = (0..2).map(|_| SidePotEntry::new(self.id(), "", "")).collect();
        self.rows = rows;
    }

    pub fn rows(&self) -> &[SidePotEntry] {
        &self.rows
    }
    pub fn initial_pot(&self) -> &str {
        &self.initial_pot
    }
    pub fn boards(&self) -> Boards {
        self.boards
    }
    /// Stored flags, before uncontested pots are resolved.
    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn add_row(&mut self, name: &str, bet: &str) -> Option<usize> {
        if self.rows.len() >= MAX_ROWS {
            return None;
        }
        let row = SidePotEntry::new(self.id(), name, bet);
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
    pub fn set_bet(&mut self, index: usize, bet: &str) {
        if let Some(row) = self.rows.get_mut(index) {
            row.bet = bet.to_string();
        }
    }
    pub fn set_initial_pot(&mut self, initial_pot: &str) {
        self.initial_pot = initial_pot.to_string();
    }
    pub fn set_boards(&mut self, boards: usize) {
        self.boards = Boards::from(boards);
    }

    /// Flip a winner flag against the current pots, cascading forward.
    pub fn toggle_winner(&mut self, pot: PotIndex, board: BoardIndex, name: &str) {
        self.selections = self.selections.toggled(&self.pots(), pot, board, name);
    }

    pub fn add_suspect(&mut self, name: &str) {
        match self.rows.iter().position(|row| row.named().is_none()) {
            Some(i) => self.rows[i].name = name.to_string(),
            None => {
                self.add_row(name, "");
            }
        }
    }

    /// Back to two blank rows, one board, no initial pot, no winners.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Initial pot plus every row's bet, named or not.
    pub fn total_bet(&self) -> Money {
        parse(&self.initial_pot) + self.rows.iter().map(|row| parse(&row.bet)).sum::<Money>()
    }
    pub fn stakes(&self) -> Vec<Stake> {
        self.rows.iter().filter_map(SidePotEntry::stake).collect()
    }
    pub fn pots(&self) -> Vec<Pot> {
        calculate_side_pots(&self.stakes(), parse(&self.initial_pot))
    }
    /// Flags as distribution sees them, with uncontested pots resolved.
    pub fn effective_selections(&self) -> Selections {
        self.selections.resolved(&self.pots(), self.boards)
    }
    pub fn winnings(&self) -> Winnings {
        calculate_winnings(&self.pots(), self.boards, &self.selections)
    }
    /// Whether every chip on the table has been awarded, to the cent.
    pub fn is_balanced(&self) -> bool {
        self.winnings().is_balanced(self.total_bet())
    }

    pub fn player_names(&self) -> Vec<&str> {
        self.rows.iter().filter_map(SidePotEntry::named).collect()
    }
    pub fn available_suspects<'a>(&self, settings: &'a Settings) -> Vec<&'a str> {
        let ref seated = self.player_names();
        settings
            .suspect_names()
            .into_iter()
            .filter(|name| !seated.contains(name))
            .collect()
    }

    pub fn snapshot(&self) -> SidePotSnapshot {
        SidePotSnapshot {
            rows: self.rows.clone(),
            boards: self.boards.to_string(),
            initial_pot: self.initial_pot.clone(),
        }
    }
    pub fn share_code(&self) -> anyhow::Result<String> {
        encode_sidepot_share(&self.snapshot())
    }
    pub fn save(&self, store: &mut dyn Store) -> anyhow::Result<()> {
        store.save_sidepot(&self.snapshot())
    }
}
