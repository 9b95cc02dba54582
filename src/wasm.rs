use crate::numeric::*;
use crate::payout::*;
use crate::settle::*;
use crate::share::*;
use crate::sidepot::*;
use crate::BoardIndex;
use crate::PotIndex;
use wasm_bindgen::prelude::*;

// Browser surface. Structured values cross the boundary as JSON strings.

fn js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}
fn json(value: &impl serde::Serialize) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js)
}

#[wasm_bindgen(js_name = parseNum)]
pub fn parse_num(input: &str) -> f64 {
    parse(input)
}

#[wasm_bindgen(js_name = fmt)]
pub fn fmt_num(n: f64) -> String {
    fmt(n)
}

#[wasm_bindgen(js_name = fmtInt)]
pub fn fmt_int_num(n: f64) -> String {
    fmt_int(n)
}

/// `[{name,in,out,settled}]` in, ledger out.
#[wasm_bindgen(js_name = calculatePayouts)]
pub fn calculate_payouts_json(rows: &str) -> Result<String, JsValue> {
    let rows = serde_json::from_str::<Vec<PayoutRow>>(rows).map_err(js)?;
    json(&calculate_payouts(&rows))
}

/// `[{name,bet}]` in, ordered pots out.
#[wasm_bindgen(js_name = calculateSidePots)]
pub fn calculate_side_pots_json(stakes: &str, initial: f64) -> Result<String, JsValue> {
    let stakes = serde_json::from_str::<Vec<Stake>>(stakes).map_err(js)?;
    json(&calculate_side_pots(&stakes, initial))
}

/// Pots are rebuilt from the stakes; `winners` is `[[pot, board, name]]`.
#[wasm_bindgen(js_name = calculateWinnings)]
pub fn calculate_winnings_json(
    stakes: &str,
    initial: f64,
    boards: usize,
    winners: &str,
) -> Result<String, JsValue> {
    let stakes = serde_json::from_str::<Vec<Stake>>(stakes).map_err(js)?;
    let winners = serde_json::from_str::<Vec<(PotIndex, BoardIndex, String)>>(winners).map_err(js)?;
    let ref pots = calculate_side_pots(&stakes, initial);
    let selections = winners
        .iter()
        .map(|(pot, board, name)| (Seat::from((*pot, *board, name.as_str())), true))
        .collect::<Selections>();
    json(&calculate_winnings(pots, Boards::from(boards), &selections))
}

/// `[{name,amount}]` in, transfers out.
#[wasm_bindgen(js_name = computeGreedyTransactions)]
pub fn compute_greedy_transactions_json(balances: &str) -> Result<String, JsValue> {
    let balances = serde_json::from_str::<Vec<Balance>>(balances).map_err(js)?;
    json(&compute_greedy_transactions(&balances))
}

/// Payout rows and mode in, settlement view out.
#[wasm_bindgen(js_name = settle)]
pub fn settle_json(rows: &str, mode: &str) -> Result<String, JsValue> {
    let rows = serde_json::from_str::<Vec<PayoutRow>>(rows).map_err(js)?;
    json(&Settlement::from((rows.as_slice(), SettlementMode::from(mode))))
}

#[wasm_bindgen(js_name = encodePayoutShare)]
pub fn encode_payout_share_json(snapshot: &str) -> Result<String, JsValue> {
    let ref value = serde_json::from_str::<serde_json::Value>(snapshot).map_err(js)?;
    let snapshot = PayoutSnapshot::from_value(value).ok_or_else(|| js("missing rows"))?;
    encode_payout_share(&snapshot).map_err(js)
}

/// Named-field snapshot, or `null` for an unreadable code.
#[wasm_bindgen(js_name = decodePayoutShare)]
pub fn decode_payout_share_json(code: &str) -> Result<String, JsValue> {
    json(&decode_payout_share(code))
}

#[wasm_bindgen(js_name = encodeSidePotShare)]
pub fn encode_sidepot_share_json(snapshot: &str) -> Result<String, JsValue> {
    let ref value = serde_json::from_str::<serde_json::Value>(snapshot).map_err(js)?;
    let snapshot = SidePotSnapshot::from_value(value).ok_or_else(|| js("missing rows"))?;
    encode_sidepot_share(&snapshot).map_err(js)
}

/// Named-field snapshot, or `null` for an unreadable code.
#[wasm_bindgen(js_name = decodeSidePotShare)]
pub fn decode_sidepot_share_json(code: &str) -> Result<String, JsValue> {
    json(&decode_sidepot_share(code))
}
