//! Upgrade stored trick-taking rounds to the current shape.
//!
//! Records carry no version tag, so the shape is sniffed from which fields
//! are present. Three catch encodings have existed:
//!
//! 1. `{catcherId, victimId, items: [{type, qty}]}`, the current shape
//! 2. `{catcherId, victims: [{victimId, type: red|black}]}`, one entry per
//!    catcher with repeated victims
//! 3. `{catcherId, victimId, type: red|black}`, one card per entry
//!
//! An even older top-level `catch2` array holds shape 3 entries, and
//! `lastWith2` holds the two-valued predecessor of `last`.

use serde_json::Value;
use tracing::debug;

use super::config::{CatchType, TienLenConfig};
use super::round::{CatchEvent, CatchItem, LastHeld, Round, RoundRecord};
use crate::core::player::{PlayerId, ScoreSheet};
use crate::games::json::{array_field, int_field, non_empty_array, player_field, str_field};

/// Normalize a stored round of any historical shape. Never fails.
#[must_use]
pub fn migrate_round(raw: &Value) -> Round {
    let order = array_field(raw, "order")
        .map(|ids| ids.iter().filter_map(Value::as_str).map(PlayerId::new).collect())
        .unwrap_or_default();

    let catches = if let Some(entries) = non_empty_array(raw, "catch") {
        entries.iter().flat_map(migrate_catch_entry).collect()
    } else if let Some(entries) = array_field(raw, "catch2") {
        debug!(count = entries.len(), "converting legacy catch2 entries");
        entries.iter().map(flat_catch).collect()
    } else {
        Vec::new()
    };

    let last_held = if let Some(entries) = non_empty_array(raw, "last") {
        entries.iter().filter_map(canonical_last_held).collect()
    } else if let Some(entries) = array_field(raw, "lastWith2") {
        debug!(count = entries.len(), "converting legacy lastWith2 entries");
        entries
            .iter()
            .map(|e| LastHeld::new(player_field(e, "playerId"), CatchType::from_flat_legacy(str_field(e, "type"))))
            .collect()
    } else {
        Vec::new()
    };

    let record = RoundRecord {
        order,
        catches,
        last_held,
        custom_points: raw.get("customPoints").and_then(custom_points),
        is_sweep: raw.get("isToiTrang").and_then(Value::as_bool),
        winner_id: str_field(raw, "winnerId").map(PlayerId::new),
        stuck_count: int_field(raw, "rucCount").map(|n| u32::try_from(n).unwrap_or(0)),
        config_snapshot: raw
            .get("configSnapshot")
            .filter(|v| v.is_object())
            .map(TienLenConfig::migrate),
    };
    Round::from(record)
}

/// Convert one element of a non-empty `catch` array.
fn migrate_catch_entry(entry: &Value) -> Vec<CatchEvent> {
    let catcher = player_field(entry, "catcherId");

    if let (Some(items), Some(victim)) = (array_field(entry, "items"), str_field(entry, "victimId")) {
        let mut event = CatchEvent::new(catcher, victim);
        event.items = items.iter().filter_map(canonical_item).collect();
        return vec![event];
    }

    if let Some(victims) = array_field(entry, "victims") {
        debug!(catcher = %catcher, victims = victims.len(), "expanding legacy multi-victim catch");
        let mut events: Vec<CatchEvent> = Vec::new();
        for victim in victims {
            let Some(victim_id) = str_field(victim, "victimId") else {
                continue;
            };
            let Some(kind) = str_field(victim, "type").and_then(CatchType::parse_legacy) else {
                continue;
            };
            match events.iter_mut().find(|e| e.victim_id.as_str() == victim_id) {
                Some(event) => event.add_item(kind, 1),
                None => events.push(CatchEvent::new(catcher.clone(), victim_id).with_item(kind, 1)),
            }
        }
        return events;
    }

    if str_field(entry, "victimId").is_some() {
        return vec![flat_catch(entry)];
    }

    Vec::new()
}

/// `{catcherId, victimId, type}` with a two-valued type.
fn flat_catch(entry: &Value) -> CatchEvent {
    CatchEvent::new(player_field(entry, "catcherId"), player_field(entry, "victimId"))
        .with_item(CatchType::from_flat_legacy(str_field(entry, "type")), 1)
}

fn canonical_item(item: &Value) -> Option<CatchItem> {
    let kind = str_field(item, "type").and_then(CatchType::parse_legacy)?;
    let qty = int_field(item, "qty").map_or(1, |q| u32::try_from(q).unwrap_or(0));
    Some(CatchItem::new(kind, qty))
}

fn canonical_last_held(entry: &Value) -> Option<LastHeld> {
    let kind = str_field(entry, "type").and_then(CatchType::parse_legacy)?;
    Some(LastHeld::new(player_field(entry, "playerId"), kind))
}

fn custom_points(raw: &Value) -> Option<ScoreSheet> {
    let object = raw.as_object()?;
    Some(
        object
            .iter()
            .filter_map(|(id, pts)| {
                let pts = pts.as_i64().or_else(|| pts.as_f64().map(|f| f as i64))?;
                Some((PlayerId::new(id.as_str()), pts))
            })
            .collect(),
    )
}
