//! Roster import: confirmed teams from CSV (`name,player_1,player_2,level`).

use crate::models::{Category, PlayerId, TeamId, TournamentError};
use serde::Deserialize;
use std::io::Read;

/// One CSV row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RosterEntry {
    pub name: String,
    pub player_1: PlayerId,
    pub player_2: PlayerId,
    pub level: f64,
    /// Line of the CSV the row starts on.
    #[serde(skip)]
    pub line: u64,
}

/// Read roster rows. The first line must be the header; errors name the offending line.
pub fn parse_roster_csv<R: Read>(reader: R) -> Result<Vec<RosterEntry>, TournamentError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| TournamentError::Roster(format!("header: {}", e)))?
        .clone();

    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line()).unwrap_or_default();
            TournamentError::Roster(format!("line {}: {}", line, e))
        })?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let mut entry: RosterEntry = record
            .deserialize(Some(&headers))
            .map_err(|e| TournamentError::Roster(format!("line {}: {}", line, e)))?;
        if entry.player_1.is_empty() || entry.player_2.is_empty() {
            return Err(TournamentError::Roster(format!(
                "line {}: both players are required",
                line
            )));
        }
        entry.line = line;
        entries.push(entry);
    }
    Ok(entries)
}

/// Add every roster row to `category` as a confirmed team.
///
/// Either all rows are added or none: the category is left untouched on the first failure.
pub fn import_roster<R: Read>(
    category: &mut Category,
    reader: R,
) -> Result<Vec<TeamId>, TournamentError> {
    let entries = parse_roster_csv(reader)?;
    let mut staged = category.clone();
    let mut ids = Vec::with_capacity(entries.len());
    for entry in entries {
        let line = entry.line;
        let id = staged
            .add_team(entry.name, entry.player_1, entry.player_2, entry.level)
            .map_err(|e| TournamentError::Roster(format!("line {}: {}", line, e)))?;
        ids.push(id);
    }
    log::info!("Imported {} teams into category {}", ids.len(), category.name);
    *category = staged;
    Ok(ids)
}
