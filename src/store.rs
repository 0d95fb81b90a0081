//! Tournament storage behind a trait, so flows don't reach for a global.

use crate::models::{Tournament, TournamentError, TournamentId};
use std::collections::HashMap;

/// Where tournaments live between requests.
pub trait TournamentStore {
    /// Insert (or replace) a tournament and return its id.
    fn insert(&mut self, tournament: Tournament) -> TournamentId;

    fn get(&self, id: TournamentId) -> Result<&Tournament, TournamentError>;

    fn get_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, TournamentError>;

    fn list(&self) -> Vec<&Tournament>;
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tournaments: HashMap<TournamentId, Tournament>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TournamentStore for InMemoryStore {
    fn insert(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        self.tournaments.insert(id, tournament);
        id
    }

    fn get(&self, id: TournamentId) -> Result<&Tournament, TournamentError> {
        self.tournaments
            .get(&id)
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    fn get_mut(&mut self, id: TournamentId) -> Result<&mut Tournament, TournamentError> {
        self.tournaments
            .get_mut(&id)
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    fn list(&self) -> Vec<&Tournament> {
        self.tournaments.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryStore, TournamentStore};
    use crate::models::{Tournament, TournamentError};
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn tournament(name: &str) -> Tournament {
        let day = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        Tournament::new(name, day, day).unwrap()
    }

    #[test]
    fn insert_get_and_list() {
        let mut store = InMemoryStore::new();
        let a = store.insert(tournament("Open A"));
        let b = store.insert(tournament("Open B"));

        assert_eq!(store.get(a).unwrap().name, "Open A");
        store.get_mut(b).unwrap().name = "Renamed".into();
        assert_eq!(store.get(b).unwrap().name, "Renamed");
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn missing_tournament() {
        let store = InMemoryStore::new();
        let id = Uuid::new_v4();
        assert_eq!(
            store.get(id).unwrap_err(),
            TournamentError::TournamentNotFound(id)
        );
    }
}
