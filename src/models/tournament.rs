//! Tournament, Category, and their lifecycle state.

use crate::models::bracket::{BracketMatch, MatchId};
use crate::models::format::MatchFormatConfiguration;
use crate::models::team::{PlayerId, Team, TeamId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a state that allows this action.
    InvalidState,
    TournamentNotFound(TournamentId),
    CategoryNotFound(CategoryId),
    MatchNotFound(MatchId),
    /// Category already holds `max_teams` confirmed teams.
    CategoryFull { max_teams: u32 },
    /// A category must hold at least two teams.
    InvalidCapacity { max_teams: u32 },
    /// Category is below capacity and the start was not forced.
    NotEnoughTeams { confirmed: usize, required: usize },
    /// Seed count is not one of the allowed values or exceeds half the confirmed teams.
    InvalidSeedCount { requested: usize, confirmed: usize },
    /// A team with this name already exists in the category (case-insensitive).
    DuplicateTeamName,
    InvalidTeam(String),
    /// End date lies before the start date.
    InvalidDates,
    /// Match does not have two teams yet.
    MatchNotReady(MatchId),
    /// Match already has a result.
    MatchAlreadyDecided(MatchId),
    InvalidScore(String),
    /// Roster import failed.
    Roster(String),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::TournamentNotFound(_) => write!(f, "Tournament not found"),
            TournamentError::CategoryNotFound(_) => write!(f, "Category not found"),
            TournamentError::MatchNotFound(id) => write!(f, "Match {} not found", id),
            TournamentError::CategoryFull { max_teams } => {
                write!(f, "Category is full ({} teams)", max_teams)
            }
            TournamentError::InvalidCapacity { max_teams } => {
                write!(f, "A category needs room for at least 2 teams (got {})", max_teams)
            }
            TournamentError::NotEnoughTeams { confirmed, required } => write!(
                f,
                "Category has {} of {} teams; force the start to draw it early",
                confirmed, required
            ),
            TournamentError::InvalidSeedCount { requested, confirmed } => write!(
                f,
                "Cannot seed {} teams with {} confirmed (allowed: 0, 2, 4, 8, 16, at most half)",
                requested, confirmed
            ),
            TournamentError::DuplicateTeamName => {
                write!(f, "A team with this name already exists")
            }
            TournamentError::InvalidTeam(reason) => write!(f, "Invalid team: {}", reason),
            TournamentError::InvalidDates => write!(f, "End date is before start date"),
            TournamentError::MatchNotReady(id) => {
                write!(f, "Match {} does not have two teams yet", id)
            }
            TournamentError::MatchAlreadyDecided(id) => {
                write!(f, "Match {} already has a result", id)
            }
            TournamentError::InvalidScore(reason) => write!(f, "Invalid score: {}", reason),
            TournamentError::Roster(reason) => write!(f, "Roster import failed: {}", reason),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Unique identifier for a category.
pub type CategoryId = Uuid;

/// Lifecycle status, driven by administration and score recording.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    /// Created by an organizer, waiting for approval.
    #[default]
    PendingApproval,
    /// Approved; registrations open.
    Planned,
    /// At least one category has been drawn.
    InProgress,
    /// Every category has a champion.
    Completed,
    Canceled,
}

/// Display bucket for tournament lists.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    Current,
    Upcoming,
    Past,
}

/// One division of a tournament with its own team cap and bracket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub max_teams: u32,
    pub default_match_format: MatchFormatConfiguration,
    /// Format for the final round, if it differs from the default.
    pub final_match_format: Option<MatchFormatConfiguration>,
    /// Confirmed teams. Seeds are filled in once the bracket is generated.
    pub teams: Vec<Team>,
    pub bracket: Vec<BracketMatch>,
    /// Set once the bracket has been generated.
    pub started: bool,
}

impl Category {
    pub fn new(
        name: impl Into<String>,
        max_teams: u32,
        default_match_format: MatchFormatConfiguration,
        final_match_format: Option<MatchFormatConfiguration>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            max_teams,
            default_match_format,
            final_match_format,
            teams: Vec::new(),
            bracket: Vec::new(),
            started: false,
        }
    }

    /// Add a confirmed team. Names must be unique (case-insensitive); only valid before the draw.
    pub fn add_team(
        &mut self,
        name: impl Into<String>,
        player_1: impl Into<PlayerId>,
        player_2: impl Into<PlayerId>,
        level: f64,
    ) -> Result<TeamId, TournamentError> {
        if self.started {
            return Err(TournamentError::InvalidState);
        }
        if self.teams.len() >= self.max_teams as usize {
            return Err(TournamentError::CategoryFull {
                max_teams: self.max_teams,
            });
        }
        let name: String = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(TournamentError::InvalidTeam("name is empty".into()));
        }
        if !level.is_finite() {
            return Err(TournamentError::InvalidTeam(format!(
                "level {} is not a number",
                level
            )));
        }
        let (player_1, player_2): (PlayerId, PlayerId) = (player_1.into(), player_2.into());
        if player_1.trim().is_empty() || player_2.trim().is_empty() {
            return Err(TournamentError::InvalidTeam("player is missing".into()));
        }
        if player_1 == player_2 {
            return Err(TournamentError::InvalidTeam(
                "a team needs two different players".into(),
            ));
        }
        if self.teams.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            return Err(TournamentError::DuplicateTeamName);
        }
        let id = self.teams.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        self.teams.push(Team::new(id, name, player_1, player_2, level));
        Ok(id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn get_match(&self, id: MatchId) -> Option<&BracketMatch> {
        self.bracket.iter().find(|m| m.id == id)
    }

    pub fn is_full(&self) -> bool {
        self.teams.len() >= self.max_teams as usize
    }

    /// Winner of the final, once it has been played.
    pub fn champion(&self) -> Option<TeamId> {
        self.bracket
            .iter()
            .find(|m| m.is_final())
            .and_then(|m| m.winner_team_id)
    }
}

/// A tournament: dates, lifecycle status, and its categories.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TournamentStatus,
    pub categories: Vec<Category>,
}

impl Tournament {
    /// Create a tournament awaiting approval.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, TournamentError> {
        if end_date < start_date {
            return Err(TournamentError::InvalidDates);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            start_date,
            end_date,
            status: TournamentStatus::PendingApproval,
            categories: Vec::new(),
        })
    }

    /// PendingApproval -> Planned.
    pub fn approve(&mut self) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::PendingApproval {
            return Err(TournamentError::InvalidState);
        }
        self.status = TournamentStatus::Planned;
        Ok(())
    }

    /// Cancel from any state except Completed.
    pub fn cancel(&mut self) -> Result<(), TournamentError> {
        if matches!(
            self.status,
            TournamentStatus::Completed | TournamentStatus::Canceled
        ) {
            return Err(TournamentError::InvalidState);
        }
        self.status = TournamentStatus::Canceled;
        Ok(())
    }

    /// Add a category (only before play starts). Returns its id.
    pub fn add_category(
        &mut self,
        name: impl Into<String>,
        max_teams: u32,
        default_match_format: MatchFormatConfiguration,
        final_match_format: Option<MatchFormatConfiguration>,
    ) -> Result<CategoryId, TournamentError> {
        use TournamentStatus::*;
        if !matches!(self.status, PendingApproval | Planned) {
            return Err(TournamentError::InvalidState);
        }
        if max_teams < 2 {
            return Err(TournamentError::InvalidCapacity { max_teams });
        }
        let category = Category::new(name, max_teams, default_match_format, final_match_format);
        let id = category.id;
        self.categories.push(category);
        Ok(id)
    }

    pub fn category(&self, id: CategoryId) -> Result<&Category, TournamentError> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or(TournamentError::CategoryNotFound(id))
    }

    pub fn category_mut(&mut self, id: CategoryId) -> Result<&mut Category, TournamentError> {
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(TournamentError::CategoryNotFound(id))
    }

    /// True once every category has a champion.
    pub fn all_categories_decided(&self) -> bool {
        !self.categories.is_empty() && self.categories.iter().all(|c| c.champion().is_some())
    }
}
