//! Shared handler state for the HTTP API.

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::adapters::memory::{
    InMemoryJournalRepository, InMemoryMissionRepository, InMemoryStatRepository,
};
use crate::application::{
    ChatAdvisor, CompleteMissionHandler, GenerateMissionsHandler, GetDashboardHandler,
    GetEntryHandler, GetStatsHandler, ListMissionsHandler, ReviseEntryHandler, SubmitEntryHandler,
};
use crate::domain::chat::ChatSource;
use crate::domain::foundation::UserId;
use crate::domain::missions::MissionGenerator;
use crate::ports::{JournalRepository, MissionRepository, StatRepository};

/// The three Entry Store ports, backed by one storage engine.
#[derive(Clone)]
pub struct Repositories {
    pub journal: Arc<dyn JournalRepository>,
    pub stats: Arc<dyn StatRepository>,
    pub missions: Arc<dyn MissionRepository>,
}

impl Repositories {
    pub fn in_memory() -> Self {
        Self {
            journal: Arc::new(InMemoryJournalRepository::new()),
            stats: Arc::new(InMemoryStatRepository::new()),
            missions: Arc::new(InMemoryMissionRepository::new()),
        }
    }
}

/// Application handlers plus the request context shared by every route.
#[derive(Clone)]
pub struct AppState {
    pub user_id: UserId,
    pub history_days: u32,
    fixed_today: Option<NaiveDate>,

    pub submit_entry: Arc<SubmitEntryHandler>,
    pub revise_entry: Arc<ReviseEntryHandler>,
    pub get_entry: Arc<GetEntryHandler>,
    pub generate_missions: Arc<GenerateMissionsHandler>,
    pub complete_mission: Arc<CompleteMissionHandler>,
    pub list_missions: Arc<ListMissionsHandler>,
    pub get_stats: Arc<GetStatsHandler>,
    pub get_dashboard: Arc<GetDashboardHandler>,
    pub chat: Arc<ChatAdvisor>,
}

impl AppState {
    pub fn new(
        repos: Repositories,
        advisor: ChatAdvisor,
        generator: MissionGenerator,
        user_id: UserId,
        history_days: u32,
    ) -> Self {
        let ai_mode: ChatSource = advisor.mode();
        Self {
            user_id,
            history_days,
            fixed_today: None,
            submit_entry: Arc::new(SubmitEntryHandler::new(
                repos.journal.clone(),
                repos.stats.clone(),
            )),
            revise_entry: Arc::new(ReviseEntryHandler::new(
                repos.journal.clone(),
                repos.stats.clone(),
                repos.missions.clone(),
            )),
            get_entry: Arc::new(GetEntryHandler::new(repos.journal.clone())),
            generate_missions: Arc::new(GenerateMissionsHandler::new(
                repos.journal.clone(),
                repos.stats.clone(),
                repos.missions.clone(),
                generator,
            )),
            complete_mission: Arc::new(CompleteMissionHandler::new(
                repos.missions.clone(),
                repos.stats.clone(),
            )),
            list_missions: Arc::new(ListMissionsHandler::new(repos.missions.clone())),
            get_stats: Arc::new(GetStatsHandler::new(repos.stats.clone())),
            get_dashboard: Arc::new(GetDashboardHandler::new(
                repos.journal,
                repos.stats,
                repos.missions,
                ai_mode,
            )),
            chat: Arc::new(advisor),
        }
    }

    /// Pins the calendar date instead of reading the local clock.
    pub fn with_today(mut self, date: NaiveDate) -> Self {
        self.fixed_today = Some(date);
        self
    }

    /// The current calendar date in local time.
    pub fn today(&self) -> NaiveDate {
        self.fixed_today
            .unwrap_or_else(|| Local::now().date_naive())
    }
}
