//! Application state: the problem factory plus an in-memory store of problems
//! that have been handed out and not yet graded.
//!
//! This module owns:
//!   - the factory (built from TOML config or defaults)
//!   - the in-flight store (by id, bounded, oldest evicted first)
//!
//! A problem leaves the store the moment it is graded; "next problem" is
//! always a fresh generation.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{info, instrument, warn};

use crate::config::{load_engine_config_from_env, EngineConfig};
use crate::domain::{Problem, Topic};
use crate::factory::{Mode, ProblemFactory};

/// A problem together with the entry point that produced it.
#[derive(Clone, Debug)]
pub struct Issued {
    pub problem: Problem,
    pub mode: Mode,
}

#[derive(Debug)]
pub struct ProblemStore {
    by_id: HashMap<String, Issued>,
    order: VecDeque<String>,
    capacity: usize,
}

impl ProblemStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            by_id: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Insert, evicting the oldest entries beyond capacity.
    pub fn insert(&mut self, issued: Issued) {
        let id = issued.problem.id.clone();
        if self.by_id.insert(id.clone(), issued).is_none() {
            self.order.push_back(id);
        }
        while self.by_id.len() > self.capacity {
            match self.order.pop_front() {
                Some(old) => {
                    self.by_id.remove(&old);
                }
                None => break,
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Issued> {
        self.by_id.get(id)
    }

    /// Remove and return.
    pub fn take(&mut self, id: &str) -> Option<Issued> {
        let issued = self.by_id.remove(id)?;
        self.order.retain(|x| x != id);
        Some(issued)
    }
}

#[derive(Clone)]
pub struct AppState {
    pub factory: ProblemFactory,
    pub store: Arc<RwLock<ProblemStore>>,
}

impl AppState {
    /// Build state from env: load config (if any) and set up the store.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_engine_config_from_env().unwrap_or_default();
        Self::with_config(cfg)
    }

    pub fn with_config(cfg: EngineConfig) -> Self {
        info!(
            target: "fokusmat_backend",
            arcade_level_offset = cfg.arcade.level_offset,
            arcade_grade_offset = cfg.arcade.grade_offset,
            arcade_topics = ?cfg.arcade.topics,
            daily_level_boost = cfg.daily.level_boost,
            store_capacity = cfg.store.capacity,
            "Engine configured"
        );
        let store = ProblemStore::new(cfg.store.capacity);
        Self {
            factory: ProblemFactory::new(cfg),
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Generate a problem for `mode` and remember it for grading.
    /// `topics` is ignored for the daily problem.
    #[instrument(level = "info", skip(self, topics), fields(topics = topics.len()))]
    pub async fn issue(&self, mode: Mode, level: i64, grade: Option<i64>, topics: &[Topic]) -> Problem {
        // ThreadRng is not Send: draw everything before the first await.
        let problem = {
            let mut rng = rand::thread_rng();
            match mode {
                Mode::Training => self.factory.create_problem(&mut rng, level, grade, topics),
                Mode::Arcade => self.factory.create_arcade_problem(&mut rng, level, grade, topics),
                Mode::Daily => self.factory.create_daily_problem(&mut rng, level, grade),
            }
        };
        self.store.write().await.insert(Issued { problem: problem.clone(), mode });
        info!(target: "problem", id = %problem.id, topic = %problem.topic_key, title = %problem.title, "Problem issued");
        problem
    }

    /// Remove a problem for grading.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn take(&self, id: &str) -> Option<Issued> {
        let taken = self.store.write().await.take(id);
        if taken.is_none() {
            warn!(target: "problem", %id, "Unknown or already graded problem");
        }
        taken
    }

    /// Read-only access to an in-flight problem.
    #[instrument(level = "debug", skip(self), fields(%id))]
    pub async fn get(&self, id: &str) -> Option<Issued> {
        self.store.read().await.get(id).cloned()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
