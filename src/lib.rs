// src/lib.rs
// Public library surface for integration tests (and potential reuse).

pub mod aggregate;
pub mod endorsement;
pub mod engine;
pub mod record;
pub mod report;
pub mod score;
pub mod source_weights;
pub mod trend;

// Intake validation for provider payloads (filter, whitelist, timestamps)
pub mod intake;

// ---- Re-exports for stable public API ----
pub use crate::endorsement::EndorsementGate;
pub use crate::engine::{build_leaderboard, run_leaderboard};
pub use crate::record::{validate_post, PostRecord, REQUIRED_FIELDS};
pub use crate::report::{CelebrityReport, ScoredPost};
pub use crate::score::{normalize_score, weighted_score};
pub use crate::source_weights::SourceWeightsConfig;
pub use crate::trend::{classify_trend, TrendLabel};
