//! Shared types used across all modules.
//!
//! This module defines the agent profile, task analysis, and
//! recommendation types. Other modules import from here rather than
//! reaching into each other's internals.

pub mod agent;
pub mod analysis;
pub mod recommendation;

pub use agent::AgentProfile;
pub use analysis::{Complexity, ExperienceLevel, ProjectType, TaskAnalysis, Workflow};
pub use recommendation::{Recommendation, RecommendationRequest, RecommendationResponse};
