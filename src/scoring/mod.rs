//! Health scoring of nutrition totals.

pub mod badge;
pub mod evaluator;
pub mod profile;
pub mod reference;

pub use badge::{ScoreBadge, ScoreBand};
pub use evaluator::{compute_score, compute_score_with, normalize};
pub use profile::ScoreProfile;
pub use reference::{ReferenceSet, ReferenceValues};
