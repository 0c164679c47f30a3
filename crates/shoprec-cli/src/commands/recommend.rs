//! `shoprec recommend`: print recommendations for one user as JSON.

use super::load_store;
use crate::error::{CliError, Result};
use shoprec::config::{CandidateOrder, RecommenderConfig};
use shoprec::recommend::CollaborativeRecommender;
use shoprec::UserId;
use std::path::Path;
use tracing::debug;

pub(crate) fn run(
    data: &Path,
    user: u64,
    n: Option<usize>,
    order: Option<&str>,
    config_path: Option<&Path>,
) -> Result<()> {
    let mut config = match config_path {
        Some(path) if !path.exists() => return Err(CliError::FileNotFound(path.to_path_buf())),
        Some(path) => RecommenderConfig::load(path)?,
        None => RecommenderConfig::default(),
    };

    if let Some(order) = order {
        config.candidate_order = CandidateOrder::parse(order).ok_or_else(|| {
            CliError::InvalidArgument(format!(
                "unknown order '{order}' (expected ascending or support)"
            ))
        })?;
    }

    let store = load_store(data)?;
    let count = n.unwrap_or(config.default_count);
    let recommender = CollaborativeRecommender::new(&store, &store).with_config(config);
    let result = recommender.recommend(UserId(user), count)?;

    debug!(user, count = result.len(), source = ?result.source, "recommendations computed");
    println!("{}", serde_json::to_string_pretty(&result.products)?);
    Ok(())
}
