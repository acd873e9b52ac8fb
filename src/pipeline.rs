//! Reorder orchestration

use crate::config::SortConfig;
use crate::model::Playlist;
use crate::sort::{reorder, ReorderPlan};
use anyhow::{Context, Result};

/// Sorts a playlist snapshot in place according to a [`SortConfig`]
pub struct SortPipeline {
    config: SortConfig,
}

impl SortPipeline {
    /// Create a new sort pipeline
    pub fn new(config: SortConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    /// Compute the plan for `playlist` and apply it
    pub fn run(&self, playlist: &mut Playlist) -> Result<ReorderPlan> {
        if let Some(current) = self.config.current {
            playlist
                .set_current_position(current)
                .context("Invalid current position")?;
        }

        log::info!(
            "Sorting {} items by {}",
            playlist.len(),
            self.config.key
        );

        let plan = reorder(playlist.items(), self.config.key, self.config.reset_position);
        playlist
            .apply_plan(&plan)
            .context("Failed to apply reorder plan")?;

        log::info!("Applied {} moves", plan.moves.len());
        if let Some(current) = playlist.current() {
            log::debug!(
                "Current item: {} (position {})",
                current.display_name,
                playlist.current_position().unwrap_or_default()
            );
        }

        Ok(plan)
    }
}
