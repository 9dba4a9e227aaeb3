// Theme orchestrator: expands the cursor catalog across the resolution
// table (and frame indices for the animated cursors) and hands every
// rendered surface to the PNG writer. A failed asset is logged and skipped;
// it never takes the batch down with it.

use anyhow::Result;
use image::RgbaImage;
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

use super::png_writer::write_png;
use crate::config::{RenderConfig, Resolution};
use crate::error::RenderError;
use crate::render::scale::Scale;
use crate::shapes::{Animation, Frame, Shape};

#[derive(Debug, Clone)]
pub enum RenderJob {
    Static {
        shape: Shape,
        resolution: Resolution,
    },
    Animated {
        animation: Animation,
        frame: Frame,
        resolution: Resolution,
    },
}

impl RenderJob {
    fn resolution(&self) -> &Resolution {
        match self {
            RenderJob::Static { resolution, .. } => resolution,
            RenderJob::Animated { resolution, .. } => resolution,
        }
    }

    /// Output path relative to the theme root. Animated frames are numbered
    /// with a two-digit, 1-indexed suffix.
    pub fn relative_path(&self) -> PathBuf {
        match self {
            RenderJob::Static { shape, resolution } => {
                PathBuf::from(&resolution.label).join(format!("{}.png", shape.name()))
            }
            RenderJob::Animated {
                animation,
                frame,
                resolution,
            } => PathBuf::from(&resolution.label).join(format!(
                "{}-{:02}.png",
                animation.name(),
                frame.index() + 1
            )),
        }
    }

    pub fn render(&self, config: &RenderConfig) -> Result<RgbaImage, RenderError> {
        let scale = Scale::new(self.resolution().pixels as i32)?;
        Ok(match self {
            RenderJob::Static { shape, .. } => shape.render(&scale, config),
            RenderJob::Animated {
                animation, frame, ..
            } => animation.render_frame(&scale, config, *frame),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeSummary {
    pub written: usize,
    pub failed: usize,
}

pub struct ThemeBuilder {
    output_dir: PathBuf,
    config: RenderConfig,
}

impl ThemeBuilder {
    pub fn new<P: Into<PathBuf>>(output_dir: P, config: RenderConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            config,
        }
    }

    /// The full cross-product of catalog entries and resolutions.
    pub fn jobs(&self) -> Vec<RenderJob> {
        let mut jobs = Vec::new();
        for resolution in &self.config.resolutions {
            for shape in Shape::all() {
                jobs.push(RenderJob::Static {
                    shape,
                    resolution: resolution.clone(),
                });
            }
            for animation in Animation::ALL {
                for index in 0..self.config.frame_count {
                    jobs.push(RenderJob::Animated {
                        animation,
                        frame: Frame::new(index, self.config.frame_count),
                        resolution: resolution.clone(),
                    });
                }
            }
        }
        jobs
    }

    fn run_job(&self, job: &RenderJob) -> Result<(), RenderError> {
        let image = job.render(&self.config)?;
        write_png(&image, &self.output_dir.join(job.relative_path()))
    }

    fn tally(&self, results: Vec<(RenderJob, Result<(), RenderError>)>) -> ThemeSummary {
        let mut summary = ThemeSummary::default();
        for (job, result) in results {
            match result {
                Ok(()) => summary.written += 1,
                Err(e) => {
                    warn!("Skipping {}: {e}", job.relative_path().display());
                    summary.failed += 1;
                }
            }
        }
        summary
    }

    pub fn generate(&self) -> Result<ThemeSummary> {
        fs::create_dir_all(&self.output_dir)?;

        let results = self
            .jobs()
            .into_iter()
            .map(|job| {
                let result = self.run_job(&job);
                (job, result)
            })
            .collect();

        let summary = self.tally(results);
        self.write_theme_files()?;
        info!(
            "Generated {} cursor images ({} failed) in {}",
            summary.written,
            summary.failed,
            self.output_dir.display()
        );
        Ok(summary)
    }

    /// Same batch, fanned out over the rayon pool. Every job owns its
    /// surface exclusively, so no coordination is needed beyond collecting
    /// the results.
    pub fn generate_parallel(&self) -> Result<ThemeSummary> {
        fs::create_dir_all(&self.output_dir)?;

        let results = self
            .jobs()
            .into_par_iter()
            .map(|job| {
                let result = self.run_job(&job);
                (job, result)
            })
            .collect();

        let summary = self.tally(results);
        self.write_theme_files()?;
        info!(
            "Generated {} cursor images ({} failed) in {}",
            summary.written,
            summary.failed,
            self.output_dir.display()
        );
        Ok(summary)
    }

    fn write_theme_files(&self) -> Result<()> {
        let index_theme_content = format!(
            "[Icon Theme]\n\
             Name={}\n\
             Comment={} cursor theme\n\
             Inherits=hicolor\n",
            self.config.theme_name, self.config.theme_name
        );

        fs::write(self.output_dir.join("index.theme"), &index_theme_content)?;
        fs::write(self.output_dir.join("cursor.theme"), &index_theme_content)?;

        Ok(())
    }
}
