use crate::config::{ColormapTable, Config};
use crate::error::{ColormapError, Result};
use crate::raster::{self, InverseDistance};
use crate::traits::Rasterizer;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputKind {
    Rendered { stops: usize },
    Copied { from: String },
}

#[derive(Debug, Clone)]
pub struct BuiltImage {
    pub name: String,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub kind: OutputKind,
}

/// What a finished build wrote, in write order.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub width: u32,
    pub height: u32,
    pub outputs: Vec<BuiltImage>,
}

pub struct ColormapBuilder {
    config: Config,
    table: ColormapTable,
    rasterizer: Box<dyn Rasterizer>,
}

impl ColormapBuilder {
    pub fn new(config: Config, table: ColormapTable) -> Self {
        Self::with_rasterizer(config, table, Box::new(InverseDistance::default()))
    }

    pub fn with_rasterizer(
        config: Config,
        table: ColormapTable,
        rasterizer: Box<dyn Rasterizer>,
    ) -> Self {
        Self {
            config,
            table,
            rasterizer,
        }
    }

    pub fn table(&self) -> &ColormapTable {
        &self.table
    }

    /// Render every image in table order, then run the copies. Stops at the first error;
    /// files written before it are left in place.
    pub fn build(&self) -> Result<BuildReport> {
        self.table.validate()?;
        let dir = &self.config.output_dir;
        let (width, height) = (self.table.width, self.table.height);
        log::info!(
            "building {} colormaps ({}x{}) into {}",
            self.table.images.len(),
            width,
            height,
            dir.display()
        );

        // Do not create the directory; it is part of the surrounding source tree.
        if !dir.is_dir() {
            return Err(ColormapError::fs(
                dir,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "output directory does not exist",
                ),
            ));
        }

        let pb = if self.config.summary {
            ProgressBar::new(self.table.output_names().len() as u64)
        } else {
            ProgressBar::hidden()
        };
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n[{bar:40.cyan/blue}] {pos}/{len} {percent}%")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▇▆▅▄▃▂▁  "),
        );

        let mut report = BuildReport {
            width,
            height,
            outputs: Vec::new(),
        };

        for image in &self.table.images {
            pb.set_message(format!("Rendering {:<20}", image.name));
            let path = dir.join(&image.name);
            let size_bytes =
                raster::create(self.rasterizer.as_ref(), &path, width, height, &image.stops)?;
            log::debug!("wrote {} ({} bytes)", path.display(), size_bytes);

            report.outputs.push(BuiltImage {
                name: image.name.clone(),
                path,
                size_bytes,
                kind: OutputKind::Rendered {
                    stops: image.stops.len(),
                },
            });
            pb.inc(1);
        }

        for copy in &self.table.copies {
            pb.set_message(format!("Copying {} -> {}", copy.from, copy.to));
            let from = dir.join(&copy.from);
            let to = dir.join(&copy.to);
            let size_bytes = std::fs::copy(&from, &to).map_err(|e| ColormapError::fs(&to, e))?;
            log::debug!("copied {} to {}", from.display(), to.display());

            report.outputs.push(BuiltImage {
                name: copy.to.clone(),
                path: to,
                size_bytes,
                kind: OutputKind::Copied {
                    from: copy.from.clone(),
                },
            });
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(report)
    }
}
