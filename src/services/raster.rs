use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use tokio::{fs, process::Command};

use crate::error::AppError;

/// Options handed to the rasterization collaborator.
#[derive(Debug, Clone)]
pub struct RasterOptions {
    /// Resolution multiplier for the rendered surface.
    pub scale: u32,
    /// JPEG quality, 0-100.
    pub quality: u8,
    /// Keep going when cross-origin assets referenced by the markup fail to
    /// load, instead of aborting the conversion.
    pub tolerate_remote_failures: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            scale: 2,
            quality: 90,
            tolerate_remote_failures: true,
        }
    }
}

/// DOM-subtree-to-image conversion, used purely as an output sink. The
/// application only ever hands over final markup and receives JPEG bytes.
#[async_trait]
pub trait Rasterizer: Send + Sync {
    async fn rasterize(&self, markup: &str, options: &RasterOptions) -> Result<Vec<u8>, AppError>;
}

/// Production rasterizer shelling out to `wkhtmltoimage`. The markup goes
/// through a temporary directory that is removed when the value drops,
/// whether the conversion succeeded or not.
pub struct WkhtmlRasterizer {
    binary: Arc<PathBuf>,
}

impl WkhtmlRasterizer {
    pub fn new(binary: PathBuf) -> Self {
        Self {
            binary: Arc::new(binary),
        }
    }
}

#[async_trait]
impl Rasterizer for WkhtmlRasterizer {
    async fn rasterize(&self, markup: &str, options: &RasterOptions) -> Result<Vec<u8>, AppError> {
        let workdir = tempfile::tempdir()?;
        let input = workdir.path().join("waybill.html");
        let output = workdir.path().join("waybill.jpg");
        fs::write(&input, markup).await?;

        let mut command = Command::new(self.binary.as_ref());
        command
            .arg("--format")
            .arg("jpg")
            .arg("--quality")
            .arg(options.quality.to_string())
            .arg("--zoom")
            .arg(options.scale.to_string())
            .arg("--quiet");
        if options.tolerate_remote_failures {
            command.arg("--load-error-handling").arg("ignore");
        }
        command.arg(&input).arg(&output);

        let result = command
            .output()
            .await
            .map_err(|err| AppError::Raster(format!("could not run rasterizer: {err}")))?;

        if !result.status.success() {
            return Err(AppError::Raster(format!(
                "rasterizer exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        let bytes = fs::read(&output).await?;
        Ok(bytes)
    }
}
