use std::{env, net::SocketAddr, path::PathBuf};

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub listen_addr: SocketAddr,
    pub data_root: PathBuf,
    pub fragments_root: PathBuf,
    pub geocoder_url: String,
    pub raster_binary: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let listen_addr: SocketAddr = env::var("APP_LISTEN_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|err| AppError::Config(format!("invalid APP_LISTEN_ADDR: {err}")))?;

        let data_root = env::var("DATA_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data"));

        let fragments_root = env::var("FRAGMENTS_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("fragments"));

        let geocoder_url = env::var("GEOCODER_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string());

        let raster_binary = env::var("RASTER_BINARY")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("wkhtmltoimage"));

        Ok(Self {
            listen_addr,
            data_root,
            fragments_root,
            geocoder_url,
            raster_binary,
        })
    }
}
