use std::path::PathBuf;

use actix_web::web::Bytes;

use robottrader::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub site_root: PathBuf,
    /// `index.html`, served for every client-side route.
    pub index_html: Bytes,
}

impl AppState {
    pub fn load(config: &ServerConfig) -> std::io::Result<Self> {
        let index = config.site_root.join("index.html");
        let index_html = std::fs::read(&index).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("cannot read {}: {}", index.display(), e),
            )
        })?;

        Ok(Self {
            site_root: config.site_root.clone(),
            index_html: Bytes::from(index_html),
        })
    }
}
