use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::fs;
use tracing::warn;

/// Shared page chrome loaded from disk. A failed read falls back to an
/// inline block; the page is never rendered without a header or footer and
/// the user sees no error.
#[derive(Clone)]
pub struct Fragments {
    root: Arc<PathBuf>,
}

const FALLBACK_HEADER: &str = r#"<header>
    <div class="header-content">
        <div class="logo">
            <h1>Trip Waybill</h1>
        </div>
    </div>
</header>"#;

const FALLBACK_FOOTER: &str = r#"<footer>
    <div class="footer-bottom">
        <p>&copy; 2025 Waybill Generator. All rights reserved.</p>
    </div>
</footer>"#;

impl Fragments {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    fn root(&self) -> &Path {
        &self.root
    }

    pub async fn header(&self) -> String {
        self.load("header.html", FALLBACK_HEADER).await
    }

    pub async fn footer(&self) -> String {
        self.load("footer.html", FALLBACK_FOOTER).await
    }

    async fn load(&self, name: &str, fallback: &str) -> String {
        match fs::read_to_string(self.root().join(name)).await {
            Ok(markup) => markup,
            Err(err) => {
                warn!("could not load fragment {name}: {err}");
                fallback.to_string()
            }
        }
    }
}
