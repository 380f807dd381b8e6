use std::path::{Path, PathBuf};
use include_dir::{include_dir, Dir};
use rocket::{get, State, fs::NamedFile, http::ContentType, Responder};
use crate::config::AppConfig;

static EMBEDDED: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/static");

const INDEX: &str = "index.html";

#[derive(Responder)]
pub enum Asset {
    Disk(NamedFile),
    Embedded((ContentType, &'static [u8])),
}

fn embedded(path: &Path) -> Option<Asset> {
    let file = EMBEDDED.get_file(path).or_else(|| EMBEDDED.get_file(INDEX))?;
    let content_type = file.path()
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ContentType::from_extension)
        .unwrap_or(ContentType::Binary);
    Some(Asset::Embedded((content_type, file.contents())))
}

async fn from_disk(root: &Path, path: &Path) -> Option<Asset> {
    let file_path = root.join(path);
    let target = if file_path.is_file() { file_path } else { root.join(INDEX) };
    NamedFile::open(target).await.ok().map(Asset::Disk)
}

/// Serves the frontend. Unknown paths fall back to `index.html` so client-side
/// routes resolve; `/api` paths never do.
#[get("/<path..>", rank = 20)]
pub async fn spa_handler(path: PathBuf, config: &State<AppConfig>) -> Option<Asset> {
    if path.starts_with("api") {
        return None;
    }
    let path = if path.as_os_str().is_empty() { PathBuf::from(INDEX) } else { path };

    if config.static_dir.is_dir() {
        from_disk(&config.static_dir, &path).await
    } else {
        embedded(&path)
    }
}
