use std::path::Path;

/// Substituted with the store-assigned id once the insert completes.
pub const LOG_ID_PLACEHOLDER: &str = "{log_id}";

/// Substituted with the written incident file's path once the write completes.
pub const LOG_PATH_PLACEHOLDER: &str = "{log_path}";

/// How a file path is rendered into the acknowledgement message.
///
/// Fixed at logger construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    /// Full absolute path.
    FullPath,
    /// Path relative to the log folder's parent.
    RelPath,
    /// Filename stem only, no directory, no extension.
    #[default]
    FileName,
}

/// Resolve an id-carrying template after the insert completed.
///
/// A template without the placeholder is returned verbatim; otherwise the
/// placeholder is substituted exactly once. A failed insert renders as
/// `None`, mirroring what the operator diagnostics already reported.
pub fn resolve_id(template: &str, id: Option<i64>) -> String {
    let rendered = match id {
        Some(id) => id.to_string(),
        None => "None".to_string(),
    };
    template.replacen(LOG_ID_PLACEHOLDER, &rendered, 1)
}

/// Resolve a path-carrying template after the incident file was written.
pub fn resolve_path(template: &str, path: &Path, folder: &Path, style: PathStyle) -> String {
    let rendered = match style {
        PathStyle::FullPath => path.display().to_string(),
        PathStyle::RelPath => {
            let base = folder.parent().unwrap_or(folder);
            path.strip_prefix(base).unwrap_or(path).display().to_string()
        }
        PathStyle::FileName => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    template.replacen(LOG_PATH_PLACEHOLDER, &rendered, 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn template_without_placeholder_is_verbatim() {
        assert_eq!(resolve_id("all good", Some(7)), "all good");
        assert_eq!(
            resolve_path("done", Path::new("/a/b/c.log"), Path::new("/a/b"), PathStyle::FullPath),
            "done"
        );
    }

    #[test]
    fn id_is_substituted_exactly_once() {
        assert_eq!(
            resolve_id("log {log_id} and {log_id}", Some(3)),
            "log 3 and {log_id}"
        );
        assert_eq!(resolve_id("log {log_id}", None), "log None");
    }

    #[test]
    fn path_styles() {
        let folder = PathBuf::from("/data/logs");
        let path = folder.join("deadbeef.log");

        assert_eq!(
            resolve_path("{log_path}", &path, &folder, PathStyle::FullPath),
            "/data/logs/deadbeef.log"
        );
        assert_eq!(
            resolve_path("{log_path}", &path, &folder, PathStyle::RelPath),
            "logs/deadbeef.log"
        );
        assert_eq!(
            resolve_path("{log_path}", &path, &folder, PathStyle::FileName),
            "deadbeef"
        );
    }
}
