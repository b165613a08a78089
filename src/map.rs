use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter distinguishing pages created within one process.
static PAGE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Placeholder markup shown while the map is being generated. The refresh
/// tag makes the browser pick up the final document once it is written.
const PLACEHOLDER: &str = "<!doctype html>\n<html>\n<head>\n<meta http-equiv=\"refresh\" content=\"1\">\n<title>Disaster Map</title>\n</head>\n<body>\n<p>Generating disaster map...</p>\n</body>\n</html>\n";

/// A browser page acquired synchronously ahead of an asynchronous result.
///
/// Popup policies mean a browser tab must be opened in direct response to
/// the user gesture, before any network awaits. This models the same
/// handoff: create the placeholder file (and hand it to the browser)
/// synchronously, then either publish the generated markup into it or
/// release it. Dropping an unpublished page removes the file.
#[derive(Debug)]
pub struct SpeculativePage {
    path: PathBuf,
    published: bool,
}

impl SpeculativePage {
    /// Create the placeholder page on disk. Must be called before the
    /// map request is dispatched.
    pub fn create() -> io::Result<Self> {
        let seq = PAGE_SEQ.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "crisistui-map-{}-{seq}.html",
            std::process::id()
        ));
        fs::write(&path, PLACEHOLDER)?;
        Ok(Self {
            path,
            published: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the final markup into the page. After this the file is final
    /// and survives the handle.
    pub fn publish(mut self, markup: &str) -> io::Result<PathBuf> {
        fs::write(&self.path, markup)?;
        self.published = true;
        Ok(self.path.clone())
    }

    /// Release the page without publishing, removing the file.
    pub fn discard(self) {
        // Drop does the cleanup.
    }
}

impl Drop for SpeculativePage {
    fn drop(&mut self) {
        if !self.published {
            let _ = fs::remove_file(&self.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_writes_placeholder_before_resolution() {
        let page = SpeculativePage::create().unwrap();
        let contents = fs::read_to_string(page.path()).unwrap();
        assert!(contents.contains("Generating disaster map"));
        page.discard();
    }

    #[test]
    fn publish_replaces_placeholder_and_survives_drop() {
        let page = SpeculativePage::create().unwrap();
        let path = page.publish("<html>X</html>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html>X</html>");
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn discard_removes_the_file() {
        let page = SpeculativePage::create().unwrap();
        let path = page.path().to_path_buf();
        page.discard();
        assert!(!path.exists());
    }

    #[test]
    fn dropping_unpublished_page_removes_the_file() {
        let path = {
            let page = SpeculativePage::create().unwrap();
            page.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn pages_get_distinct_paths() {
        let a = SpeculativePage::create().unwrap();
        let b = SpeculativePage::create().unwrap();
        assert_ne!(a.path(), b.path());
    }
}
