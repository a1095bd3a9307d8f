//! Icon lookup for result items
//!
//! Icons are cosmetic: a failed lookup never drops an item.

use std::path::Path;

/// Resolves icon references to something the UI can load
pub trait IconResolver: Send + Sync {
    /// Resolve an application icon reference (theme name or absolute path)
    fn resolve_app_icon(&self, reference: &str) -> Option<String>;

    /// Pick an icon for a file
    fn resolve_file_icon(&self, path: &Path) -> Option<String>;
}

/// Freedesktop icon names chosen from the guessed MIME type
#[derive(Debug, Clone, Copy, Default)]
pub struct MimeIconResolver;

impl MimeIconResolver {
    pub fn new() -> Self {
        Self
    }
}

impl IconResolver for MimeIconResolver {
    fn resolve_app_icon(&self, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() {
            return None;
        }

        let path = Path::new(reference);
        if path.is_absolute() {
            return path.exists().then(|| reference.to_string());
        }

        Some(reference.to_string())
    }

    fn resolve_file_icon(&self, path: &Path) -> Option<String> {
        let icon = match mime_guess::from_path(path).first() {
            Some(mime) => icon_for_mime(mime.type_().as_str(), mime.subtype().as_str()),
            None => FALLBACK_ICON.to_string(),
        };
        Some(icon)
    }
}

/// Icon for files whose type cannot be guessed
const FALLBACK_ICON: &str = "text-x-generic";

/// Map a MIME type to a freedesktop icon name.
///
/// A handful of subtypes have dedicated icons; everything else gets the
/// generic icon of its top-level type.
fn icon_for_mime(top: &str, sub: &str) -> String {
    let specific = match (top, sub) {
        ("application", "pdf") => Some("application-pdf"),
        ("text", "html") => Some("text-html"),
        (
            "application",
            "zip" | "gzip" | "x-gzip" | "x-tar" | "x-bzip" | "x-bzip2" | "x-xz" | "zstd"
            | "x-7z-compressed" | "vnd.rar" | "x-rar-compressed",
        ) => Some("package-x-generic"),
        ("application", "x-sh" | "x-csh" | "x-perl" | "x-ruby" | "x-python")
        | ("text", "x-python" | "x-shellscript" | "x-perl" | "x-ruby") => Some("text-x-script"),
        _ => None,
    };

    match specific {
        Some(name) => name.to_string(),
        None => format!("{}-x-generic", top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_icon(path: &str) -> Option<String> {
        MimeIconResolver::new().resolve_file_icon(Path::new(path))
    }

    #[test]
    fn test_file_icons_by_type() {
        assert_eq!(file_icon("/x/Photo.JPG").as_deref(), Some("image-x-generic"));
        assert_eq!(file_icon("/x/manual.pdf").as_deref(), Some("application-pdf"));
        assert_eq!(file_icon("/x/README").as_deref(), Some("text-x-generic"));
    }

    #[test]
    fn test_less_common_types_use_top_level_icon() {
        assert_eq!(file_icon("/x/a.heic").as_deref(), Some("image-x-generic"));
        assert_eq!(file_icon("/x/a.tiff").as_deref(), Some("image-x-generic"));
        assert_eq!(file_icon("/x/a.aac").as_deref(), Some("audio-x-generic"));
        assert_eq!(file_icon("/x/a.m4v").as_deref(), Some("video-x-generic"));
        assert_eq!(file_icon("/x/a.bz2").as_deref(), Some("package-x-generic"));
    }

    #[test]
    fn test_icon_for_mime() {
        assert_eq!(icon_for_mime("audio", "flac"), "audio-x-generic");
        assert_eq!(icon_for_mime("application", "zip"), "package-x-generic");
        assert_eq!(icon_for_mime("application", "json"), "application-x-generic");
    }

    #[test]
    fn test_app_icons() {
        let resolver = MimeIconResolver::new();
        assert_eq!(resolver.resolve_app_icon("firefox").as_deref(), Some("firefox"));
        assert_eq!(resolver.resolve_app_icon("  "), None);
        assert_eq!(resolver.resolve_app_icon("/definitely/not/here.png"), None);
    }
}
