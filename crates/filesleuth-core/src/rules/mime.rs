/// MIME type guessing from file extensions.
///
/// Pure lookup; file contents are never sniffed. Unknown extensions yield
/// `None`.

/// Guess a MIME type from an extension (with or without the leading dot).
///
/// Extensions are lowercased into a fixed-size stack buffer rather than a
/// `String`; anything longer than 16 bytes has no mapping.
pub fn guess_mime_type(ext: &str) -> Option<&'static str> {
    let bytes = ext.strip_prefix('.').unwrap_or(ext).as_bytes();
    if bytes.is_empty() || bytes.len() > 16 {
        return None;
    }

    let mut lower = [0u8; 16];
    for (dest, &src) in lower.iter_mut().zip(bytes.iter()) {
        *dest = src.to_ascii_lowercase();
    }
    let lower_str = std::str::from_utf8(&lower[..bytes.len()]).ok()?;

    let mime = match lower_str {
        // Text
        "txt" | "text" | "log" | "conf" | "ini" => "text/plain",
        "md" | "markdown" => "text/markdown",
        "csv" => "text/csv",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" | "mjs" => "text/javascript",
        "py" => "text/x-python",
        "c" | "h" => "text/x-c",
        "cpp" | "hpp" | "cc" | "cxx" => "text/x-c++",
        "java" => "text/x-java",
        "sh" | "bash" => "text/x-sh",
        "rtf" => "text/rtf",
        "tsv" => "text/tab-separated-values",
        // Structured data
        "json" => "application/json",
        "xml" => "application/xml",
        "yaml" | "yml" => "application/yaml",
        "toml" => "application/toml",
        "sql" => "application/sql",
        // Documents
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xls" => "application/vnd.ms-excel",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "odt" => "application/vnd.oasis.opendocument.text",
        "epub" => "application/epub+zip",
        // Images
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/vnd.microsoft.icon",
        "tif" | "tiff" => "image/tiff",
        // Audio / video
        "mp3" => "audio/mpeg",
        "wav" => "audio/x-wav",
        "ogg" => "audio/ogg",
        "flac" => "audio/flac",
        "mp4" => "video/mp4",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        // Archives
        "zip" => "application/zip",
        "gz" => "application/gzip",
        "tar" => "application/x-tar",
        "bz2" => "application/x-bzip2",
        "xz" => "application/x-xz",
        "7z" => "application/x-7z-compressed",
        "rar" => "application/vnd.rar",
        // Binaries
        "exe" | "dll" => "application/x-msdownload",
        "wasm" => "application/wasm",
        "bin" => "application/octet-stream",
        _ => return None,
    };
    Some(mime)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_extensions_map_to_mime() {
        assert_eq!(guess_mime_type(".png"), Some("image/png"));
        assert_eq!(guess_mime_type("json"), Some("application/json"));
        assert_eq!(guess_mime_type(".py"), Some("text/x-python"));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(guess_mime_type(".JPG"), Some("image/jpeg"));
        assert_eq!(guess_mime_type("Md"), Some("text/markdown"));
    }

    #[test]
    fn unknown_or_empty_extension_has_no_mime() {
        assert_eq!(guess_mime_type(""), None);
        assert_eq!(guess_mime_type("."), None);
        assert_eq!(guess_mime_type(".unknownext"), None);
        assert_eq!(guess_mime_type(".averyveryverylongextension"), None);
    }
}
