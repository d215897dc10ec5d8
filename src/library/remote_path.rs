//! Lexical POSIX path handling for paths on the device.
//!
//! Nothing here touches the device: `..` is resolved textually and a path
//! that climbs above `/` stays at `/`.

/// Collapse a path into absolute form with no empty, `.` or `..` segments
/// and no trailing separator. Relative input is taken relative to `/`.
pub fn normalize(raw: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    format!("/{}", segments.join("/"))
}

/// Join `name` onto `base`. An absolute `name` replaces `base`.
pub fn join(base: &str, name: &str) -> String {
    if name.starts_with('/') {
        normalize(name)
    } else {
        normalize(&format!("{}/{}", base, name))
    }
}

/// Directory form of a normalized path: one trailing `/` unless root.
pub fn as_directory(path: &str) -> String {
    let normalized = normalize(path);
    if normalized == "/" {
        normalized
    } else {
        format!("{}/", normalized)
    }
}

/// Parent directory, in directory form. The parent of `/` is `/`.
pub fn parent(path: &str) -> String {
    let normalized = normalize(path);
    match normalized.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(idx) => format!("{}/", &normalized[..idx]),
    }
}

/// Last component, or `None` for the root.
pub fn file_name(path: &str) -> Option<String> {
    let normalized = normalize(path);
    normalized
        .rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .map(String::from)
}
