use crate::adb::shell::{AdbExecutor, ShellOutput};
use crate::error::Result;
use crate::library::remote_path::{file_name, join, normalize, parent};
use async_trait::async_trait;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct DeviceFs {
    dirs: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
    executables: BTreeSet<String>,
    // Dangling links: listed, but neither test succeeds on them
    symlinks: BTreeSet<String>,
}

impl DeviceFs {
    fn is_dir(&self, path: &str) -> bool {
        self.dirs.contains(path)
    }

    fn is_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    fn add_dir(&mut self, path: &str) {
        let mut current = normalize(path);
        loop {
            self.dirs.insert(current.clone());
            if current == "/" {
                break;
            }
            current = normalize(&parent(&current));
        }
    }

    fn add_file(&mut self, path: &str, content: Vec<u8>) {
        let path = normalize(path);
        self.add_dir(&parent(&path));
        self.files.insert(path, content);
    }

    fn is_under(path: &str, root: &str) -> bool {
        path == root || path.starts_with(&format!("{}/", root))
    }

    fn remove_tree(&mut self, root: &str) {
        self.dirs.retain(|d| d == "/" || !Self::is_under(d, root));
        self.files.retain(|f, _| !Self::is_under(f, root));
        self.executables.retain(|f| !Self::is_under(f, root));
        self.symlinks.retain(|f| !Self::is_under(f, root));
    }

    fn rebase(path: &str, from: &str, to: &str) -> String {
        normalize(&format!("{}{}", to, &path[from.len()..]))
    }

    fn move_tree(&mut self, from: &str, to: &str) {
        let dirs: Vec<String> = self
            .dirs
            .iter()
            .filter(|d| Self::is_under(d, from))
            .cloned()
            .collect();
        let files: Vec<(String, Vec<u8>)> = self
            .files
            .iter()
            .filter(|(f, _)| Self::is_under(f, from))
            .map(|(f, c)| (f.clone(), c.clone()))
            .collect();

        self.remove_tree(from);
        for dir in dirs {
            self.add_dir(&Self::rebase(&dir, from, to));
        }
        for (file, content) in files {
            self.add_file(&Self::rebase(&file, from, to), content);
        }
    }

    fn children(&self, dir: &str) -> Vec<String> {
        let is_child = |p: &String| p != "/" && normalize(&parent(p)) == dir;
        let name = |p: &String| file_name(p).unwrap_or_default();

        let mut lines = Vec::new();
        for d in self.dirs.iter().filter(|p| is_child(*p)) {
            lines.push(format!("{}/", name(d)));
        }
        for f in self.files.keys().filter(|p| is_child(*p)) {
            if self.executables.contains(f) {
                lines.push(format!("{}*", name(f)));
            } else {
                lines.push(name(f));
            }
        }
        for l in self.symlinks.iter().filter(|p| is_child(*p)) {
            lines.push(format!("{}@", name(l)));
        }
        lines
    }
}

fn ok(stdout: impl Into<String>) -> ShellOutput {
    ShellOutput {
        stdout: stdout.into(),
        stderr: String::new(),
        exit_code: 0,
    }
}

fn fail(stderr: impl Into<String>) -> ShellOutput {
    ShellOutput {
        stdout: String::new(),
        stderr: stderr.into(),
        exit_code: 1,
    }
}

/// In-memory Android device that understands the adb invocations the
/// browser issues, and records each of them.
pub struct MockAdb {
    fs: Mutex<DeviceFs>,
    denied: BTreeSet<String>,
    calls: Mutex<Vec<Vec<String>>>,
    line_ending: &'static str,
}

impl MockAdb {
    pub fn new() -> Self {
        let mut fs = DeviceFs::default();
        fs.add_dir("/");
        Self {
            fs: Mutex::new(fs),
            denied: BTreeSet::new(),
            calls: Mutex::new(Vec::new()),
            line_ending: "\n",
        }
    }

    pub fn with_dir(self, path: &str) -> Self {
        self.fs.lock().unwrap().add_dir(path);
        self
    }

    pub fn with_file(self, path: &str, content: &[u8]) -> Self {
        self.fs.lock().unwrap().add_file(path, content.to_vec());
        self
    }

    pub fn with_executable(self, path: &str) -> Self {
        {
            let mut fs = self.fs.lock().unwrap();
            fs.add_file(path, b"#!/system/bin/sh\n".to_vec());
            fs.executables.insert(normalize(path));
        }
        self
    }

    pub fn with_broken_symlink(self, path: &str) -> Self {
        {
            let mut fs = self.fs.lock().unwrap();
            fs.add_dir(&parent(path));
            fs.symlinks.insert(normalize(path));
        }
        self
    }

    /// Deny access to `path` and everything below it.
    pub fn with_denied(mut self, path: &str) -> Self {
        self.denied.insert(normalize(path));
        self
    }

    /// Terminate listing lines with `\r\n`, as older adb shells do.
    pub fn with_crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Every invocation so far, including any `-s <serial>` prefix.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Invocations whose first non-device argument is `verb`, for shell
    /// calls the verb is the remote command (`ls`, `mv`, `[`...).
    pub fn calls_to(&self, verb: &str) -> Vec<Vec<String>> {
        self.calls()
            .into_iter()
            .filter(|call| {
                let args = Self::strip_device(call);
                match args.first().map(String::as_str) {
                    Some("shell") => args.get(1).map(String::as_str) == Some(verb),
                    Some(first) => first == verb,
                    None => false,
                }
            })
            .collect()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn has_file(&self, path: &str) -> bool {
        self.fs.lock().unwrap().is_file(&normalize(path))
    }

    pub fn has_dir(&self, path: &str) -> bool {
        self.fs.lock().unwrap().is_dir(&normalize(path))
    }

    pub fn file_content(&self, path: &str) -> Option<Vec<u8>> {
        self.fs.lock().unwrap().files.get(&normalize(path)).cloned()
    }

    fn strip_device(args: &[String]) -> &[String] {
        if args.first().map(String::as_str) == Some("-s") && args.len() >= 2 {
            &args[2..]
        } else {
            args
        }
    }

    fn is_denied(&self, path: &str) -> bool {
        self.denied.iter().any(|d| DeviceFs::is_under(path, d))
    }

    fn shell(&self, words: &[String]) -> ShellOutput {
        let words: Vec<String> = words.iter().map(|w| shell_unquote(w)).collect();
        let words: Vec<&str> = words.iter().map(String::as_str).collect();
        match words.as_slice() {
            ["ls", dir, flags @ ..] => self.ls(dir, flags.contains(&"-A")),
            ["[", "-f", path, "]"] => self.test(path, |fs, p| fs.is_file(p)),
            ["[", "-d", path, "]"] => self.test(path, |fs, p| fs.is_dir(p)),
            ["mv", src, dst] => self.transfer("mv", src, dst, true),
            ["cp", src, dst] => self.transfer("cp", src, dst, false),
            ["rm", "-rf", path] => self.rm(path),
            other => fail(format!(
                "/system/bin/sh: {}: inaccessible or not found\n",
                other.join(" ")
            )),
        }
    }

    fn ls(&self, dir: &str, all: bool) -> ShellOutput {
        let dir = normalize(dir);
        if self.is_denied(&dir) {
            return fail(format!("ls: {}: Permission denied\n", dir));
        }
        let fs = self.fs.lock().unwrap();
        if fs.is_file(&dir) {
            return ok(format!("{}{}", dir, self.line_ending));
        }
        if !fs.is_dir(&dir) {
            return fail(format!("ls: {}: No such file or directory\n", dir));
        }

        let stdout: String = fs
            .children(&dir)
            .into_iter()
            .filter(|line| all || !line.starts_with('.'))
            .map(|line| format!("{}{}", line, self.line_ending))
            .collect();
        ok(stdout)
    }

    fn test(&self, path: &str, check: impl Fn(&DeviceFs, &str) -> bool) -> ShellOutput {
        let path = normalize(path);
        let fs = self.fs.lock().unwrap();
        if !self.is_denied(&path) && check(&fs, &path) {
            ok("")
        } else {
            fail("")
        }
    }

    fn transfer(&self, verb: &str, src: &str, dst: &str, remove_source: bool) -> ShellOutput {
        let (src, dst) = (normalize(src), normalize(dst));
        if self.is_denied(&src) || self.is_denied(&dst) {
            return fail(format!("{}: {}: Permission denied\n", verb, dst));
        }

        let mut fs = self.fs.lock().unwrap();
        let target = if fs.is_dir(&dst) {
            join(&dst, &file_name(&src).unwrap_or_default())
        } else {
            dst
        };

        if fs.is_file(&src) {
            let content = fs.files.get(&src).cloned().unwrap_or_default();
            if remove_source {
                fs.remove_tree(&src);
            }
            fs.add_file(&target, content);
            ok("")
        } else if fs.is_dir(&src) {
            if !remove_source {
                return fail(format!("cp: Skipped dir '{}'\n", src));
            }
            fs.move_tree(&src, &target);
            ok("")
        } else {
            fail(format!("{}: {}: No such file or directory\n", verb, src))
        }
    }

    fn rm(&self, path: &str) -> ShellOutput {
        let path = normalize(path);
        if self.is_denied(&path) {
            return fail(format!("rm: {}: Permission denied\n", path));
        }
        self.fs.lock().unwrap().remove_tree(&path);
        ok("")
    }

    fn push(&self, local: &str, remote: &str) -> ShellOutput {
        let local = PathBuf::from(local);
        let remote = normalize(remote);
        if self.is_denied(&remote) {
            return fail(format!(
                "adb: error: failed to copy '{}' to '{}': remote Permission denied\n",
                local.display(),
                remote
            ));
        }

        let base = local
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut fs = self.fs.lock().unwrap();

        if local.is_file() {
            let target = if fs.is_dir(&remote) {
                join(&remote, &base)
            } else {
                remote
            };
            match std::fs::read(&local) {
                Ok(content) => {
                    fs.add_file(&target, content);
                    ok(format!("{}: 1 file pushed.\n", local.display()))
                }
                Err(e) => fail(format!("adb: error: {}\n", e)),
            }
        } else if local.is_dir() {
            let root = join(&remote, &base);
            for entry in walkdir::WalkDir::new(&local).into_iter().flatten() {
                let relative = entry.path().strip_prefix(&local).unwrap_or(entry.path());
                let target = join(&root, &relative.to_string_lossy());
                if entry.file_type().is_dir() {
                    fs.add_dir(&target);
                } else if let Ok(content) = std::fs::read(entry.path()) {
                    fs.add_file(&target, content);
                }
            }
            ok(format!("{}: pushed.\n", local.display()))
        } else {
            fail(format!(
                "adb: error: cannot stat '{}': No such file or directory\n",
                local.display()
            ))
        }
    }

    fn pull(&self, remote: &str, local: &str) -> ShellOutput {
        let remote = normalize(remote);
        let local = PathBuf::from(local);
        if self.is_denied(&remote) {
            return fail(format!(
                "adb: error: failed to stat remote object '{}': Permission denied\n",
                remote
            ));
        }

        let fs = self.fs.lock().unwrap();
        let base = file_name(&remote).unwrap_or_default();
        let dest = if local.is_dir() { local.join(&base) } else { local };

        let written = if fs.is_file(&remote) {
            write_local(&dest, fs.files.get(&remote).map(Vec::as_slice).unwrap_or_default())
        } else if fs.is_dir(&remote) {
            let mut result = std::fs::create_dir_all(&dest);
            for (path, content) in fs.files.iter().filter(|(p, _)| DeviceFs::is_under(p, &remote)) {
                let relative = path[remote.len()..].trim_start_matches('/');
                if result.is_ok() {
                    result = write_local(&dest.join(relative), content);
                }
            }
            result
        } else {
            return fail(format!(
                "adb: error: failed to stat remote object '{}': No such file or directory\n",
                remote
            ));
        };

        match written {
            Ok(()) => ok(format!("{}: 1 file pulled.\n", remote)),
            Err(e) => fail(format!("adb: error: {}\n", e)),
        }
    }
}

fn write_local(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, content)
}

impl Default for MockAdb {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AdbExecutor for MockAdb {
    async fn execute(&self, args: &[String]) -> Result<ShellOutput> {
        self.calls.lock().unwrap().push(args.to_vec());

        let output = match Self::strip_device(args) {
            [verb, rest @ ..] if verb == "shell" => self.shell(rest),
            [verb, local, remote] if verb == "push" => self.push(local, remote),
            [verb, remote, local] if verb == "pull" => self.pull(remote, local),
            other => fail(format!("adb: unknown command {}\n", other.join(" "))),
        };
        Ok(output)
    }
}

/// Inverse of [`shell_quote`](crate::library::quote::shell_quote). Input
/// without surrounding quotes is returned as is.
fn shell_unquote(arg: &str) -> String {
    let inner = match arg.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        Some(inner) => inner,
        None => return arg.to_string(),
    };

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::quote::shell_quote;

    #[test]
    fn test_unquote_reverses_quote() {
        for path in ["/sdcard/My Photos", "a\"b", "$x`y`\\z", ""] {
            assert_eq!(shell_unquote(&shell_quote(path)), path);
        }
        assert_eq!(shell_unquote("-F"), "-F");
    }
}
