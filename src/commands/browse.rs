use crate::adb::AdbExecutor;
use crate::browser::{Explorer, RefreshOutcome};
use crate::commands::SubCommand;
use crate::config::Config;
use crate::core::context::CommandContext;
use crate::core::types::{Navigation, OutputFormat};
use crate::error::{ExplorerError, Result};
use crate::output::OutputFormatter;
use async_trait::async_trait;
use log::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const HELP: &str = "\
Commands:
  ls                    list the current directory
  cd NAME               enter a directory (.. goes up, /path jumps)
  up                    go to the parent directory
  go PATH               jump to an absolute path
  pwd                   print the current directory
  open NAME             download a file and open it locally
  get NAME [LOCAL]      download an entry (default: working directory)
  getdir [LOCAL]        download the current directory
  put LOCAL             upload a file or directory here
  copy NAME | cut NAME  remember an entry for paste
  paste                 copy or move the remembered entry here
  rename NAME NEW       rename an entry
  rm NAME               delete an entry recursively
  hidden [on|off]       show or hide dot files
  refresh               list the current directory again
  help                  show this text
  exit                  leave
Quote arguments that contain spaces: cd \"My Photos\"";

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    List,
    Enter(String),
    Up,
    Go(String),
    Pwd,
    Open(String),
    Get(String, Option<PathBuf>),
    GetDir(Option<PathBuf>),
    Put(PathBuf),
    Copy(String),
    Cut(String),
    Paste,
    Rename(String, String),
    Remove(String),
    Hidden(Option<bool>),
    Refresh,
    Help,
    Exit,
}

/// Split a line on whitespace, keeping double-quoted runs together.
/// A backslash inside quotes escapes the next character.
pub fn split_args(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quoted = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                quoted = !quoted;
                in_word = true;
            }
            '\\' if quoted => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() && !quoted => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quoted {
        return Err(ExplorerError::InvalidArgument(
            "Unterminated quote".to_string(),
        ));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

fn local_path(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}

fn parse_switch(raw: &str) -> Result<bool> {
    match raw {
        "on" | "true" | "yes" => Ok(true),
        "off" | "false" | "no" => Ok(false),
        other => Err(ExplorerError::InvalidArgument(format!(
            "Expected on or off, got '{}'",
            other
        ))),
    }
}

/// Parse a command line. Blank lines give `None`.
pub fn parse_action(line: &str) -> Result<Option<Action>> {
    let words = split_args(line)?;
    let Some((verb, rest)) = words.split_first() else {
        return Ok(None);
    };
    let rest: Vec<&str> = rest.iter().map(String::as_str).collect();

    let action = match (verb.as_str(), rest.as_slice()) {
        ("ls", []) => Action::List,
        ("cd", [".."]) | ("up", []) => Action::Up,
        ("cd", [name]) if name.starts_with('/') => Action::Go(name.to_string()),
        ("cd", [name]) => Action::Enter(name.to_string()),
        ("go", [path]) => Action::Go(path.to_string()),
        ("pwd", []) => Action::Pwd,
        ("open", [name]) => Action::Open(name.to_string()),
        ("get", [name]) => Action::Get(name.to_string(), None),
        ("get", [name, local]) => Action::Get(name.to_string(), Some(local_path(local))),
        ("getdir", []) => Action::GetDir(None),
        ("getdir", [local]) => Action::GetDir(Some(local_path(local))),
        ("put", [local]) => Action::Put(local_path(local)),
        ("copy", [name]) => Action::Copy(name.to_string()),
        ("cut", [name]) => Action::Cut(name.to_string()),
        ("paste", []) => Action::Paste,
        ("rename", [name, new_name]) => Action::Rename(name.to_string(), new_name.to_string()),
        ("rm", [name]) => Action::Remove(name.to_string()),
        ("hidden", []) => Action::Hidden(None),
        ("hidden", [switch]) => Action::Hidden(Some(parse_switch(switch)?)),
        ("refresh", []) => Action::Refresh,
        ("help", _) | ("?", _) => Action::Help,
        ("exit", []) | ("quit", []) => Action::Exit,
        (verb, _) => {
            return Err(ExplorerError::InvalidArgument(format!(
                "Unknown command or wrong arguments: {} (try help)",
                verb
            )))
        }
    };
    Ok(Some(action))
}

enum Flow {
    Continue,
    Exit,
}

/// Line-oriented front end over an [`Explorer`]
pub struct Repl<E> {
    explorer: Explorer<E>,
    formatter: OutputFormatter,
}

impl<E: AdbExecutor> Repl<E> {
    pub fn new(explorer: Explorer<E>, formatter: OutputFormatter) -> Self {
        Self {
            explorer,
            formatter,
        }
    }

    pub fn explorer(&self) -> &Explorer<E> {
        &self.explorer
    }

    pub fn into_explorer(self) -> Explorer<E> {
        self.explorer
    }

    /// List the root, then jump to `start` if given. A bad start path is
    /// reported, not fatal.
    pub async fn start<W: Write + Send>(&mut self, start: Option<&str>, out: &mut W) -> Result<()> {
        let outcome = self.explorer.refresh().await?;
        self.report_refresh(outcome)?;

        if let Some(path) = start {
            match self.explorer.go_absolute(path).await {
                Ok(Navigation::NotFound(target)) => {
                    self.formatter
                        .warning(&format!("{} was not found, starting at /", target))?;
                }
                Ok(Navigation::ResolvedFile(target)) => {
                    self.formatter
                        .warning(&format!("{} is a file, starting at /", target))?;
                }
                Ok(Navigation::EnteredDirectory(_)) => {}
                Err(e) => self.formatter.warning(&e.to_string())?,
            }
        }
        self.print_listing(out)
    }

    /// Read commands until `exit` or end of input. Command failures are
    /// reported and the loop carries on.
    pub async fn run<R: BufRead + Send, W: Write + Send>(
        &mut self,
        mut input: R,
        out: &mut W,
    ) -> Result<()> {
        loop {
            write!(out, "{}> ", self.explorer.current_dir())?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF
                writeln!(out)?;
                break;
            }

            let action = match parse_action(line.trim()) {
                Ok(Some(action)) => action,
                Ok(None) => continue,
                Err(e) => {
                    self.formatter.error(&e.to_string())?;
                    continue;
                }
            };

            match self.dispatch(action, out).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) => {
                    self.formatter.error(&e.to_string())?;
                }
            }
        }
        Ok(())
    }

    async fn dispatch<W: Write + Send>(&mut self, action: Action, out: &mut W) -> Result<Flow> {
        debug!("Browse action: {:?}", action);
        match action {
            Action::List => self.print_listing(out)?,
            Action::Pwd => writeln!(out, "{}", self.explorer.current_dir())?,
            Action::Up => {
                let outcome = self.explorer.up().await?;
                self.report_refresh(outcome)?;
                self.print_listing(out)?;
            }
            Action::Enter(name) => {
                let navigation = self.explorer.enter(&name).await?;
                self.follow(navigation, out).await?;
            }
            Action::Go(path) => {
                let navigation = self.explorer.go_absolute(&path).await?;
                self.follow(navigation, out).await?;
            }
            Action::Open(name) => {
                let local = self.explorer.open_entry(&name).await?;
                self.formatter
                    .info(&format!("Opened {}", local.display()))?;
            }
            Action::Get(name, local) => {
                let local = local.unwrap_or_else(|| PathBuf::from("."));
                self.explorer.download(&name, &local).await?;
                self.formatter
                    .success(&format!("Downloaded {} to {}", name, local.display()))?;
            }
            Action::GetDir(local) => {
                let local = local.unwrap_or_else(|| {
                    let name = self.explorer.current_dir().name();
                    PathBuf::from(name.unwrap_or_else(|| "root".to_string()))
                });
                self.explorer.download_current(&local).await?;
                self.formatter.success(&format!(
                    "Downloaded {} to {}",
                    self.explorer.current_dir(),
                    local.display()
                ))?;
            }
            Action::Put(local) => {
                self.explorer.upload(&local).await?;
                self.formatter.success(&format!(
                    "Uploaded {} to {}",
                    local.display(),
                    self.explorer.current_dir()
                ))?;
            }
            Action::Copy(name) => {
                self.explorer.copy(&name)?;
                self.formatter.info(&format!("Copied {}", name))?;
            }
            Action::Cut(name) => {
                self.explorer.cut(&name)?;
                self.formatter.info(&format!("Cut {}", name))?;
            }
            Action::Paste => {
                if !self.explorer.can_paste() {
                    self.formatter.warning("Nothing to paste")?;
                    return Ok(Flow::Continue);
                }
                self.explorer.paste().await?;
                self.print_listing(out)?;
            }
            Action::Rename(name, new_name) => {
                self.explorer.rename(&name, &new_name).await?;
                self.formatter
                    .success(&format!("Renamed {} to {}", name, new_name))?;
            }
            Action::Remove(name) => {
                self.explorer.delete(&name).await?;
                self.formatter.success(&format!("Deleted {}", name))?;
            }
            Action::Hidden(switch) => {
                let show = switch.unwrap_or(!self.explorer.show_hidden());
                let outcome = self.explorer.set_show_hidden(show).await?;
                self.report_refresh(outcome)?;
                self.print_listing(out)?;
            }
            Action::Refresh => {
                let outcome = self.explorer.refresh().await?;
                self.report_refresh(outcome)?;
                self.print_listing(out)?;
            }
            Action::Help => writeln!(out, "{}", HELP)?,
            Action::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    /// Directories were already entered; files are opened; missing targets
    /// are reported with the directory left as it was.
    async fn follow<W: Write + Send>(&mut self, navigation: Navigation, out: &mut W) -> Result<()> {
        match navigation {
            Navigation::EnteredDirectory(_) => self.print_listing(out),
            Navigation::ResolvedFile(path) => {
                let local = self.explorer.open(&path).await?;
                self.formatter
                    .info(&format!("Opened {}", local.display()))
            }
            Navigation::NotFound(path) => self.formatter.warning(&format!(
                "{} is not a file or directory, or is not accessible",
                path
            )),
        }
    }

    fn report_refresh(&self, outcome: RefreshOutcome) -> Result<()> {
        match outcome {
            RefreshOutcome::Listed => Ok(()),
            RefreshOutcome::FellBack { from, cause } => self.formatter.warning(&format!(
                "Could not list {} ({}), showing {}",
                from,
                cause,
                self.explorer.current_dir()
            )),
        }
    }

    fn print_listing<W: Write>(&self, out: &mut W) -> Result<()> {
        let rendered = self.formatter.render(self.explorer.entries())?;
        if !rendered.is_empty() {
            writeln!(out, "{}", rendered)?;
        }
        Ok(())
    }
}

pub struct BrowseCommand;

#[derive(Debug, Clone)]
pub struct BrowseArgs {
    /// Directory to start in
    pub path: Option<String>,
}

impl BrowseCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowseCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubCommand for BrowseCommand {
    type Args = BrowseArgs;

    async fn run(&self, ctx: &CommandContext, args: Self::Args) -> Result<()> {
        // Listings in the prompt loop are never JSON
        let format = match ctx.output_format {
            OutputFormat::Json => OutputFormat::Plain,
            other => other,
        };
        let explorer = Explorer::new(ctx.adb(), ctx.show_hidden).with_progress(ctx.progress());
        let mut repl = Repl::new(explorer, OutputFormatter::new().with_format(format));
        let mut stdout = io::stdout();

        if let Some(device) = &ctx.device {
            println!(
                "Browsing {} ({}). Type 'help' for commands.",
                device,
                device.connection_label()
            );
        } else {
            println!("Browsing the default device. Type 'help' for commands.");
        }

        repl.start(args.path.as_deref(), &mut stdout).await?;
        let result = repl.run(io::BufReader::new(io::stdin()), &mut stdout).await;

        let show_hidden = repl.into_explorer().shutdown();
        if let Err(e) = Config::persist_show_hidden(show_hidden) {
            warn!("Could not save settings: {}", e);
        }
        result
    }
}
