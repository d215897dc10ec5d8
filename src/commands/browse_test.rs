use crate::browser::Explorer;
use crate::commands::browse::{parse_action, split_args, Action, Repl};
use crate::core::types::OutputFormat;
use crate::output::OutputFormatter;
use crate::testing::fixtures;
use crate::testing::MockAdb;
use std::io::Cursor;
use std::path::PathBuf;

fn repl(device: MockAdb) -> Repl<MockAdb> {
    let explorer = Explorer::new(fixtures::runner(device), false);
    let formatter = OutputFormatter::new()
        .with_format(OutputFormat::Plain)
        .with_color(false);
    Repl::new(explorer, formatter)
}

async fn drive(repl: &mut Repl<MockAdb>, script: &str) -> String {
    let mut out = Vec::new();
    repl.start(None, &mut out).await.unwrap();
    repl.run(Cursor::new(script.as_bytes()), &mut out)
        .await
        .unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_split_args_quotes() {
    assert_eq!(split_args("cd  Download ").unwrap(), vec!["cd", "Download"]);
    assert_eq!(
        split_args(r#"rename "my notes.txt" notes.txt"#).unwrap(),
        vec!["rename", "my notes.txt", "notes.txt"]
    );
    assert_eq!(
        split_args(r#"cd "say \"hi\"""#).unwrap(),
        vec!["cd", "say \"hi\""]
    );
    assert_eq!(split_args(r#"cd """#).unwrap(), vec!["cd", ""]);
    assert!(split_args("").unwrap().is_empty());
    assert!(split_args(r#"cd "open"#).is_err());
}

#[test]
fn test_parse_action() {
    assert_eq!(parse_action("   ").unwrap(), None);
    assert_eq!(parse_action("cd ..").unwrap(), Some(Action::Up));
    assert_eq!(
        parse_action("cd /sdcard").unwrap(),
        Some(Action::Go("/sdcard".to_string()))
    );
    assert_eq!(
        parse_action("cd DCIM").unwrap(),
        Some(Action::Enter("DCIM".to_string()))
    );
    assert_eq!(
        parse_action("get a.jpg /tmp/out").unwrap(),
        Some(Action::Get("a.jpg".to_string(), Some(PathBuf::from("/tmp/out"))))
    );
    assert_eq!(parse_action("hidden on").unwrap(), Some(Action::Hidden(Some(true))));
    assert_eq!(parse_action("hidden").unwrap(), Some(Action::Hidden(None)));
    assert!(parse_action("hidden maybe").is_err());
    assert!(parse_action("rename onlyone").is_err());
    assert!(parse_action("frobnicate").is_err());
}

#[test]
fn test_parse_expands_tilde() {
    match parse_action("put ~/photo.jpg").unwrap() {
        Some(Action::Put(path)) => {
            assert!(!path.to_string_lossy().starts_with('~'));
            assert!(path.ends_with("photo.jpg"));
        }
        other => panic!("unexpected action: {:?}", other),
    }
}

#[tokio::test]
async fn test_browse_navigation_script() {
    let mut session = repl(fixtures::phone());
    let out = drive(&mut session, "cd sdcard\ncd Download\npwd\nup\nexit\n").await;

    assert!(out.contains("sdcard/\nsystem/"));
    assert!(out.contains("File1.txt\nfile2.txt\nfile10.txt\nmy notes.txt"));
    assert!(out.contains("/sdcard/Download/> /sdcard/Download/\n"));
    assert_eq!(session.explorer().current_dir().as_str(), "/sdcard/");
}

#[tokio::test]
async fn test_browse_cut_paste_script() {
    let mut session = repl(fixtures::phone());
    drive(
        &mut session,
        "go /sdcard/Download\ncut \"my notes.txt\"\ngo /sdcard/Music\npaste\npaste\n",
    )
    .await;

    let explorer = session.explorer();
    let device = explorer.runner().executor();
    assert!(device.has_file("/sdcard/Music/my notes.txt"));
    assert_eq!(device.calls_to("mv").len(), 1);
    assert!(!explorer.can_paste());
}

#[tokio::test]
async fn test_browse_errors_do_not_end_session() {
    let mut session = repl(fixtures::phone());
    drive(
        &mut session,
        "bogus\ncd nowhere\ngo /sdcard\nrm nothing-here-either\nrename DCIM Music\nhidden on\n",
    )
    .await;

    let explorer = session.explorer();
    assert_eq!(explorer.current_dir().as_str(), "/sdcard/");
    assert!(explorer.show_hidden());
    assert!(explorer.runner().executor().has_dir("/sdcard/DCIM"));
    assert!(explorer.entries().iter().any(|e| e.name == ".nomedia"));
}

#[tokio::test]
async fn test_browse_starts_at_path() {
    let mut session = repl(fixtures::phone());
    let mut out = Vec::new();
    session.start(Some("/sdcard/DCIM"), &mut out).await.unwrap();

    assert_eq!(session.explorer().current_dir().as_str(), "/sdcard/DCIM/");
    assert_eq!(String::from_utf8(out).unwrap(), "Camera/\n");
}
