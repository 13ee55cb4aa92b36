//! End-to-end sessions over the built-in tree and small snapshots.

use std::io::Cursor;

use vfs_shell::fs::parse_snapshot;
use vfs_shell::repl::{run_script, ScriptOutcome};
use vfs_shell::{ErrorKind, ExecOutcome, Shell, ShellOptions};

fn out(shell: &mut Shell, line: &str) -> String {
    match shell.exec(line) {
        Ok(ExecOutcome::Output(text)) => text,
        Ok(ExecOutcome::Exit) => panic!("{:?} requested exit", line),
        Err(e) => panic!("{:?} failed: {}", line, e),
    }
}

fn err_kind(shell: &mut Shell, line: &str) -> ErrorKind {
    shell.exec(line).expect_err(line).kind()
}

fn shell_from(json: &str) -> Shell {
    Shell::new(ShellOptions {
        tree: Some(parse_snapshot(json).unwrap()),
        ..Default::default()
    })
}

#[test]
fn builtin_tree_walkthrough() {
    let mut shell = Shell::default();

    assert_eq!(out(&mut shell, "ls etc"), "- root config");

    out(&mut shell, "cd home/alice");
    assert_eq!(out(&mut shell, "cat notes.txt"), "These are Alice's notes\nLine2\n");

    out(&mut shell, "cd");
    out(&mut shell, "chown bob readme.txt");
    let listing = out(&mut shell, "ls");
    assert_eq!(listing, "d root etc\nd root home\n- bob readme.txt");

    assert_eq!(err_kind(&mut shell, "rmdir home"), ErrorKind::NotEmpty);
    assert_eq!(err_kind(&mut shell, "rmdir home/alice"), ErrorKind::NotEmpty);
    assert_eq!(out(&mut shell, "ls home"), "d alice alice");
}

#[test]
fn cd_round_trip_restores_path() {
    let mut shell = Shell::default();
    for dir in ["etc", "home"] {
        let before = shell.state().cwd().to_vec();
        out(&mut shell, &format!("cd {}", dir));
        out(&mut shell, "cd ..");
        assert_eq!(shell.state().cwd(), before.as_slice());
    }

    out(&mut shell, "cd home");
    let before = shell.state().cwd().to_vec();
    out(&mut shell, "cd alice");
    out(&mut shell, "cd ..");
    assert_eq!(shell.state().cwd(), before.as_slice());

    out(&mut shell, "cd /");
    out(&mut shell, "cd ..");
    assert_eq!(shell.state().cwd_display(), "/");
}

#[test]
fn cat_and_ls_on_directory() {
    let mut shell = Shell::default();
    assert_eq!(err_kind(&mut shell, "cat home"), ErrorKind::IsADirectory);
    assert_eq!(out(&mut shell, "ls home"), "d alice alice");
}

#[test]
fn head_counts() {
    let mut shell = Shell::default();
    assert_eq!(out(&mut shell, "head -n 2 /home/alice/notes.txt"), "These are Alice's notes\nLine2");
    assert_eq!(out(&mut shell, "head -n 1 /home/alice/notes.txt"), "These are Alice's notes");
    assert_eq!(out(&mut shell, "head readme.txt"), "Welcome to VFS emulator");
    assert_eq!(err_kind(&mut shell, "head -n two readme.txt"), ErrorKind::InvalidArgument);
    assert_eq!(err_kind(&mut shell, "head"), ErrorKind::MissingOperand);
}

#[test]
fn rmdir_empty_directory_from_snapshot() {
    let mut shell = shell_from(
        r#"{"type": "dir", "name": "root", "children": [
            {"type": "dir", "name": "home", "children": [
                {"type": "dir", "name": "alice", "owner": "alice"}]}]}"#,
    );
    assert_eq!(err_kind(&mut shell, "rmdir home"), ErrorKind::NotEmpty);
    assert_eq!(out(&mut shell, "rmdir home/alice"), "");
    assert_eq!(out(&mut shell, "ls home"), "");
    assert_eq!(out(&mut shell, "rmdir home"), "");
    assert_eq!(out(&mut shell, "ls"), "");
    assert_eq!(err_kind(&mut shell, "rmdir /"), ErrorKind::CannotRemoveRoot);
    assert_eq!(err_kind(&mut shell, "rmdir ."), ErrorKind::CannotRemoveRoot);
}

#[test]
fn startup_script_session() {
    let mut shell = Shell::new(ShellOptions {
        name: Some("demo".to_string()),
        user: Some("alice".to_string()),
        ..Default::default()
    });
    let script = "whoami\ncd /home/alice\nls\nexit\nls /\n";
    let mut buf = Vec::new();
    let outcome = run_script(&mut shell, Cursor::new(script), &mut buf).unwrap();
    assert_eq!(outcome, ScriptOutcome::Exited);
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "demo:/$ whoami\nalice\n\
         demo:/$ cd /home/alice\n\
         demo:/home/alice$ ls\n- alice notes.txt\n\
         demo:/home/alice$ exit\n"
    );
}
