//! Developer tasks for the workspace, invoked as `cargo run -p xtask -- <task>`.

use std::{ffi::OsString, process::Command};

use anyhow::{Context, Result, ensure};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace development tasks")]
struct Cli {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Remove ignored build artifacts with git clean.
    Clean {
        /// Show what would be removed without removing anything.
        #[arg(long)]
        dry_run: bool,
        /// Also remove local environment and editor files.
        #[arg(long)]
        all: bool,
    },
    /// Check formatting and run clippy over the workspace.
    Lint,
    /// Run the full workspace test suite.
    Test,
    /// Build API documentation.
    Doc {
        /// Open the docs in a browser afterwards.
        #[arg(long)]
        open: bool,
    },
}

fn main() -> Result<()> {
    match Cli::parse().task {
        Task::Clean { dry_run, all } => clean(dry_run, all),
        Task::Lint => lint(),
        Task::Test => test(),
        Task::Doc { open } => doc(open),
    }
}

fn clean(dry_run: bool, all: bool) -> Result<()> {
    let mut args: Vec<Arg> = vec!["clean".into(), "--force".into()];
    if dry_run {
        args.push("--dry-run".into());
    }
    if !all {
        args.push(exclude(".env*"));
        args.push(exclude(".vscode"));
    }
    args.push(["-X".into(), ".".into()].into());
    run("git", args)
}

fn exclude(pattern: &str) -> Arg {
    // A `!` prefix re-includes the pattern, i.e. keeps matching files.
    Arg::from(format!("--exclude=!{pattern}"))
}

fn lint() -> Result<()> {
    run("cargo", ["fmt".into(), "--all".into(), "--check".into()])?;
    run(
        "cargo",
        [
            "clippy".into(),
            ["--workspace".into(), "--all-targets".into()].into(),
            ["--".into(), "-D".into(), "warnings".into()].into(),
        ],
    )
}

fn test() -> Result<()> {
    run("cargo", ["test".into(), "--workspace".into()])
}

fn doc(open: bool) -> Result<()> {
    let mut args: Vec<Arg> = vec!["doc".into(), "--no-deps".into()];
    if open {
        args.push("--open".into());
    }
    run("cargo", args)
}

// ---------------------------------------------------------------------------
// Argument flattening and subprocess plumbing
// ---------------------------------------------------------------------------

/// One command-line argument, or a group flattened in order.
enum Arg {
    One(OsString),
    Group(Vec<Arg>),
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::One(value.into())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::One(value.into())
    }
}

impl<const N: usize> From<[Arg; N]> for Arg {
    fn from(group: [Arg; N]) -> Self {
        Arg::Group(group.into())
    }
}

fn flatten(args: impl IntoIterator<Item = Arg>, flat: &mut Vec<OsString>) {
    for arg in args {
        match arg {
            Arg::One(value) => flat.push(value),
            Arg::Group(group) => flatten(group, flat),
        }
    }
}

fn run(program: &str, args: impl IntoIterator<Item = Arg>) -> Result<()> {
    let mut flat = Vec::new();
    flatten(args, &mut flat);

    let rendered = flat
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join(" ");
    eprintln!("$ {program} {rendered}");

    let status = Command::new(program)
        .args(&flat)
        .status()
        .with_context(|| format!("failed to launch {program}"))?;
    ensure!(status.success(), "{program} exited with {status}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_flatten_in_order() {
        let mut flat = Vec::new();
        flatten(
            [
                "a".into(),
                [
                    "b".into(),
                    ["c".into()].into(),
                ]
                .into(),
                "d".into(),
            ],
            &mut flat,
        );
        assert_eq!(flat, ["a", "b", "c", "d"].map(OsString::from));
    }
}
