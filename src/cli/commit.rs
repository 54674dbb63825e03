use std::env;
use std::io::{BufRead, BufReader, Write};

use super::{App, Result};

use chrono::Local;
use clap::{ArgMatches, SubCommand};
use pit::identity::Identity;
use pit::repo::{on_disk::OnDisk, Repo};
use pit::workspace::Workspace;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("commit").about(
        "Record a snapshot of the current directory. \
         Reads the message from the first line of standard input; \
         the author comes from GIT_AUTHOR_NAME and GIT_AUTHOR_EMAIL",
    )
}

pub(crate) fn run(app: &mut App, _args: &ArgMatches) -> Result<()> {
    let work_dir = env::current_dir()?;
    let mut repo = OnDisk::new(&work_dir)?;

    let identity = Identity::from_env()?;

    let mut message = String::new();
    BufReader::new(&mut *app.stdin).read_line(&mut message)?;

    let now = Local::now();
    let now = now.with_timezone(now.offset());

    let workspace = Workspace::new(repo.work_dir());
    let id = repo.commit_workspace(&workspace, &identity, &message, now)?;

    writeln!(
        app,
        "[(root-commit) {}] {}",
        id,
        message.trim_end_matches(&['\n', '\r'][..])
    )?;

    Ok(())
}
