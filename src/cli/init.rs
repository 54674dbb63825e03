use std::io::Write;
use std::path::Path;

use super::{App, Result};

use clap::{Arg, ArgMatches, SubCommand};
use pit::repo::on_disk::OnDisk;

pub(crate) fn subcommand<'a, 'b>() -> clap::App<'a, 'b> {
    SubCommand::with_name("init")
        .about("Create an empty pit repository")
        .arg(
            Arg::with_name("directory")
                .default_value(".")
                .help("The directory to initialize"),
        )
}

pub(crate) fn run(app: &mut App, init_matches: &ArgMatches) -> Result<()> {
    let dir = init_matches.value_of("directory").unwrap_or(".");

    let repo = OnDisk::init(Path::new(dir))?;

    writeln!(
        app,
        "Initialized empty Pit repository in {}",
        repo.work_dir().display()
    )?;

    Ok(())
}
