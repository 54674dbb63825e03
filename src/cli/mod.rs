use std::error::Error;
use std::io::{Read, Write};

#[cfg(test)]
use std::ffi::OsString;

use clap::{crate_version, AppSettings, ArgMatches};

mod commit;
mod init;

#[cfg(test)]
mod temp_cwd;

pub(crate) type Result<T> = std::result::Result<T, Box<dyn Error>>;

pub(crate) fn clap_app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("pit")
        .version(crate_version!())
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .setting(AppSettings::VersionlessSubcommands)
        .subcommand(commit::subcommand())
        .subcommand(init::subcommand())
}

pub(crate) struct App<'a> {
    pub arg_matches: ArgMatches<'a>,
    pub stdin: &'a mut dyn Read,
    pub stdout: &'a mut dyn Write,
}

impl<'a> App<'a> {
    pub fn run(&mut self) -> Result<()> {
        let matches = self.arg_matches.clone();
        // ^^ Need an independent copy of matches so we can still pass
        // the App struct through to subcommand imps.

        match matches.subcommand() {
            ("commit", Some(m)) => commit::run(self, &m),
            ("init", Some(m)) => init::run(self, &m),
            _ => unreachable!(),
            // unreachable: Should have exited out with appropriate help or
            // error message if no subcommand was given.
        }
    }

    #[cfg(test)]
    pub fn run_with_stdin_and_args<I, T>(stdin: Vec<u8>, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(|x| x.into()).collect();
        args.insert(0, OsString::from("pit"));

        let mut stdin = std::io::Cursor::new(stdin);
        let mut stdout = Vec::new();

        App {
            arg_matches: clap_app().get_matches_from_safe(args)?,
            stdin: &mut stdin,
            stdout: &mut stdout,
        }
        .run()?;

        Ok(stdout)
    }

    #[cfg(test)]
    pub fn run_with_args<I, T>(args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        App::run_with_stdin_and_args(Vec::new(), args)
    }
}

impl<'a> Write for App<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.stdout.flush()
    }
}
