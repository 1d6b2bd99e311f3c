mod compare;
mod mix;
mod random;

pub mod prelude {
    pub use super::GenericCommand;
    pub use crate::config::Config;
    pub use crate::error::{PigmixError, Result};
    pub use crate::output::Output;
    pub use crate::utility::{parse_recipe_arg, recipes_from_args_or_stdin};
    pub use clap::ArgMatches;
    pub use std::io::Write;
}

use std::io;

use crate::config::Config;
use crate::error::Result;
use crate::output::Output;

use clap::ArgMatches;

use compare::CompareCommand;
use mix::MixCommand;
use random::RandomCommand;

pub trait GenericCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()>;
}

pub fn run(name: &str, matches: &ArgMatches, config: &Config) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout_lock = stdout.lock();
    let mut out = Output::new(&mut stdout_lock);

    let command: Box<dyn GenericCommand> = match name {
        "mix" => Box::new(MixCommand),
        "compare" => Box::new(CompareCommand),
        "random" => Box::new(RandomCommand),
        _ => unreachable!("unknown subcommand"),
    };

    command.run(&mut out, matches, config)
}
