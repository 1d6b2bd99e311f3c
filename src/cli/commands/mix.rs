use crate::commands::prelude::*;

use pigmix::mix_colors;

pub struct MixCommand;

impl GenericCommand for MixCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        for recipe in recipes_from_args_or_stdin(matches, "recipe")? {
            let mixed = mix_colors(&recipe)?;
            out.show_color(config, &mixed)?;
        }

        Ok(())
    }
}
