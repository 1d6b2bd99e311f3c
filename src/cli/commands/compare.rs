use crate::commands::prelude::*;

use pigmix::{mix_and_compare, mix_colors};

pub struct CompareCommand;

impl GenericCommand for CompareCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, config: &Config) -> Result<()> {
        let recipe =
            parse_recipe_arg(matches.get_one::<String>("recipe").expect("required argument"))?;
        let target =
            parse_recipe_arg(matches.get_one::<String>("target").expect("required argument"))?;

        let score = mix_and_compare(&recipe, &target)?;

        if config.interactive_mode {
            // Identical recipes short-circuit the comparison before any
            // validation, so the blends are recomputed here just for display.
            if let (Ok(mixed), Ok(target_mixed)) = (mix_colors(&recipe), mix_colors(&target)) {
                out.show_color(config, &mixed)?;
                out.show_color(config, &target_mixed)?;
            }
        }

        out.show_score(config, score)
    }
}
