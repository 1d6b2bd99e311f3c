use crate::commands::prelude::*;

use pigmix::random::{self, strategies, RandomizationStrategy};
use pigmix::{recipe_to_string, Format};

pub struct RandomCommand;

impl GenericCommand for RandomCommand {
    fn run(&self, out: &mut Output, matches: &ArgMatches, _config: &Config) -> Result<()> {
        let count = matches.get_one::<String>("number").expect("default argument");
        let count = count
            .parse::<usize>()
            .map_err(|_| PigmixError::CouldNotParseNumber(count.clone()))?;
        if !(1..=100).contains(&count) {
            return Err(PigmixError::InvalidEntryCount(count));
        }

        let strategy_name = matches.get_one::<String>("strategy").expect("default argument");
        let strategy: Box<dyn RandomizationStrategy> = match strategy_name.as_str() {
            "rgb" => Box::new(strategies::UniformRgb),
            "gray" => Box::new(strategies::UniformGray),
            _ => unreachable!("Unknown randomization strategy"),
        };

        let recipe = random::random_recipe(strategy.as_ref(), count);
        writeln!(out.handle, "{}", recipe_to_string(&recipe, Format::Spaces))?;

        Ok(())
    }
}
