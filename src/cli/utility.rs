use std::io::{self, BufRead};

use atty::Stream;
use clap::ArgMatches;

use pigmix::parser::parse_recipe;
use pigmix::ColorMix;

use crate::error::{PigmixError, Result};

pub fn parse_recipe_arg(arg: &str) -> Result<Vec<ColorMix>> {
    parse_recipe(arg).ok_or_else(|| PigmixError::RecipeParseError(arg.into()))
}

/// The recipes given as command line arguments, or - when there are none -
/// the recipes read from standard input, one per line.
pub fn recipes_from_args_or_stdin(matches: &ArgMatches, arg: &str) -> Result<Vec<Vec<ColorMix>>> {
    if let Some(values) = matches.get_many::<String>(arg) {
        values.map(|value| parse_recipe_arg(value)).collect()
    } else {
        if atty::is(Stream::Stdin) {
            return Err(PigmixError::NoRecipesProvided);
        }

        let stdin = io::stdin();
        let mut recipes = Vec::new();
        for line in stdin.lock().lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            recipes.push(parse_recipe_arg(line)?);
        }

        if recipes.is_empty() {
            return Err(PigmixError::NoRecipesProvided);
        }

        Ok(recipes)
    }
}
