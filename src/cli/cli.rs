use clap::{builder, crate_description, crate_name, crate_version, Arg, ArgAction, Command};

const RANDOM_STRATEGIES: &[&str] = &["rgb", "gray"];

pub fn build_cli() -> Command {
    let recipe_arg_help =
        "Recipes are lists of percentage-weighted colors joined by '+', such as \
         '50% red + 50% blue'. Colors can be specified as '#RRGGBB', RRGGBB, '#RGB', \
         'rgb(…, …, …)', 'gray(…)', or simply by the name of the color. If no recipe \
         argument is specified, recipes will be read from standard input, one per line.";
    let recipe_arg_long_help = color_print::cstr!(
        "Examples (all of these specify the same recipe):\
         \n  - <cyan>'50% red + 50% blue'</>\
         \n  - <cyan>'50% #f00 + 50% 0000ff'</>\
         \n  - <cyan>'50% rgb(255, 0, 0) + 50% rgb(0%, 0%, 100%)'</>\n\
         \n\
         Proportions may be fractional ('33.3% white') and are expected to \
         sum up to 100."
    );
    let recipe_arg = Arg::new("recipe")
        .help(recipe_arg_help)
        .long_help(format!(
            "{recipe_arg_help}\n\
             \n\
             {recipe_arg_long_help}"
        ))
        .value_name("RECIPE")
        .action(ArgAction::Append)
        .num_args(0..)
        .trailing_var_arg(true);

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .color(clap::ColorChoice::Auto)
        .allow_negative_numbers(true)
        .dont_collapse_args_in_usage(true)
        .max_term_width(100)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("mix")
                .alias("blend")
                .about("Blend recipes into their resulting colors")
                .long_about(color_print::cstr!(
                    "Blend each given recipe into its resulting color, weighting every \
                     color by its proportion.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>pigmix mix '25% white + 25% black + 50% red'</>"
                ))
                .arg(recipe_arg.clone()),
        )
        .subcommand(
            Command::new("compare")
                .alias("score")
                .about("Score the similarity between two recipes")
                .long_about(color_print::cstr!(
                    "Blend both recipes and score their similarity on a 0-100 scale, \
                     weighting the similarity of the resulting colors against how well \
                     the individual recipe entries pair up.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>pigmix compare '100% purple' '50% red + 50% blue'</>"
                ))
                .arg(
                    Arg::new("recipe")
                        .help("The candidate recipe")
                        .value_name("RECIPE")
                        .required(true),
                )
                .arg(
                    Arg::new("target")
                        .help("The target recipe to compare against")
                        .value_name("TARGET")
                        .required(true),
                ),
        )
        .subcommand(
            Command::new("random")
                .about("Generate a random recipe")
                .long_about(color_print::cstr!(
                    "Generate a random recipe whose integer proportions sum up to \
                     exactly 100.\n\n\
                     <green,bold>Example:</>\
                     \n  <cyan,bold>pigmix random -n 4 | pigmix mix</>"
                ))
                .arg(
                    Arg::new("strategy")
                        .long("strategy")
                        .short('s')
                        .help("Randomization strategy: rgb, gray [default: rgb]")
                        .long_help(color_print::cstr!(
                            "Randomization strategy:\
                             \n  rgb:   samples colors uniformly in RGB space\
                             \n  gray:  random gray tones (uniform)\n\
                             \n\
                             [default: rgb]"
                        ))
                        .value_parser(builder::PossibleValuesParser::new(RANDOM_STRATEGIES))
                        .hide_default_value(true)
                        .hide_possible_values(true)
                        .default_value("rgb")
                        .value_name("STRATEGY"),
                )
                .arg(
                    Arg::new("number")
                        .long("number")
                        .short('n')
                        .help("Number of entries in the recipe [between 1 and 100]")
                        .default_value("3")
                        .value_name("COUNT"),
                ),
        )
        .arg(
            Arg::new("color-mode")
                .long("color-mode")
                .short('m')
                .value_name("MODE")
                .help("Specify the terminal color mode: 24bit, 8bit, off, *auto*")
                .value_parser(["24bit", "8bit", "off", "auto"])
                .default_value(if output_vt100::try_init().is_ok() {
                    "auto"
                } else {
                    "off"
                })
                .hide_possible_values(true)
                .hide_default_value(true),
        )
        .arg(
            Arg::new("force-color")
                .short('f')
                .long("force-color")
                .action(ArgAction::SetTrue)
                .help("Alias for --color-mode=24bit"),
        )
}

#[test]
fn verify_cmd() {
    build_cli().debug_assert();
}
