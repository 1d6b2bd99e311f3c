use std::io;

use pigmix::MixError;

#[derive(Debug)]
pub enum PigmixError {
    RecipeParseError(String),
    InvalidRecipe(MixError),
    CouldNotParseNumber(String),
    InvalidEntryCount(usize),
    NoRecipesProvided,
    StdoutClosed,
    IoError(io::Error),
}

impl PigmixError {
    pub fn message(&self) -> String {
        match self {
            PigmixError::RecipeParseError(recipe) => {
                format!("could not parse recipe '{}'", recipe)
            }
            PigmixError::InvalidRecipe(err) => err.to_string(),
            PigmixError::CouldNotParseNumber(number) => {
                format!("could not parse number '{}'", number)
            }
            PigmixError::InvalidEntryCount(count) => format!(
                "the number of recipe entries must be between 1 and 100 (got {})",
                count
            ),
            PigmixError::NoRecipesProvided => {
                "no recipes specified - pass recipes as arguments or via standard input".into()
            }
            PigmixError::StdoutClosed => "output stream closed".into(),
            PigmixError::IoError(err) => format!("io error: {}", err),
        }
    }
}

impl From<io::Error> for PigmixError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::BrokenPipe => PigmixError::StdoutClosed,
            _ => PigmixError::IoError(err),
        }
    }
}

impl From<MixError> for PigmixError {
    fn from(err: MixError) -> Self {
        PigmixError::InvalidRecipe(err)
    }
}

pub type Result<T> = std::result::Result<T, PigmixError>;
