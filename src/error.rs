/// Reasons a weight list cannot be turned into an alias table.
///
/// All of these surface at construction; drawing never fails.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput {
    MissingWeights,
    EmptyWeights,
    NonNumericWeight { index: usize, found: String },
    NegativeWeight { index: usize, value: f64 },
}

impl std::fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInput::MissingWeights => write!(f, "no weights were supplied"),
            InvalidInput::EmptyWeights => write!(f, "weights slice is empty"),
            InvalidInput::NonNumericWeight { index, found } => {
                write!(
                    f,
                    "weight at index {index} is not a finite number: {found:?}"
                )
            }
            InvalidInput::NegativeWeight { index, value } => {
                write!(
                    f,
                    "weights contain a negative value at index {index}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for InvalidInput {}
