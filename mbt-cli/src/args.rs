use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgErrorKind {
    UnrecognizedArgument,
    MissingArgument,
    NotAnInteger,
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgError {
    #[error("unrecognized arguments: {}", .0.join(" "))]
    UnrecognizedArgument(Vec<String>),
    #[error("the following arguments are required: {}", .0.join(", "))]
    MissingArgument(Vec<&'static str>),
    #[error("argument {name}: not an int ('{value}')")]
    NotAnInteger { name: &'static str, value: String },
    #[error("argument {name}: {value} not in valid range [{min}-{max}]")]
    OutOfRange {
        name: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },
}

impl ArgError {
    pub fn kind(&self) -> ArgErrorKind {
        match self {
            ArgError::UnrecognizedArgument(_) => ArgErrorKind::UnrecognizedArgument,
            ArgError::MissingArgument(_) => ArgErrorKind::MissingArgument,
            ArgError::NotAnInteger { .. } => ArgErrorKind::NotAnInteger,
            ArgError::OutOfRange { .. } => ArgErrorKind::OutOfRange,
        }
    }
}

/// One positional integer parameter of a command.
#[derive(Debug, Clone, Copy)]
pub struct Param {
    pub name: &'static str,
    pub min: i64,
    pub max: i64,
    /// `None` marks the parameter as required.
    pub default: Option<i64>,
}

impl Param {
    pub const fn required(name: &'static str, min: i64, max: i64) -> Self {
        Param {
            name,
            min,
            max,
            default: None,
        }
    }

    pub const fn optional(name: &'static str, min: i64, max: i64, default: i64) -> Self {
        Param {
            name,
            min,
            max,
            default: Some(default),
        }
    }

    fn convert(&self, token: &str) -> Result<i64, ArgError> {
        let value: i64 = token.parse().map_err(|_| ArgError::NotAnInteger {
            name: self.name,
            value: token.to_string(),
        })?;
        if !(self.min..=self.max).contains(&value) {
            return Err(ArgError::OutOfRange {
                name: self.name,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

pub const ADDRESS: Param = Param::optional("address", 0, 0xffff, 0);
pub const BIT_COUNT: Param = Param::optional("number", 1, 2000, 1);
pub const WORD_COUNT: Param = Param::optional("number", 1, 125, 1);
pub const WRITE_ADDRESS: Param = Param::required("address", 0, 0xffff);
pub const COIL_VALUE: Param = Param::required("value", 0, 1);
pub const REGISTER_VALUE: Param = Param::required("value", 0, 0xffff);
pub const PORT: Param = Param::required("port", 1, 0xffff);
pub const UNIT_ID: Param = Param::required("unit_id", 1, 255);

pub const READ_BITS: [Param; 2] = [ADDRESS, BIT_COUNT];
pub const READ_WORDS: [Param; 2] = [ADDRESS, WORD_COUNT];
pub const WRITE_COIL: [Param; 2] = [WRITE_ADDRESS, COIL_VALUE];
pub const WRITE_REGISTER: [Param; 2] = [WRITE_ADDRESS, REGISTER_VALUE];

/// Apply `schema` to already preprocessed tokens.
///
/// Present values are converted first, in order, so the first bad value is the
/// one reported. Missing required parameters come next, surplus tokens last.
pub fn parse<const N: usize>(tokens: &[String], schema: &[Param; N]) -> Result<[i64; N], ArgError> {
    let mut values = [0_i64; N];
    let mut missing = Vec::new();

    for (idx, param) in schema.iter().enumerate() {
        match (tokens.get(idx), param.default) {
            (Some(token), _) => values[idx] = param.convert(token)?,
            (None, Some(default)) => values[idx] = default,
            (None, None) => missing.push(param.name),
        }
    }

    if !missing.is_empty() {
        return Err(ArgError::MissingArgument(missing));
    }
    if tokens.len() > N {
        return Err(ArgError::UnrecognizedArgument(tokens[N..].to_vec()));
    }
    Ok(values)
}
