use core::str::{FromStr, Split};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    UnknownPath,
    ExpectValue,
    InvalidValue,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let err_string = match self {
            Self::UnknownPath => "Specified path not exists or invalid",
            Self::ExpectValue => "Expect value",
            Self::InvalidValue => "Value not valid",
        };
        write!(f, "{}", err_string)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Value<'a>(pub Option<&'a str>);

impl<'a> Value<'a> {
    pub fn of(string: &'a str) -> Value<'a> {
        Value(Some(string))
    }

    pub fn parse<T: FromStr>(&self) -> Result<T, Error> {
        match self.0 {
            Some(s) => FromStr::from_str(s).map_err(|_| Error::InvalidValue),
            None => Err(Error::ExpectValue),
        }
    }

    pub fn parse_or<T: FromStr>(&self, or: T) -> Result<T, Error> {
        match self.0 {
            Some(s) => FromStr::from_str(s).map_err(|_| Error::InvalidValue),
            None => Ok(or),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Path<'a>(Split<'a, char>);

impl<'a> Path<'a> {
    pub fn new(path: &'a str) -> Self {
        Self(path.split('.'))
    }

    pub fn str(&mut self) -> Result<&'a str, Error> {
        self.0.next().filter(|s| !s.is_empty()).ok_or(Error::UnknownPath)
    }
}

pub trait PathSet {
    fn set(&mut self, path: Path, value: Value) -> Result<(), Error>;

    /// Applies an assignment like `envelop.alpha-max=15`, a bare path sets it without value
    fn assign(&mut self, assignment: &str) -> Result<(), Error> {
        let mut splitted = assignment.splitn(2, '=');
        let path = splitted.next().map(str::trim).unwrap_or_default();
        let value = splitted.next().map(str::trim);
        self.set(Path::new(path), Value(value))
    }
}
