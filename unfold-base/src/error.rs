// Nothing in the expression machinery can fail at run time: a bad
// composition is a type error and never gets this far. What can fail is
// the stuff around it, mostly configuration handed to the driver. For that
// we want:
//
// 1. Errors that carry a backtrace from the point they were made.
// 2. One place to put a breakpoint to trap every error soon after creation.
// 3. Every error emitted into the tracing system as it is created.

use std::borrow::Cow;
use std::fmt;
use backtrace_error::DynBacktraceError;
use tracing::error;

#[derive(Debug)]
#[allow(dead_code)]
pub struct Error {
    msg: String,
    backtrace: DynBacktraceError,
}
pub type Result<T> = std::result::Result<T, Error>;

struct SimpleErr(Cow<'static, str>);
impl fmt::Debug for SimpleErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl fmt::Display for SimpleErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for SimpleErr {}

impl<E: std::error::Error + Send + Sync + 'static> From<E> for Error {
    fn from(err: E) -> Error {
        Error::new(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.msg)
    }
}

impl Error {
    pub fn new<E: std::error::Error + Send + Sync + 'static>(err: E) -> Error {
        error!(target: "unfold", "{:?}", err);
        Error {
            msg: err.to_string(),
            backtrace: DynBacktraceError::from(err),
        }
    }
}

pub fn err(msg: impl Into<Cow<'static, str>>) -> Error {
    Error::new(SimpleErr(msg.into()))
}
