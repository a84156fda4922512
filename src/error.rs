use std::error;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    StartOutsideGrid,
    GoalOutsideGrid,
    VisitOutsideContext,
    NoPath,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let message = match self {
            Error::StartOutsideGrid => "start coordinate is outside the grid",
            Error::GoalOutsideGrid => "goal coordinate is outside the grid",
            Error::VisitOutsideContext => "search context is smaller than the grid",
            Error::NoPath => "no path exists",
        };
        f.write_str(message)
    }
}

impl error::Error for Error {}
