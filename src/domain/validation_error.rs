use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("missing field '{0}'")]
    MissingField(&'static str),
    #[error("field '{0}' must not be blank")]
    BlankField(&'static str),
    #[error("a geofence needs at least 3 coordinates, got {0}")]
    TooFewCoordinates(usize),
    #[error("{0}")]
    InvalidCoordinate(String),
}
