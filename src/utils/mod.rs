mod errors;

pub use errors::Error;

pub type CinedashResult<T> = Result<T, Error>;
