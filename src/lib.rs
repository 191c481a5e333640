//! Hierarchical names made of delimited components.
//!
//! A [`Name`] is an ordered list of components separated by a single
//! [`Delimiter`] character. A component may contain the delimiter or the
//! [`ESCAPE_CHARACTER`] as long as they are masked, see [`codec`].

pub mod codec;
pub mod delimiter;
pub mod error;
#[macro_use]
pub mod macros;
pub mod name;
pub mod serde;

pub use delimiter::{DEFAULT_DELIMITER, Delimiter, ESCAPE_CHARACTER};
pub use error::{Error, ErrorKind};
pub use name::Name;

pub type Result<T> = std::result::Result<T, error::Error>;

#[cfg(test)]
#[ctor::ctor]
unsafe fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}
