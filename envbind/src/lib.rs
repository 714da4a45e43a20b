//! Bind environment variables to struct fields
//!
//! `envbind` populates a struct in place from environment variables, driven by
//! `#[env(...)]` annotations on its fields. Nested structs become dotted
//! variable names (`server.port`), missing values fall back to declared
//! defaults, and list fields are split on a separator.
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env(name = "host", default = "127.0.0.1")]
//!     pub host: String,
//!
//!     #[env(name = "port", default = "8080")]
//!     pub port: u16,
//!
//!     #[env(name = "tags")]
//!     pub tags: Vec<String>,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("tags", "a,b");
//! let mut config = Config::default();
//! envbind::bind(&mut config)?;
//! #     assert_eq!(config.host, "127.0.0.1");
//! #     assert_eq!(config.port, 8080);
//! #     assert_eq!(config.tags, ["a", "b"]);
//! #     std::env::remove_var("tags");
//! #     Ok(())
//! # }
//! ```
//!
//! # Conversion
//!
//! Conversion is best-effort and never fails the bind:
//!
//! - `bool`: `true` when the value is non-empty. `flag=0` and `flag=false`
//!   are both `true`; an unset or empty variable is `false`.
//! - `String`: the value verbatim.
//! - Integers and floats: decimal parse. A malformed or out-of-range value
//!   leaves the field unchanged.
//! - `Vec<T>`: the value is split on the separator and each element converted
//!   as above, numeric elements after trimming whitespace. Elements that do
//!   not convert are dropped.
//! - `Option<T>`: allocated with `T::default()` if `None`, then bound as `T`.
//!
//! # Attributes
//!
//! ## `#[env(name = "...")]`
//!
//! The variable name, or the path segment for a nested struct. Fields without
//! a name are skipped, except nested structs, whose fields are then read at
//! the parent's level.
//!
//! ```rust
//! # use envbind::EnvBind;
//! #[derive(Default, EnvBind)]
//! struct Inner {
//!     #[env(name = "leaf")]
//!     pub leaf: i32,
//! }
//!
//! #[derive(Default, EnvBind)]
//! struct Outer {
//!     // Reads `inner.leaf`
//!     #[env(name = "inner")]
//!     pub inner: Inner,
//!
//!     // Reads `leaf`
//!     pub spliced: Inner,
//! }
//! ```
//!
//! ## `#[env(default = "...")]`
//!
//! Literal used when the variable is unset or empty.
//!
//! ## `#[env(sep = "...")]`
//!
//! Separator for `Vec` fields, `","` when omitted. An empty separator always
//! yields an empty `Vec`.
//!
//! ## `#[env(skip)]`
//!
//! Never touch the field, even if its type is supported.
//!
//! ## `#[env(prefix = "...")]` (struct-level)
//!
//! Path prefix used when the struct is bound at the top level. Ignored when
//! the struct is nested inside another one.
//!
//! # Unsupported shapes
//!
//! Only structs with named fields can derive `EnvBind`:
//!
//! ```compile_fail
//! use envbind::EnvBind;
//!
//! #[derive(EnvBind)]
//! enum Mode {
//!     Debug,
//!     Release,
//! }
//! ```
//!
//! ```compile_fail
//! use envbind::EnvBind;
//!
//! #[derive(EnvBind)]
//! struct Pair(i32, i32);
//! ```
//!
//! Unknown options are rejected:
//!
//! ```compile_fail
//! use envbind::EnvBind;
//!
//! #[derive(EnvBind)]
//! struct Config {
//!     #[env(name = "x", envdef = "1")]
//!     pub x: i32,
//! }
//! ```
//!
//! # Other field types
//!
//! Fields whose type the binder cannot convert are left untouched, annotated
//! or not:
//!
//! ```rust
//! use envbind::EnvBind;
//! use std::path::PathBuf;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env(name = "server.port", default = "8080")]
//!     pub port: u16,
//!
//!     pub data_dir: PathBuf,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::from_env()?;
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.data_dir, PathBuf::new());
//! #     Ok(())
//! # }
//! ```

// Lets derive-generated `::envbind` paths resolve inside this crate's tests.
extern crate self as envbind;

pub mod convert;
pub mod de;
pub mod registry;
pub mod source;

mod error;

pub use convert::Scalar;
pub use de::{EnvField, FieldSpec};
pub use envbind_derive::EnvBind;
pub use error::BindError;
pub use registry::Registry;
pub use source::{EnvSource, ProcessEnv};

/// A record whose fields can be populated from an environment.
///
/// Usually implemented with `#[derive(EnvBind)]`.
pub trait EnvBind {
    /// Path prefix used when this record is bound at the top level.
    const PREFIX: &'static str = "";

    /// Bind every field of this record below `prefix`.
    ///
    /// # Errors
    ///
    /// Returns the first structural error raised by a nested field. Fields
    /// bound before the failure keep their new values.
    fn bind_prefixed(&mut self, prefix: &str, env: &dyn EnvSource) -> Result<(), BindError>;

    /// Bind from the process environment.
    fn bind(&mut self) -> Result<(), BindError> {
        self.bind_from(&ProcessEnv)
    }

    /// Bind from `env`.
    fn bind_from(&mut self, env: &dyn EnvSource) -> Result<(), BindError> {
        self.bind_prefixed(Self::PREFIX, env)
    }

    /// Create a default record and bind it from the process environment.
    fn from_env() -> Result<Self, BindError>
    where
        Self: Default + Sized,
    {
        let mut record = Self::default();
        record.bind()?;
        Ok(record)
    }
}

/// Bind `target` from the process environment.
///
/// # Errors
///
/// See [`EnvBind::bind_prefixed`].
pub fn bind<T: EnvBind + ?Sized>(target: &mut T) -> Result<(), BindError> {
    target.bind()
}

/// Bind `target` from an arbitrary [`EnvSource`].
///
/// # Errors
///
/// See [`EnvBind::bind_prefixed`].
pub fn bind_from<T: EnvBind + ?Sized>(
    target: &mut T,
    env: &dyn EnvSource,
) -> Result<(), BindError> {
    target.bind_from(env)
}
