//! The `giturlparse` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use giturlparse::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let parsed = try_parse("git@bitbucket.org:Org/Repo.git")?;
//! assert_eq!(parsed.platform(), Platform::Bitbucket);
//! assert_eq!(parsed.try_format(Protocol::Https)?, "https://bitbucket.org/Org/Repo.git");
//!
//! # Ok(())
//! # }
//! ```

pub use crate::errors::{Error, Result};
pub use crate::parsed::ParsedUrl;
pub use crate::platform::{MarkerKind, Platform, PlatformSpec};
pub use crate::protocol::Protocol;
pub use crate::{parse, try_parse, validate};
