#![allow(unused_imports)]

pub use anyhow::{Context, Error, bail, ensure};
pub use tracing::{debug, info, instrument, warn};

pub type Result<T = (), E = Error> = anyhow::Result<T, E>;
