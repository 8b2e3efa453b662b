mod core;
mod error;

pub use self::core::*;
pub use self::error::*;

#[cfg(test)]
mod tests;
