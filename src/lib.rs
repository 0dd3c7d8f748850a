#![warn(bare_trait_objects)]

pub mod bezier;

pub mod consts;
pub use self::consts::*;
