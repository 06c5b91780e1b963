//! Command implementations for marquee

pub mod dispatch;
pub mod recommend;
pub mod tags;
pub mod vocab;
