/*! Dataset processing

Contains functions to reduce and describe speech datasets:
- [sample] filters the raw dump and keeps a seeded random fraction of it,
- [check] computes an exploratory summary.
!*/
pub mod check;
pub mod sample;

pub use check::{summarize, FactionRange, Summary};
pub use sample::{sample, sample_fraction};
