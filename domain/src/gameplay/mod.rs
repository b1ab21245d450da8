//! Gameplay data: the rows questions are drawn from.

pub mod row;
