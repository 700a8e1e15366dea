//! Wire types shared by the backend handlers, its views and its tests.

pub mod domain;
pub mod shared;
pub mod usecases;
