//! State Module - Observable state containers
//!
//! This module contains the reactive containers the navigator is built on:
//!
//! - **Store** - Shared value with get/set/update and synchronous subscribers
//! - **Signal bridge** - Mirror a store into a spark-signals `Signal`

mod store;

pub use store::*;
