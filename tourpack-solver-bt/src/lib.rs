//! Exact package planner for Tourpack.
//!
//! This crate provides [`BacktrackingPlanner`], the default implementation of
//! the [`Planner`](tourpack_core::Planner) trait. It enumerates every
//! attraction-disjoint combination of a region's tours by depth-first
//! backtracking, pruning branches that break the day or budget bound, and
//! returns the first combination found with the highest cultural value.
//!
//! The search is exponential in the number of tours per region. It performs
//! no I/O and reads the shared [`Catalog`](tourpack_core::Catalog) without
//! mutating it, so independent calls can run concurrently.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod planner;
mod search;

pub use planner::BacktrackingPlanner;
