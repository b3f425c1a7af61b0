//! Graph-search strategies over a [`Maze`](mazewalk_core::Maze).
//!
//! This crate provides the traversal engine for the maze model:
//!
//! - **BFS** shortest-path search ([`Bfs`])
//! - **DFS** any-path search ([`Dfs`])
//! - **Bidirectional BFS** meeting-in-the-middle search ([`BidirectionalBfs`])
//! - **Reachability flood fill** ([`flood_fill`]), materializing the start
//!   cell's connected component as an explicit directed graph
//!
//! All three search strategies implement [`Strategy`] and return a [`Path`]:
//! an ordered cell sequence from start to destination inclusive, or an empty
//! vector when no path exists ("unreachable" is a normal outcome, not an
//! error). Each invocation owns its own frontier, visited set and parent map,
//! so searches on a shared maze may run concurrently.
//!
//! | Strategy | Result |
//! |---|---|
//! | [`Bfs`] | shortest path |
//! | [`Dfs`] | some path, no length guarantee |
//! | [`BidirectionalBfs`] | shortest or shortest+1, roughly half the work |

mod bfs;
mod bidir;
mod dfs;
mod reachability;
mod reconstruct;
mod traits;

pub use bfs::Bfs;
pub use bidir::BidirectionalBfs;
pub use dfs::Dfs;
pub use reachability::{ReachabilityGraph, flood_fill};
pub use reconstruct::{reconstruct, reconstruct_rev};
pub use traits::{Path, Strategy};
