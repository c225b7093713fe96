//! Host document contract
//!
//! The presentation surface (the thing that owns the text elements) is
//! environment plumbing. The core only needs an ordered list of candidate
//! nodes and read/write access to their display state, so that is the
//! whole contract.

use std::fmt::Debug;
use std::hash::Hash;

mod memory;

pub use memory::MemorySurface;

/// Access to the text-bearing elements of the active presentation surface.
///
/// Implementations must tolerate being called at any time. During
/// presentation startup and teardown the surface may not exist yet; that is
/// reported as an empty node list or `None` content, never as an error.
pub trait TextSurface {
    /// Stable identity for one text element
    type Id: Clone + Eq + Hash + Debug;

    /// Ordered sequence of current candidate text nodes. Empty when the
    /// surface is unavailable.
    fn visible_nodes(&self) -> Vec<Self::Id>;

    /// Current text content of a node, `None` if it no longer exists
    fn content(&self, id: &Self::Id) -> Option<String>;

    /// Replace a node's displayed text
    fn set_content(&mut self, id: &Self::Id, text: &str);

    /// Set or clear (`None`) a node's color override
    fn set_color(&mut self, id: &Self::Id, color: Option<&str>);
}
