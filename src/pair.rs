//! Ordered pair packing over shared-ownership handles.
//!
//! # Invariants
//! - The pair always holds exactly two elements, in argument order.
//! - Each element is a clone of the caller's handle, so for reference-counted
//!   handles the pair shares the original value rather than copying it.

use log::trace;

/// Number of elements in a packed pair.
pub const PAIR_LEN: usize = 2;

/// Packs two borrowed handles into an owned ordered pair.
///
/// Each handle is cloned into the pair. For `Arc`, `Rc` or a PyO3 `Bound`
/// that clone is a reference-count increment, which keeps both values alive
/// for as long as the returned pair.
pub fn pack_pair<A: Clone, B: Clone>(a: &A, b: &B) -> (A, B) {
    let pair = (a.clone(), b.clone());
    trace!("event=pack_pair module=pair status=ok len={PAIR_LEN}");
    pair
}
