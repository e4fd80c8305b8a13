//! Constants for the conversion pipeline.

// Upper bound on caller-chain length during stack walking.
// Real call stacks stay far below this; a longer chain means the
// source's caller relation loops back on itself.
pub const MAX_STACK_DEPTH: usize = 65_536;
