//! Operations, grouped by action family. Each is a synchronous, in-place
//! mutation of the exclusively owned state value; unknown target ids are
//! silent no-ops.

pub mod metadata;
pub mod query_specification;
pub mod rdb_specification;
