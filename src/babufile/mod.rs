//! Definition source.
//!
//! A `Babufile` is a YAML document in the project directory listing deps
//! in declaration order, plus optional environment defaults:
//!
//! ```yaml
//! env:
//!   TARGET: main
//! deps:
//!   - name: branch
//!     args: [main]
//!     met: test "$(cat .branch)" = "$1"
//!     meet: echo "$1" > .branch
//!   - name: default
//!     requires: [branch]
//! ```
//!
//! Loading feeds each entry through [`Declarations`](crate::dep::Declarations)
//! so it follows the same finalize-on-next protocol as programmatic use.

pub mod loader;
pub mod schema;

pub use loader::{Babufile, BABUFILE_NAME};
pub use schema::{BabufileSchema, DepEntry};
