/*!
# Graph Algorithms

This module provides the path searches built on top of [`Graph`](crate::repr::Graph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use matgraphs::algo::*;
```
Both searches treat every nonzero matrix entry as an unweighted edge.
*/

mod path;
mod traversal;

use crate::prelude::*;

pub use path::*;
pub use traversal::*;
