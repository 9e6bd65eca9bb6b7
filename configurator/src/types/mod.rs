pub mod node;
pub mod triple;

pub use node::{LiteralType, Node};
pub use triple::{Triple, TripleRef};
