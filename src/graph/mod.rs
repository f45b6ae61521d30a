//! Per-segment search state: the Nodes, the arena that owns them and the open set.

mod node;
pub use node::SearchNode;

mod node_list;
pub use node_list::NodeList;

mod open_list;
pub use open_list::OpenList;
