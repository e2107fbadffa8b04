mod arena;
mod handle;
mod iter;
mod node;
mod raw_avl_tree_map;
mod size;

pub(crate) use arena::Arena;
pub(crate) use handle::Handle;
pub(crate) use iter::RawIter;
pub(crate) use node::Node;
pub(crate) use raw_avl_tree_map::RawAvlTreeMap;
