pub mod block_ids;
pub mod selection;
