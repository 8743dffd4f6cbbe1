mod bridge;

pub use bridge::{start_bridge, start_dispatch};
