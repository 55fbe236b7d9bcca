pub mod elements;
pub mod maneuvers;
pub mod transfer;

pub use elements::KeplerianElements;
pub use maneuvers::{bielliptic, hohmann, BiellipticTransfer, HohmannTransfer};
pub use transfer::{propagate_hohmann, TransferPropagation};
