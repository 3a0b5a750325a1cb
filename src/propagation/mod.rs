pub mod backprop;
pub mod forward;

pub use backprop::Backprop;
