pub mod debounce;

pub use debounce::Debounced;
