pub mod fs_adapter;

pub use fs_adapter::LocalStore;
