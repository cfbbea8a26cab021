pub mod debounce;
pub mod scroll;
