// Dashboard data lifecycle: concurrent loading and the view state it settles into.
pub mod loader;
pub mod state;
