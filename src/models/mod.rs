// Re-export all models from their respective modules
pub mod content;
pub mod package;
pub mod site;
pub mod todolist;
pub mod user;

// Re-export commonly used models
pub use content::*;
pub use package::*;
pub use site::*;
pub use todolist::*;
pub use user::*;
