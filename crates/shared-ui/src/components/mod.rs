// Standalone components
pub mod button;
pub mod card;
pub mod data_table;
pub mod page_header;

// Stateful pieces shared by the home view
pub mod loader;
pub mod tab_bar;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use loader::*;
pub use page_header::*;
pub use tab_bar::*;
