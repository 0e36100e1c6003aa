pub mod banner;
pub mod input;
pub mod menu;

// Re-export the interactive surface for convenience
pub use banner::print_banner;
pub use input::{collect_distribution, parse_entry};
pub use menu::{MenuChoice, run};
