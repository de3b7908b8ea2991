//! CLI command implementations.
//!
//! - **visual**: decode aurora photographs and score them as a batch
//! - **manual**: score manually reported observation descriptors
//! - **init**: write a default `.aurora-risk.toml`

pub mod init;
pub mod manual;
pub mod visual;

pub use init::init_config;
pub use manual::{build_manual_report, handle_manual, ManualConfig};
pub use visual::{build_visual_report, handle_visual, load_images, VisualConfig};
