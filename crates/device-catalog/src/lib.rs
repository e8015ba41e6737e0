//! device-catalog: YAML-driven catalog of supported EtherCAT devices
//!
//! Each file in the device documentation directory describes one driver. The
//! catalog loads them, sets aside the `TODO` placeholders, and renders the rest
//! as a markdown table.

mod types;
pub use types::*;

mod error;
pub use error::{CatalogError, Result};

mod loader;
pub use loader::{load_device_file, load_devices_dir};

mod catalog;
pub use catalog::{partition, Catalog};

mod render;
pub use render::{channels_cell, description_cell, render, render_markdown, vid_pid_cell};
