//! Backend communication services.
//!
//! One service per endpoint:
//!
//! - [`upload`] - multipart staging round-trip (`POST /upload`)
//! - [`process`] - batch processing round-trip (`POST /process`)

pub mod process;
pub mod upload;

pub use process::*;
pub use upload::*;
