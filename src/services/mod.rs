pub mod confirm;
pub mod image;

pub use confirm::{Confirm, FixedConfirm};
pub use image::{DataUrlEncoder, ImageEncoder, ImageFile};
