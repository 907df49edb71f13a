pub mod f32;
pub mod io;
pub mod luma;
pub mod rgba;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::luma::{luma, luma_plane, luma_u8, mean_plane, mean_rgb};
pub use self::rgba::{RgbaImage, RgbaView};
pub use self::traits::{ImageView, Rows};
