pub mod fs_images;
pub mod postgres;
