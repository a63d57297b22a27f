pub mod carousel;
pub mod runway;
