pub mod place;
pub mod technician;
