pub mod dispatch;
pub mod health;
pub mod markers;
pub mod technicians;
