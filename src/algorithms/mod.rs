pub mod kmeans;
pub mod reconstruct;
pub mod score;
pub mod segment;
pub mod window;
