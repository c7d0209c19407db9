mod tile;

pub use tile::TileCard;
