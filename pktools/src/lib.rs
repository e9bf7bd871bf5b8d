pub mod blocks;
pub mod inspect;
pub mod list;
pub mod load;
