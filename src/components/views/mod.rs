mod albums;
mod track_list;

pub use albums::*;
pub use track_list::*;
