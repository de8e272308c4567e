pub mod row;
pub mod series;
pub mod summary;

pub use row::*;
pub use series::*;
pub use summary::*;
