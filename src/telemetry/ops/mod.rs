pub mod lookup;
pub mod scan;
pub mod serve;
