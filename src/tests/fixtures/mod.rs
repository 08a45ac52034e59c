pub mod clock;
pub mod intervals;
pub mod records;
pub mod state;
pub mod worklogs;
