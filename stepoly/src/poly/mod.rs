mod coeff;
mod deg;
mod sparse;

pub use coeff::Coeff;
pub use deg::BiDeg;
pub use sparse::SparsePoly;
