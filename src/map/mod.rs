mod county;
mod io;
mod map;
mod precinct;

pub use county::{County, UNKNOWN_COUNTY};
pub use map::PrecinctMap;
pub use precinct::Precinct;
pub(crate) use precinct::dem_share;
